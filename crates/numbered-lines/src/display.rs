use std::fmt;

use crate::numbered::NumberedLines;

/// Marker line standing in for the lines a preview leaves out.
pub const ELLIPSIS: &str = "…";

/// How much of a long [`NumberedLines`] a preview shows.
///
/// Values with at most `head + tail + buffer` lines are shown whole; longer
/// ones show the first `head` and last `tail` lines around an [`ELLIPSIS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLimits {
    pub head: usize,
    pub tail: usize,
    pub buffer: usize,
}

impl PreviewLimits {
    pub fn threshold(&self) -> usize {
        self.head
            .saturating_add(self.tail)
            .saturating_add(self.buffer)
    }
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            head: 5,
            tail: 5,
            buffer: 20,
        }
    }
}

impl NumberedLines {
    /// Zero-pad width wide enough for the largest line number, at least 2.
    pub fn pad_width(&self) -> usize {
        let max = self.index().iter().max().copied().unwrap_or(0);
        digits(max).max(2)
    }

    /// Each line prefixed with its zero-padded original number, `"07: text"`.
    ///
    /// Uses [`pad_width`](Self::pad_width) when `pad` is `None`. A pad
    /// narrower than a number never truncates it.
    pub fn format(&self, pad: Option<usize>) -> Vec<String> {
        let pad = pad.unwrap_or_else(|| self.pad_width());
        self.entries()
            .map(|(n, line)| format!("{n:0pad$}: {line}"))
            .collect()
    }

    /// Formatted lines, shortened around an [`ELLIPSIS`] when longer than
    /// `limits` allows.
    ///
    /// Without a fixed `pad`, the head and tail are padded independently.
    pub fn preview(&self, limits: &PreviewLimits, pad: Option<usize>) -> Vec<String> {
        if self.len() <= limits.threshold() {
            return self.format(pad);
        }

        let mut out = self.head(limits.head).format(pad);
        out.push(ELLIPSIS.to_string());
        out.extend(self.tail(limits.tail).format(pad));
        out
    }
}

fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

impl fmt::Display for NumberedLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let preview = self.preview(&PreviewLimits::default(), None);
        write!(f, "NumberedLines([\n  {}\n])", preview.join("\n  "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(9, 1)]
    #[case(10, 2)]
    #[case(99, 2)]
    #[case(100, 3)]
    #[case(123_456, 6)]
    fn counts_decimal_digits(#[case] n: usize, #[case] expected: usize) {
        assert_eq!(digits(n), expected);
    }

    #[test]
    fn pad_width_is_at_least_two() {
        assert_eq!(NumberedLines::default().pad_width(), 2);
        assert_eq!(NumberedLines::from_text("a").pad_width(), 2);
    }

    #[test]
    fn pad_width_fits_the_largest_number() {
        let nl = NumberedLines::with_index(["a\nb"], [1500, 3]).unwrap();
        assert_eq!(nl.pad_width(), 4);
        assert_eq!(nl.format(None), vec!["1500: a", "0003: b"]);
    }

    #[test]
    fn explicit_pad_never_truncates() {
        let nl = NumberedLines::with_index(["a"], [123]).unwrap();
        assert_eq!(nl.format(Some(1)), vec!["123: a"]);
        assert_eq!(nl.format(Some(5)), vec!["00123: a"]);
    }

    #[test]
    fn short_values_preview_whole() {
        let nl = NumberedLines::from_pages((0..30).map(|i| format!("line {i}")));
        let preview = nl.preview(&PreviewLimits::default(), None);
        assert_eq!(preview.len(), 30);
        assert!(!preview.contains(&ELLIPSIS.to_string()));
    }

    #[test]
    fn long_values_preview_head_and_tail() {
        let nl = NumberedLines::from_pages((0..31).map(|i| format!("line {i}")));
        let preview = nl.preview(&PreviewLimits::default(), None);
        assert_eq!(preview.len(), 11);
        assert_eq!(preview[0], "00: line 0");
        assert_eq!(preview[4], "04: line 4");
        assert_eq!(preview[5], ELLIPSIS);
        assert_eq!(preview[6], "26: line 26");
        assert_eq!(preview[10], "30: line 30");
    }

    #[test]
    fn custom_limits_shrink_preview() {
        let nl = NumberedLines::from_pages(["a", "b", "c", "d"]);
        let limits = PreviewLimits {
            head: 1,
            tail: 1,
            buffer: 0,
        };
        assert_eq!(nl.preview(&limits, None), vec!["00: a", "…", "03: d"]);
        assert_eq!(nl.preview(&limits, Some(3)), vec!["000: a", "…", "003: d"]);
    }
}
