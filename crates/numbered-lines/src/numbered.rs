use std::ops::{Bound, Index, RangeBounds};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::slice::Slice;
use crate::split::split_lines;

/// Text lines paired with the line numbers they had in the original text.
///
/// Slicing and filtering return new values that keep the original numbers;
/// only [`reset_index`](Self::reset_index) renumbers. Nothing mutates a value
/// after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "crate::raw::RawInput", into = "crate::raw::StoredLines")]
pub struct NumberedLines {
    lines: Vec<String>,
    index: Vec<usize>,
}

impl NumberedLines {
    /// Splits `text` into lines numbered from zero.
    pub fn from_text(text: &str) -> Self {
        Self::from_pages([text])
    }

    /// Splits every page into lines and numbers the flattened result from zero.
    pub fn from_pages<I>(pages: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let lines = flatten(pages);
        let index = (0..lines.len()).collect();
        Self { lines, index }
    }

    /// Splits and flattens `pages` like [`from_pages`](Self::from_pages) but
    /// attaches the given line numbers instead of counting from zero.
    pub fn with_index<I, J>(pages: I, index: J) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator<Item = usize>,
    {
        Self::from_parts(flatten(pages), index.into_iter().collect())
    }

    /// Takes `lines` as they are, without splitting, together with their
    /// line numbers.
    pub fn from_parts(lines: Vec<String>, index: Vec<usize>) -> Result<Self> {
        if lines.len() != index.len() {
            return Err(Error::LengthMismatch {
                lines: lines.len(),
                index: index.len(),
            });
        }
        Ok(Self { lines, index })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Original line number of every line, in order.
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.lines.iter(),
        }
    }

    /// `(original line number, text)` pairs in order.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = (usize, &str)> + '_ {
        self.index
            .iter()
            .copied()
            .zip(self.lines.iter().map(String::as_str))
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.lines.get(position).map(String::as_str)
    }

    /// Text of the line at `position`.
    pub fn line(&self, position: usize) -> Result<&str> {
        self.get(position).ok_or(Error::OutOfRange {
            position,
            len: self.len(),
        })
    }

    pub fn original_number(&self, position: usize) -> Option<usize> {
        self.index.get(position).copied()
    }

    /// Lines in `range`, keeping their original numbers.
    ///
    /// Bounds past the end clamp to the end; a range that ends before it
    /// starts selects nothing.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> Self {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(len);
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        }
        .clamp(start, len);

        Self {
            lines: self.lines[start..end].to_vec(),
            index: self.index[start..end].to_vec(),
        }
    }

    /// Lines picked by `slice`, keeping their original numbers.
    pub fn slice_by(&self, slice: Slice) -> Self {
        let positions = slice.positions(self.len());
        let mut lines = Vec::with_capacity(positions.len());
        let mut index = Vec::with_capacity(positions.len());
        for position in positions {
            lines.push(self.lines[position].clone());
            index.push(self.index[position]);
        }
        Self { lines, index }
    }

    /// The first `n` lines.
    pub fn head(&self, n: usize) -> Self {
        self.slice(..n)
    }

    /// The last `n` lines.
    pub fn tail(&self, n: usize) -> Self {
        self.slice(self.len().saturating_sub(n)..)
    }

    /// Same lines, numbered from zero.
    pub fn reset_index(&self) -> Self {
        Self::from_parts_unchecked(self.lines.clone(), (0..self.len()).collect())
    }

    /// Lines where `regex` matches anywhere, with their original numbers.
    pub fn filter(&self, regex: &Regex) -> Self {
        self.filter_with(|line| regex.is_match(line))
    }

    /// Lines where `regex` does not match, with their original numbers.
    pub fn filter_out(&self, regex: &Regex) -> Self {
        self.filter_out_with(|line| regex.is_match(line))
    }

    pub fn filter_with<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        let (index, lines): (Vec<usize>, Vec<String>) = self
            .entries()
            .filter(|&(_, line)| keep(line))
            .map(|(n, line)| (n, line.to_owned()))
            .unzip();
        Self::from_parts_unchecked(lines, index)
    }

    pub fn filter_out_with<F>(&self, mut reject: F) -> Self
    where
        F: FnMut(&str) -> bool,
    {
        self.filter_with(|line| !reject(line))
    }

    /// A detached copy of the line texts.
    pub fn to_list(&self) -> Vec<String> {
        self.lines.clone()
    }

    /// Gives up the value, returning `(lines, index)`.
    pub fn into_parts(self) -> (Vec<String>, Vec<usize>) {
        (self.lines, self.index)
    }

    pub(crate) fn from_parts_unchecked(lines: Vec<String>, index: Vec<usize>) -> Self {
        debug_assert_eq!(lines.len(), index.len());
        Self { lines, index }
    }
}

fn flatten<I>(pages: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut lines = Vec::new();
    for page in pages {
        lines.extend(split_lines(page.as_ref()).map(str::to_owned));
    }
    lines
}

impl Index<usize> for NumberedLines {
    type Output = str;

    fn index(&self, position: usize) -> &str {
        &self.lines[position]
    }
}

impl From<&str> for NumberedLines {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for NumberedLines {
    fn from(text: String) -> Self {
        Self::from_text(&text)
    }
}

impl From<Vec<String>> for NumberedLines {
    fn from(pages: Vec<String>) -> Self {
        Self::from_pages(pages)
    }
}

impl<S: AsRef<str>> FromIterator<S> for NumberedLines {
    fn from_iter<T: IntoIterator<Item = S>>(pages: T) -> Self {
        Self::from_pages(pages)
    }
}

/// Borrowing iterator over line texts.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(String::as_str)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a NumberedLines {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl IntoIterator for NumberedLines {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> NumberedLines {
        NumberedLines::from_pages(["a", "b", "c", "d", "e"])
    }

    #[test]
    fn from_text_numbers_from_zero() {
        let nl = NumberedLines::from_text("a\nb\nc");
        assert_eq!(nl.index(), &[0, 1, 2]);
        assert_eq!(nl.iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn from_pages_flattens_in_order() {
        let nl = NumberedLines::from_pages(["p1 a\np1 b", "", "p3 a\n"]);
        assert_eq!(nl.lines(), &["p1 a", "p1 b", "p3 a"]);
        assert_eq!(nl.index(), &[0, 1, 2]);
    }

    #[test]
    fn with_index_keeps_given_numbers() {
        let nl = NumberedLines::with_index(["x\ny"], [10, 12]).unwrap();
        assert_eq!(nl.index(), &[10, 12]);
        assert_eq!(nl.lines(), &["x", "y"]);
    }

    #[test]
    fn with_index_checks_length_after_splitting() {
        let err = NumberedLines::with_index(["x\ny"], [3]).unwrap_err();
        assert_eq!(err, Error::LengthMismatch { lines: 2, index: 1 });
    }

    #[test]
    fn from_parts_does_not_split() {
        let nl = NumberedLines::from_parts(vec!["a\nb".to_string()], vec![7]).unwrap();
        assert_eq!(nl.len(), 1);
        assert_eq!(&nl[0], "a\nb");
    }

    #[test]
    fn line_rejects_out_of_range_positions() {
        let nl = sample();
        assert_eq!(nl.line(4), Ok("e"));
        assert_eq!(nl.line(5), Err(Error::OutOfRange { position: 5, len: 5 }));
        assert_eq!(nl.get(5), None);
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn slice_clamps_bounds() {
        let nl = sample();
        assert_eq!(nl.slice(3..100).index(), &[3, 4]);
        assert_eq!(nl.slice(4..2).len(), 0);
        assert_eq!(nl.slice(9..).len(), 0);
        assert_eq!(nl.slice(..=1).index(), &[0, 1]);
    }

    #[test]
    fn slice_by_walks_backwards() {
        let nl = sample();
        let rev = nl.slice_by(Slice::FULL.step(-2));
        assert_eq!(rev.lines(), &["e", "c", "a"]);
        assert_eq!(rev.index(), &[4, 2, 0]);
    }

    #[test]
    fn head_and_tail_clamp() {
        let nl = sample();
        assert_eq!(nl.head(2).index(), &[0, 1]);
        assert_eq!(nl.tail(2).index(), &[3, 4]);
        assert_eq!(nl.tail(50).len(), 5);
    }

    #[test]
    fn original_number_follows_slices() {
        let nl = sample().slice(2..);
        assert_eq!(nl.original_number(0), Some(2));
        assert_eq!(nl.original_number(3), None);
    }

    #[test]
    fn iteration_is_restartable() {
        let nl = sample();
        let first: Vec<&str> = nl.iter().collect();
        let second: Vec<&str> = (&nl).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(nl.iter().rev().next(), Some("e"));
    }

    #[test]
    fn into_parts_returns_both_sequences() {
        let (lines, index) = sample().slice(1..3).into_parts();
        assert_eq!(lines, vec!["b", "c"]);
        assert_eq!(index, vec![1, 2]);
    }

    #[test]
    fn collects_from_iterator() {
        let nl: NumberedLines = vec!["a\nb", "c"].into_iter().collect();
        assert_eq!(nl.lines(), &["a", "b", "c"]);
    }
}
