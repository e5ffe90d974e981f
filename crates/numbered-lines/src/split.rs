//! Line splitting.
//!
//! Lines end at LF, CR, CRLF, vertical tab, form feed, the ASCII file, group
//! and record separators, NEL, and the Unicode line and paragraph separators.
//! CRLF counts as a single boundary and terminators are never part of a line.

use std::iter::FusedIterator;

/// Returns true if `c` terminates a line.
pub fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits `text` into lines without their terminators.
///
/// A trailing terminator does not produce a trailing empty line, and empty
/// input produces no lines at all.
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.char_indices().find(|&(_, c)| is_line_boundary(c)) {
            Some((at, c)) => {
                let line = &self.rest[..at];
                let mut end = at + c.len_utf8();
                if c == '\r' && self.rest[end..].starts_with('\n') {
                    end += 1;
                }
                self.rest = &self.rest[end..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

impl FusedIterator for SplitLines<'_> {}
