//! Text lines that remember where they came from.
//!
//! [`NumberedLines`] splits text into lines and pairs every line with its
//! original line number. Slices and filters return new values that keep those
//! numbers, so a line that survives any amount of narrowing can still be cited
//! by the number it had in the source.
//!
//! ```
//! use numbered_lines::NumberedLines;
//! use regex::Regex;
//!
//! let nl = NumberedLines::from_text("title\n\nbody\n   \nend");
//! let kept = nl.filter_out(&Regex::new(r"^\s*$").unwrap());
//! assert_eq!(kept.index(), &[0, 2, 4]);
//! assert_eq!(kept.format(None), vec!["00: title", "02: body", "04: end"]);
//! assert_eq!(kept.reset_index().index(), &[0, 1, 2]);
//! ```

pub mod display;
pub mod error;
pub mod numbered;
pub mod raw;
pub mod slice;
pub mod split;

pub use display::{ELLIPSIS, PreviewLimits};
pub use error::{Error, Result};
pub use numbered::{Iter, NumberedLines};
pub use raw::{RawInput, RawItem, RawLines, RawText, StoredLines};
pub use slice::{Positions, Slice};
pub use split::{SplitLines, split_lines};
