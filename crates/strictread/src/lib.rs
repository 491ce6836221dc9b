//! Strict-format input reading for competitive-programming validators,
//! checkers, and interactors.
//!
//! A [`Reader`] decides, for every primitive read, whether the stream
//! conforms to a strict textual grammar: tokens separated by single spaces,
//! lines separated by exactly one line terminator, and integers and floats in
//! canonical form. Failures fall in three classes (see [`Violation`]):
//! malformed text, well-formed values outside their declared range, and
//! failures of the tooling itself. Each maps to a fixed [`Verdict`] and
//! process exit status.
//!
//! ```rust
//! use strictread::{StandardReader, Verdict};
//!
//! let mut reader = StandardReader::try_new(&b"3\n 1 2  3 \r\n"[..]).unwrap();
//! let n = reader.try_read_single_int::<usize>(1..=10).unwrap();
//! let values = reader.try_read_ints::<i64>(n, ..).unwrap();
//! assert_eq!(values, [1, 2, 3]);
//! reader.try_read_eof().unwrap();
//!
//! let mut reader = StandardReader::try_new(&b"007\n"[..]).unwrap();
//! let err = reader.try_read_int::<i32>(..).unwrap_err();
//! assert_eq!(reader.verdict_for(&err), Verdict::PresentationError);
//! ```

#![allow(missing_docs)]

mod buffer;
mod class;
mod error;
pub mod mode;
mod number;
mod options;
mod reader;
pub mod verdict;

#[cfg(test)]
mod tests;

pub use error::{ErrorSource, FormatError, ReadError, ToolingError, ValueError, Violation};
pub use mode::Mode;
pub use number::{Float, Integer, Magnitude};
pub use options::ReaderOptions;
pub use reader::{
    IdenticalInteractor, IdenticalReader, Reader, StandardInteractor, StandardReader, Validator,
};
pub use verdict::{ExitProtocol, Verdict};
