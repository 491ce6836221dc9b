use thiserror::Error;

use crate::verdict::Verdict;

/// An error raised by a read operation, tagged with the byte offset of the
/// read cursor when the violation was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct ReadError {
    pub(crate) kind: ErrorSource,
    pub(crate) offset: usize,
}

impl ReadError {
    pub(crate) fn new(source: impl Into<ErrorSource>, offset: usize) -> Self {
        Self {
            kind: source.into(),
            offset,
        }
    }

    /// The underlying cause of the failure.
    #[must_use]
    pub fn cause(&self) -> &ErrorSource {
        &self.kind
    }

    /// Offset of the read cursor, in bytes from the start of the stream.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Which tier of the taxonomy the failure belongs to.
    #[must_use]
    pub fn violation(&self) -> Violation {
        match self.kind {
            ErrorSource::Format(_) => Violation::Format,
            ErrorSource::Value(_) => Violation::Value,
            ErrorSource::Tooling(_) => Violation::Tooling,
        }
    }

    /// The verdict this failure terminates with.
    ///
    /// In a judge context every failure is the judge's own bug, so format and
    /// value violations are reported as [`Verdict::InternalError`] too.
    #[must_use]
    pub fn verdict(&self, judge: bool) -> Verdict {
        match self.violation() {
            Violation::Format if !judge => Verdict::PresentationError,
            Violation::Value if !judge => Verdict::WrongAnswer,
            _ => Verdict::InternalError,
        }
    }
}

/// The three failure classes a read can end in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// The bytes do not match the expected grammar.
    Format,
    /// Well-formed, but outside the declared range.
    Value,
    /// A failure of the reader or its caller, not of the analyzed stream.
    Tooling,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorSource {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error(transparent)]
    Tooling(#[from] ToolingError),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("less output than expected or invalid character")]
    InvalidCharacter,
    #[error("less output than expected")]
    LessOutput,
    #[error("more output than expected")]
    MoreOutput,
    #[error("incorrect line separation")]
    LineSeparation,
    #[error("whitespace error: expected {:?}", char::from(*expected))]
    Whitespace { expected: u8 },
    #[error("invalid integer")]
    InvalidInteger,
    #[error("integer overflow")]
    IntegerOverflow,
    #[error("invalid float")]
    InvalidFloat,
    #[error("float must have exactly {expected} digits after the decimal, found {found}")]
    FloatPrecision { expected: usize, found: usize },
    #[error("output limit exceeded ({limit} bytes)")]
    OutputLimit { limit: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("integer {0} out of bounds")]
    IntegerOutOfBounds(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolingError {
    #[error("bad alloc: could not grow buffer to {requested} bytes")]
    Alloc { requested: usize },
    #[error("read failed: {0}")]
    Io(String),
    #[error("non-positive array size")]
    EmptyArray,
}
