//! The strict reader.
//!
//! Every read operation comes in two forms. `try_*` methods return a
//! [`ReadError`] and leave the decision to the caller; the plain methods turn
//! any error into a verdict and terminate the process through the reader's
//! [`ExitProtocol`]. A reader is not meant to be used after a failed read:
//! the cursor is left wherever the violation was detected.
//!
//! Separator handling depends on the mode:
//! - Identical modes never skip anything. A single space must be requested
//!   with [`Reader::read_space`] and a line boundary with
//!   [`Reader::read_newline`], and each must match the literal next byte.
//! - Standard modes skip any run of space-class bytes before each token, but
//!   keep line structure consistent: every requested line boundary must be
//!   matched by at least one line separator in the next run, and a run may
//!   only contain line separators if a boundary was requested. The very first
//!   run at the start of the stream is exempt.

mod numbers;

use core::{fmt, marker::PhantomData};
use std::io::Read;

use bstr::BString;

use crate::{
    buffer::{ByteBuffer, Peeked},
    error::{ErrorSource, FormatError, ReadError},
    mode::{Identical, IdenticalInteractive, Mode, Standard, StandardInteractive, Validate},
    options::ReaderOptions,
    verdict::{ExitProtocol, Verdict},
};

/// Reads a byte stream that must conform to a strict textual grammar.
///
/// Construct one of the five variants through its alias: [`Validator`],
/// [`IdenticalReader`], [`StandardReader`], [`IdenticalInteractor`], or
/// [`StandardInteractor`].
#[derive(Debug)]
pub struct Reader<M: Mode, R> {
    source: R,
    buffer: ByteBuffer,
    /// Whether the next separator run must contain a line separator.
    nl_pending: bool,
    protocol: ExitProtocol,
    mode: PhantomData<M>,
}

/// Validator of judge-provided input: exact, and every violation is an
/// internal error.
pub type Validator<R> = Reader<Validate, R>;
/// Exact reader over a finished stream.
pub type IdenticalReader<R> = Reader<Identical, R>;
/// Lenient reader over a finished stream.
pub type StandardReader<R> = Reader<Standard, R>;
/// Exact reader over a live pipe.
pub type IdenticalInteractor<R> = Reader<IdenticalInteractive, R>;
/// Lenient reader over a live pipe.
pub type StandardInteractor<R> = Reader<StandardInteractive, R>;

impl<M: Mode, R: Read> Reader<M, R> {
    /// Create a reader with default options, terminating on failure.
    pub fn new(source: R) -> Self {
        Self::with_options(source, ReaderOptions::default())
    }

    /// Create a reader, terminating on failure.
    pub fn with_options(source: R, options: ReaderOptions) -> Self {
        match Self::try_with_options(source, options) {
            Ok(reader) => reader,
            Err(e) => ExitProtocol::from_options(&options, M::INTERACTIVE)
                .quit(e.verdict(M::JUDGE), Some(&e)),
        }
    }

    /// Create a reader with default options.
    ///
    /// # Errors
    ///
    /// See [`Reader::try_with_options`].
    pub fn try_new(source: R) -> Result<Self, ReadError> {
        Self::try_with_options(source, ReaderOptions::default())
    }

    /// Create a reader. Non-interactive readers consume the whole source
    /// here.
    ///
    /// # Errors
    ///
    /// Fails with a tooling error if the buffer cannot be allocated or the
    /// source cannot be read, and with a format error if the stream does not
    /// fit in `options.max_buffer_size`.
    pub fn try_with_options(mut source: R, options: ReaderOptions) -> Result<Self, ReadError> {
        let mut buffer = ByteBuffer::with_limits(options.buffer_size(), options.max_buffer_size)
            .map_err(|e| ReadError::new(e, 0))?;
        if !M::INTERACTIVE {
            buffer
                .preload(&mut source)
                .map_err(|e| ReadError::new(e, buffer.len()))?;
        }
        Ok(Self {
            source,
            buffer,
            nl_pending: false,
            protocol: ExitProtocol::from_options(&options, M::INTERACTIVE),
            mode: PhantomData,
        })
    }
}

impl<M: Mode, R> Reader<M, R> {
    /// Offset of the next unread byte.
    #[must_use]
    pub fn position(&self) -> usize {
        self.buffer.cursor()
    }

    /// The protocol this reader terminates with.
    #[must_use]
    pub fn protocol(&self) -> &ExitProtocol {
        &self.protocol
    }

    /// The verdict `error` terminates with under this reader's mode.
    #[must_use]
    pub fn verdict_for(&self, error: &ReadError) -> Verdict {
        error.verdict(M::JUDGE)
    }

    /// Terminate with `verdict`, reporting `message` through this reader's
    /// protocol.
    pub fn quit(&self, verdict: Verdict, message: impl fmt::Display) -> ! {
        self.protocol.quit(verdict, Some(&message))
    }

    /// Terminate with a presentation error (internal error for a validator)
    /// unless `cond` holds.
    pub fn assert_format(&self, cond: bool, message: impl fmt::Display) {
        if !cond {
            let verdict = if M::JUDGE {
                Verdict::InternalError
            } else {
                Verdict::PresentationError
            };
            self.quit(verdict, message);
        }
    }

    /// Terminate with a wrong answer (internal error for a validator) unless
    /// `cond` holds.
    pub fn assert_value(&self, cond: bool, message: impl fmt::Display) {
        if !cond {
            let verdict = if M::JUDGE {
                Verdict::InternalError
            } else {
                Verdict::WrongAnswer
            };
            self.quit(verdict, message);
        }
    }

    /// Terminate with an internal error unless `cond` holds, using this
    /// reader's exit status for internal errors.
    pub fn assert_internal(&self, cond: bool, message: impl fmt::Display) {
        self.protocol.assert_internal(cond, message);
    }

    fn or_quit<T>(&self, result: Result<T, ReadError>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => self.protocol.quit(self.verdict_for(&e), Some(&e)),
        }
    }

    fn error(&self, source: impl Into<ErrorSource>) -> ReadError {
        ReadError::new(source, self.buffer.cursor())
    }
}

impl<M: Mode, R: Read> Reader<M, R> {
    fn peek(&mut self) -> Result<Peeked, ReadError> {
        loop {
            match self.buffer.peek() {
                Peeked::Empty => {
                    debug_assert!(M::INTERACTIVE);
                    self.buffer
                        .fetch_one(&mut self.source)
                        .map_err(|e| self.error(e))?;
                }
                peeked => return Ok(peeked),
            }
        }
    }

    /// Consume the next byte if it equals `b`.
    fn eat(&mut self, b: u8) -> Result<bool, ReadError> {
        let hit = self.peek()? == Peeked::Byte(b);
        if hit {
            self.buffer.bump();
        }
        Ok(hit)
    }

    fn expect(&mut self, b: u8) -> Result<(), ReadError> {
        if self.eat(b)? {
            Ok(())
        } else {
            Err(self.error(FormatError::Whitespace { expected: b }))
        }
    }

    /// Skip the separator run before a token. Standard modes only.
    fn eat_separators(&mut self) -> Result<(), ReadError> {
        debug_assert!(!M::IDENTICAL);
        let first = self.peek()?;
        if !first.is_space() && first.is_delimiter() {
            return Err(self.error(FormatError::InvalidCharacter));
        }

        let at_start = self.buffer.cursor() == 0;
        let mut saw_line = false;
        while let Peeked::Byte(b) = self.peek()? {
            if !crate::class::is_space(b) {
                break;
            }
            saw_line |= crate::class::is_line_separator(b);
            self.buffer.bump();
        }

        if !at_start && saw_line != self.nl_pending {
            return Err(self.error(FormatError::LineSeparation));
        }
        self.nl_pending = false;
        Ok(())
    }

    fn skip_token_prefix(&mut self) -> Result<(), ReadError> {
        if M::IDENTICAL {
            Ok(())
        } else {
            self.eat_separators()
        }
    }

    /// Require the end of the stream. Standard modes skip trailing
    /// space-class bytes first.
    ///
    /// # Errors
    ///
    /// Fails with "more output than expected" if anything else remains.
    pub fn try_read_eof(&mut self) -> Result<(), ReadError> {
        if !M::IDENTICAL {
            while self.peek()?.is_space() {
                self.buffer.bump();
            }
        }
        match self.peek()? {
            Peeked::End => Ok(()),
            _ => Err(self.error(FormatError::MoreOutput)),
        }
    }

    /// Require a single space between two tokens. A no-op in standard modes,
    /// which skip separators before the next token.
    ///
    /// # Errors
    ///
    /// In identical modes, fails unless the next byte is `' '`.
    pub fn try_read_space(&mut self) -> Result<(), ReadError> {
        if M::IDENTICAL { self.expect(b' ') } else { Ok(()) }
    }

    /// Require a line boundary. Identical modes consume a literal `'\n'`;
    /// standard modes defer the check to the next separator run.
    ///
    /// # Errors
    ///
    /// In identical modes, fails unless the next byte is `'\n'`.
    pub fn try_read_newline(&mut self) -> Result<(), ReadError> {
        if M::IDENTICAL {
            self.expect(b'\n')
        } else {
            self.nl_pending = true;
            Ok(())
        }
    }

    /// Read a maximal run of non-delimiter bytes. The run may be empty in
    /// identical modes.
    ///
    /// # Errors
    ///
    /// In standard modes, fails if the separator run before the token is
    /// malformed.
    pub fn try_read_token(&mut self) -> Result<BString, ReadError> {
        self.skip_token_prefix()?;
        let start = self.buffer.cursor();
        while !self.peek()?.is_delimiter() {
            self.buffer.bump();
        }
        Ok(self.buffer.span(start).into())
    }

    /// Read up to the next line separator, then request a line boundary.
    /// The separator itself is not part of the result.
    ///
    /// # Errors
    ///
    /// In identical modes, fails unless the line ends with `'\n'`.
    pub fn try_read_line(&mut self) -> Result<BString, ReadError> {
        self.skip_token_prefix()?;
        let start = self.buffer.cursor();
        while !self.peek()?.is_line_separator() {
            self.buffer.bump();
        }
        let line = self.buffer.span(start).into();
        self.try_read_newline()?;
        Ok(line)
    }

    /// Read one byte.
    ///
    /// # Errors
    ///
    /// Fails with "less output than expected" at the end of the stream.
    pub fn try_read_char(&mut self) -> Result<u8, ReadError> {
        self.skip_token_prefix()?;
        match self.peek()? {
            Peeked::Byte(b) => {
                self.buffer.bump();
                Ok(b)
            }
            _ => Err(self.error(FormatError::LessOutput)),
        }
    }

    /// Like [`Reader::try_read_eof`], terminating on failure.
    pub fn read_eof(&mut self) {
        let result = self.try_read_eof();
        self.or_quit(result);
    }

    /// Like [`Reader::try_read_space`], terminating on failure.
    pub fn read_space(&mut self) {
        let result = self.try_read_space();
        self.or_quit(result);
    }

    /// Like [`Reader::try_read_newline`], terminating on failure.
    pub fn read_newline(&mut self) {
        let result = self.try_read_newline();
        self.or_quit(result);
    }

    /// Like [`Reader::try_read_token`], terminating on failure.
    pub fn read_token(&mut self) -> BString {
        let result = self.try_read_token();
        self.or_quit(result)
    }

    /// Like [`Reader::try_read_line`], terminating on failure.
    pub fn read_line(&mut self) -> BString {
        let result = self.try_read_line();
        self.or_quit(result)
    }

    /// Like [`Reader::try_read_char`], terminating on failure.
    pub fn read_char(&mut self) -> u8 {
        let result = self.try_read_char();
        self.or_quit(result)
    }
}
