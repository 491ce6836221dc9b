//! Verdicts and the exit protocol.
//!
//! The process exit status is the whole interface to the surrounding judging
//! infrastructure. Raising a verdict writes an optional diagnostic and
//! terminates the process immediately; nothing is ever retried.
//!
//! Diagnostics go to standard output in batch contexts. In interactive
//! contexts standard output is the protocol stream read by the counterpart
//! process, so diagnostics go to standard error instead, and a wrong answer
//! or presentation error additionally writes a fixed fail token to standard
//! output.

use std::{
    fmt,
    io::{self, Write},
    process,
};

use crate::options::ReaderOptions;

/// Outcome reported to the judging infrastructure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Accepted,
    WrongAnswer,
    PresentationError,
    InternalError,
    Partial,
}

impl Verdict {
    /// Exit status for this verdict. Internal errors use the given status,
    /// which differs between generations of judging tools (3 or 4).
    #[must_use]
    pub const fn exit_status(self, internal_error_status: i32) -> i32 {
        match self {
            Self::Accepted => 0,
            Self::WrongAnswer => 1,
            Self::PresentationError => 2,
            Self::InternalError => internal_error_status,
            Self::Partial => 7,
        }
    }

    /// Whether this verdict blames the analyzed output.
    #[must_use]
    pub const fn is_rejection(self) -> bool {
        matches!(self, Self::WrongAnswer | Self::PresentationError)
    }
}

/// How a verdict is reported and turned into a process exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitProtocol {
    interactive: bool,
    fail_token: &'static str,
    internal_error_status: i32,
}

impl ExitProtocol {
    /// Protocol for a checker or validator reading a finished file.
    #[must_use]
    pub fn batch() -> Self {
        Self::from_options(&ReaderOptions::default(), false)
    }

    /// Protocol for an interactor talking to a live counterpart process.
    #[must_use]
    pub fn interactive(fail_token: &'static str) -> Self {
        Self {
            fail_token,
            ..Self::from_options(&ReaderOptions::default(), true)
        }
    }

    pub(crate) fn from_options(options: &ReaderOptions, interactive: bool) -> Self {
        Self {
            interactive,
            fail_token: options.fail_token,
            internal_error_status: options.internal_error_status,
        }
    }

    /// Use `status` as the exit status for internal errors.
    #[must_use]
    pub fn with_internal_error_status(self, status: i32) -> Self {
        Self {
            internal_error_status: status,
            ..self
        }
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    #[must_use]
    pub fn exit_status(&self, verdict: Verdict) -> i32 {
        verdict.exit_status(self.internal_error_status)
    }

    /// Write what `verdict` reports to the given output and error streams,
    /// without exiting.
    ///
    /// # Errors
    ///
    /// Propagates write failures from either stream.
    pub fn report<O, E>(
        &self,
        verdict: Verdict,
        message: Option<&dyn fmt::Display>,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<()>
    where
        O: Write + ?Sized,
        E: Write + ?Sized,
    {
        if let Some(message) = message {
            if self.interactive {
                writeln!(err, "{message}")?;
            } else {
                writeln!(out, "{message}")?;
            }
        }
        if self.interactive && verdict.is_rejection() {
            out.write_all(self.fail_token.as_bytes())?;
        }
        out.flush()?;
        err.flush()
    }

    /// Report `verdict` on the process streams and terminate with its exit
    /// status.
    pub fn quit(&self, verdict: Verdict, message: Option<&dyn fmt::Display>) -> ! {
        let status = self.exit_status(verdict);
        log::debug!("terminating with {verdict:?} (exit status {status})");
        // Exit status is all that matters once the streams are broken.
        let _ = self.report(verdict, message, &mut io::stdout().lock(), &mut io::stderr().lock());
        process::exit(status)
    }

    /// Terminate with an internal error unless `cond` holds.
    pub fn assert_internal(&self, cond: bool, message: impl fmt::Display) {
        if !cond {
            self.quit(Verdict::InternalError, Some(&message));
        }
    }
}

/// Terminate with `verdict` using the default batch protocol.
///
/// Checkers use this to finish with [`Verdict::Accepted`] or
/// [`Verdict::Partial`] once every read has succeeded. Internal errors exit
/// with status 3 here; a reader built with another
/// [`ReaderOptions::internal_error_status`] should terminate through
/// [`Reader::quit`](crate::Reader::quit) instead.
pub fn quit(verdict: Verdict, message: impl fmt::Display) -> ! {
    ExitProtocol::batch().quit(verdict, Some(&message))
}

/// Terminate with an internal error (status 3) unless `cond` holds.
///
/// Use [`Reader::assert_internal`](crate::Reader::assert_internal) to honor a
/// reader's configured exit status.
pub fn assert_internal(cond: bool, message: impl fmt::Display) {
    ExitProtocol::batch().assert_internal(cond, message);
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Verdict::Accepted, 0)]
    #[case(Verdict::WrongAnswer, 1)]
    #[case(Verdict::PresentationError, 2)]
    #[case(Verdict::InternalError, 3)]
    #[case(Verdict::Partial, 7)]
    fn batch_exit_statuses(#[case] verdict: Verdict, #[case] status: i32) {
        assert_eq!(ExitProtocol::batch().exit_status(verdict), status);
    }

    #[test]
    fn internal_error_status_is_configurable() {
        let protocol = ExitProtocol::batch().with_internal_error_status(4);
        assert_eq!(protocol.exit_status(Verdict::InternalError), 4);
        assert_eq!(protocol.exit_status(Verdict::PresentationError), 2);
    }

    #[test]
    fn batch_report_goes_to_stdout() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        ExitProtocol::batch()
            .report(Verdict::WrongAnswer, Some(&"bad"), &mut out, &mut err)
            .unwrap();
        assert_eq!(out, b"bad\n");
        assert!(err.is_empty());
    }

    #[rstest]
    #[case(Verdict::WrongAnswer, true)]
    #[case(Verdict::PresentationError, true)]
    #[case(Verdict::Accepted, false)]
    #[case(Verdict::InternalError, false)]
    #[case(Verdict::Partial, false)]
    fn interactive_fail_token_only_on_rejection(#[case] verdict: Verdict, #[case] token: bool) {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        ExitProtocol::interactive("-1\n")
            .report(verdict, Some(&"why"), &mut out, &mut err)
            .unwrap();
        assert_eq!(err, b"why\n");
        assert_eq!(out.is_empty(), !token);
    }

    #[test]
    fn silent_report_writes_nothing_in_batch() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        ExitProtocol::batch()
            .report(Verdict::PresentationError, None, &mut out, &mut err)
            .unwrap();
        assert!(out.is_empty() && err.is_empty());
    }
}
