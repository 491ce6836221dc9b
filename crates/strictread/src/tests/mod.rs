use std::io::Read;

use crate::{ErrorSource, FormatError, Mode, ReadError, Reader, ReaderOptions, Violation};

mod floats;
mod judge;

/// Small buffers keep the thousands of readers built by property tests cheap.
pub(crate) fn small() -> ReaderOptions {
    ReaderOptions {
        initial_buffer_size: 16,
        ..ReaderOptions::default()
    }
}

pub(crate) fn reader<M: Mode, R: Read>(source: R) -> Reader<M, R> {
    Reader::try_with_options(source, small()).expect("construction failed")
}

#[track_caller]
pub(crate) fn format_error<T: core::fmt::Debug>(result: Result<T, ReadError>) -> FormatError {
    let err = result.expect_err("expected a format violation");
    match err.cause() {
        ErrorSource::Format(e) => *e,
        other => panic!("expected a format violation, got {other:?}"),
    }
}

#[track_caller]
pub(crate) fn violation<T: core::fmt::Debug>(result: Result<T, ReadError>) -> Violation {
    result.expect_err("expected a violation").violation()
}
