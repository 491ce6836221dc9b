/// Construction-time configuration shared by every reader variant.
///
/// # Examples
///
/// ```rust
/// use strictread::{ReaderOptions, StandardReader};
///
/// let options = ReaderOptions {
///     initial_buffer_size: 64,
///     max_buffer_size: 1 << 10,
///     ..Default::default()
/// };
/// let mut reader = StandardReader::try_with_options(&b"1 2\n"[..], options).unwrap();
/// assert_eq!(reader.try_read_int::<u8>(..), Ok(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Size of the buffer allocated at construction, in bytes.
    ///
    /// A size of zero is treated as one so that doubling always makes
    /// progress.
    ///
    /// # Default
    ///
    /// 5 MiB
    pub initial_buffer_size: usize,

    /// Upper bound the buffer may grow to by doubling.
    ///
    /// Exceeding it is reported as "output limit exceeded", a format
    /// violation of the analyzed stream. The buffer always keeps one slot
    /// free for the end marker, so a stream of exactly this many bytes is
    /// already too long.
    ///
    /// # Default
    ///
    /// 160 MiB
    pub max_buffer_size: usize,

    /// Written to standard output when an interactive reader terminates with
    /// a wrong answer or presentation error, so the counterpart process sees
    /// an unambiguous stop signal.
    ///
    /// # Default
    ///
    /// `"-1\n"`
    pub fail_token: &'static str,

    /// Exit status used for internal errors.
    ///
    /// # Default
    ///
    /// `3`
    pub internal_error_status: i32,
}

impl ReaderOptions {
    pub(crate) fn buffer_size(&self) -> usize {
        self.initial_buffer_size.max(1)
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            initial_buffer_size: 5 << 20,
            max_buffer_size: 160 << 20,
            fail_token: "-1\n",
            internal_error_status: 3,
        }
    }
}
