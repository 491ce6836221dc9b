//! Growable byte buffer backing a reader.
//!
//! The buffer is a single owned allocation reserved for `capacity` bytes, of
//! which the first `len` hold stream content. Reserved space is only written
//! when content is read into it. Once the source reports end of stream, an
//! end marker logically occupies the slot right after the content, so
//! `len < capacity` always holds at that point. Capacity only grows by
//! doubling and never past `max_capacity`.
//!
//! Two fill strategies exist:
//! - [`ByteBuffer::preload`] reads the whole source eagerly, doubling whenever
//!   the buffer is full and the source has not yet reported its end.
//! - [`ByteBuffer::fetch_one`] reads exactly one byte on a cursor miss, for
//!   live sources where reading ahead could block on the counterpart.
//!
//! Content before the cursor is never discarded, and every span handed out
//! is copied, so growth cannot invalidate it.

#![expect(clippy::inline_always)]

use std::io::{ErrorKind, Read};

use crate::{
    class,
    error::{ErrorSource, FormatError, ToolingError},
};

/// What the read cursor currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Peeked {
    /// The cursor caught up with the fetched content of a live source.
    Empty,
    Byte(u8),
    /// The synthetic marker after the last byte of the stream.
    End,
}

impl Peeked {
    #[inline(always)]
    pub(crate) fn is_delimiter(self) -> bool {
        match self {
            Peeked::Byte(b) => class::is_delimiter(b),
            Peeked::End => true,
            Peeked::Empty => false,
        }
    }

    #[inline(always)]
    pub(crate) fn is_space(self) -> bool {
        matches!(self, Peeked::Byte(b) if class::is_space(b))
    }

    #[inline(always)]
    pub(crate) fn is_line_separator(self) -> bool {
        match self {
            Peeked::Byte(b) => class::is_line_separator(b),
            Peeked::End => true,
            Peeked::Empty => false,
        }
    }

    #[inline(always)]
    pub(crate) fn digit(self) -> Option<u8> {
        match self {
            Peeked::Byte(b @ b'0'..=b'9') => Some(b - b'0'),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct ByteBuffer {
    /// Stream content fetched so far. Its allocation is reserved up to
    /// `capacity` but never initialized ahead of the content.
    data: Vec<u8>,
    capacity: usize,
    cursor: usize,
    max_capacity: usize,
    exhausted: bool,
}

impl ByteBuffer {
    pub(crate) fn with_limits(capacity: usize, max_capacity: usize) -> Result<Self, ErrorSource> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| ToolingError::Alloc { requested: capacity })?;
        Ok(Self {
            data,
            capacity,
            cursor: 0,
            max_capacity,
            exhausted: false,
        })
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Bytes fetched from the source so far, excluding the end marker.
    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub(crate) fn peek(&self) -> Peeked {
        match self.data.get(self.cursor) {
            Some(&b) => Peeked::Byte(b),
            None if self.exhausted => Peeked::End,
            None => Peeked::Empty,
        }
    }

    /// Consume the byte under the cursor. Must follow a peek of
    /// [`Peeked::Byte`]; the cursor never moves past the end marker.
    #[inline(always)]
    pub(crate) fn bump(&mut self) {
        debug_assert!(self.cursor < self.data.len());
        self.cursor += 1;
    }

    pub(crate) fn span(&self, start: usize) -> &[u8] {
        &self.data[start..self.cursor]
    }

    /// Read the entire source, leaving room for the end marker.
    pub(crate) fn preload<R: Read + ?Sized>(&mut self, source: &mut R) -> Result<(), ErrorSource> {
        while !self.exhausted {
            let room = u64::try_from(self.capacity - self.len()).unwrap_or(u64::MAX);
            // Stops at the end of the source or once the buffer is full.
            Read::take(&mut *source, room)
                .read_to_end(&mut self.data)
                .map_err(|e| ToolingError::Io(e.to_string()))?;
            if self.len() < self.capacity {
                self.exhausted = true;
            } else {
                self.grow()?;
            }
        }
        Ok(())
    }

    /// Fetch exactly one byte from a live source, or mark its end.
    pub(crate) fn fetch_one<R: Read + ?Sized>(&mut self, source: &mut R) -> Result<(), ErrorSource> {
        debug_assert!(!self.exhausted);
        if self.len() == self.capacity {
            self.grow()?;
        }
        let mut byte = [0];
        if read_retrying(source, &mut byte)? == 0 {
            self.exhausted = true;
        } else {
            self.data.push(byte[0]);
        }
        Ok(())
    }

    fn grow(&mut self) -> Result<(), ErrorSource> {
        let capacity = self.capacity;
        let requested = capacity
            .checked_mul(2)
            .filter(|&c| c <= self.max_capacity)
            .ok_or(FormatError::OutputLimit {
                limit: self.max_capacity,
            })?;
        self.data
            .try_reserve_exact(requested - self.data.len())
            .map_err(|_| ToolingError::Alloc { requested })?;
        self.capacity = requested;
        log::trace!("buffer grew from {capacity} to {requested} bytes");
        Ok(())
    }
}

fn read_retrying<R: Read + ?Sized>(source: &mut R, buf: &mut [u8]) -> Result<usize, ToolingError> {
    loop {
        match source.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(ToolingError::Io(e.to_string())),
        }
    }
}
