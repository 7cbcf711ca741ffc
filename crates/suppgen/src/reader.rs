//! Fixed-capacity refill buffer over a [`Read`] source.
//!
//! One owned byte buffer, a cursor, a filled length, and an end-of-stream
//! flag. A refill happens only when the cursor has drained the filled region,
//! and performs exactly one blocking read of up to the buffer's capacity.
//! A read shorter than the capacity declares end-of-stream for all later
//! refills; the bytes it did return are still drained normally. This bounds
//! memory to one buffer regardless of input size and never touches the
//! source again once it is exhausted.

use std::io::{self, Read};

/// Default buffer capacity, 64^4 bytes. Comfortably larger than any log line
/// Memcheck produces.
pub(crate) const DEFAULT_BUFFER_CAPACITY: usize = 64 * 64 * 64 * 64;

pub(crate) struct ChunkReader<R> {
    source: R,
    buf: Box<[u8]>,
    cursor: usize,
    filled: usize,
    eof: bool,
}

impl<R: Read> ChunkReader<R> {
    pub(crate) fn new(source: R) -> Self {
        Self::with_capacity(source, DEFAULT_BUFFER_CAPACITY)
    }

    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub(crate) fn with_capacity(source: R, capacity: usize) -> Self {
        assert!(capacity > 0, "buffer capacity must be non-zero");
        Self {
            source,
            buf: vec![0; capacity].into_boxed_slice(),
            cursor: 0,
            filled: 0,
            eof: false,
        }
    }

    /// Returns the next unconsumed byte without advancing, or `None` at end
    /// of stream. Idempotent: repeated peeks yield the same byte.
    pub(crate) fn peek(&mut self) -> io::Result<Option<u8>> {
        self.fill()?;
        if self.cursor == self.filled {
            return Ok(None);
        }
        Ok(Some(self.buf[self.cursor]))
    }

    /// Returns the next byte and advances past it, or `None` at end of
    /// stream.
    pub(crate) fn consume(&mut self) -> io::Result<Option<u8>> {
        self.fill()?;
        if self.cursor == self.filled {
            return Ok(None);
        }
        let byte = self.buf[self.cursor];
        self.cursor += 1;
        Ok(Some(byte))
    }

    /// Refills the buffer when drained. After this returns, either
    /// `cursor < filled` or end-of-stream has been declared.
    fn fill(&mut self) -> io::Result<()> {
        if self.eof || self.cursor < self.filled {
            return Ok(());
        }
        let bytes_read = self.source.read(&mut self.buf)?;
        if bytes_read < self.buf.len() {
            self.eof = true;
        }
        self.filled = bytes_read;
        self.cursor = 0;
        Ok(())
    }
}
