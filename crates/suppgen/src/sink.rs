//! Counting wrapper around the output [`Write`] handle.
//!
//! Bytes go straight through so the output stays safe to tail while a parse
//! runs; the sink only accounts for how many bytes have been emitted. Any
//! write error is fatal to the parse, and a half-written output file is an
//! accepted outcome of an aborted run.

use std::io::{self, Write};

pub(crate) struct Sink<W> {
    out: W,
    bytes_written: u64,
}

impl<W: Write> Sink<W> {
    pub(crate) fn new(out: W) -> Self {
        Self {
            out,
            bytes_written: 0,
        }
    }

    pub(crate) fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    pub(crate) fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.write_all(&[byte])
    }

    pub(crate) fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub(crate) fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}
