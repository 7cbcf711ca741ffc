//! The streaming classifier/rewriter.
//!
//! `LogParser` pulls one byte at a time from the refill buffer and decides,
//! with a single byte of lookahead and no backtracking, whether it is inside
//! a suppression block or plain log text, re-emitting bytes with canonical
//! suppression-file formatting as it goes.
//!
//! The state machine is a flat, state-tagged loop rather than recursive
//! descent, so memory stays bounded and the single-pass guarantee is visible
//! in the control flow:
//!
//! - Top level: spaces and line breaks between segments are consumed and
//!   discarded. `{` opens a suppression block; anything else starts a log
//!   line.
//! - Suppression block line: leading whitespace is elided; the first content
//!   byte triggers one 4-space indent, then bytes copy through verbatim. A
//!   line break is copied and ends the line; `}` ends the line *and* the
//!   block (the block terminator is consumed by the block transition, which
//!   emits `}\n` and counts the suppression). End of input mid-block is a
//!   protocol error.
//! - Log line: bytes are consumed up to and including the line break. In
//!   comment mode the line is emitted with a `#` prefix (unless already
//!   present); otherwise it is scanned but produces no output. The
//!   scan-without-output path is intentional, not dead code: it keeps line
//!   and progress accounting identical across modes.

use std::io::{Read, Write};

use crate::{
    ParseError, ParserOptions, ProgressEvent,
    error::ProtocolError,
    reader::ChunkReader,
    sink::Sink,
};

const INDENT: &[u8] = b"    ";

type ProgressFn<'cb> = Box<dyn FnMut(ProgressEvent) + 'cb>;

/// Parser state, tagged with the per-line flags that survive across buffer
/// refills. A byte is never pushed back once classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    TopLevel,
    BlockLine { started: bool },
    LogLine { started: bool },
}

/// Final counters of a completed parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSummary {
    /// Suppression blocks rewritten.
    pub suppressions: u64,
    /// Bytes emitted to the output, header included.
    pub bytes_written: u64,
    /// Line-break bytes consumed from the input.
    pub lines: u64,
}

/// Streaming one-pass converter from a Valgrind log to a suppression-file
/// fragment.
///
/// The parser exclusively owns its input and output handles for its
/// lifetime; counters reset only by constructing a new instance, and
/// [`parse`](Self::parse) consumes the parser to enforce that.
pub struct LogParser<'cb, R, W: Write> {
    reader: ChunkReader<R>,
    sink: Sink<W>,
    options: ParserOptions,
    progress: Option<ProgressFn<'cb>>,
    suppressions: u64,
    lines: u64,
}

impl<'cb, R: Read, W: Write> LogParser<'cb, R, W> {
    /// Creates a parser over `input` and `output` with the default buffer
    /// capacity.
    pub fn new(input: R, output: W, options: ParserOptions) -> Self {
        Self::with_buffer_capacity(input, output, options, crate::reader::DEFAULT_BUFFER_CAPACITY)
    }

    /// Creates a parser with an explicit refill-buffer capacity in bytes.
    ///
    /// Output is byte-identical for any capacity; smaller buffers only trade
    /// throughput for memory.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_buffer_capacity(
        input: R,
        output: W,
        options: ParserOptions,
        capacity: usize,
    ) -> Self {
        Self {
            reader: ChunkReader::with_capacity(input, capacity),
            sink: Sink::new(output),
            options,
            progress: None,
            suppressions: 0,
            lines: 0,
        }
    }

    /// Installs a callback fired once per consumed line-break byte, carrying
    /// cumulative counters. Runs synchronously on the parsing thread.
    #[must_use]
    pub fn on_progress<F>(mut self, callback: F) -> Self
    where
        F: FnMut(ProgressEvent) + 'cb,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Runs the parse to completion, returning the final counters.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] on the first read or write failure and
    /// [`ParseError::Protocol`] when the stream ends inside a suppression
    /// block. Either way the parse stops immediately; output already written
    /// stays in place.
    pub fn parse(mut self) -> Result<ParseSummary, ParseError> {
        if self.options.include_header {
            self.write_header()?;
        }
        let mut state = State::TopLevel;
        loop {
            state = match state {
                State::TopLevel => match self.reader.peek()? {
                    None => break,
                    // Whitespace between segments carries no output.
                    Some(b' ' | b'\n') => {
                        self.advance()?;
                        State::TopLevel
                    }
                    Some(b'{') => {
                        self.expect(b'{')?;
                        self.sink.write_all(b"{\n")?;
                        State::BlockLine { started: false }
                    }
                    Some(_) => State::LogLine { started: false },
                },
                State::BlockLine { started } => match self.reader.peek()? {
                    None => {
                        return Err(ProtocolError {
                            expected: b'}',
                            found: None,
                        }
                        .into());
                    }
                    Some(b'}') => {
                        self.expect(b'}')?;
                        self.sink.write_all(b"}\n")?;
                        self.suppressions += 1;
                        State::TopLevel
                    }
                    Some(b' ' | b'\n') if !started => {
                        // Elide everything before the line's first content
                        // byte; whitespace-only segments emit nothing.
                        self.advance()?;
                        State::BlockLine { started: false }
                    }
                    Some(byte) => {
                        if !started {
                            self.sink.write_all(INDENT)?;
                        }
                        self.sink.write_byte(byte)?;
                        self.advance()?;
                        if byte == b'\n' {
                            State::BlockLine { started: false }
                        } else {
                            State::BlockLine { started: true }
                        }
                    }
                },
                State::LogLine { started } => match self.advance()? {
                    None => State::TopLevel,
                    Some(byte) => {
                        if self.options.comment_only {
                            if !started && byte != b'#' {
                                self.sink.write_byte(b'#')?;
                            }
                            self.sink.write_byte(byte)?;
                        }
                        if byte == b'\n' {
                            State::TopLevel
                        } else {
                            State::LogLine { started: true }
                        }
                    }
                },
            };
        }
        self.sink.flush()?;
        Ok(ParseSummary {
            suppressions: self.suppressions,
            bytes_written: self.sink.bytes_written(),
            lines: self.lines,
        })
    }

    /// Consumes one byte, maintaining the line counter and firing the
    /// progress event on line breaks.
    fn advance(&mut self) -> Result<Option<u8>, ParseError> {
        let byte = self.reader.consume()?;
        if byte == Some(b'\n') {
            self.lines += 1;
            if let Some(callback) = self.progress.as_mut() {
                callback(ProgressEvent::LineRead {
                    lines: self.lines,
                    bytes_written: self.sink.bytes_written(),
                    suppressions: self.suppressions,
                });
            }
        }
        Ok(byte)
    }

    /// Consumes the next byte and demands it to be `expected`.
    fn expect(&mut self, expected: u8) -> Result<(), ParseError> {
        let found = self.advance()?;
        if found != Some(expected) {
            return Err(ProtocolError { expected, found }.into());
        }
        Ok(())
    }

    fn write_header(&mut self) -> Result<(), ParseError> {
        let now = chrono::Local::now().to_rfc2822();
        self.sink.write_all(format!("# {now}\n").as_bytes())?;
        self.sink.write_all(b"# Generated automatically by suppgen\n\n")?;
        Ok(())
    }
}
