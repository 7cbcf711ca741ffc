use std::io::{self, Read, Write};

use super::{comment_mode, convert_err};
use crate::{LogParser, ParseError, ParserOptions, ProtocolError};

#[test]
fn end_of_input_inside_block_is_a_protocol_error() {
    let (output, err) = convert_err(b"{\n name", ParserOptions::default());
    match err {
        ParseError::Protocol(protocol) => {
            assert_eq!(
                protocol,
                ProtocolError {
                    expected: b'}',
                    found: None,
                }
            );
            assert_eq!(protocol.to_string(), "expected '}' but found end of input");
        }
        other => panic!("expected protocol error, got {other:?}"),
    }
    // Output written before the abort stays in place, truncated.
    assert_eq!(output, b"{\n    name");
}

#[test]
fn end_of_input_right_after_open_brace() {
    let (output, err) = convert_err(b"{", comment_mode());
    assert!(matches!(
        err,
        ParseError::Protocol(ProtocolError {
            expected: b'}',
            found: None,
        })
    ));
    assert_eq!(output, b"{\n");
}

/// Yields its bytes through full-capacity reads, then fails.
struct ThenFail<'a>(&'a [u8]);

impl Read for ThenFail<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.0.is_empty() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "source gone"));
        }
        let n = self.0.len().min(buf.len());
        buf[..n].copy_from_slice(&self.0[..n]);
        self.0 = &self.0[n..];
        Ok(n)
    }
}

#[test]
fn read_failure_mid_stream_aborts_with_io_error() {
    // The first read fills the whole buffer, so end-of-stream is not assumed
    // and the second read surfaces the failure.
    let mut output = Vec::new();
    let err = LogParser::with_buffer_capacity(ThenFail(b"ab"), &mut output, comment_mode(), 2)
        .parse()
        .expect_err("read failure must abort");
    assert!(matches!(err, ParseError::Io(_)));
    assert_eq!(output, b"#ab");
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failure_aborts_with_io_error() {
    let input: &[u8] = b"{\n a\n}\n";
    let err = LogParser::new(input, FailingWriter, ParserOptions::default())
        .parse()
        .expect_err("write failure must abort");
    assert!(matches!(err, ParseError::Io(_)));
}
