mod parse_bad;

use crate::{LogParser, ParseError, ParseSummary, ParserOptions};

pub(crate) fn comment_mode() -> ParserOptions {
    ParserOptions {
        comment_only: true,
        ..ParserOptions::default()
    }
}

pub(crate) fn convert_with_capacity(
    input: &[u8],
    options: ParserOptions,
    capacity: usize,
) -> (Vec<u8>, ParseSummary) {
    let mut output = Vec::new();
    let summary = LogParser::with_buffer_capacity(input, &mut output, options, capacity)
        .parse()
        .expect("well-formed input must parse");
    (output, summary)
}

pub(crate) fn convert(input: &[u8], options: ParserOptions) -> (Vec<u8>, ParseSummary) {
    convert_with_capacity(input, options, 4096)
}

/// Runs a parse expected to abort, returning whatever output was emitted
/// before the failure alongside the error.
pub(crate) fn convert_err(input: &[u8], options: ParserOptions) -> (Vec<u8>, ParseError) {
    let mut output = Vec::new();
    let err = LogParser::with_buffer_capacity(input, &mut output, options, 4096)
        .parse()
        .expect_err("input must abort the parse");
    (output, err)
}
