//! A streaming converter from Valgrind logs to suppression-file fragments.
//!
//! Memcheck and friends print ready-made suppression blocks into their logs
//! when run with `--gen-suppressions=all`. This crate extracts those blocks
//! from a log stream and re-emits them in canonical suppression-file form
//! (`{\n`, entries indented with four spaces, `}\n`), either discarding the
//! surrounding log text or rewriting it as `#` comment lines so the whole
//! output can be appended to a suppression file as-is.
//!
//! The converter is single-pass and byte-oriented: it classifies one byte at
//! a time with a single byte of lookahead, pulling fixed-size chunks from the
//! input through an internal refill buffer, so memory use is bounded no
//! matter how large the log is.
//!
//! ```
//! use suppgen::{LogParser, ParserOptions};
//!
//! let input: &[u8] = b"hello\n{\n  a\n  b\n}\n";
//! let mut output = Vec::new();
//! let summary = LogParser::new(
//!     input,
//!     &mut output,
//!     ParserOptions {
//!         comment_only: true,
//!         ..ParserOptions::default()
//!     },
//! )
//! .parse()
//! .unwrap();
//!
//! assert_eq!(output, b"#hello\n{\n    a\n    b\n}\n");
//! assert_eq!(summary.suppressions, 1);
//! ```

mod error;
mod event;
mod options;
mod parser;
mod reader;
mod sink;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ProtocolError};
pub use event::ProgressEvent;
pub use options::ParserOptions;
pub use parser::{LogParser, ParseSummary};
