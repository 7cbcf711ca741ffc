//! Single-line terminal progress display, redrawn in place on stderr.
//!
//! Redrawing on every progress event mirrors the per-line cadence of the
//! parser's callback; on very chatty logs the terminal becomes the
//! bottleneck, which is the accepted cost of live feedback.

use std::{
    io::{self, Write},
    path::Path,
};

use suppgen::ProgressEvent;

pub struct ProgressLine {
    drawn: bool,
}

impl ProgressLine {
    pub fn start(path: &Path) -> Self {
        eprintln!("Processing {}:", path.display());
        Self { drawn: false }
    }

    pub fn update(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::LineRead {
                lines,
                bytes_written,
                suppressions,
            } => {
                let mut err = io::stderr().lock();
                // \x1b[2K clears the previously drawn line before redrawing.
                let _ = write!(
                    err,
                    "\r\x1b[2KLine number {lines}... ({bytes_written} bytes written, {suppressions} suppressions)"
                );
                let _ = err.flush();
                self.drawn = true;
            }
            _ => {}
        }
    }

    /// Terminates the in-place line so later output starts on a fresh row.
    pub fn finish(self) {
        if self.drawn {
            eprintln!();
        }
    }
}
