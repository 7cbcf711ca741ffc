/// Configuration for one parse. Set at construction, never mutated while
/// parsing.
///
/// # Default
///
/// All options default to `false`: plain log text is discarded and no header
/// banner is emitted, so the output is a bare suppression-file fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Whether to rewrite plain log lines as `#` comment lines instead of
    /// discarding them.
    ///
    /// A line whose first byte already is `#` passes through unchanged;
    /// anything else gets a single leading `#`. Either way the original
    /// line-break byte is preserved. With this off, log lines are still
    /// fully scanned (their line breaks advance the line and progress
    /// counters) but produce no output.
    pub comment_only: bool,

    /// Whether to emit a banner before any other output: a timestamp line
    /// and an attribution line, each `#`-prefixed and newline-terminated,
    /// followed by one blank line.
    pub include_header: bool,
}
