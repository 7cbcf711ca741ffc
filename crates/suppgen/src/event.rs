/// Progress notification fired by [`LogParser`](crate::LogParser) once per
/// consumed line-break byte — every `\n` crossing the reader counts, including
/// those inside suppression blocks and in discarded top-level whitespace.
///
/// All counters are cumulative for the current parse. The callback runs
/// synchronously on the parsing thread; a slow consumer throttles the parse,
/// which is acceptable for its visual-progress use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressEvent {
    /// A line-break byte was consumed from the input.
    LineRead {
        /// Line-break bytes consumed so far.
        lines: u64,
        /// Bytes emitted to the output so far.
        bytes_written: u64,
        /// Suppression blocks completed so far.
        suppressions: u64,
    },
}
