use std::path::PathBuf;

use clap::Parser;

/// Convert Valgrind logs into suppression-file fragments.
#[derive(Debug, Parser)]
#[command(name = "suppgen", version, about)]
pub struct Args {
    /// Valgrind log files to convert; reads standard input when empty.
    pub files: Vec<PathBuf>,

    /// Write generated output to this file instead of standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Rewrite plain log lines as `#` comments instead of dropping them.
    #[arg(long)]
    pub comment: bool,

    /// Skip the timestamp banner at the top of each converted file.
    #[arg(long)]
    pub no_header: bool,
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser as _;

    use super::Args;

    #[test]
    fn supports_comment_option() {
        let args = Args::parse_from(["suppgen", "--comment"]);
        assert!(args.comment);
        assert!(args.files.is_empty());
        assert_eq!(args.output, None);
    }

    #[test]
    fn collects_files_and_output() {
        let args = Args::parse_from(["suppgen", "a.log", "b.log", "-o", "out.supp"]);
        assert_eq!(args.files, [Path::new("a.log"), Path::new("b.log")]);
        assert_eq!(args.output.as_deref(), Some(Path::new("out.supp")));
        assert!(!args.comment);
        assert!(!args.no_header);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Args::try_parse_from(["suppgen", "--bogus"]).is_err());
    }
}
