//! Command-line front end: flag parsing, file iteration, and progress
//! display around the `suppgen` core. Inputs are processed strictly one
//! after another against the single shared output handle.

mod args;
mod progress;

use std::{
    fs::File,
    io::{self, IsTerminal, Read, Write},
    path::Path,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser as _;
use suppgen::{LogParser, ParserOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{args::Args, progress::ProgressLine};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    run(&Args::parse())
}

fn run(args: &Args) -> Result<()> {
    let options = ParserOptions {
        comment_only: args.comment,
        include_header: !args.no_header,
    };
    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    // Progress redraws only make sense when generated output is not racing
    // them to the terminal.
    let show_progress = args.output.is_some() && io::stderr().is_terminal();

    let started = Instant::now();
    if args.files.is_empty() {
        convert(
            io::stdin().lock(),
            &mut *output,
            options,
            show_progress,
            Path::new("<stdin>"),
        )?;
    } else {
        for path in &args.files {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            convert(file, &mut *output, options, show_progress, path)?;
        }
    }
    if args.output.is_some() {
        eprintln!("Done in {}ms!", started.elapsed().as_millis());
    }
    Ok(())
}

fn convert(
    input: impl Read,
    output: &mut dyn Write,
    options: ParserOptions,
    show_progress: bool,
    path: &Path,
) -> Result<()> {
    let mut progress = show_progress.then(|| ProgressLine::start(path));

    let parser = LogParser::new(input, output, options);
    let parser = match progress.as_mut() {
        Some(line) => parser.on_progress(|event| line.update(event)),
        None => parser,
    };
    let summary = parser
        .parse()
        .with_context(|| format!("failed to convert {}", path.display()))?;

    if let Some(line) = progress {
        line.finish();
    }
    info!(
        path = %path.display(),
        lines = summary.lines,
        bytes_written = summary.bytes_written,
        suppressions = summary.suppressions,
        "converted"
    );
    Ok(())
}
