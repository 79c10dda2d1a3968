//! gosmith CLI - generates constructors, getters and setters for Go structs.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use gosmith::prelude::*;
use gosmith_schema::DEFAULT_DIRECTIVE_KEY;
use tracing_subscriber::EnvFilter;

/// Generates constructors, getters and setters for the structs of a Go file.
#[derive(Parser, Debug)]
#[command(name = "gosmith", author, version, long_about = None)]
struct Cli {
    /// Source file
    #[arg(short, long)]
    src: PathBuf,

    /// Destination file
    #[arg(short, long)]
    dst: PathBuf,

    /// Only generate what struct tags ask for
    #[arg(short, long)]
    tag: bool,

    /// Struct-tag key holding the directives
    #[arg(long, env = "GOSMITH_TAG_KEY", default_value = DEFAULT_DIRECTIVE_KEY)]
    tag_key: String,

    /// Generate setters that assign their argument
    #[arg(long)]
    assign_setters: bool,

    /// Run goimports on the destination file, dropping unused imports
    #[arg(long)]
    imports: bool,

    /// Run gofmt on the destination file
    #[arg(long, conflicts_with = "imports")]
    gofmt: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", report(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let setter_style = if cli.assign_setters {
        SetterStyle::Assign
    } else {
        SetterStyle::Echo
    };

    let pipeline = Pipeline::new()
        .introspect_config(
            IntrospectConfig::new()
                .directives(cli.tag)
                .directive_key(&cli.tag_key),
        )
        .synth_config(SynthConfig::new().setter_style(setter_style))
        .post_format(post_format(cli));

    pipeline.run(&cli.src, &cli.dst)?;
    Ok(())
}

fn post_format(cli: &Cli) -> PostFormat {
    if cli.imports {
        PostFormat::Goimports
    } else if cli.gofmt {
        PostFormat::Gofmt
    } else {
        PostFormat::None
    }
}

/// Formats a failed run for stderr.
///
/// Every stage error already embeds its cause, so only the outermost
/// message is printed.
fn report(err: &anyhow::Error) -> String {
    format!("[gosmith]: {err}")
}
