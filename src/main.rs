use clap::{Parser, Subcommand};
use evardoc::commands::{EvarDoc, FormatOptions, TemplateOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
  name = "evardoc",
  about = "Documentation of environment variables made easy",
  version,
  author
)]
struct Cli {
  /// Verbose output (-v for verbose, -vv for very verbose)
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  verbose: u8,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Format an environment file, applying opinionated formatting
  #[command(alias = "refactor")]
  Format {
    /// The path to the environment file to be formatted
    #[arg(default_value = ".env")]
    src: PathBuf,
  },
  /// Create a new environment file template from an existing environment file.
  ///
  /// Takes the EvarDoc comments and environment variable names (not values) from the
  /// environment file, formats them, and writes them to a template file.
  Template {
    /// The path to the environment to be used as the source of data for the template
    #[arg(default_value = ".env")]
    src: PathBuf,

    /// Overwrite the existing template instead of merging new variables into it
    #[arg(short, long)]
    overwrite: bool,

    /// The file that the template should be saved to
    #[arg(short, long, default_value = "template.env")]
    destination: PathBuf,
  },
}

fn setup_tracing(verbose: u8) {
  use tracing_subscriber::fmt;
  use tracing_subscriber::prelude::*;

  let log_level = match verbose {
    1 => "debug",
    2.. => "trace",
    _ => "info",
  };

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(std::io::stderr))
    .with(tracing_subscriber::EnvFilter::new(
      std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
    ))
    .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let cli = Cli::parse();

  setup_tracing(cli.verbose);

  let verbose = cli.verbose > 0;

  match cli.command {
    Command::Format { src } => EvarDoc::format_with_options(FormatOptions {
      source: Some(src),
      verbose,
    })?,
    Command::Template {
      src,
      overwrite,
      destination,
    } => EvarDoc::template_with_options(TemplateOptions {
      source: Some(src),
      destination: Some(destination),
      overwrite,
      verbose,
    })?,
  }

  Ok(())
}
