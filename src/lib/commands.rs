//! The `format` and `template` commands.
//!
//! # Format
//!
//! 1. Parses the source env file and reports the result
//! 2. Fails without writing if no variable parsed cleanly
//! 3. Overwrites the source with its canonical rendering, values included
//!
//! # Template
//!
//! 1. Parses the source env file and reports the result
//! 2. Unless overwriting, parses the existing destination template (a missing
//!    template is not an error) and reports it
//! 3. Fails without writing if either parse was unsuccessful
//! 4. Renders the template, merged with the existing one, and writes it
//!
//! # Examples
//!
//! ```rust,no_run
//! use evardoc::commands::{EvarDoc, TemplateOptions};
//! use std::path::PathBuf;
//!
//! let options = TemplateOptions {
//!     source: None, // defaults to .env
//!     destination: Some(PathBuf::from(".env.example")),
//!     overwrite: false,
//!     verbose: true,
//! };
//!
//! EvarDoc::template_with_options(options).unwrap();
//! ```

use std::path::PathBuf;

#[cfg(feature = "tracing")]
use tracing::{debug, info};

use crate::{
  format::{render, render_template},
  fs::{self, FileError},
  parse::{self, ParseResult},
  report::log_parse_result,
};

pub const DEFAULT_SOURCE_FILENAME: &str = ".env";
pub const DEFAULT_TEMPLATE_FILENAME: &str = "template.env";

/// Entry points for the commands.
pub struct EvarDoc;

impl EvarDoc {
  /// Reformats an env file in place.
  pub fn format_with_options(options: FormatOptions) -> Result<(), EvarDocError> {
    #[cfg(feature = "tracing")]
    info!("Executing format command");

    let FormatOptions { source, verbose } = options;
    let source = resolve(source, DEFAULT_SOURCE_FILENAME);

    #[cfg(feature = "tracing")]
    debug!(?source, "Resolved file paths");

    let parsed = parse::parse(&source)?;
    log_parse_result(&source, &parsed, verbose);
    if !parsed.success {
      return Err(EvarDocError::SourceParse(source));
    }

    let formatted = render(&parsed.variables, false, None);
    fs::write_file(&source, &formatted)?;

    #[cfg(feature = "tracing")]
    info!("Formatted {:?}", source);

    Ok(())
  }

  /// Writes a value-free template of an env file, merged into any existing template.
  pub fn template_with_options(options: TemplateOptions) -> Result<(), EvarDocError> {
    #[cfg(feature = "tracing")]
    info!("Executing template command");

    let TemplateOptions {
      source,
      destination,
      overwrite,
      verbose,
    } = options;
    let source = resolve(source, DEFAULT_SOURCE_FILENAME);
    let destination = resolve(destination, DEFAULT_TEMPLATE_FILENAME);

    #[cfg(feature = "tracing")]
    debug!(?source, ?destination, overwrite, "Resolved file paths");

    let parsed = parse::parse(&source)?;
    log_parse_result(&source, &parsed, verbose);

    let existing = if overwrite {
      None
    } else {
      parse::try_parse(&destination)
    };

    if let Some(existing) = &existing {
      log_parse_result(&destination, existing, verbose);
    } else {
      #[cfg(feature = "tracing")]
      debug!("No existing template to merge with");
    }

    if !parsed.success {
      return Err(EvarDocError::SourceParse(source));
    }
    if let Some(ParseResult { success: false, .. }) = existing {
      return Err(EvarDocError::TemplateParse(destination));
    }

    let template = render_template(
      &parsed.variables,
      existing.as_ref().map(|e| e.variables.as_slice()),
    );
    fs::write_file(&destination, &template)?;

    #[cfg(feature = "tracing")]
    info!("Wrote template to {:?}", destination);

    Ok(())
  }
}

fn resolve(path: Option<PathBuf>, default_filename: &str) -> PathBuf {
  path.unwrap_or_else(|| {
    std::env::current_dir()
      .unwrap_or_else(|_| PathBuf::from("."))
      .join(default_filename)
  })
}

/// Errors that stop a command.
#[derive(Debug, thiserror::Error)]
pub enum EvarDocError {
  #[error(transparent)]
  File(#[from] FileError),
  /// No variable of the source file parsed cleanly
  #[error("Failed to parse {}", .0.display())]
  SourceParse(PathBuf),
  /// The existing template exists but no variable of it parsed cleanly
  #[error("Failed to parse existing template {}", .0.display())]
  TemplateParse(PathBuf),
}

/// Options for [`EvarDoc::format_with_options`].
pub struct FormatOptions {
  /// Env file to format. If None, defaults to `.env` in the current directory.
  pub source: Option<PathBuf>,
  /// Report every parsed variable and warning.
  pub verbose: bool,
}

/// Options for [`EvarDoc::template_with_options`].
pub struct TemplateOptions {
  /// Env file to read. If None, defaults to `.env` in the current directory.
  pub source: Option<PathBuf>,
  /// Template to write. If None, defaults to `template.env` in the current directory.
  pub destination: Option<PathBuf>,
  /// Replace the existing template instead of merging into it.
  pub overwrite: bool,
  pub verbose: bool,
}
