//! Human-readable reporting of a parse result.
//!
//! Successful parses are listed on stdout when verbose. Warnings go to stderr
//! when verbose; fatal issues always go to stderr when the parse failed.

use std::path::Path;

use crate::{
  issue::{ParseIssue, Severity},
  parse::{ParseResult, Variable},
  vocab::DocKey,
};

const INDENT: &str = "    ";

fn push_field(lines: &mut Vec<String>, key: DocKey, value: Option<String>) {
  if let Some(value) = value.filter(|v| !v.is_empty()) {
    lines.push(format!("{INDENT}{INDENT}{key}: {value}"));
  }
}

/// Lists every variable and its documentation.
pub fn success_summary(path: &Path, variables: &[Variable<'_>]) -> String {
  let mut lines = vec![format!("Successfully parsed {}", path.display())];
  let continuation = format!("\n{INDENT}{INDENT}");

  for variable in variables {
    lines.push(format!("{INDENT}variable: {}", variable.name));
    push_field(
      &mut lines,
      DocKey::Description,
      variable.description.as_ref().map(|d| d.join(&*continuation)),
    );
    push_field(&mut lines, DocKey::Type, variable.var_type.map(|t| t.to_string()));
    push_field(
      &mut lines,
      DocKey::Requirement,
      variable.requirement.map(|r| r.to_string()),
    );
    push_field(&mut lines, DocKey::Default, variable.default.as_deref().map(str::to_string));
    push_field(&mut lines, DocKey::Example, variable.example.as_deref().map(str::to_string));
  }

  lines.join("\n")
}

/// Lists the issues of the given severity under each variable that has any.
fn issue_summary(heading: String, variables: &[Variable<'_>], severity: Severity) -> Option<String> {
  let matching = |issue: &&ParseIssue| issue.severity == severity;

  let mut affected = variables
    .iter()
    .filter(|v| v.errors.iter().any(|e| e.severity == severity))
    .peekable();
  affected.peek()?;

  let mut lines = vec![heading];
  for variable in affected {
    lines.push(format!("{INDENT}variable: {}", variable.name));
    for issue in variable.errors.iter().filter(matching) {
      lines.push(format!("{INDENT}{INDENT}{issue}"));
    }
  }

  Some(lines.join("\n"))
}

pub fn warning_summary(path: &Path, variables: &[Variable<'_>]) -> Option<String> {
  issue_summary(
    format!("Encountered warnings while parsing {}", path.display()),
    variables,
    Severity::Warning,
  )
}

pub fn failure_summary(path: &Path, variables: &[Variable<'_>]) -> Option<String> {
  issue_summary(
    format!("Failed to parse {}", path.display()),
    variables,
    Severity::Fatal,
  )
}

/// Prints the outcome of parsing `path`.
pub fn log_parse_result(path: &Path, result: &ParseResult<'_>, verbose: bool) {
  if result.success && verbose {
    println!("{}", success_summary(path, &result.variables));
  }

  if verbose && let Some(warnings) = warning_summary(path, &result.variables) {
    eprintln!("{warnings}");
  }

  if !result.success && let Some(failures) = failure_summary(path, &result.variables) {
    eprintln!("{failures}");
  }
}
