use std::fmt;

/// How much a [`ParseIssue`] matters.
///
/// A variable carrying any fatal issue is never rendered; warnings are informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  Warning,
  Fatal,
}

impl Severity {
  pub fn as_str(self) -> &'static str {
    match self {
      Severity::Warning => "warning",
      Severity::Fatal => "fatal",
    }
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Identifies what went wrong while parsing a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCode {
  DuplicateDocKey,
  MalformedEnvironmentVariable,
  BadEvarDocValue,
  NonEvarDocComment,
  /// Reserved: blank lines are skipped without being reported.
  EmptyLine,
}

impl IssueCode {
  pub fn as_str(self) -> &'static str {
    match self {
      IssueCode::DuplicateDocKey => "duplicate-doc-key",
      IssueCode::MalformedEnvironmentVariable => "malformed-environment-variable",
      IssueCode::BadEvarDocValue => "bad-evardoc-value",
      IssueCode::NonEvarDocComment => "non-evardoc-comment",
      IssueCode::EmptyLine => "empty-line",
    }
  }

  pub fn severity(self) -> Severity {
    match self {
      IssueCode::DuplicateDocKey
      | IssueCode::MalformedEnvironmentVariable
      | IssueCode::BadEvarDocValue => Severity::Fatal,
      IssueCode::NonEvarDocComment | IssueCode::EmptyLine => Severity::Warning,
    }
  }

  pub fn message(self) -> &'static str {
    match self {
      IssueCode::DuplicateDocKey => {
        "The EvarDoc comment is declared multiple times on the same environment variable. Unable to determine which one should be used."
      }
      IssueCode::MalformedEnvironmentVariable => {
        "The environment variable does not appear to be a valid value in the format of \"key=value\". Unable to parse it."
      }
      IssueCode::BadEvarDocValue => {
        "The value applied for the EvarDoc comment is not a valid value. Unable to parse it."
      }
      IssueCode::NonEvarDocComment => {
        "The comment does not appear to be an EvarDoc doc comment. Ignoring it"
      }
      IssueCode::EmptyLine => "The line contains no data. Ignoring it",
    }
  }
}

impl fmt::Display for IssueCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A problem found while parsing, attached to the variable it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseIssue {
  pub code: IssueCode,
  pub severity: Severity,
  pub message: String,
}

impl ParseIssue {
  pub fn is_fatal(&self) -> bool {
    self.severity == Severity::Fatal
  }
}

impl From<IssueCode> for ParseIssue {
  fn from(code: IssueCode) -> Self {
    ParseIssue {
      code,
      severity: code.severity(),
      message: code.message().to_string(),
    }
  }
}

impl fmt::Display for ParseIssue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({})", self.message, self.code)
  }
}
