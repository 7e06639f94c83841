use std::{borrow::Cow, path::Path};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::{
  comment::{Annotation, AnnotationValue, is_blank, is_comment, parse_comments},
  fs::{self, FileError},
  issue::{IssueCode, ParseIssue},
  vocab::{DocKey, Requirement, VarType},
};

const ASSIGNMENT_OPERATOR: char = '=';

/// The comment lines above a definition, together with the definition itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord<'a> {
  /// The `key=value` line.
  pub definition: &'a str,
  pub comments: Vec<&'a str>,
}

/// Groups the lines of an env file into records.
///
/// Blank lines are skipped wherever they appear. Comments left over after the
/// last definition belong to no variable and are dropped.
pub fn raw_records(content: &str) -> Vec<RawRecord<'_>> {
  let mut records = Vec::new();
  let mut pending_comments = Vec::new();

  for line in content.lines() {
    if is_blank(line) {
      continue;
    }

    if is_comment(line) {
      pending_comments.push(line);
      continue;
    }

    #[cfg(feature = "tracing")]
    trace!(
      "Found definition {:?} with {} pending comments",
      line,
      pending_comments.len()
    );

    records.push(RawRecord {
      definition: line,
      comments: std::mem::take(&mut pending_comments),
    });
  }

  #[cfg(feature = "tracing")]
  debug!(
    "Assembled {} records, dropped {} trailing comments",
    records.len(),
    pending_comments.len()
  );

  records
}

/// The name and value of a definition line.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition<'a> {
  /// The text before the first `=`, or the whole line if it is malformed.
  pub name: Cow<'a, str>,
  pub value: Option<Cow<'a, str>>,
  pub errors: Vec<ParseIssue>,
}

pub fn parse_definition(line: &str) -> Definition<'_> {
  match line.split_once(ASSIGNMENT_OPERATOR) {
    Some((name, value)) => Definition {
      name: Cow::Borrowed(name.trim()),
      value: Some(Cow::Borrowed(value.trim())),
      errors: Vec::new(),
    },
    None => Definition {
      name: Cow::Borrowed(line),
      value: None,
      errors: vec![IssueCode::MalformedEnvironmentVariable.into()],
    },
  }
}

/// A parsed environment variable and its documentation.
///
/// A documentation field is `None` both when it was never declared and when its
/// declaration was rejected; in the latter case `errors` says why.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Variable<'a> {
  pub name: Cow<'a, str>,
  pub value: Option<Cow<'a, str>>,
  pub description: Option<Vec<Cow<'a, str>>>,
  pub var_type: Option<VarType>,
  pub requirement: Option<Requirement>,
  pub default: Option<Cow<'a, str>>,
  pub example: Option<Cow<'a, str>>,
  pub errors: Vec<ParseIssue>,
}

impl<'a> Variable<'a> {
  pub fn is_fatal(&self) -> bool {
    self.errors.iter().any(ParseIssue::is_fatal)
  }

  pub fn has_warnings(&self) -> bool {
    self.errors.iter().any(|e| !e.is_fatal())
  }

  pub fn into_owned(self) -> Variable<'static> {
    Variable {
      name: owned(self.name),
      value: self.value.map(owned),
      description: self
        .description
        .map(|lines| lines.into_iter().map(owned).collect()),
      var_type: self.var_type,
      requirement: self.requirement,
      default: self.default.map(owned),
      example: self.example.map(owned),
      errors: self.errors,
    }
  }
}

fn owned(s: Cow<'_, str>) -> Cow<'static, str> {
  Cow::Owned(s.into_owned())
}

/// Takes the value of `key` if it was declared exactly once and without errors.
fn take_value<'a>(annotations: &mut [Annotation<'a>], key: DocKey) -> Option<AnnotationValue<'a>> {
  let mut matching = annotations.iter_mut().filter(|a| a.doc_key() == Some(key));

  match (matching.next(), matching.next()) {
    (Some(only), None) if only.is_valid() => only.value.take(),
    _ => None,
  }
}

/// Turns a raw record into a variable, collecting every issue found on the way.
pub fn parse_record(record: RawRecord<'_>) -> Variable<'_> {
  let definition = parse_definition(record.definition);
  let mut annotations = parse_comments(&record.comments);

  let errors = definition
    .errors
    .into_iter()
    .chain(annotations.iter().flat_map(|a| a.errors.iter().cloned()))
    .collect();

  let description =
    take_value(&mut annotations, DocKey::Description).map(AnnotationValue::into_lines);
  let var_type = take_value(&mut annotations, DocKey::Type)
    .and_then(|v| v.first().and_then(|s| s.parse().ok()));
  let requirement = take_value(&mut annotations, DocKey::Requirement)
    .and_then(|v| v.first().and_then(|s| s.parse().ok()));
  let default = take_value(&mut annotations, DocKey::Default).and_then(AnnotationValue::into_first);
  let example = take_value(&mut annotations, DocKey::Example).and_then(AnnotationValue::into_first);

  Variable {
    name: definition.name,
    value: definition.value,
    description,
    var_type,
    requirement,
    default,
    example,
    errors,
  }
}

/// Every variable of an env file, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseResult<'a> {
  pub variables: Vec<Variable<'a>>,
  /// True when at least one variable parsed without a fatal issue.
  ///
  /// Warnings never affect this.
  pub success: bool,
}

impl<'a> ParseResult<'a> {
  pub fn from_variables(variables: Vec<Variable<'a>>) -> Self {
    let success = variables.iter().any(|v| !v.is_fatal());
    Self { variables, success }
  }

  pub fn get(&self, name: &str) -> Option<&Variable<'a>> {
    self.variables.iter().find(|v| v.name == name)
  }

  pub fn into_owned(self) -> ParseResult<'static> {
    ParseResult {
      variables: self
        .variables
        .into_iter()
        .map(Variable::into_owned)
        .collect(),
      success: self.success,
    }
  }
}

impl<'a> From<&'a str> for ParseResult<'a> {
  fn from(content: &'a str) -> Self {
    #[cfg(feature = "tracing")]
    debug!("Parsing env file with {} lines", content.lines().count());

    let variables: Vec<_> = raw_records(content).into_iter().map(parse_record).collect();
    let result = Self::from_variables(variables);

    #[cfg(feature = "tracing")]
    debug!(
      "Parsed {} variables, success={}",
      result.variables.len(),
      result.success
    );

    result
  }
}

/// Reads and parses the env file at `path`.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<ParseResult<'static>, FileError> {
  let content = fs::read_file(path)?;
  Ok(ParseResult::from(content.as_str()).into_owned())
}

/// Like [`parse`], but returns `None` when the file cannot be read.
pub fn try_parse<P: AsRef<Path>>(path: P) -> Option<ParseResult<'static>> {
  let content = fs::try_read_file(path)?;
  Some(ParseResult::from(content.as_str()).into_owned())
}
