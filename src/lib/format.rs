//! Canonical rendering of parsed variables, optionally merged into an existing template.
//!
//! Each variable becomes a block of `# key: value` lines in a fixed order
//! (description, type, requirement, default, example) followed by its
//! `NAME=value` line. Blocks are separated by one blank line. Variables with a
//! fatal issue are left out.
//!
//! When an existing template is given, its order is kept: entries also present
//! in the fresh variables are rendered from the fresh ones, the rest are kept as
//! they were, and fresh variables the template did not know about are appended.

use std::fmt;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::{parse::Variable, vocab::DocKey};

const COMMENT_LINE_PREFIX: &str = "# ";
const ASSIGNMENT_OPERATOR: &str = "=";
const BLOCK_SEPARATOR: &str = "\n\n";
const CONTINUATION_SEPARATOR: &str = "\n# ";

/// One variable rendered as a block.
struct Block<'v, 'a> {
  variable: &'v Variable<'a>,
  exclude_values: bool,
}

impl Block<'_, '_> {
  fn doc_value(&self, key: DocKey) -> Option<String> {
    let variable = self.variable;
    let value = match key {
      DocKey::Description => variable
        .description
        .as_ref()
        .map(|lines| lines.join(CONTINUATION_SEPARATOR)),
      DocKey::Type => variable.var_type.map(|t| t.to_string()),
      DocKey::Requirement => variable.requirement.map(|r| r.to_string()),
      DocKey::Default => variable.default.as_deref().map(str::to_string),
      DocKey::Example => variable.example.as_deref().map(str::to_string),
    };
    value.filter(|v| !v.is_empty())
  }
}

impl fmt::Display for Block<'_, '_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for key in DocKey::RENDER_ORDER {
      if let Some(value) = self.doc_value(key) {
        writeln!(f, "{COMMENT_LINE_PREFIX}{key}: {value}")?;
      }
    }

    let value = if self.exclude_values {
      ""
    } else {
      self.variable.value.as_deref().unwrap_or_default()
    };
    write!(f, "{}{}{}", self.variable.name, ASSIGNMENT_OPERATOR, value)
  }
}

/// Orders the template's entries first, preferring fresh variables of the same
/// name, then the fresh variables the template lacks.
fn merge<'v, 'a>(
  variables: &'v [Variable<'a>],
  existing_template: &'v [Variable<'a>],
) -> Vec<&'v Variable<'a>> {
  let kept = existing_template.iter().map(|stale| {
    variables
      .iter()
      .find(|fresh| fresh.name == stale.name)
      .unwrap_or(stale)
  });

  let appended = variables.iter().filter(|fresh| {
    !existing_template
      .iter()
      .any(|stale| stale.name == fresh.name)
  });

  kept.chain(appended).collect()
}

/// Renders `variables` to env file text.
///
/// With `exclude_values` every definition is written as `NAME=`.
pub fn render(
  variables: &[Variable<'_>],
  exclude_values: bool,
  existing_template: Option<&[Variable<'_>]>,
) -> String {
  let ordered = match existing_template {
    Some(template) => merge(variables, template),
    None => variables.iter().collect(),
  };

  #[cfg(feature = "tracing")]
  for skipped in ordered.iter().filter(|v| v.is_fatal()) {
    trace!("Skipping {} because of fatal issues", skipped.name);
  }

  let blocks: Vec<String> = ordered
    .into_iter()
    .filter(|variable| !variable.is_fatal())
    .map(|variable| {
      Block {
        variable,
        exclude_values,
      }
      .to_string()
    })
    .collect();

  #[cfg(feature = "tracing")]
  debug!(
    "Rendered {} blocks, exclude_values={}",
    blocks.len(),
    exclude_values
  );

  if blocks.is_empty() {
    return String::new();
  }

  let mut content = blocks.join(BLOCK_SEPARATOR);
  content.push('\n');
  content
}

/// Renders a template: documentation and names only, no values.
pub fn render_template(
  variables: &[Variable<'_>],
  existing_template: Option<&[Variable<'_>]>,
) -> String {
  render(variables, true, existing_template)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    issue::{IssueCode, ParseIssue},
    parse::ParseResult,
    vocab::{Requirement, VarType},
  };
  use std::borrow::Cow;

  fn documented(name: &'static str, value: &'static str, description: &'static str) -> Variable<'static> {
    Variable {
      name: Cow::Borrowed(name),
      value: Some(Cow::Borrowed(value)),
      description: Some(vec![Cow::Borrowed(description)]),
      var_type: Some(VarType::String),
      requirement: Some(Requirement::Required),
      default: Some(Cow::Borrowed("default value")),
      example: Some(Cow::Borrowed("example value")),
      errors: Vec::new(),
    }
  }

  fn bare(name: &'static str, value: &'static str) -> Variable<'static> {
    Variable {
      name: Cow::Borrowed(name),
      value: Some(Cow::Borrowed(value)),
      ..Default::default()
    }
  }

  #[test]
  fn test_render_block_order() {
    let variables = [documented("VAR_NAME", "VAR_VALUE", "some description")];
    let expected = "# description: some description
# type: string
# requirement: required
# default: default value
# example: example value
VAR_NAME=VAR_VALUE
";
    assert_eq!(render(&variables, false, None), expected);
  }

  #[test]
  fn test_render_excludes_values() {
    let variables = [documented("VAR_NAME", "VAR_VALUE", "some description")];
    let rendered = render(&variables, true, None);
    assert!(rendered.ends_with("\nVAR_NAME=\n"));
    assert!(!rendered.contains("VAR_VALUE"));
    assert_eq!(rendered, render_template(&variables, None));
  }

  #[test]
  fn test_render_skips_empty_fields() {
    let mut variable = bare("KEY", "");
    variable.default = Some(Cow::Borrowed(""));
    variable.value = None;
    assert_eq!(render(&[variable], false, None), "KEY=\n");
  }

  #[test]
  fn test_render_multiline_description() {
    let mut variable = bare("KEY", "1");
    variable.description = Some(vec![
      Cow::Borrowed("first"),
      Cow::Borrowed("second"),
      Cow::Borrowed("third"),
    ]);
    assert_eq!(
      render(&[variable], false, None),
      "# description: first\n# second\n# third\nKEY=1\n"
    );
  }

  #[test]
  fn test_render_skips_fatal_keeps_warnings() {
    let mut fatal = bare("FATAL", "1");
    fatal.errors.push(IssueCode::BadEvarDocValue.into());
    let mut warned = bare("WARNED", "2");
    warned.errors.push(IssueCode::NonEvarDocComment.into());
    let mut custom = bare("CUSTOM", "3");
    custom.errors.push(ParseIssue {
      code: IssueCode::EmptyLine,
      severity: crate::issue::Severity::Warning,
      message: "some warning".to_string(),
    });

    assert_eq!(
      render(&[fatal, warned, custom], false, None),
      "WARNED=2\n\nCUSTOM=3\n"
    );
  }

  #[test]
  fn test_render_nothing() {
    let empty: Vec<Variable> = Vec::new();
    assert_eq!(render(&empty, false, None), "");
    assert_eq!(render_template(&empty, Some(empty.as_slice())), "");
  }

  #[test]
  fn test_merge_with_template() {
    let template = [documented("A", "", "stale doc"), documented("B", "", "b doc")];
    let fresh = [documented("A", "a", "new doc"), bare("C", "c")];

    let rendered = render_template(&fresh, Some(template.as_slice()));
    let names: Vec<_> = rendered
      .lines()
      .filter(|line| !line.starts_with('#') && !line.is_empty())
      .collect();
    assert_eq!(names, vec!["A=", "B=", "C="]);
    assert!(rendered.contains("# description: new doc"));
    assert!(rendered.contains("# description: b doc"));
    assert!(!rendered.contains("stale doc"));
  }

  #[test]
  fn test_merge_prefers_fresh_values() {
    let template = [bare("A", "old"), bare("B", "kept")];
    let fresh = [bare("C", "new"), bare("A", "fresh")];

    assert_eq!(
      render(&fresh, false, Some(template.as_slice())),
      "A=fresh\n\nB=kept\n\nC=new\n"
    );
  }

  #[test]
  fn test_merge_skips_fatal_template_entries() {
    let mut broken = bare("BROKEN", "");
    broken.errors.push(IssueCode::DuplicateDocKey.into());
    let template = [broken, bare("OK", "")];

    assert_eq!(render_template(&[], Some(template.as_slice())), "OK=\n");
  }

  #[test]
  fn test_render_is_idempotent() {
    let input = "  # Description: Database host
#  which the service connects to
# TYPE: String
# random remark
DB_HOST = localhost

# requirement: OPTIONAL
# example: 5432
DB_PORT=
UNDOCUMENTED=yes
# type: nonsense
BROKEN=1
";
    let first = render(&ParseResult::from(input).variables, false, None);
    let second = render(&ParseResult::from(first.as_str()).variables, false, None);
    assert_eq!(first, second);
    assert_eq!(
      first,
      "# description: Database host
# which the service connects to
# type: string
DB_HOST=localhost

# requirement: optional
# example: 5432
DB_PORT=

UNDOCUMENTED=yes
"
    );
  }
}
