//! The closed EvarDoc vocabulary.
//!
//! Annotation keys and the two enumerated fields (`type` and `requirement`)
//! are matched case-insensitively and always rendered in lowercase.

use std::{fmt, str::FromStr};

/// A documentation key recognized in an EvarDoc comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocKey {
  Description,
  Type,
  Requirement,
  Default,
  Example,
}

impl DocKey {
  /// Keys in the order they are rendered above a variable.
  pub const RENDER_ORDER: [DocKey; 5] = [
    DocKey::Description,
    DocKey::Type,
    DocKey::Requirement,
    DocKey::Default,
    DocKey::Example,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      DocKey::Description => "description",
      DocKey::Type => "type",
      DocKey::Requirement => "requirement",
      DocKey::Default => "default",
      DocKey::Example => "example",
    }
  }

  /// Looks up a key ignoring case.
  pub fn lookup(s: &str) -> Option<Self> {
    Self::RENDER_ORDER
      .into_iter()
      .find(|key| key.as_str().eq_ignore_ascii_case(s))
  }

  /// Checks a value against the enumeration this key is constrained to, if any.
  ///
  /// Free-text keys accept anything.
  pub fn accepts(self, value: &str) -> bool {
    match self {
      DocKey::Type => VarType::from_str(value).is_ok(),
      DocKey::Requirement => Requirement::from_str(value).is_ok(),
      DocKey::Description | DocKey::Default | DocKey::Example => true,
    }
  }

  /// Whether values of this key are enumerations, and so stored lowercased.
  pub fn is_enumerated(self) -> bool {
    matches!(self, DocKey::Type | DocKey::Requirement)
  }
}

impl fmt::Display for DocKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// The kind of data a variable holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
  String,
  Integer,
  Decimal,
  Boolean,
}

impl VarType {
  pub fn as_str(self) -> &'static str {
    match self {
      VarType::String => "string",
      VarType::Integer => "integer",
      VarType::Decimal => "decimal",
      VarType::Boolean => "boolean",
    }
  }
}

impl fmt::Display for VarType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for VarType {
  type Err = UnknownVariant;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    [
      VarType::String,
      VarType::Integer,
      VarType::Decimal,
      VarType::Boolean,
    ]
    .into_iter()
    .find(|t| t.as_str().eq_ignore_ascii_case(s))
    .ok_or_else(|| UnknownVariant(s.to_string()))
  }
}

/// Whether a variable must be set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
  Required,
  Optional,
}

impl Requirement {
  pub fn as_str(self) -> &'static str {
    match self {
      Requirement::Required => "required",
      Requirement::Optional => "optional",
    }
  }
}

impl fmt::Display for Requirement {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Requirement {
  type Err = UnknownVariant;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    [Requirement::Required, Requirement::Optional]
      .into_iter()
      .find(|r| r.as_str().eq_ignore_ascii_case(s))
      .ok_or_else(|| UnknownVariant(s.to_string()))
  }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown value: {0}")]
pub struct UnknownVariant(pub String);
