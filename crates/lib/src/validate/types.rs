//! Types produced by configuration validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
  /// The configuration key the host shows the message against.
  pub key: String,
  pub message: String,
}

impl ValidationError {
  pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      key: key.into(),
      message: message.into(),
    }
  }
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.key, self.message)
  }
}

/// Ordered collection of field errors. Empty means the configuration is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
  errors: Vec<ValidationError>,
}

impl ValidationResult {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_error(&mut self, error: ValidationError) {
    self.errors.push(error);
  }

  pub fn is_successful(&self) -> bool {
    self.errors.is_empty()
  }

  pub fn errors(&self) -> &[ValidationError] {
    &self.errors
  }

  pub fn len(&self) -> usize {
    self.errors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.errors.is_empty()
  }

  /// Errors reported against a single key, in report order.
  pub fn errors_for<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a ValidationError> + 'a {
    self.errors.iter().filter(move |e| e.key == key)
  }

  pub fn has_error(&self, key: &str) -> bool {
    self.errors_for(key).next().is_some()
  }
}

impl fmt::Display for ValidationResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for error in &self.errors {
      if !first {
        writeln!(f)?;
      }
      write!(f, "{}", error)?;
      first = false;
    }
    Ok(())
  }
}

impl<'a> IntoIterator for &'a ValidationResult {
  type Item = &'a ValidationError;
  type IntoIter = std::slice::Iter<'a, ValidationError>;

  fn into_iter(self) -> Self::IntoIter {
    self.errors.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_result_is_successful() {
    let result = ValidationResult::new();
    assert!(result.is_successful());
    assert_eq!(result.to_string(), "");
  }

  #[test]
  fn errors_keep_insertion_order() {
    let mut result = ValidationResult::new();
    result.add_error(ValidationError::new("B", "second key"));
    result.add_error(ValidationError::new("A", "first key"));
    result.add_error(ValidationError::new("B", "again"));

    assert!(!result.is_successful());
    assert_eq!(result.len(), 3);
    assert_eq!(result.errors_for("B").count(), 2);
    assert!(result.has_error("A"));
    assert!(!result.has_error("C"));
    assert_eq!(result.to_string(), "B: second key\nA: first key\nB: again");
  }
}
