//! Text helpers for multiline configuration values.
//!
//! `Properties` and `AdditionalParameters` are edited as free text, one entry
//! per line. The two fields split differently:
//!
//! - properties split on `\n` or `\r\n`; trailing empty lines are dropped but
//!   interior empty lines are kept (and later rejected by validation)
//! - parameters split on any run of `\r`/`\n`, so empty lines never appear

/// Whitespace removed from inside line entries: ASCII space, tab, line
/// breaks, vertical tab and form feed.
fn is_entry_whitespace(c: char) -> bool {
  matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Whitespace that counts as padding around a value. Non-breaking spaces and
/// NEL are content, not padding.
fn is_padding(c: char) -> bool {
  matches!(c, '\u{1C}'..='\u{1F}') || (c.is_whitespace() && !matches!(c, '\u{A0}' | '\u{2007}' | '\u{202F}' | '\u{85}'))
}

/// Returns true when the value is empty or padding-only.
pub fn is_blank(value: &str) -> bool {
  trim_padding(value).is_empty()
}

/// Trims padding from both ends.
pub fn trim_padding(value: &str) -> &str {
  value.trim_matches(is_padding)
}

/// Removes every whitespace character, including interior ones.
pub fn strip_whitespace(value: &str) -> String {
  value.chars().filter(|c| !is_entry_whitespace(*c)).collect()
}

/// Splits a `Properties` value into lines.
///
/// Lines end at `\n` or `\r\n`. A `\r` with no `\n` after it stays in the
/// line, so `"a=b\n\r"` yields a second line holding `"\r"`.
pub fn property_lines(value: &str) -> Vec<&str> {
  let mut lines: Vec<&str> = value.split('\n').collect();

  let terminated = lines.len().saturating_sub(1);
  for line in lines.iter_mut().take(terminated) {
    let raw: &str = *line;
    *line = raw.strip_suffix('\r').unwrap_or(raw);
  }

  while lines.last().is_some_and(|line| line.is_empty()) {
    lines.pop();
  }

  lines
}

/// Splits an `AdditionalParameters` value into non-empty lines.
pub fn parameter_lines(value: &str) -> impl Iterator<Item = &str> {
  value.split(['\r', '\n']).filter(|line| !line.is_empty())
}
