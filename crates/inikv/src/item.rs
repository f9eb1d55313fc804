use core::fmt;

use crate::encode::writer::LineWriter;
use crate::error::{Error, Field, Result, Violation};

/// A single `name=value` entry.
///
/// Both fields are kept in normalized form: the name is trimmed on both ends
/// and the value on the left only. Trailing whitespace in a value is content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
    value: String,
}

impl Item {
    pub fn new(name: &str, value: &str) -> Result<Self> {
        let name = validate_item_name(name)?;
        let value = validate_item_value(value)?;
        Ok(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }

    /// An item with an empty value.
    pub fn with_name(name: &str) -> Result<Self> {
        Self::new(name, "")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value. On error the previous value is kept.
    pub fn set_value(&mut self, value: &str) -> Result<()> {
        let value = validate_item_value(value)?;
        self.value.clear();
        self.value.push_str(value);
        Ok(())
    }

    pub fn into_parts(self) -> (String, String) {
        (self.name, self.value)
    }

    pub(crate) fn write_to(&self, w: &mut LineWriter) {
        w.entry(&self.name, &self.value);
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl TryFrom<(&str, &str)> for Item {
    type Error = Error;

    fn try_from((name, value): (&str, &str)) -> Result<Self> {
        Item::new(name, value)
    }
}

#[inline]
fn is_line_char_forbidden(c: char) -> bool {
    // CR and LF are control characters too
    c.is_control()
}

fn find_forbidden(s: &str, extra: &[char]) -> Option<char> {
    s.chars()
        .find(|&c| is_line_char_forbidden(c) || extra.contains(&c))
}

/// Normalizes an item name, returning the trimmed form if it is valid.
///
/// Besides the character rules, a leading `;` is rejected. That is stricter
/// than the line format itself requires: such a name would be written as a
/// comment line and lost when the document is read back.
pub fn validate_item_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid(Field::ItemName, Violation::Empty));
    }
    if name.starts_with('[') {
        return Err(Error::invalid(Field::ItemName, Violation::LeadingBracket));
    }
    if name.starts_with(';') {
        return Err(Error::invalid(Field::ItemName, Violation::LeadingSemicolon));
    }
    if let Some(c) = find_forbidden(name, &['=']) {
        return Err(Error::invalid(Field::ItemName, Violation::ForbiddenChar(c)));
    }
    Ok(name)
}

/// Normalizes an item value, returning the left-trimmed form if it is valid.
pub fn validate_item_value(value: &str) -> Result<&str> {
    let value = value.trim_start();
    if let Some(c) = find_forbidden(value, &[]) {
        return Err(Error::invalid(Field::ItemValue, Violation::ForbiddenChar(c)));
    }
    Ok(value)
}

/// Normalizes a section name, returning the trimmed form if it is valid.
pub fn validate_section_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid(Field::SectionName, Violation::Empty));
    }
    if let Some(c) = find_forbidden(name, &['[', ']']) {
        return Err(Error::invalid(
            Field::SectionName,
            Violation::ForbiddenChar(c),
        ));
    }
    Ok(name)
}
