//! Validation plumbing shared by the contact and payment schemas.
//!
//! A schema is a pure description: which fields exist (in display order),
//! how a `FieldValue` is written into the data record, and which message a
//! single field produces for a given record. Full-form validation is derived
//! from the per-field check, so "validate everything" and "re-validate this
//! one field" can never disagree.

use std::collections::BTreeMap;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use strum::IntoEnumIterator;

/// Input widget a field is edited with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Checkbox,
}

/// A single value handed from the rendering layer to a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Flag(_) => FieldKind::Checkbox,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Identifier of one field inside a schema.
///
/// `as_ref()` yields the stable field name (`"fullName"`, `"cvv"`, ...) used
/// as the key in error maps and serialized records. Label, placeholder and
/// kind are presentation metadata for the rendering layer.
pub trait SchemaField:
    IntoEnumIterator + AsRef<str> + Copy + Ord + fmt::Debug + 'static
{
    fn label(&self) -> &'static str;

    fn placeholder(&self) -> &'static str {
        ""
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Text
    }
}

/// Declarative validation schema for one booking step.
pub trait Schema {
    type Data: Clone + fmt::Debug + PartialEq;
    type Field: SchemaField;

    /// Current value of one field, as the rendering layer shows it.
    fn value(data: &Self::Data, field: Self::Field) -> FieldValue;

    /// Check a single field of `data`. `None` means the field is valid.
    fn check(data: &Self::Data, field: Self::Field) -> Option<&'static str>;

    /// Write `value` into `data`. Returns `false` (and leaves `data` untouched)
    /// if the value kind does not match the field kind.
    fn apply(data: &mut Self::Data, field: Self::Field, value: FieldValue) -> bool;

    /// Fields in display order.
    fn fields() -> Vec<Self::Field> {
        Self::Field::iter().collect()
    }

    /// Run every field rule. Rules are independent; all violations are reported.
    fn validate(data: &Self::Data) -> ValidationErrors<Self::Field> {
        Self::Field::iter()
            .filter_map(|field| Self::check(data, field).map(|msg| (field, msg)))
            .collect()
    }
}

/// Field name → message. A missing key means that field is currently valid.
#[derive(Clone, PartialEq, Eq)]
pub struct ValidationErrors<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> ValidationErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn remove(&mut self, field: F) -> Option<String> {
        self.errors.remove(&field)
    }

    /// Fields currently in error, in schema order.
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl<F: Ord + AsRef<str>> fmt::Debug for ValidationErrors<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.errors.iter().map(|(k, v)| (k.as_ref(), v)))
            .finish()
    }
}

impl<F: Ord, M: Into<String>> FromIterator<(F, M)> for ValidationErrors<F> {
    fn from_iter<I: IntoIterator<Item = (F, M)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().map(|(f, m)| (f, m.into())).collect(),
        }
    }
}

/// Whitespace-only counts as empty.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Presence rule: `Some(message)` if `value` is blank.
pub fn required(value: &str, message: &'static str) -> Option<&'static str> {
    is_blank(value).then_some(message)
}

lazy_static! {
    // local@label(.label)*.tld; leading dot and ".." in the local part are rejected separately
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$"
    )
    .expect("email pattern is valid");
}

/// Standard email syntax check on the trimmed value.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if !EMAIL_RE.is_match(value) {
        return false;
    }
    let local = value.split('@').next().unwrap_or_default();
    !local.starts_with('.') && !local.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detects_whitespace_only() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n "));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn required_returns_message_only_when_blank() {
        assert_eq!(required("  ", "needed"), Some("needed"));
        assert_eq!(required("x", "needed"), None);
    }

    #[test]
    fn accepts_common_addresses() {
        for ok in [
            "jane@example.com",
            "user.name@example.co.uk",
            "user+tag@example.org",
            "o'brien@mail-server.example.ie",
            "  padded@example.com  ",
        ] {
            assert!(is_valid_email(ok), "expected valid: {ok}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in [
            "invalid-email",
            "@example.com",
            "user@",
            "user@example",
            "user@.com",
            "us er@example.com",
            ".user@example.com",
            "user.@example.com",
            "us..er@example.com",
            "user@example.c",
            "user@@example.com",
        ] {
            assert!(!is_valid_email(bad), "expected invalid: {bad}");
        }
    }

    #[test]
    fn errors_collect_and_lookup() {
        let mut errors: ValidationErrors<u8> = [(2u8, "two"), (1u8, "one")].into_iter().collect();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(1), Some("one"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![1, 2]);

        errors.insert(1, "uno");
        assert_eq!(errors.get(1), Some("uno"));
        assert_eq!(errors.remove(2).as_deref(), Some("two"));
        assert!(!errors.contains(2));
    }
}
