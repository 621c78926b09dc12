//! Email addresses: the identity of both teachers and students.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Check that `value` has the basic `local@domain.tld` shape.
///
/// Exactly one `@`, no whitespace, a non-empty local part, and a `.` in the
/// domain part with at least one character on either side of it.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}

/// Returned when a string is not a well-formed email address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid email address: {0:?}")]
pub struct InvalidEmail(pub String);

/// A syntactically valid email address.
///
/// Comparison is byte-for-byte: `Ken@x.com` and `ken@x.com` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and wrap an owned string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEmail`] when [`is_valid_email`] rejects the value.
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidEmail> {
        let value = value.into();
        if is_valid_email(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidEmail(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = InvalidEmail;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
