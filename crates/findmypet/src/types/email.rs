//! E-mail address type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A syntactically plausible e-mail address.
///
/// The check is loose: no whitespace, something before `@`, and
/// a domain with a dot that has text on both sides.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new e-mail address.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref().trim();
        if let Some(reason) = problem(s) {
            return Err(InvalidInputError::Email {
                value: s.to_string(),
                reason: reason.to_string(),
            }
            .into());
        }
        Ok(Self(s.to_string()))
    }

    /// Whether `s` would be accepted by [`Email::new`].
    pub fn is_valid(s: impl AsRef<str>) -> bool {
        problem(s.as_ref().trim()).is_none()
    }

    /// Returns the address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn problem(s: &str) -> Option<&'static str> {
    if s.chars().any(char::is_whitespace) {
        return Some("must not contain whitespace");
    }
    let Some((local, domain)) = s.rsplit_once('@') else {
        return Some("must contain '@'");
    };
    if local.is_empty() {
        return Some("missing name before '@'");
    }
    let has_dotted_domain = domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len());
    if !has_dotted_domain {
        return Some("domain must contain a dot");
    }
    None
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Email {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Email::new(&s).map_err(serde::de::Error::custom)
    }
}
