//! Token types for bearer authentication.

use std::fmt;

use crate::Result;
use crate::error::InvalidInputError;

/// An access token for authenticated API requests.
///
/// Access tokens are short-lived and sent as `Authorization: Bearer <token>`.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value.
    ///
    /// # Security
    ///
    /// Use only when constructing authorization headers or persisting the
    /// credential.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}

/// A refresh token for obtaining new access tokens.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshToken(String);

impl RefreshToken {
    /// Create a new refresh token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RefreshToken").field(&"[REDACTED]").finish()
    }
}

/// The access/refresh token pair issued at login and replaced at refresh.
///
/// A credential is always complete: both tokens are present and non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credential {
    access_token: AccessToken,
    refresh_token: RefreshToken,
}

impl Credential {
    /// Create a credential from both tokens.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::Other`] if either token is empty.
    pub fn new(access_token: AccessToken, refresh_token: RefreshToken) -> Result<Self> {
        if access_token.as_str().is_empty() || refresh_token.as_str().is_empty() {
            return Err(InvalidInputError::Other {
                message: "credential tokens must not be empty".to_string(),
            }
            .into());
        }
        Ok(Self {
            access_token,
            refresh_token,
        })
    }

    /// Build a credential from possibly-missing parts.
    ///
    /// Returns `None` unless both tokens are present and non-empty.
    pub fn from_parts(access_token: Option<String>, refresh_token: Option<String>) -> Option<Self> {
        Self::new(
            AccessToken::new(access_token?),
            RefreshToken::new(refresh_token?),
        )
        .ok()
    }

    /// The access token.
    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// The refresh token.
    pub fn refresh_token(&self) -> &RefreshToken {
        &self.refresh_token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_hides_value_in_debug() {
        let token = AccessToken::new("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("eyJ"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn credential_hides_both_tokens_in_debug() {
        let credential = Credential::new(
            AccessToken::new("access-secret"),
            RefreshToken::new("refresh-secret"),
        )
        .unwrap();
        let debug = format!("{:?}", credential);
        assert!(!debug.contains("access-secret"));
        assert!(!debug.contains("refresh-secret"));
    }

    #[test]
    fn empty_tokens_are_rejected() {
        let err = Credential::new(AccessToken::new(""), RefreshToken::new("r")).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidInput(_)));
        assert!(Credential::new(AccessToken::new("a"), RefreshToken::new("")).is_err());
    }

    #[test]
    fn partial_credential_is_absent() {
        assert!(Credential::from_parts(Some("a".into()), None).is_none());
        assert!(Credential::from_parts(None, Some("r".into())).is_none());
        assert!(Credential::from_parts(Some(String::new()), Some("r".into())).is_none());

        let credential = Credential::from_parts(Some("a".into()), Some("r".into())).unwrap();
        assert_eq!(credential.access_token().as_str(), "a");
        assert_eq!(credential.refresh_token().as_str(), "r");
    }
}
