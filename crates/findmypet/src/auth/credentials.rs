//! Login credentials type.

use std::fmt;

/// Minimum password length the backend accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Whether `password` is long enough to submit.
pub fn password_meets_minimum(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Login credentials for the `/auth/login` endpoint.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use findmypet::LoginCredentials;
///
/// let creds = LoginCredentials::new("ana@example.com", "hunter22");
/// assert_eq!(creds.email(), "ana@example.com");
/// ```
#[derive(Clone)]
pub struct LoginCredentials {
    email: String,
    password: String,
}

impl LoginCredentials {
    /// Create new credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the e-mail address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing the login request.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
