//! Login credentials type.

use std::fmt;

use crate::Result;
use crate::error::InvalidInputError;
use crate::validation::{MIN_PASSWORD_LEN, is_pass_valid, is_user_valid};

/// Login credentials for the hero API.
///
/// Holds the user (an email address) and password used to obtain a session
/// token. Credentials are transient: no crate in this workspace persists them.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use dragonball_core::Credentials;
///
/// let creds = Credentials::new("goku@capsule.corp", "kamehameha");
/// assert_eq!(creds.user(), "goku@capsule.corp");
/// assert!(creds.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Returns the user name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Run the local pre-flight checks.
    ///
    /// These are advisory: callers check before logging in, the login
    /// request itself does not re-validate.
    pub fn validate(&self) -> Result<()> {
        if !is_user_valid(&self.user) {
            return Err(InvalidInputError::User {
                value: self.user.clone(),
            }
            .into());
        }
        if !is_pass_valid(&self.password) {
            return Err(InvalidInputError::Password {
                min: MIN_PASSWORD_LEN,
            }
            .into());
        }
        Ok(())
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("vegeta@saiyan.net", "prince123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("vegeta@saiyan.net"));
        assert!(!debug.contains("prince123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn validate_rejects_bad_user_first() {
        let err = Credentials::new("vegeta", "x").validate().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::User { .. })
        ));
    }

    #[test]
    fn validate_rejects_short_password() {
        let err = Credentials::new("vegeta@saiyan.net", "abc")
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput(InvalidInputError::Password { min: 4 })
        ));
    }
}
