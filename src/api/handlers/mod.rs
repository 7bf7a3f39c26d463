pub mod root;

pub mod login;

pub mod signup;

// common validation rules for the handlers
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use validator::ValidationError;

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

// local-part "@" domain, with at least one dot in the domain
pub(crate) fn email_syntax(email: &str) -> Result<(), ValidationError> {
    if valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("invalid email address syntax".into()))
    }
}

pub(crate) fn password_not_empty(password: &SecretString) -> Result<(), ValidationError> {
    if password.expose_secret().is_empty() {
        Err(ValidationError::new("length").with_message("password must not be empty".into()))
    } else {
        Ok(())
    }
}
