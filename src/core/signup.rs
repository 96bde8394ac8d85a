//! Sign-up form model and validation
//!
//! The navigation controller stores whatever email the landing hero
//! submitted; checking it is the sign-up screen's job and happens here.

use thiserror::Error;

/// Maximum length of an email address (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Minimum length of a display name
pub const MIN_NAME_LENGTH: usize = 2;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A single sign-up field problem
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Email is required")]
    EmailEmpty,
    #[error("Please enter a valid email")]
    EmailInvalid,
    #[error("Email must be at most {max} characters")]
    EmailTooLong { max: usize },
    #[error("Name is required")]
    NameEmpty,
    #[error("Name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Password must contain a letter and a digit")]
    PasswordTooWeak,
}

/// Which form field an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Email,
    Name,
    Password,
}

impl SignupError {
    pub fn field(&self) -> SignupField {
        match self {
            SignupError::EmailEmpty
            | SignupError::EmailInvalid
            | SignupError::EmailTooLong { .. } => SignupField::Email,
            SignupError::NameEmpty | SignupError::NameTooShort { .. } => SignupField::Name,
            SignupError::PasswordTooShort { .. } | SignupError::PasswordTooWeak => {
                SignupField::Password
            }
        }
    }
}

/// Values entered on the sign-up screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub full_name: String,
    pub password: String,
}

impl SignupForm {
    /// Start from the email captured on the landing page
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Validate every field, collecting at most one error per field
    pub fn validate(&self) -> Result<(), Vec<SignupError>> {
        let errors: Vec<SignupError> = [
            validate_email(&self.email).err(),
            validate_name(&self.full_name).err(),
            validate_password(&self.password).err(),
        ]
        .into_iter()
        .flatten()
        .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// First error reported for `field`, if any
pub fn error_for(errors: &[SignupError], field: SignupField) -> Option<&SignupError> {
    errors.iter().find(|e| e.field() == field)
}

pub fn validate_email(email: &str) -> Result<(), SignupError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(SignupError::EmailEmpty);
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(SignupError::EmailTooLong {
            max: MAX_EMAIL_LENGTH,
        });
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(SignupError::EmailInvalid);
    };
    // At least two labels, none empty and none made only of hyphens
    let domain_ok = domain.contains('.')
        && domain
            .split('.')
            .all(|label| !label.is_empty() && !label.chars().all(|c| c == '-'));
    if local.is_empty() || domain.contains('@') || email.contains(char::is_whitespace) || !domain_ok
    {
        return Err(SignupError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), SignupError> {
    let name = name.trim();
    if name.is_empty() {
        Err(SignupError::NameEmpty)
    } else if name.chars().count() < MIN_NAME_LENGTH {
        Err(SignupError::NameTooShort {
            min: MIN_NAME_LENGTH,
        })
    } else {
        Ok(())
    }
}

pub fn validate_password(password: &str) -> Result<(), SignupError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        Err(SignupError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        })
    } else if !password.chars().any(|c| c.is_alphabetic())
        || !password.chars().any(|c| c.is_numeric())
    {
        Err(SignupError::PasswordTooWeak)
    } else {
        Ok(())
    }
}
