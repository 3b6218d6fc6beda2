//! # Signup/login form buffer and validation
//!
//! [`FormState`] is the transient input buffer shared by both modals. The
//! submit handlers validate it into a [`SignupRequest`] or [`LoginRequest`];
//! failures are a [`ValidationError`] whose `Display` text is exactly what
//! the user sees.

use crate::models::{avatar_initials, Profile, UserType};

/// Text fields of the form, addressed by the input that edited them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    GradYear,
    Bio,
}

/// Current contents of the signup/login inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub grad_year: String,
    pub bio: String,
    pub user_type: UserType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Fill all required fields.")]
    MissingRequired,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Enter email & password.")]
    MissingCredentials,
}

/// A signup that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub grad_year: String,
    pub bio: String,
    pub user_type: UserType,
}

/// A login that passed validation. The mock auth never checks it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::GradYear => &self.grad_year,
            Field::Bio => &self.bio,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::GradYear => &mut self.grad_year,
            Field::Bio => &mut self.bio,
        };
        *slot = value;
    }

    /// Check the signup preconditions in order: required fields, then
    /// password confirmation. Whitespace counts as content.
    pub fn validate_signup(&self) -> Result<SignupRequest, ValidationError> {
        let required = [
            &self.full_name,
            &self.email,
            &self.password,
            &self.confirm_password,
        ];
        if required.iter().any(|v| v.is_empty()) {
            return Err(ValidationError::MissingRequired);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(SignupRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            grad_year: self.grad_year.clone(),
            bio: self.bio.clone(),
            user_type: self.user_type,
        })
    }

    pub fn validate_login(&self) -> Result<LoginRequest, ValidationError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

impl SignupRequest {
    /// Build the directory card for this signup.
    ///
    /// An empty graduation year is shown as `year_placeholder`.
    pub fn into_profile(self, id: String, year_placeholder: &str) -> Profile {
        let year = if self.grad_year.is_empty() {
            year_placeholder.to_string()
        } else {
            self.grad_year
        };
        Profile {
            id,
            avatar: avatar_initials(&self.full_name),
            name: self.full_name,
            year,
            bio: self.bio,
            user_type: self.user_type,
        }
    }
}
