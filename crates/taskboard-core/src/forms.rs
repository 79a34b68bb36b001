//! Account Forms
//!
//! Field-level validation for the login and signup pages. Runs before any
//! request is built, so invalid input never reaches the network.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::api::{Credentials, RegisterRequest};
use crate::error::ClientError;

pub const MIN_PASSWORD_LEN: usize = 6;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

/// Messages keyed by the field they belong to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, &'static str>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    fn set(&mut self, field: FormField, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }

    fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Collapse into a single validation error
    pub fn into_error(self) -> ClientError {
        let joined = self.0.values().copied().collect::<Vec<_>>().join("; ");
        ClientError::Validation(joined)
    }
}

fn check_email(email: &str, errors: &mut FormErrors) {
    if email.is_empty() {
        errors.set(FormField::Email, "Email is required");
    } else if !email_pattern().is_match(email) {
        errors.set(FormField::Email, "Email is invalid");
    }
}

fn check_password(password: &str, errors: &mut FormErrors) {
    if password.is_empty() {
        errors.set(FormField::Password, "Password is required");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.set(FormField::Password, "Password must be at least 6 characters");
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, FormErrors> {
        let mut errors = FormErrors::default();
        check_email(&self.email, &mut errors);
        check_password(&self.password, &mut errors);
        errors.into_result()?;
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<RegisterRequest, FormErrors> {
        let mut errors = FormErrors::default();
        if self.first_name.is_empty() {
            errors.set(FormField::FirstName, "First name is required");
        }
        if self.last_name.is_empty() {
            errors.set(FormField::LastName, "Last name is required");
        }
        check_email(&self.email, &mut errors);
        check_password(&self.password, &mut errors);
        if self.confirm_password.is_empty() {
            errors.set(FormField::ConfirmPassword, "Please confirm your password");
        } else if self.password != self.confirm_password {
            errors.set(FormField::ConfirmPassword, "Passwords do not match");
        }
        errors.into_result()?;

        Ok(RegisterRequest {
            name: format!("{} {}", self.first_name, self.last_name),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}
