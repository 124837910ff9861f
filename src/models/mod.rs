//! Data models for the admin console.
//!
//! These models match the frontend TypeScript interfaces (camelCase on the wire).

mod blog;
mod content;
mod derive;
mod devis;
mod faq;
mod lead;
mod pricing;
mod project;
mod settings;
mod subscriber;
mod team;
mod testimonial;
mod user;

pub use blog::*;
pub use content::*;
pub use derive::*;
pub use devis::*;
pub use faq::*;
pub use lead::*;
pub use pricing::*;
pub use project::*;
pub use settings::*;
pub use subscriber::*;
pub use team::*;
pub use testimonial::*;
pub use user::*;

use crate::errors::AppError;

string_enum! {
    /// The agency's service lines. `General` marks records not tied to one.
    pub enum Division {
        Tech => "TECH",
        Studio => "STUDIO",
        Brand => "BRAND",
        General => "GENERAL",
    }
}

impl Division {
    /// Chart color used by the dashboard for this division.
    pub fn color(&self) -> &'static str {
        match self {
            Division::Tech => "#06b6d4",
            Division::Studio => "#d946ef",
            Division::Brand => "#6366f1",
            Division::General => "#10b981",
        }
    }
}

/// Form-boundary validation, run by the API layer before a request reaches a store.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

/// Fail when a required text field is blank.
pub(crate) fn require(value: &str, label: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", label)));
    }
    Ok(())
}

/// Fail when a supplied (partial-update) text field is blank.
pub(crate) fn require_if_present(value: Option<&String>, label: &str) -> Result<(), AppError> {
    match value {
        Some(v) => require(v, label),
        None => Ok(()),
    }
}

pub(crate) fn max_chars(value: &str, max: usize, label: &str) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            label, max
        )));
    }
    Ok(())
}

pub(crate) fn require_email(value: &str, label: &str) -> Result<(), AppError> {
    require(value, label)?;
    if !value.contains('@') {
        return Err(AppError::Validation(format!("{} must be a valid email", label)));
    }
    Ok(())
}

pub(crate) fn email_if_present(value: Option<&String>, label: &str) -> Result<(), AppError> {
    match value {
        Some(v) => require_email(v, label),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_round_trips_through_str() {
        for division in Division::ALL {
            assert_eq!(division.as_str().parse::<Division>().unwrap(), *division);
        }
        assert!("ALL".parse::<Division>().is_err());
    }

    #[test]
    fn test_validation_helpers() {
        assert!(require("  ", "Title").is_err());
        assert!(require("x", "Title").is_ok());
        assert!(max_chars(&"a".repeat(201), 200, "Excerpt").is_err());
        assert!(max_chars(&"é".repeat(200), 200, "Excerpt").is_ok());
        assert!(require_email("nobody", "Email").is_err());
        assert!(email_if_present(None, "Email").is_ok());
    }
}
