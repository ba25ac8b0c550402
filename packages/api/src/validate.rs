//! # Client-side validation
//!
//! Field-level checks run before a request is dispatched. A failure here
//! never reaches the network: the form blocks submission and shows the
//! message. Each create/login DTO exposes a `validate()` covering its
//! required fields; the free functions are the shared field rules.

use thiserror::Error;

use crate::models::{CreateAnimal, CreateOwner, CreateRecord, Credentials, NewUser};

/// A single failed field check. `field` is the wire name of the offending
/// field so forms can highlight it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Non-blank check, used by every required text field.
pub fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{field} is required")));
    }
    Ok(())
}

/// Minimal shape check: something before and after the `@`, and a dot in
/// the domain part.
pub fn email(value: &str) -> Result<(), ValidationError> {
    require(value, "email")?;
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(ValidationError::new("email", "email is invalid"));
    }
    Ok(())
}

/// At least 8 characters, with at least one letter and one digit.
pub fn password(value: &str) -> Result<(), ValidationError> {
    require(value, "password")?;
    if value.len() < 8 {
        return Err(ValidationError::new(
            "password",
            "password must be at least 8 characters",
        ));
    }
    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err(ValidationError::new(
            "password",
            "password must contain at least one letter and one digit",
        ));
    }
    Ok(())
}

/// Both password fields must match exactly.
pub fn password_match(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password != confirmation {
        return Err(ValidationError::new(
            "confirmPassword",
            "passwords do not match",
        ));
    }
    Ok(())
}

/// 10 or 11 digits once formatting characters are stripped.
pub fn phone(value: &str) -> Result<(), ValidationError> {
    require(value, "phone")?;
    let digits = value.chars().filter(char::is_ascii_digit).count();
    if !(10..=11).contains(&digits) {
        return Err(ValidationError::new("phone", "phone is invalid"));
    }
    Ok(())
}

impl Credentials {
    pub fn validate(&self) -> Result<(), ValidationError> {
        email(&self.email)?;
        require(&self.password, "password")
    }
}

impl NewUser {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        email(&self.email)?;
        password(&self.password)
    }
}

impl CreateOwner {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        phone(&self.phone)?;
        if let Some(value) = self.email.as_deref() {
            email(value)?;
        }
        Ok(())
    }
}

impl CreateAnimal {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name")?;
        require(&self.species, "species")?;
        require(&self.owner_id, "ownerId")
    }
}

impl CreateRecord {
    /// Every record field is required by the form, notes included.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.weight, "weight")?;
        require(&self.medications, "medications")?;
        require(&self.dosage, "dosage")?;
        require(&self.notes, "notes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn require_rejects_blank_values() {
        assert!(require("", "name").is_err());
        assert!(require("   ", "name").is_err());
        assert!(require("Ana", "name").is_ok());
    }

    #[test]
    fn email_shape() {
        assert!(email("a@b.com").is_ok());
        assert!(email("missing-at.com").is_err());
        assert!(email("@b.com").is_err());
        assert!(email("a@nodot").is_err());
        assert!(email("").is_err());
    }

    #[test]
    fn password_rules() {
        assert!(password("validpass1").is_ok());
        assert!(password("short1a").is_err());
        assert!(password("allletters").is_err());
        assert!(password("12345678").is_err());
    }

    #[test]
    fn password_match_rule() {
        assert!(password_match("abc12345", "abc12345").is_ok());
        assert!(password_match("abc12345", "abc12346").is_err());
    }

    #[test]
    fn phone_digit_count() {
        assert!(phone("(11) 99999-0000").is_ok());
        assert!(phone("1199990000").is_ok());
        assert!(phone("12345").is_err());
        assert!(phone("123456789012").is_err());
    }

    #[test]
    fn create_record_requires_notes() {
        let record = CreateRecord {
            weight: "4.2kg".to_string(),
            medications: "antibiotic".to_string(),
            dosage: "1x day".to_string(),
            notes: String::new(),
            attended_at: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
            animal_id: "a1".to_string(),
        };
        let err = record.validate().unwrap_err();
        assert_eq!(err.field, "notes");
    }

    #[test]
    fn create_owner_validates_optional_email_when_present() {
        let owner = CreateOwner {
            name: "Carlos".to_string(),
            phone: "11999990000".to_string(),
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(owner.validate().is_err());

        let owner = CreateOwner {
            name: "Carlos".to_string(),
            phone: "11999990000".to_string(),
            email: None,
            ..Default::default()
        };
        assert!(owner.validate().is_ok());
    }
}
