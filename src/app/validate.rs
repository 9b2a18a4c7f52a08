//! Submit-time validation of the contact form.
//!
//! Reports only the first problem found: missing fields in field order, then
//! the email shape check.

use crate::app::form::{Field, FormState};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Email shape: a dotted or quoted local part, then either a bracketed IPv4
/// literal or a dotted hostname ending in a 2+ letter label.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("You must provide the {0}")]
    MissingField(Field),
    #[error("Please enter correctly formatted email")]
    MalformedEmail,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn validate(form: &FormState) -> Result<(), ValidationError> {
    if let Some(field) = Field::ALL.into_iter().find(|f| form.get(*f).is_empty()) {
        return Err(ValidationError::MissingField(field));
    }
    if !is_valid_email(&form.email) {
        return Err(ValidationError::MalformedEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str) -> FormState {
        FormState {
            name: "Al".into(),
            email: email.into(),
            gender: "male".into(),
            message: "hi".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(validate(&filled("al@example.com")), Ok(()));
    }

    #[test]
    fn test_missing_name_message() {
        let form = filled("al@example.com").with_field(Field::Name, "");
        let err = validate(&form).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(Field::Name));
        assert_eq!(err.to_string(), "You must provide the name");
    }

    #[test]
    fn test_first_missing_field_wins() {
        let form = FormState::new();
        assert_eq!(
            validate(&form),
            Err(ValidationError::MissingField(Field::Name))
        );

        let form = FormState::new()
            .with_field(Field::Name, "Al")
            .with_field(Field::Message, "hi");
        assert_eq!(
            validate(&form),
            Err(ValidationError::MissingField(Field::Email))
        );

        // Missing field is reported before a malformed email
        let form = filled("bad-email").with_field(Field::Gender, "");
        assert_eq!(
            validate(&form).unwrap_err().to_string(),
            "You must provide the gender"
        );

        let form = filled("al@example.com").with_field(Field::Message, "");
        assert_eq!(
            validate(&form).unwrap_err().to_string(),
            "You must provide the message"
        );
    }

    #[test]
    fn test_malformed_email() {
        for email in ["bad-email", "foo@", "foo", "foo@bar", "@example.com", "a b@c.de", "a@b.c"] {
            let err = validate(&filled(email)).unwrap_err();
            assert_eq!(err, ValidationError::MalformedEmail, "{email}");
            assert_eq!(err.to_string(), "Please enter correctly formatted email");
        }
    }

    #[test]
    fn test_well_formed_email() {
        for email in [
            "a@b.co",
            "user.name@sub.domain.com",
            "first-last@my-host.org",
            "\"quoted name\"@example.com",
            "root@[192.168.0.1]",
        ] {
            assert!(is_valid_email(email), "{email}");
            assert_eq!(validate(&filled(email)), Ok(()));
        }
    }

    #[test]
    fn test_gender_checked_for_presence_only() {
        let form = filled("a@b.co").with_field(Field::Gender, "other");
        assert_eq!(validate(&form), Ok(()));
    }
}
