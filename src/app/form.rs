//! Contact form data model: the four field identifiers and their values.

use std::fmt;

/// The closed set of form fields, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Gender,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Gender, Field::Message];

    /// Identifier used in diagnostics, e.g. "You must provide the email".
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Gender => "gender",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Gender => "Gender",
            Field::Message => "Message",
        }
    }

    /// Whether the field is edited as free text (as opposed to a radio group).
    pub fn is_text(&self) -> bool {
        !matches!(self, Field::Gender)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Radio options for the gender fieldset, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub const OPTIONS: [Gender; 2] = [Gender::Female, Gender::Male];

    pub fn value(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }

    pub fn from_value(value: &str) -> Option<Gender> {
        Gender::OPTIONS.into_iter().find(|g| g.value() == value)
    }
}

/// Current values of the four fields. Every field is always present;
/// "unset" is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub gender: String,
    pub message: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Gender => &self.gender,
            Field::Message => &self.message,
        }
    }

    /// Returns a copy of this state with exactly one field replaced.
    pub fn with_field(&self, field: Field, value: impl Into<String>) -> FormState {
        let mut next = self.clone();
        let value = value.into();
        match field {
            Field::Name => next.name = value,
            Field::Email => next.email = value,
            Field::Gender => next.gender = value,
            Field::Message => next.message = value,
        }
        next
    }

    pub fn selected_gender(&self) -> Option<Gender> {
        Gender::from_value(&self.gender)
    }
}
