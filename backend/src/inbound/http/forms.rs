//! HTML form input and validation.
//!
//! Browser submissions are checked field by field so the page can show a
//! message next to each input. Messages follow the conventional wording
//! users see from server-side form libraries.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::domain::{ContactDetails, ContactDraft, ContactField};

/// Message shown when a field is missing or blank.
pub const REQUIRED_MESSAGE: &str = "This field is required.";
/// Message shown when the email does not look like an address.
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address.";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // local@domain.tld with no whitespace and a dot in the domain part.
        let pattern = r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// URL-encoded body posted by the add and edit forms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Label of the button that submitted the form; carries no meaning.
    pub submit: Option<String>,
}

impl From<ContactForm> for ContactDraft {
    fn from(value: ContactForm) -> Self {
        Self {
            name: value.name,
            phone: value.phone,
            email: value.email,
            kind: value.kind,
        }
    }
}

/// Per-field error messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    entries: Vec<(ContactField, &'static str)>,
}

impl FormErrors {
    fn push(&mut self, field: ContactField, message: &'static str) {
        if self.get(field).is_none() {
            self.entries.push((field, message));
        }
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == field)
            .map(|(_, message)| *message)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// A submission that failed validation, kept for re-rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedForm {
    pub values: ContactDraft,
    pub errors: FormErrors,
}

impl ContactForm {
    /// Check presence of every field and the shape of the email.
    pub fn validate(self) -> Result<ContactDetails, RejectedForm> {
        let draft = ContactDraft::from(self);
        let mut errors = FormErrors::default();

        let details = match ContactDetails::try_from(draft.clone()) {
            Ok(details) => Some(details),
            Err(failures) => {
                for failure in failures.iter() {
                    errors.push(failure.field(), REQUIRED_MESSAGE);
                }
                None
            }
        };

        if let Some(email) = draft.email.as_deref() {
            let email = email.trim();
            if !email.is_empty() && !email_regex().is_match(email) {
                errors.push(ContactField::Email, INVALID_EMAIL_MESSAGE);
            }
        }

        match details {
            Some(details) if errors.is_empty() => Ok(details),
            _ => Err(RejectedForm {
                values: draft,
                errors,
            }),
        }
    }
}
