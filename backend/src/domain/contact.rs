//! Contact data model.
//!
//! A contact is the only persisted entity: an integer identifier assigned by
//! storage plus four mandatory text fields. Raw input arrives as a
//! [`ContactDraft`] (every field optional) and becomes [`ContactDetails`] only
//! once every field is present and non-blank.

use std::fmt;

/// Storage-assigned contact identifier.
///
/// Identifiers are generated on insert and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(i32);

impl ContactId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for ContactId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The business fields a contact carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Phone,
    Email,
    /// Free-form category such as "Personal" or "Business".
    Kind,
}

impl ContactField {
    /// Every field in display order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Phone, Self::Email, Self::Kind];

    /// Wire name used in JSON bodies and form submissions.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Kind => "type",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure for a single contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactValidationError {
    /// The field was not supplied at all.
    Missing { field: ContactField },
    /// The field was supplied but is empty once trimmed.
    Blank { field: ContactField },
}

impl ContactValidationError {
    /// Field the failure refers to.
    pub const fn field(self) -> ContactField {
        match self {
            Self::Missing { field } | Self::Blank { field } => field,
        }
    }

    /// Stable machine-readable code for the failure.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Missing { .. } => "missing_field",
            Self::Blank { .. } => "blank_field",
        }
    }
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "missing required field: {field}"),
            Self::Blank { field } => write!(f, "{field} must not be blank"),
        }
    }
}

impl std::error::Error for ContactValidationError {}

/// Non-empty collection of field failures, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactValidationErrors {
    first: ContactValidationError,
    rest: Vec<ContactValidationError>,
}

impl ContactValidationErrors {
    fn from_vec(errors: Vec<ContactValidationError>) -> Option<Self> {
        let mut iter = errors.into_iter();
        let first = iter.next()?;
        Some(Self {
            first,
            rest: iter.collect(),
        })
    }

    /// The first failure, used as the headline message.
    pub fn first(&self) -> ContactValidationError {
        self.first
    }

    /// Iterate over every failure.
    pub fn iter(&self) -> impl Iterator<Item = &ContactValidationError> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// Whether a failure was recorded for `field`.
    pub fn contains(&self, field: ContactField) -> bool {
        self.iter().any(|error| error.field() == field)
    }
}

impl fmt::Display for ContactValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ContactValidationErrors {}

/// Unvalidated contact input as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub kind: Option<String>,
}

impl ContactDraft {
    /// Borrow the raw value supplied for `field`.
    pub fn value(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Phone => self.phone.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::Kind => self.kind.as_deref(),
        }
    }
}

/// Validated contact fields.
///
/// ## Invariants
/// - Every field is non-empty and carries no surrounding whitespace.
///
/// # Examples
/// ```
/// use contacts::domain::ContactDetails;
///
/// let details = ContactDetails::try_new("Jane Doe", "9876543210", "jane@example.com", "Personal")
///     .expect("all fields present");
/// assert_eq!(details.kind(), "Personal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    name: String,
    phone: String,
    email: String,
    kind: String,
}

impl ContactDetails {
    /// Validate four supplied values.
    pub fn try_new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        kind: impl Into<String>,
    ) -> Result<Self, ContactValidationErrors> {
        Self::try_from(ContactDraft {
            name: Some(name.into()),
            phone: Some(phone.into()),
            email: Some(email.into()),
            kind: Some(kind.into()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Category of the contact, exposed as `type` on the wire.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Borrow the value stored for `field`.
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => self.name(),
            ContactField::Phone => self.phone(),
            ContactField::Email => self.email(),
            ContactField::Kind => self.kind(),
        }
    }
}

fn require(
    value: Option<String>,
    field: ContactField,
    errors: &mut Vec<ContactValidationError>,
) -> String {
    match value {
        None => {
            errors.push(ContactValidationError::Missing { field });
            String::new()
        }
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                errors.push(ContactValidationError::Blank { field });
                String::new()
            } else if trimmed.len() == raw.len() {
                raw
            } else {
                trimmed.to_owned()
            }
        }
    }
}

impl TryFrom<ContactDraft> for ContactDetails {
    type Error = ContactValidationErrors;

    fn try_from(value: ContactDraft) -> Result<Self, Self::Error> {
        let ContactDraft {
            name,
            phone,
            email,
            kind,
        } = value;

        let mut errors = Vec::new();
        let details = Self {
            name: require(name, ContactField::Name, &mut errors),
            phone: require(phone, ContactField::Phone, &mut errors),
            email: require(email, ContactField::Email, &mut errors),
            kind: require(kind, ContactField::Kind, &mut errors),
        };

        match ContactValidationErrors::from_vec(errors) {
            None => Ok(details),
            Some(errors) => Err(errors),
        }
    }
}

impl From<ContactDetails> for ContactDraft {
    fn from(value: ContactDetails) -> Self {
        Self {
            name: Some(value.name),
            phone: Some(value.phone),
            email: Some(value.email),
            kind: Some(value.kind),
        }
    }
}

/// A persisted contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: ContactId,
    details: ContactDetails,
}

impl Contact {
    /// Pair an identifier with validated details.
    pub fn new(id: ContactId, details: ContactDetails) -> Self {
        Self { id, details }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn details(&self) -> &ContactDetails {
        &self.details
    }

    pub fn name(&self) -> &str {
        self.details.name()
    }

    pub fn phone(&self) -> &str {
        self.details.phone()
    }

    pub fn email(&self) -> &str {
        self.details.email()
    }

    pub fn kind(&self) -> &str {
        self.details.kind()
    }

    /// Replace every business field, keeping the identifier.
    pub fn with_details(self, details: ContactDetails) -> Self {
        Self {
            id: self.id,
            details,
        }
    }
}
