//! Field-level validation for user drafts.
//!
//! Every rule is a required-after-trim check except email, which also has to
//! look like an address: `something@something.something` with no whitespace
//! and no second `@`. This is a shape check, not RFC validation.

use crate::model::UserDraft;
use std::collections::BTreeMap;

/// The validated fields of a draft, doubling as the error-map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    Street,
    City,
    Zipcode,
    Lat,
    Lng,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::Street,
        Field::City,
        Field::Zipcode,
        Field::Lat,
        Field::Lng,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Company => "company",
            Field::Street => "street",
            Field::City => "city",
            Field::Zipcode => "zipcode",
            Field::Lat => "lat",
            Field::Lng => "lng",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Company => "Company",
            Field::Street => "Street Address",
            Field::City => "City",
            Field::Zipcode => "Zipcode",
            Field::Lat => "Latitude",
            Field::Lng => "Longitude",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A single field's validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Empty after trimming whitespace.
    Required(Field),
    /// Present but malformed (email only).
    InvalidFormat(Field),
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldError::Required(field) => write!(f, "{} is required", field.label()),
            FieldError::InvalidFormat(Field::Email) => {
                write!(f, "Please enter a valid email address")
            }
            FieldError::InvalidFormat(field) => write!(f, "{} is invalid", field.label()),
        }
    }
}

impl std::error::Error for FieldError {}

/// Checks a draft against every rule. The returned map has an entry per
/// failing field; an empty map means the draft is valid. No side effects.
pub fn validate(draft: &UserDraft) -> BTreeMap<Field, FieldError> {
    let mut errors = BTreeMap::new();

    for field in Field::ALL {
        let value = field_value(draft, field);
        if value.trim().is_empty() {
            errors.insert(field, FieldError::Required(field));
        } else if field == Field::Email && !is_email_shape(value) {
            errors.insert(field, FieldError::InvalidFormat(field));
        }
    }

    errors
}

fn field_value(draft: &UserDraft, field: Field) -> &str {
    match field {
        Field::Name => &draft.name,
        Field::Email => &draft.email,
        Field::Phone => &draft.phone,
        Field::Company => &draft.company,
        Field::Street => &draft.address.street,
        Field::City => &draft.address.city,
        Field::Zipcode => &draft.address.zipcode,
        Field::Lat => &draft.address.geo.lat,
        Field::Lng => &draft.address.geo.lng,
    }
}

/// The minimal email shape: one `@` separating two non-empty halves, no
/// whitespace anywhere, and a dot inside the domain with characters on both
/// sides.
fn is_email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let parts: Vec<&str> = value.split('@').collect();
    if parts.len() != 2 {
        return false;
    }
    let (local, domain) = (parts[0], parts[1]);
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures;

    #[test]
    fn full_draft_is_valid() {
        let draft = fixtures::draft("Ada Lovelace", "ada@computing.org");
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn empty_draft_fails_every_field() {
        let errors = validate(&UserDraft::default());
        assert_eq!(errors.len(), Field::ALL.len());
        for field in Field::ALL {
            assert_eq!(errors.get(&field), Some(&FieldError::Required(field)));
        }
    }

    #[test]
    fn whitespace_counts_as_empty() {
        let mut draft = fixtures::draft("Ada", "ada@computing.org");
        draft.name = "   ".to_string();
        draft.address.geo.lng = "\t".to_string();

        let errors = validate(&draft);
        assert_eq!(errors.get(&Field::Name), Some(&FieldError::Required(Field::Name)));
        assert_eq!(errors.get(&Field::Lng), Some(&FieldError::Required(Field::Lng)));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn missing_name_only_flags_name() {
        let mut draft = fixtures::draft("", "a@b.com");
        draft.name = String::new();
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&Field::Name), Some(&FieldError::Required(Field::Name)));
    }

    #[test]
    fn malformed_email_flags_invalid_format() {
        let mut draft = fixtures::draft("Ada", "ada@computing.org");
        draft.email = "not-an-email".to_string();
        let errors = validate(&draft);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&Field::Email),
            Some(&FieldError::InvalidFormat(Field::Email))
        );
    }

    #[test]
    fn empty_email_is_required_not_invalid() {
        let mut draft = fixtures::draft("Ada", "");
        draft.email = String::new();
        let errors = validate(&draft);
        assert_eq!(
            errors.get(&Field::Email),
            Some(&FieldError::Required(Field::Email))
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_email_shape("a@b.com"));
        assert!(is_email_shape("first.last@sub.domain.io"));
        assert!(is_email_shape("a@b.c"));

        assert!(!is_email_shape("a@b"));
        assert!(!is_email_shape("a@.com"));
        assert!(!is_email_shape("a@b."));
        assert!(!is_email_shape("ab.com"));
        assert!(!is_email_shape("a@@b.com"));
        assert!(!is_email_shape("a b@c.com"));
        assert!(!is_email_shape("a@b .com"));
    }

    #[test]
    fn error_display_matches_form_copy() {
        assert_eq!(
            FieldError::Required(Field::Name).to_string(),
            "Full Name is required"
        );
        assert_eq!(
            FieldError::InvalidFormat(Field::Email).to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(
            FieldError::Required(Field::Lat).to_string(),
            "Latitude is required"
        );
    }
}
