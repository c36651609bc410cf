//! The edit-buffer controller backing the user form.
//!
//! A form is seeded either from an existing record (edit mode) or from an
//! all-empty draft (create mode). Edits land in the buffer one field at a
//! time; nothing is emitted until a submit passes validation. The caller owns
//! committing the returned draft—the form itself never touches the
//! collection.

use crate::error::{Result, RosterError};
use crate::model::{User, UserDraft};
use crate::validate::{validate, Field, FieldError};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct UserForm {
    draft: UserDraft,
    errors: BTreeMap<Field, FieldError>,
    editing: Option<String>,
}

impl UserForm {
    /// A blank form for creating a new record.
    pub fn create() -> Self {
        Self::default()
    }

    /// A form pre-filled from an existing record.
    pub fn edit(user: &User) -> Self {
        Self {
            draft: user.to_draft(),
            errors: BTreeMap::new(),
            editing: Some(user.id.clone()),
        }
    }

    /// The id of the record being edited, if any.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn errors(&self) -> &BTreeMap<Field, FieldError> {
        &self.errors
    }

    /// Sets one field of the buffer by path and clears any stale error for
    /// it. Paths are either the bare field key (`name`, `lat`) or the dotted
    /// form (`address.street`, `address.geo.lat`).
    pub fn set_field(&mut self, path: &str, value: &str) -> Result<()> {
        let field = parse_field_path(path)
            .ok_or_else(|| RosterError::Api(format!("Unknown field: {}", path)))?;
        *self.field_mut(field) = value.to_string();
        self.errors.remove(&field);
        Ok(())
    }

    /// Validates the buffer. On failure the errors are stored for display
    /// and `None` is returned; nothing is emitted. On success the draft is
    /// handed to the caller and the buffer is left untouched.
    pub fn submit(&mut self) -> Option<UserDraft> {
        let errors = validate(&self.draft);
        if errors.is_empty() {
            self.errors.clear();
            Some(self.draft.clone())
        } else {
            self.errors = errors;
            None
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.draft.name,
            Field::Email => &mut self.draft.email,
            Field::Phone => &mut self.draft.phone,
            Field::Company => &mut self.draft.company,
            Field::Street => &mut self.draft.address.street,
            Field::City => &mut self.draft.address.city,
            Field::Zipcode => &mut self.draft.address.zipcode,
            Field::Lat => &mut self.draft.address.geo.lat,
            Field::Lng => &mut self.draft.address.geo.lng,
        }
    }
}

/// Resolves a field path to its field. Both the dotted spelling and the bare
/// error-map key are accepted.
pub fn parse_field_path(path: &str) -> Option<Field> {
    match path {
        "name" => Some(Field::Name),
        "email" => Some(Field::Email),
        "phone" => Some(Field::Phone),
        "company" => Some(Field::Company),
        "street" | "address.street" => Some(Field::Street),
        "city" | "address.city" => Some(Field::City),
        "zipcode" | "address.zipcode" => Some(Field::Zipcode),
        "lat" | "address.geo.lat" => Some(Field::Lat),
        "lng" | "address.geo.lng" => Some(Field::Lng),
        _ => None,
    }
}
