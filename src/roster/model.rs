use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub address: Address,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The subset of a user's fields accepted for create and update. Identifier
/// and timestamps are owned by the controller and never come from a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub address: Address,
}

impl User {
    /// Creates a new record from a validated draft. Both timestamps are
    /// stamped with the same instant.
    pub fn from_draft(id: String, draft: UserDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            company: draft.company,
            address: draft.address,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merges a draft into this record field by field, preserving `id` and
    /// `created_at` and stamping `updated_at`. The enumerated assignments
    /// (rather than a struct update) keep the nested address/geo fields from
    /// ever being half-merged.
    pub fn apply_draft(&mut self, draft: UserDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.phone = draft.phone;
        self.company = draft.company;
        self.address.street = draft.address.street;
        self.address.city = draft.address.city;
        self.address.zipcode = draft.address.zipcode;
        self.address.geo.lat = draft.address.geo.lat;
        self.address.geo.lng = draft.address.geo.lng;
        self.updated_at = Utc::now();
    }

    /// The draft corresponding to this record's current editable fields.
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company: self.company.clone(),
            address: self.address.clone(),
        }
    }
}

/// Picks the id for a new record: the maximum numeric id in the collection
/// plus one, with a floor of zero, rendered as a decimal string. Ids that do
/// not parse as numbers are skipped, so generated ids can never collide with
/// them.
pub fn next_user_id(users: &[User]) -> String {
    let max = users
        .iter()
        .filter_map(|u| u.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn draft(name: &str, email: &str) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: "+1-555-0000".to_string(),
            company: "Acme Corp".to_string(),
            address: Address {
                street: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                zipcode: "11111".to_string(),
                geo: Geo {
                    lat: "0.0".to_string(),
                    lng: "0.0".to_string(),
                },
            },
        }
    }

    pub fn user(id: &str, name: &str, email: &str) -> User {
        User::from_draft(id.to_string(), draft(name, email))
    }
}
