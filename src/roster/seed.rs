//! The built-in example dataset.
//!
//! Five users, embedded as JSON so the record shape on disk matches the
//! serialized form of [`User`] exactly. There is no load/save path beyond
//! this: the collection lives in memory for the process lifetime.

use crate::error::Result;
use crate::model::User;

const SEED_JSON: &str = include_str!("data/seed.json");

/// Deserializes the embedded seed collection.
pub fn seed_users() -> Result<Vec<User>> {
    let users: Vec<User> = serde_json::from_str(SEED_JSON)?;
    Ok(users)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses_five_users() {
        let users = seed_users().unwrap();
        assert_eq!(users.len(), 5);
        assert_eq!(users[0].id, "1");
        assert_eq!(users[0].name, "John Doe");
        assert_eq!(users[4].company, "FinTech Innovations");
    }

    #[test]
    fn seed_ids_are_numeric_and_unique() {
        let users = seed_users().unwrap();
        let mut ids: Vec<u64> = users.iter().map(|u| u.id.parse().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn seed_timestamps_are_set_once() {
        let users = seed_users().unwrap();
        for user in users {
            assert_eq!(user.created_at, user.updated_at);
        }
    }

    #[test]
    fn seed_geo_fields_are_decimal_strings() {
        let users = seed_users().unwrap();
        for user in users {
            assert!(user.address.geo.lat.parse::<f64>().is_ok());
            assert!(user.address.geo.lng.parse::<f64>().is_ok());
        }
    }
}
