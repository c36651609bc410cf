use crate::model::User;

/// Filters the collection down to records whose name, email, company or city
/// contains the query, case-insensitively. The empty query matches everything
/// and the original relative order is always preserved.
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    if query.is_empty() {
        return users.iter().collect();
    }

    let query = query.to_lowercase();
    users
        .iter()
        .filter(|u| {
            u.name.to_lowercase().contains(&query)
                || u.email.to_lowercase().contains(&query)
                || u.company.to_lowercase().contains(&query)
                || u.address.city.to_lowercase().contains(&query)
        })
        .collect()
}
