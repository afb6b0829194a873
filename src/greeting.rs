//! Two ways of greeting a user whose name may be missing.
//!
//! [`greet`] asks forgiveness: it reaches straight for the first name through
//! a chain of fallible steps and recovers once, at the end. [`greet_safe`]
//! looks before it leaps: it checks for the name up front and only then
//! splits it. Both return the same string for every user.

use crate::error::AccessError;
use crate::model::User;

const SALUTATION: &str = "Hi ";

fn first_name(user: &User) -> Result<&str, AccessError> {
    let name = user.name.as_deref().ok_or(AccessError::MissingName)?;
    name.split_whitespace().next().ok_or(AccessError::EmptyName)
}

/// Ask forgiveness: try the access, fall back on any failure.
pub fn greet(user: &User) -> String {
    match first_name(user) {
        Ok(first) => format!("{SALUTATION}{first}"),
        Err(_) => SALUTATION.to_string(),
    }
}

/// Look before you leap: check for a name before splitting it.
pub fn greet_safe(user: &User) -> String {
    let Some(name) = &user.name else {
        return SALUTATION.to_string();
    };

    let first = name.split_whitespace().next().unwrap_or_default();
    format!("{SALUTATION}{first}")
}
