use serde::{Deserialize, Serialize};

use crate::error::LookupFailure;

/// A user as it arrives from the outside world.
///
/// The name is optional: records parsed from JSON may omit it or set it to
/// `null`, and both end up as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        User {
            name: Some(name.into()),
            email: email.into(),
        }
    }

    pub fn anonymous(email: impl Into<String>) -> Self {
        User {
            name: None,
            email: email.into(),
        }
    }
}

/// What the user directory knows about a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub name: String,
    pub email: String,
    pub age: u32,
}

impl UserDetails {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        UserDetails {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

/// Either the details of a user or the reason they could not be looked up.
pub type LookupResult = Result<UserDetails, LookupFailure>;
