//! User records supplied to the notification formatter
//!
//! [`UserRecord`] is whatever the caller hands over and may be incomplete.
//! [`User`] is the validated form and always carries a non-empty name.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SumkitError};

/// Raw user input. A missing or `null` name deserializes to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub name: Option<String>,
}

impl UserRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

/// A user with a non-empty name, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserRecord", into = "UserRecord")]
pub struct User {
    name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(SumkitError::invalid_user());
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<UserRecord> for User {
    type Error = SumkitError;

    fn try_from(record: UserRecord) -> Result<Self> {
        match record.name {
            Some(name) => User::new(name),
            None => Err(SumkitError::invalid_user()),
        }
    }
}

impl TryFrom<&UserRecord> for User {
    type Error = SumkitError;

    fn try_from(record: &UserRecord) -> Result<Self> {
        match &record.name {
            Some(name) => User::new(name.as_str()),
            None => Err(SumkitError::invalid_user()),
        }
    }
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            name: Some(user.name),
        }
    }
}
