//! Notification formatting
//!
//! Nothing is dispatched here: a notification is the text line that would be
//! delivered to the user.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SumkitError};
use crate::user::{User, UserRecord};

/// Language of notification and validation messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    fn sent_prefix(&self) -> &'static str {
        match self {
            Locale::En => "📩 Notification sent to",
            Locale::Es => "📩 Notificación enviada a",
        }
    }

    pub fn invalid_user_message(&self) -> &'static str {
        match self {
            Locale::En => crate::error::INVALID_USER,
            Locale::Es => "Usuario no válido",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "es" | "spanish" => Ok(Locale::Es),
            other => Err(format!("Unsupported locale: {other} (expected 'en' or 'es')")),
        }
    }
}

/// Formats notification lines for a fixed locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Notifier {
    locale: Locale,
}

impl Notifier {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats the notification line for an already validated user.
    pub fn notify(&self, user: &User) -> String {
        format!("{} {}", self.locale.sent_prefix(), user.name())
    }

    /// Validates `user` and formats its notification line.
    ///
    /// Fails with `InvalidArgument` when the user is absent or has no name.
    pub fn send(&self, user: Option<&UserRecord>) -> Result<String> {
        let user = user
            .ok_or_else(|| self.invalid_user())
            .and_then(|record| User::try_from(record).map_err(|_| self.invalid_user()))?;
        Ok(self.notify(&user))
    }

    /// Same as [`Notifier::send`] for a JSON user document.
    ///
    /// `null` is an absent user. Anything that is not a user object is
    /// rejected with the same error.
    pub fn send_json(&self, json: &str) -> Result<String> {
        let value: Value = serde_json::from_str(json).map_err(|_| self.invalid_user())?;
        let record: Option<UserRecord> = match value {
            Value::Null => None,
            // serde would also read a struct from a sequence
            Value::Object(_) => {
                Some(serde_json::from_value(value).map_err(|_| self.invalid_user())?)
            }
            _ => return Err(self.invalid_user()),
        };
        self.send(record.as_ref())
    }

    fn invalid_user(&self) -> SumkitError {
        SumkitError::invalid_argument(self.locale.invalid_user_message())
    }
}

/// Returns `"📩 Notification sent to <name>"` for a valid user.
pub fn send_notification(user: Option<&UserRecord>) -> Result<String> {
    Notifier::default().send(user)
}

/// Returns the notification line for a JSON user document.
pub fn send_notification_json(json: &str) -> Result<String> {
    Notifier::default().send_json(json)
}
