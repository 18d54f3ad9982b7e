//! Arithmetic helpers and a validating notification formatter.

pub mod arithmetic;
pub mod config;
pub mod error;
pub mod logging;
pub mod notification;
pub mod user;

#[cfg(test)]
mod arithmetic_proptest;

#[cfg(test)]
mod notification_proptest;

pub use arithmetic::{subtract, sum};
pub use config::Settings;
pub use error::{Result, SumkitError};
pub use notification::{send_notification, send_notification_json, Locale, Notifier};
pub use user::{User, UserRecord};
