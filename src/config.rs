//! Settings file handling
//!
//! Settings live in `config.json` under the platform config directory. A
//! missing file is not an error and yields defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SumkitError};
use crate::notification::{Locale, Notifier};

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,
}

impl Settings {
    /// Load settings from the default location.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config directory available, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load settings from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|e| {
            SumkitError::io_error("read settings", Some(path.display().to_string()), e)
        })?;

        serde_json::from_str(&contents)
            .map_err(|e| SumkitError::config_error(path.display().to_string(), e.to_string()))
    }

    /// Write settings to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SumkitError::io_error("create config dir", Some(parent.display().to_string()), e)
            })?;
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SumkitError::config_error(path.display().to_string(), e.to_string()))?;
        fs::write(path, contents).map_err(|e| {
            SumkitError::io_error("write settings", Some(path.display().to_string()), e)
        })
    }

    /// The file a load reads: `explicit` if given, else the default location.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit.map(Path::to_path_buf).or_else(Self::default_path)
    }

    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "sumkit")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Override the locale when one was given explicitly.
    pub fn with_locale(mut self, locale: Option<Locale>) -> Self {
        if let Some(locale) = locale {
            self.locale = locale;
        }
        self
    }

    pub fn notifier(&self) -> Notifier {
        Notifier::new(self.locale)
    }
}
