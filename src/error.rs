use colored::Colorize;
use std::fmt;

/// Message used when a user record fails validation.
pub const INVALID_USER: &str = "Invalid user";

#[derive(Debug)]
pub enum SumkitError {
    InvalidArgument {
        message: String,
    },
    ConfigError {
        path: String,
        message: String,
    },
    IoError {
        operation: String,
        path: Option<String>,
        source: std::io::Error,
    },
}

impl SumkitError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn invalid_user() -> Self {
        Self::invalid_argument(INVALID_USER)
    }

    pub fn config_error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io_error(
        operation: impl Into<String>,
        path: Option<String>,
        source: std::io::Error,
    ) -> Self {
        Self::IoError {
            operation: operation.into(),
            path,
            source,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Colored, multi-line form for terminal output.
    pub fn render(&self) -> String {
        match self {
            Self::InvalidArgument { message } => {
                format!("{} {}", "✗".red().bold(), message.yellow())
            }
            Self::ConfigError { path, message } => format!(
                "{} Configuration error\n  {} Path: {}\n  {} Error: {}",
                "✗".red().bold(),
                "→".blue(),
                path.yellow(),
                "→".blue(),
                message
            ),
            Self::IoError {
                operation,
                path,
                source,
            } => {
                let mut out = format!(
                    "{} I/O error during: {}",
                    "✗".red().bold(),
                    operation.yellow()
                );
                if let Some(path) = path {
                    out.push_str(&format!("\n  {} Path: {}", "→".blue(), path));
                }
                out.push_str(&format!("\n  {} Error: {}", "→".blue(), source));
                out
            }
        }
    }
}

impl fmt::Display for SumkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { message } => write!(f, "{message}"),
            Self::ConfigError { path, message } => {
                write!(f, "Configuration error in {path}: {message}")
            }
            Self::IoError {
                operation,
                path: Some(path),
                source,
            } => write!(f, "I/O error during {operation} ({path}): {source}"),
            Self::IoError {
                operation,
                path: None,
                source,
            } => write!(f, "I/O error during {operation}: {source}"),
        }
    }
}

impl std::error::Error for SumkitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SumkitError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_user_display() {
        let err = SumkitError::invalid_user();
        assert_eq!(err.to_string(), "Invalid user");
        assert!(err.is_invalid_argument());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_config_error_display() {
        let err = SumkitError::config_error("/tmp/config.json", "expected value");
        assert_eq!(
            err.to_string(),
            "Configuration error in /tmp/config.json: expected value"
        );
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SumkitError::io_error("read config", Some("/etc/x".to_string()), io);
        assert!(err.to_string().contains("read config"));
        assert!(err.to_string().contains("/etc/x"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_render_contains_message() {
        colored::control::set_override(false);
        let rendered = SumkitError::invalid_argument("Usuario no válido").render();
        assert_eq!(rendered, "✗ Usuario no válido");
    }
}
