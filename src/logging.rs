use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::notification::Locale;

/// Initialize structured logging based on verbosity level
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sumkit=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("sumkit=info,warn,error"))
    };

    // stdout carries command results only
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log an arithmetic evaluation
pub fn log_arithmetic(operation: &str, a: f64, b: f64, result: f64) {
    tracing::debug!(
        operation = operation,
        a = a,
        b = b,
        result = result,
        "Arithmetic evaluated"
    );
}

/// Log the outcome of a notification request
pub fn log_notification(locale: Locale, success: bool) {
    if success {
        tracing::debug!(locale = locale.code(), "Notification formatted");
    } else {
        tracing::warn!(locale = locale.code(), "Notification rejected: invalid user");
    }
}

/// Log which settings were loaded
pub fn log_config_loaded(path: Option<&str>, locale: Locale) {
    tracing::debug!(
        path = path.unwrap_or("<none>"),
        locale = locale.code(),
        "Settings loaded"
    );
}
