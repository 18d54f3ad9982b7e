use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use std::process;

use sumkit::logging::{init_logging, log_arithmetic, log_config_loaded, log_notification};
use sumkit::{subtract, sum, Locale, Settings, SumkitError, UserRecord};

#[derive(Parser)]
#[command(name = "sumkit")]
#[command(version)]
#[command(about = "Arithmetic helpers and notification formatting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,

    #[arg(long, help = "Path to a settings file", global = true)]
    config: Option<PathBuf>,

    #[arg(long, help = "Message language (en, es)", global = true)]
    locale: Option<Locale>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Add two numbers", allow_negative_numbers = true)]
    Sum {
        #[arg(help = "First operand")]
        a: f64,
        #[arg(help = "Second operand")]
        b: f64,
    },

    #[command(
        about = "Legacy subtract (adds its operands)",
        allow_negative_numbers = true
    )]
    Subtract {
        #[arg(help = "First operand")]
        a: f64,
        #[arg(help = "Second operand")]
        b: f64,
    },

    #[command(about = "Format a notification for a user")]
    Notify {
        #[arg(long, help = "Name of the user", conflicts_with = "json")]
        name: Option<String>,

        #[arg(long, help = "User as a JSON document, e.g. '{\"name\": \"Maria\"}'")]
        json: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{} {}", "⚠".yellow(), e);
    }

    if let Err(err) = run(cli) {
        match err.downcast_ref::<SumkitError>() {
            Some(sumkit_err) => eprintln!("{}", sumkit_err.render()),
            None => eprintln!("{} {:#}", "✗".red().bold(), err),
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Sum { a, b } => {
            let result = sum(a, b);
            log_arithmetic("sum", a, b, result);
            println!("{result}");
        }
        Commands::Subtract { a, b } => {
            let result = subtract(a, b);
            log_arithmetic("subtract", a, b, result);
            println!("{result}");
        }
        Commands::Notify { name, json } => {
            let settings = load_settings(cli.config.as_deref())?.with_locale(cli.locale);
            let notifier = settings.notifier();

            let outcome = match json {
                Some(doc) => notifier.send_json(&doc),
                None => notifier.send(name.map(UserRecord::named).as_ref()),
            };
            log_notification(notifier.locale(), outcome.is_ok());
            println!("{}", outcome?);
        }
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let settings = match path {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    let resolved = Settings::resolve_path(path);
    log_config_loaded(resolved.as_deref().and_then(Path::to_str), settings.locale);
    Ok(settings)
}
