//! Contact Book - Main entry point
//!
//! Runs a line-oriented prompt over stdin. Responses go to stdout; logs go
//! to stderr.

use anyhow::Result;
use chrono::Local;
use contact_book::commands::{execute, Command, Outcome};
use contact_book::{Config, ContactStore};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut store = ContactStore::open(&config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "Welcome to the contact book!")?;
    writeln!(
        stdout,
        "{} contacts loaded from {}.",
        store.len(),
        store.location()
    )?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "Enter a command: ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            // End of input behaves like `exit`
            if let Err(e) = store.save() {
                writeln!(stdout, "Warning: contact book not saved: {}", e)?;
            }
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let today = Local::now().date_naive();
        let result = Command::parse(&line).and_then(|cmd| execute(&mut store, cmd, today));

        match result {
            Ok(Outcome::Reply(text)) => writeln!(stdout, "{}", text)?,
            Ok(Outcome::Exit(text)) => {
                writeln!(stdout, "{}", text)?;
                break;
            }
            Err(e) => writeln!(stdout, "{}", e)?,
        }
    }

    info!("Contact book shutdown complete");
    Ok(())
}
