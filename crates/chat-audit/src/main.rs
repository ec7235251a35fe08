//! Audit log dump tool
//!
//! Run with:
//! ```bash
//! cargo run -p chat-audit --bin audit-dump -- page.json 81384788765712384
//! ```
//!
//! Prints one summary line per entry of a saved listing response. Nothing is
//! cached, so every reference is printed as an id.

use std::fs::File;
use std::io::{BufReader, Write};

use chat_audit::{AuditLog, AuditLogPage};
use chat_cache::MemoryCache;
use chat_common::{try_init_tracing_with_config, AppConfig, AppError, AppResult, TracingConfig};
use chat_core::{Guild, Snowflake};
use tracing::{error, info};

fn main() {
    if let Err(e) = run() {
        error!(error = %e, code = e.error_code(), "audit-dump failed");
        eprintln!("error: {e}");
        std::process::exit(e.exit_code());
    }
}

fn run() -> AppResult<()> {
    let config = AppConfig::from_env()?;

    let tracing_config = if config.log.json {
        TracingConfig::production()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = try_init_tracing_with_config(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(guild_id)) = (args.next(), args.next()) else {
        return Err(AppError::invalid_input("usage: audit-dump <page.json> <guild-id>"));
    };
    let guild_id = Snowflake::parse(&guild_id)
        .map_err(|e| AppError::invalid_input(format!("guild id {guild_id:?}: {e}")))?;

    info!(app = %config.app.name, env = ?config.app.env, path = %path, "Decoding audit log page");

    let file = File::open(&path)?;
    let page = AuditLogPage::from_reader(BufReader::new(file))?;

    let guild = Guild::new(guild_id, format!("guild {guild_id}"), Snowflake::default());
    let cache = MemoryCache::new();
    let log = AuditLog::new(page, &guild, &cache, &config.cdn);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for entry in log.entries() {
        writeln!(out, "{}", entry.summary())?;
    }

    info!(entries = log.len(), "Done");
    Ok(())
}
