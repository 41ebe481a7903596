//! Operator CLI
//!
//! Inspects and edits the drafts held by the configured state store.

use anyhow::{Context, bail};
use autosave_infrastructure::constants::DEFAULT_SHUTDOWN_TIMEOUT_SECS;
use autosave_infrastructure::{
    AppConfig, AttachOutcome, AutoSaveOptions, ConfigLoader, DraftAutoSaveManager, build_manager,
};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

const PENDING_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Command line interface for Draft Auto-Save
#[derive(Parser, Debug)]
#[command(name = "autosave")]
#[command(about = "Draft Auto-Save - Inspect and manage saved drafts")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the keys of stored drafts
    List,
    /// Print a stored draft as pretty JSON
    Show { key: String },
    /// Exit with 0 if a draft is stored for the key, 1 otherwise
    Has { key: String },
    /// Delete the stored draft
    Clear { key: String },
    /// Attach a JSON payload and wait until it is persisted
    Save {
        key: String,
        json: String,
        /// Quiet period before the write, overriding the configured interval
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// The requested draft does not exist
    Missing,
}

/// Load configuration, honoring an explicit `--config` path
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = path {
        loader = loader.with_config_path(path);
    }
    loader.load().context("Failed to load configuration")
}

/// Run a command against the store described by `config`
pub async fn execute(
    command: &Command,
    config: &AppConfig,
    out: &mut dyn Write,
) -> anyhow::Result<CommandStatus> {
    let components = build_manager(config);
    let manager = components.manager;
    debug!(store = manager.store_name(), ?command, "Executing command");

    let status = match command {
        Command::List => {
            for key in manager.saved_keys().await {
                writeln!(out, "{key}")?;
            }
            CommandStatus::Success
        }
        Command::Show { key } => match manager.load_saved_value(key).await {
            Some(value) => {
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
                CommandStatus::Success
            }
            None => {
                writeln!(out, "No draft saved for '{key}'")?;
                CommandStatus::Missing
            }
        },
        Command::Has { key } => {
            if manager.has_saved_data(key).await {
                CommandStatus::Success
            } else {
                CommandStatus::Missing
            }
        }
        Command::Clear { key } => {
            manager.clear_saved(key).await;
            writeln!(out, "Cleared draft '{key}'")?;
            CommandStatus::Success
        }
        Command::Save {
            key,
            json,
            interval_ms,
        } => {
            let payload: serde_json::Value =
                serde_json::from_str(json).context("Draft payload is not valid JSON")?;
            let interval = interval_ms
                .map_or_else(|| manager.config().interval(), Duration::from_millis);

            let outcome = manager
                .attach(AutoSaveOptions::new(key, &payload).interval(interval))
                .await;
            match outcome {
                AttachOutcome::Scheduled | AttachOutcome::Pending => {}
                AttachOutcome::InvalidKey => bail!("Invalid draft key: '{key}'"),
                other => bail!("Draft was not scheduled: {other:?}"),
            }

            tokio::time::sleep(interval).await;
            let flushed = wait_for_pending(&manager).await;
            manager
                .shutdown(Duration::from_secs(DEFAULT_SHUTDOWN_TIMEOUT_SECS))
                .await;

            if !flushed || !manager.has_saved_data(key).await {
                bail!("Draft '{key}' was not persisted to {}", manager.store_name());
            }
            info!(key = %key, "Draft saved");
            writeln!(out, "Saved draft '{key}'")?;
            CommandStatus::Success
        }
    };

    Ok(status)
}

async fn wait_for_pending(manager: &DraftAutoSaveManager) -> bool {
    let deadline =
        tokio::time::Instant::now() + Duration::from_secs(DEFAULT_SHUTDOWN_TIMEOUT_SECS);
    while manager.pending_writes().await > 0 {
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(PENDING_POLL_INTERVAL).await;
    }
    true
}
