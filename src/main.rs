//! User Settings CLI
//!
//! Command-line interface for inspecting and editing the locally persisted
//! user-profile settings.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use user_settings::settings::{SettingsStore, UserState};
use user_settings::storage::{FileStore, get_storage_path};

// =============================================================================
// CLI Arguments
// =============================================================================

/// User Settings Tool
#[derive(Parser, Debug)]
#[command(name = "user-settings-cli")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the current settings (defaults if none are stored)
    Show,

    /// Update one or more profile fields
    Set {
        /// Avatar image URI
        #[arg(long)]
        avatar: Option<String>,

        /// Account balance
        #[arg(long)]
        balance: Option<f64>,

        /// Tier identifier (e.g. "0")
        #[arg(long)]
        grade: Option<String>,

        /// Display name
        #[arg(long)]
        nickname: Option<String>,
    },

    /// Overwrite the stored settings with the built-in defaults
    Reset,

    /// Print the storage file location
    Path,
}

// =============================================================================
// Command Handlers
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Show => cmd_show(),
        Command::Set {
            avatar,
            balance,
            grade,
            nickname,
        } => cmd_set(avatar, balance, grade, nickname),
        Command::Reset => cmd_reset(),
        Command::Path => cmd_path(),
    }
}

fn open_settings() -> Result<SettingsStore<FileStore>> {
    let store = FileStore::open_default().context("Failed to locate settings storage")?;
    Ok(SettingsStore::new(store))
}

fn cmd_show() -> Result<()> {
    let settings = open_settings()?;
    let state = settings.load().context("Failed to load settings")?;
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

fn cmd_set(
    avatar: Option<String>,
    balance: Option<f64>,
    grade: Option<String>,
    nickname: Option<String>,
) -> Result<()> {
    let mut settings = open_settings()?;
    let mut state = settings.load().context("Failed to load settings")?;

    if let Some(avatar) = avatar {
        state.user_info.avatar = Some(avatar);
    }
    if let Some(balance) = balance {
        state.user_info.user_balance = Some(balance);
    }
    if let Some(grade) = grade {
        state.user_info.user_grade = Some(grade);
    }
    if let Some(nickname) = nickname {
        state.user_info.nick_name = Some(nickname);
    }

    settings.save(&state).context("Failed to save settings")?;
    println!("Settings updated.");
    Ok(())
}

fn cmd_reset() -> Result<()> {
    let mut settings = open_settings()?;
    settings
        .save(&UserState::default_settings())
        .context("Failed to save settings")?;
    println!("Settings reset to defaults.");
    Ok(())
}

fn cmd_path() -> Result<()> {
    println!("{}", get_storage_path()?.display());
    Ok(())
}
