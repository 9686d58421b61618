//! Configuration CLI commands

use clap::Subcommand;

use crate::config::{PocketbookPaths, Settings};
use crate::error::PocketbookResult;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,
    /// Change a setting (banner_timeout_secs, currency_symbol, audit_enabled)
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },
}

/// Handle a config command; `show` when none is given
pub fn handle_config_command(
    paths: &PocketbookPaths,
    settings: &Settings,
    cmd: Option<ConfigCommands>,
) -> PocketbookResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            println!("Pocketbook Configuration");
            println!("========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Banner timeout:  {}s", settings.banner_timeout_secs);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        ConfigCommands::Set { key, value } => {
            let mut updated = settings.clone();
            updated.set(&key, &value)?;
            updated.save(paths)?;
            tracing::info!(key = %key, "setting changed");
            println!("Set {} = {}", key, value);
        }
    }

    Ok(())
}
