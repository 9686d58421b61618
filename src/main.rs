use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pocketbook::cli::{
    handle_config_command, handle_entry_command, handle_export_command, handle_login_command,
    handle_register_command, render_error, ConfigCommands, EntryCommands, PasswordArgs,
};
use pocketbook::config::{PocketbookPaths, Settings};
use pocketbook::storage::Storage;
use pocketbook::PocketbookResult;

#[derive(Parser)]
#[command(
    name = "pocketbook",
    version,
    about = "Per-user personal ledger",
    long_about = "Pocketbook keeps a simple list of titled amounts for each registered \
                  user, stored locally as JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account
    Register {
        /// Account email
        email: String,
        #[command(flatten)]
        password: PasswordArgs,
        /// Password confirmation (defaults to --password when that is given)
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Check credentials
    Login {
        /// Account email
        email: String,
        #[command(flatten)]
        password: PasswordArgs,
    },

    /// Ledger entry commands
    #[command(subcommand)]
    Entry(EntryCommands),

    /// Export your ledger
    Export {
        /// Account email
        email: String,
        /// Output format (csv, json, yaml)
        #[arg(short, long, default_value = "csv")]
        format: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        password: PasswordArgs,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("POCKETBOOK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let paths = PocketbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    if !settings.audit_enabled {
        storage = storage.without_audit();
    }

    match run(cli.command, &storage, &settings, &paths) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("{}", render_error(&err, &settings));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(
    command: Option<Commands>,
    storage: &Storage,
    settings: &Settings,
    paths: &PocketbookPaths,
) -> PocketbookResult<()> {
    match command {
        Some(Commands::Register {
            email,
            password,
            confirm_password,
        }) => handle_register_command(storage, &email, &password, confirm_password)?,
        Some(Commands::Login { email, password }) => {
            handle_login_command(storage, &email, &password)?
        }
        Some(Commands::Entry(cmd)) => handle_entry_command(storage, settings, cmd)?,
        Some(Commands::Export {
            email,
            format,
            output,
            password,
        }) => handle_export_command(storage, &email, &format, output.as_deref(), &password)?,
        Some(Commands::Audit { limit }) => match storage.audit() {
            Some(logger) => {
                let entries = logger.read_recent(limit)?;
                if entries.is_empty() {
                    println!("Audit log is empty.");
                }
                for entry in entries {
                    println!("{}", entry.format_human_readable());
                }
            }
            None => println!("Audit logging is disabled."),
        },
        Some(Commands::Config { action }) => handle_config_command(paths, settings, action)?,
        None => {
            println!("Pocketbook - per-user personal ledger");
            println!();
            println!("Run 'pocketbook --help' for usage information.");
        }
    }

    Ok(())
}
