//! Ledger entry CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_ledger;
use crate::error::PocketbookResult;
use crate::services::LedgerService;
use crate::storage::Storage;
use crate::validation::EntryForm;

use super::{prepare_form, with_session, PasswordArgs};

/// Entry subcommands
#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// Add an entry to your ledger
    Add {
        /// Account email
        email: String,
        /// Entry title
        title: String,
        /// Entry amount (e.g. "5" or "12.50")
        amount: String,
        #[command(flatten)]
        password: PasswordArgs,
    },
    /// Remove every entry with the given title
    Remove {
        /// Account email
        email: String,
        /// Title of the entries to remove
        title: String,
        #[command(flatten)]
        password: PasswordArgs,
    },
    /// List your entries
    List {
        /// Account email
        email: String,
        #[command(flatten)]
        password: PasswordArgs,
    },
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> PocketbookResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        EntryCommands::Add {
            email,
            title,
            amount,
            password,
        } => with_session(storage, &email, &password, |user| {
            let mut form = prepare_form(EntryForm::new(title, amount))?;
            let entry = service.add(user, form.values())?;
            form.mark_submitted()?;

            println!("Added '{}' ({}).", entry.title, entry.amount);
            Ok(())
        }),

        EntryCommands::Remove {
            email,
            title,
            password,
        } => with_session(storage, &email, &password, |user| {
            let removed = service.remove(user, &title)?;
            let title = title.trim();

            match removed {
                0 => println!("No entries titled '{}'.", title),
                1 => println!("Removed 1 entry titled '{}'.", title),
                n => println!("Removed {} entries titled '{}'.", n, title),
            }
            Ok(())
        }),

        EntryCommands::List { email, password } => {
            with_session(storage, &email, &password, |user| {
                let summary = service.summary(user)?;
                println!("{}", format_ledger(&summary, &settings.currency_symbol));
                Ok(())
            })
        }
    }
}
