//! Display formatting for terminal output

pub mod banner;
pub mod ledger;

pub use banner::format_banner;
pub use ledger::{format_field_errors, format_ledger};
