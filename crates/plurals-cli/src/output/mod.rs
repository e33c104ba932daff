//! Output formatting for CLI commands.

mod diagnostic;
pub mod table;

pub use diagnostic::plural_error_report;
