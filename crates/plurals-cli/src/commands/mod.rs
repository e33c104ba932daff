//! CLI command implementations.

mod category;
mod check;
mod table;

pub use category::{run_category, CategoryArgs};
pub use check::{run_check, CheckArgs};
pub use table::{run_table, TableArgs};

/// Split a `language[_REGION]` argument into its two parts.
pub(crate) fn split_locale(locale: &str) -> (&str, &str) {
    locale
        .split_once(|c: char| c == '_' || c == '-')
        .unwrap_or((locale, ""))
}
