//! Implementation of the `plurals check` command.

use owo_colors::{OwoColorize, Stream};
use plurals::{build_instance, Category, PluralError, RuleListCache, RuleTable};
use serde::Serialize;
use tracing::debug;

use crate::output::plural_error_report;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Only check these locale keys (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub locale: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// A locale that failed validation.
#[derive(Debug, Serialize)]
struct CheckFailure {
    locale: String,
    category: Option<Category>,
    error: String,
}

/// JSON output for check results.
#[derive(Debug, Serialize)]
struct CheckJson {
    checked: usize,
    failures: Vec<CheckFailure>,
}

/// Run the check command.
pub fn run_check(cache: &RuleListCache<RuleTable>, args: CheckArgs) -> miette::Result<i32> {
    let table = cache.source();
    let keys: Vec<String> = if args.locale.is_empty() {
        table.keys().map(str::to_string).collect()
    } else {
        args.locale.clone()
    };

    let mut failures = Vec::new();
    for key in &keys {
        debug!(locale = %key, "checking plural rules");
        match build_instance(table, key) {
            Ok(list) if list.has_fallback() => {}
            Ok(_) => failures.push((
                CheckFailure {
                    locale: key.clone(),
                    category: None,
                    error: "last rule is not unconditional; some quantities match no category"
                        .to_string(),
                },
                None,
            )),
            Err(err) => {
                let category = match &err {
                    PluralError::Parse { category, .. } => Some(*category),
                    _ => None,
                };
                failures.push((
                    CheckFailure {
                        locale: key.clone(),
                        category,
                        error: err.to_string(),
                    },
                    Some(err),
                ));
            }
        }
    }

    if args.json {
        let output = CheckJson {
            checked: keys.len(),
            failures: failures.into_iter().map(|(failure, _)| failure).collect(),
        };
        let any_failed = !output.failures.is_empty();
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
        return Ok(if any_failed { exitcode::DATAERR } else { exitcode::OK });
    }

    let failed = failures.len();
    for (failure, err) in failures {
        match err {
            Some(err) => eprintln!("{:?}", plural_error_report(err)),
            None => eprintln!("{}: {}", failure.locale, failure.error),
        }
    }

    if failed == 0 {
        println!(
            "{}",
            format!("{} locales OK", keys.len()).if_supports_color(Stream::Stdout, |t| t.green())
        );
        Ok(exitcode::OK)
    } else {
        println!(
            "{}",
            format!("{} of {} locales failed", failed, keys.len())
                .if_supports_color(Stream::Stdout, |t| t.red())
        );
        Ok(exitcode::DATAERR)
    }
}
