//! Implementation of the `plurals category` command.

use owo_colors::{OwoColorize, Stream};
use plurals::{Category, RuleListCache, RuleTable};
use serde::Serialize;

use crate::output::plural_error_report;

/// Arguments for the category command.
#[derive(Debug, clap::Args)]
pub struct CategoryArgs {
    /// Language code (e.g., en, ru, pt)
    #[arg(long, required = true)]
    pub lang: String,

    /// Region code (e.g., US, PT)
    #[arg(long, default_value = "")]
    pub region: String,

    /// Quantities to categorize
    #[arg(required = true, allow_negative_numbers = true)]
    pub quantities: Vec<i64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for category results.
#[derive(Serialize)]
struct CategoryResult {
    locale: Option<String>,
    results: Vec<QuantityCategory>,
}

#[derive(Serialize)]
struct QuantityCategory {
    quantity: i64,
    category: Category,
}

/// Run the category command.
pub fn run_category(cache: &RuleListCache<RuleTable>, args: CategoryArgs) -> miette::Result<i32> {
    let rules = cache
        .get_instance(&args.lang, &args.region)
        .map_err(plural_error_report)?;

    let results = args
        .quantities
        .iter()
        .map(|&quantity| {
            rules
                .category(quantity)
                .map(|category| QuantityCategory { quantity, category })
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(plural_error_report)?;

    if args.json {
        let output = CategoryResult {
            locale: rules.locale().map(str::to_string),
            results,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        let locale = rules.locale().unwrap_or("(fallback)");
        println!(
            "{}",
            format!("locale: {}", locale).if_supports_color(Stream::Stdout, |t| t.dimmed())
        );
        for result in &results {
            println!(
                "{}: {}",
                result.quantity,
                result
                    .category
                    .if_supports_color(Stream::Stdout, |t| t.green())
            );
        }
    }

    Ok(exitcode::OK)
}
