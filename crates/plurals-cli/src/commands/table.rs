//! Implementation of the `plurals table` command.

use std::collections::BTreeMap;

use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use plurals::{Category, RuleListCache, RuleTable};

use crate::commands::split_locale;
use crate::output::plural_error_report;
use crate::output::table::{format_category_table, LocaleColumn};

/// Arguments for the table command.
#[derive(Debug, Args)]
pub struct TableArgs {
    /// Locales to compare (comma-separated, e.g. en,ru,pt_PT).
    #[arg(long, value_delimiter = ',', required = true)]
    pub lang: Vec<String>,

    /// First quantity.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub from: i64,

    /// Last quantity (inclusive).
    #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
    pub to: i64,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the table command.
pub fn run_table(cache: &RuleListCache<RuleTable>, args: TableArgs) -> Result<i32> {
    if args.from > args.to {
        return Err(miette!("--from {} is greater than --to {}", args.from, args.to));
    }
    let quantities: Vec<i64> = (args.from..=args.to).collect();

    let mut columns = Vec::with_capacity(args.lang.len());
    for locale in &args.lang {
        let (language, region) = split_locale(locale);
        let rules = cache
            .get_instance(language, region)
            .map_err(plural_error_report)?;
        let categories = quantities
            .iter()
            .map(|&quantity| rules.category(quantity))
            .collect::<Result<Vec<Category>, _>>()
            .map_err(plural_error_report)?;
        let label = match rules.locale() {
            Some(key) if key == locale => key.to_string(),
            Some(key) => format!("{} ({})", locale, key),
            None => format!("{} (fallback)", locale),
        };
        columns.push(LocaleColumn { label, categories });
    }

    if args.json {
        // locale -> category -> quantities
        let json: BTreeMap<&str, BTreeMap<Category, Vec<i64>>> = args
            .lang
            .iter()
            .zip(&columns)
            .map(|(locale, column)| {
                let mut by_category: BTreeMap<Category, Vec<i64>> = BTreeMap::new();
                for (&quantity, &category) in quantities.iter().zip(&column.categories) {
                    by_category.entry(category).or_default().push(quantity);
                }
                (locale.as_str(), by_category)
            })
            .collect();
        let json_output = serde_json::to_string_pretty(&json).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{}", format_category_table(&quantities, &columns));
    }

    Ok(exitcode::OK)
}
