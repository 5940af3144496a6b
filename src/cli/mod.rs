//! Command-line front end. Each invocation runs one interaction cycle:
//! validate, mutate, persist, render.

use std::env;
use std::str::FromStr;

use chrono::NaiveDate;
use colored::Colorize;

use crate::{
    domain::{Category, Entry, Ledger},
    errors::ExpenseError,
    store::ExpenseStore,
    summary::SummaryService,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

const USAGE: &str = "Usage:
  spendlog add <date> <description> <category> <amount>
  spendlog budget <amount>
  spendlog list
  spendlog summary

Dates use YYYY-MM-DD. Categories: Food, Travel, Rent, Shopping, Utilities,
Entertainment, Health, Other.";

/// User-facing CLI error wrapper.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] ExpenseError),
    #[error("{0}")]
    Usage(String),
}

/// Entry point for the `spendlog` binary.
pub fn run_cli() -> Result<(), CliError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let store = ExpenseStore::new(None)?;
    let ledger = store.load()?;

    match args.first().map(String::as_str) {
        Some("add") => cmd_add(&store, ledger, &args[1..]),
        Some("budget") => cmd_budget(&store, ledger, &args[1..]),
        Some("list") => {
            render_list(&ledger);
            Ok(())
        }
        Some("summary") => {
            render_summary(&ledger);
            Ok(())
        }
        Some(other) => Err(CliError::Usage(format!(
            "unknown command `{other}`\n\n{USAGE}"
        ))),
        None => Err(CliError::Usage(USAGE.into())),
    }
}

fn cmd_add(store: &ExpenseStore, ledger: Ledger, args: &[String]) -> Result<(), CliError> {
    let [date, description, category, amount] = args else {
        return Err(CliError::Usage(
            "add expects: <date> <description> <category> <amount>".into(),
        ));
    };
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|_| ExpenseError::InvalidEntry(format!("invalid date `{date}`, expected YYYY-MM-DD")))?;
    let category = Category::from_str(category)?;
    let amount: f64 = amount
        .parse()
        .map_err(|_| ExpenseError::InvalidEntry(format!("invalid amount `{amount}`")))?;

    let entry = Entry::new(date, description.clone(), category, amount);
    store.append(ledger, entry)?;
    println!("{}", "Expense added.".green());
    Ok(())
}

fn cmd_budget(store: &ExpenseStore, ledger: Ledger, args: &[String]) -> Result<(), CliError> {
    let [amount] = args else {
        return Err(CliError::Usage("budget expects: <amount>".into()));
    };
    let amount: f64 = amount
        .parse()
        .map_err(|_| ExpenseError::InvalidBudget(format!("invalid amount `{amount}`")))?;
    store.set_budget(ledger, amount)?;
    println!("{}", "Budget saved.".green());
    Ok(())
}

fn render_list(ledger: &Ledger) {
    if ledger.is_empty() {
        println!("No expenses recorded yet.");
        return;
    }
    println!(
        "{:<12} {:<14} {:>10}  {}",
        "Date", "Category", "Amount", "Description"
    );
    for entry in &ledger.entries {
        println!(
            "{:<12} {:<14} {:>10.2}  {}",
            entry.date.format(DATE_FORMAT).to_string(),
            entry.category.as_str(),
            entry.amount,
            entry.description
        );
    }
}

fn render_summary(ledger: &Ledger) {
    let totals = SummaryService::category_totals(ledger);
    println!("Category Summary");
    if totals.is_empty() {
        println!("  (no data)");
    } else {
        // Stable display order regardless of map iteration.
        for category in Category::ALL {
            if let Some(total) = totals.get(&category) {
                println!("  {:<14} {:>10.2}", category.as_str(), total);
            }
        }
    }

    let status = SummaryService::budget_status(ledger);
    println!();
    println!("Budget Status");
    println!("  {:<14} {:>10.2}", "Monthly budget", status.monthly_budget);
    println!("  {:<14} {:>10.2}", "Total spent", status.total_spent);
    println!("  {:<14} {:>10.2}", "Remaining", status.remaining);
    if status.over_budget() {
        println!("{}", "You have exceeded your budget!".red());
    } else {
        println!("{}", "You are within your budget.".green());
    }
}
