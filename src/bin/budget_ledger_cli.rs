use std::env;
use std::process;

use colored::Colorize;

use budget_ledger::{
    init, BudgetLedger, JsonStorage, LedgerError, MonthKey, MonthlyReport, StorageBackend,
    SystemClock, TransactionDraft,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("{} {err}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<(), LedgerError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let storage = JsonStorage::new_default()?;
    let store = storage.load_or_seed(&SystemClock)?;
    let mut ledger = BudgetLedger::with_system_clock(store);

    match args.first().map(String::as_str) {
        Some("report") | None => {
            let report = match args.get(1) {
                // whole-month report for an already materialized month
                Some(raw) => {
                    let key: MonthKey = raw.parse().map_err(LedgerError::from)?;
                    ledger.report_as_of(key.last_moment())?
                }
                None => ledger.current_report()?,
            };
            print_report(&report);
            storage.save(ledger.store())?;
        }
        Some("record") => {
            let (draft, owner) = parse_record(&args[1..])?;
            let txn = ledger.record_transaction(draft, &owner);
            storage.save(ledger.store())?;
            println!(
                "Recorded {} against {} for {}",
                format_amount(txn.amount).green(),
                txn.category.bold(),
                txn.owner
            );
        }
        Some("categories") => {
            println!("{}", "Variable categories".bold());
            for category in ledger.variable_categories() {
                println!("  {category}");
            }
            println!("{}", "Fixed categories".bold());
            for category in ledger.fixed_categories() {
                println!("  {category}");
            }
        }
        Some(other) => {
            eprintln!("Unknown command `{other}`");
            print_usage();
            process::exit(2);
        }
    }
    Ok(())
}

fn parse_record(args: &[String]) -> Result<(TransactionDraft, String), LedgerError> {
    let usage = || {
        LedgerError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "usage: record <category> <amount> --owner <email> [--title <t>] [--notes <n>]",
        ))
    };

    let mut positional = Vec::new();
    let mut owner = None;
    let mut title = None;
    let mut notes = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--owner" => owner = Some(iter.next().ok_or_else(usage)?.clone()),
            "--title" => title = Some(iter.next().ok_or_else(usage)?.clone()),
            "--notes" => notes = Some(iter.next().ok_or_else(usage)?.clone()),
            _ => positional.push(arg.clone()),
        }
    }

    let [category, amount] = positional.as_slice() else {
        return Err(usage());
    };
    let amount: i64 = amount.parse().map_err(|_| usage())?;
    let owner = owner.ok_or_else(usage)?;

    let mut draft = TransactionDraft::new(category.clone(), amount);
    if let Some(title) = title {
        draft = draft.with_title(title);
    }
    if let Some(notes) = notes {
        draft = draft.with_notes(notes);
    }
    Ok((draft, owner))
}

fn print_report(report: &MonthlyReport) {
    println!("{} {}", "Month".bold(), report.month.to_string().bold());
    println!("  income      {}", format_amount(report.totals.income));
    println!("  spent       {}", format_amount(report.totals.spent).red());
    println!(
        "  remaining   {}",
        format_amount(report.totals.remaining).green()
    );
    println!("  unallocated {}", format_amount(report.totals.unallocated));

    for category in &report.categories {
        let delta = if category.vs_previous_month > 0.0 {
            format!("+{:.1}% vs last month", category.vs_previous_month).red()
        } else if category.vs_previous_month < 0.0 {
            format!("{:.1}% vs last month", category.vs_previous_month).green()
        } else {
            "no baseline".dimmed()
        };
        println!(
            "{:<16} {:>12}  {}",
            category.category.bold(),
            format_amount(category.total),
            delta
        );
        for txn in &category.transactions {
            println!(
                "    {}  {:>12}  {}",
                txn.created_at.format("%Y-%m-%d"),
                format_amount(txn.amount),
                txn.title.as_deref().unwrap_or("-")
            );
        }
    }
}

/// Renders minor currency units with two decimal places.
fn format_amount(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

fn print_usage() {
    eprintln!("usage: budget_ledger_cli [report [MM/YY] | record | categories]");
}
