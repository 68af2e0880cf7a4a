use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::TrackerService;
use crate::domain::{
    CategorySet, TransactionKind, format_cents, validate_amount, validate_date,
};
use crate::io::Exporter;
use crate::storage::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_LEDGER_FILE, FlatFileStore};

/// Fintrack - Personal Finance Tracker
#[derive(Parser)]
#[command(name = "fintrack")]
#[command(about = "A menu-driven personal finance tracker backed by a flat text file")]
#[command(version)]
pub struct Cli {
    /// Ledger file path
    #[arg(short, long, default_value = DEFAULT_LEDGER_FILE)]
    pub file: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run; omit for the interactive menu
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export transactions to CSV or JSON
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Format: csv, json
        #[arg(short = 'F', long, default_value = "csv")]
        format: String,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let store = FlatFileStore::new(&self.file);
        let mut service = TrackerService::load(store, CategorySet::default());

        if self.verbose {
            eprintln!(
                "Loaded {} transaction(s) from {}",
                service.transactions().len(),
                self.file
            );
        }

        match self.command {
            Some(Commands::Export { output, format }) => {
                run_export_command(&service, output.as_deref(), &format)
            }
            None => run_menu_loop(&mut service, &self.file),
        }
    }
}

fn run_export_command(service: &TrackerService, output: Option<&str>, format: &str) -> Result<()> {
    let exporter = Exporter::new(service);
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(
            fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?,
        ),
        None => Box::new(io::stdout()),
    };

    match format {
        "csv" => {
            let count = exporter.export_csv(writer)?;
            if let Some(path) = output {
                eprintln!("Exported {} transaction(s) to {}", count, path);
            }
        }
        "json" => {
            let snapshot = exporter.export_json(writer)?;
            if let Some(path) = output {
                eprintln!(
                    "Exported {} transaction(s) to {}",
                    snapshot.transactions.len(),
                    path
                );
            }
        }
        other => anyhow::bail!("Unknown export format '{}'. Use csv or json", other),
    }

    Ok(())
}

fn run_menu_loop(service: &mut TrackerService, file: &str) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("Welcome to Personal Finance Tracker");
        println!("1. Add Income");
        println!("2. Add Expense");
        println!("3. View Savings");
        println!("4. View Transactions");
        println!("5. Exit");

        // EOF on stdin behaves like Exit: persist, then leave.
        let Some(choice) = prompt(&mut input, "Enter your choice: ")? else {
            save_and_report(service, file);
            break;
        };

        match choice.as_str() {
            "1" => run_add_command(service, &mut input, TransactionKind::Income)?,
            "2" => run_add_command(service, &mut input, TransactionKind::Expense)?,
            "3" => println!(
                "Your total savings: {}{}",
                DEFAULT_CURRENCY_SYMBOL,
                format_cents(service.savings())
            ),
            "4" => run_list_command(service),
            "5" => {
                save_and_report(service, file);
                println!("Exiting the program...");
                break;
            }
            _ => println!("Invalid choice, please try again."),
        }
    }

    Ok(())
}

fn run_add_command(
    service: &mut TrackerService,
    input: &mut impl BufRead,
    kind: TransactionKind,
) -> Result<()> {
    let label = kind.as_str().to_lowercase();

    // Re-prompt until the amount validates; EOF abandons the add.
    let amount = loop {
        let Some(raw) = prompt(input, &format!("Enter {} amount: ", label))? else {
            return Ok(());
        };
        match validate_amount(&raw) {
            Ok(_) => break raw,
            Err(err) => println!("{}", err),
        }
    };

    println!("Select {} category:", label);
    for (i, name) in service.categories(kind).iter().enumerate() {
        println!("{}. {}", i + 1, name);
    }
    let Some(choice) = prompt(input, "Enter category number: ")? else {
        return Ok(());
    };
    // A bad index abandons this add; the menu comes around again.
    let Ok(index) = choice.parse::<usize>() else {
        println!("Invalid category choice.");
        return Ok(());
    };

    let date = loop {
        let Some(raw) = prompt(input, "Enter date (dd-MM-yyyy): ")? else {
            return Ok(());
        };
        match validate_date(&raw) {
            Ok(_) => break raw,
            Err(err) => println!("{}", err),
        }
    };

    match service.add_transaction(kind, &amount, index, &date) {
        Ok(transaction) => println!(
            "Recorded {}: {}{} ({}) on {}",
            transaction.kind,
            DEFAULT_CURRENCY_SYMBOL,
            format_cents(transaction.amount),
            transaction.category,
            transaction.date
        ),
        Err(err) => println!("{}", err),
    }

    Ok(())
}

fn run_list_command(service: &TrackerService) {
    println!();
    println!("Transactions:");
    for transaction in service.transactions() {
        println!(
            "{}: {}{} ({}) on {}",
            transaction.kind,
            DEFAULT_CURRENCY_SYMBOL,
            format_cents(transaction.amount),
            transaction.category,
            transaction.date
        );
    }
}

/// Persist on exit. A write failure is reported and the session's data is
/// lost; there is no retry or backup file.
fn save_and_report(service: &TrackerService, file: &str) {
    match service.save() {
        Ok(()) => println!(
            "Saved {} transaction(s) to {}.",
            service.transactions().len(),
            file
        ),
        Err(err) => eprintln!("Error saving transactions: {}", err),
    }
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None); // EOF
    }
    Ok(Some(line.trim().to_string()))
}
