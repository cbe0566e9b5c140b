mod advice;
mod cli;
mod error;
mod fmt;
mod i18n;
mod models;
mod persist;
mod reports;
mod store;
mod tui;

use clap::Parser;

use cli::{Cli, Commands};
use models::Language;

fn main() {
    let cli = Cli::parse();

    let result = Language::parse(&cli.lang).and_then(|lang| match cli.command {
        None => cli::dashboard::run(lang),
        Some(Commands::Add {
            description,
            amount,
            date,
            kind,
            category,
        }) => cli::transactions::add(&description, amount, date.as_deref(), &kind, &category),
        Some(Commands::List) => cli::transactions::list(lang),
        Some(Commands::Edit {
            id,
            description,
            amount,
            date,
            kind,
            category,
        }) => cli::transactions::edit(&id, &description, amount, &date, &kind, &category),
        Some(Commands::Delete { id }) => cli::transactions::delete(&id),
        Some(Commands::Summary { period }) => cli::report::summary(&period, lang),
        Some(Commands::Breakdown) => cli::report::breakdown(lang),
        Some(Commands::Advice) => cli::advice::run(lang),
        Some(Commands::Status) => cli::status::run(),
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
