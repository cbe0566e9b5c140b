use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::{Result, TallyError};
use crate::fmt::signed_money;
use crate::i18n::tr;
use crate::models::{Language, Transaction, TransactionFields, TransactionType};
use crate::persist;
use crate::store::Store;

fn load_store() -> Result<Store> {
    let transactions = persist::load(&persist::data_file())?;
    Ok(Store::new(transactions))
}

fn validate_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(TallyError::InvalidAmount(amount.to_string()));
    }
    Ok(amount)
}

fn validate_date(date: &str) -> Result<String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| TallyError::InvalidDate(date.to_string()))?;
    Ok(date.to_string())
}

pub fn add(
    description: &str,
    amount: f64,
    date: Option<&str>,
    kind: &str,
    category: &str,
) -> Result<()> {
    let mut store = load_store()?;
    let date = match date {
        Some(d) => validate_date(d)?,
        None => chrono::Local::now().format("%Y-%m-%d").to_string(),
    };
    let fields = TransactionFields {
        date,
        description: description.to_string(),
        amount: validate_amount(amount)?,
        kind: TransactionType::parse(kind)?,
        category: category.to_string(),
    };
    let txn = store.add_transaction(fields).clone();
    persist::save(&persist::data_file(), store.transactions())?;
    println!("Added {} ({})", txn.description.bold(), txn.id);
    Ok(())
}

pub fn list(lang: Language) -> Result<()> {
    let store = load_store()?;
    if store.transactions().is_empty() {
        println!("{}", tr(lang, "noTransactions"));
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "ID",
        tr(lang, "date"),
        tr(lang, "description"),
        tr(lang, "amount"),
        tr(lang, "type"),
        tr(lang, "category"),
    ]);
    for txn in store.transactions() {
        let amount = match txn.kind {
            TransactionType::Income => signed_money(txn).green(),
            TransactionType::Expense => signed_money(txn).red(),
        };
        table.add_row(vec![
            Cell::new(&txn.id),
            Cell::new(&txn.date),
            Cell::new(&txn.description),
            Cell::new(amount),
            Cell::new(tr(lang, txn.kind.as_str())),
            Cell::new(&txn.category),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn edit(
    id: &str,
    description: &str,
    amount: f64,
    date: &str,
    kind: &str,
    category: &str,
) -> Result<()> {
    let mut store = load_store()?;
    let record = Transaction {
        id: id.to_string(),
        date: validate_date(date)?,
        description: description.to_string(),
        amount: validate_amount(amount)?,
        kind: TransactionType::parse(kind)?,
        category: category.to_string(),
    };
    if !store.update_transaction(record) {
        return Err(TallyError::NotFound(id.to_string()));
    }
    persist::save(&persist::data_file(), store.transactions())?;
    println!("Updated {id}");
    Ok(())
}

pub fn delete(id: &str) -> Result<()> {
    let mut store = load_store()?;
    if !store.delete_transaction(id) {
        return Err(TallyError::NotFound(id.to_string()));
    }
    persist::save(&persist::data_file(), store.transactions())?;
    println!("Deleted {id}");
    Ok(())
}
