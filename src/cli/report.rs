use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::i18n::tr;
use crate::models::Language;
use crate::persist;
use crate::reports::{self, Period};

pub fn summary(period_arg: &str, lang: Language) -> Result<()> {
    let transactions = persist::load(&persist::data_file())?;
    let period = Period::parse(period_arg)?;
    let today = chrono::Local::now().date_naive();
    let summary = reports::summarize(&transactions, period, today);

    let net_key = if summary.is_profit() { "netProfit" } else { "loss" };
    let net_cell = if summary.is_profit() {
        Cell::new(money(summary.net).green())
    } else {
        Cell::new(money(summary.net).red())
    };

    let mut table = Table::new();
    table.add_row(vec![
        Cell::new(tr(lang, "totalIncome").bold()),
        Cell::new(money(summary.total_income)),
    ]);
    table.add_row(vec![
        Cell::new(tr(lang, "totalExpenses").bold()),
        Cell::new(money(summary.total_expenses)),
    ]);
    table.add_row(vec![Cell::new(tr(lang, net_key).bold()), net_cell]);

    println!("{} ({})", tr(lang, "dashboard"), tr(lang, period.label_key()));
    println!("{table}");
    Ok(())
}

pub fn breakdown(lang: Language) -> Result<()> {
    let transactions = persist::load(&persist::data_file())?;
    let breakdown = reports::expense_breakdown(&transactions);
    if breakdown.is_empty() {
        println!("{}", tr(lang, "noExpenseData"));
        return Ok(());
    }

    let total: f64 = breakdown.iter().map(|c| c.total).sum();
    let mut table = Table::new();
    table.set_header(vec![tr(lang, "category"), tr(lang, "amount"), "%"]);
    for item in &breakdown {
        let pct = if total != 0.0 { item.total / total * 100.0 } else { 0.0 };
        table.add_row(vec![
            Cell::new(&item.category),
            Cell::new(money(item.total)),
            Cell::new(format!("{pct:.1}%")),
        ]);
    }
    table.add_row(vec![
        Cell::new(tr(lang, "totalExpenses").bold()),
        Cell::new(money(total).red()),
        Cell::new("100.0%"),
    ]);

    println!("{}", tr(lang, "expensesByCategory"));
    println!("{table}");
    Ok(())
}
