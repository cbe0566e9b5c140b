use chrono::{Datelike, NaiveDate};

use crate::models::{Language, Transaction, TransactionType};

/// Format a non-negative amount as dollars with thousands separators: $1,234.56
pub fn money(val: f64) -> String {
    let cents = (val.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let rem = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if val < 0.0 {
        format!("-${grouped}.{rem:02}")
    } else {
        format!("${grouped}.{rem:02}")
    }
}

/// Amount with an explicit +/- prefix determined by the transaction type,
/// the way the register column shows it.
pub fn signed_money(txn: &Transaction) -> String {
    match txn.kind {
        TransactionType::Income => format!("+{}", money(txn.amount)),
        TransactionType::Expense => format!("-{}", money(txn.amount)),
    }
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_AR: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
    "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
];

/// Localized display form of a stored YYYY-MM-DD date. An unparseable
/// date string is shown as-is.
pub fn display_date(date: &str, lang: Language) -> String {
    let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return date.to_string();
    };
    let month_idx = d.month0() as usize;
    match lang {
        Language::En => format!("{} {}, {}", MONTHS_EN[month_idx], d.day(), d.year()),
        Language::Ar => format!("{} {} {}", d.day(), MONTHS_AR[month_idx], d.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(kind: TransactionType, amount: f64) -> Transaction {
        Transaction {
            id: "t".to_string(),
            date: "2023-10-26".to_string(),
            description: "x".to_string(),
            amount,
            kind,
            category: "Other".to_string(),
        }
    }

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1234.56), "$1,234.56");
        assert_eq!(money(0.0), "$0.00");
        assert_eq!(money(75.0), "$75.00");
        assert_eq!(money(1000000.99), "$1,000,000.99");
        assert_eq!(money(-500.0), "-$500.00");
    }

    #[test]
    fn test_signed_money_follows_type() {
        assert_eq!(signed_money(&txn(TransactionType::Income, 5000.0)), "+$5,000.00");
        assert_eq!(signed_money(&txn(TransactionType::Expense, 150.0)), "-$150.00");
    }

    #[test]
    fn test_display_date_localized() {
        assert_eq!(display_date("2023-10-26", Language::En), "Oct 26, 2023");
        assert_eq!(display_date("2023-10-26", Language::Ar), "26 أكتوبر 2023");
    }

    #[test]
    fn test_display_date_passes_through_garbage() {
        assert_eq!(display_date("not-a-date", Language::En), "not-a-date");
    }
}
