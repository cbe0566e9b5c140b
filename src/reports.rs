use chrono::{Datelike, NaiveDate};

use crate::error::{Result, TallyError};
use crate::models::{Transaction, TransactionType};

/// Window used to scope the summary cards to the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Monthly,
    Annually,
}

impl Period {
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "monthly" => Ok(Period::Monthly),
            "annually" => Ok(Period::Annually),
            other => Err(TallyError::Other(format!(
                "Unknown period: {other} (expected monthly or annually)"
            ))),
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Period::Monthly => Period::Annually,
            Period::Annually => Period::Monthly,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Period::Monthly => "monthly",
            Period::Annually => "annually",
        }
    }

    /// Date prefix that records must carry to fall inside the window:
    /// "YYYY-MM" for monthly, "YYYY" for annually.
    fn prefix(&self, today: NaiveDate) -> String {
        match self {
            Period::Monthly => format!("{:04}-{:02}", today.year(), today.month()),
            Period::Annually => format!("{:04}", today.year()),
        }
    }
}

pub struct Summary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net: f64,
}

impl Summary {
    pub fn is_profit(&self) -> bool {
        self.net >= 0.0
    }
}

/// Income and expense totals over the records falling in the period
/// around `today`. Callers pass the wall-clock date; tests pin one.
pub fn summarize(transactions: &[Transaction], period: Period, today: NaiveDate) -> Summary {
    let prefix = period.prefix(today);
    let mut total_income = 0.0f64;
    let mut total_expenses = 0.0f64;
    for txn in transactions {
        if !txn.date.starts_with(&prefix) {
            continue;
        }
        match txn.kind {
            TransactionType::Income => total_income += txn.amount,
            TransactionType::Expense => total_expenses += txn.amount,
        }
    }
    Summary {
        total_income,
        total_expenses,
        net: total_income - total_expenses,
    }
}

pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Expense amounts grouped by category label, one entry per distinct
/// category in first-observed order. Income records are ignored. Like the
/// dashboard chart, this runs over the whole collection, not the summary
/// period.
pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for txn in transactions {
        if txn.kind != TransactionType::Expense {
            continue;
        }
        match totals.iter_mut().find(|c| c.category == txn.category) {
            Some(entry) => entry.total += txn.amount,
            None => totals.push(CategoryTotal {
                category: txn.category.clone(),
                total: txn.amount,
            }),
        }
    }
    totals
}
