use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(TallyError::Other(format!(
                "Unknown transaction type: {other} (expected income or expense)"
            ))),
        }
    }
}

/// One income or expense record. `amount` is always non-negative; the sign
/// of its effect on the balance comes from `kind` alone.
///
/// Serialized field names match the stored JSON document, so a data file
/// written by an earlier version of the tracker loads unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Calendar day as YYYY-MM-DD, no time component.
    pub date: String,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
}

/// All transaction fields except the identifier, as collected from the
/// add/edit form. The store assigns the id.
#[derive(Debug, Clone)]
pub struct TransactionFields {
    pub date: String,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionType,
    pub category: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "en" => Ok(Language::En),
            "ar" => Ok(Language::Ar),
            other => Err(TallyError::Other(format!(
                "Unsupported language: {other} (expected en or ar)"
            ))),
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

/// Suggestion list offered by the add/edit form. Aggregation does not
/// enforce this set; a record may carry any category label.
pub const CATEGORIES: &[&str] = &[
    "Salary",
    "Groceries",
    "Utilities",
    "Rent",
    "Transport",
    "Entertainment",
    "Health",
    "Shopping",
    "Other",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_roundtrip() {
        assert_eq!(TransactionType::parse("income").unwrap(), TransactionType::Income);
        assert_eq!(TransactionType::parse("expense").unwrap(), TransactionType::Expense);
        assert!(TransactionType::parse("transfer").is_err());
        assert_eq!(TransactionType::Income.as_str(), "income");
    }

    #[test]
    fn test_transaction_serializes_with_type_field() {
        let txn = Transaction {
            id: "1".to_string(),
            date: "2023-10-26".to_string(),
            description: "Salary".to_string(),
            amount: 5000.0,
            kind: TransactionType::Income,
            category: "Salary".to_string(),
        };
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"type\":\"income\""));
        assert!(!json.contains("kind"));
    }

    #[test]
    fn test_transaction_deserializes_stored_shape() {
        let json = r#"{"id":"2","date":"2023-10-27","description":"Groceries","amount":150,"type":"expense","category":"Groceries"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.kind, TransactionType::Expense);
        assert_eq!(txn.amount, 150.0);
    }

    #[test]
    fn test_language_defaults_to_english() {
        assert_eq!(Language::default(), Language::En);
        assert_eq!(Language::parse("ar").unwrap(), Language::Ar);
        assert!(Language::parse("fr").is_err());
        assert_eq!(Language::Ar.toggle(), Language::En);
    }
}
