use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{Transaction, TransactionType};

/// Seed records used when no data file exists yet. They are not written
/// to disk until the first mutation saves the collection.
pub fn seed_transactions() -> Vec<Transaction> {
    let fixture = |id: &str, date: &str, description: &str, amount: f64, kind, category: &str| {
        Transaction {
            id: id.to_string(),
            date: date.to_string(),
            description: description.to_string(),
            amount,
            kind,
            category: category.to_string(),
        }
    };
    vec![
        fixture("1", "2023-10-26", "Salary", 5000.0, TransactionType::Income, "Salary"),
        fixture("2", "2023-10-27", "Groceries", 150.0, TransactionType::Expense, "Groceries"),
        fixture("3", "2023-10-28", "Electric Bill", 75.0, TransactionType::Expense, "Utilities"),
        fixture("4", "2023-11-01", "Rent", 1200.0, TransactionType::Expense, "Rent"),
    ]
}

/// Location of the single JSON document mirroring the transaction
/// collection. `TALLY_DATA_DIR` overrides the default, which keeps tests
/// and scripts off the real data file.
pub fn data_file() -> PathBuf {
    let dir = match std::env::var("TALLY_DATA_DIR") {
        Ok(d) if !d.is_empty() => PathBuf::from(d),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".local")
            .join("share")
            .join("tally"),
    };
    dir.join("transactions.json")
}

/// Read the stored collection, or the seed fixtures when no file exists.
/// A file that exists but does not parse is a startup failure; the error
/// propagates rather than silently dropping the user's data.
pub fn load(path: &Path) -> Result<Vec<Transaction>> {
    if !path.exists() {
        return Ok(seed_transactions());
    }
    let content = std::fs::read_to_string(path)?;
    let transactions: Vec<Transaction> = serde_json::from_str(&content)?;
    Ok(transactions)
}

/// Serialize the full collection and overwrite the stored document.
/// Callers invoke this explicitly after every mutation; there is no
/// incremental diffing.
pub fn save(path: &Path, transactions: &[Transaction]) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(transactions)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_seeds_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transactions.json");
        let txns = load(&path).unwrap();
        assert_eq!(txns.len(), 4);
        assert_eq!(txns[0].description, "Salary");
        assert_eq!(txns[0].amount, 5000.0);
        // Seeding alone must not create the file
        assert!(!path.exists());
    }

    #[test]
    fn test_save_load_roundtrip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transactions.json");
        let txns = seed_transactions();
        save(&path, &txns).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, txns);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("transactions.json");
        save(&path, &[]).unwrap();
        assert!(path.exists());
        assert_eq!(load(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transactions.json");
        std::fs::write(&path, "{ this is not json").unwrap();
        let result = load(&path);
        assert!(result.is_err());
        let msg = result.err().unwrap().to_string();
        assert!(msg.contains("malformed"), "got: {msg}");
    }
}
