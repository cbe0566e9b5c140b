use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::i18n;
use crate::models::{Language, Transaction, TransactionFields};

/// Single source of truth for the transaction collection, the session
/// flag, and the active display language. The only writer of transaction
/// data; views hold a shared reference and dispatch operations back here.
///
/// Mutations are in-memory only. The caller saves the collection through
/// `persist::save` after each change, so persistence is an explicit step
/// rather than a hidden side effect.
pub struct Store {
    transactions: Vec<Transaction>,
    authenticated: bool,
    language: Language,
}

impl Store {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            authenticated: false,
            language: Language::default(),
        }
    }

    // --- session ---

    /// Placeholder policy, not a security boundary: signing in always
    /// succeeds and the flag is never persisted.
    pub fn login(&mut self) {
        self.authenticated = true;
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    // --- language ---

    pub fn set_language(&mut self, lang: Language) {
        self.language = lang;
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Translation lookup for the active language.
    pub fn tr<'a>(&self, key: &'a str) -> &'a str {
        i18n::tr(self.language, key)
    }

    // --- transactions ---

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Assign a fresh identifier and prepend the record, so the collection
    /// stays newest-created-first.
    pub fn add_transaction(&mut self, fields: TransactionFields) -> &Transaction {
        let txn = Transaction {
            id: new_id(),
            date: fields.date,
            description: fields.description,
            amount: fields.amount,
            kind: fields.kind,
            category: fields.category,
        };
        self.transactions.insert(0, txn);
        &self.transactions[0]
    }

    /// Replace the entry whose id matches, in place. Returns false (and
    /// leaves the collection untouched) when no entry matches.
    pub fn update_transaction(&mut self, record: Transaction) -> bool {
        match self.transactions.iter_mut().find(|t| t.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with the given id, preserving the order of the
    /// rest. Returns false when no entry matches.
    pub fn delete_transaction(&mut self, id: &str) -> bool {
        match self.transactions.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.transactions.remove(idx);
                true
            }
            None => false,
        }
    }
}

/// Random 12-character identifier. Timestamp-derived ids can collide
/// across rapid successive adds.
fn new_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}
