use super::{Transaction, TransactionKind};

use crate::Money;

use chrono::Local;

/// Append-only, chronologically ordered log of an account's transactions
#[derive(Debug, Default)]
pub struct Transactions {
    chron: Vec<Transaction>,
}

impl Transactions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, kind: TransactionKind, amount: Money, resulting_balance: Money) -> &Transaction {
        let index = self.chron.len();

        self.chron.push(Transaction {
            timestamp: Local::now(),
            kind,
            amount,
            resulting_balance,
        });

        &self.chron[index]
    }

    /// Oldest first
    pub fn all(&self) -> &[Transaction] {
        &self.chron
    }

    pub fn last(&self) -> Option<&Transaction> {
        self.chron.last()
    }

    pub fn len(&self) -> usize {
        self.chron.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
