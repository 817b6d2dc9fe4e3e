use crate::Money;

use std::fmt;

use chrono::{DateTime, Local};

/// Balance-affecting event kinds recorded in an account's history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Created,
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            Self::Created => "Account created",
            Self::Deposit => "Deposit",
            Self::Withdrawal => "Withdrawal",
        };

        return write!(f, "{label}");
    }
}

/// Immutable history record. `resulting_balance` is the account balance right after
/// the event and is never recomputed.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub timestamp: DateTime<Local>,
    pub kind: TransactionKind,
    pub amount: Money,
    pub resulting_balance: Money,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(
            f,
            "{} | {}: ${} | Balance: ${}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.amount,
            self.resulting_balance,
        );
    }
}
