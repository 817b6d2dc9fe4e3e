use crate::ids::AccountId;
use crate::money::MoneyError;
use crate::Money;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Invalid credential for account {0}")]
    InvalidCredential(AccountId),

    #[error("Insufficient balance in account {id}: requested {requested} but only {available} available")]
    InsufficientBalance {
        id: AccountId,
        requested: Money,
        available: Money,
    },

    #[error("Invalid account kind: {0}")]
    InvalidAccountKind(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(Money),

    #[error(transparent)]
    Overflow(#[from] MoneyError),
}

impl LedgerError {
    /// Stable machine-readable name of the failure
    pub fn code(&self) -> &'static str {
        match self {
            Self::AccountNotFound(_) => "account_not_found",
            Self::InvalidCredential(_) => "invalid_credential",
            Self::InsufficientBalance { .. } => "insufficient_balance",
            Self::InvalidAccountKind(_) => "invalid_account_kind",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::Overflow(_) => "overflow",
        }
    }
}
