use super::{Transaction, TransactionKind, Transactions};

use crate::ids::AccountId;
use crate::{Credential, LedgerError, LedgerResult, Money};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Informational tag; both kinds behave the same
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Savings,
    Current,
}

impl FromStr for AccountKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("savings") {
            Ok(Self::Savings)
        } else if s.eq_ignore_ascii_case("current") {
            Ok(Self::Current)
        } else {
            Err(LedgerError::InvalidAccountKind(s.to_string()))
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Savings => "Savings",
            Self::Current => "Current",
        };

        return write!(f, "{name}");
    }
}

/// Point-in-time copy of an account's identity and balance
#[derive(Debug, Clone, PartialEq)]
pub struct AccountInfo {
    pub id: AccountId,
    pub holder_name: String,
    pub balance: Money,
    pub credential: Credential,
    pub kind: AccountKind,
}

/// A holder's balance and its transaction log.
///
/// Only the ledger can mutate an account; callers get shared references.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    kind: AccountKind,
    balance: Money,
    credential: Credential,
    transactions: Transactions,
}

impl Account {
    pub(crate) fn open(
        id: AccountId,
        kind: AccountKind,
        holder_name: String,
        initial_balance: Money,
        credential: Credential,
    ) -> Self {
        let mut transactions = Transactions::new();
        transactions.append(TransactionKind::Created, initial_balance, initial_balance);

        return Self {
            id,
            holder_name,
            kind,
            balance: initial_balance,
            credential,
            transactions,
        };
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn info(&self) -> AccountInfo {
        AccountInfo {
            id: self.id,
            holder_name: self.holder_name.clone(),
            balance: self.balance,
            credential: self.credential.clone(),
            kind: self.kind,
        }
    }

    /// Oldest first, always starting with the creation record
    pub fn history(&self) -> &[Transaction] {
        self.transactions.all()
    }

    pub(crate) fn authorizes(&self, credential: &str) -> bool {
        self.credential.matches(credential)
    }

    pub(crate) fn deposit(&mut self, amount: Money) -> LedgerResult<Money> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }

        self.balance.add(&amount)?;
        self.transactions.append(TransactionKind::Deposit, amount, self.balance);

        Ok(self.balance)
    }

    pub(crate) fn withdraw(&mut self, amount: Money) -> LedgerResult<Money> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }

        if amount > self.balance {
            return Err(LedgerError::InsufficientBalance {
                id: self.id,
                requested: amount,
                available: self.balance,
            });
        }

        self.balance.sub(&amount)?;
        self.transactions.append(TransactionKind::Withdrawal, amount, self.balance);

        Ok(self.balance)
    }
}
