use crate::ids::AccountId;
use crate::{LedgerError, Money};

use serde::{Deserialize, Serialize};

pub const OUTCOME_OK: &str = "ok";
pub const OUTCOME_NO_ACCOUNTS: &str = "no_accounts";

/// One row of the driver's output. Never carries credentials or timestamps.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OutcomeReport {
    pub op: String,
    pub account: String,
    pub outcome: String,
    pub balance: String,
    pub detail: String,
}

impl OutcomeReport {
    pub fn ok(op: &str, account: AccountId, balance: Money, detail: impl Into<String>) -> Self {
        Self {
            op: op.to_string(),
            account: account.to_string(),
            outcome: OUTCOME_OK.to_string(),
            balance: balance.to_string(),
            detail: detail.into(),
        }
    }

    pub fn failed(op: &str, account: Option<AccountId>, error: &LedgerError) -> Self {
        Self {
            op: op.to_string(),
            account: account.map(|id| id.to_string()).unwrap_or_default(),
            outcome: error.code().to_string(),
            balance: String::new(),
            detail: error.to_string(),
        }
    }

    pub fn no_accounts(op: &str) -> Self {
        Self {
            op: op.to_string(),
            account: String::new(),
            outcome: OUTCOME_NO_ACCOUNTS.to_string(),
            balance: String::new(),
            detail: "No accounts available".to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.outcome == OUTCOME_OK
    }
}
