use std::fmt;

use serde::{Deserialize, Serialize};

/// Account number handed out by the ledger
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(pub u64);

impl AccountId {
    pub const FIRST: Self = Self(1001);

    pub fn next(self) -> Self {
        return Self(self.0 + 1);
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
