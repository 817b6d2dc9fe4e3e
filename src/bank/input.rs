use crate::ids::AccountId;
use crate::Money;
use crate::Result;

use serde::Deserialize;

use thiserror::Error;

/// Credential value meaning "whatever the ledger issued to this session for the account"
pub const ISSUED_CREDENTIAL: &str = "@issued";

/// Represents an input command that a CSV row would deserialize into
#[derive(Deserialize, Debug, Clone)]
pub struct InputCommand {
    pub op: InputCommandType,
    pub account: Option<u64>,
    pub kind: Option<String>,
    pub holder: Option<String>,
    pub amount: Option<String>,
    pub credential: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputCommandType {
    Create,
    Deposit,
    Withdraw,
    Info,
    All,
    Statement,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input command: {0} value missing from {1:?}")]
    MissingField(&'static str, InputCommandType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    Issued,
    Literal(String),
}

impl From<String> for CredentialSource {
    fn from(value: String) -> Self {
        if value == ISSUED_CREDENTIAL {
            Self::Issued
        } else {
            Self::Literal(value)
        }
    }
}

/// Typed ledger operation, with every field its operation needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Create {
        kind: String,
        holder_name: String,
        initial_balance: Money,
    },
    Deposit {
        id: AccountId,
        amount: Money,
        credential: CredentialSource,
    },
    Withdraw {
        id: AccountId,
        amount: Money,
        credential: CredentialSource,
    },
    Info {
        id: AccountId,
    },
    All,
    Statement {
        id: AccountId,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create { .. } => "create",
            Self::Deposit { .. } => "deposit",
            Self::Withdraw { .. } => "withdraw",
            Self::Info { .. } => "info",
            Self::All => "all",
            Self::Statement { .. } => "statement",
        }
    }
}

impl InputCommand {
    pub fn parse_operation(self) -> Result<Operation> {
        let operation = match self.op {
            InputCommandType::Create => Operation::Create {
                kind: self.require(&self.kind, "kind")?,
                holder_name: self.require(&self.holder, "holder")?,
                initial_balance: Money::parse(&self.require(&self.amount, "amount")?)?,
            },
            InputCommandType::Deposit => Operation::Deposit {
                id: self.account_id()?,
                amount: Money::parse(&self.require(&self.amount, "amount")?)?,
                credential: self.require(&self.credential, "credential")?.into(),
            },
            InputCommandType::Withdraw => Operation::Withdraw {
                id: self.account_id()?,
                amount: Money::parse(&self.require(&self.amount, "amount")?)?,
                credential: self.require(&self.credential, "credential")?.into(),
            },
            InputCommandType::Info => Operation::Info {
                id: self.account_id()?,
            },
            InputCommandType::All => Operation::All,
            InputCommandType::Statement => Operation::Statement {
                id: self.account_id()?,
            },
        };

        Ok(operation)
    }

    fn account_id(&self) -> Result<AccountId> {
        let id = self.require(&self.account, "account")?;
        Ok(AccountId(id))
    }

    fn require<T: Clone>(&self, value: &Option<T>, field: &'static str) -> Result<T> {
        let value = value
            .clone()
            .ok_or(InputParseError::MissingField(field, self.op))?;

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOME_ACCOUNT: u64 = 1001;

    fn build_command(op: InputCommandType) -> InputCommand {
        InputCommand {
            op,
            account: None,
            kind: None,
            holder: None,
            amount: None,
            credential: None,
        }
    }

    #[test]
    fn parse_create() {
        let command = InputCommand {
            kind: Some("savings".to_string()),
            holder: Some("Alice".to_string()),
            amount: Some("100.25".to_string()),
            ..build_command(InputCommandType::Create)
        };

        assert_eq!(
            command.parse_operation().unwrap(),
            Operation::Create {
                kind: "savings".to_string(),
                holder_name: "Alice".to_string(),
                initial_balance: Money(1_002_500),
            }
        );
    }

    #[test]
    fn parse_deposit_and_withdraw() {
        let deposit = InputCommand {
            account: Some(SOME_ACCOUNT),
            amount: Some("50".to_string()),
            credential: Some(ISSUED_CREDENTIAL.to_string()),
            ..build_command(InputCommandType::Deposit)
        };

        assert_eq!(
            deposit.parse_operation().unwrap(),
            Operation::Deposit {
                id: AccountId(SOME_ACCOUNT),
                amount: Money::whole(50),
                credential: CredentialSource::Issued,
            }
        );

        let withdraw = InputCommand {
            account: Some(SOME_ACCOUNT),
            amount: Some("1.5".to_string()),
            credential: Some("Ab1!xyZ9".to_string()),
            ..build_command(InputCommandType::Withdraw)
        };

        assert_eq!(
            withdraw.parse_operation().unwrap(),
            Operation::Withdraw {
                id: AccountId(SOME_ACCOUNT),
                amount: Money(15_000),
                credential: CredentialSource::Literal("Ab1!xyZ9".to_string()),
            }
        );
    }

    #[test]
    fn parse_queries() {
        assert_eq!(
            build_command(InputCommandType::All).parse_operation().unwrap(),
            Operation::All
        );

        let info = InputCommand {
            account: Some(SOME_ACCOUNT),
            ..build_command(InputCommandType::Info)
        };
        assert_eq!(
            info.parse_operation().unwrap(),
            Operation::Info {
                id: AccountId(SOME_ACCOUNT)
            }
        );

        let statement = InputCommand {
            account: Some(SOME_ACCOUNT),
            ..build_command(InputCommandType::Statement)
        };
        assert_eq!(statement.parse_operation().unwrap().name(), "statement");
    }

    #[test]
    fn parse_rejects_missing_fields() {
        let deposit = InputCommand {
            account: Some(SOME_ACCOUNT),
            credential: Some(ISSUED_CREDENTIAL.to_string()),
            ..build_command(InputCommandType::Deposit)
        };
        let error = deposit.parse_operation().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Error parsing input command: amount value missing from Deposit"
        );

        assert!(build_command(InputCommandType::Statement)
            .parse_operation()
            .is_err());
        assert!(build_command(InputCommandType::Create)
            .parse_operation()
            .is_err());
    }

    #[test]
    fn parse_rejects_bad_amount() {
        let withdraw = InputCommand {
            account: Some(SOME_ACCOUNT),
            amount: Some("ten".to_string()),
            credential: Some(ISSUED_CREDENTIAL.to_string()),
            ..build_command(InputCommandType::Withdraw)
        };

        assert!(withdraw.parse_operation().is_err());
    }
}
