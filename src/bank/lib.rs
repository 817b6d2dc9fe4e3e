mod credential;
mod error;
pub mod ids;
pub mod input;
mod ledger;
pub mod models;
mod money;
mod report;
mod result;
mod session;

pub use credential::{Credential, CredentialGenerator, CREDENTIAL_LENGTH};
pub use error::LedgerError;
pub use ledger::Ledger;
pub use money::{Money, MoneyError};
pub use report::OutcomeReport;
pub use result::{LedgerResult, Result};
pub use session::Session;
