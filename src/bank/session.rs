use crate::ids::AccountId;
use crate::input::{CredentialSource, Operation};
use crate::models::Account;
use crate::{Credential, Ledger, OutcomeReport};

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::Rng;

/// Drives a ledger on behalf of one caller, remembering the credentials the ledger
/// issued to it so later commands can refer to them.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    ledger: Ledger<R>,
    issued: HashMap<AccountId, Credential>,
}

impl<R: Rng> Session<R> {
    pub fn new(ledger: Ledger<R>) -> Self {
        return Self {
            ledger,
            issued: HashMap::new(),
        };
    }

    pub fn ledger(&self) -> &Ledger<R> {
        &self.ledger
    }

    pub fn execute(&mut self, operation: Operation) -> Vec<OutcomeReport> {
        log::debug!("Executing operation: {operation:?}");

        let op = operation.name();

        let reports = match operation {
            Operation::Create {
                kind,
                holder_name,
                initial_balance,
            } => match self.ledger.create_account(&kind, &holder_name, initial_balance) {
                Ok((id, credential)) => {
                    self.issued.insert(id, credential);

                    let detail = self
                        .ledger
                        .find(id)
                        .map(|account| format!("kind={}", account.kind()))
                        .unwrap_or_default();

                    vec![OutcomeReport::ok(op, id, initial_balance, detail)]
                }
                Err(e) => vec![OutcomeReport::failed(op, None, &e)],
            },

            Operation::Deposit {
                id,
                amount,
                credential,
            } => {
                let credential = self.resolve(id, &credential);

                match self.ledger.deposit(id, amount, &credential) {
                    Ok(balance) => vec![OutcomeReport::ok(op, id, balance, "")],
                    Err(e) => vec![OutcomeReport::failed(op, Some(id), &e)],
                }
            }

            Operation::Withdraw {
                id,
                amount,
                credential,
            } => {
                let credential = self.resolve(id, &credential);

                match self.ledger.withdraw(id, amount, &credential) {
                    Ok(balance) => vec![OutcomeReport::ok(op, id, balance, "")],
                    Err(e) => vec![OutcomeReport::failed(op, Some(id), &e)],
                }
            }

            Operation::Info { id } => match self.ledger.account_info(id) {
                Ok(account) => vec![summarize(op, account)],
                Err(e) => vec![OutcomeReport::failed(op, Some(id), &e)],
            },

            Operation::All => match self.ledger.all_accounts() {
                Some(accounts) => accounts
                    .iter()
                    .map(|account| summarize(op, account))
                    .collect(),
                None => vec![OutcomeReport::no_accounts(op)],
            },

            Operation::Statement { id } => match self.ledger.statement(id) {
                Ok(history) => history
                    .iter()
                    .map(|tx| {
                        OutcomeReport::ok(
                            op,
                            id,
                            tx.resulting_balance,
                            format!("{} {}", tx.kind, tx.amount),
                        )
                    })
                    .collect(),
                Err(e) => vec![OutcomeReport::failed(op, Some(id), &e)],
            },
        };

        for report in reports.iter().filter(|report| !report.is_ok()) {
            log::warn!("{} rejected: {}", report.op, report.detail);
        }

        reports
    }

    /// An unknown issued credential resolves to an empty string, which never matches
    fn resolve(&self, id: AccountId, source: &CredentialSource) -> String {
        match source {
            CredentialSource::Issued => self
                .issued
                .get(&id)
                .map(|credential| credential.as_str().to_string())
                .unwrap_or_default(),
            CredentialSource::Literal(credential) => credential.clone(),
        }
    }
}

fn summarize(op: &str, account: &Account) -> OutcomeReport {
    OutcomeReport::ok(
        op,
        account.id(),
        account.balance(),
        format!(
            "holder={} kind={} transactions={}",
            account.holder_name(),
            account.kind(),
            account.history().len()
        ),
    )
}
