use crate::ids::AccountId;
use crate::models::{Account, AccountKind, Transaction};
use crate::{Credential, CredentialGenerator, LedgerError, LedgerResult, Money};

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::Rng;

/// Owns every account and hands out account numbers.
///
/// Accounts are kept in creation order, with a lookup map from account number to
/// position. All mutations go through `&mut self`, so creating an account and
/// changing a balance are exclusive operations.
#[derive(Debug)]
pub struct Ledger<R = StdRng> {
    accounts: Vec<Account>,
    lookup_map: HashMap<AccountId, usize>,
    next_id: AccountId,
    generator: CredentialGenerator<R>,
}

impl Ledger<StdRng> {
    pub fn new() -> Self {
        Self::with_generator(CredentialGenerator::from_entropy())
    }

    /// Ledger whose credentials are reproducible for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::with_generator(CredentialGenerator::seeded(seed))
    }
}

impl Default for Ledger<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Ledger<R> {
    pub fn with_generator(generator: CredentialGenerator<R>) -> Self {
        Self {
            accounts: Vec::new(),
            lookup_map: HashMap::new(),
            next_id: AccountId::FIRST,
            generator,
        }
    }

    /// Opens an account and returns its number with the credential issued for it.
    ///
    /// `kind` is matched case-insensitively. A rejected request consumes no account
    /// number.
    pub fn create_account(
        &mut self,
        kind: &str,
        holder_name: &str,
        initial_balance: Money,
    ) -> LedgerResult<(AccountId, Credential)> {
        let kind: AccountKind = kind.parse()?;

        if initial_balance.is_negative() {
            return Err(LedgerError::InvalidAmount(initial_balance));
        }

        let id = self.next_id;
        let credential = self.generator.generate();

        let account = Account::open(
            id,
            kind,
            holder_name.to_string(),
            initial_balance,
            credential.clone(),
        );

        self.lookup_map.insert(id, self.accounts.len());
        self.accounts.push(account);
        self.next_id = id.next();

        log::info!("Opened {kind} account {id} for {holder_name:?} with balance {initial_balance}");

        Ok((id, credential))
    }

    pub fn deposit(&mut self, id: AccountId, amount: Money, credential: &str) -> LedgerResult<Money> {
        let account = self.find_authorized_mut(id, credential)?;
        let balance = account.deposit(amount)?;

        log::debug!("Deposited {amount} into account {id}, balance is now {balance}");

        Ok(balance)
    }

    /// Insufficient funds are reported as `InsufficientBalance`, distinct from an
    /// authorization failure.
    pub fn withdraw(&mut self, id: AccountId, amount: Money, credential: &str) -> LedgerResult<Money> {
        let account = self.find_authorized_mut(id, credential)?;
        let balance = account.withdraw(amount)?;

        log::debug!("Withdrew {amount} from account {id}, balance is now {balance}");

        Ok(balance)
    }

    /// Read-only lookup. Not credential-gated, and the returned account exposes its
    /// credential through `info()`.
    pub fn account_info(&self, id: AccountId) -> LedgerResult<&Account> {
        self.find(id).ok_or(LedgerError::AccountNotFound(id))
    }

    /// Every account in creation order, or `None` when there are no accounts
    pub fn all_accounts(&self) -> Option<&[Account]> {
        if self.accounts.is_empty() {
            return None;
        }

        Some(&self.accounts)
    }

    pub fn statement(&self, id: AccountId) -> LedgerResult<&[Transaction]> {
        let account = self.account_info(id)?;
        Ok(account.history())
    }

    pub fn find(&self, id: AccountId) -> Option<&Account> {
        self.lookup_map.get(&id).map(|&idx| &self.accounts[idx])
    }

    /// Number the next successfully created account will receive
    pub fn next_id(&self) -> AccountId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find_authorized_mut(&mut self, id: AccountId, credential: &str) -> LedgerResult<&mut Account> {
        let idx = *self
            .lookup_map
            .get(&id)
            .ok_or(LedgerError::AccountNotFound(id))?;

        let account = &mut self.accounts[idx];

        if !account.authorizes(credential) {
            log::warn!("Rejected operation on account {id}: credential mismatch");
            return Err(LedgerError::InvalidCredential(id));
        }

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::models::TransactionKind;

    const FIRST_ID: AccountId = AccountId(1001);
    const SECOND_ID: AccountId = AccountId(1002);
    const UNKNOWN_ID: AccountId = AccountId(999);

    const WRONG_CREDENTIAL: &str = "not-it";

    fn build_ledger() -> Ledger {
        Ledger::seeded(1)
    }

    fn kinds(history: &[Transaction]) -> Vec<TransactionKind> {
        history.iter().map(|tx| tx.kind).collect()
    }

    #[test]
    fn create_account() {
        let mut ledger = build_ledger();
        assert!(ledger.is_empty());
        assert!(ledger.all_accounts().is_none());

        let (id, credential) = ledger
            .create_account("Savings", "Alice", Money::whole(100))
            .unwrap();

        assert_eq!(id, FIRST_ID);
        assert_eq!(ledger.next_id(), SECOND_ID);
        assert_eq!(ledger.len(), 1);

        let account = ledger.account_info(id).unwrap();
        assert_eq!(account.kind(), AccountKind::Savings);
        assert_eq!(account.holder_name(), "Alice");
        assert_eq!(account.balance(), Money::whole(100));
        assert_eq!(account.info().credential, credential);
        assert_eq!(kinds(account.history()), vec![TransactionKind::Created]);
    }

    #[test]
    fn create_account_is_case_insensitive() {
        let mut ledger = build_ledger();

        let (id, _) = ledger.create_account("cUrReNt", "Bob", Money::ZERO).unwrap();

        assert_eq!(ledger.account_info(id).unwrap().kind(), AccountKind::Current);
    }

    #[test]
    fn create_account_rejects_unknown_kind() {
        let mut ledger = build_ledger();

        assert_eq!(
            ledger.create_account("Bond", "Bob", Money::whole(10)),
            Err(LedgerError::InvalidAccountKind("Bond".to_string()))
        );
        assert_eq!(ledger.next_id(), FIRST_ID);
        assert!(ledger.is_empty());

        let (id, _) = ledger.create_account("Current", "Bob", Money::whole(10)).unwrap();
        assert_eq!(id, FIRST_ID);
    }

    #[test]
    fn create_account_rejects_negative_balance() {
        let mut ledger = build_ledger();

        assert_eq!(
            ledger.create_account("Savings", "Bob", Money::whole(-1)),
            Err(LedgerError::InvalidAmount(Money::whole(-1)))
        );
        assert_eq!(ledger.next_id(), FIRST_ID);
        assert!(ledger.is_empty());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut ledger = build_ledger();

        let (first, _) = ledger.create_account("Savings", "Alice", Money::ZERO).unwrap();
        assert!(ledger.create_account("Bond", "Mallory", Money::ZERO).is_err());
        let (second, _) = ledger.create_account("Current", "Bob", Money::ZERO).unwrap();

        assert_eq!(first, FIRST_ID);
        assert_eq!(second, SECOND_ID);
    }

    #[test]
    fn deposit_and_withdraw_scenario() {
        let mut ledger = build_ledger();

        let (id, credential) = ledger
            .create_account("Savings", "Alice", Money::whole(100))
            .unwrap();
        let credential = credential.as_str();

        assert_eq!(ledger.deposit(id, Money::whole(50), credential), Ok(Money::whole(150)));
        assert_eq!(
            kinds(ledger.statement(id).unwrap()),
            vec![TransactionKind::Created, TransactionKind::Deposit]
        );

        assert_eq!(
            ledger.withdraw(id, Money::whole(200), credential),
            Err(LedgerError::InsufficientBalance {
                id,
                requested: Money::whole(200),
                available: Money::whole(150),
            })
        );
        assert_eq!(ledger.account_info(id).unwrap().balance(), Money::whole(150));

        assert_eq!(
            ledger.withdraw(id, Money::whole(150), WRONG_CREDENTIAL),
            Err(LedgerError::InvalidCredential(id))
        );
        assert_eq!(ledger.account_info(id).unwrap().balance(), Money::whole(150));

        assert_eq!(ledger.withdraw(id, Money::whole(150), credential), Ok(Money::ZERO));
        assert_eq!(ledger.statement(id).unwrap().len(), 3);
    }

    #[test]
    fn credential_is_case_sensitive() {
        let mut ledger = build_ledger();

        let (id, credential) = ledger.create_account("Savings", "Alice", Money::ZERO).unwrap();
        let flipped: String = credential
            .as_str()
            .chars()
            .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
            .collect();

        assert_eq!(
            ledger.deposit(id, Money::whole(1), &flipped),
            Err(LedgerError::InvalidCredential(id))
        );
        assert_eq!(ledger.statement(id).unwrap().len(), 1);
    }

    #[test]
    fn operations_on_unknown_account() {
        let mut ledger = build_ledger();
        ledger.create_account("Savings", "Alice", Money::ZERO).unwrap();

        let not_found = LedgerError::AccountNotFound(UNKNOWN_ID);

        assert_eq!(
            ledger.deposit(UNKNOWN_ID, Money::whole(1), WRONG_CREDENTIAL),
            Err(not_found.clone())
        );
        assert_eq!(
            ledger.withdraw(UNKNOWN_ID, Money::whole(1), WRONG_CREDENTIAL),
            Err(not_found.clone())
        );
        assert_eq!(ledger.account_info(UNKNOWN_ID).unwrap_err(), not_found);
        assert_eq!(ledger.statement(UNKNOWN_ID).unwrap_err(), not_found);
    }

    #[test]
    fn credential_is_checked_before_amount() {
        let mut ledger = build_ledger();
        let (id, _) = ledger.create_account("Savings", "Alice", Money::ZERO).unwrap();

        assert_eq!(
            ledger.deposit(id, Money::whole(-1), WRONG_CREDENTIAL),
            Err(LedgerError::InvalidCredential(id))
        );
    }

    #[test]
    fn all_accounts_in_creation_order() {
        let mut ledger = build_ledger();

        ledger.create_account("Current", "Carol", Money::whole(5)).unwrap();
        ledger.create_account("Savings", "Alice", Money::whole(1)).unwrap();
        ledger.create_account("Savings", "Bob", Money::whole(3)).unwrap();

        let names: Vec<&str> = ledger
            .all_accounts()
            .unwrap()
            .iter()
            .map(|account| account.holder_name())
            .collect();

        assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn accounts_are_independent() {
        let mut ledger = build_ledger();

        let (first, first_credential) = ledger.create_account("Savings", "Alice", Money::whole(10)).unwrap();
        let (second, second_credential) = ledger.create_account("Current", "Bob", Money::whole(20)).unwrap();

        ledger.deposit(first, Money::whole(5), first_credential.as_str()).unwrap();
        ledger.withdraw(second, Money::whole(20), second_credential.as_str()).unwrap();

        assert_eq!(ledger.account_info(first).unwrap().balance(), Money::whole(15));
        assert_eq!(ledger.account_info(second).unwrap().balance(), Money::ZERO);
        assert_eq!(ledger.statement(first).unwrap().len(), 2);
        assert_eq!(ledger.statement(second).unwrap().len(), 2);
    }
}
