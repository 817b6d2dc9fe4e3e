mod account;
mod transactions;

pub use account::{Account, AccountInfo, AccountKind};
pub use transactions::{Transaction, TransactionKind, Transactions};
