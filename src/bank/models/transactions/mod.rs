mod transaction;
mod transactions;

pub use transaction::{Transaction, TransactionKind};
pub use transactions::Transactions;
