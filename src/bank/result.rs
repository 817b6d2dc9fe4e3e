use crate::LedgerError;

/// Convenience type to make error mapping cleaner
pub type Result<T = ()> = anyhow::Result<T>;

/// Outcome of a ledger operation, keeping the failure kind visible to callers
pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
