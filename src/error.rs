// Domain errors for account operations

use bigdecimal::BigDecimal;
use thiserror::Error;

/// Errors raised by debit and transfer.
///
/// The message is fixed; the amounts are kept for callers that want to log
/// or report the shortfall.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("Insufficient funds or money!")]
    InsufficientFunds { requested: BigDecimal, available: BigDecimal },
}

impl BankError {
    /// Amount missing to cover the request
    pub fn shortfall(&self) -> BigDecimal {
        match self {
            BankError::InsufficientFunds { requested, available } => requested - available,
        }
    }
}
