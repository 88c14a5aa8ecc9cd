// Bank Model - Core Library
// Exposes the domain model for use in the CLI and tests

pub mod config;         // Settings from the environment
pub mod entities;       // Account + Bank
pub mod error;          // BankError
pub mod fixtures;       // CSV debit fixtures
pub mod money;          // BigDecimal parsing + serde text form

// Re-export commonly used types
pub use config::Settings;
pub use entities::{Account, Bank, BankSnapshot, SharedAccount};
pub use error::BankError;
pub use fixtures::{
    CaseOutcome, DebitCase,
    cases_from_amounts, load_amounts, load_debit_cases,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
