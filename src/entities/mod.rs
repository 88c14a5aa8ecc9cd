// Entity Models
//
// - Account: person + exact decimal balance, debit/credit
// - Bank: stable UUID identity, shared account handles, transfer
//
// Accounts reference their Bank by id only; the Bank holds the handles.

pub mod account;
pub mod bank;

pub use account::{Account, SharedAccount};
pub use bank::{Bank, BankSnapshot};
