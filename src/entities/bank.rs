// 🏦 Bank Entity - Stable identity + ordered account handles
//
// "Bank UUID is IDENTITY, accounts point back at it by id"
//
// - Accounts are shared handles: callers keep theirs, the Bank keeps a clone
// - add_account stamps the bank id on the account (foreign key, no cycle)
// - transfer checks funds first, then debits origin, then credits destination

use chrono::{DateTime, Utc};
use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use tracing::{debug, info, warn};

use super::account::{Account, SharedAccount};
use crate::error::BankError;

// ============================================================================
// BANK ENTITY
// ============================================================================

/// Bank Entity
///
/// Identity: UUID (never changes)
/// Values: name, registered accounts
#[derive(Debug)]
pub struct Bank {
    /// Stable identity (UUID) - NEVER changes
    id: String,

    /// Display name
    name: String,

    /// When this bank was created in our system
    created_at: DateTime<Utc>,

    /// Registered accounts, in insertion order (duplicates allowed)
    accounts: Vec<SharedAccount>,
}

impl Bank {
    /// Create new unnamed bank with UUID
    pub fn new() -> Self {
        Bank {
            id: uuid::Uuid::new_v4().to_string(),
            name: String::new(),
            created_at: Utc::now(),
            accounts: Vec::new(),
        }
    }

    /// Create new bank with a name
    pub fn with_name(name: &str) -> Self {
        let mut bank = Bank::new();
        bank.set_name(name);
        bank
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn accounts(&self) -> &[SharedAccount] {
        &self.accounts
    }

    /// Register an account: point it at this bank and append the handle.
    ///
    /// No duplicate check, adding the same handle twice stores it twice.
    pub fn add_account(&mut self, account: &SharedAccount) {
        account.borrow_mut().set_bank_id(&self.id);
        self.accounts.push(Rc::clone(account));

        info!(
            bank = %self.name,
            person = %account.borrow().person(),
            count = self.accounts.len(),
            "account registered"
        );
    }

    /// Check if this account handle is registered here
    pub fn contains(&self, account: &SharedAccount) -> bool {
        self.accounts.iter().any(|a| Rc::ptr_eq(a, account))
    }

    /// First registered account whose person matches exactly
    pub fn find_by_person(&self, person: &str) -> Option<SharedAccount> {
        self.accounts
            .iter()
            .find(|a| a.borrow().person() == person)
            .cloned()
    }

    /// Sum of registered balances (duplicates counted once per entry)
    pub fn total_balance(&self) -> BigDecimal {
        self.accounts
            .iter()
            .fold(BigDecimal::zero(), |total, a| total + a.borrow().balance())
    }

    /// Move `amount` from `origin` to `destination`.
    ///
    /// Funds are checked before either side is touched, so a failed
    /// transfer leaves both balances as they were. Neither account has to
    /// be registered with this bank.
    pub fn transfer(
        &self,
        origin: &mut Account,
        destination: &mut Account,
        amount: &BigDecimal,
    ) -> Result<(), BankError> {
        if !origin.has_sufficient_funds(amount) {
            warn!(
                bank = %self.name,
                from = %origin.person(),
                %amount,
                "transfer rejected: insufficient funds"
            );
            return Err(BankError::InsufficientFunds {
                requested: amount.clone(),
                available: origin.balance().clone(),
            });
        }

        origin.debit(amount)?;
        destination.credit(amount);

        debug!(
            bank = %self.name,
            from = %origin.person(),
            to = %destination.person(),
            %amount,
            "transfer"
        );
        Ok(())
    }

    /// `transfer` over shared handles.
    ///
    /// Origin and destination may be the same handle: that is a debit and a
    /// credit of one account, still subject to the funds check.
    pub fn transfer_between(
        &self,
        origin: &SharedAccount,
        destination: &SharedAccount,
        amount: &BigDecimal,
    ) -> Result<(), BankError> {
        if Rc::ptr_eq(origin, destination) {
            let mut account = origin.borrow_mut();
            account.debit(amount)?;
            account.credit(amount);
            return Ok(());
        }

        self.transfer(&mut origin.borrow_mut(), &mut destination.borrow_mut(), amount)
    }

    /// Serializable copy of the current state
    pub fn snapshot(&self) -> BankSnapshot {
        BankSnapshot {
            id: self.id.clone(),
            name: self.name.clone(),
            created_at: self.created_at,
            accounts: self.accounts.iter().map(|a| a.borrow().clone()).collect(),
        }
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SNAPSHOT
// ============================================================================

/// Point-in-time copy of a Bank, with accounts by value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankSnapshot {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub accounts: Vec<Account>,
}

// ============================================================================
// TESTS
// ============================================================================
