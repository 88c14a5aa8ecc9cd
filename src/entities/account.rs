// 💳 Account Entity - person + exact decimal balance
//
// "The balance is a VALUE, replaced on every operation"
//
// - Person is normalized to uppercase once, at construction
// - Balance is a BigDecimal (unbounded, exact, scale-preserving)
// - Bank relationship is a foreign key (bank_id), never ownership

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use tracing::{debug, warn};

use crate::error::BankError;

/// Shared handle to an account.
///
/// A Bank and its callers hold the same account through these handles.
/// `Rc` keeps the model single-threaded.
pub type SharedAccount = Rc<RefCell<Account>>;

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Account Entity
///
/// Equality is structural over every field, including `bank_id`: an account
/// registered with a Bank no longer equals an otherwise identical
/// unregistered one. Balances compare by digits AND scale, so `100.0` and
/// `100.00` are different balances here even though they are the same
/// amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account holder, uppercase after `new`
    person: String,

    /// Current balance
    #[serde(with = "crate::money::text")]
    balance: BigDecimal,

    /// Bank ID (foreign key to the owning Bank), set by `Bank::add_account`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bank_id: Option<String>,
}

impl Account {
    /// Create new account; `person` is uppercased, `balance` taken as-is
    pub fn new(person: &str, balance: BigDecimal) -> Self {
        Account {
            person: person.to_uppercase(),
            balance,
            bank_id: None,
        }
    }

    /// Wrap into a shared handle
    pub fn into_shared(self) -> SharedAccount {
        Rc::new(RefCell::new(self))
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn balance(&self) -> &BigDecimal {
        &self.balance
    }

    /// ID of the Bank this account was registered with, if any.
    ///
    /// Resolve it by comparing against `Bank::id()`.
    pub fn bank_id(&self) -> Option<&str> {
        self.bank_id.as_deref()
    }

    /// Replace the person verbatim (no uppercase normalization)
    pub fn set_person(&mut self, person: &str) {
        self.person = person.to_string();
    }

    pub fn set_balance(&mut self, balance: BigDecimal) {
        self.balance = balance;
    }

    pub(crate) fn set_bank_id(&mut self, bank_id: &str) {
        self.bank_id = Some(bank_id.to_string());
    }

    /// True unless `amount` is strictly greater than the balance
    pub fn has_sufficient_funds(&self, amount: &BigDecimal) -> bool {
        amount <= &self.balance
    }

    /// Subtract `amount` from the balance.
    ///
    /// Fails with `InsufficientFunds` when `amount > balance`, leaving the
    /// balance untouched. Debiting the full balance is allowed.
    pub fn debit(&mut self, amount: &BigDecimal) -> Result<(), BankError> {
        if !self.has_sufficient_funds(amount) {
            warn!(
                person = %self.person,
                %amount,
                balance = %self.balance,
                "debit rejected: insufficient funds"
            );
            return Err(BankError::InsufficientFunds {
                requested: amount.clone(),
                available: self.balance.clone(),
            });
        }

        self.balance = &self.balance - amount;
        debug!(person = %self.person, %amount, balance = %self.balance, "debit");
        Ok(())
    }

    /// Add `amount` to the balance.
    ///
    /// Accepts any amount, zero and negative included.
    pub fn credit(&mut self, amount: &BigDecimal) {
        self.balance = &self.balance + amount;
        debug!(person = %self.person, %amount, balance = %self.balance, "credit");
    }
}

// BigDecimal's own Eq ignores scale; accounts keep it.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person
            && self.balance.as_bigint_and_exponent() == other.balance.as_bigint_and_exponent()
            && self.bank_id == other.bank_id
    }
}

impl Eq for Account {}

impl Hash for Account {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.person.hash(state);
        self.balance.as_bigint_and_exponent().hash(state);
        self.bank_id.hash(state);
    }
}

// ============================================================================
// TESTS
// ============================================================================
