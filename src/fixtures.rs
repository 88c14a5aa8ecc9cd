// 📂 Debit fixtures - CSV rows → replayable debit cases
//
// debits.csv:  balance,amount,expected,actual
// amounts.csv: amount

use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::entities::Account;
use crate::error::BankError;
use crate::money;

/// Person given to accounts built from bare amounts
pub const FIXTURE_PERSON: &str = "Arian";

/// Balance the amount-only fixtures debit from
pub const FIXTURE_BALANCE: &str = "1000.12345";

// ============================================================================
// DEBIT CASE
// ============================================================================

/// One row: start at `balance`, debit `amount`.
///
/// `expected` and `actual` are person names; the account is given `actual`
/// and a case passes when it ends with a positive balance and both names
/// agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebitCase {
    #[serde(with = "crate::money::text")]
    pub balance: BigDecimal,
    #[serde(with = "crate::money::text")]
    pub amount: BigDecimal,
    pub expected: String,
    pub actual: String,
}

/// Outcome of replaying one case
#[derive(Debug, Clone, PartialEq)]
pub enum CaseOutcome {
    Passed(Account),
    NameMismatch(Account),
    NonPositiveBalance(Account),
    Rejected(BankError),
}

impl CaseOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CaseOutcome::Passed(_))
    }
}

impl DebitCase {
    /// Build the account and apply the debit
    pub fn run(&self) -> Result<Account, BankError> {
        let mut account = Account::new(FIXTURE_PERSON, self.balance.clone());
        account.set_person(&self.actual);
        account.debit(&self.amount)?;
        Ok(account)
    }

    /// Run and judge the result
    pub fn check(&self) -> CaseOutcome {
        match self.run() {
            Err(err) => CaseOutcome::Rejected(err),
            Ok(account) if account.balance() <= &BigDecimal::zero() => {
                CaseOutcome::NonPositiveBalance(account)
            }
            Ok(account) if self.expected != self.actual => CaseOutcome::NameMismatch(account),
            Ok(account) => CaseOutcome::Passed(account),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AmountRow {
    #[serde(with = "crate::money::text")]
    amount: BigDecimal,
}

// ============================================================================
// LOADERS
// ============================================================================

/// Load debit cases from a CSV file with header `balance,amount,expected,actual`
pub fn load_debit_cases(csv_path: &Path) -> Result<Vec<DebitCase>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open fixture file: {:?}", csv_path))?;

    let mut cases = Vec::new();
    for (line, result) in rdr.deserialize().enumerate() {
        let case: DebitCase =
            result.with_context(|| format!("Failed to parse debit case on row {}", line + 1))?;
        cases.push(case);
    }

    Ok(cases)
}

/// Load bare amounts from a CSV file with header `amount`
pub fn load_amounts(csv_path: &Path) -> Result<Vec<BigDecimal>> {
    let mut rdr = csv::Reader::from_path(csv_path)
        .with_context(|| format!("Failed to open fixture file: {:?}", csv_path))?;

    let amounts = rdr
        .deserialize::<AmountRow>()
        .map(|row| row.map(|r| r.amount).context("Failed to parse amount row"))
        .collect::<Result<Vec<_>>>()?;

    Ok(amounts)
}

/// Debit cases for amount-only fixtures, all starting from the fixture balance
pub fn cases_from_amounts(amounts: &[BigDecimal]) -> Result<Vec<DebitCase>> {
    let balance = money::parse(FIXTURE_BALANCE).context("Invalid fixture balance")?;

    Ok(amounts
        .iter()
        .map(|amount| DebitCase {
            balance: balance.clone(),
            amount: amount.clone(),
            expected: FIXTURE_PERSON.to_string(),
            actual: FIXTURE_PERSON.to_string(),
        })
        .collect())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;

    fn dec(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    fn case(balance: &str, amount: &str, expected: &str, actual: &str) -> DebitCase {
        DebitCase {
            balance: dec(balance),
            amount: dec(amount),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", uuid::Uuid::new_v4(), name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_run_sets_person_verbatim() {
        let account = case("250", "200", "Pepe", "Pepe").run().unwrap();

        assert_eq!(account.person(), "Pepe");
        assert_eq!(account.balance(), &dec("50"));
    }

    #[test]
    fn test_check_outcomes() {
        assert!(case("1000.12345", "1000.12344", "Cata", "Cata").check().is_pass());
        assert!(matches!(
            case("200", "100", "Arian", "John").check(),
            CaseOutcome::NameMismatch(_)
        ));
        assert!(matches!(
            case("300", "300", "Maria", "Maria").check(),
            CaseOutcome::NonPositiveBalance(_)
        ));
        assert!(matches!(
            case("100", "101", "Lucas", "Lucas").check(),
            CaseOutcome::Rejected(BankError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn test_load_debit_cases() {
        let path = write_temp(
            "debits.csv",
            "balance,amount,expected,actual\n250,200,Pepe,Pepe\n1000.12345,1000.12344,Cata,Cata\n",
        );

        let cases = load_debit_cases(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(cases.len(), 2);
        assert_eq!(cases[1], case("1000.12345", "1000.12344", "Cata", "Cata"));
    }

    #[test]
    fn test_load_debit_cases_bad_row() {
        let path = write_temp("bad.csv", "balance,amount,expected,actual\nabc,1,A,A\n");

        let err = load_debit_cases(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_amounts(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to open fixture file"));
    }

    #[test]
    fn test_amounts_to_cases() {
        let path = write_temp("amounts.csv", "amount\n100\n1000.12344\n");

        let amounts = load_amounts(&path).unwrap();
        std::fs::remove_file(&path).ok();

        let cases = cases_from_amounts(&amounts).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[0].balance, dec("1000.12345"));
        assert!(cases.iter().all(|c| c.check().is_pass()));
    }

    #[test]
    fn test_load_keeps_large_and_high_scale_amounts() {
        let path = write_temp(
            "amounts.csv",
            "amount\n79228162514264337593543950336\n0.0000000000000000000000000000001\n",
        );

        let amounts = load_amounts(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(amounts[0].to_string(), "79228162514264337593543950336");
        assert_eq!(amounts[1], dec("0.0000000000000000000000000000001"));
        assert!(cases_from_amounts(&amounts).unwrap()[1].check().is_pass());
    }
}
