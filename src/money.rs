// 💰 Money - arbitrary-precision decimal amounts
//
// BigDecimal has no upper bound and no digit limit, so credit/debit never
// round and never overflow. Amounts travel as text ("900.12345") in JSON
// and CSV so no value passes through a binary float.

use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Parse a decimal amount, keeping its scale ("100.00" stays scale 2)
pub fn parse(text: &str) -> Result<BigDecimal> {
    BigDecimal::from_str(text.trim()).with_context(|| format!("Invalid amount: {:?}", text))
}

/// Serde adapter: amount as a string, both ways
pub mod text {
    use bigdecimal::BigDecimal;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        BigDecimal::from_str(text.trim()).map_err(de::Error::custom)
    }
}
