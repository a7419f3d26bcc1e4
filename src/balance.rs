//! The aggregate balance record returned by the backend API.

use serde::{Deserialize, Deserializer, de};

/// The aggregate balance across all transactions.
///
/// The backend serializes these amounts inconsistently, sometimes as JSON
/// numbers and sometimes as numeric strings, so each field goes through an
/// explicit coercion on the way in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Balance {
    /// The sum of all income transactions.
    #[serde(deserialize_with = "amount")]
    pub income: f64,
    /// The sum of all outcome transactions.
    #[serde(deserialize_with = "amount")]
    pub outcome: f64,
    /// Net total: income minus outcome.
    #[serde(deserialize_with = "amount")]
    pub total: f64,
}

/// Deserializes a monetary amount from either a JSON number or a numeric
/// string such as `"5000"`.
fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(value) => Ok(value),
        RawAmount::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid amount {text:?}"))),
    }
}
