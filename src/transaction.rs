//! The transaction records returned by the backend API.

use serde::Deserialize;
use time::OffsetDateTime;

/// Whether a transaction adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. a salary payment or a sale.
    Income,
    /// Money going out, e.g. rent or groceries.
    Outcome,
}

/// The category a transaction was filed under.
///
/// Categories are display-only here: the title drives icon selection and is
/// otherwise passed through unchanged, including titles this app has never
/// seen before.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// The category title, e.g. "Moradia".
    pub title: String,
}

/// A single income or outcome transaction as the backend reports it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The backend's unique identifier for this transaction.
    pub id: String,
    /// A short human-readable description.
    pub title: String,
    /// The transaction amount. Reported as a non-negative number; direction
    /// is carried by [TransactionType].
    pub value: f64,
    /// Whether this is income or outcome.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The category the transaction was filed under.
    pub category: Category,
    /// When the transaction was recorded, as an RFC 3339 timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
