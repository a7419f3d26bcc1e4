//! Builds the display-ready view-model from raw API records.
//!
//! The builder is a pure projection: it preserves the order and count of the
//! transactions it is given, keeps every raw field intact, and only adds the
//! formatted strings the page renders. It is also the validation boundary
//! for amounts: a non-finite value anywhere in the input is rejected here so
//! the formatters never see one.

use crate::{
    Error,
    api::DashboardData,
    balance::Balance,
    format::{format_currency, format_date},
    transaction::Transaction,
};

/// A transaction plus the strings the table renders for it.
///
/// The formatted fields are derived from `transaction` at build time and
/// never mutated independently.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTransaction {
    /// The raw record, kept intact.
    pub transaction: Transaction,
    /// `transaction.value` through [format_currency].
    pub formatted_value: String,
    /// `transaction.created_at` through [format_date].
    pub formatted_date: String,
}

/// The three balance amounts as formatted strings.
///
/// Only the display strings are retained; the summary cards never compute
/// with the balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBalance {
    /// Formatted sum of income transactions.
    pub income: String,
    /// Formatted sum of outcome transactions.
    pub outcome: String,
    /// Formatted net total.
    pub total: String,
}

/// Everything the dashboard page renders after a successful load.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// Transactions in the order the API returned them.
    pub transactions: Vec<DisplayTransaction>,
    /// The formatted aggregate balance.
    pub balance: DisplayBalance,
}

/// Projects raw API records into the display-ready view-model.
///
/// # Errors
/// Returns [Error::NonFiniteAmount] if any transaction value or balance
/// amount is NaN or infinite.
pub fn build_view_model(raw: DashboardData) -> Result<ViewModel, Error> {
    let transactions = raw
        .transactions
        .into_iter()
        .map(|transaction| {
            let value = finite_amount(transaction.value)?;

            Ok(DisplayTransaction {
                formatted_value: format_currency(value),
                formatted_date: format_date(transaction.created_at),
                transaction,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let balance = build_display_balance(&raw.balance)?;

    Ok(ViewModel {
        transactions,
        balance,
    })
}

fn build_display_balance(balance: &Balance) -> Result<DisplayBalance, Error> {
    Ok(DisplayBalance {
        income: format_currency(finite_amount(balance.income)?),
        outcome: format_currency(finite_amount(balance.outcome)?),
        total: format_currency(finite_amount(balance.total)?),
    })
}

fn finite_amount(value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteAmount(value))
    }
}

#[cfg(test)]
mod build_view_model_tests {
    use time::macros::datetime;

    use crate::{
        Error,
        api::DashboardData,
        balance::Balance,
        transaction::{Category, Transaction, TransactionType},
    };

    use super::build_view_model;

    fn test_transaction(id: &str, title: &str, value: f64) -> Transaction {
        Transaction {
            id: id.to_owned(),
            title: title.to_owned(),
            value,
            transaction_type: TransactionType::Income,
            category: Category {
                title: "Outros".to_owned(),
            },
            created_at: datetime!(2020-04-10 22:20:43 UTC),
        }
    }

    fn test_balance() -> Balance {
        Balance {
            income: 500.0,
            outcome: 200.0,
            total: 300.0,
        }
    }

    #[test]
    fn preserves_transaction_order_and_count() {
        let raw = DashboardData {
            transactions: vec![
                test_transaction("1", "Salário", 5000.0),
                test_transaction("2", "Aluguel", 1200.0),
                test_transaction("3", "Mercado", 330.5),
            ],
            balance: test_balance(),
        };

        let view_model = build_view_model(raw).unwrap();

        assert_eq!(view_model.transactions.len(), 3);
        let ids: Vec<&str> = view_model
            .transactions
            .iter()
            .map(|display| display.transaction.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn derives_formatted_fields_and_keeps_raw_record() {
        let raw = DashboardData {
            transactions: vec![test_transaction("1", "Mercado", 330.5)],
            balance: test_balance(),
        };

        let view_model = build_view_model(raw).unwrap();
        let display = &view_model.transactions[0];

        assert_eq!(display.formatted_value, "R$ 330,50");
        assert_eq!(display.formatted_date, "10/04/2020");
        assert_eq!(display.transaction.value, 330.5);
        assert_eq!(display.transaction.title, "Mercado");
    }

    #[test]
    fn formats_all_three_balance_amounts() {
        let raw = DashboardData {
            transactions: vec![],
            balance: test_balance(),
        };

        let view_model = build_view_model(raw).unwrap();

        assert_eq!(view_model.balance.income, "R$ 500,00");
        assert_eq!(view_model.balance.outcome, "R$ 200,00");
        assert_eq!(view_model.balance.total, "R$ 300,00");
    }

    #[test]
    fn passes_unknown_category_titles_through() {
        let mut transaction = test_transaction("1", "???", 1.0);
        transaction.category.title = "Desconhecido".to_owned();
        let raw = DashboardData {
            transactions: vec![transaction],
            balance: test_balance(),
        };

        let view_model = build_view_model(raw).unwrap();

        assert_eq!(
            view_model.transactions[0].transaction.category.title,
            "Desconhecido"
        );
    }

    #[test]
    fn rejects_non_finite_transaction_value() {
        let raw = DashboardData {
            transactions: vec![test_transaction("1", "NaN", f64::NAN)],
            balance: test_balance(),
        };

        assert!(matches!(
            build_view_model(raw),
            Err(Error::NonFiniteAmount(_))
        ));
    }

    #[test]
    fn rejects_non_finite_balance_amount() {
        let raw = DashboardData {
            transactions: vec![],
            balance: Balance {
                income: f64::INFINITY,
                outcome: 0.0,
                total: 0.0,
            },
        };

        assert!(matches!(
            build_view_model(raw),
            Err(Error::NonFiniteAmount(_))
        ));
    }
}
