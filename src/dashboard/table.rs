//! The transaction table and the views that replace it.

use maud::{Markup, html};

use crate::{
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE},
    transaction::TransactionType,
    view_model::DisplayTransaction,
};

use super::icons::icon_for_category;

const TABLE_HEADER_CELL_STYLE: &str = "px-6 py-3 text-left font-semibold";
const VALUE_INCOME_STYLE: &str = "text-green-600 dark:text-green-400 whitespace-nowrap";
const VALUE_OUTCOME_STYLE: &str = "text-red-600 dark:text-red-400 whitespace-nowrap";

/// The message shown when the account genuinely has no transactions.
pub(super) const EMPTY_STATE_MESSAGE: &str = "Não há nenhuma transação cadastrada.";

/// The notice shown when the load failed, deliberately distinct from
/// [EMPTY_STATE_MESSAGE].
pub(super) const LOAD_FAILED_MESSAGE: &str = "Não foi possível carregar as transações.";

/// Renders the transaction table, one row per transaction, in the order
/// given.
pub(super) fn transactions_table(transactions: &[DisplayTransaction]) -> Markup {
    html! {
        section class="w-full mx-auto mb-8" {
            div class="overflow-x-auto rounded-lg shadow" {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Título" }
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Preço" }
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Categoria" }
                            th scope="col" class=(TABLE_HEADER_CELL_STYLE) { "Data" }
                        }
                    }
                    tbody {
                        @for display in transactions {
                            (transaction_row(display))
                        }
                    }
                }
            }
        }
    }
}

/// Renders a single table row.
///
/// Outcome rows prefix the value with a minus indicator; income rows carry
/// no prefix. The category cell renders at most one icon, chosen by exact
/// title match, then the title text.
fn transaction_row(display: &DisplayTransaction) -> Markup {
    let transaction = &display.transaction;
    let value_style = match transaction.transaction_type {
        TransactionType::Income => VALUE_INCOME_STYLE,
        TransactionType::Outcome => VALUE_OUTCOME_STYLE,
    };

    html! {
        tr class=(TABLE_ROW_STYLE) {
            td class={(TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white"} {
                (transaction.title)
            }
            td class={(TABLE_CELL_STYLE) " " (value_style)} {
                @if transaction.transaction_type == TransactionType::Outcome {
                    " - "
                }
                (display.formatted_value)
            }
            td class=(TABLE_CELL_STYLE) {
                @if let Some(icon) = icon_for_category(&transaction.category.title) {
                    (icon)
                }
                (transaction.category.title)
            }
            td class=(TABLE_CELL_STYLE) {
                (display.formatted_date)
            }
        }
    }
}

/// Renders the fixed empty-state message in place of the table.
pub(super) fn empty_state_view() -> Markup {
    html! {
        h3 class="text-xl font-semibold text-center py-8" {
            (EMPTY_STATE_MESSAGE)
        }
    }
}

/// Renders the failure notice in place of the table.
pub(super) fn load_failed_view() -> Markup {
    html! {
        div class="text-center py-8" {
            h3 class="text-xl font-semibold text-red-600 dark:text-red-400" {
                (LOAD_FAILED_MESSAGE)
            }
            p class="mt-2 text-gray-600 dark:text-gray-400" {
                "Tente novamente mais tarde."
            }
        }
    }
}

#[cfg(test)]
mod transactions_table_tests {
    use time::macros::datetime;

    use crate::{
        transaction::{Category, Transaction, TransactionType},
        view_model::DisplayTransaction,
    };

    use super::{
        EMPTY_STATE_MESSAGE, LOAD_FAILED_MESSAGE, empty_state_view, load_failed_view,
        transactions_table,
    };

    fn display_transaction(
        title: &str,
        transaction_type: TransactionType,
        category: &str,
        formatted_value: &str,
    ) -> DisplayTransaction {
        DisplayTransaction {
            transaction: Transaction {
                id: title.to_owned(),
                title: title.to_owned(),
                value: 0.0,
                transaction_type,
                category: Category {
                    title: category.to_owned(),
                },
                created_at: datetime!(2020-04-10 22:20:43 UTC),
            },
            formatted_value: formatted_value.to_owned(),
            formatted_date: "10/04/2020".to_owned(),
        }
    }

    #[test]
    fn outcome_rows_carry_a_minus_prefix() {
        let rows = vec![
            display_transaction("Salário", TransactionType::Income, "Salario", "R$ 500,00"),
            display_transaction("Aluguel", TransactionType::Outcome, "Moradia", "R$ 200,00"),
        ];

        let html = transactions_table(&rows).into_string();

        assert!(html.contains(" - R$ 200,00"));
        assert!(!html.contains(" - R$ 500,00"));
    }

    #[test]
    fn rows_render_in_the_order_given() {
        let rows = vec![
            display_transaction("Primeiro", TransactionType::Income, "Outros", "R$ 1,00"),
            display_transaction("Segundo", TransactionType::Income, "Outros", "R$ 2,00"),
        ];

        let html = transactions_table(&rows).into_string();

        let first = html.find("Primeiro").unwrap();
        let second = html.find("Segundo").unwrap();
        assert!(first < second);
    }

    #[test]
    fn known_category_renders_an_icon() {
        let rows = vec![display_transaction(
            "Aluguel",
            TransactionType::Outcome,
            "Moradia",
            "R$ 200,00",
        )];

        let html = transactions_table(&rows).into_string();

        assert!(html.contains("<svg"));
        assert!(html.contains("Moradia"));
    }

    #[test]
    fn unknown_category_renders_text_only() {
        let rows = vec![display_transaction(
            "???",
            TransactionType::Income,
            "Desconhecido",
            "R$ 1,00",
        )];

        let html = transactions_table(&rows).into_string();

        assert!(!html.contains("<svg"));
        assert!(html.contains("Desconhecido"));
    }

    #[test]
    fn empty_and_failed_views_are_distinct() {
        let empty = empty_state_view().into_string();
        let failed = load_failed_view().into_string();

        assert!(empty.contains(EMPTY_STATE_MESSAGE));
        assert!(failed.contains(LOAD_FAILED_MESSAGE));
        assert!(!failed.contains(EMPTY_STATE_MESSAGE));
    }
}
