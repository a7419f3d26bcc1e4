//! The three balance summary cards at the top of the dashboard.

use maud::{Markup, html};

use crate::view_model::DisplayBalance;

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-6 shadow-md";

const CARD_TOTAL_STYLE: &str = "bg-orange-500 text-white border border-orange-500 \
    rounded-lg p-6 shadow-md";

/// Renders the income, outcome and total cards.
///
/// All three cards always render. Before a successful load (or after a
/// failed one) there is no balance, and each card shows a blank placeholder
/// where the amount would go.
pub(super) fn summary_cards(balance: Option<&DisplayBalance>) -> Markup {
    let income = balance.map(|balance| balance.income.as_str()).unwrap_or("");
    let outcome = balance.map(|balance| balance.outcome.as_str()).unwrap_or("");
    let total = balance.map(|balance| balance.total.as_str()).unwrap_or("");

    html! {
        section class="w-full mx-auto -mt-10 mb-8" {
            div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                (summary_card("Entradas", income, "balance-income", "/static/income.svg", CARD_STYLE))
                (summary_card("Saídas", outcome, "balance-outcome", "/static/outcome.svg", CARD_STYLE))
                (summary_card("Total", total, "balance-total", "/static/total.svg", CARD_TOTAL_STYLE))
            }
        }
    }
}

/// Renders a single summary card.
fn summary_card(
    label: &str,
    amount: &str,
    test_id: &str,
    icon_path: &str,
    style: &str,
) -> Markup {
    html! {
        div class=(style) {
            header class="flex items-center justify-between" {
                p class="text-base" { (label) }
                img src=(icon_path) alt=(label);
            }
            h1 data-testid=(test_id) class="mt-4 text-3xl font-medium leading-tight" {
                (amount)
            }
        }
    }
}
