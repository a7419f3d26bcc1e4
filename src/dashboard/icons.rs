//! Category icons for the transaction table.
//!
//! Icon selection is an exact, case-sensitive lookup in a fixed table.
//! Titles outside the table render with no icon at all.

use maud::{Markup, html};

/// The known category titles and the icon each one renders with.
///
/// "Salario" and "Venda" share the earnings icon; everything else has its
/// own.
const CATEGORY_ICONS: &[(&str, fn() -> Markup)] = &[
    ("Salario", icon_earnings),
    ("Venda", icon_earnings),
    ("Moradia", icon_house),
    ("Comida", icon_food),
    ("Transporte", icon_transport),
];

/// Looks up the icon for a category title.
///
/// Returns `None` for any title outside the known set, including titles
/// that differ only in case.
pub(super) fn icon_for_category(title: &str) -> Option<Markup> {
    CATEGORY_ICONS
        .iter()
        .find(|(known_title, _)| *known_title == title)
        .map(|(_, icon)| icon())
}

/// Shared wrapper so all icons get the same sizing and stroke treatment.
fn icon(body: Markup) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="inline mr-2 align-middle"
            aria-hidden="true"
        {
            (body)
        }
    }
}

fn icon_earnings() -> Markup {
    icon(html! {
        line x1="12" y1="2" x2="12" y2="22" {}
        path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6" {}
    })
}

fn icon_house() -> Markup {
    icon(html! {
        path d="M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" {}
        polyline points="9 22 9 12 15 12 15 22" {}
    })
}

fn icon_food() -> Markup {
    icon(html! {
        path d="M3 9a9 5 0 0 1 18 0z" {}
        line x1="3" y1="12" x2="21" y2="12" {}
        path d="M3 15h18v2a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" {}
    })
}

fn icon_transport() -> Markup {
    icon(html! {
        circle cx="5.5" cy="17.5" r="3.5" {}
        circle cx="18.5" cy="17.5" r="3.5" {}
        path d="M15 6a1 1 0 1 0 0-2 1 1 0 0 0 0 2z" {}
        path d="M12 17.5V14l-3-3 4-3 2 3h2" {}
    })
}
