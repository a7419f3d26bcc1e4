//! The header region shown above the dashboard content.

use maud::{Markup, html};

/// The fixed page header: brand mark on the left, nothing else.
///
/// The dashboard is this app's only page, so unlike a navigation bar there
/// is no notion of an active link.
pub struct PageHeader;

impl PageHeader {
    pub fn into_html(self) -> Markup {
        html! {
            header class="w-full bg-indigo-950 dark:bg-gray-950" {
                div class="flex items-center justify-between max-w-screen-xl px-6 py-6 mx-auto" {
                    a href="/" class="flex items-center gap-3" {
                        img class="w-8 h-8" src="/static/logo.svg" alt="GoFinances";
                        span class="text-2xl font-semibold text-white" { "GoFinances" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod page_header_tests {
    use super::PageHeader;

    #[test]
    fn renders_brand_name() {
        let html = PageHeader.into_html().into_string();

        assert!(html.contains("GoFinances"));
        assert!(html.contains("<header"));
    }
}
