//! Currency and date formatting for the dashboard.
//!
//! All amounts render in the Brazilian Real convention: `R$` symbol, dot
//! thousands grouping and comma decimal mark, always two decimal digits.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::OffsetDateTime;

/// Formats a monetary amount as a Brazilian Real string, e.g. `R$ 1.234,50`.
///
/// Negative amounts render with a leading minus. Callers are expected to
/// validate non-finite values before formatting; the view-model builder is
/// the validation boundary for amounts arriving from the API.
pub fn format_currency(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("R$ ")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-R$ ")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "R$ 0,00".to_owned();
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    // numfmt only knows the en-US separators, so swap them for the pt-BR ones.
    formatted_string
        .chars()
        .map(|c| match c {
            ',' => '.',
            '.' => ',',
            other => other,
        })
        .collect()
}

/// Formats a timestamp as a short pt-BR date string, e.g. `10/04/2020`.
///
/// Day and month are zero-padded; the day, month and year components of the
/// input appear in the output verbatim.
pub fn format_date(timestamp: OffsetDateTime) -> String {
    let date = timestamp.date();

    format!(
        "{:02}/{:02}/{}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}

#[cfg(test)]
mod format_currency_tests {
    use super::format_currency;

    #[test]
    fn zero_renders_with_symbol_and_two_decimals() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
    }

    #[test]
    fn uses_comma_as_decimal_mark() {
        assert_eq!(format_currency(500.0), "R$ 500,00");
        assert_eq!(format_currency(330.5), "R$ 330,50");
        assert_eq!(format_currency(12.35), "R$ 12,35");
    }

    #[test]
    fn uses_dot_as_thousands_separator() {
        assert_eq!(format_currency(1234.5), "R$ 1.234,50");
        assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn negative_amounts_render_with_minus() {
        assert_eq!(format_currency(-200.0), "-R$ 200,00");
    }

    #[test]
    fn appends_omitted_trailing_zero() {
        assert_eq!(format_currency(12.3), "R$ 12,30");
        assert_eq!(format_currency(7.0), "R$ 7,00");
    }

    #[test]
    fn monotonic_for_fixed_sign() {
        let amounts = [0.01, 0.99, 1.0, 49.9, 50.0, 300.0, 1234.56, 99_999.99];

        for window in amounts.windows(2) {
            let smaller = format_currency(window[0]);
            let larger = format_currency(window[1]);
            assert_ne!(
                smaller, larger,
                "{} and {} should format differently",
                window[0], window[1]
            );
        }
    }
}
