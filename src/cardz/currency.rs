//! The supported-currency table.
//!
//! Consulted by form validation for the supported-set check and by the CLI
//! for rendering. The wallet itself never looks at it; a card's currency is
//! just a code once it passes validation.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub flag: &'static str,
}

/// Major world currencies, ordered by popularity.
pub const CURRENCIES: &[Currency] = &[
    Currency { code: "USD", name: "US Dollar", symbol: "$", flag: "🇺🇸" },
    Currency { code: "EUR", name: "Euro", symbol: "€", flag: "🇪🇺" },
    Currency { code: "GBP", name: "British Pound", symbol: "£", flag: "🇬🇧" },
    Currency { code: "JPY", name: "Japanese Yen", symbol: "¥", flag: "🇯🇵" },
    Currency { code: "CAD", name: "Canadian Dollar", symbol: "C$", flag: "🇨🇦" },
    Currency { code: "AUD", name: "Australian Dollar", symbol: "A$", flag: "🇦🇺" },
    Currency { code: "CHF", name: "Swiss Franc", symbol: "CHF", flag: "🇨🇭" },
    Currency { code: "CNY", name: "Chinese Yuan", symbol: "¥", flag: "🇨🇳" },
    Currency { code: "INR", name: "Indian Rupee", symbol: "₹", flag: "🇮🇳" },
    Currency { code: "BRL", name: "Brazilian Real", symbol: "R$", flag: "🇧🇷" },
    Currency { code: "MXN", name: "Mexican Peso", symbol: "$", flag: "🇲🇽" },
    Currency { code: "SGD", name: "Singapore Dollar", symbol: "S$", flag: "🇸🇬" },
    Currency { code: "HKD", name: "Hong Kong Dollar", symbol: "HK$", flag: "🇭🇰" },
    Currency { code: "NZD", name: "New Zealand Dollar", symbol: "NZ$", flag: "🇳🇿" },
    Currency { code: "SEK", name: "Swedish Krona", symbol: "kr", flag: "🇸🇪" },
    Currency { code: "KRW", name: "South Korean Won", symbol: "₩", flag: "🇰🇷" },
    Currency { code: "NOK", name: "Norwegian Krone", symbol: "kr", flag: "🇳🇴" },
    Currency { code: "DKK", name: "Danish Krone", symbol: "kr", flag: "🇩🇰" },
    Currency { code: "PLN", name: "Polish Złoty", symbol: "zł", flag: "🇵🇱" },
    Currency { code: "RUB", name: "Russian Ruble", symbol: "₽", flag: "🇷🇺" },
];

static BY_CODE: Lazy<HashMap<&'static str, &'static Currency>> =
    Lazy::new(|| CURRENCIES.iter().map(|c| (c.code, c)).collect());

pub fn find(code: &str) -> Option<&'static Currency> {
    BY_CODE.get(code).copied()
}

pub fn is_supported(code: &str) -> bool {
    BY_CODE.contains_key(code)
}

/// Render an amount with its currency symbol, e.g. `$50.00`. Unknown codes
/// fall back to prefixing the code itself.
pub fn format_amount(amount: f64, code: &str) -> String {
    match find(code) {
        Some(currency) => format!("{}{:.2}", currency.symbol, amount),
        None => format!("{} {:.2}", code, amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_codes() {
        assert_eq!(find("USD").map(|c| c.symbol), Some("$"));
        assert_eq!(find("PLN").map(|c| c.name), Some("Polish Złoty"));
        assert!(find("XYZ").is_none());
    }

    #[test]
    fn supported_set_matches_the_table() {
        assert!(is_supported("EUR"));
        assert!(!is_supported("usd"));
        assert!(!is_supported(""));
    }

    #[test]
    fn formats_amounts_with_symbols() {
        assert_eq!(format_amount(50.0, "USD"), "$50.00");
        assert_eq!(format_amount(25.5, "EUR"), "€25.50");
        assert_eq!(format_amount(10.0, "XYZ"), "XYZ 10.00");
    }
}
