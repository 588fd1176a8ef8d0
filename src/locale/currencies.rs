//! ISO 4217 currency code to display symbol lookup.

/// Display symbol for a currency code.
///
/// Matching ignores ASCII case; unknown codes are returned unchanged.
pub fn currency_symbol(code: &str) -> &str {
    let upper = code.trim().to_ascii_uppercase();
    match CURRENCY_SYMBOLS.binary_search_by(|(c, _)| (*c).cmp(upper.as_str())) {
        Ok(idx) => CURRENCY_SYMBOLS[idx].1,
        Err(_) => code,
    }
}

/// Sorted by code for binary search.
static CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "A$"),   // Australian Dollar
    ("BGN", "лв"),   // Bulgarian Lev
    ("BRL", "R$"),   // Brazilian Real
    ("CAD", "C$"),   // Canadian Dollar
    ("CHF", "CHF"),  // Swiss Franc
    ("CNY", "¥"),    // Chinese Yuan
    ("CZK", "Kč"),   // Czech Koruna
    ("DKK", "kr"),   // Danish Krone
    ("EUR", "€"),    // Euro
    ("GBP", "£"),    // Pound Sterling
    ("HKD", "HK$"),  // Hong Kong Dollar
    ("HUF", "Ft"),   // Hungarian Forint
    ("ILS", "₪"),    // Israeli Shekel
    ("INR", "₹"),    // Indian Rupee
    ("JPY", "¥"),    // Japanese Yen
    ("KRW", "₩"),    // South Korean Won
    ("MXN", "MX$"),  // Mexican Peso
    ("NOK", "kr"),   // Norwegian Krone
    ("NZD", "NZ$"),  // New Zealand Dollar
    ("PLN", "zł"),   // Polish Zloty
    ("RON", "lei"),  // Romanian Leu
    ("RUB", "₽"),    // Russian Ruble
    ("SEK", "kr"),   // Swedish Krona
    ("SGD", "S$"),   // Singapore Dollar
    ("THB", "฿"),    // Thai Baht
    ("TRY", "₺"),    // Turkish Lira
    ("UAH", "₴"),    // Ukrainian Hryvnia
    ("USD", "$"),    // US Dollar
    ("ZAR", "R"),    // South African Rand
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_symbols() {
        assert_eq!(currency_symbol("EUR"), "€");
        assert_eq!(currency_symbol("usd"), "$");
        assert_eq!(currency_symbol("PLN"), "zł");
        assert_eq!(currency_symbol("CHF"), "CHF");
    }

    #[test]
    fn unknown_code_falls_back_to_raw() {
        assert_eq!(currency_symbol("XYZ"), "XYZ");
        assert_eq!(currency_symbol(""), "");
        assert_eq!(currency_symbol("xyz"), "xyz");
        assert_eq!(currency_symbol(" gbp "), "£");
    }

    #[test]
    fn list_is_sorted() {
        for window in CURRENCY_SYMBOLS.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "currency codes not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }
}
