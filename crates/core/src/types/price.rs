//! Numeric ordering for decimal price strings.
//!
//! Shopify returns variant prices as decimal strings (e.g. `"19.99"`). They are
//! kept as strings in every record and only interpreted as numbers when two
//! prices are compared.

use core::cmp::Ordering;

/// Interpret a decimal price string as a number.
///
/// Surrounding whitespace is ignored. Returns `None` for anything that does not
/// parse as a finite-or-infinite float (including `"NaN"`).
///
/// ```
/// use shopsearch_core::numeric_price;
///
/// assert_eq!(numeric_price("19.99"), Some(19.99));
/// assert_eq!(numeric_price(" 5.00 "), Some(5.0));
/// assert_eq!(numeric_price("free"), None);
/// ```
#[must_use]
pub fn numeric_price(price: &str) -> Option<f64> {
    price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Compare two price strings by their numeric value.
///
/// This is a total order: prices that do not parse sort after every numeric
/// price and compare equal to each other, so a stable sort keeps them in
/// their original relative order.
#[must_use]
pub fn compare_prices(a: &str, b: &str) -> Ordering {
    match (numeric_price(a), numeric_price(b)) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
