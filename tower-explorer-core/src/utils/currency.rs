//! Currency formatting helpers.
//!
//! Prices are stored as whole dollars and displayed as `$12,345`.
//! Also provides a Serde `serialize_with` helper so serialized apartments
//! carry the display string, not the raw integer.

use serde::Serializer;

/// Formats a whole-dollar amount with a `$` prefix and `,` thousands separators.
#[must_use]
pub fn format_currency(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Serializes a whole-dollar amount as its formatted currency string.
pub fn serialize<S>(amount: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_currency(*amount))
}
