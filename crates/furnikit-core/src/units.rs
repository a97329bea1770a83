//! Display formatting for lengths and money
//!
//! Lengths are always millimeters; numbers use the shortest round-trip
//! representation (`800`, `380.5`).

/// Single length, e.g. `800mm`
pub fn format_dimension(mm: f64) -> String {
    format!("{}mm", mm)
}

/// Outer size of a design, e.g. `800×400×1800mm`
pub fn format_dimensions(width: f64, depth: f64, height: f64) -> String {
    format!("{}×{}×{}mm", width, depth, height)
}

/// Money with two decimals and thousands separators.
///
/// EUR is rendered with a leading `€`; other codes trail the amount.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let grouped = group_thousands(amount.abs());
    let sign = if amount < 0.0 && grouped != "0.00" {
        "-"
    } else {
        ""
    };

    if currency.eq_ignore_ascii_case("EUR") {
        format!("{}€{}", sign, grouped)
    } else {
        format!("{}{} {}", sign, grouped, currency.to_ascii_uppercase())
    }
}

fn group_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}.{}", grouped, frac_part)
}
