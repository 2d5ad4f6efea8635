//! US-dollar display formatting with whole-unit precision.

/// Formats an amount as `en-US` currency with no fraction digits, e.g.
/// `576000.0` becomes `$576,000`. Halves round away from zero.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_owned();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "$∞" } else { "-$∞" }.to_owned();
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);

    if rounded.is_sign_negative() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Opex slider label: a bare dollar sign with no grouping.
pub fn format_opex_label(opex: u32) -> String {
    format!("${opex}")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
