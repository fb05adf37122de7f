//! Display strings for the results panel.

/// Shown wherever a figure cannot be computed (e.g. cost per square foot with
/// zero square footage).
pub const UNDEFINED: &str = "—";

/// en-US currency with at most `max_fraction_digits` decimals. Rounds half away
/// from zero and drops trailing fractional zeros, so 313.5 stays `$313.5`.
pub fn format_currency(value: f64, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return UNDEFINED.to_string();
    }

    let scale = 10_f64.powi(max_fraction_digits as i32);
    let scaled = (value.abs() * scale).round();
    if !scaled.is_finite() {
        return UNDEFINED.to_string();
    }

    let mut digits = format!("{scaled:.0}");
    if digits.len() <= max_fraction_digits {
        digits = format!("{digits:0>width$}", width = max_fraction_digits + 1);
    }
    let split = digits.len() - max_fraction_digits;
    let (whole, fraction) = digits.split_at(split);
    let fraction = fraction.trim_end_matches('0');

    let sign = if value < 0.0 && scaled != 0.0 { "-" } else { "" };
    let mut out = format!("{sign}${}", group_thousands(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Whole dollars: UPDC total and breakdown lines.
pub fn format_dollars(value: f64) -> String {
    format_currency(value, 0)
}

pub fn format_per_sqft(value: f64) -> String {
    format_currency(value, 2)
}

pub fn format_share(share: Option<f64>) -> String {
    match share {
        Some(value) if value.is_finite() => format!("{:.1}%", value * 100.0),
        _ => UNDEFINED.to_string(),
    }
}

/// Value as it should appear inside its input box.
pub fn format_input(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
