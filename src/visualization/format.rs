/// Format a volume rounded to whole units with comma thousands separators,
/// e.g. `242,437,500`.
pub fn format_volume(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a fraction (0.0..=1.0) as a percentage, e.g. `35.0%`.
pub fn format_fraction(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
