use crate::utils::subscription::parse_date_ms;

/// DZD currency with thousands grouping, "Not selected" when the amount is
/// missing.
pub fn format_currency_dzd(amount: Option<f64>) -> String {
    match amount {
        Some(amount) if amount.is_finite() => format!("DZD {}", group_thousands(amount)),
        _ => "Not selected".to_string(),
    }
}

fn group_thousands(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!(
        "{}{}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        frac
    )
}

/// Short date, e.g. "Aug 29, 2026". Falls back to the raw string when the
/// server sends something unparseable.
pub fn format_date(date: &str) -> String {
    match parse_date_ms(date) {
        Some(ms) => match chrono::DateTime::from_timestamp_millis(ms) {
            Some(parsed) => parsed.format("%b %-d, %Y").to_string(),
            None => date.to_string(),
        },
        None => date.to_string(),
    }
}

/// First ten characters of an RFC 3339 date, for date inputs.
pub fn date_input_value(date: &str) -> String {
    date.chars().take(10).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_and_keeps_two_decimals() {
        assert_eq!(format_currency_dzd(Some(1_234_567.5)), "DZD 1,234,567.50");
        assert_eq!(format_currency_dzd(Some(950.0)), "DZD 950.00");
        assert_eq!(format_currency_dzd(Some(0.0)), "DZD 0.00");
    }

    #[test]
    fn missing_amount_reads_not_selected() {
        assert_eq!(format_currency_dzd(None), "Not selected");
        assert_eq!(format_currency_dzd(Some(f64::NAN)), "Not selected");
    }

    #[test]
    fn dates_render_short_month_form() {
        assert_eq!(format_date("2026-08-29T10:30:00.000Z"), "Aug 29, 2026");
        assert_eq!(format_date("2026-03-05"), "Mar 5, 2026");
        assert_eq!(format_date("garbage"), "garbage");
    }

    #[test]
    fn date_input_value_truncates_to_the_day() {
        assert_eq!(date_input_value("2026-08-29T10:30:00.000Z"), "2026-08-29");
        assert_eq!(date_input_value(""), "");
    }
}
