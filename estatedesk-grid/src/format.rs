use chrono::{DateTime, NaiveDate};

/// Render an ISO date or RFC 3339 timestamp as `05 Mar 2024`.
///
/// Unparseable input is returned unchanged.
#[must_use]
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%d %b %Y").to_string();
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_or_else(|_| raw.to_string(), |d| d.format("%d %b %Y").to_string())
}

/// Minor units to a grouped amount, e.g. `1234567` to `12,345.67`.
#[must_use]
pub fn format_amount(minor_units: i64) -> String {
    let sign = if minor_units < 0 { "-" } else { "" };
    let abs = minor_units.unsigned_abs();
    let whole = (abs / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{:02}", abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_and_timestamp_dates() {
        assert_eq!(format_date("2024-03-05"), "05 Mar 2024");
        assert_eq!(format_date("2024-03-05T10:15:00Z"), "05 Mar 2024");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn formats_amounts_with_grouping() {
        assert_eq!(format_amount(1_234_567), "12,345.67");
        assert_eq!(format_amount(5), "0.05");
        assert_eq!(format_amount(-250_000), "-2,500.00");
    }
}
