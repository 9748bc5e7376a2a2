//! Shared formatting utilities for the UI layer.

use chrono::NaiveDate;

/// Format an amount in naira with thousands separators, e.g. "₦2,500,000".
///
/// Amounts are whole naira; kobo are dropped.
pub fn format_naira(amount: f64) -> String {
    format!("₦{}", group_thousands(amount.round() as i64))
}

/// Format an integer count with thousands separators, e.g. "12,450".
pub fn format_count(n: i64) -> String {
    group_thousands(n)
}

fn group_thousands(n: i64) -> String {
    let (sign, digits) = if n < 0 {
        ("-", n.unsigned_abs().to_string())
    } else {
        ("", n.to_string())
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}")
}

/// Format a date as "Jan 20, 2026".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// One star-rating string like "4.8 ★".
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1} \u{2605}")
}

/// Capitalize a status value for display ("pending" -> "Pending").
pub fn format_status_label(status: &str) -> String {
    let mut chars = status.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naira_amounts_group_thousands() {
        assert_eq!(format_naira(0.0), "₦0");
        assert_eq!(format_naira(950.0), "₦950");
        assert_eq!(format_naira(15_000.0), "₦15,000");
        assert_eq!(format_naira(2_500_000.0), "₦2,500,000");
    }

    #[test]
    fn naira_amounts_round_off_kobo() {
        assert_eq!(format_naira(1_234.56), "₦1,235");
    }

    #[test]
    fn dates_render_short_month() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
        assert_eq!(format_date(date), "Jan 20, 2026");
        let single_digit = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
        assert_eq!(format_date(single_digit), "Nov 3, 2025");
    }

    #[test]
    fn status_labels_capitalize_first_letter() {
        assert_eq!(format_status_label("pending"), "Pending");
        assert_eq!(format_status_label("cancelled"), "Cancelled");
        assert_eq!(format_status_label(""), "");
    }
}
