//! Number formatting for table cells (prices in rupees, stock counts).

/// Inserts a comma every three digits of the integer part.
fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();
    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(d) => format!("{sign}{grouped}.{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `₹1,234.50`, or `-` for a missing value.
pub fn format_money(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("₹{}", format_number_with_decimals(v, 2)),
        None => "-".to_string(),
    }
}

pub fn format_count(value: Option<i64>) -> String {
    match value {
        Some(v) => format_number_with_decimals(v as f64, 0),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_number_with_decimals(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-1500.5, 1), "-1,500.5");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
    }

    #[test]
    fn test_money_and_count() {
        assert_eq!(format_money(Some(2499.0)), "₹2,499.00");
        assert_eq!(format_money(None), "-");
        assert_eq!(format_count(Some(12000)), "12,000");
        assert_eq!(format_count(None), "-");
    }
}
