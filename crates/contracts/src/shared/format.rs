//! Форматирование чисел для карточек и шкал KPI

/// Число с разделителем тысяч `,` и не более чем двумя знаками после точки.
///
/// Незначащие нули дробной части отбрасываются: `1234.5 -> "1,234.5"`,
/// `98.0 -> "98"`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (integer_part, decimal_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let decimal_part = decimal_part.trim_end_matches('0');

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };

    if decimal_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{decimal_part}")
    }
}

/// Процент с одним знаком после точки, как в общем показателе дашборда.
pub fn format_percent_1(value: f64) -> String {
    format!("{:.1}%", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(98.5), "98.5");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.891), "1,234,567.89");
        assert_eq!(format_number(99.999), "100");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-75.0), "-75");
        assert_eq!(format_number(-1234.5), "-1,234.5");
        assert_eq!(format_number(-0.001), "0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent_1(65.0), "65.0%");
        assert_eq!(format_percent_1(0.0), "0.0%");
    }
}
