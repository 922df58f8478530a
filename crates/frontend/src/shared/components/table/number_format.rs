//! Утилиты форматирования чисел для таблиц

use crate::shared::config::config;

/// Форматирует число с разделителем тысяч и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```rust,ignore
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.prec$}", value, prec = decimals.min(6) as usize);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Форматирует целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Сумма в донгах: без дробной части, символ валюты после числа
pub fn format_money_with(value: f64, currency_symbol: &str) -> String {
    format!("{}{}", format_number_int(value), currency_symbol)
}

/// Сумма с символом валюты из конфигурации
pub fn format_money(value: f64) -> String {
    format_money_with(value, &config().shop.currency_symbol)
}

/// Проценты с одним знаком; лишний ноль убирается
pub fn format_percent(value: f64) -> String {
    let s = format_number_with_decimals(value, 1);
    format!("{}%", s.strip_suffix(".0").unwrap_or(&s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money_with(1234.56, "₫"), "1,235₫");
        assert_eq!(format_money_with(1234567.0, "₫"), "1,234,567₫");
        assert_eq!(format_money_with(0.0, "₫"), "0₫");
        assert_eq!(format_money_with(-1234.0, "₫"), "-1,234₫");
        assert_eq!(format_money_with(f64::NAN, "₫"), "0₫");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(123.0, 0), "123");
        assert_eq!(format_number_with_decimals(-999999.0, 0), "-999,999");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(75.0), "75%");
        assert_eq!(format_percent(33.333), "33.3%");
        assert_eq!(format_percent(0.0), "0%");
    }
}
