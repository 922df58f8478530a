//! Безопасная арифметика для агрегатов на дашбордах и в карточках статистики

/// Доля `part` от `total` в процентах. Нулевой или некорректный итог дает 0.
pub fn percent_of(part: f64, total: f64) -> f64 {
    ratio(part, total) * 100.0
}

/// Отношение `numerator / denominator`, 0 при нулевом знаменателе
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() || !numerator.is_finite() {
        return 0.0;
    }
    let value = numerator / denominator;
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// То же для счетчиков
pub fn percent_of_count(part: usize, total: usize) -> f64 {
    percent_of(part as f64, total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_total_is_zero_percent() {
        assert_eq!(percent_of(5.0, 0.0), 0.0);
        assert_eq!(percent_of_count(0, 0), 0.0);
        assert_eq!(ratio(1.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of_count(1, 4), 25.0);
        assert_eq!(percent_of(50.0, 200.0), 25.0);
    }
}
