use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Значение поля записи, как его видит движок списков
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(DateTime<Utc>),
    Bool(bool),
}

impl FieldValue {
    /// Порядок типов при сравнении разнотипных значений
    fn rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Number(_) => 1,
            FieldValue::Date(_) => 2,
            FieldValue::Text(_) => 3,
        }
    }

    /// Текстовое представление для поиска и фильтров на равенство
    pub fn as_key(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            FieldValue::Date(dt) => dt.to_rfc3339(),
            FieldValue::Bool(b) => b.to_string(),
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Date(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Date(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Запись, которую можно показать в списке.
///
/// Движок не знает конкретных типов: он обращается к полям по имени.
/// Отсутствующее поле возвращает `None`, и предикаты трактуют его как несовпадение.
pub trait ListRecord {
    /// Уникальный идентификатор записи
    fn record_id(&self) -> String;

    /// Значение поля по имени (включая вычисляемые поля)
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// Сравнение значений полей, полный порядок.
///
/// - числа и даты сравниваются численно (`total_cmp` для f64)
/// - текст: без учета регистра, при равенстве — посимвольно
/// - разные типы упорядочиваются по рангу типа
/// - отсутствующее значение больше любого присутствующего (в конце при `Asc`)
pub fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_present(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_present(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(y),
        (FieldValue::Date(x), FieldValue::Date(y)) => x.cmp(y),
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x.cmp(y),
        (FieldValue::Text(x), FieldValue::Text(y)) => compare_text(x, y),
        _ => a.rank().cmp(&b.rank()),
    }
}

/// Сравнение строк без учета регистра
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_text_ignores_case() {
        let a = FieldValue::from("apple");
        let b = FieldValue::from("Banana");
        assert_eq!(compare_values(Some(&a), Some(&b)), Ordering::Less);
    }

    #[test]
    fn test_missing_sorts_last() {
        let a = FieldValue::from(1.0);
        assert_eq!(compare_values(Some(&a), None), Ordering::Less);
        assert_eq!(compare_values(None, Some(&a)), Ordering::Greater);
        assert_eq!(compare_values(None, None), Ordering::Equal);
    }

    #[test]
    fn test_dates_compare_chronologically() {
        let early = FieldValue::from(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let late = FieldValue::from(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(compare_values(Some(&early), Some(&late)), Ordering::Less);
    }

    #[test]
    fn test_as_key_renders_whole_numbers_without_fraction() {
        assert_eq!(FieldValue::from(42i64).as_key(), "42");
        assert_eq!(FieldValue::from(2.5).as_key(), "2.5");
        assert_eq!(FieldValue::from(true).as_key(), "true");
    }
}
