//! Терпимая десериализация полей, пришедших с сервера.
//!
//! Бэкенд отдает JSON из разных источников: ID бывает числом или строкой
//! (`id` / `_id`), числа — строками, даты — пустыми строками. Битое значение
//! превращается в «отсутствует», а не в ошибку разбора всего списка.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// ID: строка или число
pub fn id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Необязательная строка: `null`, число и пустая строка обрабатываются
pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Число или числовая строка; иначе 0
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_number(deserializer)?.unwrap_or(0.0))
}

/// Необязательное число
pub fn opt_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_number(&value))
}

/// Целое или целочисленная строка; иначе `None`
pub fn opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_number(&value).map(|n| n.trunc() as i64))
}

/// Целое; иначе 0
pub fn int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_int(deserializer)?.unwrap_or(0))
}

/// Булево значение; строки "true"/"false" тоже принимаются, иначе `false`
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => s.eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(false),
        _ => false,
    })
}

/// Дата-время в RFC 3339 или дата `YYYY-MM-DD`; иначе `None`
pub fn opt_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => parse_datetime(&s),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    })
}

/// Разбор строки даты в формате сервера
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn value_to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "id", alias = "_id")]
        id: String,
        #[serde(default, deserialize_with = "number")]
        price: f64,
        #[serde(default, deserialize_with = "opt_int")]
        limit: Option<i64>,
        #[serde(default, deserialize_with = "opt_datetime")]
        at: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "flag")]
        active: bool,
    }

    #[test]
    fn test_accepts_loose_values() {
        let p: Probe = serde_json::from_value(json!({
            "_id": 17,
            "price": "120.5",
            "limit": "3",
            "at": "2025-01-02T03:04:05Z",
            "active": "true"
        }))
        .unwrap();
        assert_eq!(p.id, "17");
        assert_eq!(p.price, 120.5);
        assert_eq!(p.limit, Some(3));
        assert_eq!(p.at, Some(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()));
        assert!(p.active);
    }

    #[test]
    fn test_broken_values_become_absent() {
        let p: Probe = serde_json::from_value(json!({
            "id": "abc",
            "price": "n/a",
            "limit": null,
            "at": "not a date"
        }))
        .unwrap();
        assert_eq!(p.price, 0.0);
        assert_eq!(p.limit, None);
        assert_eq!(p.at, None);
        assert!(!p.active);
    }

    #[test]
    fn test_plain_date_is_midnight_utc() {
        assert_eq!(
            parse_datetime("2025-02-10"),
            Some(Utc.with_ymd_and_hms(2025, 2, 10, 0, 0, 0).unwrap())
        );
        assert_eq!(parse_datetime(""), None);
    }
}
