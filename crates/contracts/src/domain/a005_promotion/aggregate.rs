use crate::domain::common::{lenient, AggregateRoot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Этап акции относительно текущего времени
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionPhase {
    Upcoming,
    Running,
    Ended,
    Disabled,
}

impl PromotionPhase {
    pub fn code(&self) -> &'static str {
        match self {
            PromotionPhase::Upcoming => "upcoming",
            PromotionPhase::Running => "running",
            PromotionPhase::Ended => "ended",
            PromotionPhase::Disabled => "disabled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PromotionPhase::Upcoming => "Coming soon",
            PromotionPhase::Running => "On now",
            PromotionPhase::Ended => "Ended",
            PromotionPhase::Disabled => "Disabled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    #[serde(default, deserialize_with = "lenient::id", alias = "_id")]
    pub id: String,
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub discount_percent: f64,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub banner: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: bool,
    #[serde(default, alias = "products")]
    pub product_ids: Vec<String>,
}

impl Promotion {
    /// Границы включительно. Без даты начала акция считается начавшейся,
    /// без даты окончания — бессрочной.
    pub fn phase(&self, now: DateTime<Utc>) -> PromotionPhase {
        if !self.is_active {
            PromotionPhase::Disabled
        } else if self.start_date.map_or(false, |s| s > now) {
            PromotionPhase::Upcoming
        } else if self.end_date.map_or(false, |e| e < now) {
            PromotionPhase::Ended
        } else {
            PromotionPhase::Running
        }
    }

    pub fn is_running(&self, now: DateTime<Utc>) -> bool {
        self.phase(now) == PromotionPhase::Running
    }

    /// Полных дней до окончания; `None` для бессрочной или завершенной
    pub fn days_left(&self, now: DateTime<Utc>) -> Option<i64> {
        let end = self.end_date?;
        if end < now {
            return None;
        }
        Some((end - now).num_days())
    }

    /// Цена товара по акции, скидка ограничена 0..=100 %
    pub fn apply_to(&self, price: f64) -> f64 {
        let pct = self.discount_percent.clamp(0.0, 100.0);
        (price * (100.0 - pct) / 100.0).max(0.0)
    }

    pub fn includes_product(&self, product_id: &str) -> bool {
        self.product_ids.iter().any(|id| id == product_id)
    }
}

impl AggregateRoot for Promotion {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "promotions"
    }

    fn element_name() -> &'static str {
        "Promotion"
    }

    fn list_name() -> &'static str {
        "Promotions"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 28, 0, 0, 0).unwrap()
    }

    fn promo(start: i64, end: i64) -> Promotion {
        Promotion {
            id: "tet".into(),
            title: "Tet sale".into(),
            discount_percent: 15.0,
            start_date: Some(now() + Duration::days(start)),
            end_date: Some(now() + Duration::days(end)),
            is_active: true,
            ..Promotion::default()
        }
    }

    #[test]
    fn test_phase() {
        assert_eq!(promo(-1, 1).phase(now()), PromotionPhase::Running);
        assert_eq!(promo(1, 3).phase(now()), PromotionPhase::Upcoming);
        assert_eq!(promo(-3, -1).phase(now()), PromotionPhase::Ended);
        assert_eq!(
            Promotion { is_active: false, ..promo(-1, 1) }.phase(now()),
            PromotionPhase::Disabled
        );
        let open_ended = Promotion {
            end_date: None,
            ..promo(-1, 0)
        };
        assert!(open_ended.is_running(now()));
        assert_eq!(open_ended.days_left(now()), None);
    }

    #[test]
    fn test_apply_and_days_left() {
        assert_eq!(promo(-1, 3).apply_to(200_000.0), 170_000.0);
        assert_eq!(
            Promotion { discount_percent: 150.0, ..promo(-1, 3) }.apply_to(10.0),
            0.0
        );
        assert_eq!(promo(-1, 3).days_left(now()), Some(3));
        assert_eq!(promo(-3, -1).days_left(now()), None);
    }
}
