use crate::domain::common::{lenient, AggregateRoot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Enums
// ============================================================================

/// Тип скидки купона
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
}

impl DiscountType {
    pub fn code(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Fixed => "fixed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "Percentage",
            DiscountType::Fixed => "Fixed amount",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "percentage" => Some(DiscountType::Percentage),
            "fixed" => Some(DiscountType::Fixed),
            _ => None,
        }
    }
}

/// Статус купона, вычисляемый из дат и лимита использования
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CouponStatus {
    Active,
    Expired,
    UsedUp,
    /// Нет даты окончания: статус определить нельзя
    Unknown,
}

impl CouponStatus {
    pub fn code(&self) -> &'static str {
        match self {
            CouponStatus::Active => "active",
            CouponStatus::Expired => "expired",
            CouponStatus::UsedUp => "used",
            CouponStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CouponStatus::Active => "Active",
            CouponStatus::Expired => "Expired",
            CouponStatus::UsedUp => "Used up",
            CouponStatus::Unknown => "—",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    #[serde(default, deserialize_with = "lenient::id", alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub discount_type: DiscountType,
    #[serde(default, deserialize_with = "lenient::number")]
    pub discount_value: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub min_order_value: f64,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub max_discount: Option<f64>,
    /// Оставшееся количество использований; `None` — без ограничения
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub usage_limit: Option<i64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub used_count: i64,
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Coupon {
    /// Лимит исчерпан
    pub fn is_used_up(&self) -> bool {
        self.usage_limit == Some(0)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.end_date.map_or(false, |end| end < now)
    }

    /// Действует: не истек и лимит не исчерпан. Флаг `is_active` здесь не учитывается.
    pub fn is_current(&self, now: DateTime<Utc>) -> bool {
        self.end_date.map_or(false, |end| end >= now) && !self.is_used_up()
    }

    pub fn status(&self, now: DateTime<Utc>) -> CouponStatus {
        if self.is_used_up() {
            CouponStatus::UsedUp
        } else if self.is_expired(now) {
            CouponStatus::Expired
        } else if self.is_current(now) {
            CouponStatus::Active
        } else {
            CouponStatus::Unknown
        }
    }

    /// Совпадение с выбранным статусом фильтра.
    /// Статусы не взаимоисключающие: истекший купон с нулевым лимитом
    /// попадает и в «expired», и в «used».
    pub fn matches_status(&self, status: &str, now: DateTime<Utc>) -> bool {
        match status {
            "active" => self.is_current(now),
            "expired" => self.is_expired(now),
            "used" => self.is_used_up(),
            "enabled" => self.is_active,
            "disabled" => !self.is_active,
            _ => false,
        }
    }

    /// Размер скидки для суммы заказа без проверки условий применения.
    /// Никогда не превышает сумму заказа и `max_discount`.
    pub fn discount_for(&self, subtotal: f64) -> f64 {
        if subtotal <= 0.0
            || !subtotal.is_finite()
            || self.discount_value.is_nan()
            || self.discount_value <= 0.0
        {
            return 0.0;
        }
        let raw = match self.discount_type {
            DiscountType::Percentage => subtotal * self.discount_value.min(100.0) / 100.0,
            DiscountType::Fixed => self.discount_value,
        };
        let capped = match self.max_discount {
            Some(cap) if cap > 0.0 => raw.min(cap),
            _ => raw,
        };
        capped.min(subtotal).max(0.0)
    }

    /// Проверка, можно ли применить купон к заказу с такой суммой
    pub fn check_applicable(&self, subtotal: f64, now: DateTime<Utc>) -> Result<f64, CouponRejection> {
        if !self.is_active {
            return Err(CouponRejection::Disabled);
        }
        if let Some(start) = self.start_date {
            if start > now {
                return Err(CouponRejection::NotStarted(start));
            }
        }
        if self.is_expired(now) {
            return Err(CouponRejection::Expired);
        }
        if self.is_used_up() {
            return Err(CouponRejection::UsedUp);
        }
        if subtotal < self.min_order_value {
            return Err(CouponRejection::BelowMinimum {
                required: self.min_order_value,
                actual: subtotal,
            });
        }
        Ok(self.discount_for(subtotal))
    }

    /// Клиентская валидация формы купона
    pub fn validate(&self) -> Result<(), CouponValidationError> {
        if self.code.trim().is_empty() {
            return Err(CouponValidationError::EmptyCode);
        }
        if self.code.trim().chars().any(char::is_whitespace) {
            return Err(CouponValidationError::CodeHasSpaces);
        }
        if self.discount_value.is_nan() || self.discount_value <= 0.0 {
            return Err(CouponValidationError::NonPositiveValue);
        }
        if self.discount_type == DiscountType::Percentage && self.discount_value > 100.0 {
            return Err(CouponValidationError::PercentageOver100(self.discount_value));
        }
        if self.min_order_value < 0.0 {
            return Err(CouponValidationError::NegativeMinimum);
        }
        if matches!(self.max_discount, Some(cap) if cap <= 0.0) {
            return Err(CouponValidationError::NonPositiveMaxDiscount);
        }
        if matches!(self.usage_limit, Some(limit) if limit <= 0) {
            return Err(CouponValidationError::NonPositiveUsageLimit);
        }
        match (self.start_date, self.end_date) {
            (_, None) => Err(CouponValidationError::MissingEndDate),
            (Some(start), Some(end)) if end <= start => {
                Err(CouponValidationError::EndBeforeStart)
            }
            _ => Ok(()),
        }
    }

    /// Код в том виде, в котором он отправляется на сервер
    pub fn normalized_code(&self) -> String {
        self.code.trim().to_uppercase()
    }
}

impl Default for Coupon {
    fn default() -> Self {
        Self {
            id: String::new(),
            code: String::new(),
            description: String::new(),
            discount_type: DiscountType::Percentage,
            discount_value: 0.0,
            min_order_value: 0.0,
            max_discount: None,
            usage_limit: None,
            used_count: 0,
            start_date: None,
            end_date: None,
            is_active: true,
            created_at: None,
        }
    }
}

impl AggregateRoot for Coupon {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "coupons"
    }

    fn element_name() -> &'static str {
        "Coupon"
    }

    fn list_name() -> &'static str {
        "Coupons"
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CouponValidationError {
    #[error("Coupon code is required")]
    EmptyCode,
    #[error("Coupon code must not contain spaces")]
    CodeHasSpaces,
    #[error("Discount value must be greater than 0")]
    NonPositiveValue,
    #[error("Percentage discount cannot exceed 100% (got {0})")]
    PercentageOver100(f64),
    #[error("Minimum order value cannot be negative")]
    NegativeMinimum,
    #[error("Maximum discount must be greater than 0")]
    NonPositiveMaxDiscount,
    #[error("Usage limit must be greater than 0")]
    NonPositiveUsageLimit,
    #[error("End date is required")]
    MissingEndDate,
    #[error("End date must be after start date")]
    EndBeforeStart,
}

/// Причина, по которой купон нельзя применить к заказу
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CouponRejection {
    #[error("Coupon is disabled")]
    Disabled,
    #[error("Coupon is not valid until {}", .0.format("%d.%m.%Y"))]
    NotStarted(DateTime<Utc>),
    #[error("Coupon has expired")]
    Expired,
    #[error("Coupon usage limit reached")]
    UsedUp,
    #[error("Order total must be at least {required} (currently {actual})")]
    BelowMinimum { required: f64, actual: f64 },
    #[error("Coupon not found")]
    NotFound,
}

// ============================================================================
// Stats
// ============================================================================

/// Счетчики для карточек над списком купонов. Всегда пересчитываются
/// из полного набора записей.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CouponStats {
    pub total: usize,
    /// Включенные (`is_active`)
    pub enabled: usize,
    pub active: usize,
    pub expired: usize,
    pub used: usize,
}

impl CouponStats {
    pub fn from_records(records: &[Coupon], now: DateTime<Utc>) -> Self {
        records.iter().fold(
            Self {
                total: records.len(),
                ..Self::default()
            },
            |mut acc, c| {
                acc.enabled += c.is_active as usize;
                acc.active += c.is_current(now) as usize;
                acc.expired += c.is_expired(now) as usize;
                acc.used += c.is_used_up() as usize;
                acc
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 25, 9, 0, 0).unwrap()
    }

    fn coupon() -> Coupon {
        Coupon {
            id: "c1".into(),
            code: "TET2025".into(),
            discount_value: 10.0,
            start_date: Some(now() - Duration::days(10)),
            end_date: Some(now() + Duration::days(10)),
            ..Coupon::default()
        }
    }

    #[test]
    fn test_derived_status() {
        let c = coupon();
        assert_eq!(c.status(now()), CouponStatus::Active);

        let expired = Coupon {
            end_date: Some(now() - Duration::seconds(1)),
            ..coupon()
        };
        assert_eq!(expired.status(now()), CouponStatus::Expired);
        assert!(!expired.matches_status("active", now()));

        let used = Coupon {
            usage_limit: Some(0),
            ..coupon()
        };
        assert_eq!(used.status(now()), CouponStatus::UsedUp);
        assert!(used.matches_status("used", now()));
        assert!(!used.matches_status("active", now()));

        // окончание ровно сейчас еще считается действующим
        let boundary = Coupon {
            end_date: Some(now()),
            ..coupon()
        };
        assert!(boundary.matches_status("active", now()));
    }

    #[test]
    fn test_missing_end_date_matches_no_date_status() {
        let c = Coupon {
            end_date: None,
            ..coupon()
        };
        assert!(!c.matches_status("active", now()));
        assert!(!c.matches_status("expired", now()));
        assert_eq!(c.status(now()), CouponStatus::Unknown);
    }

    #[test]
    fn test_discount_for() {
        let pct = Coupon {
            discount_value: 20.0,
            max_discount: Some(50_000.0),
            ..coupon()
        };
        assert_eq!(pct.discount_for(100_000.0), 20_000.0);
        assert_eq!(pct.discount_for(1_000_000.0), 50_000.0);
        assert_eq!(pct.discount_for(0.0), 0.0);

        let fixed = Coupon {
            discount_type: DiscountType::Fixed,
            discount_value: 30_000.0,
            ..coupon()
        };
        assert_eq!(fixed.discount_for(100_000.0), 30_000.0);
        assert_eq!(fixed.discount_for(20_000.0), 20_000.0);

        // битое значение из формы не дает скидку на весь заказ
        let broken = Coupon {
            discount_value: f64::NAN,
            ..fixed
        };
        assert_eq!(broken.discount_for(100_000.0), 0.0);
        assert_eq!(
            Coupon { discount_value: f64::NAN, ..pct }.discount_for(100_000.0),
            0.0
        );
    }

    #[test]
    fn test_check_applicable() {
        let c = Coupon {
            min_order_value: 200_000.0,
            ..coupon()
        };
        assert!(matches!(
            c.check_applicable(150_000.0, now()),
            Err(CouponRejection::BelowMinimum { .. })
        ));
        assert_eq!(c.check_applicable(200_000.0, now()), Ok(20_000.0));

        let disabled = Coupon {
            is_active: false,
            ..coupon()
        };
        assert_eq!(
            disabled.check_applicable(1.0, now()),
            Err(CouponRejection::Disabled)
        );

        let future = Coupon {
            start_date: Some(now() + Duration::days(1)),
            ..coupon()
        };
        assert!(matches!(
            future.check_applicable(1.0, now()),
            Err(CouponRejection::NotStarted(_))
        ));
    }

    #[test]
    fn test_validate() {
        assert_eq!(coupon().validate(), Ok(()));
        assert_eq!(
            Coupon { code: "  ".into(), ..coupon() }.validate(),
            Err(CouponValidationError::EmptyCode)
        );
        assert_eq!(
            Coupon { discount_value: 120.0, ..coupon() }.validate(),
            Err(CouponValidationError::PercentageOver100(120.0))
        );
        assert_eq!(
            Coupon {
                discount_type: DiscountType::Fixed,
                discount_value: 120.0,
                ..coupon()
            }
            .validate(),
            Ok(())
        );
        assert_eq!(
            Coupon { usage_limit: Some(0), ..coupon() }.validate(),
            Err(CouponValidationError::NonPositiveUsageLimit)
        );
        assert_eq!(
            Coupon {
                end_date: Some(now() - Duration::days(20)),
                ..coupon()
            }
            .validate(),
            Err(CouponValidationError::EndBeforeStart)
        );
    }

    #[test]
    fn test_stats_are_recounted() {
        let records = vec![
            coupon(),
            Coupon { usage_limit: Some(0), ..coupon() },
            Coupon {
                end_date: Some(now() - Duration::days(1)),
                is_active: false,
                ..coupon()
            },
        ];
        let stats = CouponStats::from_records(&records, now());
        assert_eq!(
            stats,
            CouponStats {
                total: 3,
                enabled: 2,
                active: 1,
                expired: 1,
                used: 1,
            }
        );
        assert_eq!(CouponStats::from_records(&[], now()), CouponStats::default());
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let c: Coupon = serde_json::from_value(serde_json::json!({
            "_id": 42,
            "code": "SALE10",
            "discountType": "fixed",
            "discountValue": "10000",
            "usageLimit": null,
            "endDate": "2025-02-01",
            "isActive": "true"
        }))
        .unwrap();
        assert_eq!(c.id, "42");
        assert_eq!(c.discount_type, DiscountType::Fixed);
        assert_eq!(c.discount_value, 10_000.0);
        assert!(c.is_active);
        assert!(c.end_date.is_some());
    }
}
