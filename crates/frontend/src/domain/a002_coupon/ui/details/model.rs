use crate::shared::date_utils::{input_date_end, input_date_start, to_input_date};
use contracts::domain::a002_coupon::{Coupon, DiscountType};

/// Поля формы в том виде, в котором их держат `<input>`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CouponForm {
    pub id: String,
    pub code: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: String,
    pub min_order_value: String,
    pub max_discount: String,
    pub usage_limit: String,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub used_count: i64,
}

fn number_field(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    // нечисловой ввод проходит как NaN и отсекается валидацией
    Some(raw.parse::<f64>().unwrap_or(f64::NAN))
}

fn text_number(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        value.to_string()
    }
}

impl CouponForm {
    pub fn new_draft() -> Self {
        Self {
            is_active: true,
            ..Self::default()
        }
    }

    pub fn from_coupon(c: &Coupon) -> Self {
        Self {
            id: c.id.clone(),
            code: c.code.clone(),
            description: c.description.clone(),
            discount_type: c.discount_type,
            discount_value: text_number(c.discount_value),
            min_order_value: text_number(c.min_order_value),
            max_discount: c.max_discount.map(text_number).unwrap_or_default(),
            usage_limit: c.usage_limit.map(|v| v.to_string()).unwrap_or_default(),
            start_date: to_input_date(c.start_date),
            end_date: to_input_date(c.end_date),
            is_active: c.is_active,
            used_count: c.used_count,
        }
    }

    /// Купон из формы. Числа, которые не удалось разобрать, дают значения,
    /// заведомо не проходящие `Coupon::validate`.
    pub fn to_coupon(&self) -> Coupon {
        Coupon {
            id: self.id.clone(),
            code: self.code.clone(),
            description: self.description.clone(),
            discount_type: self.discount_type,
            discount_value: number_field(&self.discount_value).unwrap_or(0.0),
            min_order_value: number_field(&self.min_order_value)
                .map(|v| if v.is_nan() { -1.0 } else { v })
                .unwrap_or(0.0),
            max_discount: number_field(&self.max_discount).map(|v| if v.is_nan() { 0.0 } else { v }),
            usage_limit: match self.usage_limit.trim() {
                "" => None,
                raw => Some(raw.parse::<i64>().unwrap_or(0)),
            },
            used_count: self.used_count,
            start_date: input_date_start(&self.start_date),
            end_date: input_date_end(&self.end_date),
            is_active: self.is_active,
            created_at: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        !self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_coupon::CouponValidationError;

    fn filled() -> CouponForm {
        CouponForm {
            code: "TET2025".into(),
            discount_value: "15".into(),
            end_date: "2025-02-15".into(),
            ..CouponForm::new_draft()
        }
    }

    #[test]
    fn test_valid_form_converts() {
        let coupon = filled().to_coupon();
        assert_eq!(coupon.validate(), Ok(()));
        assert_eq!(coupon.discount_value, 15.0);
        assert_eq!(coupon.usage_limit, None);
        assert_eq!(
            coupon.end_date.map(|d| d.format("%Y-%m-%d %H:%M").to_string()),
            Some("2025-02-15 23:59".to_string())
        );
    }

    #[test]
    fn test_garbage_numbers_fail_validation() {
        let form = CouponForm {
            discount_value: "abc".into(),
            ..filled()
        };
        assert_eq!(form.to_coupon().validate(), Err(CouponValidationError::NonPositiveValue));

        let form = CouponForm {
            usage_limit: "many".into(),
            ..filled()
        };
        assert_eq!(form.to_coupon().validate(), Err(CouponValidationError::NonPositiveUsageLimit));

        let form = CouponForm {
            min_order_value: "x".into(),
            ..filled()
        };
        assert_eq!(form.to_coupon().validate(), Err(CouponValidationError::NegativeMinimum));
    }

    #[test]
    fn test_round_trip_keeps_dates() {
        let coupon = filled().to_coupon();
        let form = CouponForm::from_coupon(&coupon);
        assert_eq!(form.end_date, "2025-02-15");
        assert_eq!(form.usage_limit, "");
    }
}
