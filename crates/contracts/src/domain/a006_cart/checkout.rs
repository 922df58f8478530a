use super::aggregate::Cart;
use crate::domain::a002_coupon::{Coupon, CouponRejection};
use crate::domain::a003_customer::Address;
use crate::domain::a004_order::PaymentMethod;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Правило доставки: фиксированная ставка, бесплатно от порога
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    pub flat_fee: f64,
    /// `None` — бесплатной доставки нет
    pub free_threshold: Option<f64>,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            flat_fee: 30_000.0,
            free_threshold: Some(500_000.0),
        }
    }
}

impl ShippingPolicy {
    /// Стоимость доставки считается от суммы товаров до скидки
    pub fn fee_for(&self, subtotal: f64) -> f64 {
        if subtotal <= 0.0 {
            return 0.0;
        }
        match self.free_threshold {
            Some(threshold) if subtotal >= threshold => 0.0,
            _ => self.flat_fee.max(0.0),
        }
    }

    /// Сколько осталось до бесплатной доставки
    pub fn remaining_for_free(&self, subtotal: f64) -> Option<f64> {
        let threshold = self.free_threshold?;
        (subtotal < threshold).then(|| threshold - subtotal)
    }
}

/// Итоги оформления заказа. Сервер пересчитывает их сам, здесь — предпросмотр.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckoutSummary {
    pub subtotal: f64,
    pub discount: f64,
    pub shipping_fee: f64,
    pub total: f64,
    /// Код примененного купона
    pub coupon_code: Option<String>,
    /// Причина, по которой введенный купон не применился
    pub coupon_rejection: Option<CouponRejection>,
}

impl CheckoutSummary {
    pub fn compute(
        cart: &Cart,
        coupon: Option<&Coupon>,
        policy: &ShippingPolicy,
        now: DateTime<Utc>,
    ) -> Self {
        let subtotal = cart.subtotal();
        let shipping_fee = policy.fee_for(subtotal);
        let (discount, coupon_code, coupon_rejection) = match coupon {
            None => (0.0, None, None),
            Some(c) => match c.check_applicable(subtotal, now) {
                Ok(d) => (d, Some(c.normalized_code()), None),
                Err(e) => (0.0, None, Some(e)),
            },
        };
        Self {
            subtotal,
            discount,
            shipping_fee,
            total: (subtotal - discount + shipping_fee).max(0.0),
            coupon_code,
            coupon_rejection,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderItem {
    pub product_id: String,
    pub quantity: i64,
}

/// Тело запроса на создание заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub items: Vec<PlaceOrderItem>,
    pub shipping_address: Address,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PlaceOrderRequest {
    pub fn new(
        cart: &Cart,
        shipping_address: Address,
        payment_method: PaymentMethod,
        summary: &CheckoutSummary,
        note: &str,
    ) -> Self {
        let note = note.trim();
        Self {
            items: cart
                .lines
                .iter()
                .map(|l| PlaceOrderItem {
                    product_id: l.product_id.clone(),
                    quantity: l.quantity,
                })
                .collect(),
            shipping_address,
            payment_method,
            coupon_code: summary.coupon_code.clone(),
            note: (!note.is_empty()).then(|| note.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_coupon::DiscountType;
    use crate::domain::a006_cart::CartLine;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 25, 9, 0, 0).unwrap()
    }

    fn cart(subtotal: f64) -> Cart {
        Cart {
            lines: vec![CartLine {
                product_id: "p1".into(),
                name: "Lantern".into(),
                image: None,
                price: subtotal,
                quantity: 1,
                stock: None,
            }],
        }
    }

    fn coupon(min_order: f64) -> Coupon {
        Coupon {
            code: "tet50k".into(),
            discount_type: DiscountType::Fixed,
            discount_value: 50_000.0,
            min_order_value: min_order,
            end_date: Some(now() + Duration::days(3)),
            ..Coupon::default()
        }
    }

    #[test]
    fn test_shipping_policy() {
        let policy = ShippingPolicy::default();
        assert_eq!(policy.fee_for(0.0), 0.0);
        assert_eq!(policy.fee_for(100_000.0), 30_000.0);
        assert_eq!(policy.fee_for(500_000.0), 0.0);
        assert_eq!(policy.remaining_for_free(450_000.0), Some(50_000.0));
        assert_eq!(policy.remaining_for_free(600_000.0), None);
    }

    #[test]
    fn test_summary_with_applicable_coupon() {
        let summary = CheckoutSummary::compute(
            &cart(200_000.0),
            Some(&coupon(100_000.0)),
            &ShippingPolicy::default(),
            now(),
        );
        assert_eq!(summary.discount, 50_000.0);
        assert_eq!(summary.shipping_fee, 30_000.0);
        assert_eq!(summary.total, 180_000.0);
        assert_eq!(summary.coupon_code.as_deref(), Some("TET50K"));
        assert!(summary.coupon_rejection.is_none());
    }

    #[test]
    fn test_summary_with_rejected_coupon() {
        let summary = CheckoutSummary::compute(
            &cart(80_000.0),
            Some(&coupon(100_000.0)),
            &ShippingPolicy::default(),
            now(),
        );
        assert_eq!(summary.discount, 0.0);
        assert_eq!(summary.total, 110_000.0);
        assert!(matches!(
            summary.coupon_rejection,
            Some(CouponRejection::BelowMinimum { .. })
        ));

        let request = PlaceOrderRequest::new(
            &cart(80_000.0),
            Address::default(),
            PaymentMethod::Cod,
            &summary,
            "  ",
        );
        assert_eq!(request.coupon_code, None);
        assert_eq!(request.note, None);
        assert_eq!(request.items.len(), 1);
    }
}
