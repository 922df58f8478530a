use crate::shared::components::table::{format_money, format_percent};
use crate::shared::list_page::ListController;
use contracts::domain::a002_coupon::{coupon_list_descriptor, Coupon, DiscountType};
use contracts::shared::list_view::ListEngine;

pub fn create_list() -> ListController<Coupon> {
    ListController::new(ListEngine::new(coupon_list_descriptor()))
}

/// «10%, up to 50,000₫» / «30,000₫»
pub fn value_label(coupon: &Coupon) -> String {
    let base = match coupon.discount_type {
        DiscountType::Percentage => format_percent(coupon.discount_value),
        DiscountType::Fixed => format_money(coupon.discount_value),
    };
    match coupon.max_discount {
        Some(cap) if coupon.discount_type == DiscountType::Percentage => {
            format!("{}, up to {}", base, format_money(cap))
        }
        _ => base,
    }
}

/// Использовано / осталось
pub fn usage_label(coupon: &Coupon) -> String {
    match coupon.usage_limit {
        Some(left) => format!("{} used, {} left", coupon.used_count, left.max(0)),
        None => format!("{} used", coupon.used_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_page::ListPage;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use contracts::domain::a002_coupon::CouponStats;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 25, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_labels() {
        let c = Coupon {
            discount_value: 10.0,
            max_discount: Some(50_000.0),
            usage_limit: Some(3),
            used_count: 2,
            ..Coupon::default()
        };
        assert!(value_label(&c).starts_with("10%, up to 50,000"));
        assert_eq!(usage_label(&c), "2 used, 3 left");

        let fixed = Coupon {
            discount_type: DiscountType::Fixed,
            discount_value: 30_000.0,
            max_discount: Some(1.0),
            ..Coupon::default()
        };
        assert!(!value_label(&fixed).contains("up to"));
        assert_eq!(usage_label(&fixed), "0 used");
    }

    #[test]
    fn test_toggle_keeps_counts_consistent() {
        let engine = ListEngine::new(coupon_list_descriptor());
        let mut page = ListPage::new(&engine, 10);
        let coupons: Vec<Coupon> = (0..10)
            .map(|i| Coupon {
                id: format!("c{}", i),
                code: format!("CODE{}", i),
                discount_value: 5.0,
                is_active: i < 4,
                end_date: Some(now() + Duration::days(30)),
                ..Coupon::default()
            })
            .collect();
        page.apply_load(Ok(coupons), &engine, now());
        assert_eq!(CouponStats::from_records(page.store.records(), now()).enabled, 4);

        // ответ сервера на переключение c7
        let toggled = Coupon {
            is_active: true,
            ..page.store.get("c7").cloned().unwrap()
        };
        page.replace(toggled, &engine, now());

        let stats = CouponStats::from_records(page.store.records(), now());
        assert!(page.store.get("c7").unwrap().is_active);
        assert_eq!(stats.enabled, 5);
        assert_eq!(
            stats.enabled,
            page.store.records().iter().filter(|c| c.is_active).count()
        );
    }
}
