use super::aggregate::Coupon;
use crate::shared::list_view::{
    FieldValue, FilterDef, FilterRule, ListDescriptor, ListRecord, SortKey, SortSpec,
};
use chrono::{DateTime, Utc};

impl ListRecord for Coupon {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "code" => Some(self.code.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "discount_type" => Some(self.discount_type.code().into()),
            "discount_value" => Some(self.discount_value.into()),
            "min_order_value" => Some(self.min_order_value.into()),
            "usage_limit" => self.usage_limit.map(FieldValue::from),
            "used_count" => Some(self.used_count.into()),
            "is_active" => Some(self.is_active.into()),
            "start_date" => self.start_date.map(FieldValue::from),
            "end_date" => self.end_date.map(FieldValue::from),
            "created_at" => self.created_at.map(FieldValue::from),
            _ => None,
        }
    }
}

fn matches_status(coupon: &Coupon, selected: &str, now: DateTime<Utc>) -> bool {
    coupon.matches_status(selected, now)
}

pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("active", "Active"),
    ("expired", "Expired"),
    ("used", "Used up"),
    ("enabled", "Enabled"),
    ("disabled", "Disabled"),
];

pub const DISCOUNT_TYPE_OPTIONS: &[(&str, &str)] =
    &[("percentage", "Percentage"), ("fixed", "Fixed amount")];

pub const COUPON_SORT_KEYS: &[SortKey] = &[
    SortKey { key: "created_at", label: "Created" },
    SortKey { key: "end_date", label: "Expires" },
    SortKey { key: "discount_value", label: "Value" },
    SortKey { key: "code", label: "Code" },
    SortKey { key: "used_count", label: "Used" },
];

/// Список купонов админки. По умолчанию — новые сверху.
pub fn coupon_list_descriptor() -> ListDescriptor<Coupon> {
    ListDescriptor {
        search_fields: &["code", "description"],
        filters: vec![
            FilterDef {
                key: "status",
                label: "Status",
                rule: FilterRule::Derived(matches_status),
                options: STATUS_OPTIONS,
            },
            FilterDef {
                key: "discount_type",
                label: "Type",
                rule: FilterRule::Equals("discount_type"),
                options: DISCOUNT_TYPE_OPTIONS,
            },
            FilterDef {
                key: "created",
                label: "Created",
                rule: FilterRule::DateRange("created_at"),
                options: &[],
            },
        ],
        sort_keys: COUPON_SORT_KEYS,
        default_sort: SortSpec::desc("created_at"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_coupon::CouponStats;
    use crate::shared::list_view::{ListEngine, RecordStore};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 25, 9, 0, 0).unwrap()
    }

    fn coupon(i: i64, ends_in_days: i64) -> Coupon {
        Coupon {
            id: format!("c{i}"),
            code: format!("CODE{i:02}"),
            discount_value: 5.0 + i as f64,
            end_date: Some(now() + Duration::days(ends_in_days)),
            created_at: Some(now() - Duration::days(100 - i)),
            ..Coupon::default()
        }
    }

    #[test]
    fn test_expired_filter_with_default_sort() {
        // 12 купонов, 5 из них истекли (c2, c4, c6, c8, c10)
        let records: Vec<Coupon> = (1..=12)
            .map(|i| coupon(i, if i % 2 == 0 && i <= 10 { -i } else { 30 }))
            .collect();

        let engine = ListEngine::new(coupon_list_descriptor());
        let mut state = engine.initial_state(10);
        state.set_selection("status", "expired");

        let page = engine.run(&records, &state, now());
        let ids: Vec<&str> = page.items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(page.total_count, 5);
        assert_eq!(ids, vec!["c10", "c8", "c6", "c4", "c2"]);
        assert!(page.items.iter().all(|c| c.end_date < Some(now())));
    }

    #[test]
    fn test_toggle_keeps_counts_in_sync() {
        let records: Vec<Coupon> = (1..=10)
            .map(|i| Coupon {
                is_active: i <= 4,
                ..coupon(i, 30)
            })
            .collect();
        let store = RecordStore::new(records);
        assert_eq!(CouponStats::from_records(store.records(), now()).enabled, 4);

        // сервер подтвердил переключение c7
        let confirmed = Coupon {
            is_active: true,
            ..store.get("c7").cloned().unwrap()
        };
        let store = store.with_replaced(confirmed);

        assert_eq!(store.get("c7").map(|c| c.is_active), Some(true));
        let stats = CouponStats::from_records(store.records(), now());
        assert_eq!(stats.enabled, store.count_where(|c| c.is_active));
        assert_eq!(stats.enabled, 5);
        assert_eq!(stats.total, 10);
    }

    #[test]
    fn test_search_by_code_case_insensitive() {
        let records: Vec<Coupon> = (1..=12).map(|i| coupon(i, 30)).collect();
        let engine = ListEngine::new(coupon_list_descriptor());
        let mut state = engine.initial_state(10);
        state.set_search("code1");
        assert_eq!(engine.count(&records, &state.filters, now()), 3);
    }
}
