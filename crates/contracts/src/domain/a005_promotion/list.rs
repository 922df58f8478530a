use super::aggregate::Promotion;
use crate::shared::list_view::{
    FieldValue, FilterDef, FilterRule, ListDescriptor, ListRecord, SortKey, SortSpec,
};
use chrono::{DateTime, Utc};

impl ListRecord for Promotion {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "title" => Some(self.title.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "discount_percent" => Some(self.discount_percent.into()),
            "start_date" => self.start_date.map(FieldValue::from),
            "end_date" => self.end_date.map(FieldValue::from),
            _ => None,
        }
    }
}

fn matches_phase(promotion: &Promotion, selected: &str, now: DateTime<Utc>) -> bool {
    promotion.phase(now).code() == selected
}

pub const PHASE_OPTIONS: &[(&str, &str)] = &[
    ("running", "On now"),
    ("upcoming", "Coming soon"),
    ("ended", "Ended"),
];

const PROMOTION_SORT_KEYS: &[SortKey] = &[
    SortKey { key: "end_date", label: "Ends" },
    SortKey { key: "start_date", label: "Starts" },
    SortKey { key: "discount_percent", label: "Discount" },
    SortKey { key: "title", label: "Title" },
];

/// Витрина акций: сначала те, что заканчиваются раньше
pub fn promotion_list_descriptor() -> ListDescriptor<Promotion> {
    ListDescriptor {
        search_fields: &["title", "description"],
        filters: vec![FilterDef {
            key: "phase",
            label: "Show",
            rule: FilterRule::Derived(matches_phase),
            options: PHASE_OPTIONS,
        }],
        sort_keys: PROMOTION_SORT_KEYS,
        default_sort: SortSpec::asc("end_date"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ListEngine;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_phase_filter_and_open_ended_last() {
        let now = Utc.with_ymd_and_hms(2025, 1, 28, 0, 0, 0).unwrap();
        let p = |id: &str, end: Option<i64>| Promotion {
            id: id.into(),
            title: id.into(),
            is_active: true,
            start_date: Some(now - Duration::days(2)),
            end_date: end.map(|d| now + Duration::days(d)),
            ..Promotion::default()
        };
        let data = vec![p("open", None), p("late", Some(9)), p("soon", Some(1)), p("gone", Some(-1))];

        let engine = ListEngine::new(promotion_list_descriptor());
        let mut state = engine.initial_state(10);
        state.set_selection("phase", "running");
        let ids: Vec<String> = engine.run(&data, &state, now).items.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["soon", "late", "open"]);
    }
}
