//! Движок клиентских списков: поиск, фильтры, сортировка, пагинация.
//!
//! Один движок на все списки админки. Сущность подключается реализацией
//! [`ListRecord`] и декларативным [`ListDescriptor`]:
//!
//! ```rust,ignore
//! let engine = ListEngine::new(coupon_list_descriptor());
//! let mut state = engine.initial_state(10);
//! state.set_selection("status", "expired");
//! let page = engine.run(store.records(), &state, Utc::now());
//! ```

pub mod criteria;
pub mod engine;
pub mod field;
pub mod filter;
pub mod pager;
pub mod sort;
pub mod store;

pub use criteria::{Bounds, FilterDef, FilterRule, FilterState, ListDescriptor, SortKey, ALL};
pub use engine::{ListEngine, ListState};
pub use field::{compare_text, compare_values, FieldValue, ListRecord};
pub use filter::filter_records;
pub use pager::{page_window, paginate, total_pages, Page, PageItem, PageState, DEFAULT_PAGE_SIZE};
pub use sort::{sort_records, SortDirection, SortSpec};
pub use store::RecordStore;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: String,
        kind: String,
        amount: f64,
        created_at: Option<DateTime<Utc>>,
    }

    impl ListRecord for Row {
        fn record_id(&self) -> String {
            self.id.to_string()
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "id" => Some(FieldValue::from(self.id as i64)),
                "name" => Some(self.name.as_str().into()),
                "kind" => Some(self.kind.as_str().into()),
                "amount" => Some(self.amount.into()),
                "created_at" => self.created_at.map(FieldValue::from),
                _ => None,
            }
        }
    }

    fn big_amount(row: &Row, selected: &str, _now: DateTime<Utc>) -> bool {
        match selected {
            "big" => row.amount >= 100.0,
            "small" => row.amount < 100.0,
            _ => false,
        }
    }

    const KINDS: &[(&str, &str)] = &[("a", "A"), ("b", "B"), ("c", "C")];
    const SIZES: &[(&str, &str)] = &[("big", "Big"), ("small", "Small")];
    const SORT_KEYS: &[SortKey] = &[
        SortKey { key: "name", label: "Name" },
        SortKey { key: "amount", label: "Amount" },
        SortKey { key: "created_at", label: "Created" },
    ];

    fn descriptor() -> ListDescriptor<Row> {
        ListDescriptor {
            search_fields: &["name", "id"],
            filters: vec![
                FilterDef {
                    key: "kind",
                    label: "Kind",
                    rule: FilterRule::Equals("kind"),
                    options: KINDS,
                },
                FilterDef {
                    key: "size",
                    label: "Size",
                    rule: FilterRule::Derived(big_amount),
                    options: SIZES,
                },
                FilterDef {
                    key: "created",
                    label: "Created",
                    rule: FilterRule::DateRange("created_at"),
                    options: &[],
                },
            ],
            sort_keys: SORT_KEYS,
            default_sort: SortSpec::desc("created_at"),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn rows(n: u32) -> Vec<Row> {
        (1..=n)
            .map(|i| Row {
                id: i,
                name: format!("Item {:03}", i),
                kind: ["a", "b", "c"][(i % 3) as usize].to_string(),
                amount: (i * 17 % 250) as f64,
                created_at: Some(now() - Duration::days(i as i64)),
            })
            .collect()
    }

    #[test]
    fn test_noop_criteria_return_whole_store() {
        let data = rows(40);
        let engine = ListEngine::new(descriptor());
        let mut state = FilterState::default();
        state.selections.insert("kind".into(), ALL.into());
        state.selections.insert("size".into(), ALL.into());

        let out = engine.filter(&data, &state, now());
        assert_eq!(out.len(), data.len());
        assert!(out.iter().zip(data.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_empty_search_matches_all() {
        let data = rows(100);
        let engine = ListEngine::new(descriptor());
        let state = FilterState::default();
        assert_eq!(engine.filter(&data, &state, now()).len(), 100);
    }

    #[test]
    fn test_equality_filter_is_sound_and_complete() {
        let data = rows(30);
        let engine = ListEngine::new(descriptor());
        for kind in ["a", "b", "c"] {
            let mut state = FilterState::default();
            state.selections.insert("kind".into(), kind.into());
            let out = engine.filter(&data, &state, now());

            assert!(out.iter().all(|r| r.kind == kind));
            let expected = data.iter().filter(|r| r.kind == kind).count();
            assert_eq!(out.len(), expected);
        }
    }

    #[test]
    fn test_search_is_case_insensitive_over_any_field() {
        let data = rows(30);
        let engine = ListEngine::new(descriptor());
        let mut state = FilterState::default();
        state.search = "ITEM 01".into();
        let names: Vec<u32> = engine.filter(&data, &state, now()).iter().map(|r| r.id).collect();
        assert_eq!(names, (10..=19).collect::<Vec<_>>());

        state.search = "27".into();
        let ids: Vec<u32> = engine.filter(&data, &state, now()).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![27]);
    }

    #[test]
    fn test_missing_field_does_not_match_range() {
        let mut data = rows(5);
        data[0].created_at = None;
        let engine = ListEngine::new(descriptor());
        let mut state = FilterState::default();
        state.ranges.insert(
            "created".into(),
            Bounds::Date {
                from: Some(now().date_naive() - Duration::days(30)),
                to: None,
            },
        );
        let out = engine.filter(&data, &state, now());
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|r| r.created_at.is_some()));
    }

    #[test]
    fn test_desc_then_asc_is_reversed() {
        let data = rows(20);
        let engine = ListEngine::new(descriptor());
        let filtered = engine.filter(&data, &FilterState::default(), now());

        let desc = engine.sort(filtered.clone(), &SortSpec::desc("name"));
        let mut asc = engine.sort(filtered, &SortSpec::asc("name"));
        asc.reverse();
        assert_eq!(desc, asc);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let mut data = rows(6);
        for r in data.iter_mut() {
            r.amount = 5.0;
        }
        let engine = ListEngine::new(descriptor());
        let sorted = engine.sort(data.iter().collect(), &SortSpec::desc("amount"));
        let ids: Vec<u32> = sorted.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_unknown_sort_key_keeps_order() {
        let data = rows(8);
        let engine = ListEngine::new(descriptor());
        let sorted = engine.sort(data.iter().collect(), &SortSpec::asc("no_such_field"));
        let ids: Vec<u32> = sorted.iter().map(|r| r.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_run_is_idempotent_and_leaves_store_untouched() {
        let store = RecordStore::new(rows(25));
        let snapshot = store.clone();
        let engine = ListEngine::new(descriptor());
        let mut state = engine.initial_state(10);
        state.set_selection("size", "small");

        let first = engine.run(store.records(), &state, now());
        let second = engine.run(store.records(), &state, now());
        assert_eq!(first, second);
        assert_eq!(store, snapshot);
    }

    #[test]
    fn test_run_clamps_out_of_range_page() {
        let data = rows(25);
        let engine = ListEngine::new(descriptor());
        let mut state = engine.initial_state(10);
        assert!(state.go_to_page(3, 3));

        let page = engine.run(&data, &state, now());
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 5);

        // фильтр сужает набор до одной страницы
        state.filters.selections.insert("kind".into(), "a".into());
        let page = engine.run(&data, &state, now());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let engine = ListEngine::new(descriptor());
        let mut state = engine.initial_state(10);
        state.go_to_page(2, 3);
        state.set_search("item");
        assert_eq!(state.paging.current_page, 1);

        state.go_to_page(2, 3);
        state.toggle_sort("name");
        assert_eq!(state.paging.current_page, 1);
    }

    #[test]
    fn test_sync_page_after_store_shrinks() {
        let engine = ListEngine::new(descriptor());
        let mut state = engine.initial_state(10);
        state.go_to_page(3, 3);
        state.sync_page(11);
        assert_eq!(state.paging.current_page, 2);
        state.sync_page(0);
        assert_eq!(state.paging.current_page, 1);
    }

    #[test]
    fn test_store_replace_is_immutable() {
        let store = RecordStore::new(rows(3));
        let updated = store
            .patched("2", |r| Row {
                name: "Renamed".into(),
                ..r.clone()
            })
            .expect("record 2 exists");

        assert_eq!(store.get("2").map(|r| r.name.as_str()), Some("Item 002"));
        assert_eq!(updated.get("2").map(|r| r.name.as_str()), Some("Renamed"));
        assert_eq!(updated.len(), 3);
        assert!(store.patched("99", |r| r.clone()).is_none());
        assert_eq!(store.without("1").len(), 2);
    }
}
