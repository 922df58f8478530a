//! Элементы управления списком, собранные по дескриптору сущности

use super::filter_panel::{DateRangeFilter, FilterPanel, FilterSelect, FilterTag};
use super::pagination_controls::PaginationControls;
use crate::shared::list_page::ListController;
use crate::shared::list_utils::SearchInput;
use contracts::shared::list_view::{Bounds, FilterRule, ListRecord};
use leptos::prelude::*;
use std::sync::Arc;

fn date_side(list_bounds: Option<Bounds>, from: bool) -> String {
    match list_bounds {
        Some(Bounds::Date { from: f, to: t }) => {
            let side = if from { f } else { t };
            side.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        }
        _ => String::new(),
    }
}

fn number_side(list_bounds: Option<Bounds>, min: bool) -> String {
    match list_bounds {
        Some(Bounds::Number { min: lo, max: hi }) => {
            let side = if min { lo } else { hi };
            side.map(|v| v.to_string()).unwrap_or_default()
        }
        _ => String::new(),
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Поля фильтров: select для равенства и статусов, даты и суммы для диапазонов
pub fn list_filter_fields<R>(list: ListController<R>) -> impl IntoView
where
    R: ListRecord + Clone + Send + Sync + 'static,
{
    let descriptor = list.descriptor();
    let state = list.state;

    descriptor
        .filters
        .into_iter()
        .map(|def| {
            let key = def.key;
            match def.rule {
                FilterRule::Equals(_) | FilterRule::Derived(_) => view! {
                    <FilterSelect
                        label=def.label
                        options=def.options
                        value=list.selection(key)
                        on_change=Callback::new(move |v: String| list.set_selection(key, v))
                    />
                }
                .into_any(),
                FilterRule::DateRange(_) => {
                    let range = move || state.with(|s| s.list.filters.ranges.get(key).cloned());
                    view! {
                        <DateRangeFilter
                            label=def.label
                            from=Signal::derive(move || date_side(range(), true))
                            to=Signal::derive(move || date_side(range(), false))
                            on_change=Callback::new(move |(from, to): (String, String)| {
                                list.set_date_range(key, &from, &to)
                            })
                        />
                    }
                    .into_any()
                }
                FilterRule::NumberRange(_) => {
                    let range = move || state.with(|s| s.list.filters.ranges.get(key).cloned());
                    view! {
                        <div class="filter-field filter-field--range">
                            <span class="filter-field__label">{def.label}</span>
                            <input
                                type="number"
                                class="filter-field__number"
                                placeholder="Min"
                                prop:value=move || number_side(range(), true)
                                on:change=move |ev| {
                                    let max = parse_amount(&number_side(range(), false));
                                    list.set_number_range(key, parse_amount(&event_target_value(&ev)), max)
                                }
                            />
                            <span class="filter-field__sep">"–"</span>
                            <input
                                type="number"
                                class="filter-field__number"
                                placeholder="Max"
                                prop:value=move || number_side(range(), false)
                                on:change=move |ev| {
                                    let min = parse_amount(&number_side(range(), true));
                                    list.set_number_range(key, min, parse_amount(&event_target_value(&ev)))
                                }
                            />
                        </div>
                    }
                    .into_any()
                }
            }
        })
        .collect_view()
}

/// Чипы активных критериев с кнопкой сброса
pub fn list_filter_tags<R>(list: ListController<R>) -> impl IntoView
where
    R: ListRecord + Clone + Send + Sync + 'static,
{
    move || {
        let labels = list.active_filter_labels();
        let has_any = !labels.is_empty();
        view! {
            {labels.into_iter().map(|(key, label)| view! {
                <FilterTag label=label on_remove=Callback::new(move |_| list.clear_criterion(&key)) />
            }).collect_view()}
            {has_any.then(|| view! {
                <button class="filter-tags__clear" on:click=move |_| list.clear_filters()>
                    "Clear all"
                </button>
            })}
        }
    }
}

/// Пагинация, подключенная к состоянию списка
pub fn list_pagination<R>(list: ListController<R>) -> impl IntoView
where
    R: ListRecord + Clone + Send + Sync + 'static,
{
    let page = Memo::new(move |_| {
        let p = list.page();
        (p.page, p.total_pages, p.total_count, p.page_size)
    });

    view! {
        <PaginationControls
            current_page=Signal::derive(move || page.get().0)
            total_pages=Signal::derive(move || page.get().1)
            total_count=Signal::derive(move || page.get().2)
            page_size=Signal::derive(move || page.get().3)
            on_page_change=Callback::new(move |p: usize| list.go_to_page(p))
            on_page_size_change=Callback::new(move |s: usize| list.set_page_size(s))
        />
    }
}

/// Выбор сортировки для списков без заголовков колонок (сетка карточек)
pub fn list_sort_select<R>(list: ListController<R>) -> impl IntoView
where
    R: ListRecord + Clone + Send + Sync + 'static,
{
    let sort_keys = list.descriptor().sort_keys;
    let sort = list.sort_signal();

    view! {
        <div class="sort-select">
            <select
                class="sort-select__field"
                prop:value=move || sort.with(|s| s.key.clone())
                on:change=move |ev| list.toggle_sort(&event_target_value(&ev))
            >
                {sort_keys.iter().map(|k| {
                    let key = k.key;
                    view! {
                        <option value=key selected=move || sort.with(|s| s.key == key)>{k.label}</option>
                    }
                }).collect_view()}
            </select>
            <button
                class="sort-select__direction"
                title="Toggle direction"
                on:click=move |_| {
                    let key = sort.with_untracked(|s| s.key.clone());
                    list.toggle_sort(&key);
                }
            >
                {move || sort.with(|s| if s.direction.is_ascending() { "▲" } else { "▼" })}
            </button>
        </div>
    }
}

/// Поиск + панель фильтров + пагинация одного списка
pub fn list_toolbar<R>(list: ListController<R>, search_placeholder: &'static str) -> impl IntoView
where
    R: ListRecord + Clone + Send + Sync + 'static,
{
    let is_expanded = RwSignal::new(false);
    let search = Signal::derive(move || list.state.with(|s| s.list.filters.search.clone()));
    let pagination: ChildrenFn = Arc::new(move || list_pagination(list).into_any());
    let fields: ChildrenFn = Arc::new(move || list_filter_fields(list).into_any());
    let tags: ChildrenFn = Arc::new(move || list_filter_tags(list).into_any());

    view! {
        <div class="list-toolbar">
            <SearchInput
                value=search
                on_change=Callback::new(move |term: String| list.set_search(term))
                placeholder=search_placeholder
            />
            <FilterPanel
                is_expanded=is_expanded
                active_filters_count=Signal::derive(move || list.active_filter_count())
                pagination_controls=pagination
                filter_content=fields
                filter_tags=tags
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_range_sides() {
        let bounds = Bounds::Date {
            from: NaiveDate::from_ymd_opt(2025, 1, 2),
            to: None,
        };
        assert_eq!(date_side(Some(bounds.clone()), true), "2025-01-02");
        assert_eq!(date_side(Some(bounds), false), "");
        assert_eq!(number_side(Some(Bounds::Number { min: None, max: Some(50.0) }), false), "50");
        assert_eq!(parse_amount(" 12.5 "), Some(12.5));
        assert_eq!(parse_amount("abc"), None);
    }
}
