use super::criteria::{FilterDef, FilterRule, FilterState, ListDescriptor, ALL};
use super::field::ListRecord;
use chrono::{DateTime, Utc};

/// Возвращает записи, удовлетворяющие всем активным критериям.
///
/// Исходный срез не меняется; порядок записей сохраняется.
/// `now` передается явно: производные статусы зависят от времени.
pub fn filter_records<'a, R: ListRecord>(
    records: &'a [R],
    descriptor: &ListDescriptor<R>,
    state: &FilterState,
    now: DateTime<Utc>,
) -> Vec<&'a R> {
    let term = state.search_term().map(str::to_lowercase);

    records
        .iter()
        .filter(|record| {
            term.as_deref()
                .map_or(true, |t| matches_search(*record, descriptor.search_fields, t))
        })
        .filter(|record| {
            descriptor
                .filters
                .iter()
                .all(|def| matches_filter(*record, def, state, now))
        })
        .collect()
}

/// Поиск: подстрока без учета регистра хотя бы в одном из полей
fn matches_search<R: ListRecord>(record: &R, fields: &[&str], term_lower: &str) -> bool {
    fields.iter().any(|name| {
        record
            .field(name)
            .map(|v| v.as_key().to_lowercase().contains(term_lower))
            .unwrap_or(false)
    })
}

fn matches_filter<R: ListRecord>(
    record: &R,
    def: &FilterDef<R>,
    state: &FilterState,
    now: DateTime<Utc>,
) -> bool {
    match &def.rule {
        FilterRule::Equals(field) => {
            let selected = state.selection(def.key);
            if is_noop(selected) {
                return true;
            }
            record
                .field(field)
                .map(|v| v.as_key() == selected)
                .unwrap_or(false)
        }
        FilterRule::Derived(matches) => {
            let selected = state.selection(def.key);
            if is_noop(selected) {
                return true;
            }
            matches(record, selected, now)
        }
        FilterRule::DateRange(field) => match state.active_range(def.key) {
            None => true,
            Some(bounds) => record
                .field(field)
                .and_then(|v| v.as_date())
                .map(|d| bounds.contains_date(d))
                .unwrap_or(false),
        },
        FilterRule::NumberRange(field) => match state.active_range(def.key) {
            None => true,
            Some(bounds) => record
                .field(field)
                .and_then(|v| v.as_number())
                .map(|n| bounds.contains_number(n))
                .unwrap_or(false),
        },
    }
}

fn is_noop(selected: &str) -> bool {
    selected.is_empty() || selected == ALL
}
