use super::sort::SortSpec;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Значение фильтра «все» — критерий не участвует в конъюнкции
pub const ALL: &str = "all";

/// Правило фильтрации для одного критерия
pub enum FilterRule<R> {
    /// Значение поля совпадает с выбранным значением
    Equals(&'static str),
    /// Статус вычисляется из полей записи и текущего времени
    Derived(fn(&R, &str, DateTime<Utc>) -> bool),
    /// Дата поля попадает в диапазон (границы включительно)
    DateRange(&'static str),
    /// Число поля попадает в диапазон (границы включительно)
    NumberRange(&'static str),
}

impl<R> Clone for FilterRule<R> {
    fn clone(&self) -> Self {
        match self {
            FilterRule::Equals(f) => FilterRule::Equals(*f),
            FilterRule::Derived(f) => FilterRule::Derived(*f),
            FilterRule::DateRange(f) => FilterRule::DateRange(*f),
            FilterRule::NumberRange(f) => FilterRule::NumberRange(*f),
        }
    }
}

/// Описание одного фильтра списка
pub struct FilterDef<R> {
    /// Ключ критерия в `FilterState`
    pub key: &'static str,
    pub label: &'static str,
    pub rule: FilterRule<R>,
    /// Варианты для select: (значение, подпись). Пусто для диапазонов.
    pub options: &'static [(&'static str, &'static str)],
}

impl<R> Clone for FilterDef<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            rule: self.rule.clone(),
            options: self.options,
        }
    }
}

/// Колонка, по которой разрешена сортировка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    /// Имя поля записи
    pub key: &'static str,
    pub label: &'static str,
}

/// Декларативное описание списка для конкретной сущности
pub struct ListDescriptor<R> {
    /// Поля, по которым идет текстовый поиск
    pub search_fields: &'static [&'static str],
    pub filters: Vec<FilterDef<R>>,
    pub sort_keys: &'static [SortKey],
    pub default_sort: SortSpec,
}

impl<R> Clone for ListDescriptor<R> {
    fn clone(&self) -> Self {
        Self {
            search_fields: self.search_fields,
            filters: self.filters.clone(),
            sort_keys: self.sort_keys,
            default_sort: self.default_sort.clone(),
        }
    }
}

impl<R> ListDescriptor<R> {
    pub fn filter(&self, key: &str) -> Option<&FilterDef<R>> {
        self.filters.iter().find(|f| f.key == key)
    }

    pub fn is_sortable(&self, key: &str) -> bool {
        self.sort_keys.iter().any(|k| k.key == key)
    }
}

/// Границы диапазона
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Bounds {
    Date {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    Number {
        min: Option<f64>,
        max: Option<f64>,
    },
}

impl Bounds {
    /// Диапазон без границ ничего не фильтрует
    pub fn is_unbounded(&self) -> bool {
        match self {
            Bounds::Date { from, to } => from.is_none() && to.is_none(),
            Bounds::Number { min, max } => min.is_none() && max.is_none(),
        }
    }

    pub fn contains_date(&self, value: DateTime<Utc>) -> bool {
        let day = value.date_naive();
        match self {
            Bounds::Date { from, to } => {
                from.map_or(true, |f| day >= f) && to.map_or(true, |t| day <= t)
            }
            Bounds::Number { .. } => false,
        }
    }

    pub fn contains_number(&self, value: f64) -> bool {
        match self {
            Bounds::Number { min, max } => {
                min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
            }
            Bounds::Date { .. } => false,
        }
    }
}

/// Состояние фильтров и сортировки списка
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Строка поиска; пустая строка не фильтрует
    pub search: String,
    /// Выбранные значения select-фильтров; `ALL` или отсутствие ключа — без фильтра
    pub selections: BTreeMap<String, String>,
    pub ranges: BTreeMap<String, Bounds>,
    pub sort: SortSpec,
}

impl FilterState {
    pub fn with_sort(sort: SortSpec) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// Выбранное значение фильтра или `ALL`
    pub fn selection(&self, key: &str) -> &str {
        self.selections.get(key).map(String::as_str).unwrap_or(ALL)
    }

    /// Активная строка поиска (после trim), если есть
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }

    pub fn active_range(&self, key: &str) -> Option<&Bounds> {
        self.ranges.get(key).filter(|b| !b.is_unbounded())
    }

    /// Количество активных критериев (для бейджа панели фильтров)
    pub fn active_count(&self) -> usize {
        let search = usize::from(self.search_term().is_some());
        let selections = self
            .selections
            .values()
            .filter(|v| !v.is_empty() && v.as_str() != ALL)
            .count();
        let ranges = self.ranges.values().filter(|b| !b.is_unbounded()).count();
        search + selections + ranges
    }

    /// Сбрасывает критерии, сортировку оставляет
    pub fn clear(&mut self) {
        self.search.clear();
        self.selections.clear();
        self.ranges.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_selection_is_not_counted() {
        let mut state = FilterState::default();
        state.selections.insert("status".into(), ALL.into());
        state.search = "   ".into();
        state.ranges.insert(
            "created_at".into(),
            Bounds::Date {
                from: None,
                to: None,
            },
        );
        assert_eq!(state.active_count(), 0);

        state.selections.insert("type".into(), "fixed".into());
        state.search = "sale".into();
        assert_eq!(state.active_count(), 2);
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        use chrono::TimeZone;
        let bounds = Bounds::Date {
            from: NaiveDate::from_ymd_opt(2025, 1, 1),
            to: NaiveDate::from_ymd_opt(2025, 1, 31),
        };
        assert!(bounds.contains_date(Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 0).unwrap()));
        assert!(bounds.contains_date(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()));
        assert!(!bounds.contains_date(Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_number_bounds() {
        let bounds = Bounds::Number {
            min: Some(100.0),
            max: None,
        };
        assert!(bounds.contains_number(100.0));
        assert!(!bounds.contains_number(99.9));
        assert!(!bounds.contains_date(chrono::Utc::now()));
    }
}
