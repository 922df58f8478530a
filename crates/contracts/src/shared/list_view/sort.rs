use super::criteria::ListDescriptor;
use super::field::{compare_values, ListRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Единая точка смены знака компаратора
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// Ключ и направление сортировки
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: &str, direction: SortDirection) -> Self {
        Self {
            key: key.to_string(),
            direction,
        }
    }

    pub fn desc(key: &str) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    pub fn asc(key: &str) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    /// Клик по заголовку: та же колонка меняет направление, новая — по возрастанию
    pub fn toggle(&mut self, key: &str) {
        if self.key == key {
            self.direction = self.direction.toggled();
        } else {
            self.key = key.to_string();
            self.direction = SortDirection::Asc;
        }
    }
}

/// Стабильная сортировка по ключу из описания списка.
///
/// Неизвестный ключ оставляет порядок как есть.
pub fn sort_records<R: ListRecord>(
    records: &mut [&R],
    descriptor: &ListDescriptor<R>,
    spec: &SortSpec,
) {
    if !descriptor.is_sortable(&spec.key) {
        return;
    }
    let key = spec.key.as_str();
    records.sort_by(|a, b| {
        let ordering = compare_values(a.field(key).as_ref(), b.field(key).as_ref());
        spec.direction.apply(ordering)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_flip_is_uniform() {
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn test_toggle_same_key_flips_direction() {
        let mut spec = SortSpec::desc("created_at");
        spec.toggle("created_at");
        assert_eq!(spec.direction, SortDirection::Asc);
        spec.toggle("code");
        assert_eq!(spec, SortSpec::asc("code"));
    }
}
