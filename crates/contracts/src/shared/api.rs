//! Конверты ответов REST API

use serde::{Deserialize, Serialize};

/// Ответ списка: `{ data: [...], stats: {...} }`.
///
/// Некоторые ресурсы отдают массив в `items` или голый массив — оба варианта принимаются.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T, S = serde_json::Value> {
    Envelope {
        #[serde(alias = "items")]
        data: Vec<T>,
        #[serde(default)]
        stats: Option<S>,
    },
    Bare(Vec<T>),
}

impl<T, S> ListResponse<T, S> {
    pub fn into_parts(self) -> (Vec<T>, Option<S>) {
        match self {
            ListResponse::Envelope { data, stats } => (data, stats),
            ListResponse::Bare(data) => (data, None),
        }
    }

    pub fn into_data(self) -> Vec<T> {
        self.into_parts().0
    }
}

/// Ответ по одной сущности: `{ data: {...} }` или сама сущность
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityResponse<T> {
    Envelope { data: T },
    Bare(T),
}

impl<T> EntityResponse<T> {
    pub fn into_inner(self) -> T {
        match self {
            EntityResponse::Envelope { data } => data,
            EntityResponse::Bare(data) => data,
        }
    }
}

/// Тело ошибки сервера
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(alias = "error")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: u32,
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Stats {
        total: u32,
    }

    #[test]
    fn test_list_envelope_with_stats() {
        let resp: ListResponse<Item, Stats> =
            serde_json::from_value(json!({ "data": [{ "id": 1 }], "stats": { "total": 7 } }))
                .unwrap();
        let (data, stats) = resp.into_parts();
        assert_eq!(data, vec![Item { id: 1 }]);
        assert_eq!(stats, Some(Stats { total: 7 }));
    }

    #[test]
    fn test_list_bare_array_and_items_alias() {
        let bare: ListResponse<Item> = serde_json::from_value(json!([{ "id": 2 }])).unwrap();
        assert_eq!(bare.into_data(), vec![Item { id: 2 }]);

        let items: ListResponse<Item> =
            serde_json::from_value(json!({ "items": [{ "id": 3 }] })).unwrap();
        assert_eq!(items.into_data(), vec![Item { id: 3 }]);
    }

    #[test]
    fn test_entity_envelope_or_bare() {
        let wrapped: EntityResponse<Item> =
            serde_json::from_value(json!({ "data": { "id": 4 } })).unwrap();
        assert_eq!(wrapped.into_inner(), Item { id: 4 });

        let bare: EntityResponse<Item> = serde_json::from_value(json!({ "id": 5 })).unwrap();
        assert_eq!(bare.into_inner(), Item { id: 5 });
    }

    #[test]
    fn test_error_body_accepts_error_key() {
        let body: ApiErrorBody = serde_json::from_value(json!({ "error": "boom" })).unwrap();
        assert_eq!(body.message, "boom");
    }
}
