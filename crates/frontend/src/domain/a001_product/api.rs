use crate::shared::api_utils::{get_json, resource_path, Auth};
use contracts::domain::a001_product::Product;
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::{EntityResponse, ListResponse};
use serde::Serialize;

/// Параметры выборки каталога; фильтрация и сортировка — на клиенте
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    pub limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            limit: 500,
            category: None,
        }
    }
}

pub fn products_path(query: &ProductQuery) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to build query: {}", e))?;
    Ok(format!("{}?{}", Product::collection_path(), qs))
}

pub async fn fetch_products(query: ProductQuery) -> Result<Vec<Product>, String> {
    let path = products_path(&query)?;
    get_json::<ListResponse<Product>>(&path, Auth::Public)
        .await
        .map(ListResponse::into_data)
}

pub async fn fetch_product(id: &str) -> Result<Product, String> {
    get_json::<EntityResponse<Product>>(&resource_path(&Product::collection_path(), id), Auth::Public)
        .await
        .map(EntityResponse::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products_path() {
        assert_eq!(
            products_path(&ProductQuery::default()).unwrap(),
            "/api/products?limit=500"
        );
        let q = ProductQuery {
            limit: 20,
            category: Some("food".into()),
        };
        assert_eq!(products_path(&q).unwrap(), "/api/products?limit=20&category=food");
    }
}
