//! REST-вызовы купонов: админка и проверка кода при оформлении заказа

use crate::shared::api_utils::{get_json, resource_path, send_empty, send_json, Auth, HttpMethod};
use chrono::{DateTime, Utc};
use contracts::domain::a002_coupon::{Coupon, DiscountType};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::{EntityResponse, ListResponse};
use serde::Serialize;

/// Тело создания/изменения: без ID и серверных счетчиков
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponPayload {
    pub code: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub min_order_value: f64,
    pub max_discount: Option<f64>,
    pub usage_limit: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: bool,
}

impl From<&Coupon> for CouponPayload {
    fn from(c: &Coupon) -> Self {
        Self {
            code: c.normalized_code(),
            description: c.description.trim().to_string(),
            discount_type: c.discount_type,
            discount_value: c.discount_value,
            min_order_value: c.min_order_value,
            max_discount: c.max_discount,
            usage_limit: c.usage_limit,
            start_date: c.start_date,
            end_date: c.end_date,
            is_active: c.is_active,
        }
    }
}

pub async fn fetch_coupons() -> Result<Vec<Coupon>, String> {
    get_json::<ListResponse<Coupon>>(&Coupon::collection_path(), Auth::Admin)
        .await
        .map(ListResponse::into_data)
}

pub async fn fetch_coupon(id: &str) -> Result<Coupon, String> {
    get_json::<EntityResponse<Coupon>>(&Coupon::item_path(id), Auth::Admin)
        .await
        .map(EntityResponse::into_inner)
}

/// Создание, если у купона нет ID, иначе изменение
pub async fn save_coupon(coupon: &Coupon) -> Result<Coupon, String> {
    let payload = CouponPayload::from(coupon);
    if coupon.id.is_empty() {
        send_json(HttpMethod::Post, &Coupon::collection_path(), &payload, Auth::Admin).await
    } else {
        send_json(HttpMethod::Put, &Coupon::item_path(&coupon.id), &payload, Auth::Admin).await
    }
}

/// Включение/выключение; сервер возвращает обновленный купон
pub async fn toggle_coupon(id: &str) -> Result<Coupon, String> {
    let path = format!("{}/toggle", Coupon::item_path(id));
    send_json(HttpMethod::Patch, &path, &serde_json::json!({}), Auth::Admin).await
}

pub async fn delete_coupon(id: &str) -> Result<(), String> {
    send_empty(HttpMethod::Delete, &Coupon::item_path(id), Auth::Admin).await
}

/// Поиск купона по коду для предпросмотра скидки в корзине
pub async fn find_coupon_by_code(code: &str) -> Result<Coupon, String> {
    let path = resource_path(&format!("{}/code", Coupon::collection_path()), &code.trim().to_uppercase());
    get_json::<EntityResponse<Coupon>>(&path, Auth::Customer)
        .await
        .map(EntityResponse::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_normalizes_code() {
        let coupon = Coupon {
            id: "c1".into(),
            code: "  tet2025 ".into(),
            description: " Lunar sale ".into(),
            discount_value: 10.0,
            used_count: 7,
            ..Coupon::default()
        };
        let payload = CouponPayload::from(&coupon);
        assert_eq!(payload.code, "TET2025");
        assert_eq!(payload.description, "Lunar sale");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["discountType"], "percentage");
        assert!(json.get("id").is_none());
        assert!(json.get("usedCount").is_none());
    }
}
