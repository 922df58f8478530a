use crate::shared::api_utils::{get_json, resource_path, send_json, Auth, HttpMethod};
use contracts::domain::a004_order::{Order, UpdateOrderStatusDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::{EntityResponse, ListResponse};

fn order_path(id: &str) -> String {
    resource_path(&Order::collection_path(), id)
}

/// Все заказы (админка)
pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    get_json::<ListResponse<Order>>(&Order::collection_path(), Auth::Admin)
        .await
        .map(ListResponse::into_data)
}

/// Заказ по ID; покупатель видит только свои
pub async fn fetch_order(id: &str, auth: Auth) -> Result<Order, String> {
    get_json::<EntityResponse<Order>>(&order_path(id), auth)
        .await
        .map(EntityResponse::into_inner)
}

pub async fn update_order_status(id: &str, dto: &UpdateOrderStatusDto) -> Result<Order, String> {
    let path = format!("{}/status", order_path(id));
    send_json(HttpMethod::Patch, &path, dto, Auth::Admin).await
}

pub async fn fetch_my_orders() -> Result<Vec<Order>, String> {
    let path = format!("{}/my-orders", Order::collection_path());
    get_json::<ListResponse<Order>>(&path, Auth::Customer)
        .await
        .map(ListResponse::into_data)
}

pub async fn cancel_order(id: &str) -> Result<Order, String> {
    let path = format!("{}/cancel", order_path(id));
    send_json(HttpMethod::Patch, &path, &serde_json::json!({}), Auth::Customer).await
}
