use crate::shared::api_utils::{send_json, Auth, HttpMethod};
use contracts::domain::a004_order::Order;
use contracts::domain::a006_cart::PlaceOrderRequest;
use contracts::domain::common::AggregateRoot;

/// Создание заказа из корзины; итоги сервер пересчитывает сам
pub async fn place_order(request: &PlaceOrderRequest) -> Result<Order, String> {
    send_json(HttpMethod::Post, &Order::collection_path(), request, Auth::Customer).await
}
