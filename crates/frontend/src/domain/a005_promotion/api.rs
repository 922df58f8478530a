use crate::shared::api_utils::{get_json, Auth};
use contracts::domain::a005_promotion::Promotion;
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::ListResponse;

pub async fn fetch_promotions() -> Result<Vec<Promotion>, String> {
    get_json::<ListResponse<Promotion>>(&Promotion::collection_path(), Auth::Public)
        .await
        .map(ListResponse::into_data)
}
