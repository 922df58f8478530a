use crate::shared::api_utils::{get_json, Auth};
use contracts::dashboards::d400_admin_summary::DashboardSummary;
use contracts::shared::api::EntityResponse;

const DASHBOARD_PATH: &str = "/api/admin/dashboard";

/// Сводка для дашборда админки
pub async fn get_dashboard_summary() -> Result<DashboardSummary, String> {
    get_json::<EntityResponse<DashboardSummary>>(DASHBOARD_PATH, Auth::Admin)
        .await
        .map(EntityResponse::into_inner)
}
