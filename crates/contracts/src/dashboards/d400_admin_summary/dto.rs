use crate::domain::a004_order::{Order, OrderStatus};
use crate::domain::common::lenient;
use crate::shared::indicators::{IndicatorStatus, IndicatorValue, ValueFormat};
use crate::shared::stats::{percent_of, ratio};
use serde::{Deserialize, Serialize};

/// Количество заказов в одном статусе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    #[serde(alias = "_id")]
    pub status: OrderStatus,
    #[serde(default, deserialize_with = "lenient::int")]
    pub count: i64,
}

/// Строка рейтинга товаров
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    #[serde(default, deserialize_with = "lenient::id", alias = "_id")]
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::int", alias = "totalSold")]
    pub sold: i64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
}

/// Ответ `/api/admin/dashboard`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "lenient::number", alias = "totalRevenue")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub previous_revenue: Option<f64>,
    #[serde(default, deserialize_with = "lenient::int", alias = "totalOrders")]
    pub order_count: i64,
    #[serde(default, deserialize_with = "lenient::int", alias = "totalCustomers")]
    pub customer_count: i64,
    #[serde(default, deserialize_with = "lenient::int", alias = "totalProducts")]
    pub product_count: i64,
    #[serde(default)]
    pub orders_by_status: Vec<StatusCount>,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
    #[serde(default)]
    pub recent_orders: Vec<Order>,
}

impl DashboardSummary {
    /// Средний чек; 0 без заказов
    pub fn average_order_value(&self) -> f64 {
        ratio(self.revenue, self.order_count as f64)
    }

    pub fn count_for(&self, status: OrderStatus) -> i64 {
        self.orders_by_status
            .iter()
            .filter(|s| s.status == status)
            .map(|s| s.count)
            .sum()
    }

    /// Доля статуса среди всех заказов, %
    pub fn status_share(&self, status: OrderStatus) -> f64 {
        let total: i64 = self.orders_by_status.iter().map(|s| s.count).sum();
        percent_of(self.count_for(status) as f64, total as f64)
    }

    /// Доля товара в выручке рейтинга, %
    pub fn product_share(&self, product: &TopProduct) -> f64 {
        let total: f64 = self.top_products.iter().map(|p| p.revenue).sum();
        percent_of(product.revenue, total)
    }

    /// Карточки верхнего ряда дашборда
    pub fn indicators(&self) -> Vec<IndicatorValue> {
        let pending = self.count_for(OrderStatus::Pending);
        vec![
            IndicatorValue::new("revenue", "Revenue", "dollar-sign", ValueFormat::Money, self.revenue)
                .with_previous(self.previous_revenue),
            IndicatorValue::new(
                "orders",
                "Orders",
                "orders",
                ValueFormat::Integer,
                self.order_count as f64,
            )
            .with_subtitle(format!("{pending} pending")),
            IndicatorValue::new(
                "aov",
                "Average order",
                "trending-up",
                ValueFormat::Money,
                self.average_order_value(),
            ),
            IndicatorValue::new(
                "customers",
                "Customers",
                "customers",
                ValueFormat::Integer,
                self.customer_count as f64,
            ),
            IndicatorValue::new(
                "cancel_rate",
                "Cancelled",
                "x-circle",
                ValueFormat::Percent { decimals: 1 },
                self.status_share(OrderStatus::Cancelled),
            )
            .with_status(if self.status_share(OrderStatus::Cancelled) > 10.0 {
                IndicatorStatus::Warning
            } else {
                IndicatorStatus::Neutral
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dashboard_is_zero_safe() {
        let summary = DashboardSummary::default();
        assert_eq!(summary.average_order_value(), 0.0);
        assert_eq!(summary.status_share(OrderStatus::Pending), 0.0);
        assert!(summary
            .indicators()
            .iter()
            .all(|i| i.value.map_or(true, |v| v.is_finite())));
    }

    #[test]
    fn test_shares_and_average() {
        let summary: DashboardSummary = serde_json::from_value(serde_json::json!({
            "totalRevenue": 1000,
            "totalOrders": 4,
            "ordersByStatus": [
                { "_id": "delivered", "count": 3 },
                { "_id": "cancelled", "count": 1 }
            ],
            "topProducts": [
                { "_id": "p1", "name": "Lantern", "totalSold": 5, "revenue": 750 },
                { "_id": "p2", "name": "Tea", "sold": 1, "revenue": 250 }
            ]
        }))
        .unwrap();
        assert_eq!(summary.average_order_value(), 250.0);
        assert_eq!(summary.status_share(OrderStatus::Delivered), 75.0);
        assert_eq!(summary.product_share(&summary.top_products[0]), 75.0);
        assert_eq!(summary.top_products[0].sold, 5);
        let cancel = summary.indicators().into_iter().find(|i| i.id == "cancel_rate").unwrap();
        assert_eq!(cancel.status, IndicatorStatus::Warning);
    }
}
