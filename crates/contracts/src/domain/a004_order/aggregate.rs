use crate::domain::a003_customer::Address;
use crate::domain::common::{lenient, AggregateRoot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Enums
// ============================================================================

/// Статус заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Processing,
    Shipping,
    Delivered,
    Cancelled,
    /// Статус, которого клиент не знает
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Основной путь заказа, по порядку
    pub const FLOW: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipping,
        OrderStatus::Delivered,
    ];

    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipping,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipping => "shipping",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipping => "Shipping",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Unknown => "Unknown",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Позиция в основном пути; `None` для отмененного и неизвестного
    pub fn flow_index(&self) -> Option<usize> {
        Self::FLOW.iter().position(|s| s == self)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Статусы, в которые администратор может перевести заказ
    pub fn allowed_transitions(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Confirmed, OrderStatus::Cancelled],
            OrderStatus::Confirmed => &[OrderStatus::Processing, OrderStatus::Cancelled],
            OrderStatus::Processing => &[OrderStatus::Shipping, OrderStatus::Cancelled],
            OrderStatus::Shipping => &[OrderStatus::Delivered],
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Unknown => &[],
        }
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cod,
    #[serde(alias = "bank")]
    BankTransfer,
    Momo,
    Vnpay,
    #[serde(other)]
    Other,
}

impl PaymentMethod {
    pub const SELECTABLE: [PaymentMethod; 4] = [
        PaymentMethod::Cod,
        PaymentMethod::BankTransfer,
        PaymentMethod::Momo,
        PaymentMethod::Vnpay,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "cod",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::Momo => "momo",
            PaymentMethod::Vnpay => "vnpay",
            PaymentMethod::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "Cash on delivery",
            PaymentMethod::BankTransfer => "Bank transfer",
            PaymentMethod::Momo => "MoMo wallet",
            PaymentMethod::Vnpay => "VNPay",
            PaymentMethod::Other => "Other",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::SELECTABLE.into_iter().find(|m| m.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
    Refunded,
    #[serde(other)]
    Unknown,
}

impl PaymentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "unpaid",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::Unknown => "Unknown",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Строка заказа
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, deserialize_with = "lenient::id", alias = "product")]
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub quantity: i64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity.max(0) as f64
    }
}

/// Запись истории статусов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub status: OrderStatus,
    #[serde(
        default,
        deserialize_with = "lenient::opt_datetime",
        alias = "timestamp",
        alias = "changedAt"
    )]
    pub at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, deserialize_with = "lenient::id", alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub subtotal: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub discount: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub shipping_fee: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    #[serde(default)]
    pub shipping_address: Option<Address>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub coupon_code: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub note: Option<String>,
    #[serde(default)]
    pub status_history: Vec<StatusChange>,
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Номер для отображения: номер заказа или хвост ID
    pub fn display_number(&self) -> String {
        if !self.order_number.is_empty() {
            return self.order_number.clone();
        }
        let tail: String = self
            .id
            .chars()
            .rev()
            .take(8)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("#{}", tail.to_uppercase())
    }

    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity.max(0)).sum()
    }

    /// Сумма строк; сверяется с `subtotal` сервера только для отображения
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(OrderItem::line_total).sum()
    }

    /// Заказ засчитывается в выручку, только если он не отменен
    pub fn counts_as_revenue(&self) -> bool {
        !matches!(self.status, OrderStatus::Cancelled | OrderStatus::Unknown)
    }

    /// Покупатель может отменить заказ до начала обработки
    pub fn can_cancel_by_customer(&self) -> bool {
        matches!(self.status, OrderStatus::Pending | OrderStatus::Confirmed)
    }

    /// Проверка смены статуса администратором
    pub fn check_transition(&self, next: OrderStatus) -> Result<(), OrderTransitionError> {
        if self.status == next {
            return Err(OrderTransitionError::SameStatus(next));
        }
        if self.status.is_terminal() {
            return Err(OrderTransitionError::Terminal(self.status));
        }
        if !self.status.can_transition_to(next) {
            return Err(OrderTransitionError::NotAllowed {
                from: self.status,
                to: next,
            });
        }
        Ok(())
    }

    /// Время перехода в статус по истории
    pub fn reached_at(&self, status: OrderStatus) -> Option<DateTime<Utc>> {
        self.status_history
            .iter()
            .filter(|c| c.status == status)
            .filter_map(|c| c.at)
            .max()
            .or_else(|| {
                if status == OrderStatus::Pending {
                    self.created_at
                } else {
                    None
                }
            })
    }
}

impl AggregateRoot for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "orders"
    }

    fn element_name() -> &'static str {
        "Order"
    }

    fn list_name() -> &'static str {
        "Orders"
    }
}

/// Тело запроса на смену статуса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusDto {
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderTransitionError {
    #[error("Order is already {}", .0.display_name())]
    SameStatus(OrderStatus),
    #[error("Order is {} and can no longer change status", .0.display_name())]
    Terminal(OrderStatus),
    #[error("Cannot move order from {} to {}", .from.display_name(), .to.display_name())]
    NotAllowed { from: OrderStatus, to: OrderStatus },
}

// ============================================================================
// Stats
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub processing: usize,
    pub shipping: usize,
    pub delivered: usize,
    pub cancelled: usize,
    /// Сумма неотмененных заказов
    pub revenue: f64,
    /// Доля доставленных, %
    pub completion_rate: f64,
}

impl OrderStats {
    pub fn from_records(records: &[Order]) -> Self {
        let mut stats = records.iter().fold(
            Self {
                total: records.len(),
                ..Self::default()
            },
            |mut acc, o| {
                match o.status {
                    OrderStatus::Pending => acc.pending += 1,
                    OrderStatus::Confirmed => acc.confirmed += 1,
                    OrderStatus::Processing => acc.processing += 1,
                    OrderStatus::Shipping => acc.shipping += 1,
                    OrderStatus::Delivered => acc.delivered += 1,
                    OrderStatus::Cancelled => acc.cancelled += 1,
                    OrderStatus::Unknown => {}
                }
                if o.counts_as_revenue() {
                    acc.revenue += o.total;
                }
                acc
            },
        );
        stats.completion_rate = crate::shared::stats::percent_of_count(stats.delivered, stats.total);
        stats
    }

    pub fn count_for(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Confirmed => self.confirmed,
            OrderStatus::Processing => self.processing,
            OrderStatus::Shipping => self.shipping,
            OrderStatus::Delivered => self.delivered,
            OrderStatus::Cancelled => self.cancelled,
            OrderStatus::Unknown => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: OrderStatus, total: f64) -> Order {
        Order {
            id: "6650a1b2c3d4e5f6".into(),
            status,
            total,
            ..Order::default()
        }
    }

    #[test]
    fn test_admin_transitions() {
        let o = order(OrderStatus::Pending, 0.0);
        assert_eq!(o.check_transition(OrderStatus::Confirmed), Ok(()));
        assert_eq!(
            o.check_transition(OrderStatus::Delivered),
            Err(OrderTransitionError::NotAllowed {
                from: OrderStatus::Pending,
                to: OrderStatus::Delivered
            })
        );
        assert_eq!(
            o.check_transition(OrderStatus::Pending),
            Err(OrderTransitionError::SameStatus(OrderStatus::Pending))
        );
        assert!(matches!(
            order(OrderStatus::Delivered, 0.0).check_transition(OrderStatus::Cancelled),
            Err(OrderTransitionError::Terminal(_))
        ));
        assert!(!OrderStatus::Shipping.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn test_customer_cancel_rule() {
        assert!(order(OrderStatus::Pending, 0.0).can_cancel_by_customer());
        assert!(order(OrderStatus::Confirmed, 0.0).can_cancel_by_customer());
        assert!(!order(OrderStatus::Shipping, 0.0).can_cancel_by_customer());
    }

    #[test]
    fn test_stats() {
        let records = vec![
            order(OrderStatus::Delivered, 100.0),
            order(OrderStatus::Delivered, 50.0),
            order(OrderStatus::Cancelled, 70.0),
            order(OrderStatus::Pending, 30.0),
        ];
        let stats = OrderStats::from_records(&records);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.delivered, 2);
        assert_eq!(stats.count_for(OrderStatus::Cancelled), 1);
        assert_eq!(stats.revenue, 180.0);
        assert_eq!(stats.completion_rate, 50.0);
        assert_eq!(OrderStats::from_records(&[]).completion_rate, 0.0);
    }

    #[test]
    fn test_display_number() {
        assert_eq!(order(OrderStatus::Pending, 0.0).display_number(), "#C3D4E5F6");
        let numbered = Order {
            order_number: "ORD-0001".into(),
            ..Order::default()
        };
        assert_eq!(numbered.display_number(), "ORD-0001");
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let o: Order = serde_json::from_value(serde_json::json!({
            "_id": "1",
            "status": "returned",
            "paymentMethod": "bank",
            "items": [{ "product": "p1", "name": "Lantern", "price": "90000", "quantity": 2 }]
        }))
        .unwrap();
        assert_eq!(o.status, OrderStatus::Unknown);
        assert_eq!(o.payment_method, PaymentMethod::BankTransfer);
        assert_eq!(o.items_total(), 180_000.0);
        assert!(o.check_transition(OrderStatus::Confirmed).is_err());
    }
}
