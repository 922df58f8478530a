use super::aggregate::Order;
use crate::shared::list_view::{
    FieldValue, FilterDef, FilterRule, ListDescriptor, ListRecord, SortKey, SortSpec,
};

impl ListRecord for Order {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "order_number" => Some(self.display_number().into()),
            "customer_name" => Some(self.customer_name.as_str().into()),
            "customer_email" => Some(self.customer_email.as_str().into()),
            "customer_phone" => self.customer_phone.as_deref().map(FieldValue::from),
            "status" => Some(self.status.code().into()),
            "payment_status" => Some(self.payment_status.code().into()),
            "payment_method" => Some(self.payment_method.code().into()),
            "total" => Some(self.total.into()),
            "item_count" => Some(self.item_count().into()),
            "created_at" => self.created_at.map(FieldValue::from),
            _ => None,
        }
    }
}

pub const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("pending", "Pending"),
    ("confirmed", "Confirmed"),
    ("processing", "Processing"),
    ("shipping", "Shipping"),
    ("delivered", "Delivered"),
    ("cancelled", "Cancelled"),
];

pub const PAYMENT_STATUS_OPTIONS: &[(&str, &str)] =
    &[("unpaid", "Unpaid"), ("paid", "Paid"), ("refunded", "Refunded")];

pub const PAYMENT_METHOD_OPTIONS: &[(&str, &str)] = &[
    ("cod", "Cash on delivery"),
    ("bank_transfer", "Bank transfer"),
    ("momo", "MoMo"),
    ("vnpay", "VNPay"),
];

pub const ORDER_SORT_KEYS: &[SortKey] = &[
    SortKey { key: "created_at", label: "Date" },
    SortKey { key: "total", label: "Total" },
    SortKey { key: "customer_name", label: "Customer" },
    SortKey { key: "order_number", label: "Order" },
];

pub fn order_list_descriptor() -> ListDescriptor<Order> {
    ListDescriptor {
        search_fields: &["order_number", "id", "customer_name", "customer_email", "customer_phone"],
        filters: vec![
            FilterDef {
                key: "status",
                label: "Status",
                rule: FilterRule::Equals("status"),
                options: STATUS_OPTIONS,
            },
            FilterDef {
                key: "payment_status",
                label: "Payment",
                rule: FilterRule::Equals("payment_status"),
                options: PAYMENT_STATUS_OPTIONS,
            },
            FilterDef {
                key: "payment_method",
                label: "Method",
                rule: FilterRule::Equals("payment_method"),
                options: PAYMENT_METHOD_OPTIONS,
            },
            FilterDef {
                key: "created",
                label: "Date",
                rule: FilterRule::DateRange("created_at"),
                options: &[],
            },
        ],
        sort_keys: ORDER_SORT_KEYS,
        default_sort: SortSpec::desc("created_at"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_order::OrderStatus;
    use crate::shared::list_view::{Bounds, ListEngine};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn order(id: &str, status: OrderStatus, day: u32) -> Order {
        Order {
            id: id.into(),
            order_number: format!("ORD-{id}"),
            customer_name: "Pham D".into(),
            status,
            created_at: Some(Utc.with_ymd_and_hms(2025, 1, day, 12, 0, 0).unwrap()),
            ..Order::default()
        }
    }

    #[test]
    fn test_status_and_date_filters_combine() {
        let data = vec![
            order("1", OrderStatus::Pending, 5),
            order("2", OrderStatus::Pending, 15),
            order("3", OrderStatus::Delivered, 15),
            order("4", OrderStatus::Pending, 25),
        ];
        let engine = ListEngine::new(order_list_descriptor());
        let mut state = engine.initial_state(10);
        state.set_selection("status", "pending");
        state.set_range(
            "created",
            Bounds::Date {
                from: NaiveDate::from_ymd_opt(2025, 1, 10),
                to: NaiveDate::from_ymd_opt(2025, 1, 25),
            },
        );
        let page = engine.run(&data, &state, Utc::now());
        let ids: Vec<&str> = page.items.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["4", "2"]);
    }

    #[test]
    fn test_search_by_order_number() {
        let data = vec![order("17", OrderStatus::Pending, 1), order("2", OrderStatus::Pending, 2)];
        let engine = ListEngine::new(order_list_descriptor());
        let mut state = engine.initial_state(10);
        state.set_search("ord-17");
        assert_eq!(engine.count(&data, &state.filters, Utc::now()), 1);
    }
}
