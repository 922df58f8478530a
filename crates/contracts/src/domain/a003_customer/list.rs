use super::aggregate::Customer;
use crate::shared::list_view::{
    FieldValue, FilterDef, FilterRule, ListDescriptor, ListRecord, SortKey, SortSpec,
};

impl ListRecord for Customer {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "phone" => self.phone.as_deref().map(FieldValue::from),
            "status" => Some(self.status_code().into()),
            "total_orders" => Some(self.total_orders.into()),
            "total_spent" => Some(self.total_spent.into()),
            "created_at" => self.created_at.map(FieldValue::from),
            _ => None,
        }
    }
}

pub const STATUS_OPTIONS: &[(&str, &str)] = &[("active", "Active"), ("blocked", "Blocked")];

pub const CUSTOMER_SORT_KEYS: &[SortKey] = &[
    SortKey { key: "created_at", label: "Joined" },
    SortKey { key: "name", label: "Name" },
    SortKey { key: "total_spent", label: "Total spent" },
    SortKey { key: "total_orders", label: "Orders" },
];

pub fn customer_list_descriptor() -> ListDescriptor<Customer> {
    ListDescriptor {
        search_fields: &["name", "email", "phone", "id"],
        filters: vec![
            FilterDef {
                key: "status",
                label: "Status",
                rule: FilterRule::Equals("status"),
                options: STATUS_OPTIONS,
            },
            FilterDef {
                key: "joined",
                label: "Joined",
                rule: FilterRule::DateRange("created_at"),
                options: &[],
            },
        ],
        sort_keys: CUSTOMER_SORT_KEYS,
        default_sort: SortSpec::desc("created_at"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::ListEngine;
    use chrono::Utc;

    fn customer(id: &str, name: &str, phone: Option<&str>, spent: f64) -> Customer {
        Customer {
            id: id.into(),
            name: name.into(),
            email: format!("{}@mail.vn", name.to_lowercase().replace(' ', ".")),
            phone: phone.map(str::to_string),
            total_spent: spent,
            ..Customer::default()
        }
    }

    #[test]
    fn test_search_by_phone_skips_missing() {
        let data = vec![
            customer("1", "An Nguyen", Some("0901111222"), 10.0),
            customer("2", "Binh Le", None, 20.0),
        ];
        let engine = ListEngine::new(customer_list_descriptor());
        let mut state = engine.initial_state(10);
        state.set_search("0901");
        let page = engine.run(&data, &state, Utc::now());
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].id, "1");
    }

    #[test]
    fn test_sort_by_total_spent() {
        let data = vec![
            customer("1", "An", None, 10.0),
            customer("2", "Binh", None, 30.0),
            customer("3", "Chi", None, 20.0),
        ];
        let engine = ListEngine::new(customer_list_descriptor());
        let mut state = engine.initial_state(10);
        state.toggle_sort("total_spent");
        let ids: Vec<String> = engine
            .run(&data, &state, Utc::now())
            .items
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["1", "3", "2"]);
    }
}
