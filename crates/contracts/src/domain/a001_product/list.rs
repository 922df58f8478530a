use super::aggregate::{Product, StockState, DEFAULT_LOW_STOCK_THRESHOLD};
use crate::shared::list_view::{
    FieldValue, FilterDef, FilterRule, ListDescriptor, ListRecord, SortKey, SortSpec,
};
use chrono::{DateTime, Utc};

impl ListRecord for Product {
    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "description" => Some(self.description.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "brand" => self.brand.as_deref().map(FieldValue::from),
            "price" => Some(self.effective_price().into()),
            "base_price" => Some(self.price.into()),
            "stock" => Some(self.stock.into()),
            "rating" => Some(self.rating.into()),
            "sold" => Some(self.sold.into()),
            "is_active" => Some(self.is_active.into()),
            "created_at" => self.created_at.map(FieldValue::from),
            _ => None,
        }
    }
}

fn matches_stock(product: &Product, selected: &str, _now: DateTime<Utc>) -> bool {
    let state = product.stock_state(DEFAULT_LOW_STOCK_THRESHOLD);
    match selected {
        "available" => state != StockState::OutOfStock,
        other => state.code() == other,
    }
}

fn matches_sale(product: &Product, selected: &str, _now: DateTime<Utc>) -> bool {
    match selected {
        "on_sale" => product.is_on_sale(),
        "regular" => !product.is_on_sale(),
        _ => false,
    }
}

pub const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("clothing", "Clothing"),
    ("food", "Food & drinks"),
    ("decor", "Decor"),
    ("gifts", "Gifts"),
    ("electronics", "Electronics"),
];

const STOCK_OPTIONS: &[(&str, &str)] = &[
    ("available", "Available"),
    ("in_stock", "In stock"),
    ("low_stock", "Low stock"),
    ("out_of_stock", "Out of stock"),
];

const SALE_OPTIONS: &[(&str, &str)] = &[("on_sale", "On sale"), ("regular", "Regular price")];

pub const PRODUCT_SORT_KEYS: &[SortKey] = &[
    SortKey { key: "created_at", label: "Newest" },
    SortKey { key: "price", label: "Price" },
    SortKey { key: "name", label: "Name" },
    SortKey { key: "sold", label: "Best selling" },
    SortKey { key: "rating", label: "Rating" },
];

/// Каталог: поиск по названию, бренду, описанию и ID
pub fn product_list_descriptor() -> ListDescriptor<Product> {
    ListDescriptor {
        search_fields: &["name", "brand", "description", "id"],
        filters: vec![
            FilterDef {
                key: "category",
                label: "Category",
                rule: FilterRule::Equals("category"),
                options: CATEGORY_OPTIONS,
            },
            FilterDef {
                key: "stock",
                label: "Availability",
                rule: FilterRule::Derived(matches_stock),
                options: STOCK_OPTIONS,
            },
            FilterDef {
                key: "sale",
                label: "Price type",
                rule: FilterRule::Derived(matches_sale),
                options: SALE_OPTIONS,
            },
            FilterDef {
                key: "price",
                label: "Price",
                rule: FilterRule::NumberRange("price"),
                options: &[],
            },
        ],
        sort_keys: PRODUCT_SORT_KEYS,
        default_sort: SortSpec::desc("created_at"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{Bounds, ListEngine, ListState};
    use chrono::TimeZone;

    fn product(id: &str, name: &str, price: f64, sale: Option<f64>, stock: i64) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: "gifts".into(),
            brand: Some("Lotus".into()),
            price,
            sale_price: sale,
            stock,
            rating: 4.0,
            sold: 0,
            images: vec![],
            is_active: true,
            created_at: None,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("1", "Lantern", 90_000.0, None, 20),
            product("2", "Red envelope", 15_000.0, Some(10_000.0), 3),
            product("3", "Kumquat tree", 450_000.0, None, 0),
            product("4", "Tea set", 320_000.0, Some(280_000.0), 8),
        ]
    }

    #[test]
    fn test_price_range_uses_effective_price() {
        let engine = ListEngine::new(product_list_descriptor());
        let mut state = ListState::new(SortSpec::asc("price"), 10);
        state.set_range(
            "price",
            Bounds::Number {
                min: Some(100_000.0),
                max: Some(300_000.0),
            },
        );
        let data = catalog();
        let page = engine.run(&data, &state, Utc.timestamp_opt(0, 0).unwrap());
        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["4"]);
    }

    #[test]
    fn test_stock_filter() {
        let engine = ListEngine::new(product_list_descriptor());
        let data = catalog();
        let now = Utc::now();
        let mut state = engine.initial_state(10);

        state.set_selection("stock", "available");
        assert_eq!(engine.count(&data, &state.filters, now), 3);
        state.set_selection("stock", "low_stock");
        assert_eq!(engine.count(&data, &state.filters, now), 1);
        state.set_selection("stock", "out_of_stock");
        assert_eq!(engine.count(&data, &state.filters, now), 1);
    }

    #[test]
    fn test_sale_filter_and_search_by_brand() {
        let engine = ListEngine::new(product_list_descriptor());
        let data = catalog();
        let mut state = engine.initial_state(10);
        state.set_selection("sale", "on_sale");
        state.set_search("lotus");
        let page = engine.run(&data, &state, Utc::now());
        assert_eq!(page.total_count, 2);
    }
}
