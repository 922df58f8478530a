use crate::domain::common::{lenient, AggregateRoot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Порог «мало на складе» по умолчанию
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар витрины
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, deserialize_with = "lenient::id", alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::opt_number")]
    pub sale_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub stock: i64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: f64,
    #[serde(default, deserialize_with = "lenient::int")]
    pub sold: i64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_true", deserialize_with = "lenient::flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Состояние остатка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockState {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockState {
    pub fn code(&self) -> &'static str {
        match self {
            StockState::InStock => "in_stock",
            StockState::LowStock => "low_stock",
            StockState::OutOfStock => "out_of_stock",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StockState::InStock => "In stock",
            StockState::LowStock => "Only a few left",
            StockState::OutOfStock => "Out of stock",
        }
    }
}

impl Product {
    /// Цена продажи: акционная, если она ниже базовой
    pub fn effective_price(&self) -> f64 {
        match self.sale_price {
            Some(sale) if sale > 0.0 && sale < self.price => sale,
            _ => self.price,
        }
    }

    pub fn is_on_sale(&self) -> bool {
        self.effective_price() < self.price
    }

    /// Скидка в процентах, округленная до целого
    pub fn discount_percent(&self) -> u32 {
        if !self.is_on_sale() {
            return 0;
        }
        crate::shared::stats::percent_of(self.price - self.effective_price(), self.price).round()
            as u32
    }

    pub fn stock_state(&self, low_stock_threshold: i64) -> StockState {
        if self.stock <= 0 {
            StockState::OutOfStock
        } else if self.stock <= low_stock_threshold {
            StockState::LowStock
        } else {
            StockState::InStock
        }
    }

    pub fn is_purchasable(&self) -> bool {
        self.is_active && self.stock > 0
    }

    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl AggregateRoot for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: f64, sale: Option<f64>, stock: i64) -> Product {
        Product {
            id: "p1".into(),
            name: "Ao dai".into(),
            description: String::new(),
            category: "clothing".into(),
            brand: None,
            price,
            sale_price: sale,
            stock,
            rating: 4.5,
            sold: 0,
            images: vec![],
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn test_sale_price_only_applies_when_lower() {
        assert_eq!(product(200_000.0, Some(150_000.0), 1).effective_price(), 150_000.0);
        assert_eq!(product(200_000.0, Some(250_000.0), 1).effective_price(), 200_000.0);
        assert_eq!(product(200_000.0, Some(0.0), 1).effective_price(), 200_000.0);
        assert_eq!(product(200_000.0, Some(150_000.0), 1).discount_percent(), 25);
        assert_eq!(product(0.0, None, 1).discount_percent(), 0);
    }

    #[test]
    fn test_stock_state() {
        assert_eq!(product(1.0, None, 0).stock_state(5), StockState::OutOfStock);
        assert_eq!(product(1.0, None, -2).stock_state(5), StockState::OutOfStock);
        assert_eq!(product(1.0, None, 5).stock_state(5), StockState::LowStock);
        assert_eq!(product(1.0, None, 6).stock_state(5), StockState::InStock);
        assert!(!product(1.0, None, 0).is_purchasable());
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let p: Product = serde_json::from_value(serde_json::json!({
            "_id": "665f",
            "name": "Banh chung",
            "category": "food",
            "price": 120000,
            "salePrice": null,
            "stock": "12",
            "createdAt": "2025-01-20T08:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(p.id, "665f");
        assert_eq!(p.stock, 12);
        assert!(p.is_active);
        assert!(p.created_at.is_some());
    }
}
