use crate::domain::a001_product::Product;
use serde::{Deserialize, Serialize};

/// Максимум единиц одного товара в корзине, если остаток неизвестен
pub const MAX_LINE_QUANTITY: i64 = 99;

/// Строка корзины. Цена фиксируется в момент добавления.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: f64,
    pub quantity: i64,
    /// Остаток на момент добавления; `None` — неизвестен
    #[serde(default)]
    pub stock: Option<i64>,
}

impl CartLine {
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        let mut line = Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.cover_image().map(str::to_string),
            price: product.effective_price(),
            quantity: 0,
            stock: Some(product.stock),
        };
        line.quantity = line.clamp_quantity(quantity);
        line
    }

    pub fn max_quantity(&self) -> i64 {
        self.stock
            .map_or(MAX_LINE_QUANTITY, |s| s.min(MAX_LINE_QUANTITY))
            .max(0)
    }

    pub fn clamp_quantity(&self, quantity: i64) -> i64 {
        quantity.clamp(0, self.max_quantity())
    }

    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Корзина покупателя. Хранится в localStorage, меняется только через
/// методы, возвращающие новую корзину.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Добавляет товар. Повторное добавление увеличивает количество,
    /// количество ограничено остатком. Нулевой результат строку не создает.
    pub fn with_added(&self, product: &Product, quantity: i64) -> Self {
        let mut lines = self.lines.clone();
        match lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => {
                line.stock = Some(product.stock);
                line.price = product.effective_price();
                line.quantity = line.clamp_quantity(line.quantity.saturating_add(quantity));
            }
            None => lines.push(CartLine::from_product(product, quantity)),
        }
        lines.retain(|l| l.quantity > 0);
        Self { lines }
    }

    /// Устанавливает количество; 0 и меньше удаляет строку
    pub fn with_quantity(&self, product_id: &str, quantity: i64) -> Self {
        let lines = self
            .lines
            .iter()
            .filter_map(|l| {
                if l.product_id != product_id {
                    return Some(l.clone());
                }
                let quantity = l.clamp_quantity(quantity);
                (quantity > 0).then(|| CartLine {
                    quantity,
                    ..l.clone()
                })
            })
            .collect();
        Self { lines }
    }

    pub fn without(&self, product_id: &str) -> Self {
        Self {
            lines: self
                .lines
                .iter()
                .filter(|l| l.product_id != product_id)
                .cloned()
                .collect(),
        }
    }

    pub fn cleared(&self) -> Self {
        Self::default()
    }

    /// Количество единиц товара для значка корзины
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: f64, stock: i64) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {id}"),
            description: String::new(),
            category: String::new(),
            brand: None,
            price,
            sale_price: None,
            stock,
            rating: 0.0,
            sold: 0,
            images: vec!["a.jpg".into()],
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn test_add_merges_and_clamps_to_stock() {
        let lantern = product("p1", 90_000.0, 3);
        let cart = Cart::default().with_added(&lantern, 2).with_added(&lantern, 2);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.subtotal(), 270_000.0);
        assert_eq!(cart.lines[0].image.as_deref(), Some("a.jpg"));
    }

    #[test]
    fn test_out_of_stock_is_not_added() {
        let cart = Cart::default().with_added(&product("p1", 1.0, 0), 1);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_zero_removes_line() {
        let cart = Cart::default()
            .with_added(&product("p1", 10.0, 10), 1)
            .with_added(&product("p2", 20.0, 10), 1);
        let cart = cart.with_quantity("p1", 0);
        assert!(cart.line("p1").is_none());
        assert_eq!(cart.with_quantity("p2", 50).item_count(), 10);
        assert!(cart.without("p2").is_empty());
        assert!(cart.cleared().is_empty());
    }
}
