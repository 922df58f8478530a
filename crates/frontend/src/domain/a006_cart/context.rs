//! Корзина покупателя: сигнал в контексте, копия в localStorage

use crate::shared::storage;
use contracts::domain::a001_product::Product;
use contracts::domain::a006_cart::Cart;
use leptos::prelude::*;

const CART_STORAGE_KEY: &str = "cart";

/// Разбор сохраненной корзины; битые данные и пустые строки отбрасываются
pub fn decode_cart(raw: Option<&str>) -> Cart {
    let Some(raw) = raw else {
        return Cart::default();
    };
    match serde_json::from_str::<Cart>(raw) {
        Ok(mut cart) => {
            cart.lines.retain(|l| l.quantity > 0 && !l.product_id.is_empty());
            cart
        }
        Err(e) => {
            log::warn!("stored cart is malformed, starting empty: {}", e);
            Cart::default()
        }
    }
}

#[derive(Clone, Copy)]
pub struct CartContext {
    pub cart: RwSignal<Cart>,
}

impl CartContext {
    fn commit(&self, next: Cart) {
        storage::set_json(CART_STORAGE_KEY, &next);
        self.cart.set(next);
    }

    pub fn add(&self, product: &Product, quantity: i64) {
        let next = self.cart.with_untracked(|c| c.with_added(product, quantity));
        self.commit(next);
    }

    pub fn set_quantity(&self, product_id: &str, quantity: i64) {
        let next = self.cart.with_untracked(|c| c.with_quantity(product_id, quantity));
        self.commit(next);
    }

    pub fn remove(&self, product_id: &str) {
        let next = self.cart.with_untracked(|c| c.without(product_id));
        self.commit(next);
    }

    pub fn clear(&self) {
        storage::remove_item(CART_STORAGE_KEY);
        self.cart.set(Cart::default());
    }

    pub fn item_count(&self) -> i64 {
        self.cart.with(Cart::item_count)
    }
}

#[component]
pub fn CartProvider(children: Children) -> impl IntoView {
    let raw = storage::get_item(CART_STORAGE_KEY);
    let cart = RwSignal::new(decode_cart(raw.as_deref()));
    provide_context(CartContext { cart });
    children()
}

pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext not found. Wrap your app with CartProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_cart() {
        assert!(decode_cart(None).is_empty());
        assert!(decode_cart(Some("{not json")).is_empty());

        let cart = decode_cart(Some(
            r#"{"lines":[
                {"productId":"p1","name":"Banh chung","price":120000,"quantity":2},
                {"productId":"p2","name":"Gone","price":1,"quantity":0}
            ]}"#,
        ));
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.subtotal(), 240_000.0);
    }
}
