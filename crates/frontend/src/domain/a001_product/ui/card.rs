//! Карточка товара для сеток каталога и главной

use crate::domain::a006_cart::context::use_cart;
use crate::shared::components::table::format_money;
use contracts::domain::a001_product::{Product, StockState, DEFAULT_LOW_STOCK_THRESHOLD};
use leptos::prelude::*;
use leptos_router::components::A;

/// Подпись остатка, только когда она что-то говорит покупателю
pub fn stock_hint(product: &Product) -> Option<&'static str> {
    match product.stock_state(DEFAULT_LOW_STOCK_THRESHOLD) {
        StockState::InStock => None,
        state => Some(state.display_name()),
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = use_cart();
    let href = format!("/products/{}", product.id);
    let image = product.cover_image().map(str::to_string);
    let on_sale = product.is_on_sale();
    let discount = product.discount_percent();
    let purchasable = product.is_purchasable();
    let hint = stock_hint(&product);
    let price = product.effective_price();
    let base_price = product.price;
    let name = product.name.clone();
    let alt = product.name.clone();
    let stored = StoredValue::new(product);

    view! {
        <div class="product-card">
            <A href=href.clone() attr:class="product-card__media">
                {match image {
                    Some(src) => view! { <img src=src alt=alt loading="lazy" /> }.into_any(),
                    None => view! { <div class="product-card__placeholder"></div> }.into_any(),
                }}
                {on_sale.then(|| view! {
                    <span class="product-card__sale">{format!("-{}%", discount)}</span>
                })}
            </A>
            <div class="product-card__body">
                <A href=href attr:class="product-card__name">{name}</A>
                <div class="product-card__price">
                    <span class="product-card__price-current">{format_money(price)}</span>
                    {on_sale.then(|| view! {
                        <span class="product-card__price-old">{format_money(base_price)}</span>
                    })}
                </div>
                {hint.map(|h| view! { <div class="product-card__stock">{h}</div> })}
                <button
                    class="button button--primary product-card__add"
                    disabled=!purchasable
                    on:click=move |_| stored.with_value(|p| cart.add(p, 1))
                >
                    {if purchasable { "Add to cart" } else { "Sold out" }}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_hint() {
        let mut p = Product {
            id: "p1".into(),
            name: "Mut dua".into(),
            description: String::new(),
            category: "food".into(),
            brand: None,
            price: 50_000.0,
            sale_price: None,
            stock: 40,
            rating: 0.0,
            sold: 0,
            images: vec![],
            is_active: true,
            created_at: None,
        };
        assert_eq!(stock_hint(&p), None);
        p.stock = 2;
        assert_eq!(stock_hint(&p), Some("Only a few left"));
        p.stock = 0;
        assert_eq!(stock_hint(&p), Some("Out of stock"));
    }
}
