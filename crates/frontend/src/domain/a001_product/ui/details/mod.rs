use crate::domain::a001_product::api::fetch_product;
use crate::domain::a006_cart::context::use_cart;
use crate::shared::components::table::format_money;
use crate::shared::fetch_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STOREFRONT;
use contracts::domain::a001_product::{Product, DEFAULT_LOW_STOCK_THRESHOLD};
use contracts::domain::a006_cart::CartLine;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

/// Количество из поля ввода в пределах остатка
pub fn parse_quantity(raw: &str, product: &Product) -> i64 {
    let requested = raw.trim().parse::<i64>().unwrap_or(1);
    CartLine::from_product(product, 1).clamp_quantity(requested).max(1)
}

#[component]
pub fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let cart = use_cart();
    let product = RwSignal::new(None::<Product>);
    let error = RwSignal::new(None::<String>);
    let quantity = RwSignal::new(1_i64);
    let added = RwSignal::new(false);
    let guard = MountGuard::new();

    Effect::new(move |_| {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        let guard = guard.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_product(&id).await;
            guard.run(|| match result {
                Ok(p) => {
                    product.set(Some(p));
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            });
        });
    });

    let add_to_cart = move |_| {
        product.with_untracked(|p| {
            if let Some(p) = p {
                cart.add(p, quantity.get_untracked());
                added.set(true);
            }
        });
    };

    view! {
        <PageFrame page_id="a001_product_details--storefront" category=PAGE_CAT_STOREFRONT>
            <div class="page__header">
                <A href="/products" attr:class="page__back">"← Back to products"</A>
            </div>

            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

            {move || match product.get() {
                None => view! { <div class="empty-state">"Loading..."</div> }.into_any(),
                Some(p) => {
                    let state = p.stock_state(DEFAULT_LOW_STOCK_THRESHOLD);
                    let purchasable = p.is_purchasable();
                    let stored = StoredValue::new(p.clone());
                    view! {
                        <div class="product-details">
                            <div class="product-details__gallery">
                                {p.images.iter().map(|src| view! {
                                    <img class="product-details__image" src=src.clone() alt=p.name.clone() />
                                }).collect_view()}
                            </div>
                            <div class="product-details__info">
                                <h1 class="page__title">{p.name.clone()}</h1>
                                {p.brand.clone().map(|b| view! { <div class="product-details__brand">{b}</div> })}
                                <div class="product-details__price">
                                    <span class="product-details__price-current">{format_money(p.effective_price())}</span>
                                    {p.is_on_sale().then(|| view! {
                                        <span class="product-details__price-old">{format_money(p.price)}</span>
                                        <span class="product-details__discount">{format!("-{}%", p.discount_percent())}</span>
                                    })}
                                </div>
                                <div class=format!("product-details__stock product-details__stock--{}", state.code())>
                                    {state.display_name()}
                                </div>
                                <p class="product-details__description">{p.description.clone()}</p>

                                <div class="product-details__buy">
                                    <input
                                        type="number"
                                        min="1"
                                        class="product-details__qty"
                                        prop:value=move || quantity.get().to_string()
                                        on:change=move |ev| {
                                            let raw = event_target_value(&ev);
                                            quantity.set(stored.with_value(|p| parse_quantity(&raw, p)));
                                        }
                                    />
                                    <button
                                        class="button button--primary"
                                        disabled=!purchasable
                                        on:click=add_to_cart
                                    >
                                        "Add to cart"
                                    </button>
                                </div>
                                <Show when=move || added.get()>
                                    <div class="alert alert--success">
                                        "Added to cart. " <A href="/cart">"View cart"</A>
                                    </div>
                                </Show>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity_clamps_to_stock() {
        let p = Product {
            id: "p1".into(),
            name: "Lixi envelope".into(),
            description: String::new(),
            category: "gifts".into(),
            brand: None,
            price: 10_000.0,
            sale_price: None,
            stock: 3,
            rating: 0.0,
            sold: 0,
            images: vec![],
            is_active: true,
            created_at: None,
        };
        assert_eq!(parse_quantity("2", &p), 2);
        assert_eq!(parse_quantity("10", &p), 3);
        assert_eq!(parse_quantity("abc", &p), 1);
        assert_eq!(parse_quantity("-4", &p), 1);
    }
}
