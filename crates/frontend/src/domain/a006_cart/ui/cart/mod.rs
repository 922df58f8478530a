use crate::domain::a006_cart::context::use_cart;
use crate::shared::components::table::format_money;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STOREFRONT;
use contracts::domain::a006_cart::CartLine;
use leptos::prelude::*;
use leptos_router::components::A;

/// Количество из поля ввода; мусор не меняет строку
pub fn parse_line_quantity(raw: &str, line: &CartLine) -> Option<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .map(|q| line.clamp_quantity(q))
}

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();
    let has_lines = move || cart.cart.with(|c| !c.is_empty());

    view! {
        <PageFrame page_id="a006_cart--storefront" category=PAGE_CAT_STOREFRONT>
            <div class="page__header">
                <h1 class="page__title">"Shopping cart"</h1>
            </div>

            <Show when=has_lines fallback=|| view! { <EmptyCart /> }>
                <div class="cart">
                    <div class="cart__lines">
                        <For
                            each=move || cart.cart.get().lines
                            key=|l: &CartLine| format!("{}:{}", l.product_id, l.quantity)
                            children=|line: CartLine| view! { <CartLineRow line=line /> }
                        />
                    </div>
                    <CartSummary />
                </div>
            </Show>
        </PageFrame>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    view! {
        <div class="empty-state">
            {icon("cart")}
            <p>"Your cart is empty"</p>
            <A href="/products" attr:class="button button--primary">"Continue shopping"</A>
        </div>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let cart = use_cart();
    let href = format!("/products/{}", line.product_id);
    let remove_id = line.product_id.clone();
    let max = line.max_quantity().to_string();
    let quantity = line.quantity.to_string();
    let price = format_money(line.price);
    let line_total = format_money(line.line_total());
    let image = line.image.clone().map(|src| (src, line.name.clone()));
    let name = line.name.clone();
    let input_line = StoredValue::new(line);

    view! {
        <div class="cart-line">
            {image.map(|(src, alt)| view! { <img class="cart-line__image" src=src alt=alt /> })}
            <div class="cart-line__info">
                <A href=href attr:class="cart-line__name">{name}</A>
                <div class="cart-line__price">{price}</div>
            </div>
            <input
                class="cart-line__quantity"
                type="number"
                min="1"
                max=max
                prop:value=quantity
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    input_line.with_value(|line| {
                        if let Some(q) = parse_line_quantity(&raw, line) {
                            cart.set_quantity(&line.product_id, q);
                        }
                    });
                }
            />
            <div class="cart-line__total">{line_total}</div>
            <button
                class="button button--icon"
                title="Remove"
                on:click=move |_| cart.remove(&remove_id)
            >
                {icon("trash")}
            </button>
        </div>
    }
}

#[component]
fn CartSummary() -> impl IntoView {
    let cart = use_cart();
    let policy = config().shop.shipping_policy();
    let subtotal = Memo::new(move |_| cart.cart.with(|c| c.subtotal()));
    let shipping = Memo::new(move |_| policy.fee_for(subtotal.get()));
    let shipping_label = move || {
        let fee = shipping.get();
        if fee == 0.0 {
            "Free".to_string()
        } else {
            format_money(fee)
        }
    };

    view! {
        <aside class="cart__summary">
            <dl class="totals">
                <dt>"Subtotal"</dt>
                <dd>{move || format_money(subtotal.get())}</dd>
                <dt>"Shipping"</dt>
                <dd>{shipping_label}</dd>
                <dt class="totals__grand">"Estimated total"</dt>
                <dd class="totals__grand">{move || format_money(subtotal.get() + shipping.get())}</dd>
            </dl>
            {move || {
                policy.remaining_for_free(subtotal.get()).map(|left| {
                    let hint = format!("Add {} more for free shipping", format_money(left));
                    view! {
                        <div class="cart__hint">
                            {icon("truck")}
                            {hint}
                        </div>
                    }
                })
            }}
            <A href="/checkout" attr:class="button button--primary button--block">"Checkout"</A>
            <button class="button button--link" on:click=move |_| cart.clear()>"Clear cart"</button>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_quantity() {
        let line = CartLine {
            product_id: "p1".into(),
            name: "Mut tet".into(),
            image: None,
            price: 50_000.0,
            quantity: 1,
            stock: Some(3),
        };
        assert_eq!(parse_line_quantity(" 2 ", &line), Some(2));
        assert_eq!(parse_line_quantity("10", &line), Some(3));
        assert_eq!(parse_line_quantity("-1", &line), Some(0));
        assert_eq!(parse_line_quantity("two", &line), None);
    }
}
