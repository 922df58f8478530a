//! Оформление заказа: адрес, оплата, купон, итоги

use crate::domain::a002_coupon::api::find_coupon_by_code;
use crate::domain::a003_customer::api::fetch_profile;
use crate::domain::a006_cart::api::place_order;
use crate::domain::a006_cart::context::use_cart;
use crate::shared::components::table::format_money;
use crate::shared::config::config;
use crate::shared::fetch_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STOREFRONT;
use chrono::Utc;
use contracts::domain::a002_coupon::Coupon;
use contracts::domain::a003_customer::Address;
use contracts::domain::a004_order::PaymentMethod;
use contracts::domain::a006_cart::{Cart, CheckoutSummary, PlaceOrderRequest};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Адрес по умолчанию, иначе первый
pub fn preselected_address(addresses: &[Address]) -> Option<String> {
    addresses
        .iter()
        .find(|a| a.is_default)
        .or_else(|| addresses.first())
        .map(|a| a.id.clone())
}

/// Почему заказ нельзя отправить прямо сейчас
pub fn checkout_blocker(cart: &Cart, address: Option<&Address>) -> Option<&'static str> {
    if cart.is_empty() {
        return Some("Your cart is empty");
    }
    if address.is_none() {
        return Some("Choose a shipping address");
    }
    None
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let cart = use_cart();
    let navigate = use_navigate();
    let guard = StoredValue::new(MountGuard::new());
    let policy = config().shop.shipping_policy();

    let addresses = RwSignal::new(Vec::<Address>::new());
    let selected_address = RwSignal::new(None::<String>);
    let payment_method = RwSignal::new(PaymentMethod::default());
    let note = RwSignal::new(String::new());
    let coupon_input = RwSignal::new(String::new());
    let coupon = RwSignal::new(None::<Coupon>);
    let coupon_error = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let is_placing = RwSignal::new(false);

    {
        let guard = guard.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_profile().await;
            guard.run(|| match result {
                Ok(profile) => {
                    selected_address.set(preselected_address(&profile.addresses));
                    addresses.set(profile.addresses);
                }
                Err(e) => error.set(Some(e)),
            });
        });
    }

    let summary = Memo::new(move |_| {
        let cart = cart.cart.get();
        coupon.with(|c| CheckoutSummary::compute(&cart, c.as_ref(), &policy, Utc::now()))
    });

    let apply_coupon = move |_| {
        let code = coupon_input.get_untracked().trim().to_uppercase();
        if code.is_empty() {
            coupon.set(None);
            coupon_error.set(None);
            return;
        }
        let guard = guard.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = find_coupon_by_code(&code).await;
            guard.run(|| match result {
                Ok(found) => {
                    coupon.set(Some(found));
                    coupon_error.set(None);
                }
                Err(e) => {
                    coupon.set(None);
                    coupon_error.set(Some(e));
                }
            });
        });
    };

    let remove_coupon = move |_| {
        coupon.set(None);
        coupon_input.set(String::new());
        coupon_error.set(None);
    };

    let place = move |_| {
        let current_cart = cart.cart.get_untracked();
        let address = selected_address.get_untracked().and_then(|id| {
            addresses.with_untracked(|list| list.iter().find(|a| a.id == id).cloned())
        });
        if let Some(reason) = checkout_blocker(&current_cart, address.as_ref()) {
            error.set(Some(reason.to_string()));
            return;
        }
        let Some(address) = address else {
            return;
        };
        let request = PlaceOrderRequest::new(
            &current_cart,
            address,
            payment_method.get_untracked(),
            &summary.get_untracked(),
            &note.get_untracked(),
        );
        is_placing.set(true);
        error.set(None);
        let guard = guard.get_value();
        let navigate = navigate.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = place_order(&request).await;
            guard.run(|| {
                is_placing.set(false);
                match result {
                    Ok(order) => {
                        cart.clear();
                        navigate(&format!("/orders/{}", order.id), Default::default());
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        });
    };

    view! {
        <PageFrame page_id="a006_cart_checkout--storefront" category=PAGE_CAT_STOREFRONT>
            <div class="page__header">
                <A href="/cart" attr:class="page__back">"← Back to cart"</A>
                <h1 class="page__title">"Checkout"</h1>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="checkout">
                <div class="checkout__main">
                    <section class="checkout__section">
                        <h3>"Shipping address"</h3>
                        {move || {
                            let list = addresses.get();
                            if list.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        "No saved addresses. "
                                        <A href="/profile">"Add one in your profile"</A>
                                    </div>
                                }
                                .into_any()
                            } else {
                                list.into_iter().map(|a| {
                                    let id = a.id.clone();
                                    let checked_id = id.clone();
                                    view! {
                                        <label class="address-option">
                                            <input
                                                type="radio"
                                                name="shipping-address"
                                                prop:checked=move || selected_address.get().as_deref() == Some(checked_id.as_str())
                                                on:change=move |_| selected_address.set(Some(id.clone()))
                                            />
                                            <div>
                                                <strong>{a.full_name.clone()}</strong>
                                                " · " {a.phone.clone()}
                                                <div>{a.one_line()}</div>
                                            </div>
                                        </label>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </section>

                    <section class="checkout__section">
                        <h3>"Payment method"</h3>
                        {PaymentMethod::SELECTABLE.into_iter().map(|m| view! {
                            <label class="payment-option">
                                <input
                                    type="radio"
                                    name="payment-method"
                                    prop:checked=move || payment_method.get() == m
                                    on:change=move |_| payment_method.set(m)
                                />
                                {m.display_name()}
                            </label>
                        }).collect_view()}
                    </section>

                    <section class="checkout__section">
                        <h3>"Note"</h3>
                        <textarea
                            placeholder="Delivery instructions (optional)"
                            prop:value=move || note.get()
                            on:input=move |ev| note.set(event_target_value(&ev))
                        ></textarea>
                    </section>
                </div>

                <aside class="checkout__summary">
                    <div class="coupon-field">
                        <input
                            type="text"
                            placeholder="Coupon code"
                            prop:value=move || coupon_input.get()
                            on:input=move |ev| coupon_input.set(event_target_value(&ev))
                        />
                        <button class="button" on:click=apply_coupon>"Apply"</button>
                    </div>
                    {move || coupon_error.get().map(|e| view! { <div class="field-error">{e}</div> })}
                    {move || summary.get().coupon_rejection.map(|r| view! {
                        <div class="field-error">{r.to_string()}</div>
                    })}
                    {move || summary.get().coupon_code.map(|code| view! {
                        <div class="coupon-applied">
                            {format!("Coupon {} applied", code)}
                            <button class="button button--link" on:click=remove_coupon>"Remove"</button>
                        </div>
                    })}

                    <dl class="totals">
                        <dt>{move || format!("Items ({})", cart.item_count())}</dt>
                        <dd>{move || format_money(summary.get().subtotal)}</dd>
                        <Show when=move || { summary.get().discount > 0.0 }>
                            <dt>"Discount"</dt>
                            <dd class="totals__discount">{move || format!("-{}", format_money(summary.get().discount))}</dd>
                        </Show>
                        <dt>"Shipping"</dt>
                        <dd>
                            {move || match summary.get().shipping_fee {
                                fee if fee == 0.0 => "Free".to_string(),
                                fee => format_money(fee),
                            }}
                        </dd>
                        <dt class="totals__grand">"Total"</dt>
                        <dd class="totals__grand">{move || format_money(summary.get().total)}</dd>
                    </dl>

                    <button
                        class="button button--primary button--block"
                        disabled=move || is_placing.get() || cart.cart.with(Cart::is_empty)
                        on:click=place
                    >
                        {move || if is_placing.get() { "Placing order..." } else { "Place order" }}
                    </button>
                </aside>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_cart::CartLine;

    fn address(id: &str, is_default: bool) -> Address {
        Address {
            id: id.into(),
            is_default,
            ..Address::default()
        }
    }

    #[test]
    fn test_preselected_address() {
        assert_eq!(preselected_address(&[]), None);
        assert_eq!(
            preselected_address(&[address("a1", false), address("a2", true)]),
            Some("a2".to_string())
        );
        assert_eq!(
            preselected_address(&[address("a1", false), address("a2", false)]),
            Some("a1".to_string())
        );
    }

    #[test]
    fn test_checkout_blocker() {
        let empty = Cart::default();
        let home = address("a1", true);
        assert_eq!(checkout_blocker(&empty, Some(&home)), Some("Your cart is empty"));

        let cart = Cart {
            lines: vec![CartLine {
                product_id: "p1".into(),
                name: "Banh chung".into(),
                image: None,
                price: 120_000.0,
                quantity: 1,
                stock: None,
            }],
        };
        assert_eq!(checkout_blocker(&cart, None), Some("Choose a shipping address"));
        assert_eq!(checkout_blocker(&cart, Some(&home)), None);
    }
}
