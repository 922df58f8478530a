//! Отслеживание заказа покупателем

use crate::domain::a004_order::api::{cancel_order, fetch_order};
use crate::domain::a004_order::ui::order_items::OrderItemsTable;
use crate::shared::api_utils::Auth;
use crate::shared::components::status_timeline::StatusTimeline;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::fetch_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STOREFRONT;
use contracts::domain::a004_order::Order;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

#[component]
pub fn OrderTrackingPage() -> impl IntoView {
    let params = use_params_map();
    let order = RwSignal::new(None::<Order>);
    let error = RwSignal::new(None::<String>);
    let confirm_cancel = RwSignal::new(false);
    let is_cancelling = RwSignal::new(false);
    let guard = StoredValue::new(MountGuard::new());

    Effect::new(move |_| {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        let guard = guard.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_order(&id, Auth::Customer).await;
            guard.run(|| match result {
                Ok(o) => order.set(Some(o)),
                Err(e) => error.set(Some(e)),
            });
        });
    });

    let cancel = move |_| {
        let Some(current) = order.get_untracked() else {
            return;
        };
        if !current.can_cancel_by_customer() {
            return;
        }
        is_cancelling.set(true);
        let guard = guard.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = cancel_order(&current.id).await;
            guard.run(|| {
                is_cancelling.set(false);
                confirm_cancel.set(false);
                match result {
                    Ok(updated) => {
                        order.set(Some(updated));
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        });
    };

    view! {
        <PageFrame page_id="a004_order_tracking--storefront" category=PAGE_CAT_STOREFRONT>
            <div class="page__header">
                <A href="/orders" attr:class="page__back">"← My orders"</A>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || match order.get() {
                None => view! { <div class="empty-state">"Loading order..."</div> }.into_any(),
                Some(o) => {
                    let can_cancel = o.can_cancel_by_customer();
                    view! {
                        <div class="order-details">
                            <div class="order-details__header">
                                <h1 class="page__title">{format!("Order {}", o.display_number())}</h1>
                                <StatusBadge code=o.status.code().to_string() label=o.status.display_name().to_string() />
                                <span class="table__subtext">{format!("Placed {}", format_datetime(o.created_at))}</span>
                            </div>

                            <StatusTimeline order=Signal::stored(o.clone()) />

                            {o.shipping_address.clone().map(|a| view! {
                                <section class="order-details__card">
                                    <h3>"Delivering to"</h3>
                                    <div>{a.full_name.clone()} " · " {a.phone.clone()}</div>
                                    <div>{a.one_line()}</div>
                                </section>
                            })}

                            <section class="order-details__card">
                                <h3>"Payment"</h3>
                                <div>{o.payment_method.display_name()}</div>
                                <StatusBadge
                                    code=o.payment_status.code().to_string()
                                    label=o.payment_status.display_name().to_string()
                                />
                            </section>

                            <OrderItemsTable order=o.clone() />

                            <Show when=move || can_cancel>
                                <div class="order-details__actions">
                                    <Show
                                        when=move || confirm_cancel.get()
                                        fallback=move || view! {
                                            <button
                                                class="button button--danger"
                                                on:click=move |_| confirm_cancel.set(true)
                                            >
                                                "Cancel order"
                                            </button>
                                        }
                                    >
                                        <span>"Cancel this order?"</span>
                                        <button
                                            class="button button--danger"
                                            disabled=move || is_cancelling.get()
                                            on:click=cancel
                                        >
                                            "Yes, cancel"
                                        </button>
                                        <button class="button" on:click=move |_| confirm_cancel.set(false)>
                                            "Keep order"
                                        </button>
                                    </Show>
                                </div>
                            </Show>
                        </div>
                    }
                    .into_any()
                }
            }}
        </PageFrame>
    }
}
