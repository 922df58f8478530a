//! Карточка заказа в админке: состав, покупатель, смена статуса

use crate::domain::a004_order::api::{fetch_order, update_order_status};
use crate::domain::a004_order::ui::order_items::OrderItemsTable;
use crate::shared::api_utils::Auth;
use crate::shared::components::status_timeline::StatusTimeline;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::fetch_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a004_order::{Order, OrderStatus, UpdateOrderStatusDto};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

/// Тело запроса смены статуса после проверки правил перехода
pub fn status_update(
    order: &Order,
    next: OrderStatus,
    note: &str,
) -> Result<UpdateOrderStatusDto, String> {
    order.check_transition(next).map_err(|e| e.to_string())?;
    let note = note.trim();
    Ok(UpdateOrderStatusDto {
        status: next,
        note: (!note.is_empty()).then(|| note.to_string()),
    })
}

#[component]
pub fn OrderDetails() -> impl IntoView {
    let params = use_params_map();
    let order = RwSignal::new(None::<Order>);
    let error = RwSignal::new(None::<String>);
    let next_status = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let is_saving = RwSignal::new(false);
    let guard = StoredValue::new(MountGuard::new());

    Effect::new(move |_| {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        let guard = guard.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_order(&id, Auth::Admin).await;
            guard.run(|| match result {
                Ok(o) => order.set(Some(o)),
                Err(e) => error.set(Some(e)),
            });
        });
    });

    let apply_status = move |_| {
        let Some(current) = order.get_untracked() else {
            return;
        };
        let Some(next) = OrderStatus::from_code(&next_status.get_untracked()) else {
            error.set(Some("Choose a new status".to_string()));
            return;
        };
        let dto = match status_update(&current, next, &note.get_untracked()) {
            Ok(dto) => dto,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        is_saving.set(true);
        let guard = guard.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = update_order_status(&current.id, &dto).await;
            guard.run(|| {
                is_saving.set(false);
                match result {
                    Ok(updated) => {
                        order.set(Some(updated));
                        next_status.set(String::new());
                        note.set(String::new());
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        });
    };

    view! {
        <PageFrame page_id="a004_order--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <A href="/admin/orders" attr:class="page__back">"← Orders"</A>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            {move || match order.get() {
                None => view! { <div class="empty-state">"Loading order..."</div> }.into_any(),
                Some(o) => {
                    let allowed = o.status.allowed_transitions();
                    let address = o.shipping_address.clone();
                    view! {
                        <div class="order-details">
                            <div class="order-details__header">
                                <h1 class="page__title">{format!("Order {}", o.display_number())}</h1>
                                <StatusBadge code=o.status.code().to_string() label=o.status.display_name().to_string() />
                                <span class="table__subtext">{format_datetime(o.created_at)}</span>
                            </div>

                            <StatusTimeline order=Signal::stored(o.clone()) />

                            <div class="order-details__grid">
                                <section class="order-details__card">
                                    <h3>"Customer"</h3>
                                    <div>{o.customer_name.clone()}</div>
                                    <div>{o.customer_email.clone()}</div>
                                    <div>{o.customer_phone.clone().unwrap_or_default()}</div>
                                </section>
                                <section class="order-details__card">
                                    <h3>"Shipping address"</h3>
                                    {match address {
                                        Some(a) => view! {
                                            <div>{a.full_name.clone()} " · " {a.phone.clone()}</div>
                                            <div>{a.one_line()}</div>
                                        }.into_any(),
                                        None => view! { <div class="table__subtext">"Not provided"</div> }.into_any(),
                                    }}
                                </section>
                                <section class="order-details__card">
                                    <h3>"Payment"</h3>
                                    <div>{o.payment_method.display_name()}</div>
                                    <StatusBadge
                                        code=o.payment_status.code().to_string()
                                        label=o.payment_status.display_name().to_string()
                                    />
                                </section>
                            </div>

                            {o.note.clone().map(|n| view! { <div class="order-details__note">{format!("Note: {}", n)}</div> })}

                            <OrderItemsTable order=o.clone() />

                            <section class="order-details__card">
                                <h3>"Update status"</h3>
                                {if allowed.is_empty() {
                                    view! {
                                        <div class="table__subtext">"This order can no longer change status"</div>
                                    }.into_any()
                                } else {
                                    view! {
                                        <div class="status-form">
                                            <select
                                                prop:value=move || next_status.get()
                                                on:change=move |ev| next_status.set(event_target_value(&ev))
                                            >
                                                <option value="">"Select status..."</option>
                                                {allowed.iter().map(|s| view! {
                                                    <option value=s.code()>{s.display_name()}</option>
                                                }).collect_view()}
                                            </select>
                                            <input
                                                type="text"
                                                placeholder="Note (optional)"
                                                prop:value=move || note.get()
                                                on:input=move |ev| note.set(event_target_value(&ev))
                                            />
                                            <button
                                                class="button button--primary"
                                                disabled=move || is_saving.get()
                                                on:click=apply_status
                                            >
                                                "Update"
                                            </button>
                                        </div>
                                    }.into_any()
                                }}
                            </section>
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
    fn test_status_update_follows_rules() {
        let order = Order {
            id: "o1".into(),
            status: OrderStatus::Pending,
            ..Order::default()
        };
        let dto = status_update(&order, OrderStatus::Confirmed, "  called customer ").unwrap();
        assert_eq!(dto.status, OrderStatus::Confirmed);
        assert_eq!(dto.note.as_deref(), Some("called customer"));

        assert!(status_update(&order, OrderStatus::Delivered, "").is_err());
        assert!(status_update(&order, OrderStatus::Pending, "").is_err());

        let done = Order {
            status: OrderStatus::Delivered,
            ..order
        };
        assert_eq!(
            status_update(&done, OrderStatus::Cancelled, ""),
            Err("Order is Delivered and can no longer change status".to_string())
        );
    }
}
