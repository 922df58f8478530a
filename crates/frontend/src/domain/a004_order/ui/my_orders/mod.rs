use crate::domain::a004_order::api::fetch_my_orders;
use crate::shared::components::list_controls::{list_pagination, list_sort_select};
use crate::shared::components::table::format_money;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::format_date;
use crate::shared::list_page::ListController;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STOREFRONT;
use contracts::domain::a004_order::{order_list_descriptor, Order, OrderStatus};
use contracts::shared::list_view::{ListEngine, ALL};
use leptos::prelude::*;
use leptos_router::components::A;

/// Короткое описание состава: первая позиция и сколько еще
pub fn items_summary(order: &Order) -> String {
    match order.items.as_slice() {
        [] => "No items".to_string(),
        [only] => format!("{} × {}", only.name, only.quantity),
        [first, rest @ ..] => format!("{} and {} more", first.name, rest.len()),
    }
}

#[component]
pub fn MyOrdersPage() -> impl IntoView {
    let list = ListController::new(ListEngine::new(order_list_descriptor()));
    list.load(fetch_my_orders());

    let status = list.selection("status");

    view! {
        <PageFrame page_id="a004_order_my_orders--storefront" category=PAGE_CAT_STOREFRONT>
            <div class="page__header">
                <h1 class="page__title">"My orders"</h1>
                {list_sort_select(list)}
            </div>

            <div class="status-chips">
                <button
                    class=move || if status.get() == ALL { "status-chip status-chip--active" } else { "status-chip" }
                    on:click=move |_| list.set_selection("status", ALL.to_string())
                >
                    "All"
                </button>
                {OrderStatus::ALL.into_iter().map(|s| view! {
                    <button
                        class=move || if status.get() == s.code() { "status-chip status-chip--active" } else { "status-chip" }
                        on:click=move |_| list.set_selection("status", s.code().to_string())
                    >
                        {s.display_name()}
                    </button>
                }).collect_view()}
            </div>

            {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

            {move || {
                let page = list.page();
                if list.is_loading() && page.items.is_empty() {
                    view! { <div class="empty-state">"Loading orders..."</div> }.into_any()
                } else if page.items.is_empty() {
                    view! {
                        <div class="empty-state">
                            <p>"You have no orders yet"</p>
                            <A href="/products" attr:class="button button--primary">"Start shopping"</A>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="order-cards">
                            {page.items.into_iter().map(|o| {
                                let href = format!("/orders/{}", o.id);
                                let number = o.display_number();
                                let placed = format_date(o.created_at);
                                let status_code = o.status.code().to_string();
                                let status_label = o.status.display_name().to_string();
                                let summary = items_summary(&o);
                                let total = format_money(o.total);
                                view! {
                                    <A href=href attr:class="order-card">
                                        <div class="order-card__header">
                                            <strong>{number}</strong>
                                            <span class="table__subtext">{placed}</span>
                                            <StatusBadge code=status_code label=status_label />
                                        </div>
                                        <div class="order-card__body">
                                            <span>{summary}</span>
                                            <strong>{total}</strong>
                                        </div>
                                    </A>
                                }
                            }).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}

            {list_pagination(list)}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_order::OrderItem;

    fn item(name: &str, quantity: i64) -> OrderItem {
        OrderItem {
            name: name.into(),
            quantity,
            price: 10.0,
            ..OrderItem::default()
        }
    }

    #[test]
    fn test_items_summary() {
        let mut order = Order::default();
        assert_eq!(items_summary(&order), "No items");
        order.items = vec![item("Banh chung", 2)];
        assert_eq!(items_summary(&order), "Banh chung × 2");
        order.items.push(item("Mut", 1));
        order.items.push(item("Tra", 3));
        assert_eq!(items_summary(&order), "Banh chung and 2 more");
    }
}
