use crate::domain::a004_order::api::fetch_orders;
use crate::shared::components::list_toolbar;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::badge::{Badge, StatusBadge};
use crate::shared::date_utils::format_datetime;
use crate::shared::list_page::ListController;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_order::{order_list_descriptor, Order, OrderStats, OrderStatus};
use contracts::shared::indicators::ValueFormat;
use contracts::shared::list_view::{ListEngine, ALL};
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

#[component]
pub fn OrderList() -> impl IntoView {
    let list = ListController::new(ListEngine::new(order_list_descriptor()));

    log!("Loading orders...");
    list.load(fetch_orders());

    let stats = Memo::new(move |_| list.with_records(OrderStats::from_records));
    let sort = list.sort_signal();
    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a004_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                    <Badge variant="primary">{move || stats.get().total.to_string()}</Badge>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Revenue"
                    icon_name="dollar-sign"
                    value=Signal::derive(move || Some(stats.get().revenue))
                    format=ValueFormat::Money
                    subtitle=Signal::derive(|| Some("Excluding cancelled".to_string()))
                />
                <StatCard
                    label="Pending"
                    icon_name="orders"
                    value=Signal::derive(move || Some(stats.get().pending as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Shipping"
                    icon_name="truck"
                    value=Signal::derive(move || Some(stats.get().shipping as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Completion rate"
                    icon_name="trending-up"
                    value=Signal::derive(move || Some(stats.get().completion_rate))
                    format=ValueFormat::Percent { decimals: 1 }
                />
            </div>

            <div class="status-chips">
                {OrderStatus::ALL.into_iter().map(|status| view! {
                    <button
                        class=move || {
                            if list.selection("status").get() == status.code() {
                                "status-chip status-chip--active"
                            } else {
                                "status-chip"
                            }
                        }
                        on:click=move |_| {
                            let next = if list.selection("status").get_untracked() == status.code() {
                                ALL
                            } else {
                                status.code()
                            };
                            list.set_selection("status", next.to_string());
                        }
                    >
                        {status.display_name()}
                        <span class="status-chip__count">{move || stats.get().count_for(status)}</span>
                    </button>
                }).collect_view()}
            </div>

            <div class="page__content">
                {list_toolbar(list, "Search by order number, customer name, email or phone...")}

                {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Order" sort_field="order_number" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Customer" sort_field="customer_name" sort=sort on_sort=on_sort />
                                <TableHeaderCell>"Items"</TableHeaderCell>
                                <SortableHeaderCell label="Total" sort_field="total" sort=sort on_sort=on_sort align="right" />
                                <TableHeaderCell>"Payment"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <SortableHeaderCell label="Date" sort_field="created_at" sort=sort on_sort=on_sort />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.page().items
                                key=|o: &Order| format!("{}:{}:{}", o.id, o.status.code(), o.payment_status.code())
                                children=move |o: Order| {
                                    let href = format!("/admin/orders/{}", o.id);
                                    let number = o.display_number();
                                    let items = o.item_count();
                                    let total = o.total;
                                    let payment_method = o.payment_method.display_name();
                                    let payment_code = o.payment_status.code().to_string();
                                    let payment_label = o.payment_status.display_name().to_string();
                                    let status_code = o.status.code().to_string();
                                    let status_label = o.status.display_name().to_string();
                                    let created = format_datetime(o.created_at);
                                    let Order { customer_name, customer_email, .. } = o;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <A href=href attr:class="table__link">{number}</A>
                                            </TableCell>
                                            <TableCell>
                                                <div>{customer_name}</div>
                                                <div class="table__subtext">{customer_email}</div>
                                            </TableCell>
                                            <TableCell>{items}</TableCell>
                                            <TableCellMoney value=Signal::stored(Some(total)) bold=true />
                                            <TableCell>
                                                <div>{payment_method}</div>
                                                <StatusBadge code=payment_code label=payment_label />
                                            </TableCell>
                                            <TableCell>
                                                <StatusBadge code=status_code label=status_label />
                                            </TableCell>
                                            <TableCell>{created}</TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
