use crate::domain::a003_customer::api::{fetch_customers, toggle_customer_status};
use crate::shared::components::list_toolbar;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::ui::badge::{Badge, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::list_page::ListController;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use chrono::Utc;
use contracts::domain::a003_customer::{customer_list_descriptor, Customer, CustomerStats};
use contracts::shared::indicators::ValueFormat;
use contracts::shared::list_view::ListEngine;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CustomerList() -> impl IntoView {
    let list = ListController::new(ListEngine::new(customer_list_descriptor()));

    log!("Loading customers...");
    list.load(fetch_customers());

    let stats = Memo::new(move |_| list.with_records(|r| CustomerStats::from_records(r, Utc::now())));

    let toggle = move |id: String| {
        let request_id = id.clone();
        list.mutate(
            id,
            async move { toggle_customer_status(&request_id).await },
            |list, updated| list.replace(updated),
        );
    };

    let sort = list.sort_signal();
    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a003_customer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Customers"</h1>
                    <Badge variant="primary">{move || stats.get().total.to_string()}</Badge>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard
                    label="Total"
                    icon_name="customers"
                    value=Signal::derive(move || Some(stats.get().total as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Active"
                    icon_name="check"
                    value=Signal::derive(move || Some(stats.get().active as f64))
                    format=ValueFormat::Integer
                    subtitle=Signal::derive(move || {
                        Some(format!("{:.0}% of all", stats.get().active_percent))
                    })
                />
                <StatCard
                    label="Blocked"
                    icon_name="x-circle"
                    value=Signal::derive(move || Some(stats.get().blocked as f64))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="New this month"
                    icon_name="user"
                    value=Signal::derive(move || Some(stats.get().new_this_month as f64))
                    format=ValueFormat::Integer
                />
            </div>

            <div class="page__content">
                {list_toolbar(list, "Search by name, email or phone...")}

                {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Customer" sort_field="name" sort=sort on_sort=on_sort />
                                <TableHeaderCell>"Phone"</TableHeaderCell>
                                <SortableHeaderCell label="Orders" sort_field="total_orders" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Total spent" sort_field="total_spent" sort=sort on_sort=on_sort align="right" />
                                <SortableHeaderCell label="Joined" sort_field="created_at" sort=sort on_sort=on_sort />
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.page().items
                                key=|c: &Customer| format!("{}:{}", c.id, c.is_active)
                                children=move |c: Customer| {
                                    let id = c.id.clone();
                                    let id_busy = c.id.clone();
                                    let is_busy = Signal::derive(move || list.is_busy(&id_busy));
                                    let (action, action_class) = if c.is_active {
                                        ("Block", "button button--danger button--small")
                                    } else {
                                        ("Unblock", "button button--small")
                                    };
                                    let initials = c.initials();
                                    let phone = c.phone.clone().unwrap_or_else(|| "—".to_string());
                                    let total_orders = c.total_orders;
                                    let total_spent = c.total_spent;
                                    let joined = format_date(c.created_at);
                                    let status_code = c.status_code().to_string();
                                    let status_label = c.status_display().to_string();
                                    let Customer { name, email, .. } = c;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <div class="customer-cell">
                                                    <span class="avatar">{initials}</span>
                                                    <div>
                                                        <div><strong>{name}</strong></div>
                                                        <div class="table__subtext">{email}</div>
                                                    </div>
                                                </div>
                                            </TableCell>
                                            <TableCell>{phone}</TableCell>
                                            <TableCell class="text-right">{total_orders}</TableCell>
                                            <TableCellMoney value=Signal::stored(Some(total_spent)) />
                                            <TableCell>{joined}</TableCell>
                                            <TableCell>
                                                <StatusBadge code=status_code label=status_label />
                                            </TableCell>
                                            <TableCell>
                                                <button
                                                    class=action_class
                                                    disabled=move || is_busy.get()
                                                    on:click=move |_| toggle(id.clone())
                                                >
                                                    {action}
                                                </button>
                                            </TableCell>
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
