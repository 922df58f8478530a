use crate::dashboards::d400_admin_summary::api;
use crate::shared::components::stat_card::IndicatorCard;
use crate::shared::components::table::{format_money, format_percent, TableCellMoney};
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::fetch_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d400_admin_summary::DashboardSummary;
use contracts::domain::a004_order::{Order, OrderStatus};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Admin dashboard: KPI cards, order statuses, top products, recent orders
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<DashboardSummary>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let guard = StoredValue::new(MountGuard::new());

    let reload = move || {
        set_loading.set(true);
        set_error.set(None);
        let guard = guard.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::get_dashboard_summary().await;
            guard.run(|| {
                match result {
                    Ok(summary) => set_data.set(Some(summary)),
                    Err(e) => {
                        log::error!("Failed to load dashboard: {}", e);
                        set_error.set(Some(e));
                    }
                }
                set_loading.set(false);
            });
        });
    };

    reload();

    view! {
        <PageFrame page_id="d400_admin_summary--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">"Dashboard"</h1>
                <button class="button" disabled=move || loading.get() on:click=move |_| reload()>
                    {move || if loading.get() { "Loading..." } else { "Refresh" }}
                </button>
            </div>

            {move || error.get().map(|err| view! {
                <div class="alert alert--error">
                    <strong>"Failed to load dashboard: "</strong>
                    {err}
                </div>
            })}

            {move || data.get().map(|summary| {
                let indicators = summary.indicators();
                let recent_orders = summary.recent_orders.clone();
                let breakdown = summary.clone();
                view! {
                    <div class="stat-grid">
                        {indicators.into_iter().map(|i| view! { <IndicatorCard indicator=i /> }).collect_view()}
                    </div>

                    <div class="dashboard__grid">
                        <StatusBreakdown summary=breakdown />
                        <TopProducts summary=summary />
                    </div>

                    <RecentOrders orders=recent_orders />
                }
            })}
        </PageFrame>
    }
}

#[component]
fn StatusBreakdown(summary: DashboardSummary) -> impl IntoView {
    let rows: Vec<(OrderStatus, i64, f64)> = OrderStatus::ALL
        .into_iter()
        .map(|status| (status, summary.count_for(status), summary.status_share(status)))
        .collect();

    view! {
        <section class="dashboard__card">
            <h3>"Orders by status"</h3>
            <div class="status-bars">
                {rows.into_iter().map(|(status, count, share)| view! {
                    <div class="status-bar">
                        <div class="status-bar__label">
                            <StatusBadge code=status.code().to_string() label=status.display_name().to_string() />
                            <span>{count}</span>
                        </div>
                        <div class="status-bar__track">
                            <div
                                class=format!("status-bar__fill status-bar__fill--{}", status.code())
                                style=format!("width: {:.1}%", share)
                            ></div>
                        </div>
                        <span class="status-bar__share">{format_percent(share)}</span>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TopProducts(summary: DashboardSummary) -> impl IntoView {
    // (название, продано, выручка, доля)
    let rows: Vec<(String, i64, f64, f64)> = summary
        .top_products
        .iter()
        .map(|p| (p.name.clone(), p.sold, p.revenue, summary.product_share(p)))
        .collect();

    if rows.is_empty() {
        return view! {
            <section class="dashboard__card">
                <h3>"Top products"</h3>
                <div class="empty-state">"No sales yet"</div>
            </section>
        }
        .into_any();
    }

    view! {
        <section class="dashboard__card">
            <h3>"Top products"</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Product"</TableHeaderCell>
                        <TableHeaderCell>"Sold"</TableHeaderCell>
                        <TableHeaderCell>"Revenue"</TableHeaderCell>
                        <TableHeaderCell>"Share"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows.into_iter().map(|(name, sold, revenue, share)| view! {
                        <TableRow>
                            <TableCell>{name}</TableCell>
                            <TableCell class="text-right">{sold}</TableCell>
                            <TableCellMoney value=Signal::stored(Some(revenue)) />
                            <TableCell class="text-right">{format_percent(share)}</TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
        </section>
    }
    .into_any()
}

#[component]
fn RecentOrders(orders: Vec<Order>) -> impl IntoView {
    view! {
        <section class="dashboard__card">
            <div class="dashboard__card-header">
                <h3>"Recent orders"</h3>
                <A href="/admin/orders" attr:class="button button--link">"View all"</A>
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Order"</TableHeaderCell>
                        <TableHeaderCell>"Customer"</TableHeaderCell>
                        <TableHeaderCell>"Total"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Date"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {orders.into_iter().map(|o| {
                        let href = format!("/admin/orders/{}", o.id);
                        let number = o.display_number();
                        let total = format_money(o.total);
                        let status_code = o.status.code().to_string();
                        let status_label = o.status.display_name().to_string();
                        let created = format_datetime(o.created_at);
                        let customer = o.customer_name;
                        view! {
                            <TableRow>
                                <TableCell>
                                    <A href=href attr:class="table__link">{number}</A>
                                </TableCell>
                                <TableCell>{customer}</TableCell>
                                <TableCell class="text-right">{total}</TableCell>
                                <TableCell>
                                    <StatusBadge code=status_code label=status_label />
                                </TableCell>
                                <TableCell>{created}</TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </section>
    }
}
