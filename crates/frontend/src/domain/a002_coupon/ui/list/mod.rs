pub mod state;

use self::state::{create_list, usage_label, value_label};
use crate::domain::a002_coupon::api::{delete_coupon, fetch_coupons, toggle_coupon};
use crate::shared::components::list_toolbar;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{format_money, SortableHeaderCell};
use crate::shared::components::ui::badge::{Badge, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use chrono::Utc;
use contracts::domain::a002_coupon::{Coupon, CouponStats};
use contracts::shared::indicators::ValueFormat;
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn CouponList() -> impl IntoView {
    let list = create_list();
    let navigate = use_navigate();
    let pending_delete = RwSignal::new(None::<String>);

    log!("Loading coupons...");
    list.load(fetch_coupons());

    // Счетчики всегда пересчитываются из хранилища
    let stats = Memo::new(move |_| list.with_records(|r| CouponStats::from_records(r, Utc::now())));
    let stat = move |f: fn(&CouponStats) -> usize| {
        Signal::derive(move || Some(f(&stats.get()) as f64))
    };

    let toggle = move |id: String| {
        let request_id = id.clone();
        list.mutate(
            id,
            async move { toggle_coupon(&request_id).await },
            |list, updated| list.replace(updated),
        );
    };

    let remove = move |id: String| {
        pending_delete.set(None);
        let request_id = id.clone();
        let removed_id = id.clone();
        list.mutate(
            id,
            async move { delete_coupon(&request_id).await },
            move |list, ()| list.remove(&removed_id),
        );
    };

    let sort = list.sort_signal();
    let on_sort = Callback::new(move |field: String| list.toggle_sort(&field));

    view! {
        <PageFrame page_id="a002_coupon--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Coupons"</h1>
                    <Badge variant="primary">{move || stats.get().total.to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <button
                        class="button button--primary"
                        on:click=move |_| navigate("/admin/coupons/new", Default::default())
                    >
                        {icon("plus")}
                        " New coupon"
                    </button>
                </div>
            </div>

            <div class="stat-grid">
                <StatCard label="Total" icon_name="coupons" value=stat(|s| s.total) format=ValueFormat::Integer />
                <StatCard label="Active" icon_name="check" value=stat(|s| s.active) format=ValueFormat::Integer />
                <StatCard label="Expired" icon_name="x-circle" value=stat(|s| s.expired) format=ValueFormat::Integer />
                <StatCard label="Used up" icon_name="trending-up" value=stat(|s| s.used) format=ValueFormat::Integer />
            </div>

            <div class="page__content">
                {list_toolbar(list, "Search by code or description...")}

                {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Code" sort_field="code" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Discount" sort_field="discount_value" sort=sort on_sort=on_sort />
                                <TableHeaderCell>"Min order"</TableHeaderCell>
                                <SortableHeaderCell label="Usage" sort_field="used_count" sort=sort on_sort=on_sort />
                                <SortableHeaderCell label="Expires" sort_field="end_date" sort=sort on_sort=on_sort />
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Enabled"</TableHeaderCell>
                                <SortableHeaderCell label="Created" sort_field="created_at" sort=sort on_sort=on_sort />
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || list.page().items
                                key=|c: &Coupon| format!("{}:{}:{}", c.id, c.is_active, c.used_count)
                                children=move |c: Coupon| {
                                    let status = c.status(Utc::now());
                                    let href = format!("/admin/coupons/{}", c.id);
                                    let value = value_label(&c);
                                    let usage = usage_label(&c);
                                    let min_order = format_money(c.min_order_value);
                                    let expires = format_date(c.end_date);
                                    let created = format_date(c.created_at);
                                    let enabled = c.is_active;
                                    let id_toggle = c.id.clone();
                                    let id_delete = c.id.clone();
                                    let id_confirm = c.id.clone();
                                    let id_busy = c.id.clone();
                                    let is_busy = Signal::derive(move || list.is_busy(&id_busy));
                                    let Coupon { code, description, .. } = c;
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <A href=href attr:class="table__link">
                                                    <strong>{code}</strong>
                                                </A>
                                                <div class="table__subtext">{description}</div>
                                            </TableCell>
                                            <TableCell>{value}</TableCell>
                                            <TableCell>{min_order}</TableCell>
                                            <TableCell>{usage}</TableCell>
                                            <TableCell>{expires}</TableCell>
                                            <TableCell>
                                                <StatusBadge
                                                    code=status.code().to_string()
                                                    label=status.display_name().to_string()
                                                />
                                            </TableCell>
                                            <TableCell>
                                                <label class="switch">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=enabled
                                                        disabled=move || is_busy.get()
                                                        on:change=move |_| toggle(id_toggle.clone())
                                                    />
                                                    <span class="switch__slider"></span>
                                                </label>
                                            </TableCell>
                                            <TableCell>{created}</TableCell>
                                            <TableCell>
                                                {move || {
                                                    let id_delete = id_delete.clone();
                                                    let id_confirm = id_confirm.clone();
                                                    if pending_delete.get().as_deref() == Some(id_confirm.as_str()) {
                                                        view! {
                                                            <span class="table__confirm">
                                                                <button class="button button--danger button--small" on:click=move |_| remove(id_confirm.clone())>
                                                                    "Delete"
                                                                </button>
                                                                <button class="button button--small" on:click=move |_| pending_delete.set(None)>
                                                                    "Cancel"
                                                                </button>
                                                            </span>
                                                        }
                                                        .into_any()
                                                    } else {
                                                        view! {
                                                            <button
                                                                class="button button--icon"
                                                                title="Delete"
                                                                disabled=move || is_busy.get()
                                                                on:click=move |_| pending_delete.set(Some(id_delete.clone()))
                                                            >
                                                                {icon("trash")}
                                                            </button>
                                                        }
                                                        .into_any()
                                                    }
                                                }}
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || {
                    let empty = list.page().items.is_empty() && !list.is_loading();
                    empty.then(|| view! { <div class="empty-state">"No coupons match the current filters"</div> })
                }}
            </div>
        </PageFrame>
    }
}
