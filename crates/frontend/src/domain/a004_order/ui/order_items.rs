//! Состав и итоги заказа: общие для админки и страницы отслеживания

use crate::shared::components::table::format_money;
use contracts::domain::a004_order::Order;
use leptos::prelude::*;

#[component]
pub fn OrderItemsTable(order: Order) -> impl IntoView {
    let has_discount = order.discount > 0.0;
    view! {
        <div class="order-items">
            <table class="order-items__table">
                <thead>
                    <tr>
                        <th>"Product"</th>
                        <th class="text-right">"Price"</th>
                        <th class="text-right">"Qty"</th>
                        <th class="text-right">"Total"</th>
                    </tr>
                </thead>
                <tbody>
                    {order.items.iter().map(|item| view! {
                        <tr>
                            <td>
                                <div class="order-items__product">
                                    {item.image.clone().map(|src| view! { <img src=src alt="" class="order-items__thumb" /> })}
                                    <span>{item.name.clone()}</span>
                                </div>
                            </td>
                            <td class="text-right">{format_money(item.price)}</td>
                            <td class="text-right">{item.quantity}</td>
                            <td class="text-right">{format_money(item.line_total())}</td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>

            <dl class="order-totals">
                <dt>"Subtotal"</dt>
                <dd>{format_money(order.subtotal)}</dd>
                {has_discount.then(|| view! {
                    <dt>
                        "Discount"
                        {order.coupon_code.clone().map(|c| format!(" ({})", c))}
                    </dt>
                    <dd class="order-totals__discount">{format!("-{}", format_money(order.discount))}</dd>
                })}
                <dt>"Shipping"</dt>
                <dd>
                    {if order.shipping_fee > 0.0 { format_money(order.shipping_fee) } else { "Free".to_string() }}
                </dd>
                <dt class="order-totals__grand">"Total"</dt>
                <dd class="order-totals__grand">{format_money(order.total)}</dd>
            </dl>
        </div>
    }
}
