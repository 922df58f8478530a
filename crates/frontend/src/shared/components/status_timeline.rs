use crate::shared::date_utils::format_datetime;
use contracts::domain::a004_order::{build_timeline, progress_percent, Order};
use leptos::prelude::*;

/// Шкала статусов заказа: выполненные, текущий, предстоящие шаги
#[component]
pub fn StatusTimeline(#[prop(into)] order: Signal<Order>) -> impl IntoView {
    let steps = move || order.with(build_timeline);
    let progress = move || order.with(progress_percent);

    view! {
        <div class="status-timeline">
            <div class="status-timeline__bar">
                <div
                    class="status-timeline__fill"
                    style=move || format!("width: {:.0}%", progress())
                ></div>
            </div>
            <ol class="status-timeline__steps">
                {move || steps().into_iter().map(|step| {
                    let class = format!("timeline-step {}", step.state.css_class());
                    view! {
                        <li class=class>
                            <span class="timeline-step__dot"></span>
                            <div class="timeline-step__body">
                                <div class="timeline-step__title">{step.status.display_name()}</div>
                                {step.at.map(|at| view! {
                                    <div class="timeline-step__time">{format_datetime(Some(at))}</div>
                                })}
                                {step.note.map(|note| view! {
                                    <div class="timeline-step__note">{note}</div>
                                })}
                            </div>
                        </li>
                    }
                }).collect_view()}
            </ol>
        </div>
    }
}
