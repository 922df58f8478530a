//! Акции на витрине. По умолчанию показываются только текущие.

use crate::domain::a005_promotion::api::fetch_promotions;
use crate::shared::components::list_toolbar;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::date_utils::{format_date, relative_days};
use crate::shared::components::table::format_percent;
use crate::shared::list_page::ListController;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STOREFRONT;
use chrono::{DateTime, Utc};
use contracts::domain::a005_promotion::{promotion_list_descriptor, Promotion};
use contracts::shared::list_view::ListEngine;
use leptos::prelude::*;
use leptos_router::components::A;

/// Подпись срока действия карточки
pub fn period_label(promotion: &Promotion, now: DateTime<Utc>) -> String {
    match (promotion.start_date, promotion.end_date) {
        (Some(start), _) if start > now => format!("Starts {}", format_date(Some(start))),
        (_, Some(end)) if end >= now => format!("Ends {}", relative_days(end, now)),
        (_, Some(end)) => format!("Ended {}", format_date(Some(end))),
        (_, None) => "No end date".to_string(),
    }
}

#[component]
fn PromotionCard(promotion: Promotion) -> impl IntoView {
    let now = Utc::now();
    let phase = promotion.phase(now);
    let period = period_label(&promotion, now);
    let products = promotion.product_ids.len();

    view! {
        <div class="promotion-card">
            {promotion.banner.clone().map(|src| view! {
                <img class="promotion-card__banner" src=src alt=promotion.title.clone() />
            })}
            <div class="promotion-card__body">
                <div class="promotion-card__header">
                    <h3 class="promotion-card__title">{promotion.title.clone()}</h3>
                    <StatusBadge
                        code=phase.code().to_string()
                        label=phase.display_name().to_string()
                    />
                </div>
                <div class="promotion-card__discount">
                    {format!("-{}", format_percent(promotion.discount_percent))}
                </div>
                <p class="promotion-card__description">{promotion.description.clone()}</p>
                <div class="promotion-card__footer">
                    <span class="promotion-card__period">{period}</span>
                    {(products > 0).then(|| view! {
                        <span class="promotion-card__products">{format!("{} products", products)}</span>
                    })}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn PromotionsPage() -> impl IntoView {
    let list = ListController::new(ListEngine::new(promotion_list_descriptor()));
    list.set_selection("phase", "running".to_string());
    list.load(fetch_promotions());

    view! {
        <PageFrame page_id="a005_promotion--storefront" category=PAGE_CAT_STOREFRONT>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Promotions"</h1>
                </div>
                <div class="page__header-right">
                    <A href="/products" attr:class="button button--secondary">"Shop all products"</A>
                </div>
            </div>

            <div class="page__content">
                {list_toolbar(list, "Search promotions...")}

                {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                {move || {
                    let page = list.page();
                    if page.items.is_empty() {
                        let text = if list.is_loading() { "Loading..." } else { "No promotions right now" };
                        view! { <div class="empty-state">{text}</div> }.into_any()
                    } else {
                        view! {
                            <div class="promotion-grid">
                                {page.items.into_iter().map(|p| view! { <PromotionCard promotion=p /> }).collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_period_label() {
        let now = Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap();
        let base = Promotion {
            is_active: true,
            ..Promotion::default()
        };

        let upcoming = Promotion {
            start_date: Some(now + Duration::days(3)),
            ..base.clone()
        };
        assert_eq!(period_label(&upcoming, now), "Starts 23.01.2025");

        let ended = Promotion {
            end_date: Some(now - Duration::days(1)),
            ..base.clone()
        };
        assert_eq!(period_label(&ended, now), "Ended 19.01.2025");
        assert_eq!(period_label(&base, now), "No end date");
    }
}
