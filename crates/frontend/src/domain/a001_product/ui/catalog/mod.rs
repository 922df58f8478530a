//! Каталог витрины: весь набор товаров загружается один раз,
//! поиск, фильтры и сортировка работают на клиенте.

use super::card::ProductCard;
use crate::domain::a001_product::api::{fetch_products, ProductQuery};
use crate::shared::components::list_controls::list_sort_select;
use crate::shared::components::list_toolbar;
use crate::shared::components::ui::badge::Badge;
use crate::shared::list_page::ListController;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STOREFRONT;
use contracts::domain::a001_product::product_list_descriptor;
use contracts::shared::list_view::ListEngine;
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn ProductCatalogPage() -> impl IntoView {
    let list = ListController::new(ListEngine::new(product_list_descriptor()));

    // Переход из категорий главной: /products?category=food
    let query = use_query_map();
    if let Some(category) = query.with_untracked(|q| q.get("category")) {
        list.set_selection("category", category);
    }

    log!("Loading product catalog...");
    list.load(fetch_products(ProductQuery::default()));

    view! {
        <PageFrame page_id="a001_product_catalog--storefront" category=PAGE_CAT_STOREFRONT>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
                    <Badge variant="primary">
                        {move || list.page().total_count.to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">{list_sort_select(list)}</div>
            </div>

            <div class="page__content">
                {list_toolbar(list, "Search by name, brand or description...")}

                {move || list.error().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                {move || {
                    let page = list.page();
                    if page.items.is_empty() {
                        let text = if list.is_loading() {
                            "Loading products..."
                        } else {
                            "No products match the current filters"
                        };
                        view! { <div class="empty-state">{text}</div> }.into_any()
                    } else {
                        view! {
                            <div class="product-grid">
                                {page.items.into_iter().map(|p| view! { <ProductCard product=p /> }).collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}
