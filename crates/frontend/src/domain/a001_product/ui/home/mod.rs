//! Главная витрины: текущие акции, категории, хиты продаж

use super::card::ProductCard;
use crate::domain::a001_product::api::{fetch_products, ProductQuery};
use crate::domain::a005_promotion::api::fetch_promotions;
use crate::shared::components::table::format_percent;
use crate::shared::fetch_guard::MountGuard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STOREFRONT;
use crate::shared::theme::use_theme;
use chrono::{DateTime, Utc};
use contracts::domain::a001_product::list::CATEGORY_OPTIONS;
use contracts::domain::a001_product::Product;
use contracts::domain::a005_promotion::Promotion;
use leptos::prelude::*;
use leptos_router::components::A;

const BEST_SELLERS: usize = 8;

/// Хиты продаж: только доступные к покупке, по убыванию продаж
pub fn best_sellers(products: &[Product], limit: usize) -> Vec<Product> {
    let mut items: Vec<Product> = products.iter().filter(|p| p.is_purchasable()).cloned().collect();
    items.sort_by(|a, b| b.sold.cmp(&a.sold));
    items.truncate(limit);
    items
}

pub fn running_promotions(promotions: &[Promotion], now: DateTime<Utc>) -> Vec<Promotion> {
    promotions.iter().filter(|p| p.is_running(now)).cloned().collect()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme();
    let products = RwSignal::new(Vec::<Product>::new());
    let promotions = RwSignal::new(Vec::<Promotion>::new());
    let guard = MountGuard::new();

    {
        let guard = guard.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_products(ProductQuery::default()).await {
                Ok(items) => {
                    guard.run(|| products.set(best_sellers(&items, BEST_SELLERS)));
                }
                Err(e) => log::warn!("home: products not loaded: {}", e),
            }
        });
    }
    wasm_bindgen_futures::spawn_local(async move {
        match fetch_promotions().await {
            Ok(items) => {
                guard.run(|| promotions.set(running_promotions(&items, Utc::now())));
            }
            Err(e) => log::warn!("home: promotions not loaded: {}", e),
        }
    });

    view! {
        <PageFrame page_id="a001_product_home--storefront" category=PAGE_CAT_STOREFRONT>
            <section class=move || {
                if theme.tet.get() { "hero hero--tet" } else { "hero" }
            }>
                <div class="hero__icon">{icon("blossom")}</div>
                <h1 class="hero__title">
                    {move || if theme.tet.get() { "Happy Lunar New Year" } else { "Welcome to our shop" }}
                </h1>
                <p class="hero__subtitle">"Gifts, treats and decor for every occasion"</p>
                <A href="/products" attr:class="button button--primary">"Shop now"</A>
            </section>

            {move || {
                let running = promotions.get();
                (!running.is_empty()).then(|| view! {
                    <section class="home-section">
                        <div class="home-section__header">
                            <h2>"On sale now"</h2>
                            <A href="/promotions">"All promotions"</A>
                        </div>
                        <div class="promotion-strip">
                            {running.into_iter().map(|p| view! {
                                <A href="/promotions" attr:class="promotion-strip__item">
                                    <span class="promotion-strip__discount">
                                        {format!("-{}", format_percent(p.discount_percent))}
                                    </span>
                                    <span class="promotion-strip__title">{p.title}</span>
                                </A>
                            }).collect_view()}
                        </div>
                    </section>
                })
            }}

            <section class="home-section">
                <h2>"Categories"</h2>
                <div class="category-grid">
                    {CATEGORY_OPTIONS.iter().map(|(code, title)| view! {
                        <A href=format!("/products?category={}", code) attr:class="category-grid__item">
                            {*title}
                        </A>
                    }).collect_view()}
                </div>
            </section>

            <section class="home-section">
                <div class="home-section__header">
                    <h2>"Best sellers"</h2>
                    <A href="/products">"View all"</A>
                </div>
                <div class="product-grid">
                    <For
                        each=move || products.get()
                        key=|p| p.id.clone()
                        children=|p| view! { <ProductCard product=p /> }
                    />
                </div>
            </section>
        </PageFrame>
    }
}
