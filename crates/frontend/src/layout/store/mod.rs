//! Оболочка витрины: шапка с корзиной, содержимое маршрута, подвал

pub mod footer;
pub mod header;

use footer::StoreFooter;
use header::StoreHeader;
use leptos::prelude::*;
use leptos_router::components::Outlet;

#[component]
pub fn StoreLayout() -> impl IntoView {
    view! {
        <div class="store-layout">
            <StoreHeader />
            <main class="store-main">
                <Outlet />
            </main>
            <StoreFooter />
        </div>
    }
}
