use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn StoreFooter() -> impl IntoView {
    let year = Utc::now().year();

    view! {
        <footer class="store-footer">
            <div class="store-footer__links">
                <A href="/products">"Products"</A>
                <A href="/promotions">"Promotions"</A>
                <A href="/orders">"Track an order"</A>
            </div>
            <div class="store-footer__copy">{format!("© {} Tet Market", year)}</div>
        </footer>
    }
}
