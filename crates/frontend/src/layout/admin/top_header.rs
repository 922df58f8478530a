//! Верхняя панель админки: заголовок, темы, выход

use crate::shared::icons::icon;
use crate::shared::theme::{TetToggle, ThemeToggle};
use crate::system::auth::context::{admin_logout, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        admin_logout(set_auth_state);
        navigate("/admin/login", Default::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Storefront Admin"</span>
            </div>

            <div class="top-header__actions">
                <TetToggle />
                <ThemeToggle />

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || if auth_state.with(|s| s.is_admin()) { "Administrator" } else { "Guest" }}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
