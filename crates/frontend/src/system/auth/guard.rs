use leptos::prelude::*;

use super::context::use_auth;

#[component]
fn AccessPanel(message: &'static str, login_href: &'static str) -> impl IntoView {
    view! {
        <div class="access-panel">
            <h2 class="access-panel__title">"Sign in required"</h2>
            <p class="access-panel__text">{message}</p>
            <a class="button button--primary" href=login_href>"Sign in"</a>
        </div>
    }
}

/// Страницы админки: нужен токен и роль admin
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_admin())
            fallback=|| view! {
                <AccessPanel
                    message="Admin privileges are required to view this page."
                    login_href="/admin/login"
                />
            }
        >
            {children()}
        </Show>
    }
}

/// Страницы покупателя: нужен токен покупателя
#[component]
pub fn RequireCustomer(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_customer())
            fallback=|| view! {
                <AccessPanel message="Please sign in to continue." login_href="/login" />
            }
        >
            {children()}
        </Show>
    }
}
