use crate::domain::a006_cart::context::use_cart;
use crate::shared::icons::icon;
use crate::shared::theme::{TetToggle, ThemeToggle};
use crate::system::auth::context::{customer_logout, use_auth};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Текст значка корзины; больше 99 не помещается
pub fn cart_badge(count: i64) -> Option<String> {
    match count {
        n if n <= 0 => None,
        n if n > 99 => Some("99+".to_string()),
        n => Some(n.to_string()),
    }
}

#[component]
pub fn StoreHeader() -> impl IntoView {
    let cart = use_cart();
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        customer_logout(set_auth_state);
        navigate("/", Default::default());
    };

    view! {
        <header class="store-header">
            <A href="/" attr:class="store-header__brand">
                {icon("blossom")}
                <span>"Tet Market"</span>
            </A>

            <nav class="store-header__nav">
                <A href="/" exact=true>"Home"</A>
                <A href="/products">"Products"</A>
                <A href="/promotions">"Promotions"</A>
            </nav>

            <div class="store-header__actions">
                <TetToggle />
                <ThemeToggle />

                <A href="/cart" attr:class="store-header__cart">
                    {icon("cart")}
                    {move || cart_badge(cart.item_count()).map(|text| view! {
                        <span class="store-header__badge">{text}</span>
                    })}
                </A>

                <Show
                    when=move || auth_state.with(|s| s.is_customer())
                    fallback=|| view! {
                        <A href="/login" attr:class="button button--primary">"Sign in"</A>
                    }
                >
                    <div class="store-header__account">
                        <A href="/profile" attr:class="store-header__user">
                            {icon("user")}
                            <span>{move || auth_state.with(|s| s.display_name()).unwrap_or_else(|| "Account".to_string())}</span>
                        </A>
                        <A href="/orders">"My orders"</A>
                        <button class="header-icon-btn" title="Sign out" on:click=logout.clone()>
                            {icon("logout")}
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_badge() {
        assert_eq!(cart_badge(0), None);
        assert_eq!(cart_badge(-1), None);
        assert_eq!(cart_badge(3).as_deref(), Some("3"));
        assert_eq!(cart_badge(150).as_deref(), Some("99+"));
    }
}
