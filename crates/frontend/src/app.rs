use crate::domain::a006_cart::context::CartProvider;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ThemeProvider>
            <AuthProvider>
                <CartProvider>
                    <AppRoutes />
                </CartProvider>
            </AuthProvider>
        </ThemeProvider>
    }
}
