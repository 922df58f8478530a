use crate::dashboards::AdminDashboard;
use crate::domain::a001_product::ui::catalog::ProductCatalogPage;
use crate::domain::a001_product::ui::details::ProductDetailsPage;
use crate::domain::a001_product::ui::home::HomePage;
use crate::domain::a002_coupon::ui::details::CouponDetails;
use crate::domain::a002_coupon::ui::list::CouponList;
use crate::domain::a003_customer::ui::list::CustomerList;
use crate::domain::a003_customer::ui::profile::ProfilePage;
use crate::domain::a004_order::ui::details::OrderDetails;
use crate::domain::a004_order::ui::list::OrderList;
use crate::domain::a004_order::ui::my_orders::MyOrdersPage;
use crate::domain::a004_order::ui::tracking::OrderTrackingPage;
use crate::domain::a005_promotion::ui::list::PromotionsPage;
use crate::domain::a006_cart::ui::cart::CartPage;
use crate::domain::a006_cart::ui::checkout::CheckoutPage;
use crate::layout::{AdminLayout, StoreLayout};
use crate::system::auth::guard::RequireCustomer;
use crate::system::pages::{AdminLoginPage, CustomerLoginPage, SettingsPage};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2>"Page not found"</h2>
            <A href="/" attr:class="button button--primary">"Go to the store"</A>
        </div>
    }
}

/// Витрина и админка. Страницы покупателя закрыты `RequireCustomer`,
/// вся админка, кроме входа, закрыта `RequireAdmin` внутри `AdminLayout`.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/admin/login") view=AdminLoginPage />
                <ParentRoute path=path!("/admin") view=AdminLayout>
                    <Route path=path!("") view=|| view! { <Redirect path="/admin/dashboard" /> } />
                    <Route path=path!("dashboard") view=AdminDashboard />
                    <Route path=path!("customers") view=CustomerList />
                    <Route path=path!("orders") view=OrderList />
                    <Route path=path!("orders/:id") view=OrderDetails />
                    <Route path=path!("coupons") view=CouponList />
                    <Route path=path!("coupons/:id") view=CouponDetails />
                    <Route path=path!("settings") view=SettingsPage />
                </ParentRoute>

                <ParentRoute path=path!("") view=StoreLayout>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("products") view=ProductCatalogPage />
                    <Route path=path!("products/:id") view=ProductDetailsPage />
                    <Route path=path!("promotions") view=PromotionsPage />
                    <Route path=path!("cart") view=CartPage />
                    <Route path=path!("login") view=CustomerLoginPage />
                    <Route
                        path=path!("checkout")
                        view=|| view! { <RequireCustomer><CheckoutPage /></RequireCustomer> }
                    />
                    <Route
                        path=path!("orders")
                        view=|| view! { <RequireCustomer><MyOrdersPage /></RequireCustomer> }
                    />
                    <Route
                        path=path!("orders/:id")
                        view=|| view! { <RequireCustomer><OrderTrackingPage /></RequireCustomer> }
                    />
                    <Route
                        path=path!("profile")
                        view=|| view! { <RequireCustomer><ProfilePage /></RequireCustomer> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
