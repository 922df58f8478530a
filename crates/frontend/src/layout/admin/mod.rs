//! Оболочка админки: боковое меню, верхняя панель, содержимое маршрута

pub mod sidebar;
pub mod top_header;

use crate::system::auth::guard::RequireAdmin;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use sidebar::Sidebar;
use top_header::TopHeader;

#[component]
pub fn AdminLayout() -> impl IntoView {
    view! {
        <RequireAdmin>
            <div class="app-layout">
                <TopHeader />
                <div class="app-body">
                    <aside class="app-sidebar">
                        <Sidebar />
                    </aside>
                    <main class="app-main">
                        <Outlet />
                    </main>
                </div>
            </div>
        </RequireAdmin>
    }
}
