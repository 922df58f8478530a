use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

const MENU: &[MenuItem] = &[
    MenuItem { path: "/admin/dashboard", label: "Dashboard", icon: "dashboard" },
    MenuItem { path: "/admin/customers", label: "Customers", icon: "customers" },
    MenuItem { path: "/admin/orders", label: "Orders", icon: "orders" },
    MenuItem { path: "/admin/coupons", label: "Coupons", icon: "coupons" },
    MenuItem { path: "/admin/settings", label: "Settings", icon: "settings" },
];

/// Пункт активен на своей странице и на вложенных
pub fn is_active_path(current: &str, item: &str) -> bool {
    let current = current.trim_end_matches('/');
    current == item || current.starts_with(&format!("{item}/"))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="app-sidebar__content">
            <div class="app-sidebar__brand">{icon("blossom")} <span>"Shop admin"</span></div>
            {MENU.iter().map(|item| {
                let path = item.path;
                view! {
                    <A
                        href=path
                        attr:class=move || {
                            if location.pathname.with(|p| is_active_path(p, path)) {
                                "app-sidebar__item app-sidebar__item--active"
                            } else {
                                "app-sidebar__item"
                            }
                        }
                    >
                        <div class="app-sidebar__item-content">
                            {icon(item.icon)}
                            <span>{item.label}</span>
                        </div>
                    </A>
                }
            }).collect_view()}
            <div class="app-sidebar__footer">
                <A href="/" attr:class="app-sidebar__item">
                    <div class="app-sidebar__item-content">
                        {icon("chevron-left")}
                        <span>"Back to store"</span>
                    </div>
                </A>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_path() {
        assert!(is_active_path("/admin/dashboard/", "/admin/dashboard"));
        assert!(!is_active_path("/admin", "/admin/dashboard"));
        assert!(is_active_path("/admin/orders/665f", "/admin/orders"));
        assert!(!is_active_path("/admin/ordersx", "/admin/orders"));
        assert!(!is_active_path("/admin/coupons", "/admin/customers"));
    }
}
