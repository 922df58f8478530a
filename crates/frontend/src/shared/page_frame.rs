//! PageFrame — корневая обертка каждой страницы.
//!
//! Ставит на корневой элемент `id` (`"{entity}--{category}"`) и
//! `data-page-category`:
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a002_coupon--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

fn base_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_STOREFRONT => "page page--storefront",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, например `"a004_order--detail"`
    page_id: &'static str,
    /// Одна из констант PAGE_CAT_*
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    let full_class = if class.is_empty() {
        base_class(category).to_string()
    } else {
        format!("{} {class}", base_class(category))
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
