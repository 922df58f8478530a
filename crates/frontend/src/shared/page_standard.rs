//! Категории страниц.
//!
//! Каждая страница объявляет:
//!   - HTML `id` в формате `{entity}--{category}` (например `"a002_coupon--list"`)
//!   - `data-page-category` с одной из констант ниже
//!
//! По `id` из DOM-инспектора легко найти каталог `domain/a002_coupon/`.

/// Список записей: таблица с фильтрами и пагинацией.
pub const PAGE_CAT_LIST: &str = "list";

/// Карточка или форма одной записи.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Аналитическая панель.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Системная страница (вход, настройки).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Витрина магазина: свободная верстка.
pub const PAGE_CAT_STOREFRONT: &str = "storefront";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_STOREFRONT,
];

/// Проверка формата `{entity}--{category}`
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a002_coupon--list"));
        assert!(is_valid_page_id("d400_admin_summary--dashboard"));
        assert!(!is_valid_page_id("a002_coupon"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_coupon--grid"));
    }
}
