//! Токены и роль в localStorage

use crate::shared::storage;
use contracts::system::auth::Role;

const ADMIN_TOKEN_KEY: &str = "adminToken";
const ROLE_KEY: &str = "role";
const CUSTOMER_TOKEN_KEY: &str = "customerToken";

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn get_admin_token() -> Option<String> {
    non_empty(storage::get_item(ADMIN_TOKEN_KEY))
}

pub fn get_role() -> Option<Role> {
    storage::get_item(ROLE_KEY).and_then(|raw| Role::parse(&raw))
}

pub fn save_admin_session(token: &str, role: Role) {
    storage::set_item(ADMIN_TOKEN_KEY, token);
    storage::set_item(ROLE_KEY, role.as_str());
}

pub fn clear_admin_session() {
    storage::remove_item(ADMIN_TOKEN_KEY);
    storage::remove_item(ROLE_KEY);
}

pub fn get_customer_token() -> Option<String> {
    non_empty(storage::get_item(CUSTOMER_TOKEN_KEY))
}

pub fn save_customer_token(token: &str) {
    storage::set_item(CUSTOMER_TOKEN_KEY, token);
}

pub fn clear_customer_token() {
    storage::remove_item(CUSTOMER_TOKEN_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_absent() {
        assert_eq!(non_empty(Some("  ".into())), None);
        assert_eq!(non_empty(Some("abc".into())), Some("abc".into()));
        assert_eq!(non_empty(None), None);
    }
}
