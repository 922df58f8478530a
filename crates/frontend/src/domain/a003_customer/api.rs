//! Покупатели: список и блокировка в админке, профиль и адреса на витрине

use crate::shared::api_utils::{get_json, resource_path, send_json, Auth, HttpMethod};
use contracts::domain::a003_customer::{Address, AddressBook, ChangePasswordDto, Customer, ProfileDto};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api::{EntityResponse, ListResponse};
use serde::Serialize;

fn profile_path(tail: &str) -> String {
    format!("{}/{}", Customer::collection_path(), tail)
}

#[derive(Debug, Serialize)]
pub struct AddressesPayload {
    pub addresses: Vec<Address>,
}

/// Адреса для сервера: временные ID черновиков не отправляются
pub fn addresses_payload(book: &AddressBook) -> AddressesPayload {
    AddressesPayload {
        addresses: book
            .addresses()
            .iter()
            .map(|a| Address {
                id: if a.is_draft() { String::new() } else { a.id.clone() },
                ..a.clone()
            })
            .collect(),
    }
}

pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    get_json::<ListResponse<Customer>>(&Customer::collection_path(), Auth::Admin)
        .await
        .map(ListResponse::into_data)
}

/// Блокировка/разблокировка; сервер возвращает обновленную запись
pub async fn toggle_customer_status(id: &str) -> Result<Customer, String> {
    let path = format!("{}/toggle-status", resource_path(&Customer::collection_path(), id));
    send_json(HttpMethod::Patch, &path, &serde_json::json!({}), Auth::Admin).await
}

pub async fn fetch_profile() -> Result<Customer, String> {
    get_json::<EntityResponse<Customer>>(&profile_path("profile"), Auth::Customer)
        .await
        .map(EntityResponse::into_inner)
}

pub async fn update_profile(dto: &ProfileDto) -> Result<Customer, String> {
    send_json(HttpMethod::Put, &profile_path("profile"), dto, Auth::Customer).await
}

pub async fn change_password(dto: &ChangePasswordDto) -> Result<(), String> {
    send_json::<_, serde_json::Value>(HttpMethod::Put, &profile_path("change-password"), dto, Auth::Customer)
        .await
        .map(|_| ())
}

/// Сохранение всей адресной книги; ответ — профиль с адресами от сервера
pub async fn save_addresses(book: &AddressBook) -> Result<Customer, String> {
    send_json(HttpMethod::Put, &profile_path("addresses"), &addresses_payload(book), Auth::Customer).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_ids_are_not_sent() {
        let saved = Address {
            id: "a1".into(),
            full_name: "Lan".into(),
            ..Address::default()
        };
        let book = AddressBook::new(vec![saved]).with_added(Address::draft());
        let payload = addresses_payload(&book);
        assert_eq!(payload.addresses.len(), 2);
        assert_eq!(payload.addresses[0].id, "a1");
        assert_eq!(payload.addresses[1].id, "");
        assert!(payload.addresses[0].is_default);
    }
}
