//! Обертка над localStorage. Ошибки хранилища не фатальны: чтение дает `None`,
//! запись пишет предупреждение в консоль.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn set_item(key: &str, value: &str) {
    match get_local_storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage: failed to write '{}'", key);
            }
        }
        None => log::warn!("localStorage is not available"),
    }
}

pub fn remove_item(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Читает JSON; битое значение удаляется и считается отсутствующим
pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("localStorage: dropping malformed '{}': {}", key, e);
            remove_item(key);
            None
        }
    }
}

pub fn set_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => set_item(key, &raw),
        Err(e) => log::warn!("localStorage: failed to serialize '{}': {}", key, e),
    }
}
