//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.
//! Every request goes through [`get_json`] / [`send_json`] / [`send_empty`]:
//! they attach the bearer token for the requested [`Auth`] scope and turn
//! a non-2xx response into the backend's `{ message }` text.

use crate::shared::config::config;
use crate::system::auth::storage;
use contracts::shared::api::{ApiErrorBody, EntityResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from config when set, otherwise the current window
/// location with the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = config().api.base_url.as_deref() {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config().api.port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/coupons/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Путь к ресурсу с экранированным ID
pub fn resource_path(collection_path: &str, id: &str) -> String {
    format!("{}/{}", collection_path, urlencoding::encode(id))
}

/// Какой токен прикладывать к запросу
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Public,
    Admin,
    Customer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Put,
    Patch,
    Delete,
}

fn builder(method: HttpMethod, url: &str) -> RequestBuilder {
    match method {
        HttpMethod::Post => Request::post(url),
        HttpMethod::Put => Request::put(url),
        HttpMethod::Patch => Request::patch(url),
        HttpMethod::Delete => Request::delete(url),
    }
}

fn with_auth(request: RequestBuilder, auth: Auth) -> RequestBuilder {
    let token = match auth {
        Auth::Public => None,
        Auth::Admin => storage::get_admin_token(),
        Auth::Customer => storage::get_customer_token(),
    };
    match token {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

/// Текст ошибки: `{ message }` сервера, иначе код статуса
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(err) if !err.message.trim().is_empty() => err.message,
        _ => format!("Request failed: {}", status),
    }
}

async fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(error_message(status, &body))
}

/// GET с разбором JSON
pub async fn get_json<T: DeserializeOwned>(path: &str, auth: Auth) -> Result<T, String> {
    let response = with_auth(Request::get(&api_url(path)), auth)
        .header("Cache-Control", "no-cache")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Запрос с JSON-телом; ответ — сущность (в конверте `{ data }` или без него)
pub async fn send_json<B, T>(
    method: HttpMethod,
    path: &str,
    body: &B,
    auth: Auth,
) -> Result<T, String>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = with_auth(builder(method, &api_url(path)), auth)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    check(response)
        .await?
        .json::<EntityResponse<T>>()
        .await
        .map(EntityResponse::into_inner)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Запрос без тела ответа (удаление, действия)
pub async fn send_empty(method: HttpMethod, path: &str, auth: Auth) -> Result<(), String> {
    let response = with_auth(builder(method, &api_url(path)), auth)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_backend_text() {
        assert_eq!(
            error_message(400, r#"{"message":"Coupon code already exists"}"#),
            "Coupon code already exists"
        );
        assert_eq!(error_message(401, r#"{"error":"Unauthorized"}"#), "Unauthorized");
        assert_eq!(error_message(500, "<html>"), "Request failed: 500");
        assert_eq!(error_message(404, r#"{"message":" "}"#), "Request failed: 404");
    }

    #[test]
    fn test_resource_path_escapes_id() {
        assert_eq!(resource_path("/api/coupons", "a b/c"), "/api/coupons/a%20b%2Fc");
    }
}
