use crate::domain::common::lenient;
use serde::{Deserialize, Serialize};

/// Роль пользователя, как ее возвращает сервер
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(alias = "user")]
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }

    /// Разбор значения из localStorage; неизвестная строка — не роль
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "customer" | "user" => Some(Role::Customer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default, deserialize_with = "lenient::id", alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(alias = "accessToken")]
    pub token: String,
    /// Роль на верхнем уровне ответа; если ее нет, берется из `user`
    #[serde(default)]
    pub role: Option<Role>,
    pub user: UserInfo,
}

impl LoginResponse {
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or(self.user.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shapes() {
        let r: LoginResponse = serde_json::from_value(serde_json::json!({
            "token": "t1",
            "user": { "_id": "u1", "name": "Admin", "email": "a@shop.vn", "role": "admin" }
        }))
        .unwrap();
        assert_eq!(r.effective_role(), Role::Admin);

        let r: LoginResponse = serde_json::from_value(serde_json::json!({
            "accessToken": "t2",
            "role": "user",
            "user": { "id": 7 }
        }))
        .unwrap();
        assert_eq!(r.token, "t2");
        assert_eq!(r.user.id, "7");
        assert_eq!(r.effective_role(), Role::Customer);
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse(" Admin "), Some(Role::Admin));
        assert_eq!(Role::parse("user"), Some(Role::Customer));
        assert_eq!(Role::parse("root"), None);
    }
}
