use crate::shared::api_utils::{get_json, send_json, Auth, HttpMethod};
use contracts::shared::api::EntityResponse;
use contracts::system::auth::{LoginRequest, LoginResponse, RegisterRequest, Role, UserInfo};

const LOGIN_PATH: &str = "/api/auth/login";
const REGISTER_PATH: &str = "/api/auth/register";
const ME_PATH: &str = "/api/auth/me";

/// Вход покупателя
pub async fn login(email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };
    send_json(HttpMethod::Post, LOGIN_PATH, &request, Auth::Public).await
}

/// Вход в админку: учетная запись без роли admin отклоняется
pub async fn admin_login(email: String, password: String) -> Result<LoginResponse, String> {
    let response = login(email, password).await?;
    if response.effective_role() != Role::Admin {
        return Err("This account has no admin access".to_string());
    }
    Ok(response)
}

pub async fn register(request: RegisterRequest) -> Result<LoginResponse, String> {
    send_json(HttpMethod::Post, REGISTER_PATH, &request, Auth::Public).await
}

/// Текущий покупатель по сохраненному токену
pub async fn get_current_user() -> Result<UserInfo, String> {
    get_json::<EntityResponse<UserInfo>>(ME_PATH, Auth::Customer)
        .await
        .map(EntityResponse::into_inner)
}
