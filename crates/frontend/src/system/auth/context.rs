use contracts::system::auth::{LoginResponse, Role, UserInfo};
use leptos::prelude::*;

use super::{api, storage};

/// Сессии админки и покупателя живут независимо
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub admin_token: Option<String>,
    pub role: Option<Role>,
    pub customer_token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthState {
    fn from_storage() -> Self {
        Self {
            admin_token: storage::get_admin_token(),
            role: storage::get_role(),
            customer_token: storage::get_customer_token(),
            user: None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.admin_token.is_some() && self.role == Some(Role::Admin)
    }

    pub fn is_customer(&self) -> bool {
        self.customer_token.is_some()
    }

    pub fn display_name(&self) -> Option<String> {
        self.user
            .as_ref()
            .map(|u| if u.name.is_empty() { u.email.clone() } else { u.name.clone() })
    }
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::from_storage());

    // профиль покупателя по сохраненному токену; невалидный токен сбрасывается
    Effect::new(move |_| {
        if auth_state.with_untracked(|s| s.customer_token.is_none()) {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::get_current_user().await {
                Ok(user) => set_auth_state.update(|s| s.user = Some(user)),
                Err(e) => {
                    log::warn!("customer session restore failed: {}", e);
                    storage::clear_customer_token();
                    set_auth_state.update(|s| {
                        s.customer_token = None;
                        s.user = None;
                    });
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

pub fn is_admin() -> bool {
    let (auth_state, _) = use_auth();
    auth_state.with(AuthState::is_admin)
}

/// Сохраняет сессию админки после успешного входа
pub fn apply_admin_login(set_auth_state: WriteSignal<AuthState>, response: &LoginResponse) {
    let role = response.effective_role();
    storage::save_admin_session(&response.token, role);
    set_auth_state.update(|s| {
        s.admin_token = Some(response.token.clone());
        s.role = Some(role);
    });
}

/// Сохраняет сессию покупателя после входа или регистрации
pub fn apply_customer_login(set_auth_state: WriteSignal<AuthState>, response: &LoginResponse) {
    storage::save_customer_token(&response.token);
    set_auth_state.update(|s| {
        s.customer_token = Some(response.token.clone());
        s.user = Some(response.user.clone());
    });
}

pub fn admin_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_admin_session();
    set_auth_state.update(|s| {
        s.admin_token = None;
        s.role = None;
    });
}

pub fn customer_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_customer_token();
    set_auth_state.update(|s| {
        s.customer_token = None;
        s.user = None;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_requires_token_and_role() {
        let mut state = AuthState {
            admin_token: Some("t".into()),
            role: Some(Role::Customer),
            ..AuthState::default()
        };
        assert!(!state.is_admin());
        state.role = Some(Role::Admin);
        assert!(state.is_admin());
        state.admin_token = None;
        assert!(!state.is_admin());
        assert!(!state.is_customer());
    }
}
