use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::shared::fetch_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::api;
use crate::system::auth::context::{apply_admin_login, apply_customer_login, use_auth};
use contracts::domain::a003_customer::aggregate::is_valid_email;
use contracts::domain::a003_customer::{ChangePasswordDto, ProfileValidationError};
use contracts::system::auth::RegisterRequest;

/// Проверка формы входа/регистрации до отправки
pub fn validate_credentials(
    register: bool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<(), ProfileValidationError> {
    if register && name.trim().chars().count() < 2 {
        return Err(ProfileValidationError::NameTooShort);
    }
    if !is_valid_email(email) {
        return Err(ProfileValidationError::InvalidEmail);
    }
    if password.chars().count() < ChangePasswordDto::MIN_LENGTH {
        return Err(ProfileValidationError::PasswordTooShort(
            ChangePasswordDto::MIN_LENGTH,
        ));
    }
    Ok(())
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let guard = StoredValue::new(MountGuard::new());

    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();
        if let Err(e) = validate_credentials(false, "", &email_val, &password_val) {
            set_error_message.set(Some(e.to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        let guard = guard.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::admin_login(email_val, password_val).await;
            guard.run(|| match result {
                Ok(response) => {
                    apply_admin_login(set_auth_state, &response);
                    set_is_loading.set(false);
                    navigate("/admin/dashboard", Default::default());
                }
                Err(e) => {
                    set_error_message.set(Some(e));
                    set_is_loading.set(false);
                }
            });
        });
    };

    view! {
        <PageFrame page_id="sys_admin_login--system" category=PAGE_CAT_SYSTEM class="login-container">
            <div class="login-box">
                <h1>"Admin Console"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </PageFrame>
    }
}

/// Вход и регистрация покупателя
#[component]
pub fn CustomerLoginPage() -> impl IntoView {
    let (is_register, set_is_register) = signal(false);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);
    let guard = StoredValue::new(MountGuard::new());

    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let register = is_register.get_untracked();
        let name_val = name.get_untracked();
        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if let Err(e) = validate_credentials(register, &name_val, &email_val, &password_val) {
            set_error_message.set(Some(e.to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        let guard = guard.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = if register {
                api::register(RegisterRequest {
                    name: name_val.trim().to_string(),
                    email: email_val,
                    password: password_val,
                })
                .await
            } else {
                api::login(email_val, password_val).await
            };
            guard.run(|| {
                set_is_loading.set(false);
                match result {
                    Ok(response) => {
                        apply_customer_login(set_auth_state, &response);
                        navigate("/", Default::default());
                    }
                    Err(e) => set_error_message.set(Some(e)),
                }
            });
        });
    };

    view! {
        <PageFrame page_id="sys_customer_login--system" category=PAGE_CAT_SYSTEM class="login-container">
            <div class="login-box">
                <h2>{move || if is_register.get() { "Create account" } else { "Sign in" }}</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Show when=move || is_register.get()>
                        <div class="form-group">
                            <label for="name">"Full name"</label>
                            <input
                                type="text"
                                id="name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || match (is_loading.get(), is_register.get()) {
                            (true, _) => "Please wait...",
                            (false, true) => "Create account",
                            (false, false) => "Sign in",
                        }}
                    </button>
                </form>

                <button
                    class="button button--ghost login-switch"
                    on:click=move |_| {
                        set_error_message.set(None);
                        set_is_register.update(|r| *r = !*r);
                    }
                >
                    {move || if is_register.get() {
                        "Already have an account? Sign in"
                    } else {
                        "New here? Create an account"
                    }}
                </button>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credentials() {
        assert_eq!(validate_credentials(false, "", "a@b.vn", "secret1"), Ok(()));
        assert_eq!(
            validate_credentials(false, "", "not-an-email", "secret1"),
            Err(ProfileValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_credentials(false, "", "a@b.vn", "123"),
            Err(ProfileValidationError::PasswordTooShort(6))
        );
        assert_eq!(
            validate_credentials(true, "A", "a@b.vn", "secret1"),
            Err(ProfileValidationError::NameTooShort)
        );
    }
}
