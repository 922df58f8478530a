//! Профиль покупателя: личные данные, пароль, адреса

mod address_book;

pub use address_book::{apply_address_edit, AddressBookSection};

use crate::domain::a003_customer::api::{change_password, fetch_profile, update_profile};
use crate::shared::date_utils::format_date;
use crate::shared::fetch_guard::MountGuard;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STOREFRONT;
use contracts::domain::a003_customer::{AddressBook, ChangePasswordDto, Customer, ProfileDto};
use leptos::prelude::*;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let customer = RwSignal::new(None::<Customer>);
    let profile = RwSignal::new(ProfileDto::default());
    let book = RwSignal::new(AddressBook::default());
    let passwords = RwSignal::new(ChangePasswordDto::default());
    let profile_msg = RwSignal::new(None::<Result<String, String>>);
    let password_msg = RwSignal::new(None::<Result<String, String>>);
    let guard = StoredValue::new(MountGuard::new());

    let apply_customer = move |c: Customer| {
        profile.set(ProfileDto::from_customer(&c));
        book.set(AddressBook::new(c.addresses.clone()));
        customer.set(Some(c));
    };

    {
        let guard = guard.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_profile().await;
            guard.run(|| match result {
                Ok(c) => apply_customer(c),
                Err(e) => profile_msg.set(Some(Err(e))),
            });
        });
    }

    let save_profile = move |_| {
        let dto = profile.get_untracked();
        if let Err(e) = dto.validate() {
            profile_msg.set(Some(Err(e.to_string())));
            return;
        }
        let guard = guard.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = update_profile(&dto).await;
            guard.run(|| match result {
                Ok(c) => {
                    apply_customer(c);
                    profile_msg.set(Some(Ok("Profile updated".to_string())));
                }
                Err(e) => profile_msg.set(Some(Err(e))),
            });
        });
    };

    let save_password = move |_| {
        let dto = passwords.get_untracked();
        if let Err(e) = dto.validate() {
            password_msg.set(Some(Err(e.to_string())));
            return;
        }
        let guard = guard.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = change_password(&dto).await;
            guard.run(|| match result {
                Ok(()) => {
                    passwords.set(ChangePasswordDto::default());
                    password_msg.set(Some(Ok("Password changed".to_string())));
                }
                Err(e) => password_msg.set(Some(Err(e))),
            });
        });
    };

    let message = |msg: RwSignal<Option<Result<String, String>>>| {
        move || {
            msg.get().map(|m| match m {
                Ok(text) => view! { <div class="alert alert--success">{text}</div> }.into_any(),
                Err(text) => view! { <div class="alert alert--error">{text}</div> }.into_any(),
            })
        }
    };

    view! {
        <PageFrame page_id="a003_customer_profile--storefront" category=PAGE_CAT_STOREFRONT>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"My profile"</h1>
                </div>
            </div>

            {move || customer.get().map(|c| view! {
                <div class="profile-summary">
                    <span class="avatar avatar--large">{c.initials()}</span>
                    <div>
                        <div class="profile-summary__name">{c.name.clone()}</div>
                        <div class="table__subtext">{format!("Member since {}", format_date(c.created_at))}</div>
                        <div class="table__subtext">{format!("{} orders", c.total_orders)}</div>
                    </div>
                </div>
            })}

            <section class="profile-section">
                <h2>"Personal details"</h2>
                {message(profile_msg)}
                <div class="form-group">
                    <label>"Name"</label>
                    <input
                        type="text"
                        prop:value=move || profile.with(|p| p.name.clone())
                        on:input=move |ev| profile.update(|p| p.name = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Email"</label>
                    <input
                        type="email"
                        prop:value=move || profile.with(|p| p.email.clone())
                        on:input=move |ev| profile.update(|p| p.email = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Phone"</label>
                    <input
                        type="tel"
                        prop:value=move || profile.with(|p| p.phone.clone())
                        on:input=move |ev| profile.update(|p| p.phone = event_target_value(&ev))
                    />
                </div>
                <button class="button button--primary" on:click=save_profile>"Save"</button>
            </section>

            <section class="profile-section">
                <h2>"Change password"</h2>
                {message(password_msg)}
                <div class="form-group">
                    <label>"Current password"</label>
                    <input
                        type="password"
                        prop:value=move || passwords.with(|p| p.current_password.clone())
                        on:input=move |ev| passwords.update(|p| p.current_password = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"New password"</label>
                    <input
                        type="password"
                        prop:value=move || passwords.with(|p| p.new_password.clone())
                        on:input=move |ev| passwords.update(|p| p.new_password = event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Confirm new password"</label>
                    <input
                        type="password"
                        prop:value=move || passwords.with(|p| p.confirm_password.clone())
                        on:input=move |ev| passwords.update(|p| p.confirm_password = event_target_value(&ev))
                    />
                </div>
                <button class="button button--primary" on:click=save_password>"Change password"</button>
            </section>

            <AddressBookSection book=book />
        </PageFrame>
    }
}
