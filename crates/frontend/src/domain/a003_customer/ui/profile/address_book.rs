//! Адресная книга покупателя: список, форма, адрес по умолчанию

use crate::domain::a003_customer::api::save_addresses;
use crate::shared::fetch_guard::MountGuard;
use contracts::domain::a003_customer::{Address, AddressBook, AddressValidationError};
use leptos::prelude::*;

/// Применяет отредактированный адрес к книге после проверки
pub fn apply_address_edit(
    book: &AddressBook,
    address: Address,
) -> Result<AddressBook, AddressValidationError> {
    address.validate()?;
    Ok(if book.get(&address.id).is_some() {
        book.with_updated(address)
    } else {
        book.with_added(address)
    })
}

#[component]
pub fn AddressBookSection(book: RwSignal<AddressBook>) -> impl IntoView {
    let editing = RwSignal::new(None::<Address>);
    let error = RwSignal::new(None::<String>);
    let is_saving = RwSignal::new(false);
    let guard = StoredValue::new(MountGuard::new());

    // Книга меняется локально только после ответа сервера
    let persist = move |next: AddressBook| {
        is_saving.set(true);
        let guard = guard.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            let result = save_addresses(&next).await;
            guard.run(|| {
                is_saving.set(false);
                match result {
                    Ok(customer) => {
                        book.set(AddressBook::new(customer.addresses));
                        editing.set(None);
                        error.set(None);
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        });
    };

    let submit = move |_| {
        let Some(draft) = editing.get_untracked() else {
            return;
        };
        match book.with_untracked(|b| apply_address_edit(b, draft)) {
            Ok(next) => persist(next),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let field = move |label: &'static str,
                      get: fn(&Address) -> String,
                      set: fn(&mut Address, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type="text"
                    prop:value=move || editing.with(|e| e.as_ref().map(get).unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        editing.update(|e| {
                            if let Some(a) = e {
                                set(a, value);
                            }
                        });
                    }
                />
            </div>
        }
    };

    view! {
        <section class="profile-section">
            <div class="profile-section__header">
                <h2>"Addresses"</h2>
                <button
                    class="button button--secondary"
                    on:click=move |_| {
                        error.set(None);
                        editing.set(Some(Address::draft()));
                    }
                >
                    "Add address"
                </button>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="address-list">
                {move || {
                    let addresses = book.with(|b| b.addresses().to_vec());
                    if addresses.is_empty() {
                        return view! { <div class="empty-state">"No saved addresses yet"</div> }.into_any();
                    }
                    addresses
                        .into_iter()
                        .map(|a| {
                            let for_edit = a.clone();
                            let id_default = a.id.clone();
                            let id_remove = a.id.clone();
                            view! {
                                <div class=if a.is_default { "address-card address-card--default" } else { "address-card" }>
                                    <div class="address-card__name">
                                        {a.full_name.clone()} " · " {a.phone.clone()}
                                        {a.is_default.then(|| view! { <span class="badge badge--primary">"Default"</span> })}
                                    </div>
                                    <div class="address-card__line">{a.one_line()}</div>
                                    <div class="address-card__actions">
                                        <button class="button button--small" on:click=move |_| editing.set(Some(for_edit.clone()))>
                                            "Edit"
                                        </button>
                                        {(!a.is_default).then(|| view! {
                                            <button
                                                class="button button--small"
                                                disabled=move || is_saving.get()
                                                on:click=move |_| persist(book.with_untracked(|b| b.with_default(&id_default)))
                                            >
                                                "Set as default"
                                            </button>
                                        })}
                                        <button
                                            class="button button--small button--danger"
                                            disabled=move || is_saving.get()
                                            on:click=move |_| persist(book.with_untracked(|b| b.without(&id_remove)))
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>

            <Show when=move || editing.with(Option::is_some)>
                <div class="address-form">
                    {field("Recipient name", |a| a.full_name.clone(), |a, v| a.full_name = v)}
                    {field("Phone", |a| a.phone.clone(), |a, v| a.phone = v)}
                    {field("Street", |a| a.street.clone(), |a, v| a.street = v)}
                    {field("Ward", |a| a.ward.clone(), |a, v| a.ward = v)}
                    {field("District", |a| a.district.clone(), |a, v| a.district = v)}
                    {field("City", |a| a.city.clone(), |a, v| a.city = v)}
                    <label class="form-group form-group--inline">
                        <input
                            type="checkbox"
                            prop:checked=move || editing.with(|e| e.as_ref().map_or(false, |a| a.is_default))
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                editing.update(|e| {
                                    if let Some(a) = e {
                                        a.is_default = checked;
                                    }
                                });
                            }
                        />
                        " Use as default address"
                    </label>
                    <div class="details-actions">
                        <button class="button button--primary" disabled=move || is_saving.get() on:click=submit>
                            "Save address"
                        </button>
                        <button class="button button--secondary" on:click=move |_| editing.set(None)>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(id: &str) -> Address {
        Address {
            id: id.into(),
            full_name: "Tran Mai".into(),
            phone: "0901234567".into(),
            street: "12 Le Loi".into(),
            city: "Hue".into(),
            ..Address::default()
        }
    }

    #[test]
    fn test_apply_address_edit() {
        let book = AddressBook::new(vec![address("a1")]);

        let bad = Address {
            phone: "123".into(),
            ..address("a2")
        };
        assert_eq!(
            apply_address_edit(&book, bad),
            Err(AddressValidationError::InvalidPhone)
        );

        let added = apply_address_edit(&book, address("a2")).unwrap();
        assert_eq!(added.len(), 2);
        assert_eq!(added.default_address().map(|a| a.id.as_str()), Some("a1"));

        let renamed = Address {
            street: "5 Tran Hung Dao".into(),
            ..address("a1")
        };
        let updated = apply_address_edit(&added, renamed).unwrap();
        assert_eq!(updated.len(), 2);
        assert_eq!(updated.get("a1").map(|a| a.street.as_str()), Some("5 Tran Hung Dao"));
        assert!(updated.get("a1").unwrap().is_default);
    }
}
