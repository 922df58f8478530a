use super::model::CouponForm;
use super::view_model::CouponDetailsViewModel;
use crate::shared::components::table::format_money;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a002_coupon::DiscountType;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
pub fn CouponDetails() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let vm = CouponDetailsViewModel::new();

    // /admin/coupons/new не несет ID
    let id = params.with_untracked(|p| p.get("id")).filter(|id| id != "new");
    vm.load_if_needed(id);

    let form = vm.form;
    let back = Callback::new(move |_: ()| navigate("/admin/coupons", Default::default()));

    let text_input = move |label: &'static str,
                           input_type: &'static str,
                           get: fn(&CouponForm) -> String,
                           set: fn(&mut CouponForm, String)| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type=input_type
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </div>
        }
    };

    let error = vm.error;
    let is_saving = vm.is_saving;
    let preview_subtotal = vm.preview_subtotal;
    let vm_title = vm.clone();
    let vm_preview = vm.clone();

    view! {
        <PageFrame page_id="a002_coupon--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if vm_title.is_edit_mode() { "Edit coupon" } else { "New coupon" }}
                    </h1>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-form">
                {text_input("Code", "text", |f| f.code.clone(), |f, v| f.code = v)}
                {text_input("Description", "text", |f| f.description.clone(), |f, v| f.description = v)}

                <div class="form-group">
                    <label>"Discount type"</label>
                    <select
                        prop:value=move || form.with(|f| f.discount_type.code().to_string())
                        on:change=move |ev| {
                            if let Some(t) = DiscountType::from_code(&event_target_value(&ev)) {
                                form.update(|f| f.discount_type = t);
                            }
                        }
                    >
                        <option value="percentage">{DiscountType::Percentage.display_name()}</option>
                        <option value="fixed">{DiscountType::Fixed.display_name()}</option>
                    </select>
                </div>

                {text_input("Discount value", "number", |f| f.discount_value.clone(), |f, v| f.discount_value = v)}
                {text_input("Minimum order value", "number", |f| f.min_order_value.clone(), |f, v| f.min_order_value = v)}
                <Show when=move || form.with(|f| f.discount_type == DiscountType::Percentage)>
                    {text_input("Maximum discount", "number", |f| f.max_discount.clone(), |f, v| f.max_discount = v)}
                </Show>
                {text_input("Usage limit (empty = unlimited)", "number", |f| f.usage_limit.clone(), |f, v| f.usage_limit = v)}
                {text_input("Start date", "date", |f| f.start_date.clone(), |f, v| f.start_date = v)}
                {text_input("End date", "date", |f| f.end_date.clone(), |f, v| f.end_date = v)}

                <div class="form-group form-group--inline">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.with(|f| f.is_active)
                            on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        " Enabled"
                    </label>
                </div>

                <div class="coupon-preview">
                    <h3>"Discount preview"</h3>
                    <div class="form-group">
                        <label>"Order subtotal"</label>
                        <input
                            type="number"
                            prop:value=move || preview_subtotal.get()
                            on:input=move |ev| preview_subtotal.set(event_target_value(&ev))
                        />
                    </div>
                    {
                        move || {
                            let (subtotal, discount) = vm_preview.discount_preview();
                            view! {
                                <div class="coupon-preview__result">
                                    <span>"Discount: " <strong>{format_money(discount)}</strong></span>
                                    <span>"Customer pays: " <strong>{format_money(subtotal - discount)}</strong></span>
                                </div>
                            }
                        }
                    }
                </div>

                <div class="details-actions">
                    <button
                        class="button button--primary"
                        disabled=move || is_saving.get()
                        on:click=move |_| vm.save_command(back)
                    >
                        {move || if is_saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button class="button button--secondary" on:click=move |_| back.run(())>
                        "Cancel"
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}
