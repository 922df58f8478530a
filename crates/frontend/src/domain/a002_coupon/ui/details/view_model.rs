use super::model::CouponForm;
use crate::domain::a002_coupon::api::{fetch_coupon, save_coupon};
use crate::shared::fetch_guard::MountGuard;
use leptos::prelude::*;

/// Сумма заказа по умолчанию для предпросмотра скидки
const PREVIEW_SUBTOTAL: &str = "500000";

#[derive(Clone)]
pub struct CouponDetailsViewModel {
    pub form: RwSignal<CouponForm>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
    pub preview_subtotal: RwSignal<String>,
    guard: MountGuard,
}

impl CouponDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CouponForm::new_draft()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
            preview_subtotal: RwSignal::new(PREVIEW_SUBTOTAL.to_string()),
            guard: MountGuard::new(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(CouponForm::is_edit)
    }

    /// Загрузка купона для редактирования; `None` — новый купон
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(id) = id else {
            return;
        };
        let form = self.form;
        let error = self.error;
        let guard = self.guard.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_coupon(&id).await;
            guard.run(|| match result {
                Ok(coupon) => form.set(CouponForm::from_coupon(&coupon)),
                Err(e) => error.set(Some(format!("Failed to load coupon: {}", e))),
            });
        });
    }

    /// Скидка для суммы из поля предпросмотра (реактивно)
    pub fn discount_preview(&self) -> (f64, f64) {
        let subtotal = self
            .preview_subtotal
            .with(|raw| raw.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(0.0);
        let discount = self.form.with(|f| f.to_coupon().discount_for(subtotal));
        (subtotal, discount)
    }

    /// Ошибка валидации не отправляет запрос
    pub fn save_command(&self, on_saved: Callback<()>) {
        let coupon = self.form.with_untracked(CouponForm::to_coupon);
        if let Err(e) = coupon.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }
        self.error.set(None);
        self.is_saving.set(true);

        let error = self.error;
        let is_saving = self.is_saving;
        let guard = self.guard.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = save_coupon(&coupon).await;
            guard.run(|| {
                is_saving.set(false);
                match result {
                    Ok(saved) => {
                        log::info!("coupon {} saved", saved.code);
                        on_saved.run(());
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        });
    }
}
