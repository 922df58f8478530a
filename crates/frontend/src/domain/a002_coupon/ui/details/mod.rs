//! Форма купона: создание и редактирование
//!
//! - model.rs: строковая модель формы и ее разбор в `Coupon`
//! - view_model.rs: состояние формы, загрузка и сохранение
//! - view.rs: компонент страницы

mod model;
mod view;
mod view_model;

pub use view::CouponDetails;
pub use view_model::CouponDetailsViewModel;
