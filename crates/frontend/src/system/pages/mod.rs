pub mod login;
pub mod settings;

pub use login::{AdminLoginPage, CustomerLoginPage};
pub use settings::SettingsPage;
