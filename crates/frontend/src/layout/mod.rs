pub mod admin;
pub mod store;

pub use admin::AdminLayout;
pub use store::StoreLayout;
