pub mod aggregate;
pub mod list;

pub use aggregate::{Product, StockState, DEFAULT_LOW_STOCK_THRESHOLD};
pub use list::product_list_descriptor;
