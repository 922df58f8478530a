pub mod details;
pub mod list;
pub mod my_orders;
pub mod order_items;
pub mod tracking;
