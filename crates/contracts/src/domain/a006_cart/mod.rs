pub mod aggregate;
pub mod checkout;

pub use aggregate::{Cart, CartLine, MAX_LINE_QUANTITY};
pub use checkout::{CheckoutSummary, PlaceOrderItem, PlaceOrderRequest, ShippingPolicy};
