pub mod a001_product;
pub mod a002_coupon;
pub mod a003_customer;
pub mod a004_order;
pub mod a005_promotion;
pub mod a006_cart;
