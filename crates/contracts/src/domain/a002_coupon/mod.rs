pub mod aggregate;
pub mod list;

pub use aggregate::{
    Coupon, CouponRejection, CouponStats, CouponStatus, CouponValidationError, DiscountType,
};
pub use list::coupon_list_descriptor;
