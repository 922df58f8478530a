pub mod aggregate;
pub mod list;

pub use aggregate::{Promotion, PromotionPhase};
pub use list::promotion_list_descriptor;
