pub mod aggregate;
pub mod list;
pub mod timeline;

pub use aggregate::{
    Order, OrderItem, OrderStats, OrderStatus, OrderTransitionError, PaymentMethod,
    PaymentStatus, StatusChange, UpdateOrderStatusDto,
};
pub use list::order_list_descriptor;
pub use timeline::{build_timeline, progress_percent, StepState, TimelineStep};
