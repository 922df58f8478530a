pub mod dto;

pub use dto::{DashboardSummary, StatusCount, TopProduct};
