pub mod api;
pub mod indicators;
pub mod list_view;
pub mod stats;
