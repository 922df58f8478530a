pub mod filter_panel;
pub mod list_controls;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_timeline;
pub mod table;
pub mod ui;

pub use filter_panel::{DateRangeFilter, FilterPanel, FilterSelect, FilterTag};
pub use list_controls::list_toolbar;
pub use pagination_controls::PaginationControls;
pub use stat_card::{IndicatorCard, StatCard};
pub use status_timeline::StatusTimeline;
