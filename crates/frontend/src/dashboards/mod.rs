pub mod d400_admin_summary;

pub use d400_admin_summary::ui::AdminDashboard;
