pub mod dashboard_view;
pub mod modals;
pub mod common;

pub use dashboard_view::DashboardView;
