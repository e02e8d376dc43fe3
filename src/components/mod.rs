pub mod accuracy_panel;
pub mod dashboard;
pub mod data_status_panel;
pub mod forecast_chart;
pub mod health_badge;
pub mod horizon_selector;
pub mod upload_panel;

pub use dashboard::Dashboard;
pub use health_badge::HealthBadge;
