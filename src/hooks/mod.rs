pub mod use_accuracy;
pub mod use_data_status;
pub mod use_fetch;
pub mod use_forecast;
pub mod use_health;
pub mod use_horizon;
pub mod use_upload;
