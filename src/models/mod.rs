pub mod accuracy;
pub mod error;
pub mod forecast;
pub mod status;
pub mod upload;
