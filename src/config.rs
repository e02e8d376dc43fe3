/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Path prefix of the forecast API, relative to the page origin
    pub const API_BASE_PATH: &'static str = "/api";

    /// Base URL used when no browser origin is available (native builds, tests)
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8000/api";

    /// Area queried when the caller does not specify one
    pub const DEFAULT_AREA: &'static str = "tokyo";

    /// Forecast horizon in hours
    pub const DEFAULT_HOURS: u32 = 48;

    /// Accuracy look-back window in days
    pub const DEFAULT_DAYS: u32 = 7;

    /// Delay before the chart redraws after the window stops resizing
    pub const RESIZE_DEBOUNCE_MS: u32 = 150;

    /// Roughly how many x-axis labels the forecast chart shows
    pub const CHART_LABEL_COUNT: usize = 12;

    #[cfg(debug_assertions)]
    pub const LOG_LEVEL: log::Level = log::Level::Debug;

    #[cfg(not(debug_assertions))]
    pub const LOG_LEVEL: log::Level = log::Level::Info;
}
