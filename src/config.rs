use crate::models::calendar::Month;

/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Climate-analysis backend; override at build time with `CLIMATE_API_BASE_URL`
    pub const API_BASE_URL: &'static str = match option_env!("CLIMATE_API_BASE_URL") {
        Some(url) => url,
        None => "http://localhost:8000",
    };

    /// Version segment of the analysis endpoint path
    pub const API_VERSION: &'static str = "v1";

    /// Initial map location (Maceió, Brazil)
    pub const DEFAULT_LATITUDE: f64 = -9.665;
    pub const DEFAULT_LONGITUDE: f64 = -35.735;

    /// Initial date to analyse
    pub const DEFAULT_DAY: u32 = 4;
    pub const DEFAULT_MONTH: Month = Month::October;

    /// Initial slider values
    pub const DEFAULT_IDEAL_TEMPERATURE: f64 = 25.0;
    pub const DEFAULT_IDEAL_RAIN: f64 = 0.0;
    pub const DEFAULT_IDEAL_WIND_SPEED: f64 = 5.0;
    pub const DEFAULT_IDEAL_HUMIDITY: f64 = 60.0;
}
