//! Location selection: coordinate parsing and the clickable world frame.

use crate::config::Config;

/// Coordinates chosen by the user, in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Default for Coordinates {
    fn default() -> Self {
        Self {
            lat: Config::DEFAULT_LATITUDE,
            lon: Config::DEFAULT_LONGITUDE,
        }
    }
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn with_lat(self, lat: f64) -> Self {
        Self { lat, ..self }
    }

    pub fn with_lon(self, lon: f64) -> Self {
        Self { lon, ..self }
    }

    /// Short form shown under the map
    pub fn display(&self) -> String {
        format!("{:.4}°, {:.4}°", self.lat, self.lon)
    }
}

/// Value shown in a coordinate text input
pub fn input_value(value: f64) -> String {
    format!("{value:.6}")
}

fn parse_bounded(input: &str, limit: f64) -> Option<f64> {
    let value: f64 = input.trim().parse().ok()?;
    (value.is_finite() && value.abs() <= limit).then_some(value)
}

/// Parses latitude text input; `None` keeps the previous value.
pub fn parse_latitude(input: &str) -> Option<f64> {
    parse_bounded(input, 90.0)
}

/// Parses longitude text input; `None` keeps the previous value.
pub fn parse_longitude(input: &str) -> Option<f64> {
    parse_bounded(input, 180.0)
}

/// Equirectangular frame: x spans -180..180 left to right, y spans 90..-90 top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapFrame {
    pub width: f64,
    pub height: f64,
}

impl MapFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Coordinates under a click at `(x, y)` pixels from the frame's top-left corner.
    pub fn coordinates_at(&self, x: f64, y: f64) -> Option<Coordinates> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        let fx = (x / self.width).clamp(0.0, 1.0);
        let fy = (y / self.height).clamp(0.0, 1.0);
        Some(Coordinates::new(90.0 - fy * 180.0, fx * 360.0 - 180.0))
    }

    /// Pixel position of `coords` inside the frame
    pub fn position_of(&self, coords: Coordinates) -> (f64, f64) {
        let x = (coords.lon + 180.0) / 360.0 * self.width;
        let y = (90.0 - coords.lat) / 180.0 * self.height;
        (x, y)
    }
}
