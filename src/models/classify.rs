//! Fixed-threshold labels and comparison text shown in the result panels.

/// Temperature median within this many degrees reads as "close to ideal".
pub const TEMPERATURE_TOLERANCE_C: f64 = 3.0;
/// Wind average within this many m/s reads as "close to ideal".
pub const WIND_TOLERANCE_MS: f64 = 2.0;
/// Humidity average within this many percentage points reads as "close to ideal".
pub const HUMIDITY_TOLERANCE_PERCENT: f64 = 10.0;

/// Yearly temperature std-dev (°C) below which the day is considered consistent.
pub const TEMPERATURE_LOW_VARIABILITY_C: f64 = 2.0;
/// Humidity std-dev (%) below which the day is considered consistent.
pub const HUMIDITY_LOW_VARIABILITY_PERCENT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumidityClass {
    VeryDry,
    Dry,
    Comfortable,
    Humid,
    VeryHumid,
}

impl HumidityClass {
    /// Cutoffs at 30, 50, 70 and 85 percent; each cutoff belongs to the wetter class.
    pub fn from_percent(humidity: f64) -> Self {
        if humidity < 30.0 {
            HumidityClass::VeryDry
        } else if humidity < 50.0 {
            HumidityClass::Dry
        } else if humidity < 70.0 {
            HumidityClass::Comfortable
        } else if humidity < 85.0 {
            HumidityClass::Humid
        } else {
            HumidityClass::VeryHumid
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HumidityClass::VeryDry => "Very dry",
            HumidityClass::Dry => "Dry",
            HumidityClass::Comfortable => "Comfortable",
            HumidityClass::Humid => "Humid",
            HumidityClass::VeryHumid => "Very humid",
        }
    }
}

/// What the average humidity means for how the day feels
pub fn humidity_comfort_note(humidity: f64) -> &'static str {
    if humidity > 70.0 {
        "This can make the heat feel more intense."
    } else if humidity < 40.0 {
        "This can cause respiratory discomfort and dry skin."
    } else {
        "This provides generally comfortable conditions."
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindClass {
    Calm,
    LightBreeze,
    ModerateBreeze,
    StrongBreeze,
    Gale,
}

impl WindClass {
    /// Cutoffs at 2, 5, 8 and 11 m/s.
    pub fn from_speed(speed_ms: f64) -> Self {
        if speed_ms < 2.0 {
            WindClass::Calm
        } else if speed_ms < 5.0 {
            WindClass::LightBreeze
        } else if speed_ms < 8.0 {
            WindClass::ModerateBreeze
        } else if speed_ms < 11.0 {
            WindClass::StrongBreeze
        } else {
            WindClass::Gale
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindClass::Calm => "Calm",
            WindClass::LightBreeze => "Light breeze",
            WindClass::ModerateBreeze => "Moderate breeze",
            WindClass::StrongBreeze => "Strong breeze",
            WindClass::Gale => "Gale",
        }
    }

    /// Speed range shown in the legend
    pub fn range_label(&self) -> &'static str {
        match self {
            WindClass::Calm => "0-2 m/s",
            WindClass::LightBreeze => "2-5 m/s",
            WindClass::ModerateBreeze => "5-8 m/s",
            WindClass::StrongBreeze => "8-11 m/s",
            WindClass::Gale => "11+ m/s",
        }
    }

    pub fn all() -> &'static [WindClass] {
        &[
            WindClass::Calm,
            WindClass::LightBreeze,
            WindClass::ModerateBreeze,
            WindClass::StrongBreeze,
            WindClass::Gale,
        ]
    }
}

/// How the average wind affects outdoor plans
pub fn wind_impact(speed_ms: f64) -> &'static str {
    if speed_ms < 5.0 {
        "a gentle wind, ideal for outdoor activities"
    } else if speed_ms < 10.0 {
        "a moderate wind, still comfortable for most activities"
    } else {
        "a strong wind, which may affect outdoor activities"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variability {
    Low,
    High,
}

impl Variability {
    pub fn from_std_dev(std_dev: f64, low_below: f64) -> Self {
        if std_dev < low_below {
            Variability::Low
        } else {
            Variability::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Variability::Low => "low standard deviation",
            Variability::High => "high standard deviation",
        }
    }
}

pub fn temperature_comparison(median_c: f64, ideal_c: f64) -> String {
    let difference = (median_c - ideal_c).abs();
    if difference > TEMPERATURE_TOLERANCE_C {
        let direction = if median_c > ideal_c { "warmer" } else { "cooler" };
        format!("{difference:.1}° {direction} than your ideal temperature")
    } else {
        "Close to your ideal temperature".to_string()
    }
}

pub fn wind_comparison(avg_speed_ms: f64, ideal_ms: f64) -> String {
    let difference = (avg_speed_ms - ideal_ms).abs();
    if difference > WIND_TOLERANCE_MS {
        let direction = if avg_speed_ms > ideal_ms {
            "faster"
        } else {
            "slower"
        };
        format!("{difference:.1}m/s {direction} than your ideal wind")
    } else {
        "Close to your ideal wind".to_string()
    }
}

pub fn humidity_comparison(avg_percent: f64, ideal_percent: f64) -> String {
    let difference = (avg_percent - ideal_percent).abs();
    if difference > HUMIDITY_TOLERANCE_PERCENT {
        let direction = if avg_percent > ideal_percent {
            "more humid"
        } else {
            "drier"
        };
        format!("{difference:.1}% {direction} than your ideal humidity")
    } else {
        "Close to your ideal humidity".to_string()
    }
}

/// Whether the historical rain probability suits the preferred rainfall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainFit {
    /// User wants rain but it rarely rains on this day
    WantsRainButDry,
    /// User wants a dry day but it usually rains
    WantsDryButRainy,
    Suitable,
}

impl RainFit {
    pub fn assess(probability_percent: f64, ideal_rain_mm: f64) -> Self {
        let likely_rainy = probability_percent > 50.0;
        if ideal_rain_mm > 10.0 && !likely_rainy {
            RainFit::WantsRainButDry
        } else if ideal_rain_mm < 5.0 && likely_rainy {
            RainFit::WantsDryButRainy
        } else {
            RainFit::Suitable
        }
    }

    pub fn describe(&self, probability_percent: f64) -> String {
        match self {
            RainFit::WantsRainButDry => format!(
                "Chance of rain is low ({probability_percent:.1}%), but you prefer rain"
            ),
            RainFit::WantsDryButRainy => format!(
                "Chance of rain is high ({probability_percent:.1}%), but you prefer dry weather"
            ),
            RainFit::Suitable => "Rain conditions suit your preferences".to_string(),
        }
    }
}

/// Turns a snake_case parameter name into title case: `solar_radiation` -> `Solar Radiation`.
pub fn display_name(raw: &str) -> String {
    raw.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humidity_boundaries() {
        assert_eq!(HumidityClass::from_percent(29.9), HumidityClass::VeryDry);
        assert_eq!(HumidityClass::from_percent(30.0), HumidityClass::Dry);
        assert_eq!(HumidityClass::from_percent(49.9), HumidityClass::Dry);
        assert_eq!(HumidityClass::from_percent(50.0), HumidityClass::Comfortable);
        assert_eq!(HumidityClass::from_percent(70.0), HumidityClass::Humid);
        assert_eq!(HumidityClass::from_percent(84.9), HumidityClass::Humid);
        assert_eq!(HumidityClass::from_percent(85.0), HumidityClass::VeryHumid);
        assert_eq!(HumidityClass::from_percent(0.0).label(), "Very dry");
        assert_eq!(HumidityClass::from_percent(100.0).label(), "Very humid");
    }

    #[test]
    fn test_wind_boundaries() {
        assert_eq!(WindClass::from_speed(1.99), WindClass::Calm);
        assert_eq!(WindClass::from_speed(2.0), WindClass::LightBreeze);
        assert_eq!(WindClass::from_speed(5.0), WindClass::ModerateBreeze);
        assert_eq!(WindClass::from_speed(8.0), WindClass::StrongBreeze);
        assert_eq!(WindClass::from_speed(11.0), WindClass::Gale);
    }

    #[test]
    fn test_comfort_and_impact_notes() {
        assert_eq!(
            humidity_comfort_note(70.0),
            "This provides generally comfortable conditions."
        );
        assert_eq!(
            humidity_comfort_note(70.1),
            "This can make the heat feel more intense."
        );
        assert_eq!(
            humidity_comfort_note(39.9),
            "This can cause respiratory discomfort and dry skin."
        );
        assert_eq!(
            wind_impact(10.0),
            "a strong wind, which may affect outdoor activities"
        );
    }

    #[test]
    fn test_variability() {
        assert_eq!(
            Variability::from_std_dev(1.99, TEMPERATURE_LOW_VARIABILITY_C),
            Variability::Low
        );
        assert_eq!(
            Variability::from_std_dev(2.0, TEMPERATURE_LOW_VARIABILITY_C),
            Variability::High
        );
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(
            temperature_comparison(29.5, 25.0),
            "4.5° warmer than your ideal temperature"
        );
        assert_eq!(
            temperature_comparison(20.0, 25.0),
            "5.0° cooler than your ideal temperature"
        );
        assert_eq!(
            temperature_comparison(28.0, 25.0),
            "Close to your ideal temperature"
        );
        assert_eq!(
            wind_comparison(8.0, 5.0),
            "3.0m/s faster than your ideal wind"
        );
        assert_eq!(wind_comparison(6.0, 5.0), "Close to your ideal wind");
        assert_eq!(
            humidity_comparison(45.0, 60.0),
            "15.0% drier than your ideal humidity"
        );
        assert_eq!(humidity_comparison(70.0, 60.0), "Close to your ideal humidity");
    }

    #[test]
    fn test_rain_fit() {
        assert_eq!(RainFit::assess(20.0, 15.0), RainFit::WantsRainButDry);
        assert_eq!(RainFit::assess(60.0, 0.0), RainFit::WantsDryButRainy);
        assert_eq!(RainFit::assess(50.0, 0.0), RainFit::Suitable);
        assert_eq!(RainFit::assess(60.0, 7.0), RainFit::Suitable);
        assert_eq!(
            RainFit::WantsDryButRainy.describe(62.34),
            "Chance of rain is high (62.3%), but you prefer dry weather"
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("solar_radiation"), "Solar Radiation");
        assert_eq!(display_name("evapotranspiration"), "Evapotranspiration");
        assert_eq!(display_name("cloud__cover"), "Cloud Cover");
        assert_eq!(display_name(""), "");
    }
}
