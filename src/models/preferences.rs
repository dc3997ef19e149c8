use super::error::AppError;
use crate::config::Config;
use std::collections::BTreeSet;

/// Optional climate metrics the backend can analyse beyond the four primary ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AdditionalParameter {
    /// Downward shortwave radiation at the surface
    SolarRadiation,
    /// Cloud amount
    CloudCover,
    /// Evapotranspiration energy flux
    Evapotranspiration,
    /// Surface air pressure
    SurfacePressure,
}

impl AdditionalParameter {
    /// Returns the identifier used in the query string.
    pub fn code(&self) -> &'static str {
        match self {
            AdditionalParameter::SolarRadiation => "solar_radiation",
            AdditionalParameter::CloudCover => "cloud_cover",
            AdditionalParameter::Evapotranspiration => "evapotranspiration",
            AdditionalParameter::SurfacePressure => "surface_pressure",
        }
    }

    /// Returns a human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            AdditionalParameter::SolarRadiation => "Solar Radiation",
            AdditionalParameter::CloudCover => "Cloud Cover",
            AdditionalParameter::Evapotranspiration => "Evapotranspiration",
            AdditionalParameter::SurfacePressure => "Surface Pressure",
        }
    }

    /// Returns the unit the backend reports values in.
    pub fn unit(&self) -> &'static str {
        match self {
            AdditionalParameter::SolarRadiation => "kWh/m²/day",
            AdditionalParameter::CloudCover => "%",
            AdditionalParameter::Evapotranspiration => "mm/day",
            AdditionalParameter::SurfacePressure => "kPa",
        }
    }

    /// All available parameters.
    pub fn all() -> &'static [AdditionalParameter] {
        &[
            AdditionalParameter::SolarRadiation,
            AdditionalParameter::CloudCover,
            AdditionalParameter::Evapotranspiration,
            AdditionalParameter::SurfacePressure,
        ]
    }
}

impl std::fmt::Display for AdditionalParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.unit())
    }
}

impl std::str::FromStr for AdditionalParameter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "solar_radiation" => Ok(AdditionalParameter::SolarRadiation),
            "cloud_cover" => Ok(AdditionalParameter::CloudCover),
            "evapotranspiration" => Ok(AdditionalParameter::Evapotranspiration),
            "surface_pressure" => Ok(AdditionalParameter::SurfacePressure),
            _ => Err(AppError::RequestError(format!(
                "Unknown additional parameter: {s}"
            ))),
        }
    }
}

/// Range and unit of one preference slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: &'static str,
}

impl SliderSpec {
    /// Offset of `value` along the track, in percent of its width
    pub fn position_percent(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span * 100.0).clamp(0.0, 100.0)
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Value followed by its unit, e.g. `5.5m/s`
    pub fn format(&self, value: f64) -> String {
        format!("{value}{}", self.unit)
    }
}

/// The four slider-driven preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceField {
    Temperature,
    Rain,
    WindSpeed,
    Humidity,
}

impl PreferenceField {
    pub fn spec(&self) -> SliderSpec {
        match self {
            PreferenceField::Temperature => SliderSpec {
                min: 15.0,
                max: 40.0,
                step: 1.0,
                unit: "°C",
            },
            PreferenceField::Rain => SliderSpec {
                min: 0.0,
                max: 50.0,
                step: 1.0,
                unit: "mm",
            },
            PreferenceField::WindSpeed => SliderSpec {
                min: 0.0,
                max: 20.0,
                step: 0.5,
                unit: "m/s",
            },
            PreferenceField::Humidity => SliderSpec {
                min: 0.0,
                max: 100.0,
                step: 5.0,
                unit: "%",
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PreferenceField::Temperature => "Ideal Temperature",
            PreferenceField::Rain => "Ideal Rain",
            PreferenceField::WindSpeed => "Ideal Wind",
            PreferenceField::Humidity => "Ideal Humidity",
        }
    }

    /// DOM id of the slider input
    pub fn input_id(&self) -> &'static str {
        match self {
            PreferenceField::Temperature => "temperature-slider",
            PreferenceField::Rain => "rain-slider",
            PreferenceField::WindSpeed => "wind-slider",
            PreferenceField::Humidity => "humidity-slider",
        }
    }

    pub fn all() -> &'static [PreferenceField] {
        &[
            PreferenceField::Temperature,
            PreferenceField::Rain,
            PreferenceField::WindSpeed,
            PreferenceField::Humidity,
        ]
    }
}

/// What the user would consider ideal weather for the chosen day
#[derive(Debug, Clone, PartialEq)]
pub struct UserPreferences {
    pub ideal_temperature: f64,
    pub ideal_rain: f64,
    pub ideal_wind_speed: f64,
    pub ideal_humidity: f64,
    pub additional_parameters: BTreeSet<AdditionalParameter>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            ideal_temperature: Config::DEFAULT_IDEAL_TEMPERATURE,
            ideal_rain: Config::DEFAULT_IDEAL_RAIN,
            ideal_wind_speed: Config::DEFAULT_IDEAL_WIND_SPEED,
            ideal_humidity: Config::DEFAULT_IDEAL_HUMIDITY,
            additional_parameters: BTreeSet::new(),
        }
    }
}

impl UserPreferences {
    pub fn get(&self, field: PreferenceField) -> f64 {
        match field {
            PreferenceField::Temperature => self.ideal_temperature,
            PreferenceField::Rain => self.ideal_rain,
            PreferenceField::WindSpeed => self.ideal_wind_speed,
            PreferenceField::Humidity => self.ideal_humidity,
        }
    }

    /// Returns a copy with `field` set, clamped to the slider range.
    pub fn with(&self, field: PreferenceField, value: f64) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }

    pub fn set(&mut self, field: PreferenceField, value: f64) {
        let value = field.spec().clamp(value);
        match field {
            PreferenceField::Temperature => self.ideal_temperature = value,
            PreferenceField::Rain => self.ideal_rain = value,
            PreferenceField::WindSpeed => self.ideal_wind_speed = value,
            PreferenceField::Humidity => self.ideal_humidity = value,
        }
    }

    /// Adds the parameter if absent, removes it otherwise.
    pub fn toggle_parameter(&mut self, param: AdditionalParameter) {
        if !self.additional_parameters.remove(&param) {
            self.additional_parameters.insert(param);
        }
    }

    pub fn is_selected(&self, param: AdditionalParameter) -> bool {
        self.additional_parameters.contains(&param)
    }

    /// Query codes of the selected parameters, in declaration order
    pub fn additional_parameter_codes(&self) -> Vec<&'static str> {
        self.additional_parameters.iter().map(|p| p.code()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_parsing() {
        assert_eq!(
            "solar_radiation".parse::<AdditionalParameter>().unwrap(),
            AdditionalParameter::SolarRadiation
        );
        assert_eq!(
            " Cloud_Cover ".parse::<AdditionalParameter>().unwrap(),
            AdditionalParameter::CloudCover
        );
        assert!("humidity".parse::<AdditionalParameter>().is_err());
    }

    #[test]
    fn test_all_parameters_round_trip_codes() {
        for param in AdditionalParameter::all() {
            assert_eq!(param.code().parse::<AdditionalParameter>().unwrap(), *param);
        }
        assert_eq!(AdditionalParameter::all().len(), 4);
    }

    #[test]
    fn test_defaults() {
        let prefs = UserPreferences::default();
        assert_eq!(prefs.ideal_temperature, 25.0);
        assert_eq!(prefs.ideal_rain, 0.0);
        assert_eq!(prefs.ideal_wind_speed, 5.0);
        assert_eq!(prefs.ideal_humidity, 60.0);
        assert!(prefs.additional_parameters.is_empty());
    }

    #[test]
    fn test_set_clamps_to_slider_range() {
        let prefs = UserPreferences::default()
            .with(PreferenceField::Temperature, 55.0)
            .with(PreferenceField::Rain, -3.0);
        assert_eq!(prefs.ideal_temperature, 40.0);
        assert_eq!(prefs.ideal_rain, 0.0);
    }

    #[test]
    fn test_toggle_parameter() {
        let mut prefs = UserPreferences::default();
        prefs.toggle_parameter(AdditionalParameter::SurfacePressure);
        prefs.toggle_parameter(AdditionalParameter::SolarRadiation);
        assert_eq!(
            prefs.additional_parameter_codes(),
            vec!["solar_radiation", "surface_pressure"]
        );

        prefs.toggle_parameter(AdditionalParameter::SolarRadiation);
        assert_eq!(prefs.additional_parameter_codes(), vec!["surface_pressure"]);
    }

    #[test]
    fn test_slider_position() {
        let temperature = PreferenceField::Temperature.spec();
        assert_eq!(temperature.position_percent(15.0), 0.0);
        assert_eq!(temperature.position_percent(27.5), 50.0);
        assert_eq!(temperature.position_percent(45.0), 100.0);

        let wind = PreferenceField::WindSpeed.spec();
        assert_eq!(wind.position_percent(5.0), 25.0);
        assert_eq!(wind.format(5.5), "5.5m/s");
    }
}
