//! Downloadable JSON document mirroring the displayed analysis plus the user's inputs.

use super::calendar::DateSelection;
use super::climate::ClimateAnalysis;
use super::error::AppError;
use super::location::Coordinates;
use super::preferences::UserPreferences;
use super::query::ClimateQuery;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueWithUnit {
    pub value: f64,
    pub unit: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDate {
    pub day: u32,
    pub month: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportPreferences {
    pub ideal_temperature: ValueWithUnit,
    pub ideal_rain: ValueWithUnit,
    pub ideal_wind_speed: ValueWithUnit,
    pub ideal_humidity: ValueWithUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportMetadata {
    pub exported_at: String,
    pub location: ExportLocation,
    pub date_analyzed: ExportDate,
    pub user_preferences: ExportPreferences,
    /// Parameter codes the analysis was requested with
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional_parameters: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportPeriod {
    pub start_year: i32,
    pub end_year: i32,
    pub total_years_analyzed: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportQuality {
    pub confidence_level: String,
    pub quality: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwoPercentiles {
    #[serde(rename = "10th")]
    pub p10: f64,
    #[serde(rename = "90th")]
    pub p90: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FourPercentiles {
    #[serde(rename = "10th")]
    pub p10: f64,
    #[serde(rename = "25th")]
    pub p25: f64,
    #[serde(rename = "75th")]
    pub p75: f64,
    #[serde(rename = "90th")]
    pub p90: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportVariability {
    pub coefficient_of_variation: f64,
    pub temperature_range: f64,
    pub yearly_std_dev: f64,
    pub yearly_cv_percent: f64,
    pub classification: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportTrend {
    pub slope: f64,
    pub description: String,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportTemperatureProbability {
    pub hot_threshold: f64,
    pub cold_threshold: f64,
    pub hot_probability_percent: f64,
    pub cold_probability_percent: f64,
    pub hot_days_count: u32,
    pub cold_days_count: u32,
    pub normal_days_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportTemperature {
    pub unit: &'static str,
    pub average_maximum: f64,
    pub average_minimum: f64,
    pub median: f64,
    pub record_maximum: f64,
    pub record_minimum: f64,
    pub standard_deviation: f64,
    pub percentiles: TwoPercentiles,
    pub variability: ExportVariability,
    pub trend: ExportTrend,
    pub probability: ExportTemperatureProbability,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportFrequency {
    pub rainy_days: u32,
    pub total_days: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRain {
    pub unit: &'static str,
    pub threshold: f64,
    pub probability_of_rain_percent: f64,
    pub rainy_days_count: u32,
    pub dry_days_count: u32,
    pub frequency_analysis: ExportFrequency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportWind {
    pub unit: &'static str,
    pub average_speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportHumidityProbability {
    pub humid_threshold: f64,
    pub dry_threshold: f64,
    pub humid_probability_percent: f64,
    pub dry_probability_percent: f64,
    pub humid_days_count: u32,
    pub dry_days_count: u32,
    pub normal_days_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportHumidity {
    pub unit: &'static str,
    pub average: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub standard_deviation: f64,
    pub range: f64,
    pub percentiles: TwoPercentiles,
    pub probability: ExportHumidityProbability,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportAdditionalParameter {
    pub parameter_name: String,
    pub unit: String,
    pub average: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub median: f64,
    pub standard_deviation: f64,
    pub percentiles: FourPercentiles,
}

/// Top-level export document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDocument {
    pub metadata: ExportMetadata,
    pub analysis_period: ExportPeriod,
    pub data_quality: ExportQuality,
    pub temperature: ExportTemperature,
    pub rain: ExportRain,
    pub wind: ExportWind,
    pub humidity: ExportHumidity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_parameters: Option<Vec<ExportAdditionalParameter>>,
}

impl ExportDocument {
    /// Location, date and parameter list come from `query`, the request behind `data`,
    /// not from whatever the form currently shows.
    pub fn new(
        data: &ClimateAnalysis,
        preferences: &UserPreferences,
        query: &ClimateQuery,
        exported_at: DateTime<Utc>,
    ) -> Self {
        let (location, date) = (query.location, query.date);
        let temperature = &data.temperature;
        let temperature_probability = &data.temperature_probability;
        let yearly = &temperature.variability_analysis.yearly_variability;
        let rain = &data.rain_probability;
        let humidity = &data.humidity;
        let humidity_probability = &data.humidity_probability;

        let additional_parameters = data.has_additional_parameters().then(|| {
            data.additional_parameters
                .iter()
                .map(|param| ExportAdditionalParameter {
                    parameter_name: param.parameter_name.clone(),
                    unit: param.parameter_unit.clone(),
                    average: param.avg_value,
                    minimum: param.min_value,
                    maximum: param.max_value,
                    median: param.median_value,
                    standard_deviation: param.std_dev,
                    percentiles: FourPercentiles {
                        p10: param.percentiles.p10,
                        p25: param.percentiles.p25,
                        p75: param.percentiles.p75,
                        p90: param.percentiles.p90,
                    },
                })
                .collect()
        });

        Self {
            metadata: ExportMetadata {
                exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                location: ExportLocation {
                    latitude: location.lat,
                    longitude: location.lon,
                },
                date_analyzed: ExportDate {
                    day: date.day(),
                    month: date.month().number(),
                },
                user_preferences: ExportPreferences {
                    ideal_temperature: ValueWithUnit {
                        value: preferences.ideal_temperature,
                        unit: "°C",
                    },
                    ideal_rain: ValueWithUnit {
                        value: preferences.ideal_rain,
                        unit: "mm",
                    },
                    ideal_wind_speed: ValueWithUnit {
                        value: preferences.ideal_wind_speed,
                        unit: "m/s",
                    },
                    ideal_humidity: ValueWithUnit {
                        value: preferences.ideal_humidity,
                        unit: "%",
                    },
                },
                additional_parameters: query.additional_parameters.clone(),
            },
            analysis_period: ExportPeriod {
                start_year: data.analysis_period.start_year,
                end_year: data.analysis_period.end_year,
                total_years_analyzed: data.analysis_period.total_years_analyzed,
            },
            data_quality: ExportQuality {
                confidence_level: data.summary_statistics.confidence_level.clone(),
                quality: data.summary_statistics.data_quality.clone(),
            },
            temperature: ExportTemperature {
                unit: "°C",
                average_maximum: temperature.avg_max_c,
                average_minimum: temperature.avg_min_c,
                median: temperature.median_c,
                record_maximum: temperature.record_max_c,
                record_minimum: temperature.record_min_c,
                standard_deviation: temperature.std_dev,
                percentiles: TwoPercentiles {
                    p10: temperature.percentiles.p10_c,
                    p90: temperature.percentiles.p90_c,
                },
                variability: ExportVariability {
                    coefficient_of_variation: temperature
                        .variability_analysis
                        .coefficient_of_variation,
                    temperature_range: temperature.variability_analysis.temperature_range_c,
                    yearly_std_dev: yearly.std_dev_c,
                    yearly_cv_percent: yearly.coefficient_variation_percent,
                    classification: yearly.classification.clone(),
                },
                trend: ExportTrend {
                    slope: temperature.trend.slope,
                    description: temperature.trend.description.clone(),
                    interpretation: temperature.trend.interpretation.clone(),
                },
                probability: ExportTemperatureProbability {
                    hot_threshold: temperature_probability.hot_threshold_c,
                    cold_threshold: temperature_probability.cold_threshold_c,
                    hot_probability_percent: temperature_probability.hot_probability_percent,
                    cold_probability_percent: temperature_probability.cold_probability_percent,
                    hot_days_count: temperature_probability.hot_days_count,
                    cold_days_count: temperature_probability.cold_days_count,
                    normal_days_count: temperature_probability.normal_days_count,
                },
            },
            rain: ExportRain {
                unit: "mm",
                threshold: rain.threshold_mm,
                probability_of_rain_percent: rain.probability_percent,
                rainy_days_count: rain.rainy_days_count,
                dry_days_count: rain.dry_days_count,
                frequency_analysis: ExportFrequency {
                    rainy_days: rain.frequency_analysis.rainy_days,
                    total_days: rain.frequency_analysis.total_days,
                    percentage: rain.frequency_analysis.percentage,
                },
            },
            wind: ExportWind {
                unit: "m/s",
                average_speed: data.wind.avg_speed_ms,
            },
            humidity: ExportHumidity {
                unit: "%",
                average: humidity.avg_percent,
                minimum: humidity.min_percent,
                maximum: humidity.max_percent,
                standard_deviation: humidity.std_dev,
                range: humidity.range_percent,
                percentiles: TwoPercentiles {
                    p10: humidity.percentiles.p10_percent,
                    p90: humidity.percentiles.p90_percent,
                },
                probability: ExportHumidityProbability {
                    humid_threshold: humidity_probability.humid_threshold_percent,
                    dry_threshold: humidity_probability.dry_threshold_percent,
                    humid_probability_percent: humidity_probability.humid_probability_percent,
                    dry_probability_percent: humidity_probability.dry_probability_percent,
                    humid_days_count: humidity_probability.humid_days_count,
                    dry_days_count: humidity_probability.dry_days_count,
                    normal_days_count: humidity_probability.normal_days_count,
                },
            },
            additional_parameters,
        }
    }

    /// Pretty-printed JSON with two-space indentation
    pub fn to_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::DataError(format!("Failed to serialize export: {e}")))
    }
}

/// File name carrying the location and date, e.g. `climate-data_lat-9.665_lon-35.735_10-4.json`
pub fn export_filename(location: Coordinates, date: DateSelection) -> String {
    format!(
        "climate-data_lat{}_lon{}_{}-{}.json",
        location.lat,
        location.lon,
        date.month().number(),
        date.day()
    )
}
