use serde::Deserialize;

/// Point the backend analysed, echoed back in the response
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

/// Historical year range the backend aggregated over
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisPeriod {
    pub start_year: i32,
    pub end_year: i32,
    pub total_years_analyzed: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrequencyAnalysis {
    pub rainy_days: u32,
    pub total_days: u32,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RainProbability {
    pub threshold_mm: f64,
    pub probability_percent: f64,
    pub rainy_days_count: u32,
    pub dry_days_count: u32,
    pub frequency_analysis: FrequencyAnalysis,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemperatureProbability {
    pub hot_threshold_c: f64,
    pub cold_threshold_c: f64,
    pub hot_probability_percent: f64,
    pub cold_probability_percent: f64,
    pub hot_days_count: u32,
    pub cold_days_count: u32,
    pub normal_days_count: u32,
    pub classification_method: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HumidityProbability {
    pub humid_threshold_percent: f64,
    pub dry_threshold_percent: f64,
    pub humid_probability_percent: f64,
    pub dry_probability_percent: f64,
    pub humid_days_count: u32,
    pub dry_days_count: u32,
    pub normal_days_count: u32,
    pub classification_method: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct YearlyVariability {
    pub std_dev_c: f64,
    pub coefficient_variation_percent: f64,
    pub classification: String,
    pub description: String,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariabilityAnalysis {
    pub coefficient_of_variation: f64,
    pub temperature_range_c: f64,
    pub yearly_variability: YearlyVariability,
}

/// Direction of the fitted temperature trend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Warming,
    Cooling,
    Stable,
}

impl TrendDirection {
    /// Returns the direction the trend line leans
    pub fn slope_label(&self) -> &'static str {
        match self {
            TrendDirection::Warming => "upward",
            TrendDirection::Cooling => "downward",
            TrendDirection::Stable => "flat",
        }
    }

    /// Returns what the trend means for temperatures on the day
    pub fn change_label(&self) -> &'static str {
        match self {
            TrendDirection::Warming => "increased",
            TrendDirection::Cooling => "decreased",
            TrendDirection::Stable => "stayed stable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemperatureTrend {
    pub slope: f64,
    pub description: String,
    pub interpretation: String,
}

impl TemperatureTrend {
    pub fn direction(&self) -> TrendDirection {
        match self.description.as_str() {
            "warming" => TrendDirection::Warming,
            "cooling" => TrendDirection::Cooling,
            _ => TrendDirection::Stable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TemperaturePercentiles {
    #[serde(rename = "10th_percentile_c")]
    pub p10_c: f64,
    #[serde(rename = "90th_percentile_c")]
    pub p90_c: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TemperatureStats {
    pub avg_max_c: f64,
    pub avg_min_c: f64,
    pub median_c: f64,
    pub record_max_c: f64,
    pub record_min_c: f64,
    pub std_dev: f64,
    pub percentiles: TemperaturePercentiles,
    pub variability_analysis: VariabilityAnalysis,
    pub trend: TemperatureTrend,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct WindStats {
    pub avg_speed_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct HumidityPercentiles {
    #[serde(rename = "10th_percentile_percent")]
    pub p10_percent: f64,
    #[serde(rename = "90th_percentile_percent")]
    pub p90_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HumidityStats {
    pub avg_percent: f64,
    pub min_percent: f64,
    pub max_percent: f64,
    pub std_dev: f64,
    pub percentiles: HumidityPercentiles,
    pub range_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ParameterPercentiles {
    #[serde(rename = "10th_percentile")]
    pub p10: f64,
    #[serde(rename = "25th_percentile")]
    pub p25: f64,
    #[serde(rename = "75th_percentile")]
    pub p75: f64,
    #[serde(rename = "90th_percentile")]
    pub p90: f64,
}

/// Statistics for an optional metric requested beyond the four primary ones
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AdditionalParameterStats {
    pub parameter_name: String,
    pub parameter_unit: String,
    pub avg_value: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub median_value: f64,
    pub std_dev: f64,
    pub percentiles: ParameterPercentiles,
}

/// Confidence the backend reports for its summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Returns human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Medium => "Medium",
            Confidence::Low => "Low",
        }
    }

    /// Returns CSS class name for the badge
    pub fn css_class(&self) -> &'static str {
        match self {
            Confidence::High => "confidence-high",
            Confidence::Medium => "confidence-medium",
            Confidence::Low => "confidence-low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryStatistics {
    pub data_quality: String,
    pub confidence_level: String,
}

impl SummaryStatistics {
    /// Anything other than "high" or "medium" reads as low confidence
    pub fn confidence(&self) -> Confidence {
        match self.confidence_level.as_str() {
            "high" => Confidence::High,
            "medium" => Confidence::Medium,
            _ => Confidence::Low,
        }
    }
}

/// Full response of the climate-analysis endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClimateAnalysis {
    pub location: Location,
    pub analysis_period: AnalysisPeriod,
    pub rain_probability: RainProbability,
    pub temperature_probability: TemperatureProbability,
    pub humidity_probability: HumidityProbability,
    pub temperature: TemperatureStats,
    pub wind: WindStats,
    pub humidity: HumidityStats,
    pub summary_statistics: SummaryStatistics,
    #[serde(default)]
    pub additional_parameters: Vec<AdditionalParameterStats>,
}

impl ClimateAnalysis {
    pub fn has_additional_parameters(&self) -> bool {
        !self.additional_parameters.is_empty()
    }
}
