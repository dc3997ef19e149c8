//! Display strings for each result panel, computed from the response and the user's
//! preferences. Components render these verbatim.

use super::classify::{
    self, HumidityClass, RainFit, Variability, WindClass, HUMIDITY_LOW_VARIABILITY_PERCENT,
    TEMPERATURE_LOW_VARIABILITY_C,
};
use super::climate::{
    AdditionalParameterStats, ClimateAnalysis, HumidityProbability, HumidityStats,
    RainProbability, TemperatureProbability, TemperatureStats, WindStats,
};
use super::preferences::PreferenceField;

/// Ideal-value marker drawn on a read-only slider track
#[derive(Debug, Clone, PartialEq)]
pub struct SliderMarker {
    pub caption: &'static str,
    pub position_percent: f64,
    pub value_label: String,
    pub min_label: String,
    pub max_label: String,
}

impl SliderMarker {
    fn new(field: PreferenceField, caption: &'static str, ideal: f64) -> Self {
        let spec = field.spec();
        Self {
            caption,
            position_percent: spec.position_percent(ideal),
            value_label: spec.format(ideal),
            min_label: spec.format(spec.min),
            max_label: spec.format(spec.max),
        }
    }
}

/// A labelled count in a historical breakdown, optionally with its share
#[derive(Debug, Clone, PartialEq)]
pub struct DayCount {
    pub label: &'static str,
    pub count: u32,
    pub share: Option<String>,
}

impl DayCount {
    fn new(label: &'static str, count: u32, share_percent: Option<f64>) -> Self {
        Self {
            label,
            count,
            share: share_percent.map(|p| format!("({p}%)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureView {
    pub marker: SliderMarker,
    pub most_likely: String,
    pub comparison: String,
    pub typical_range: String,
    pub trend: String,
    pub variability: Variability,
    pub variability_description: &'static str,
    pub std_dev: String,
    pub coefficient_of_variation: String,
    pub stats: Vec<(&'static str, String)>,
    pub days: Vec<DayCount>,
}

impl TemperatureView {
    pub fn new(
        stats: &TemperatureStats,
        probability: &TemperatureProbability,
        ideal_temperature: f64,
    ) -> Self {
        let yearly = &stats.variability_analysis.yearly_variability;
        let variability = Variability::from_std_dev(yearly.std_dev_c, TEMPERATURE_LOW_VARIABILITY_C);
        let direction = stats.trend.direction();
        let cold = probability.cold_threshold_c;
        let hot = probability.hot_threshold_c;

        Self {
            marker: SliderMarker::new(
                PreferenceField::Temperature,
                "ideal temperature",
                ideal_temperature,
            ),
            most_likely: format!("{:.1}°C", stats.median_c),
            comparison: classify::temperature_comparison(stats.median_c, ideal_temperature),
            typical_range: format!(
                "On this day, the temperature usually falls between {cold}°C and {hot}°C. \
                 Very cold (below {cold}°C) or very hot (above {hot}°C) days are rare. \
                 The temperature has ranged from a record low of {}°C to a record high of {}°C.",
                stats.record_min_c, stats.record_max_c
            ),
            trend: format!(
                "The trend line leans slightly {}, indicating that temperatures on this day \
                 have gradually {} over recent decades.",
                direction.slope_label(),
                direction.change_label()
            ),
            variability,
            variability_description: match variability {
                Variability::Low => {
                    "The weather on this day is usually very consistent. The temperature \
                     does not change much from one year to the next, so you know what to expect."
                }
                Variability::High => {
                    "The weather on this day is very variable. The temperature can change \
                     sharply from one year to the next, so be ready for surprises!"
                }
            },
            std_dev: format!("Standard deviation: {:.2}°C", yearly.std_dev_c),
            coefficient_of_variation: format!(
                "Coefficient of variation: {:.2}%",
                yearly.coefficient_variation_percent
            ),
            stats: vec![
                ("Average high", format!("{:.1}°C", stats.avg_max_c)),
                ("Average low", format!("{:.1}°C", stats.avg_min_c)),
                ("Record high", format!("{:.1}°C", stats.record_max_c)),
                ("Record low", format!("{:.1}°C", stats.record_min_c)),
                ("10th percentile", format!("{:.1}°C", stats.percentiles.p10_c)),
                ("90th percentile", format!("{:.1}°C", stats.percentiles.p90_c)),
            ],
            days: vec![
                DayCount::new(
                    "Hot days",
                    probability.hot_days_count,
                    Some(probability.hot_probability_percent),
                ),
                DayCount::new("Normal days", probability.normal_days_count, None),
                DayCount::new(
                    "Cold days",
                    probability.cold_days_count,
                    Some(probability.cold_probability_percent),
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RainView {
    pub marker: SliderMarker,
    pub probability: String,
    pub fit: RainFit,
    pub comparison: String,
    pub history: String,
    pub days: Vec<DayCount>,
}

impl RainView {
    pub fn new(rain: &RainProbability, ideal_rain: f64) -> Self {
        let fit = RainFit::assess(rain.probability_percent, ideal_rain);

        Self {
            marker: SliderMarker::new(PreferenceField::Rain, "ideal rain", ideal_rain),
            probability: format!("{:.1}%", rain.probability_percent),
            fit,
            comparison: fit.describe(rain.probability_percent),
            history: format!(
                "Over the last {} years, it rained {} times on this day (more than {}mm). \
                 That means there is a {:.1}% chance of significant rain.",
                rain.frequency_analysis.total_days,
                rain.rainy_days_count,
                rain.threshold_mm,
                rain.probability_percent
            ),
            days: vec![
                DayCount::new("Rainy days", rain.rainy_days_count, None),
                DayCount::new("Dry days", rain.dry_days_count, None),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindView {
    pub marker: SliderMarker,
    pub average: String,
    pub comparison: String,
    pub class: WindClass,
    pub summary: String,
}

impl WindView {
    pub fn new(wind: &WindStats, ideal_wind_speed: f64) -> Self {
        let class = WindClass::from_speed(wind.avg_speed_ms);

        Self {
            marker: SliderMarker::new(PreferenceField::WindSpeed, "ideal wind", ideal_wind_speed),
            average: format!("{:.1}m/s", wind.avg_speed_ms),
            comparison: classify::wind_comparison(wind.avg_speed_ms, ideal_wind_speed),
            class,
            summary: format!(
                "On this day, wind typically has an average speed of {:.1}m/s, which is \
                 classified as '{}'. This is {}.",
                wind.avg_speed_ms,
                class.label(),
                classify::wind_impact(wind.avg_speed_ms)
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HumidityView {
    pub marker: SliderMarker,
    pub average: String,
    pub comparison: String,
    pub typical_range: String,
    pub class: HumidityClass,
    pub classification: String,
    pub variability: Variability,
    pub variability_description: &'static str,
    pub std_dev: String,
    pub range: String,
    pub days: Vec<DayCount>,
}

impl HumidityView {
    pub fn new(stats: &HumidityStats, probability: &HumidityProbability, ideal_humidity: f64) -> Self {
        let class = HumidityClass::from_percent(stats.avg_percent);
        let variability = Variability::from_std_dev(stats.std_dev, HUMIDITY_LOW_VARIABILITY_PERCENT);
        let dry = probability.dry_threshold_percent;
        let humid = probability.humid_threshold_percent;

        Self {
            marker: SliderMarker::new(PreferenceField::Humidity, "ideal humidity", ideal_humidity),
            average: format!("{:.1}%", stats.avg_percent),
            comparison: classify::humidity_comparison(stats.avg_percent, ideal_humidity),
            typical_range: format!(
                "On this day, humidity usually falls between {dry}% and {humid}%. \
                 Very low (below {dry}%) or very high (above {humid}%) humidity is less common. \
                 Humidity has ranged from a minimum of {}% to a maximum of {}%.",
                stats.min_percent, stats.max_percent
            ),
            class,
            classification: format!(
                "With an average humidity of {:.1}%, this day is usually classified as '{}'. {}",
                stats.avg_percent,
                class.label(),
                classify::humidity_comfort_note(stats.avg_percent)
            ),
            variability,
            variability_description: match variability {
                Variability::Low => {
                    "Humidity on this day is usually consistent. It does not vary much \
                     from one year to the next, so conditions are predictable."
                }
                Variability::High => {
                    "Humidity on this day is variable. It can change significantly from \
                     one year to the next, so be prepared for different conditions!"
                }
            },
            std_dev: format!("Standard deviation: {:.2}%", stats.std_dev),
            range: format!("Range: {:.2}%", stats.range_percent),
            days: vec![
                DayCount::new(
                    "Humid days",
                    probability.humid_days_count,
                    Some(probability.humid_probability_percent),
                ),
                DayCount::new("Normal days", probability.normal_days_count, None),
                DayCount::new(
                    "Dry days",
                    probability.dry_days_count,
                    Some(probability.dry_probability_percent),
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdditionalParameterView {
    pub title: String,
    pub average: String,
    pub range: String,
    pub median: String,
    pub std_dev: String,
    pub percentiles: Vec<(&'static str, String)>,
    pub explanation: String,
}

impl AdditionalParameterView {
    pub fn new(stats: &AdditionalParameterStats) -> Self {
        let title = classify::display_name(&stats.parameter_name);
        let unit = &stats.parameter_unit;
        let with_unit = |value: f64| format!("{value:.2} {unit}");

        Self {
            average: with_unit(stats.avg_value),
            range: format!(
                "Range: {:.2} - {:.2} {unit}",
                stats.min_value, stats.max_value
            ),
            median: with_unit(stats.median_value),
            std_dev: with_unit(stats.std_dev),
            percentiles: vec![
                ("10th", with_unit(stats.percentiles.p10)),
                ("25th", with_unit(stats.percentiles.p25)),
                ("75th", with_unit(stats.percentiles.p75)),
                ("90th", with_unit(stats.percentiles.p90)),
            ],
            explanation: format!(
                "This data shows the historical patterns for {} on this specific date. \
                 Half of the observations fall between the 25th and 75th percentiles, \
                 while values below the 10th or above the 90th percentile are rare.",
                title.to_lowercase()
            ),
            title,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsHeaderView {
    pub period: String,
    pub confidence: String,
    pub confidence_class: &'static str,
    pub data_quality: String,
}

impl ResultsHeaderView {
    pub fn new(analysis: &ClimateAnalysis) -> Self {
        let period = &analysis.analysis_period;
        let confidence = analysis.summary_statistics.confidence();

        Self {
            period: format!(
                "Based on {} years of data ({} - {})",
                period.total_years_analyzed, period.start_year, period.end_year
            ),
            confidence: format!("Confidence: {}", confidence.label()),
            confidence_class: confidence.css_class(),
            data_quality: format!("Data quality: {}", analysis.summary_statistics.data_quality),
        }
    }
}
