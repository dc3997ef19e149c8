#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use climate_dashboard::hooks::use_climate_analysis::AnalysisState;
    use climate_dashboard::models::{
        calendar::{DateSelection, Month},
        classify::{HumidityClass, RainFit, Variability, WindClass},
        climate::{ClimateAnalysis, Confidence, TrendDirection},
        error::AppError,
        export::{ExportDocument, export_filename},
        location::Coordinates,
        preferences::{AdditionalParameter, UserPreferences},
        views::{
            AdditionalParameterView, DayCount, HumidityView, RainView, ResultsHeaderView,
            TemperatureView, WindView,
        },
    };
    use climate_dashboard::services::climate_api::{ApiConfig, ClimateQuery};
    use serde_json::json;
    use std::rc::Rc;

    const ANALYSIS_JSON: &str = r#"{
        "location": {"lat": -9.665, "lon": -35.735},
        "analysis_period": {"start_year": 1995, "end_year": 2024, "total_years_analyzed": 30},
        "rain_probability": {
            "threshold_mm": 1.0,
            "probability_percent": 36.7,
            "rainy_days_count": 11,
            "dry_days_count": 19,
            "frequency_analysis": {"rainy_days": 11, "total_days": 30, "percentage": 36.7}
        },
        "temperature_probability": {
            "hot_threshold_c": 29.1,
            "cold_threshold_c": 22.4,
            "hot_probability_percent": 10.0,
            "cold_probability_percent": 10.0,
            "hot_days_count": 3,
            "cold_days_count": 3,
            "normal_days_count": 24,
            "classification_method": "percentile"
        },
        "humidity_probability": {
            "humid_threshold_percent": 88.0,
            "dry_threshold_percent": 65.0,
            "humid_probability_percent": 13.3,
            "dry_probability_percent": 10.0,
            "humid_days_count": 4,
            "dry_days_count": 3,
            "normal_days_count": 23,
            "classification_method": "percentile"
        },
        "temperature": {
            "avg_max_c": 28.4,
            "avg_min_c": 22.1,
            "median_c": 25.6,
            "record_max_c": 31.2,
            "record_min_c": 19.8,
            "std_dev": 1.45,
            "percentiles": {"10th_percentile_c": 23.0, "90th_percentile_c": 28.9},
            "variability_analysis": {
                "coefficient_of_variation": 5.67,
                "temperature_range_c": 11.4,
                "yearly_variability": {
                    "std_dev_c": 0.82,
                    "coefficient_variation_percent": 3.2,
                    "classification": "low",
                    "description": "Stable from year to year",
                    "interpretation": "Conditions are predictable"
                }
            },
            "trend": {
                "slope": 0.021,
                "description": "warming",
                "interpretation": "Temperatures are rising slowly"
            }
        },
        "wind": {"avg_speed_ms": 4.3},
        "humidity": {
            "avg_percent": 78.2,
            "min_percent": 58.0,
            "max_percent": 95.0,
            "std_dev": 7.5,
            "percentiles": {"10th_percentile_percent": 66.1, "90th_percentile_percent": 89.4},
            "range_percent": 37.0
        },
        "summary_statistics": {"data_quality": "good", "confidence_level": "high"}
    }"#;

    const SOLAR_RADIATION_JSON: &str = r#"{
        "parameter_name": "solar_radiation",
        "parameter_unit": "kWh/m²/day",
        "avg_value": 5.4321,
        "min_value": 3.1,
        "max_value": 7.25,
        "median_value": 5.5,
        "std_dev": 0.9,
        "percentiles": {
            "10th_percentile": 4.0,
            "25th_percentile": 4.8,
            "75th_percentile": 6.1,
            "90th_percentile": 6.7
        }
    }"#;

    // Helper function to parse the fixture response
    fn create_test_analysis() -> ClimateAnalysis {
        serde_json::from_str(ANALYSIS_JSON).unwrap()
    }

    // Helper function to parse the fixture with one additional parameter
    fn create_analysis_with_parameters() -> ClimateAnalysis {
        let mut value: serde_json::Value = serde_json::from_str(ANALYSIS_JSON).unwrap();
        let param: serde_json::Value = serde_json::from_str(SOLAR_RADIATION_JSON).unwrap();
        value["additional_parameters"] = json!([param]);
        serde_json::from_value(value).unwrap()
    }

    // Helper function to build the query for the default form state
    fn default_query() -> ClimateQuery {
        ClimateQuery::from_inputs(
            Coordinates::default(),
            DateSelection::default(),
            &UserPreferences::default(),
        )
    }

    fn exported_at() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 10, 4, 12, 0, 0).unwrap()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        assert_eq!(
            AppError::ServerError("Location out of range".to_string()).to_string(),
            "Server error: Location out of range"
        );
        assert_eq!(
            AppError::NoResponse.to_string(),
            "Could not connect to server. Please check if backend is running."
        );
        assert_eq!(
            AppError::RequestError("bad url".to_string()).to_string(),
            "Request error: bad url"
        );
        assert_eq!(
            AppError::DataError("missing field".to_string()).to_string(),
            "Data error: missing field"
        );
        assert_eq!(
            AppError::DownloadError("no document".to_string()).to_string(),
            "Download error: no document"
        );
    }

    #[test]
    fn test_app_error_clone_and_eq() {
        let error = AppError::ServerError("boom".to_string());
        assert_eq!(error.clone(), error);
        assert_ne!(error, AppError::NoResponse);
    }

    // ===== Response Parsing Tests =====

    #[test]
    fn test_analysis_deserialization() {
        let analysis = create_test_analysis();

        assert_eq!(analysis.location.lat, -9.665);
        assert_eq!(analysis.analysis_period.total_years_analyzed, 30);
        assert_eq!(analysis.rain_probability.frequency_analysis.total_days, 30);
        assert_eq!(analysis.temperature.percentiles.p10_c, 23.0);
        assert_eq!(analysis.temperature.percentiles.p90_c, 28.9);
        assert_eq!(analysis.humidity.percentiles.p90_percent, 89.4);
        assert_eq!(analysis.temperature.trend.direction(), TrendDirection::Warming);
        assert_eq!(analysis.summary_statistics.confidence(), Confidence::High);
        assert!(analysis.additional_parameters.is_empty());
        assert!(!analysis.has_additional_parameters());
    }

    #[test]
    fn test_analysis_with_additional_parameters() {
        let analysis = create_analysis_with_parameters();

        assert!(analysis.has_additional_parameters());
        let param = &analysis.additional_parameters[0];
        assert_eq!(param.parameter_name, "solar_radiation");
        assert_eq!(param.percentiles.p25, 4.8);
        assert_eq!(param.percentiles.p75, 6.1);
    }

    #[test]
    fn test_analysis_missing_section_fails() {
        let mut value: serde_json::Value = serde_json::from_str(ANALYSIS_JSON).unwrap();
        value.as_object_mut().unwrap().remove("wind");
        assert!(serde_json::from_value::<ClimateAnalysis>(value).is_err());
    }

    // ===== Results Header Tests =====

    #[test]
    fn test_results_header_view() {
        let view = ResultsHeaderView::new(&create_test_analysis());

        assert_eq!(view.period, "Based on 30 years of data (1995 - 2024)");
        assert_eq!(view.confidence, "Confidence: High");
        assert_eq!(view.confidence_class, "confidence-high");
        assert_eq!(view.data_quality, "Data quality: good");
    }

    // ===== Temperature View Tests =====

    #[test]
    fn test_temperature_view_strings() {
        let analysis = create_test_analysis();
        let view = TemperatureView::new(
            &analysis.temperature,
            &analysis.temperature_probability,
            20.0,
        );

        assert_eq!(view.most_likely, "25.6°C");
        assert_eq!(view.comparison, "5.6° warmer than your ideal temperature");
        assert_eq!(
            view.typical_range,
            "On this day, the temperature usually falls between 22.4°C and 29.1°C. \
             Very cold (below 22.4°C) or very hot (above 29.1°C) days are rare. \
             The temperature has ranged from a record low of 19.8°C to a record high of 31.2°C."
        );
        assert_eq!(
            view.trend,
            "The trend line leans slightly upward, indicating that temperatures on this day \
             have gradually increased over recent decades."
        );
        assert_eq!(view.variability, Variability::Low);
        assert_eq!(view.std_dev, "Standard deviation: 0.82°C");
        assert_eq!(view.coefficient_of_variation, "Coefficient of variation: 3.20%");
    }

    #[test]
    fn test_temperature_view_marker_and_days() {
        let analysis = create_test_analysis();
        let view = TemperatureView::new(
            &analysis.temperature,
            &analysis.temperature_probability,
            20.0,
        );

        assert_eq!(view.marker.position_percent, 20.0);
        assert_eq!(view.marker.value_label, "20°C");
        assert_eq!(view.marker.min_label, "15°C");
        assert_eq!(view.marker.max_label, "40°C");

        assert_eq!(
            view.days,
            vec![
                DayCount {
                    label: "Hot days",
                    count: 3,
                    share: Some("(10%)".to_string()),
                },
                DayCount {
                    label: "Normal days",
                    count: 24,
                    share: None,
                },
                DayCount {
                    label: "Cold days",
                    count: 3,
                    share: Some("(10%)".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_temperature_close_to_ideal() {
        let analysis = create_test_analysis();
        let view = TemperatureView::new(
            &analysis.temperature,
            &analysis.temperature_probability,
            25.0,
        );
        assert_eq!(view.comparison, "Close to your ideal temperature");
    }

    // ===== Rain View Tests =====

    #[test]
    fn test_rain_view_strings() {
        let analysis = create_test_analysis();
        let view = RainView::new(&analysis.rain_probability, 0.0);

        assert_eq!(view.probability, "36.7%");
        assert_eq!(view.fit, RainFit::Suitable);
        assert_eq!(view.comparison, "Rain conditions suit your preferences");
        assert_eq!(
            view.history,
            "Over the last 30 years, it rained 11 times on this day (more than 1mm). \
             That means there is a 36.7% chance of significant rain."
        );
        assert_eq!(view.days.len(), 2);
        assert_eq!(view.days[0].count, 11);
        assert_eq!(view.days[1].count, 19);
    }

    #[test]
    fn test_rain_view_prefers_rain() {
        let analysis = create_test_analysis();
        let view = RainView::new(&analysis.rain_probability, 20.0);

        assert_eq!(view.fit, RainFit::WantsRainButDry);
        assert_eq!(
            view.comparison,
            "Chance of rain is low (36.7%), but you prefer rain"
        );
    }

    // ===== Wind View Tests =====

    #[test]
    fn test_wind_view_strings() {
        let analysis = create_test_analysis();
        let view = WindView::new(&analysis.wind, 5.0);

        assert_eq!(view.average, "4.3m/s");
        assert_eq!(view.comparison, "Close to your ideal wind");
        assert_eq!(view.class, WindClass::LightBreeze);
        assert_eq!(
            view.summary,
            "On this day, wind typically has an average speed of 4.3m/s, which is \
             classified as 'Light breeze'. This is a gentle wind, ideal for outdoor activities."
        );

        let view = WindView::new(&analysis.wind, 10.0);
        assert_eq!(view.comparison, "5.7m/s slower than your ideal wind");
        assert_eq!(view.marker.position_percent, 50.0);
    }

    // ===== Humidity View Tests =====

    #[test]
    fn test_humidity_view_strings() {
        let analysis = create_test_analysis();
        let view = HumidityView::new(&analysis.humidity, &analysis.humidity_probability, 60.0);

        assert_eq!(view.average, "78.2%");
        assert_eq!(view.comparison, "18.2% more humid than your ideal humidity");
        assert_eq!(view.class, HumidityClass::Humid);
        assert_eq!(
            view.classification,
            "With an average humidity of 78.2%, this day is usually classified as 'Humid'. \
             This can make the heat feel more intense."
        );
        assert_eq!(view.variability, Variability::Low);
        assert_eq!(view.std_dev, "Standard deviation: 7.50%");
        assert_eq!(view.range, "Range: 37.00%");
        assert_eq!(view.days[0].share, Some("(13.3%)".to_string()));
        assert_eq!(view.days[1].share, None);
    }

    #[test]
    fn test_humidity_class_boundaries() {
        assert_eq!(HumidityClass::from_percent(29.9), HumidityClass::VeryDry);
        assert_eq!(HumidityClass::from_percent(30.0), HumidityClass::Dry);
        assert_eq!(HumidityClass::from_percent(50.0), HumidityClass::Comfortable);
        assert_eq!(HumidityClass::from_percent(70.0), HumidityClass::Humid);
        assert_eq!(HumidityClass::from_percent(85.0), HumidityClass::VeryHumid);
    }

    // ===== Additional Parameter View Tests =====

    #[test]
    fn test_additional_parameter_view() {
        let analysis = create_analysis_with_parameters();
        let view = AdditionalParameterView::new(&analysis.additional_parameters[0]);

        assert_eq!(view.title, "Solar Radiation");
        assert_eq!(view.average, "5.43 kWh/m²/day");
        assert_eq!(view.range, "Range: 3.10 - 7.25 kWh/m²/day");
        assert_eq!(view.median, "5.50 kWh/m²/day");
        assert_eq!(view.std_dev, "0.90 kWh/m²/day");
        assert_eq!(view.percentiles[1], ("25th", "4.80 kWh/m²/day".to_string()));
        assert!(view.explanation.contains("solar radiation"));
    }

    // ===== Export Tests =====

    #[test]
    fn test_export_document_layout() {
        let analysis = create_test_analysis();
        let document = ExportDocument::new(
            &analysis,
            &UserPreferences::default(),
            &default_query(),
            exported_at(),
        );

        let expected = json!({
            "metadata": {
                "exported_at": "2025-10-04T12:00:00.000Z",
                "location": {"latitude": -9.665, "longitude": -35.735},
                "date_analyzed": {"day": 4, "month": 10},
                "user_preferences": {
                    "ideal_temperature": {"value": 25.0, "unit": "°C"},
                    "ideal_rain": {"value": 0.0, "unit": "mm"},
                    "ideal_wind_speed": {"value": 5.0, "unit": "m/s"},
                    "ideal_humidity": {"value": 60.0, "unit": "%"}
                }
            },
            "analysis_period": {"start_year": 1995, "end_year": 2024, "total_years_analyzed": 30},
            "data_quality": {"confidence_level": "high", "quality": "good"},
            "temperature": {
                "unit": "°C",
                "average_maximum": 28.4,
                "average_minimum": 22.1,
                "median": 25.6,
                "record_maximum": 31.2,
                "record_minimum": 19.8,
                "standard_deviation": 1.45,
                "percentiles": {"10th": 23.0, "90th": 28.9},
                "variability": {
                    "coefficient_of_variation": 5.67,
                    "temperature_range": 11.4,
                    "yearly_std_dev": 0.82,
                    "yearly_cv_percent": 3.2,
                    "classification": "low"
                },
                "trend": {
                    "slope": 0.021,
                    "description": "warming",
                    "interpretation": "Temperatures are rising slowly"
                },
                "probability": {
                    "hot_threshold": 29.1,
                    "cold_threshold": 22.4,
                    "hot_probability_percent": 10.0,
                    "cold_probability_percent": 10.0,
                    "hot_days_count": 3,
                    "cold_days_count": 3,
                    "normal_days_count": 24
                }
            },
            "rain": {
                "unit": "mm",
                "threshold": 1.0,
                "probability_of_rain_percent": 36.7,
                "rainy_days_count": 11,
                "dry_days_count": 19,
                "frequency_analysis": {"rainy_days": 11, "total_days": 30, "percentage": 36.7}
            },
            "wind": {"unit": "m/s", "average_speed": 4.3},
            "humidity": {
                "unit": "%",
                "average": 78.2,
                "minimum": 58.0,
                "maximum": 95.0,
                "standard_deviation": 7.5,
                "range": 37.0,
                "percentiles": {"10th": 66.1, "90th": 89.4},
                "probability": {
                    "humid_threshold": 88.0,
                    "dry_threshold": 65.0,
                    "humid_probability_percent": 13.3,
                    "dry_probability_percent": 10.0,
                    "humid_days_count": 4,
                    "dry_days_count": 3,
                    "normal_days_count": 23
                }
            }
        });

        assert_eq!(serde_json::to_value(&document).unwrap(), expected);
    }

    #[test]
    fn test_export_with_additional_parameters() {
        let analysis = create_analysis_with_parameters();
        let mut preferences = UserPreferences::default();
        preferences.toggle_parameter(AdditionalParameter::SolarRadiation);

        let query = ClimateQuery::from_inputs(
            Coordinates::default(),
            DateSelection::default(),
            &preferences,
        );

        let document = ExportDocument::new(&analysis, &preferences, &query, exported_at());
        let value = serde_json::to_value(&document).unwrap();

        assert_eq!(
            value["metadata"]["additional_parameters"],
            json!(["solar_radiation"])
        );
        assert!(value["metadata"]["user_preferences"]
            .get("additional_parameters")
            .is_none());
        assert_eq!(
            value["additional_parameters"],
            json!([{
                "parameter_name": "solar_radiation",
                "unit": "kWh/m²/day",
                "average": 5.4321,
                "minimum": 3.1,
                "maximum": 7.25,
                "median": 5.5,
                "standard_deviation": 0.9,
                "percentiles": {"10th": 4.0, "25th": 4.8, "75th": 6.1, "90th": 6.7}
            }])
        );
    }

    #[test]
    fn test_export_json_is_pretty_printed() {
        let document = ExportDocument::new(
            &create_test_analysis(),
            &UserPreferences::default(),
            &default_query(),
            exported_at(),
        );
        let json = document.to_json().unwrap();

        assert!(json.starts_with("{\n  \"metadata\": {\n    \"exported_at\""));
        assert!(!json.contains("additional_parameters"));
    }

    #[test]
    fn test_export_metadata_keys() {
        let analysis = create_analysis_with_parameters();
        let mut preferences = UserPreferences::default();
        preferences.toggle_parameter(AdditionalParameter::SolarRadiation);
        let query = ClimateQuery::from_inputs(
            Coordinates::default(),
            DateSelection::default(),
            &preferences,
        );

        let document = ExportDocument::new(&analysis, &preferences, &query, exported_at());
        let value = serde_json::to_value(&document).unwrap();
        let mut keys: Vec<&String> = value["metadata"].as_object().unwrap().keys().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "additional_parameters",
                "date_analyzed",
                "exported_at",
                "location",
                "user_preferences"
            ]
        );
    }

    #[test]
    fn test_export_uses_loaded_query_not_current_form() {
        let submitted = default_query();
        let state = AnalysisState::Loaded {
            analysis: Rc::new(create_test_analysis()),
            query: Rc::new(submitted),
        };

        // Form edited after the response arrived, without resubmitting
        let mut preferences = UserPreferences::default();
        preferences.toggle_parameter(AdditionalParameter::CloudCover);
        let current_form = ClimateQuery::from_inputs(
            Coordinates::new(48.85, 2.35),
            DateSelection::new(1, Month::January),
            &preferences,
        );
        assert_ne!(&current_form, state.query().unwrap().as_ref());

        let query = state.query().unwrap();
        let document =
            ExportDocument::new(state.data().unwrap(), &preferences, query, exported_at());
        let value = serde_json::to_value(&document).unwrap();

        assert_eq!(
            value["metadata"]["location"],
            json!({"latitude": -9.665, "longitude": -35.735})
        );
        assert_eq!(value["metadata"]["date_analyzed"], json!({"day": 4, "month": 10}));
        assert!(value["metadata"].get("additional_parameters").is_none());
        assert_eq!(
            export_filename(query.location, query.date),
            "climate-data_lat-9.665_lon-35.735_10-4.json"
        );
    }

    // ===== Query Tests =====

    #[test]
    fn test_query_from_inputs() {
        let mut preferences = UserPreferences::default();
        preferences.toggle_parameter(AdditionalParameter::CloudCover);
        preferences.toggle_parameter(AdditionalParameter::SolarRadiation);

        let query = ClimateQuery::from_inputs(
            Coordinates::new(51.5, -0.12),
            DateSelection::new(29, Month::February),
            &preferences,
        );

        assert_eq!(query.location, Coordinates::new(51.5, -0.12));
        assert_eq!(query.date.day(), 29);
        assert_eq!(query.date.month(), Month::February);
        assert_eq!(
            query.additional_parameters,
            vec!["solar_radiation", "cloud_cover"]
        );
    }

    #[test]
    fn test_analysis_url_from_defaults() {
        let config = ApiConfig::builder()
            .base_url("http://localhost:8000/")
            .build();
        let query = ClimateQuery::from_inputs(
            Coordinates::default(),
            DateSelection::default(),
            &UserPreferences::default(),
        );

        assert_eq!(
            config.analysis_url(&query).unwrap().as_str(),
            "http://localhost:8000/v1/climate-analysis?lat=-9.665&lon=-35.735&day=4&month=10"
        );
    }

    // ===== Analysis State Tests =====

    #[test]
    fn test_analysis_state_helpers() {
        let idle = AnalysisState::default();
        assert_eq!(idle, AnalysisState::Idle);
        assert!(!idle.is_loading());
        assert!(idle.data().is_none());
        assert!(idle.error().is_none());

        assert!(AnalysisState::Loading.is_loading());

        assert!(idle.query().is_none());

        let loaded = AnalysisState::Loaded {
            analysis: Rc::new(create_test_analysis()),
            query: Rc::new(default_query()),
        };
        assert_eq!(loaded.data().unwrap().wind.avg_speed_ms, 4.3);
        assert_eq!(loaded.query().unwrap().date, DateSelection::default());
        assert!(loaded.error().is_none());

        let failed = AnalysisState::Error(AppError::NoResponse.to_string());
        assert_eq!(
            failed.error(),
            Some("Could not connect to server. Please check if backend is running.")
        );
        assert!(failed.data().is_none());
    }

    // ===== Date Selection Tests =====

    #[test]
    fn test_date_selection_clamping() {
        assert_eq!(DateSelection::new(31, Month::February).day(), 29);
        assert_eq!(DateSelection::new(0, Month::March).day(), 1);

        let end_of_january = DateSelection::new(31, Month::January);
        let april = end_of_january.with_month(Month::April);
        assert_eq!(april.day(), 30);
        assert_eq!(april.month(), Month::April);

        assert!(april.with_day(31).is_none());
        assert_eq!(april.with_day(15).unwrap().label(), "15 April");
        assert_eq!(april.day_options().count(), 30);
    }
}
