pub mod use_climate_analysis;
