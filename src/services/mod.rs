pub mod climate_api;
