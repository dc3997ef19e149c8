pub mod additional_parameter_panel;
pub mod chart;
pub mod date_picker;
pub mod download_button;
pub mod humidity_panel;
pub mod location_picker;
pub mod panel;
pub mod preference_form;
pub mod rain_panel;
pub mod results_header;
pub mod status;
pub mod temperature_panel;
pub mod wind_panel;

pub use additional_parameter_panel::AdditionalParameterPanel;
pub use date_picker::DatePicker;
pub use download_button::DownloadButton;
pub use humidity_panel::HumidityPanel;
pub use location_picker::LocationPicker;
pub use preference_form::PreferenceForm;
pub use rain_panel::RainPanel;
pub use results_header::ResultsHeader;
pub use status::Status;
pub use temperature_panel::TemperaturePanel;
pub use wind_panel::WindPanel;
