//! The inputs of one climate-analysis request.

use super::calendar::DateSelection;
use super::location::Coordinates;
use super::preferences::UserPreferences;

/// Parameters of a single climate-analysis request. Kept alongside the loaded response
/// so the export describes the inputs the statistics were computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateQuery {
    pub location: Coordinates,
    pub date: DateSelection,
    pub additional_parameters: Vec<&'static str>,
}

impl ClimateQuery {
    /// Builds a query from the current form state.
    pub fn from_inputs(
        location: Coordinates,
        date: DateSelection,
        preferences: &UserPreferences,
    ) -> Self {
        Self {
            location,
            date,
            additional_parameters: preferences.additional_parameter_codes(),
        }
    }

    /// Key/value pairs for the query string. The additional-parameter list is only
    /// sent when at least one parameter is selected.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("lat", self.location.lat.to_string()),
            ("lon", self.location.lon.to_string()),
            ("day", self.date.day().to_string()),
            ("month", self.date.month().number().to_string()),
        ];
        if !self.additional_parameters.is_empty() {
            pairs.push((
                "additional_parameters",
                self.additional_parameters.join(","),
            ));
        }
        pairs
    }
}
