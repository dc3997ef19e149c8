use chrono::Utc;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::{
    climate::ClimateAnalysis,
    error::AppError,
    export::{ExportDocument, export_filename},
    preferences::UserPreferences,
    query::ClimateQuery,
};
use crate::utils::download::download_json;

#[derive(Properties, PartialEq)]
pub struct DownloadButtonProps {
    pub analysis: Rc<ClimateAnalysis>,
    pub preferences: UserPreferences,
    /// Request that produced `analysis`
    pub query: Rc<ClimateQuery>,
}

fn export(
    analysis: &ClimateAnalysis,
    preferences: &UserPreferences,
    query: &ClimateQuery,
) -> Result<(), AppError> {
    let document = ExportDocument::new(analysis, preferences, query, Utc::now());
    let json = document.to_json()?;
    download_json(&export_filename(query.location, query.date), &json)
}

/// Exports the displayed analysis and the user's inputs as a JSON file
#[function_component(DownloadButton)]
pub fn download_button(props: &DownloadButtonProps) -> Html {
    let error = use_state(|| None::<String>);

    let onclick = {
        let error = error.clone();
        let analysis = props.analysis.clone();
        let preferences = props.preferences.clone();
        let query = props.query.clone();
        Callback::from(move |_: MouseEvent| {
            match export(&analysis, &preferences, &query) {
                Ok(()) => error.set(None),
                Err(e) => {
                    gloo::console::error!(&format!("Export failed: {e}"));
                    error.set(Some(e.to_string()));
                }
            }
        })
    };

    html! {
        <div class="download-section">
            <button class="download-button" {onclick}>{"⬇️ Download data (JSON)"}</button>
            if let Some(msg) = &*error {
                <p class="error-message">{msg}</p>
            }
        </div>
    }
}
