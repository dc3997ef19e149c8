use crate::hooks::use_climate_analysis::AnalysisState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: AnalysisState,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        AnalysisState::Idle => html! {
            <div class="welcome-message">
                <p>{"👆 Set your ideal preferences above and click \"Analyze Climate\" to see the statistics!"}</p>
            </div>
        },
        AnalysisState::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Loading climate data..."}</p>
            </div>
        },
        AnalysisState::Loaded { .. } => html! {},
        AnalysisState::Error(msg) => html! {
            <div class="error-message">
                <strong>{"Error: "}</strong>{msg}
            </div>
        },
    }
}
