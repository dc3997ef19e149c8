use crate::models::climate::AdditionalParameterStats;
use crate::models::views::AdditionalParameterView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdditionalParameterPanelProps {
    pub stats: AdditionalParameterStats,
}

#[function_component(AdditionalParameterPanel)]
pub fn additional_parameter_panel(props: &AdditionalParameterPanelProps) -> Html {
    let view = AdditionalParameterView::new(&props.stats);

    html! {
        <div class="data-field additional-parameter-field">
            <h3 class="field-title">{&view.title}</h3>

            <div class="info-panel most-likely">
                <div class="panel-label">{"Average Value:"}</div>
                <div class="panel-main-value">{&view.average}</div>
                <div class="panel-comparison">{&view.range}</div>
            </div>

            <div class="stats-grid">
                <div class="stat-card">
                    <div class="stat-label">{"Median"}</div>
                    <div class="stat-value">{&view.median}</div>
                </div>
                <div class="stat-card">
                    <div class="stat-label">{"Std. Deviation"}</div>
                    <div class="stat-value">{&view.std_dev}</div>
                </div>
            </div>

            <div class="info-panel percentiles">
                <div class="panel-header">{"Distribution Percentiles"}</div>
                <div class="percentiles-grid">
                    {
                        view.percentiles.iter().map(|(label, value)| html! {
                            <div class="percentile-item" key={*label}>
                                <span class="percentile-label">{format!("{label}:")}</span>
                                <span class="percentile-value">{value}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <div class="info-panel explanation">
                <div class="panel-content">
                    <div class="explanation-text">{&view.explanation}</div>
                </div>
            </div>
        </div>
    }
}
