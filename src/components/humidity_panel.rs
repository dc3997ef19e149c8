use crate::components::chart::DistributionChart;
use crate::components::panel::{DayBreakdown, SliderTrack};
use crate::models::climate::{HumidityProbability, HumidityStats};
use crate::models::views::HumidityView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HumidityPanelProps {
    pub stats: HumidityStats,
    pub probability: HumidityProbability,
    pub ideal_humidity: f64,
}

#[function_component(HumidityPanel)]
pub fn humidity_panel(props: &HumidityPanelProps) -> Html {
    let view = HumidityView::new(&props.stats, &props.probability, props.ideal_humidity);

    html! {
        <div class="data-field humidity-field">
            <h3 class="field-title">{"💧 Humidity"}</h3>

            <SliderTrack marker={view.marker.clone()} />

            <div class="info-panel most-likely">
                <div class="panel-label">{"average humidity:"}</div>
                <div class="panel-main-value">{&view.average}</div>
                <div class="panel-comparison">{&view.comparison}</div>
            </div>

            <div class="info-panel probability">
                <div class="panel-icon">{"📊"}</div>
                <div class="panel-content">
                    <div class="probability-text">{&view.typical_range}</div>
                </div>
            </div>

            <div class="info-panel trend">
                <div class="panel-content">
                    <div class="trend-text">{&view.classification}</div>
                </div>
            </div>

            <div class="info-panel std-dev">
                <div class="panel-header">{view.variability.label()}</div>
                <div class="panel-description">{view.variability_description}</div>
                <div class="panel-stats">
                    <div>{&view.std_dev}</div>
                    <div>{&view.range}</div>
                </div>
            </div>

            <DayBreakdown title="Historical Distribution" days={view.days.clone()} />
            <DistributionChart
                id="humidity-distribution"
                title="Humidity days"
                days={view.days.clone()}
                color="#00b4a0"
            />
        </div>
    }
}
