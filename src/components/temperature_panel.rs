use crate::components::chart::DistributionChart;
use crate::components::panel::{DayBreakdown, SliderTrack};
use crate::models::climate::{TemperatureProbability, TemperatureStats};
use crate::models::views::TemperatureView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TemperaturePanelProps {
    pub stats: TemperatureStats,
    pub probability: TemperatureProbability,
    pub ideal_temperature: f64,
}

#[function_component(TemperaturePanel)]
pub fn temperature_panel(props: &TemperaturePanelProps) -> Html {
    let view = TemperatureView::new(&props.stats, &props.probability, props.ideal_temperature);

    html! {
        <div class="data-field temperature-field">
            <h3 class="field-title">{"🌡️ Temperature"}</h3>

            <SliderTrack marker={view.marker.clone()} />

            <div class="info-panel most-likely">
                <div class="panel-label">{"most likely temperature:"}</div>
                <div class="panel-main-value">{&view.most_likely}</div>
                <div class="panel-comparison">{&view.comparison}</div>
            </div>

            <div class="info-panel probability">
                <div class="panel-icon">{"📊"}</div>
                <div class="panel-content">
                    <div class="probability-text">{&view.typical_range}</div>
                </div>
            </div>

            <div class="info-panel trend">
                <div class="panel-icon">{"📈"}</div>
                <div class="panel-content">
                    <div class="trend-text">{&view.trend}</div>
                </div>
            </div>

            <div class="info-panel std-dev">
                <div class="panel-header">{view.variability.label()}</div>
                <div class="panel-description">{view.variability_description}</div>
                <div class="panel-stats">
                    <div>{&view.std_dev}</div>
                    <div>{&view.coefficient_of_variation}</div>
                </div>
            </div>

            <div class="stats-grid">
                {
                    view.stats.iter().map(|(label, value)| html! {
                        <div class="stat-card" key={*label}>
                            <div class="stat-label">{*label}</div>
                            <div class="stat-value">{value}</div>
                        </div>
                    }).collect::<Html>()
                }
            </div>

            <DayBreakdown title="Historical Distribution" days={view.days.clone()} />
            <DistributionChart
                id="temperature-distribution"
                title="Temperature days"
                days={view.days.clone()}
                color="#fe6100"
            />
        </div>
    }
}
