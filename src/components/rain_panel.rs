use crate::components::chart::DistributionChart;
use crate::components::panel::{DayBreakdown, SliderTrack};
use crate::models::climate::RainProbability;
use crate::models::views::RainView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RainPanelProps {
    pub rain: RainProbability,
    pub ideal_rain: f64,
}

#[function_component(RainPanel)]
pub fn rain_panel(props: &RainPanelProps) -> Html {
    let view = RainView::new(&props.rain, props.ideal_rain);

    html! {
        <div class="data-field rain-field">
            <h3 class="field-title">{"🌧️ Rain"}</h3>

            <SliderTrack marker={view.marker.clone()} />

            <div class="info-panel most-likely">
                <div class="panel-label">{"chance of rain:"}</div>
                <div class="panel-main-value">{&view.probability}</div>
                <div class="panel-comparison">{&view.comparison}</div>
            </div>

            <div class="info-panel probability">
                <div class="panel-icon">{"📊"}</div>
                <div class="panel-content">
                    <div class="probability-text">{&view.history}</div>
                </div>
            </div>

            <DayBreakdown title="Day History" days={view.days.clone()} />
            <DistributionChart
                id="rain-distribution"
                title="Rainy vs dry days"
                days={view.days.clone()}
                color="#648fff"
            />
        </div>
    }
}
