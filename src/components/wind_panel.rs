use crate::components::panel::SliderTrack;
use crate::models::classify::WindClass;
use crate::models::climate::WindStats;
use crate::models::views::WindView;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WindPanelProps {
    pub wind: WindStats,
    pub ideal_wind_speed: f64,
}

#[function_component(WindPanel)]
pub fn wind_panel(props: &WindPanelProps) -> Html {
    let view = WindView::new(&props.wind, props.ideal_wind_speed);

    html! {
        <div class="data-field wind-field">
            <h3 class="field-title">{"💨 Wind"}</h3>

            <SliderTrack marker={view.marker.clone()} show_value={true} />

            <div class="info-panel most-likely">
                <div class="panel-label">{"average wind speed:"}</div>
                <div class="panel-main-value">{&view.average}</div>
                <div class="panel-comparison">{&view.comparison}</div>
            </div>

            <div class="info-panel probability">
                <div class="panel-content">
                    <div class="probability-text">{&view.summary}</div>
                </div>
            </div>

            <div class="info-panel stats-breakdown">
                <div class="panel-header">{"Wind Classification"}</div>
                <div class="wind-scale">
                    {
                        WindClass::all().iter().map(|class| {
                            let item_class = if *class == view.class {
                                "scale-item current"
                            } else {
                                "scale-item"
                            };
                            html! {
                                <div class={item_class} key={class.label()}>
                                    <span class="scale-range">{class.range_label()}</span>
                                    <span class="scale-label">{class.label()}</span>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}
