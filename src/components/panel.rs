use crate::models::views::{DayCount, SliderMarker};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SliderTrackProps {
    pub marker: SliderMarker,
    /// Show the value above the thumb
    #[prop_or(false)]
    pub show_value: bool,
}

/// Read-only track showing where the user's ideal value sits in the slider range
#[function_component(SliderTrack)]
pub fn slider_track(props: &SliderTrackProps) -> Html {
    let marker = &props.marker;
    let style = format!("left: {}%;", marker.position_percent);

    html! {
        <div class="slider-visualization">
            <div class="slider-label">{marker.caption}</div>
            <div class="slider-track">
                <div class="slider-thumb" {style}>
                    if props.show_value {
                        <div class="slider-thumb-value">{&marker.value_label}</div>
                    }
                </div>
            </div>
            <div class="slider-range">
                <span>{&marker.min_label}</span>
                <span>{&marker.max_label}</span>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DayBreakdownProps {
    pub title: AttrValue,
    pub days: Vec<DayCount>,
}

#[function_component(DayBreakdown)]
pub fn day_breakdown(props: &DayBreakdownProps) -> Html {
    html! {
        <div class="info-panel stats-breakdown">
            <div class="panel-header">{&props.title}</div>
            <div class="stats-grid">
                {
                    props.days.iter().map(|day| html! {
                        <div class="stat-item" key={day.label}>
                            <div class="stat-label">{day.label}</div>
                            <div class="stat-value">{day.count.to_string()}</div>
                            if let Some(share) = &day.share {
                                <div class="stat-detail">{share}</div>
                            }
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
