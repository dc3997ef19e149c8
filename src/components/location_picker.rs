use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

use crate::models::location::{self, Coordinates, MapFrame};

/// Drawing size of the world frame; the SVG scales to its container.
const FRAME: MapFrame = MapFrame {
    width: 360.0,
    height: 180.0,
};

#[derive(Properties, PartialEq)]
pub struct LocationPickerProps {
    pub coordinates: Coordinates,
    pub on_change: Callback<Coordinates>,
}

/// Coordinate inputs plus a clickable latitude/longitude frame
#[function_component(LocationPicker)]
pub fn location_picker(props: &LocationPickerProps) -> Html {
    let coordinates = props.coordinates;
    let map_ref = use_node_ref();

    let on_lat_input = {
        let callback = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(lat) = location::parse_latitude(&input.value()) {
                callback.emit(coordinates.with_lat(lat));
            }
        })
    };

    let on_lon_input = {
        let callback = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(lon) = location::parse_longitude(&input.value()) {
                callback.emit(coordinates.with_lon(lon));
            }
        })
    };

    let on_map_click = {
        let callback = props.on_change.clone();
        let map_ref = map_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(map) = map_ref.cast::<HtmlElement>() else {
                return;
            };
            let rect = map.get_bounding_client_rect();
            let frame = MapFrame::new(rect.width(), rect.height());
            let x = f64::from(e.client_x()) - rect.left();
            let y = f64::from(e.client_y()) - rect.top();
            if let Some(clicked) = frame.coordinates_at(x, y) {
                callback.emit(clicked);
            }
        })
    };

    let (marker_x, marker_y) = FRAME.position_of(coordinates);
    let viewbox = format!("0 0 {} {}", FRAME.width, FRAME.height);

    html! {
        <div class="location-picker">
            <h3 class="location-title">{"📍 Select the Location"}</h3>
            <p class="location-instruction">
                {"Click the map to choose a location or type the coordinates"}
            </p>

            <div class="coordinates-input">
                <div class="input-field">
                    <label for="latitude">{"Latitude:"}</label>
                    <input
                        id="latitude"
                        type="number"
                        step="0.001"
                        min="-90"
                        max="90"
                        value={location::input_value(coordinates.lat)}
                        oninput={on_lat_input}
                        placeholder="-9.665"
                    />
                </div>
                <div class="input-field">
                    <label for="longitude">{"Longitude:"}</label>
                    <input
                        id="longitude"
                        type="number"
                        step="0.001"
                        min="-180"
                        max="180"
                        value={location::input_value(coordinates.lon)}
                        oninput={on_lon_input}
                        placeholder="-35.735"
                    />
                </div>
            </div>

            <div class="map-container" ref={map_ref} onclick={on_map_click}>
                <svg viewBox={viewbox} preserveAspectRatio="none" class="map-frame">
                    <rect x="0" y="0" width="360" height="180" class="map-ocean" />
                    {
                        (1..12).map(|i| {
                            let x = (i * 30).to_string();
                            html! { <line x1={x.clone()} y1="0" x2={x} y2="180" class="map-grid" /> }
                        }).collect::<Html>()
                    }
                    {
                        (1..6).map(|i| {
                            let y = (i * 30).to_string();
                            let class = if i == 3 { "map-grid map-equator" } else { "map-grid" };
                            html! { <line x1="0" y1={y.clone()} x2="360" y2={y} {class} /> }
                        }).collect::<Html>()
                    }
                    <circle
                        cx={marker_x.to_string()}
                        cy={marker_y.to_string()}
                        r="3"
                        class="map-marker"
                    />
                </svg>
            </div>

            <div class="location-info">
                <p><strong>{"Current location: "}</strong>{coordinates.display()}</p>
            </div>
        </div>
    }
}
