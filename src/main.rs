use yew::prelude::*;

use climate_dashboard::components::{
    AdditionalParameterPanel, DatePicker, DownloadButton, HumidityPanel, LocationPicker,
    PreferenceForm, RainPanel, ResultsHeader, Status, TemperaturePanel, WindPanel,
};
use climate_dashboard::hooks::use_climate_analysis::use_climate_analysis;
use climate_dashboard::models::{
    calendar::DateSelection, location::Coordinates, preferences::UserPreferences,
};
use climate_dashboard::services::climate_api::ClimateQuery;

#[function_component(App)]
fn app() -> Html {
    let preferences = use_state(UserPreferences::default);
    let coordinates = use_state(Coordinates::default);
    let date = use_state(DateSelection::default);
    let analysis = use_climate_analysis();

    let on_location_change = {
        let coordinates = coordinates.clone();
        Callback::from(move |next| coordinates.set(next))
    };

    let on_date_change = {
        let date = date.clone();
        Callback::from(move |next| date.set(next))
    };

    let on_preferences_change = {
        let preferences = preferences.clone();
        Callback::from(move |next| preferences.set(next))
    };

    let on_submit = {
        let analyze = analysis.analyze.clone();
        let (preferences, coordinates, date) =
            (preferences.clone(), coordinates.clone(), date.clone());
        Callback::from(move |()| {
            analyze.emit(ClimateQuery::from_inputs(*coordinates, *date, &preferences));
        })
    };

    html! {
        <div class="app">
            <header class="app-header">
                <h1>{"Climate Preference Dashboard"}</h1>
                <p class="subtitle">{"Historical climate analysis for any place and day"}</p>
            </header>

            <main class="app-main">
                <LocationPicker coordinates={*coordinates} on_change={on_location_change} />
                <DatePicker date={*date} on_change={on_date_change} />
                <PreferenceForm
                    preferences={(*preferences).clone()}
                    on_change={on_preferences_change}
                    {on_submit}
                    loading={analysis.state.is_loading()}
                />

                <Status state={analysis.state.clone()} />

                if let (Some(data), Some(query)) = (analysis.state.data(), analysis.state.query()) {
                    <div class="climate-results">
                        <ResultsHeader analysis={data.clone()} />

                        <TemperaturePanel
                            stats={data.temperature.clone()}
                            probability={data.temperature_probability.clone()}
                            ideal_temperature={preferences.ideal_temperature}
                        />
                        <RainPanel
                            rain={data.rain_probability.clone()}
                            ideal_rain={preferences.ideal_rain}
                        />
                        <WindPanel wind={data.wind} ideal_wind_speed={preferences.ideal_wind_speed} />
                        <HumidityPanel
                            stats={data.humidity.clone()}
                            probability={data.humidity_probability.clone()}
                            ideal_humidity={preferences.ideal_humidity}
                        />

                        {
                            data.additional_parameters.iter().map(|stats| html! {
                                <AdditionalParameterPanel
                                    key={stats.parameter_name.clone()}
                                    stats={stats.clone()}
                                />
                            }).collect::<Html>()
                        }

                        <DownloadButton
                            analysis={data.clone()}
                            preferences={(*preferences).clone()}
                            query={query.clone()}
                        />
                    </div>
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
