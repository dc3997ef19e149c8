use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::preferences::{AdditionalParameter, PreferenceField, UserPreferences};

#[derive(Properties, PartialEq)]
pub struct PreferenceFormProps {
    pub preferences: UserPreferences,
    pub on_change: Callback<UserPreferences>,
    pub on_submit: Callback<()>,
    pub loading: bool,
}

#[function_component(PreferenceForm)]
pub fn preference_form(props: &PreferenceFormProps) -> Html {
    let sliders = PreferenceField::all().iter().map(|&field| {
        let spec = field.spec();
        let value = props.preferences.get(field);

        let oninput = {
            let preferences = props.preferences.clone();
            let callback = props.on_change.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                if let Ok(value) = input.value().parse::<f64>() {
                    callback.emit(preferences.with(field, value));
                }
            })
        };

        html! {
            <div class="input-group" key={field.input_id()}>
                <label for={field.input_id()}>
                    <span class="label-text">{field.label()}</span>
                    <span class="value-display">{spec.format(value)}</span>
                </label>
                <input
                    id={field.input_id()}
                    type="range"
                    min={spec.min.to_string()}
                    max={spec.max.to_string()}
                    step={spec.step.to_string()}
                    value={value.to_string()}
                    {oninput}
                    class="slider"
                />
            </div>
        }
    });

    let parameters = AdditionalParameter::all().iter().map(|&param| {
        let onchange = {
            let preferences = props.preferences.clone();
            let callback = props.on_change.clone();
            Callback::from(move |_: Event| {
                let mut next = preferences.clone();
                next.toggle_parameter(param);
                callback.emit(next);
            })
        };

        html! {
            <label class="parameter-option" key={param.code()}>
                <input
                    type="checkbox"
                    value={param.code()}
                    checked={props.preferences.is_selected(param)}
                    {onchange}
                />
                {param.to_string()}
            </label>
        }
    });

    let onclick = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| on_submit.emit(()))
    };

    html! {
        <div class="user-input-form">
            <h2>{"Configure Your Ideal Preferences"}</h2>

            { for sliders }

            <fieldset class="additional-parameters">
                <legend>{"Additional parameters"}</legend>
                { for parameters }
            </fieldset>

            <button class="submit-button" {onclick} disabled={props.loading}>
                { if props.loading { "Loading..." } else { "Analyze Climate" } }
            </button>
        </div>
    }
}
