use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::calendar::{DateSelection, Month};

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    pub date: DateSelection,
    pub on_change: Callback<DateSelection>,
}

fn selected_number(e: &Event) -> Option<u32> {
    let target: HtmlSelectElement = e.target_unchecked_into();
    target.value().parse().ok()
}

/// Day and month selectors; the year is not chosen since the analysis spans many years
#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let date = props.date;

    let on_day_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(next) = selected_number(&e).and_then(|day| date.with_day(day)) {
                callback.emit(next);
            }
        })
    };

    let on_month_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(month) = selected_number(&e).and_then(Month::from_number) {
                callback.emit(date.with_month(month));
            }
        })
    };

    html! {
        <div class="date-picker">
            <h3 class="date-title">{"📅 Select the Date"}</h3>
            <p class="date-instruction">
                {"Choose the day and month for the historical climate analysis"}
            </p>

            <div class="date-selectors">
                <div class="selector-group">
                    <label for="day-select">{"Day:"}</label>
                    <select id="day-select" class="date-select" onchange={on_day_change}>
                        {
                            date.day_options().map(|d| html! {
                                <option value={d.to_string()} selected={d == date.day()}>
                                    {d.to_string()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                <div class="selector-group">
                    <label for="month-select">{"Month:"}</label>
                    <select id="month-select" class="date-select" onchange={on_month_change}>
                        {
                            Month::all().iter().map(|m| html! {
                                <option value={m.number().to_string()} selected={*m == date.month()}>
                                    {m.label()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>
            </div>

            <div class="date-info">
                <p><strong>{"Selected date: "}</strong>{date.label()}</p>
                <p class="date-note">
                    {"ⓘ The analysis uses historical data for this specific day across many years"}
                </p>
            </div>
        </div>
    }
}
