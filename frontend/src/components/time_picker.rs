use chrono::{NaiveDate, NaiveDateTime};
use ignite_call_domain::schedule::{describe_picker_header, scheduling_instant, time_slots};
use yew::prelude::*;

use crate::hooks::use_availability::use_availability;
use crate::services::api::ApiClient;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct TimePickerProps {
    pub api_client: ApiClient,
    pub username: String,
    pub selected_date: NaiveDate,
    pub on_time_selected: Callback<NaiveDateTime>,
}

#[function_component(TimePicker)]
pub fn time_picker(props: &TimePickerProps) -> Html {
    let result = use_availability(&props.api_client, &props.username, Some(props.selected_date));
    let (week_day, described_date) = describe_picker_header(props.selected_date);

    let body = if let Some(error) = result.error.as_ref() {
        html! { <p class="form-message error">{error}</p> }
    } else if let Some(availability) = result.availability.as_ref() {
        let slots = time_slots(props.selected_date, availability, date_utils::now());

        html! {
            <div class="time-picker-list">
                {for slots.into_iter().map(|slot| {
                    let on_click = {
                        let on_time_selected = props.on_time_selected.clone();
                        let date = props.selected_date;
                        Callback::from(move |_: MouseEvent| {
                            if let Some(instant) = scheduling_instant(date, slot.hour) {
                                on_time_selected.emit(instant);
                            }
                        })
                    };

                    html! {
                        <button key={slot.hour} class="time-picker-item" disabled={!slot.available} onclick={on_click}>
                            {slot.label()}
                        </button>
                    }
                })}
            </div>
        }
    } else if result.is_loading {
        html! { <p class="time-picker-loading">{"Carregando horários..."}</p> }
    } else {
        html! {}
    };

    html! {
        <div class="time-picker">
            <p class="time-picker-header">
                {week_day}{" "}<span>{described_date}</span>
            </p>
            {body}
        </div>
    }
}
