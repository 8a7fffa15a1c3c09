use chrono::{NaiveDate, NaiveDateTime};
use yew::prelude::*;

use crate::components::calendar::Calendar;
use crate::components::confirm_step::ConfirmStep;
use crate::components::time_picker::TimePicker;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct SchedulePageProps {
    pub api_client: ApiClient,
    pub username: String,
}

/// Public booking page of a host: pick a day, then an hour, then confirm.
#[function_component(SchedulePage)]
pub fn schedule_page(props: &SchedulePageProps) -> Html {
    let selected_date = use_state(|| Option::<NaiveDate>::None);
    let selected_date_time = use_state(|| Option::<NaiveDateTime>::None);

    let on_date_selected = {
        let selected_date = selected_date.clone();
        Callback::from(move |date: NaiveDate| {
            log::debug!(target: "schedule", "Selected {}", date);
            selected_date.set(Some(date));
        })
    };

    let on_time_selected = {
        let selected_date_time = selected_date_time.clone();
        Callback::from(move |instant: NaiveDateTime| selected_date_time.set(Some(instant)))
    };

    let on_cancel_confirmation = {
        let selected_date_time = selected_date_time.clone();
        Callback::from(move |_: ()| selected_date_time.set(None))
    };

    let content = match *selected_date_time {
        Some(scheduling_date) => html! {
            <ConfirmStep
                api_client={props.api_client.clone()}
                username={props.username.clone()}
                {scheduling_date}
                {on_cancel_confirmation}
            />
        },
        None => html! {
            <div class={classes!("calendar-step", selected_date.is_some().then_some("time-picker-open"))}>
                <Calendar
                    api_client={props.api_client.clone()}
                    username={props.username.clone()}
                    selected_date={*selected_date}
                    {on_date_selected}
                />

                {if let Some(date) = *selected_date {
                    html! {
                        <TimePicker
                            api_client={props.api_client.clone()}
                            username={props.username.clone()}
                            selected_date={date}
                            {on_time_selected}
                        />
                    }
                } else { html! {} }}
            </div>
        },
    };

    html! {
        <main class="schedule">
            <header class="schedule-header">
                <strong>{format!("ignite.com/{}", props.username)}</strong>
            </header>
            {content}
        </main>
    }
}
