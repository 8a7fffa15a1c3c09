use ignite_call_domain::forms::{default_time_intervals, validate_time_intervals, TimeIntervalInput};
use ignite_call_domain::locale::{get_week_days, WeekDayFormat};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::multi_step::MultiStep;
use crate::services::api::ApiClient;
use crate::services::router::Route;

#[derive(Properties, PartialEq)]
pub struct TimeIntervalsPageProps {
    pub api_client: ApiClient,
    pub on_navigate: Callback<Route>,
}

#[derive(Clone, Copy)]
enum IntervalField {
    Enabled,
    StartTime,
    EndTime,
}

#[function_component(TimeIntervalsPage)]
pub fn time_intervals_page(props: &TimeIntervalsPageProps) -> Html {
    let intervals = use_state(default_time_intervals);
    let form_error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);
    let week_days = get_week_days(WeekDayFormat::Long, false);

    let on_field_change = {
        let intervals = intervals.clone();
        move |index: usize, field: IntervalField| {
            let intervals = intervals.clone();
            Callback::from(move |e: Event| {
                let input = e.target_unchecked_into::<HtmlInputElement>();
                let mut updated = (*intervals).clone();
                if let Some(interval) = updated.get_mut(index) {
                    match field {
                        IntervalField::Enabled => interval.enabled = input.checked(),
                        IntervalField::StartTime => interval.start_time = input.value(),
                        IntervalField::EndTime => interval.end_time = input.value(),
                    }
                }
                intervals.set(updated);
            })
        }
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let on_navigate = props.on_navigate.clone();
        let intervals = intervals.clone();
        let form_error = form_error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match validate_time_intervals(&intervals) {
                Ok(request) => request,
                Err(e) => {
                    form_error.set(Some(e.to_string()));
                    return;
                }
            };
            form_error.set(None);

            let api_client = api_client.clone();
            let on_navigate = on_navigate.clone();
            let form_error = form_error.clone();
            let is_submitting = is_submitting.clone();
            is_submitting.set(true);

            spawn_local(async move {
                match api_client.set_time_intervals(&request).await {
                    Ok(()) => {
                        log::info!(
                            target: "time-intervals",
                            "Saved {} intervals",
                            request.intervals.len()
                        );
                        on_navigate.emit(Route::UpdateProfile { username: None });
                    }
                    Err(e) => {
                        log::error!(target: "time-intervals", "Failed to save intervals: {}", e);
                        form_error.set(Some(e.to_string()));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let render_interval = |(index, interval): (usize, &TimeIntervalInput)| {
        let day_name = week_days
            .get(interval.week_day as usize)
            .cloned()
            .unwrap_or_default();

        html! {
            <div key={interval.week_day} class="interval-item">
                <div class="interval-day">
                    <input
                        type="checkbox"
                        checked={interval.enabled}
                        onchange={on_field_change(index, IntervalField::Enabled)}
                    />
                    <span>{day_name}</span>
                </div>

                <div class="interval-inputs">
                    <input
                        type="time"
                        step="60"
                        value={interval.start_time.clone()}
                        disabled={!interval.enabled}
                        onchange={on_field_change(index, IntervalField::StartTime)}
                    />
                    <input
                        type="time"
                        step="60"
                        value={interval.end_time.clone()}
                        disabled={!interval.enabled}
                        onchange={on_field_change(index, IntervalField::EndTime)}
                    />
                </div>
            </div>
        }
    };

    html! {
        <main class="register">
            <header class="register-header">
                <strong>{"Quase lá"}</strong>
                <p>{"Defina o intervalo de horários que você está disponível em cada dia da semana."}</p>
                <MultiStep size={4} current_step={3} />
            </header>

            <form class="interval-box" onsubmit={on_submit}>
                <div class="intervals-container">
                    {for intervals.iter().enumerate().map(render_interval)}
                </div>

                {if let Some(error) = form_error.as_ref() {
                    html! { <p class="form-error">{error}</p> }
                } else { html! {} }}

                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                    {"Próximo passo →"}
                </button>
            </form>
        </main>
    }
}
