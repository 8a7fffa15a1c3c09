use chrono::{Datelike, NaiveDate};
use ignite_call_domain::build_month_grid;
use ignite_call_domain::locale::{get_week_days, WeekDayFormat};
use ignite_call_domain::ReferenceMonth;
use yew::prelude::*;

use crate::hooks::use_blocked_dates::use_blocked_dates;
use crate::services::api::ApiClient;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub api_client: ApiClient,
    /// Host whose blocked dates apply
    pub username: String,
    pub selected_date: Option<NaiveDate>,
    /// Fired with the date of an enabled cell
    pub on_date_selected: Callback<NaiveDate>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let current_month = use_state(ReferenceMonth::current);
    let blocked_dates = use_blocked_dates(&props.api_client, &props.username, *current_month);
    let today = date_utils::now().date();

    let calendar_weeks = use_memo(
        (*current_month, blocked_dates.rules.clone(), today),
        |(month, rules, _)| build_month_grid(*month, rules.as_ref(), date_utils::now()),
    );

    let on_previous = {
        let current_month = current_month.clone();
        Callback::from(move |_: MouseEvent| current_month.set(current_month.previous()))
    };

    let on_next = {
        let current_month = current_month.clone();
        Callback::from(move |_: MouseEvent| current_month.set(current_month.next()))
    };

    let on_retry = {
        let retry = blocked_dates.retry.clone();
        Callback::from(move |_: MouseEvent| retry.emit(()))
    };

    let (month_name, year) = current_month.title();
    let week_days = get_week_days(WeekDayFormat::Short, true);

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <p class="calendar-title">
                    {month_name}{" "}<span>{year}</span>
                </p>

                <div class="calendar-actions">
                    <button onclick={on_previous} title="Mês anterior">{"‹"}</button>
                    <button onclick={on_next} title="Próximo mês">{"›"}</button>
                </div>
            </div>

            <table class="calendar-body">
                <thead>
                    <tr>
                        {for week_days.iter().map(|day| html! { <th key={day.clone()}>{day}</th> })}
                    </tr>
                </thead>

                <tbody>
                    {for calendar_weeks.iter().map(|week| html! {
                        <tr key={week.week}>
                            {for week.days.iter().map(|cell| {
                                let date = cell.date;
                                let on_click = {
                                    let on_date_selected = props.on_date_selected.clone();
                                    let selectable = cell.selectable_date();
                                    Callback::from(move |_: MouseEvent| {
                                        if let Some(date) = selectable {
                                            on_date_selected.emit(date);
                                        }
                                    })
                                };
                                let class = classes!(
                                    "calendar-day",
                                    (props.selected_date == Some(date)).then_some("selected"),
                                );

                                html! {
                                    <td key={date.to_string()}>
                                        <button {class} disabled={cell.disabled} onclick={on_click}>
                                            {date.day()}
                                        </button>
                                    </td>
                                }
                            })}
                        </tr>
                    })}
                </tbody>
            </table>

            if let Some(error) = blocked_dates.error.as_ref() {
                <div class="calendar-status">
                    <p class="form-message error">{error}</p>
                    <button onclick={on_retry}>{"Tentar novamente"}</button>
                </div>
            } else if blocked_dates.is_loading {
                <p class="calendar-status">{"Carregando..."}</p>
            }
        </div>
    }
}
