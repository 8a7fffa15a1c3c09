use chrono::NaiveDateTime;
use ignite_call_domain::forms::{validate_confirm_form, ConfirmFormErrors};
use ignite_call_domain::schedule::{describe_date, describe_time};
use shared::CreateSchedulingRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::form_error::field_error;
use crate::services::api::ApiClient;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct ConfirmStepProps {
    pub api_client: ApiClient,
    pub username: String,
    pub scheduling_date: NaiveDateTime,
    /// Fired on cancel and after a successful booking
    pub on_cancel_confirmation: Callback<()>,
}

#[function_component(ConfirmStep)]
pub fn confirm_step(props: &ConfirmStepProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let observations = use_state(String::new);
    let field_errors = use_state(ConfirmFormErrors::default);
    let submit_error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };

    let on_observations_change = {
        let observations = observations.clone();
        Callback::from(move |e: Event| {
            observations.set(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let username = props.username.clone();
        let scheduling_date = props.scheduling_date;
        let on_done = props.on_cancel_confirmation.clone();
        let name = name.clone();
        let email = email.clone();
        let observations = observations.clone();
        let field_errors = field_errors.clone();
        let submit_error = submit_error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let form = match validate_confirm_form(&name, &email, &observations) {
                Ok(form) => form,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };
            field_errors.set(ConfirmFormErrors::default());

            let Some(date) = date_utils::to_local_offset(scheduling_date) else {
                submit_error.set(Some(
                    "Horário inválido para o fuso horário local.".to_string(),
                ));
                return;
            };

            let request = CreateSchedulingRequest {
                name: form.name,
                email: form.email,
                observations: form.observations,
                date,
            };

            let api_client = api_client.clone();
            let username = username.clone();
            let on_done = on_done.clone();
            let submit_error = submit_error.clone();
            let is_submitting = is_submitting.clone();
            is_submitting.set(true);

            spawn_local(async move {
                match api_client.create_scheduling(&username, &request).await {
                    Ok(()) => {
                        log::info!(target: "schedule", "Booked {} with {}", request.date, username);
                        submit_error.set(None);
                        on_done.emit(());
                    }
                    Err(e) => {
                        log::error!(target: "schedule", "Failed to book {}: {}", request.date, e);
                        submit_error.set(Some(e.to_string()));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_cancel = {
        let on_cancel_confirmation = props.on_cancel_confirmation.clone();
        Callback::from(move |_: MouseEvent| on_cancel_confirmation.emit(()))
    };

    html! {
        <form class="confirm-form" onsubmit={on_submit}>
            <div class="confirm-form-header">
                <p>{describe_date(props.scheduling_date.date())}</p>
                <p>{describe_time(props.scheduling_date)}</p>
            </div>

            {if let Some(error) = submit_error.as_ref() {
                html! { <div class="form-message error">{error}</div> }
            } else { html! {} }}

            <label>
                <span>{"Nome completo"}</span>
                <input type="text" placeholder="Seu nome" value={(*name).clone()} onchange={on_name_change} />
                {field_error(field_errors.name.as_ref())}
            </label>

            <label>
                <span>{"Endereço de e-mail"}</span>
                <input type="email" placeholder="jhondoe@example.com" value={(*email).clone()} onchange={on_email_change} />
                {field_error(field_errors.email.as_ref())}
            </label>

            <label>
                <span>{"Observações"}</span>
                <textarea value={(*observations).clone()} onchange={on_observations_change} />
            </label>

            <div class="form-actions">
                <button type="button" class="btn btn-tertiary" onclick={on_cancel}>{"Cancelar"}</button>
                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>{"Confirmar"}</button>
            </div>
        </form>
    }
}
