use ignite_call_domain::forms::{validate_register_form, RegisterFormErrors};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::form_error::field_error;
use crate::components::multi_step::MultiStep;
use crate::services::api::ApiClient;
use crate::services::router::Route;

#[derive(Properties, PartialEq)]
pub struct RegisterPageProps {
    pub api_client: ApiClient,
    /// Username claimed on the home page
    pub username: Option<String>,
    /// Fired with the username once the account exists
    pub on_registered: Callback<String>,
    pub on_navigate: Callback<Route>,
}

#[function_component(RegisterPage)]
pub fn register_page(props: &RegisterPageProps) -> Html {
    let username = use_state(|| props.username.clone().unwrap_or_default());
    let name = use_state(String::new);
    let field_errors = use_state(RegisterFormErrors::default);
    let submit_error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    // Keep the prefilled username in sync when arriving from the claim form
    {
        let username = username.clone();
        use_effect_with(props.username.clone(), move |claimed| {
            if let Some(claimed) = claimed {
                username.set(claimed.clone());
            }
        });
    }

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |e: Event| {
            username.set(e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            name.set(e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let on_registered = props.on_registered.clone();
        let on_navigate = props.on_navigate.clone();
        let username = username.clone();
        let name = name.clone();
        let field_errors = field_errors.clone();
        let submit_error = submit_error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = match validate_register_form(&username, &name) {
                Ok(request) => request,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };
            field_errors.set(RegisterFormErrors::default());

            let api_client = api_client.clone();
            let on_registered = on_registered.clone();
            let on_navigate = on_navigate.clone();
            let submit_error = submit_error.clone();
            let is_submitting = is_submitting.clone();
            is_submitting.set(true);

            spawn_local(async move {
                match api_client.create_user(&request).await {
                    Ok(()) => {
                        log::info!(target: "register", "Registered {}", request.username);
                        submit_error.set(None);
                        on_registered.emit(request.username.clone());
                        on_navigate.emit(Route::ConnectCalendar);
                    }
                    Err(e) => {
                        log::error!(
                            target: "register",
                            "Failed to register {}: {}",
                            request.username,
                            e
                        );
                        let message = e
                            .server_message()
                            .map_or_else(|| e.to_string(), str::to_string);
                        submit_error.set(Some(message));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <main class="register">
            <header class="register-header">
                <strong>{"Bem-vindo ao Ignite Call!"}</strong>
                <p>
                    {"Precisamos de algumas informações para criar seu perfil! Ah, você pode editar essas informações depois."}
                </p>
                <MultiStep size={4} current_step={1} />
            </header>

            <form class="register-form" onsubmit={on_submit}>
                {if let Some(error) = submit_error.as_ref() {
                    html! { <div class="form-message error">{error}</div> }
                } else { html! {} }}

                <label>
                    <span>{"Nome de usuário"}</span>
                    <div class="text-input">
                        <span class="text-input-prefix">{"ignite.com/"}</span>
                        <input
                            type="text"
                            placeholder="seu_usuario"
                            value={(*username).clone()}
                            onchange={on_username_change}
                        />
                    </div>
                    {field_error(field_errors.username.as_ref())}
                </label>

                <label>
                    <span>{"Nome completo"}</span>
                    <input type="text" placeholder="Seu Nome" value={(*name).clone()} onchange={on_name_change} />
                    {field_error(field_errors.name.as_ref())}
                </label>

                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                    {"Próximo passo →"}
                </button>
            </form>
        </main>
    }
}
