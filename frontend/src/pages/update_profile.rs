use shared::UpdateProfileRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::multi_step::MultiStep;
use crate::services::api::ApiClient;
use crate::services::router::Route;

#[derive(Properties, PartialEq)]
pub struct UpdateProfilePageProps {
    pub api_client: ApiClient,
    /// Signed-in user, used to open their booking page when done
    pub username: Option<String>,
    pub on_navigate: Callback<Route>,
}

#[function_component(UpdateProfilePage)]
pub fn update_profile_page(props: &UpdateProfilePageProps) -> Html {
    let bio = use_state(String::new);
    let submit_error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    let on_bio_change = {
        let bio = bio.clone();
        Callback::from(move |e: Event| {
            bio.set(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        })
    };

    let on_submit = {
        let api_client = props.api_client.clone();
        let username = props.username.clone();
        let on_navigate = props.on_navigate.clone();
        let bio = bio.clone();
        let submit_error = submit_error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let request = UpdateProfileRequest { bio: (*bio).clone() };
            let api_client = api_client.clone();
            let username = username.clone();
            let on_navigate = on_navigate.clone();
            let submit_error = submit_error.clone();
            let is_submitting = is_submitting.clone();
            is_submitting.set(true);

            spawn_local(async move {
                match api_client.update_profile(&request).await {
                    Ok(()) => {
                        submit_error.set(None);
                        let next = match username {
                            Some(username) => Route::Schedule { username },
                            None => Route::Home,
                        };
                        on_navigate.emit(next);
                    }
                    Err(e) => {
                        log::error!(target: "update-profile", "Failed to update profile: {}", e);
                        submit_error.set(Some(e.to_string()));
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
                <MultiStep size={4} current_step={4} />
            </header>

            <form class="profile-box" onsubmit={on_submit}>
                {if let Some(error) = submit_error.as_ref() {
                    html! { <div class="form-message error">{error}</div> }
                } else { html! {} }}

                <label>
                    <span>{"Sobre você"}</span>
                    <textarea rows="6" value={(*bio).clone()} onchange={on_bio_change} />
                    <p class="form-annotation">
                        {"Fale um pouco sobre você. Isto será exibido em sua página pessoal."}
                    </p>
                </label>

                <button type="submit" class="btn btn-primary" disabled={*is_submitting}>
                    {"Finalizar →"}
                </button>
            </form>
        </main>
    }
}
