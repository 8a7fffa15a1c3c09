use ignite_call_domain::forms::validate_username;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::router::Route;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    html! {
        <main class="home">
            <section class="hero">
                <h1>{"Agendamento descomplicado"}</h1>
                <p>
                    {"Conecte seu calendário e permita que as pessoas marquem agendamentos no seu tempo livre."}
                </p>

                <ClaimUsernameForm on_navigate={props.on_navigate.clone()} />
            </section>
        </main>
    }
}

#[function_component(ClaimUsernameForm)]
fn claim_username_form(props: &HomePageProps) -> Html {
    let username = use_state(String::new);
    let error = use_state(|| Option::<String>::None);

    let on_username_change = {
        let username = username.clone();
        Callback::from(move |e: Event| {
            username.set(e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };

    let on_submit = {
        let username = username.clone();
        let error = error.clone();
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            match validate_username(&username) {
                Ok(username) => {
                    error.set(None);
                    on_navigate.emit(Route::Register {
                        username: Some(username),
                    });
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    html! {
        <>
            <form class="claim-username-form" onsubmit={on_submit}>
                <div class="text-input">
                    <span class="text-input-prefix">{"ignite.com/"}</span>
                    <input
                        type="text"
                        placeholder="seu_usuario"
                        value={(*username).clone()}
                        onchange={on_username_change}
                    />
                </div>
                <button type="submit" class="btn btn-primary">{"Reservar"}</button>
            </form>

            <p class={classes!("form-annotation", error.is_some().then_some("error"))}>
                {error.as_deref().unwrap_or("Digite o nome do usuário desejado")}
            </p>
        </>
    }
}
