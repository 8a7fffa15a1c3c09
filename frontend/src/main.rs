mod components;
mod hooks;
mod pages;
mod services;

use gloo::events::EventListener;
use yew::prelude::*;

use crate::pages::connect_calendar::ConnectCalendarPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::register::RegisterPage;
use crate::pages::schedule::SchedulePage;
use crate::pages::time_intervals::TimeIntervalsPage;
use crate::pages::update_profile::UpdateProfilePage;
use crate::services::api::ApiClient;
use crate::services::config::AppConfig;
use crate::services::logging::ConsoleLogger;
use crate::services::router::Route;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let route = use_state(Route::current);
    // Username registered in this session, carried to the booking page
    let registered_username = use_state(|| Option::<String>::None);

    // Browser back/forward
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "popstate", move |_| route.set(Route::current()))
            });
            move || drop(listener)
        });
    }

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            if let Err(e) = next.push() {
                log::warn!(
                    target: "router",
                    "Failed to update history for {}: {:?}",
                    next.to_url(),
                    e
                );
            }
            route.set(next);
        })
    };

    let on_registered = {
        let registered_username = registered_username.clone();
        Callback::from(move |username: String| registered_username.set(Some(username)))
    };

    let api_client = (*api_client).clone();

    match (*route).clone() {
        Route::Home => html! { <HomePage {on_navigate} /> },
        Route::Register { username } => html! {
            <RegisterPage {api_client} {username} {on_registered} {on_navigate} />
        },
        Route::ConnectCalendar => html! { <ConnectCalendarPage {on_navigate} /> },
        Route::TimeIntervals => html! { <TimeIntervalsPage {api_client} {on_navigate} /> },
        Route::UpdateProfile { username } => {
            let username = username.or_else(|| (*registered_username).clone());
            html! { <UpdateProfilePage {api_client} {username} {on_navigate} /> }
        }
        Route::Schedule { username } => html! {
            <SchedulePage key={username.clone()} {api_client} username={username.clone()} />
        },
        Route::NotFound => html! { <NotFoundPage {on_navigate} /> },
    }
}

fn main() {
    let config = AppConfig::from_env();
    if let Err(e) = ConsoleLogger::init(config.log_level) {
        gloo::console::error!(format!("Failed to install logger: {}", e));
    }
    log::info!(target: "app", "Starting Ignite Call against {}", config.api_base_url);

    yew::Renderer::<App>::new().render();
}
