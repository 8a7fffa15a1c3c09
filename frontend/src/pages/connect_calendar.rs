use yew::prelude::*;

use crate::components::multi_step::MultiStep;
use crate::services::router::Route;

#[derive(Properties, PartialEq)]
pub struct ConnectCalendarPageProps {
    pub on_navigate: Callback<Route>,
}

/// Step 2. Calendar authorization happens on the server side; this page only
/// moves the wizard along.
#[function_component(ConnectCalendarPage)]
pub fn connect_calendar_page(props: &ConnectCalendarPageProps) -> Html {
    let on_next = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::TimeIntervals))
    };

    html! {
        <main class="register">
            <header class="register-header">
                <strong>{"Conecte sua agenda!"}</strong>
                <p>
                    {"Conecte o seu calendário para verificar automaticamente as horas ocupadas e os novos eventos à medida em que são agendados."}
                </p>
                <MultiStep size={4} current_step={2} />
            </header>

            <div class="connect-box">
                <button type="button" class="btn btn-primary" onclick={on_next}>
                    {"Próximo passo →"}
                </button>
            </div>
        </main>
    }
}
