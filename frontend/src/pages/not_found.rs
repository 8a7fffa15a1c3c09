use yew::prelude::*;

use crate::services::router::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundPageProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &NotFoundPageProps) -> Html {
    let on_home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(Route::Home))
    };

    html! {
        <main class="not-found">
            <strong>{"Página não encontrada"}</strong>
            <button type="button" class="btn btn-tertiary" onclick={on_home}>{"Voltar ao início"}</button>
        </main>
    }
}
