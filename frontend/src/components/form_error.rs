use std::fmt::Display;

use yew::prelude::*;

/// Message rendered under an invalid field
pub fn field_error(error: Option<&impl Display>) -> Html {
    match error {
        Some(error) => html! { <span class="form-error">{error.to_string()}</span> },
        None => html! {},
    }
}
