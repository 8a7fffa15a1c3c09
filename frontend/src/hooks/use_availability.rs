use chrono::NaiveDate;
use shared::AvailabilityResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

pub struct UseAvailabilityResult {
    /// Availability of the selected date, `None` while loading or without a date
    pub availability: Option<AvailabilityResponse>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Host availability of the selected date, refetched when the date changes.
#[hook]
pub fn use_availability(
    api_client: &ApiClient,
    username: &str,
    date: Option<NaiveDate>,
) -> UseAvailabilityResult {
    let availability = use_state(|| Option::<(NaiveDate, AvailabilityResponse)>::None);
    let is_loading = use_state(|| false);
    let error = use_state(|| Option::<String>::None);
    let latest_request = use_mut_ref(|| Option::<NaiveDate>::None);

    {
        let api_client = api_client.clone();
        let availability = availability.clone();
        let is_loading = is_loading.clone();
        let error = error.clone();
        let latest_request = latest_request.clone();

        use_effect_with((username.to_string(), date), move |(username, date)| {
            *latest_request.borrow_mut() = *date;

            if let Some(date) = *date {
                let username = username.clone();
                is_loading.set(true);
                error.set(None);

                spawn_local(async move {
                    let result = api_client.get_availability(&username, date).await;
                    if *latest_request.borrow() != Some(date) {
                        return;
                    }

                    match result {
                        Ok(response) => availability.set(Some((date, response))),
                        Err(e) => {
                            log::error!(
                                target: "time-picker",
                                "Failed to fetch availability for {}: {}",
                                date,
                                e
                            );
                            let message =
                                format!("Não foi possível carregar os horários: {}", e);
                            error.set(Some(message));
                        }
                    }
                    is_loading.set(false);
                });
            }
            || ()
        });
    }

    // Only hand out the response that matches the date currently selected
    let current = (*availability)
        .as_ref()
        .filter(|(fetched_for, _)| Some(*fetched_for) == date)
        .map(|(_, response)| response.clone());

    UseAvailabilityResult {
        availability: current,
        is_loading: *is_loading,
        error: (*error).clone(),
    }
}
