use ignite_call_domain::{BlockedDatesCache, BlockedRules, ReferenceMonth};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;

pub struct UseBlockedDatesResult {
    /// Rules of the displayed month, `None` until they arrive
    pub rules: Option<BlockedRules>,
    pub is_loading: bool,
    /// Why the displayed month could not be loaded
    pub error: Option<String>,
    /// Fetch the displayed month again
    pub retry: Callback<()>,
}

/// Blocked rules of `month` for `username`.
///
/// Responses are cached per month of the current host for the lifetime of the
/// component, so navigating back to a month does not refetch it. A response
/// that was superseded by a newer request for the same month, or that belongs
/// to a previous host, is dropped.
#[hook]
pub fn use_blocked_dates(
    api_client: &ApiClient,
    username: &str,
    month: ReferenceMonth,
) -> UseBlockedDatesResult {
    let cache = use_mut_ref(BlockedDatesCache::new);
    // Bumped with each stored response to re-render
    let revision = use_state(|| 0u64);
    // Month whose latest fetch failed, with the message to show
    let failure = use_state(|| Option::<(ReferenceMonth, String)>::None);
    // Bumped by `retry` to run the fetch again
    let attempt = use_state(|| 0u32);

    {
        let api_client = api_client.clone();
        let cache = cache.clone();
        let revision = revision.clone();
        let failure = failure.clone();

        use_effect_with(
            (username.to_string(), month, *attempt),
            move |(username, month, _)| {
                let month = *month;
                // Revisiting a month whose fetch is still pending supersedes that fetch
                let cached = {
                    let mut cache = cache.borrow_mut();
                    cache.set_host(username);
                    cache.get(month).is_some()
                };

                if !cached {
                    if failure.is_some() {
                        failure.set(None);
                    }

                    let ticket = cache.borrow_mut().begin_request(month);
                    let username = username.clone();

                    spawn_local(async move {
                        match api_client.get_blocked_dates(&username, month.query()).await {
                            Ok(response) => {
                                if cache.borrow_mut().complete(ticket, response.into()) {
                                    revision.set(ticket.id());
                                }
                            }
                            Err(e) => {
                                log::error!(
                                    target: "calendar",
                                    "Failed to fetch blocked dates for {}/{}: {}",
                                    month.month(),
                                    month.year(),
                                    e
                                );

                                let is_current = cache.borrow().is_current(ticket);
                                cache.borrow_mut().fail(ticket);
                                if is_current {
                                    let message =
                                        format!("Não foi possível carregar os dias: {}", e);
                                    failure.set(Some((month, message)));
                                }
                            }
                        }
                    });
                }

                || ()
            },
        );
    }

    let retry = {
        let attempt = attempt.clone();
        Callback::from(move |_: ()| attempt.set(*attempt + 1))
    };

    // Until the effect switches the cache, it may still hold another host's rules
    let rules = {
        let cache = cache.borrow();
        (cache.host() == username)
            .then(|| cache.get(month).cloned())
            .flatten()
    };
    let error = (*failure)
        .as_ref()
        .filter(|(failed_month, _)| *failed_month == month)
        .map(|(_, message)| message.clone());

    UseBlockedDatesResult {
        is_loading: rules.is_none() && error.is_none(),
        rules,
        error,
        retry,
    }
}
