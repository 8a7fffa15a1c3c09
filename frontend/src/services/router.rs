use wasm_bindgen::JsValue;

/// Pages of the app, addressed by browser path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Step 1, optionally prefilled from the home page claim form
    Register { username: Option<String> },
    ConnectCalendar,
    TimeIntervals,
    UpdateProfile { username: Option<String> },
    Schedule { username: String },
    NotFound,
}

impl Route {
    pub fn from_location(path: &str, search: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["register"] => Route::Register {
                username: query_param(search, "username"),
            },
            ["register", "connect-calendar"] => Route::ConnectCalendar,
            ["register", "time-intervals"] => Route::TimeIntervals,
            ["register", "update-profile"] => Route::UpdateProfile {
                username: query_param(search, "username"),
            },
            ["schedule", username] => Route::Schedule {
                username: username.to_string(),
            },
            _ => Route::NotFound,
        }
    }

    pub fn to_url(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Register {
                username: Some(username),
            } => format!("/register?username={}", username),
            Route::Register { username: None } => "/register".to_string(),
            Route::ConnectCalendar => "/register/connect-calendar".to_string(),
            Route::TimeIntervals => "/register/time-intervals".to_string(),
            Route::UpdateProfile { username: Some(username) } => {
                format!("/register/update-profile?username={}", username)
            }
            Route::UpdateProfile { username: None } => "/register/update-profile".to_string(),
            Route::Schedule { username } => format!("/schedule/{}", username),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Route of the current browser location
    pub fn current() -> Self {
        let Some(location) = web_sys::window().map(|window| window.location()) else {
            return Route::Home;
        };
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        Self::from_location(&path, &search)
    }

    /// Record the route in the browser history
    pub fn push(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(&self.to_url()))
    }
}

fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_from_location() {
        assert_eq!(Route::from_location("/", ""), Route::Home);
        assert_eq!(
            Route::from_location("/register", "?username=jane_doe"),
            Route::Register { username: Some("jane_doe".to_string()) }
        );
        assert_eq!(Route::from_location("/register", ""), Route::Register { username: None });
        assert_eq!(Route::from_location("/register/time-intervals", ""), Route::TimeIntervals);
        assert_eq!(
            Route::from_location("/schedule/jane_doe/", ""),
            Route::Schedule { username: "jane_doe".to_string() }
        );
        assert_eq!(Route::from_location("/schedule", ""), Route::NotFound);
        assert_eq!(Route::from_location("/nope", ""), Route::NotFound);
    }

    #[wasm_bindgen_test]
    fn test_to_url_round_trips() {
        let routes = [
            Route::Home,
            Route::Register { username: Some("jane".to_string()) },
            Route::ConnectCalendar,
            Route::TimeIntervals,
            Route::UpdateProfile { username: Some("jane".to_string()) },
            Route::Schedule { username: "jane".to_string() },
        ];

        for route in routes {
            let url = route.to_url();
            let (path, search) = url.split_once('?').map_or((url.as_str(), ""), |(p, q)| (p, q));
            assert_eq!(Route::from_location(path, search), route);
        }
    }

    #[wasm_bindgen_test]
    fn test_query_param() {
        assert_eq!(query_param("?a=1&username=jane", "username"), Some("jane".to_string()));
        assert_eq!(query_param("?username=", "username"), None);
        assert_eq!(query_param("", "username"), None);
    }
}
