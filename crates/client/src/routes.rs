/// Pages of the front end, keyed by browser path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Heroes,
    Detail(u64),
    NotFound,
}

impl Route {
    /// `/` → home, `/heroes` → list, `/detail/{id}` → detail, anything else → not found.
    /// Query strings, fragments and a trailing slash are ignored.
    pub fn resolve(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            [""] => Route::Home,
            ["heroes"] => Route::Heroes,
            ["detail", id] => id.parse().map(Route::Detail).unwrap_or(Route::NotFound),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> Option<String> {
        match self {
            Route::Home => Some("/".to_string()),
            Route::Heroes => Some("/heroes".to_string()),
            Route::Detail(id) => Some(format!("/detail/{id}")),
            Route::NotFound => None,
        }
    }
}
