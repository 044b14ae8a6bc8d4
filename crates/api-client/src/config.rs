use std::sync::OnceLock;

static BASE_URL: OnceLock<String> = OnceLock::new();

/// Backend location used when nothing is configured at build time.
const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Override the backend base URL. Safe to call multiple times — only the
/// first call has effect.
pub fn set_base_url(url: impl Into<String>) {
    let url = url.into();
    BASE_URL.get_or_init(|| normalize(&url));
}

/// The backend base URL, without a trailing slash. Resolves from the
/// `API_BASE_URL` compile-time env var, falling back to the local dev
/// default, unless `set_base_url` ran first.
pub fn base_url() -> &'static str {
    BASE_URL
        .get_or_init(|| normalize(option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)))
        .as_str()
}

/// Join an endpoint path (starting with `/`) onto the base URL.
pub fn endpoint(path: &str) -> String {
    format!("{}{}", base_url(), path)
}

fn normalize(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(normalize("http://api.test/"), "http://api.test");
        assert_eq!(normalize("  http://api.test//  "), "http://api.test");
        assert_eq!(normalize("http://api.test/api"), "http://api.test/api");
    }

    // The OnceLock is process-global, so everything touching it lives in
    // this single test to keep the ordering deterministic.
    #[test]
    fn base_url_is_first_write_wins() {
        set_base_url("http://first.test/api/");
        assert_eq!(base_url(), "http://first.test/api");

        set_base_url("http://second.test/api");
        assert_eq!(base_url(), "http://first.test/api");

        assert_eq!(
            endpoint("/courses/42"),
            "http://first.test/api/courses/42"
        );
    }
}
