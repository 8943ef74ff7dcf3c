//! Build-time endpoint configuration.
//!
//! `API_BASE_URL` (e.g. `https://api.example.com/v1`) is read at compile time.
//! Builds without it talk to `/api` on the serving origin.

const DEFAULT_API_BASE: &str = "/api";

#[must_use]
pub fn api_base_url() -> String {
    api_base_with(option_env!("API_BASE_URL").unwrap_or(""))
}

fn api_base_with(base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        base.to_string()
    }
}

/// Join a base URL and a relative path with exactly one slash.
#[must_use]
pub fn join(base: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}
