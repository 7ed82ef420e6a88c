//! Compile-time application configuration.
//!
//! Values come from the environment at build time (see build.rs, which
//! forwards .env entries), with sensible development defaults.

/// Backend origin, without trailing slash.
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// REST API prefix shared by every endpoint.
pub const API_BASE: &str = "/api/v1";

pub fn environment() -> &'static str {
    match option_env!("ENVIRONMENT") {
        Some(env) => env,
        None => "development",
    }
}

/// Full URL for an API path, e.g. `api_url("/tenants")`.
pub fn api_url(path: &str) -> String {
    format!("{}{}{}", BACKEND_URL, API_BASE, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_origin_prefix_and_path() {
        let url = api_url("/auth/me");
        assert!(url.ends_with("/api/v1/auth/me"));
        assert!(url.starts_with("http"));
    }
}
