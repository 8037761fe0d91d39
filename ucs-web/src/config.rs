use std::env;

pub const DEFAULT_COURSES_URL: &str = "https://api.devhub.virginia.edu/v1/courses";

/// Runtime configuration, read from the environment with defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub port: u16,
    pub courses_url: String,
    pub request_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Self {
        let bind = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(3000);
        let courses_url =
            env::var("COURSES_URL").unwrap_or_else(|_| DEFAULT_COURSES_URL.to_string());
        let request_timeout_seconds = env::var("REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        Self {
            bind,
            port,
            courses_url,
            request_timeout_seconds,
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, port: Option<u16>, courses_url: Option<String>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(courses_url) = courses_url {
            self.courses_url = courses_url;
        }
        self
    }
}
