pub mod logic;

/// Where the web service listens by default
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/";
