use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Gemini API key. Empty means every generation call fails with an
    /// auth error, which handlers surface as a generic AI-service error.
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// Overridable for tests and regional proxies.
    pub gemini_base_url: String,
    pub upload_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
        }
    }
}
