//! Remote store credentials.
//!
//! The Supabase project URL and anon key are read from the environment. For
//! local development, create a `.env` file in the project root and define
//! `SUPABASE_URL` and `SUPABASE_ANON_KEY` with your project's credentials.

/// Connection settings for the hosted collection store.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`
    pub base_url: String,
    /// Anon key sent as `apikey` and bearer token on every request
    pub api_key: String,
}

impl RemoteConfig {
    /// Reads `SUPABASE_URL` and `SUPABASE_ANON_KEY` from the environment.
    ///
    /// Both default to the empty string when unset; remote calls will then
    /// fail at request time rather than at startup, and the store layer
    /// logs and carries on.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("SUPABASE_URL").unwrap_or_default(),
            api_key: std::env::var("SUPABASE_ANON_KEY").unwrap_or_default(),
        }
    }

    /// Builds a config from explicit values, mainly for tests.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}
