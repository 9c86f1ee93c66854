//! Client configuration

use serde::Deserialize;

/// Construction settings for the queue client
///
/// Every field is required; there are no defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Region the queue is served from
    pub region: String,

    /// Full queue URL, including account and queue name
    pub queue_url: String,

    /// Access key id used in the credential scope
    pub access_key: String,

    /// Secret key the signing key is derived from
    pub secret_key: String,

    /// Batch size requested per receive call (provider window is 1..=10)
    pub max_number_of_messages: u32,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("minisqs").required(false))
            .add_source(config::Environment::with_prefix("MINISQS"))
            .build()?;

        Ok(config.try_deserialize::<Config>()?)
    }
}
