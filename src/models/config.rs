//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Settings for the HTTP server and its database.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Fill an empty database with two teams and a hundred members on startup.
    #[serde(default)]
    pub seed_sample_data: bool,
}
