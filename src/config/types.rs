use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::store::FavoritesConfig;

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0, containing credentials, upstream endpoints, etc.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct ConfigV1 {
    pub bind_address: String,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
    pub logging: LoggingConfig,
}

/// OAuth client credentials for the upstream identity provider.
///
/// Both fields are optional on purpose: a missing secret is a per-request
/// configuration error, not a startup crash. The values normally arrive
/// through the environment (`LEXGATE_CREDENTIALS__CLIENT_ID` and
/// `LEXGATE_CREDENTIALS__CLIENT_SECRET`).
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone, Default)]
pub struct CredentialsConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

/// Endpoints of the upstream identity provider and legal-data API.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct UpstreamConfig {
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_token_url() -> String {
    "https://oauth.piste.gouv.fr/api/oauth/token".to_string()
}

fn default_api_base_url() -> String {
    "https://api.piste.gouv.fr/dila/legifrance/lf-engine-app".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        UpstreamConfig {
            token_url: default_token_url(),
            api_base_url: default_api_base_url(),
        }
    }
}

/// Load config from a YAML file named "config.yaml" in the current directory,
/// with environment overrides under the `LEXGATE_` prefix.
pub fn load_config() -> ConfigV1 {
    let figment = Figment::new()
        .merge(Yaml::file("./config.yaml"))
        .merge(Env::prefixed("LEXGATE_").split("__"));
    let config = match figment.extract::<Config>() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    };
    match config {
        Config::ConfigV1(c) => c,
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}
