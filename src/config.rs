use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

static CONFIG: OnceLock<DispatchConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    pub scheme: String,

    #[serde(deserialize_with = "deserialize_duration")]
    pub connect_timeout: Duration,

    /// Whole request, from connect to the end of the response.
    #[serde(deserialize_with = "deserialize_duration")]
    pub request_timeout: Duration,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            scheme: crate::net::dispatcher::DEFAULT_SCHEME.to_string(),

            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl DispatchConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("fail to read {}: {err}, fall back to default config", path.display());
                return DispatchConfig::default();
            }
        };

        Self::from_toml(&content).unwrap_or_else(|err| {
            tracing::warn!("fail to deserialize config file {}: {err}, fall back to default config", path.display());
            DispatchConfig::default()
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<DispatchConfig>(content)
    }
}

/// Installs the process-wide config. Returns `false` if one was already set.
pub fn set_config(cfg: DispatchConfig) -> bool {
    CONFIG.set(cfg).is_ok()
}

/// Process-wide config, defaults if [`set_config`] was never called.
pub fn config() -> &'static DispatchConfig {
    CONFIG.get_or_init(DispatchConfig::default)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
}
