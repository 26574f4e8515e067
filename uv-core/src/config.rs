use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, time::Duration};

use crate::{
    provider::ProviderId,
    recommend::{LowUvPolicy, RecommendationEngine},
    skin::SkinType,
};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// provider = "backend"
/// api_base_url = "http://localhost:5000/api"
/// timeout_secs = 10
/// fallback_to_mock = true
/// low_uv_policy = "baseline"
/// default_skin_type = 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Provider id, "backend" or "mock". Backend when unset.
    pub provider: Option<String>,

    /// Base URL of the UV index API. Uses [`DEFAULT_API_BASE_URL`] when unset.
    pub api_base_url: Option<String>,

    pub timeout_secs: u64,

    /// Serve the bundled snapshot when the API is unreachable.
    pub fallback_to_mock: bool,

    pub low_uv_policy: LowUvPolicy,

    /// Skin type used when a command is not given one explicitly.
    pub default_skin_type: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: None,
            api_base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            fallback_to_mock: true,
            low_uv_policy: LowUvPolicy::default(),
            default_skin_type: None,
        }
    }
}

impl Config {
    /// Return the provider as a strongly-typed ProviderId.
    pub fn provider_id(&self) -> Result<ProviderId> {
        match self.provider.as_deref() {
            None => Ok(ProviderId::Backend),
            Some(s) => ProviderId::try_from(s),
        }
    }

    pub fn set_provider(&mut self, id: ProviderId) {
        self.provider = Some(id.as_str().to_string());
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn engine(&self) -> RecommendationEngine {
        RecommendationEngine::new(self.low_uv_policy)
    }

    /// Validated default skin type, if one is configured.
    pub fn default_skin_type(&self) -> Result<Option<SkinType>> {
        self.default_skin_type
            .map(|id| SkinType::new(i64::from(id)))
            .transpose()
            .context("Invalid default_skin_type in config")
    }

    /// Load config from disk, or return the default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "uv-index", "uv-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_config_path(dir: &TempDir) -> PathBuf {
        dir.path().join("uv-cli").join("config.toml")
    }

    #[test]
    fn defaults() {
        let cfg = Config::default();

        assert_eq!(cfg.provider_id().expect("default provider"), ProviderId::Backend);
        assert_eq!(cfg.api_base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(cfg.timeout(), Duration::from_secs(10));
        assert!(cfg.fallback_to_mock);
        assert_eq!(cfg.engine().low_uv_policy(), LowUvPolicy::Baseline);
        assert!(cfg.default_skin_type().expect("none is valid").is_none());
    }

    #[test]
    fn set_provider_overrides_default() {
        let mut cfg = Config::default();
        cfg.set_provider(ProviderId::Mock);
        assert_eq!(cfg.provider_id().expect("provider set"), ProviderId::Mock);
    }

    #[test]
    fn unknown_provider_is_an_error() {
        let cfg = Config {
            provider: Some("bom".into()),
            ..Config::default()
        };
        assert!(cfg.provider_id().unwrap_err().to_string().contains("Unknown provider"));
    }

    #[test]
    fn invalid_default_skin_type_is_an_error() {
        let cfg = Config {
            default_skin_type: Some(9),
            ..Config::default()
        };
        let err = cfg.default_skin_type().unwrap_err();
        assert!(format!("{err:#}").contains("between 1 and 6"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            low_uv_policy = "empty"
            default_skin_type = 5
            "#,
        )
        .expect("valid toml");

        assert_eq!(cfg.low_uv_policy, LowUvPolicy::Empty);
        assert_eq!(cfg.default_skin_type().expect("valid").map(|s| s.id()), Some(5));
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(cfg.fallback_to_mock);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().expect("create temp dir");
        let path = temp_config_path(&dir);
        let cfg = Config::load_from(&path).expect("missing file is fine");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().expect("create temp dir");
        let path = temp_config_path(&dir);

        let mut cfg = Config {
            api_base_url: Some("https://uv.example.org/api".into()),
            fallback_to_mock: false,
            default_skin_type: Some(3),
            ..Config::default()
        };
        cfg.set_provider(ProviderId::Mock);

        cfg.save_to(&path).expect("save succeeds");
        let loaded = Config::load_from(&path).expect("load succeeds");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_secs = \"soon\"").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
