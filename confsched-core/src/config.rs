//! Configuration at ~/.config/confsched/config.toml

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use ::config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::conference::Conference;
use crate::error::{ScheduleError, ScheduleResult};
use crate::extract::{ExtractStrategy, MissingScriptPolicy};
use crate::source::{ScheduleClient, StatusPolicy};

static CONFIG_DIR_NAME: &str = "confsched";
static PREFERENCES_FILE: &str = "preferences.json";

fn default_retries() -> u32 {
    1
}

fn default_retry_backoff_ms() -> u64 {
    500
}

/// A conference entry under `[conferences.<name>]`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ConferenceConfig {
    pub title: Option<String>,
    pub url: String,
    #[serde(default)]
    pub strategy: ExtractStrategy,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ConfschedConfig {
    /// Where favorites are stored. Defaults to preferences.json next to this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences_path: Option<PathBuf>,

    #[serde(default)]
    pub status_policy: StatusPolicy,

    #[serde(default)]
    pub missing_script: MissingScriptPolicy,

    #[serde(default = "default_retries")]
    pub retries: u32,

    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub conferences: BTreeMap<String, ConferenceConfig>,
}

impl Default for ConfschedConfig {
    fn default() -> Self {
        ConfschedConfig {
            preferences_path: None,
            status_policy: StatusPolicy::default(),
            missing_script: MissingScriptPolicy::default(),
            retries: default_retries(),
            retry_backoff_ms: default_retry_backoff_ms(),
            timeout_secs: None,
            conferences: BTreeMap::new(),
        }
    }
}

impl ConfschedConfig {
    pub fn config_dir() -> ScheduleResult<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| ScheduleError::Config("Could not determine config directory".into()))?
            .join(CONFIG_DIR_NAME);
        Ok(dir)
    }

    pub fn config_path() -> ScheduleResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the user's config, writing a commented default file on first run.
    pub fn load() -> ScheduleResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> ScheduleResult<Self> {
        let config: ConfschedConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| ScheduleError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ScheduleError::Config(e.to_string()))?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ScheduleResult<()> {
        let contents = "\
# confsched configuration

# Where favorites are stored:
# preferences_path = \"~/.config/confsched/preferences.json\"

# Treat non-2xx responses as errors (\"strict\") or use the body anyway (\"lenient\"):
# status_policy = \"strict\"

# When a page has no embedded schedule data: \"error\" or \"empty\"
# missing_script = \"error\"

# Retries after a failed request, and the pause before each:
# retries = 1
# retry_backoff_ms = 500

# Request timeout in seconds (unset or 0 uses the HTTP client default):
# timeout_secs = 30

# Conferences. When none are listed, GoLab and RustLab are used.
# [conferences.golab]
# title = \"GoLab\"
# url = \"https://golab.io/schedule\"
# strategy = \"embedded_script\"
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ScheduleError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ScheduleError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Preference file path, with `~` expanded.
    pub fn preferences_path(&self) -> ScheduleResult<PathBuf> {
        match &self.preferences_path {
            Some(path) => {
                let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
                Ok(PathBuf::from(expanded))
            }
            None => Ok(Self::config_dir()?.join(PREFERENCES_FILE)),
        }
    }

    /// Configured conferences sorted by name, or the built-in ones.
    pub fn conferences(&self) -> Vec<Conference> {
        if self.conferences.is_empty() {
            return Conference::builtin();
        }

        self.conferences
            .iter()
            .map(|(name, c)| Conference {
                name: name.clone(),
                title: c.title.clone().unwrap_or_else(|| name.clone()),
                url: c.url.clone(),
                strategy: c.strategy,
            })
            .collect()
    }

    pub fn find_conference(&self, name: &str) -> ScheduleResult<Conference> {
        let conferences = self.conferences();

        conferences
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .ok_or_else(|| {
                let available: Vec<_> = conferences.iter().map(|c| c.name.as_str()).collect();
                ScheduleError::ConferenceNotFound(format!(
                    "'{}'. Available: {}",
                    name,
                    available.join(", ")
                ))
            })
    }

    /// Configured request timeout. `timeout_secs = 0` means no timeout.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs)
    }

    /// HTTP client set up with the configured status policy, retries and timeout.
    pub fn client(&self) -> ScheduleResult<ScheduleClient> {
        let client = match self.request_timeout() {
            Some(timeout) => ScheduleClient::with_timeout(timeout)?,
            None => ScheduleClient::new(),
        };

        Ok(client
            .status_policy(self.status_policy)
            .retries(self.retries, Duration::from_millis(self.retry_backoff_ms)))
    }
}
