//! Key-value preference storage holding string lists.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::error::{ScheduleError, ScheduleResult};

/// A store of named string lists.
pub trait PreferenceStore {
    /// `Ok(None)` when the key has never been written.
    fn string_list(&self, key: &str) -> ScheduleResult<Option<Vec<String>>>;

    /// Replace the list stored under `key`.
    fn set_string_list(&mut self, key: &str, values: &[String]) -> ScheduleResult<()>;
}

/// Preferences persisted as a JSON object of string lists.
///
/// Every write rewrites the whole file through a temporary file and a rename.
pub struct FilePreferences {
    path: PathBuf,
    entries: BTreeMap<String, Vec<String>>,
}

impl FilePreferences {
    /// Open the preference file, starting empty if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> ScheduleResult<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|e| {
                    ScheduleError::Preferences(format!(
                        "Could not parse {}: {e}",
                        path.display()
                    ))
                })?
            }
        } else {
            BTreeMap::new()
        };

        Ok(FilePreferences { path, entries })
    }

    /// Like [`FilePreferences::open`], but an unreadable file starts empty.
    /// The next write replaces it.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable preferences");
                FilePreferences {
                    path,
                    entries: BTreeMap::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> ScheduleResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| ScheduleError::Preferences(e.to_string()))?;

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn string_list(&self, key: &str) -> ScheduleResult<Option<Vec<String>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_string_list(&mut self, key: &str, values: &[String]) -> ScheduleResult<()> {
        self.entries.insert(key.to_string(), values.to_vec());
        self.save()
    }
}

/// In-memory preferences, for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryPreferences {
    entries: HashMap<String, Vec<String>>,
}

impl PreferenceStore for MemoryPreferences {
    fn string_list(&self, key: &str) -> ScheduleResult<Option<Vec<String>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set_string_list(&mut self, key: &str, values: &[String]) -> ScheduleResult<()> {
        self.entries.insert(key.to_string(), values.to_vec());
        Ok(())
    }
}
