pub mod config;
pub mod favorites;
pub mod schedule;
pub mod toggle;

use confsched_core::config::ConfschedConfig;
use confsched_core::favorites::Favorites;
use confsched_core::preferences::FilePreferences;
use confsched_core::ScheduleResult;

/// Favorites backed by the configured preference file.
pub fn load_favorites(config: &ConfschedConfig) -> ScheduleResult<Favorites<FilePreferences>> {
    let path = config.preferences_path()?;
    let favorites = Favorites::load(FilePreferences::open_or_empty(&path));
    tracing::debug!(path = %path.display(), count = favorites.len(), "loaded favorites");
    Ok(favorites)
}
