//! Favorite talks, persisted through a [`PreferenceStore`].

use crate::error::ScheduleResult;
use crate::preferences::PreferenceStore;

/// Preference key holding the favorite talk ids.
pub const FAVORITES_KEY: &str = "favorites";

/// The set of favorite talk ids.
///
/// Mutations are written back to the store immediately, replacing the
/// previously persisted list.
pub struct Favorites<S: PreferenceStore> {
    store: S,
    ids: Vec<String>,
}

impl<S: PreferenceStore> Favorites<S> {
    /// Load favorites from the store. Falls back to an empty set when the key
    /// is missing or cannot be read.
    pub fn load(store: S) -> Self {
        let stored = match store.string_list(FAVORITES_KEY) {
            Ok(list) => list.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read favorites, starting empty");
                Vec::new()
            }
        };

        let mut ids: Vec<String> = Vec::with_capacity(stored.len());
        for id in stored {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        Favorites { store, ids }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    /// Flip the favorite state of `id` and persist. Returns whether `id` is a
    /// favorite afterwards.
    pub fn toggle(&mut self, id: &str) -> ScheduleResult<bool> {
        let mut ids = self.ids.clone();
        let now_favorite = match ids.iter().position(|f| f == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id.to_string());
                true
            }
        };

        // In-memory state only changes once the store has accepted the list
        self.store.set_string_list(FAVORITES_KEY, &ids)?;
        self.ids = ids;
        tracing::debug!(id, favorite = now_favorite, "toggled favorite");

        Ok(now_favorite)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
