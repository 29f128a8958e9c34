use anyhow::Result;
use chrono::Local;
use confsched_core::conference::Conference;
use confsched_core::config::ConfschedConfig;
use confsched_core::ScheduleDay;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::load_favorites;
use crate::utils::tui::load_with_spinner;

/// A favorite as printed by `favorites --json`.
#[derive(Serialize)]
struct FavoriteEntry {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    conference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<String>,
}

impl FavoriteEntry {
    fn unresolved(id: &str) -> Self {
        FavoriteEntry {
            id: id.to_string(),
            conference: None,
            title: None,
            start: None,
            end: None,
        }
    }
}

/// List favorites. With `resolve`, schedules are fetched to look up each talk.
pub async fn run(config: &ConfschedConfig, resolve: bool, json: bool) -> Result<()> {
    let favorites = load_favorites(config)?;

    let mut loaded = Vec::new();
    if resolve && !favorites.is_empty() {
        for conference in config.conferences() {
            loaded.push(load_with_spinner(config, &conference).await?);
        }
    }

    let entries: Vec<FavoriteEntry> = favorites
        .ids()
        .iter()
        .map(|id| {
            loaded
                .iter()
                .find_map(|l| resolve_entry(&l.conference, &l.days, id))
                .unwrap_or_else(|| FavoriteEntry::unresolved(id))
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "No favorites yet".dimmed());
        return Ok(());
    }

    println!("{} ({})", "Favorites".bold(), entries.len());
    for entry in &entries {
        match (&entry.title, &entry.conference, &entry.start) {
            (Some(title), Some(conference), Some(start)) => {
                println!("  ⭐ {} {} {}", start.dimmed(), title, format!("[{}]", conference).dimmed());
            }
            _ => println!("  ⭐ {}", entry.id),
        }
    }

    Ok(())
}

fn resolve_entry(conference: &Conference, days: &[ScheduleDay], id: &str) -> Option<FavoriteEntry> {
    let talk = ScheduleDay::find_talk(days, id)?;
    let start = talk.start_time.with_timezone(&Local);
    let end = talk.end_time().with_timezone(&Local);

    Some(FavoriteEntry {
        id: id.to_string(),
        conference: Some(conference.name.clone()),
        title: Some(talk.title.clone()),
        start: Some(start.format("%a %b %-d %H:%M").to_string()),
        end: Some(end.format("%H:%M").to_string()),
    })
}
