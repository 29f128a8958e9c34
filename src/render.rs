//! Terminal rendering for schedules.
//!
//! Days are printed as collapsible sections; each talk row gets its text
//! through the core's `TextSink` binding.

use chrono::Local;
use confsched_core::conference::LoadedConference;
use confsched_core::favorites::Favorites;
use confsched_core::preferences::PreferenceStore;
use confsched_core::presenter::{bind_row, RowContext, TextSink};
use confsched_core::{ScheduleDay, ScheduleResult};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// One talk row in the terminal.
pub struct TerminalRow {
    ctx: RowContext,
    text: String,
    favorite: bool,
}

impl TerminalRow {
    pub fn new(ctx: RowContext, favorite: bool) -> Self {
        TerminalRow {
            ctx,
            text: String::new(),
            favorite,
        }
    }

    pub fn set_favorite(&mut self, favorite: bool) {
        self.favorite = favorite;
    }

    /// Build the row at `ctx`, with its label bound from the schedule.
    pub fn bind<S: PreferenceStore>(
        days: &[ScheduleDay],
        ctx: RowContext,
        favorites: &Favorites<S>,
    ) -> ScheduleResult<Self> {
        let talk = ctx.resolve(days)?;
        let mut row = TerminalRow::new(ctx, favorites.is_favorite(&talk.id));
        bind_row(days, ctx, favorites, &Local, &mut row)?;
        Ok(row)
    }
}

impl TextSink for TerminalRow {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

impl Render for TerminalRow {
    fn render(&self) -> String {
        // Shown 1-based, matching the `toggle` arguments
        let number = format!("{:>2}.{:<2}", self.ctx.day + 1, self.ctx.row + 1);
        let text = if self.favorite {
            self.text.yellow().to_string()
        } else {
            self.text.clone()
        };
        format!("   {} {}", number.dimmed(), text)
    }
}

impl Render for LoadedConference {
    fn render(&self) -> String {
        format!("📅 {}", self.conference.title.bold())
    }
}

/// Render one day. Collapsed days show only their header.
pub fn render_day<S: PreferenceStore>(
    days: &[ScheduleDay],
    day_index: usize,
    favorites: &Favorites<S>,
    expanded: bool,
    favorites_only: bool,
) -> ScheduleResult<Vec<String>> {
    let day = &days[day_index];

    let visible: Vec<usize> = (0..day.talks.len())
        .filter(|&i| !favorites_only || favorites.is_favorite(&day.talks[i].id))
        .collect();

    if favorites_only && visible.is_empty() {
        return Ok(Vec::new());
    }

    let mut lines = Vec::new();
    let count = format!("({} {})", visible.len(), pluralize("talk", visible.len()));

    if expanded {
        lines.push(format!(" ▾ {} {}", day.title.bold(), count.dimmed()));
        for row in visible {
            let row = TerminalRow::bind(days, RowContext::new(day_index, row), favorites)?;
            lines.push(row.render());
        }
    } else {
        lines.push(format!(" ▸ {} {}", day.title, count.dimmed()));
    }

    Ok(lines)
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
