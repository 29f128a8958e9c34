//! What the core hands to whatever draws the schedule.
//!
//! A presenter only needs row text. Rows are addressed by [`RowContext`]
//! (day index plus row index) instead of per-row closures, and written into
//! anything implementing [`TextSink`].

use std::fmt::Display;

use chrono::TimeZone;

use crate::error::{ScheduleError, ScheduleResult};
use crate::favorites::Favorites;
use crate::preferences::PreferenceStore;
use crate::schedule::{ScheduleDay, Talk};

/// Prefix for rows whose talk is a favorite.
pub const FAVORITE_MARKER: &str = "⭐ ";

/// A row widget that can display a line of text.
pub trait TextSink {
    fn set_text(&mut self, text: &str);
}

impl TextSink for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Position of a talk row within a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowContext {
    pub day: usize,
    pub row: usize,
}

impl RowContext {
    pub fn new(day: usize, row: usize) -> Self {
        RowContext { day, row }
    }

    /// Resolve to the talk at this position.
    pub fn resolve<'a>(&self, days: &'a [ScheduleDay]) -> ScheduleResult<&'a Talk> {
        days.get(self.day)
            .and_then(|d| d.talks.get(self.row))
            .ok_or(ScheduleError::RowOutOfRange {
                day: self.day,
                row: self.row,
            })
    }
}

/// `[HH:MM] - <title>`, with the favorite marker in front when `favorite`.
/// The time is shown in `tz`.
pub fn talk_label<Tz>(talk: &Talk, favorite: bool, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let time = talk.start_time.with_timezone(tz).format("%H:%M");
    let label = format!("[{}] - {}", time, talk.title);

    if favorite {
        format!("{FAVORITE_MARKER}{label}")
    } else {
        label
    }
}

/// Render the row at `ctx` into `sink`.
pub fn bind_row<S, Tz, T>(
    days: &[ScheduleDay],
    ctx: RowContext,
    favorites: &Favorites<S>,
    tz: &Tz,
    sink: &mut T,
) -> ScheduleResult<()>
where
    S: PreferenceStore,
    Tz: TimeZone,
    Tz::Offset: Display,
    T: TextSink + ?Sized,
{
    let talk = ctx.resolve(days)?;
    sink.set_text(&talk_label(talk, favorites.is_favorite(&talk.id), tz));
    Ok(())
}

/// Handle a selection on the row at `ctx`: toggle its talk, then redraw the
/// row into `sink`. Returns the talk's new favorite state.
pub fn select_row<S, Tz, T>(
    days: &[ScheduleDay],
    ctx: RowContext,
    favorites: &mut Favorites<S>,
    tz: &Tz,
    sink: &mut T,
) -> ScheduleResult<bool>
where
    S: PreferenceStore,
    Tz: TimeZone,
    Tz::Offset: Display,
    T: TextSink + ?Sized,
{
    let talk = ctx.resolve(days)?;
    let favorite = favorites.toggle(&talk.id)?;
    sink.set_text(&talk_label(talk, favorite, tz));
    Ok(favorite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryPreferences;
    use chrono::{DateTime, FixedOffset, Utc};

    fn talk(id: &str, title: &str, time: &str) -> Talk {
        Talk {
            id: id.to_string(),
            title: title.to_string(),
            start_time: DateTime::parse_from_rfc3339(time).unwrap(),
            duration_minutes: 30,
            description: String::new(),
        }
    }

    fn days() -> Vec<ScheduleDay> {
        vec![ScheduleDay {
            title: "Day 1".into(),
            talks: vec![
                talk("t1", "Keynote", "2023-11-20T09:05:00+01:00"),
                talk("t2", "Generics", "2023-11-20T10:30:00+01:00"),
            ],
        }]
    }

    fn cet() -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }

    #[test]
    fn test_label_marks_only_favorites() {
        let mut favorites = Favorites::load(MemoryPreferences::default());
        favorites.toggle("t1").unwrap();

        let days = days();
        let mut row = String::new();

        bind_row(&days, RowContext::new(0, 0), &favorites, &cet(), &mut row).unwrap();
        assert_eq!(row, "⭐ [09:05] - Keynote");

        bind_row(&days, RowContext::new(0, 1), &favorites, &cet(), &mut row).unwrap();
        assert_eq!(row, "[10:30] - Generics");
    }

    #[test]
    fn test_label_uses_presenter_timezone() {
        let t = talk("t1", "Keynote", "2023-11-20T09:05:00+01:00");
        assert_eq!(talk_label(&t, false, &Utc), "[08:05] - Keynote");
    }

    #[test]
    fn test_select_row_toggles_and_redraws() {
        let mut favorites = Favorites::load(MemoryPreferences::default());
        let days = days();
        let mut row = String::new();

        assert!(select_row(&days, RowContext::new(0, 1), &mut favorites, &cet(), &mut row).unwrap());
        assert_eq!(row, "⭐ [10:30] - Generics");

        assert!(!select_row(&days, RowContext::new(0, 1), &mut favorites, &cet(), &mut row).unwrap());
        assert_eq!(row, "[10:30] - Generics");
    }

    #[test]
    fn test_out_of_range_row() {
        let favorites = Favorites::load(MemoryPreferences::default());
        let mut row = String::new();

        let result = bind_row(&days(), RowContext::new(0, 5), &favorites, &cet(), &mut row);
        assert!(matches!(result, Err(ScheduleError::RowOutOfRange { day: 0, row: 5 })));

        let days = days();
        let result = RowContext::new(3, 0).resolve(&days);
        assert!(matches!(result, Err(ScheduleError::RowOutOfRange { day: 3, row: 0 })));
    }
}
