//! Schedule data model: days and the talks within them.

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// One conference day, with its talks in the order the source lists them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub title: String,

    #[serde(rename = "schedule")]
    pub talks: Vec<Talk>,
}

/// A single talk. `id` is the stable key used for favorites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talk {
    pub id: String,
    pub title: String,

    #[serde(rename = "time")]
    pub start_time: DateTime<FixedOffset>,

    #[serde(rename = "durationInMinutes", default, deserialize_with = "null_as_default")]
    pub duration_minutes: u32,

    #[serde(rename = "text", default, deserialize_with = "null_as_default")]
    pub description: String,
}

/// Missing and null both decode to the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Talk {
    pub fn end_time(&self) -> DateTime<FixedOffset> {
        self.start_time + Duration::minutes(i64::from(self.duration_minutes))
    }
}

impl ScheduleDay {
    /// Total number of talks across a set of days.
    pub fn count_talks(days: &[ScheduleDay]) -> usize {
        days.iter().map(|d| d.talks.len()).sum()
    }

    pub fn find_talk<'a>(days: &'a [ScheduleDay], id: &str) -> Option<&'a Talk> {
        days.iter().flat_map(|d| d.talks.iter()).find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn talk(id: &str, time: &str, minutes: u32) -> Talk {
        Talk {
            id: id.to_string(),
            title: format!("Talk {id}"),
            start_time: DateTime::parse_from_rfc3339(time).unwrap(),
            duration_minutes: minutes,
            description: String::new(),
        }
    }

    #[test]
    fn test_end_time_adds_duration() {
        let t = talk("a", "2023-11-20T10:00:00+01:00", 45);
        assert_eq!(t.end_time().to_rfc3339(), "2023-11-20T10:45:00+01:00");
    }

    #[test]
    fn test_find_talk_across_days() {
        let days = vec![
            ScheduleDay {
                title: "Day 1".into(),
                talks: vec![talk("a", "2023-11-20T10:00:00+01:00", 30)],
            },
            ScheduleDay {
                title: "Day 2".into(),
                talks: vec![talk("b", "2023-11-21T10:00:00+01:00", 30)],
            },
        ];

        assert_eq!(ScheduleDay::count_talks(&days), 2);
        assert_eq!(ScheduleDay::find_talk(&days, "b").map(|t| t.title.as_str()), Some("Talk b"));
        assert!(ScheduleDay::find_talk(&days, "zzz").is_none());
    }
}
