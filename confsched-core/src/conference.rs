//! Named schedule sources and the fetch → extract → decode pipeline.

use crate::decode::decode;
use crate::error::ScheduleResult;
use crate::extract::{extract, ExtractStrategy, MissingScriptPolicy};
use crate::schedule::ScheduleDay;
use crate::source::ScheduleClient;

/// A conference whose schedule can be fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Conference {
    /// Short name used on the command line (e.g. "golab")
    pub name: String,
    /// Display title (e.g. "GoLab")
    pub title: String,
    pub url: String,
    pub strategy: ExtractStrategy,
}

/// A conference together with the schedule fetched for it.
#[derive(Debug, Clone)]
pub struct LoadedConference {
    pub conference: Conference,
    pub days: Vec<ScheduleDay>,
}

impl Conference {
    pub fn new(name: &str, title: &str, url: &str, strategy: ExtractStrategy) -> Self {
        Conference {
            name: name.to_string(),
            title: title.to_string(),
            url: url.to_string(),
            strategy,
        }
    }

    /// Conferences available without any configuration.
    pub fn builtin() -> Vec<Conference> {
        vec![
            Conference::new(
                "golab",
                "GoLab",
                "https://golab.io/schedule",
                ExtractStrategy::EmbeddedScript,
            ),
            Conference::new(
                "rustlab",
                "RustLab",
                "https://rustlab.it/schedule",
                ExtractStrategy::EmbeddedScript,
            ),
        ]
    }

    /// Fetch and decode this conference's schedule.
    pub async fn load(
        &self,
        client: &ScheduleClient,
        missing: MissingScriptPolicy,
    ) -> ScheduleResult<LoadedConference> {
        let days = load_schedule(client, &self.url, self.strategy, missing).await?;
        Ok(LoadedConference {
            conference: self.clone(),
            days,
        })
    }
}

/// Fetch `url` and decode the schedule it serves.
pub async fn load_schedule(
    client: &ScheduleClient,
    url: &str,
    strategy: ExtractStrategy,
    missing: MissingScriptPolicy,
) -> ScheduleResult<Vec<ScheduleDay>> {
    let body = client.fetch(url).await?;
    let json = extract(&body, strategy, missing)?;
    decode(&json, strategy)
}
