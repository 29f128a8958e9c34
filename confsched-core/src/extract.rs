//! Locating the schedule JSON inside a fetched page.
//!
//! Sources either serve the JSON document directly (a fixed data endpoint) or
//! embed it in a server-rendered HTML page inside a `__NEXT_DATA__` script
//! block. Which one applies is a property of the source, and the decoder
//! expects a different payload shape for each.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

static NEXT_DATA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<script id="__NEXT_DATA__" type="application/json">(.*?)</script>"#)
        .expect("static regex is valid")
});

/// How the schedule JSON is laid out in the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractStrategy {
    /// The body is the JSON document.
    FixedEndpoint,
    /// The body is an HTML page with a `__NEXT_DATA__` script block.
    #[default]
    EmbeddedScript,
}

/// What to do when an HTML page has no embedded script block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingScriptPolicy {
    /// Fail with [`ScheduleError::ExtractionEmpty`].
    #[default]
    Error,
    /// Return an empty string and let decoding fail later.
    Empty,
}

/// Pull the schedule JSON out of a response body.
pub fn extract(
    body: &[u8],
    strategy: ExtractStrategy,
    missing: MissingScriptPolicy,
) -> ScheduleResult<String> {
    let text = std::str::from_utf8(body)
        .map_err(|e| ScheduleError::Decode(format!("response body is not UTF-8: {e}")))?;

    match strategy {
        ExtractStrategy::FixedEndpoint => Ok(text.to_string()),
        ExtractStrategy::EmbeddedScript => match find_embedded_json(text) {
            Some(json) => {
                tracing::debug!(bytes = json.len(), "found embedded schedule data");
                Ok(json.to_string())
            }
            None => match missing {
                MissingScriptPolicy::Error => Err(ScheduleError::ExtractionEmpty),
                MissingScriptPolicy::Empty => {
                    tracing::warn!("no __NEXT_DATA__ block in page, continuing with empty payload");
                    Ok(String::new())
                }
            },
        },
    }
}

/// First `__NEXT_DATA__` block's trimmed contents, if any.
pub fn find_embedded_json(html: &str) -> Option<&str> {
    NEXT_DATA_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}
