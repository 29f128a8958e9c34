//! Decoding schedule JSON into [`ScheduleDay`]s.
//!
//! Pages that embed the data wrap it as `props.pageProps.edition.days`; the
//! fixed data endpoint drops the outer `props` layer.

use serde::Deserialize;

use crate::error::ScheduleResult;
use crate::extract::ExtractStrategy;
use crate::schedule::ScheduleDay;

#[derive(Deserialize)]
struct PageData {
    props: Props,
}

#[derive(Deserialize)]
struct Props {
    #[serde(rename = "pageProps")]
    page_props: PageProps,
}

#[derive(Deserialize)]
struct PageProps {
    edition: Edition,
}

#[derive(Deserialize)]
struct Edition {
    days: Vec<ScheduleDay>,
}

/// Decode a payload produced by `extract` with the same strategy.
pub fn decode(json: &str, strategy: ExtractStrategy) -> ScheduleResult<Vec<ScheduleDay>> {
    let days = match strategy {
        ExtractStrategy::EmbeddedScript => {
            let page: PageData = serde_json::from_str(json)?;
            page.props.page_props.edition.days
        }
        ExtractStrategy::FixedEndpoint => {
            let props: Props = serde_json::from_str(json)?;
            props.page_props.edition.days
        }
    };

    tracing::debug!(
        days = days.len(),
        talks = ScheduleDay::count_talks(&days),
        "decoded schedule"
    );

    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;

    const FIXED_PAYLOAD: &str = r#"{
        "pageProps": {
            "edition": {
                "days": [
                    {
                        "title": "Day 1 - Workshops",
                        "schedule": [
                            {"id": "w1", "title": "Go Fundamentals", "time": "2023-11-19T09:30:00+01:00", "durationInMinutes": 240, "text": "Hands on."},
                            {"id": "w2", "title": "Rust Basics", "time": "2023-11-19T14:00:00+01:00", "durationInMinutes": 240, "text": ""}
                        ]
                    },
                    {
                        "title": "Day 2 - Talks",
                        "schedule": [
                            {"id": "t1", "title": "Keynote", "time": "2023-11-20T09:00:00+01:00", "durationInMinutes": 45, "text": "Opening."},
                            {"id": "t2", "title": "Generics in Practice", "time": "2023-11-20T10:00:00+01:00", "durationInMinutes": 40, "text": "Type params."},
                            {"id": "t3", "title": "Closing", "time": "2023-11-20T17:00:00+01:00", "durationInMinutes": 0, "text": ""}
                        ]
                    }
                ]
            }
        }
    }"#;

    #[test]
    fn test_decode_fixed_endpoint_keeps_counts_and_order() {
        let days = decode(FIXED_PAYLOAD, ExtractStrategy::FixedEndpoint).unwrap();

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].title, "Day 1 - Workshops");
        assert_eq!(days[0].talks.len(), 2);
        assert_eq!(days[1].talks.len(), 3);

        let ids: Vec<_> = days[1].talks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3"]);

        let keynote = &days[1].talks[0];
        assert_eq!(keynote.duration_minutes, 45);
        assert_eq!(keynote.description, "Opening.");
        assert_eq!(keynote.start_time.to_rfc3339(), "2023-11-20T09:00:00+01:00");
    }

    #[test]
    fn test_decode_embedded_requires_props_wrapper() {
        let wrapped = format!(r#"{{"props": {FIXED_PAYLOAD}}}"#);
        let days = decode(&wrapped, ExtractStrategy::EmbeddedScript).unwrap();
        assert_eq!(days.len(), 2);

        // Unwrapped payload does not match the embedded shape
        let result = decode(FIXED_PAYLOAD, ExtractStrategy::EmbeddedScript);
        assert!(matches!(result, Err(ScheduleError::Decode(_))));
    }

    #[test]
    fn test_decode_empty_days_is_ok() {
        let json = r#"{"pageProps": {"edition": {"days": []}}}"#;
        assert!(decode(json, ExtractStrategy::FixedEndpoint).unwrap().is_empty());

        let json = r#"{"pageProps": {"edition": {"days": [{"title": "Day 1", "schedule": []}]}}}"#;
        let days = decode(json, ExtractStrategy::FixedEndpoint).unwrap();
        assert_eq!(days.len(), 1);
        assert!(days[0].talks.is_empty());
    }

    #[test]
    fn test_decode_truncated_json_fails() {
        let truncated = &FIXED_PAYLOAD[..FIXED_PAYLOAD.len() / 2];
        let result = decode(truncated, ExtractStrategy::FixedEndpoint);
        assert!(matches!(result, Err(ScheduleError::Decode(_))));
    }

    #[test]
    fn test_decode_schedule_as_number_fails() {
        let json = r#"{"pageProps": {"edition": {"days": [{"title": "Day 1", "schedule": 3}]}}}"#;
        let result = decode(json, ExtractStrategy::FixedEndpoint);
        assert!(matches!(result, Err(ScheduleError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_time_without_offset() {
        let json = r#"{"pageProps": {"edition": {"days": [{"title": "Day 1", "schedule": [
            {"id": "t1", "title": "Keynote", "time": "2023-11-20T09:00:00", "durationInMinutes": 45, "text": ""}
        ]}]}}}"#;
        let result = decode(json, ExtractStrategy::FixedEndpoint);
        assert!(matches!(result, Err(ScheduleError::Decode(_))));
    }

    #[test]
    fn test_decode_missing_or_null_optional_fields_default() {
        let json = r#"{"pageProps": {"edition": {"days": [{"title": "Day 1", "schedule": [
            {"id": "b1", "title": "Coffee break", "time": "2023-11-20T10:30:00+01:00"},
            {"id": "b2", "title": "Lunch", "time": "2023-11-20T13:00:00+01:00", "durationInMinutes": null, "text": null},
            {"id": "t1", "title": "Keynote", "time": "2023-11-20T09:00:00+01:00", "durationInMinutes": 45, "text": "Opening."}
        ]}]}}}"#;

        let days = decode(json, ExtractStrategy::FixedEndpoint).unwrap();
        let talks = &days[0].talks;
        assert_eq!(talks.len(), 3);

        assert_eq!(talks[0].description, "");
        assert_eq!(talks[0].duration_minutes, 0);
        assert_eq!(talks[1].description, "");
        assert_eq!(talks[1].duration_minutes, 0);
        assert_eq!(talks[2].description, "Opening.");
        assert_eq!(talks[2].duration_minutes, 45);
    }

    #[test]
    fn test_decode_text_with_wrong_type_fails() {
        let json = r#"{"pageProps": {"edition": {"days": [{"title": "Day 1", "schedule": [
            {"id": "t1", "title": "Keynote", "time": "2023-11-20T09:00:00+01:00", "durationInMinutes": 45, "text": 12}
        ]}]}}}"#;
        let result = decode(json, ExtractStrategy::FixedEndpoint);
        assert!(matches!(result, Err(ScheduleError::Decode(_))));
    }

    #[test]
    fn test_decode_empty_payload_fails() {
        let result = decode("", ExtractStrategy::EmbeddedScript);
        assert!(matches!(result, Err(ScheduleError::Decode(_))));
    }
}
