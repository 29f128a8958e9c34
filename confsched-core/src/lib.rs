//! Core of confsched: fetch a conference schedule, pull the embedded JSON
//! out of the page, decode it into days and talks, and keep a persisted set
//! of favorite talks.
//!
//! - `source` fetches pages over HTTP
//! - `extract` and `decode` turn a page into [`ScheduleDay`]s
//! - `favorites` and `preferences` store the favorite talk ids
//! - `presenter` produces row text for whatever draws the schedule

pub mod conference;
pub mod config;
pub mod decode;
pub mod error;
pub mod extract;
pub mod favorites;
pub mod preferences;
pub mod presenter;
pub mod schedule;
pub mod source;

pub use error::{ScheduleError, ScheduleResult};
pub use schedule::{ScheduleDay, Talk};
