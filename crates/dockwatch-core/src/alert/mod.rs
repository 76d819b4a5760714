//! Deadline bucketing and alert report composition.
//!
//! Pending departures are classified by minutes remaining until their CPT
//! into three urgency tiers (<=10, <=20, <=30 minutes) and rendered as a
//! multi-section report, most urgent section first. Everything here is pure:
//! the caller supplies "now" and gets either a report or `None`.

mod bucket;
mod compose;
mod dock;

pub use bucket::{bucket_tasks, AlertBuckets, BucketedTask, PendingTask, Urgency};
pub use compose::compose;
pub use dock::normalize_dock;
