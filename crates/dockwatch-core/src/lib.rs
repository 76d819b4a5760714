//! # Dockwatch Core Library
//!
//! Core logic for Dockwatch, a shift-aware departure-deadline alert bot for
//! a dispatch dock. The engine inspects pending shipment departures ("LTs")
//! against their committed departure times (CPT) and composes a grouped,
//! urgency-sorted alert mentioning the staff on duty right now.
//!
//! ## Architecture
//!
//! - **Shift**: resolves the active 8-hour shift for an instant, including
//!   the overnight rollover that keys the night shift's schedule to the day
//!   it started
//! - **Roster**: static shift assignments plus per-person weekly day-off
//!   exceptions, filtered against the shift's reference day
//! - **Alert**: deadline bucketing into urgency tiers and deterministic
//!   report composition
//! - **Integrations**: the spreadsheet that feeds pending departures and the
//!   chat webhook that receives the alert
//!
//! The engine itself is pure and synchronous: it takes an already-resolved
//! instant, roster and task list and either produces a report or decides
//! none is warranted. All I/O lives in [`integrations`].

pub mod alert;
pub mod clock;
pub mod config;
pub mod error;
pub mod integrations;
pub mod roster;
pub mod shift;

pub use alert::{bucket_tasks, compose, normalize_dock, AlertBuckets, BucketedTask, PendingTask, Urgency};
pub use config::Config;
pub use error::{ConfigError, CoreError, CredentialError, DeliveryError, SheetError};
pub use roster::Roster;
pub use shift::{resolve, Shift, ShiftContext};
