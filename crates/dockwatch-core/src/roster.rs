//! On-duty roster and weekly day-off filtering.
//!
//! The roster is static configuration: an ordered recipient list per shift
//! and, per recipient, the weekdays (0=Monday .. 6=Sunday) they are off.
//! It is built once at startup and read-only afterwards.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::shift::Shift;

/// Ordered recipient ids assigned to each shift.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftAssignments {
    #[serde(default)]
    pub first: Vec<String>,
    #[serde(default)]
    pub second: Vec<String>,
    #[serde(default)]
    pub night: Vec<String>,
}

/// Shift assignments plus per-person day-off exceptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub shifts: ShiftAssignments,
    /// Weekday indices (0=Monday .. 6=Sunday) each person is off. Ids with
    /// no entry have no days off.
    #[serde(default)]
    pub days_off: BTreeMap<String, BTreeSet<u8>>,
}

impl Roster {
    /// Recipient ids assigned to `shift`, in configured order.
    pub fn assigned(&self, shift: Shift) -> &[String] {
        match shift {
            Shift::First => &self.shifts.first,
            Shift::Second => &self.shifts.second,
            Shift::Night => &self.shifts.night,
        }
    }

    /// Ids from `ids` not scheduled off on `reference_date`'s weekday.
    ///
    /// Order-preserving subsequence; duplicates survive. An id with no
    /// day-off entry is always included.
    pub fn filter(&self, ids: &[String], reference_date: NaiveDate) -> Vec<String> {
        let weekday = reference_date.weekday().num_days_from_monday() as u8;
        ids.iter()
            .filter(|id| {
                let off = self
                    .days_off
                    .get(id.as_str())
                    .is_some_and(|days| days.contains(&weekday));
                if off {
                    debug!(id = %id, weekday, "recipient is off duty, skipping mention");
                }
                !off
            })
            .cloned()
            .collect()
    }

    /// Recipients on duty for `shift` on `reference_date`.
    pub fn on_duty(&self, shift: Shift, reference_date: NaiveDate) -> Vec<String> {
        self.filter(self.assigned(shift), reference_date)
    }
}
