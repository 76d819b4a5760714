//! Operational shift resolution.
//!
//! Three fixed 8-hour shifts partition the day: 06-14, 14-22 and the night
//! shift 22-06. Any hour maps to exactly one shift. The night shift crosses
//! midnight, and its schedule (including day-off lookups) is keyed to the
//! day the shift *started* -- so an instant at 05:59 still belongs to
//! yesterday's roster, while 06:00 flips both the shift and the day.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// First shift starts at 06:00 local.
pub const SHIFT_ONE_START: u32 = 6;
/// Second shift starts at 14:00 local.
pub const SHIFT_TWO_START: u32 = 14;
/// Night shift starts at 22:00 local and runs into the next morning.
pub const NIGHT_SHIFT_START: u32 = 22;

/// One of the three operational shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    First,
    Second,
    Night,
}

impl Shift {
    /// The shift covering the given local hour in [0, 24).
    pub fn of_hour(hour: u32) -> Shift {
        if (SHIFT_ONE_START..SHIFT_TWO_START).contains(&hour) {
            Shift::First
        } else if (SHIFT_TWO_START..NIGHT_SHIFT_START).contains(&hour) {
            Shift::Second
        } else {
            Shift::Night
        }
    }

    /// Operational display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Shift::First => "Turno 1",
            Shift::Second => "Turno 2",
            Shift::Night => "Turno 3",
        }
    }
}

/// The active shift plus the day its schedule is keyed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftContext {
    pub shift: Shift,
    /// Day used for day-off lookups; the previous calendar day during the
    /// night shift's post-midnight portion.
    pub reference_date: NaiveDate,
}

impl ShiftContext {
    /// Weekday index of the reference date, 0=Monday .. 6=Sunday.
    pub fn reference_weekday(&self) -> u8 {
        self.reference_date.weekday().num_days_from_monday() as u8
    }
}

/// Resolve the shift active at `instant` and its reference date.
///
/// Total over all instants; there is no failure case.
pub fn resolve(instant: DateTime<Tz>) -> ShiftContext {
    let shift = Shift::of_hour(instant.hour());
    let mut reference_date = instant.date_naive();
    if shift == Shift::Night && instant.hour() < SHIFT_ONE_START {
        // Post-midnight stretch of the night shift: the schedule belongs to
        // the day the shift started.
        reference_date -= Duration::days(1);
        debug!(%reference_date, "night shift past midnight, rolling reference date back");
    }
    ShiftContext { shift, reference_date }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ZONE;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
        ZONE.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn shift_boundaries() {
        assert_eq!(Shift::of_hour(6), Shift::First);
        assert_eq!(Shift::of_hour(13), Shift::First);
        assert_eq!(Shift::of_hour(14), Shift::Second);
        assert_eq!(Shift::of_hour(21), Shift::Second);
        assert_eq!(Shift::of_hour(22), Shift::Night);
        assert_eq!(Shift::of_hour(23), Shift::Night);
        assert_eq!(Shift::of_hour(0), Shift::Night);
        assert_eq!(Shift::of_hour(5), Shift::Night);
    }

    #[test]
    fn pre_dawn_night_shift_uses_previous_day() {
        let ctx = resolve(local(2025, 3, 10, 5, 30));
        assert_eq!(ctx.shift, Shift::Night);
        assert_eq!(ctx.reference_date, NaiveDate::from_ymd_opt(2025, 3, 9).unwrap());
    }

    #[test]
    fn six_oclock_flips_shift_and_reference_day() {
        let ctx = resolve(local(2025, 3, 10, 6, 0));
        assert_eq!(ctx.shift, Shift::First);
        assert_eq!(ctx.reference_date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn evening_night_shift_keeps_current_day() {
        let ctx = resolve(local(2025, 3, 10, 23, 15));
        assert_eq!(ctx.shift, Shift::Night);
        assert_eq!(ctx.reference_date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn reference_weekday_is_monday_based() {
        // 2025-03-09 is a Sunday.
        let ctx = resolve(local(2025, 3, 10, 5, 59));
        assert_eq!(ctx.reference_weekday(), 6);
        let ctx = resolve(local(2025, 3, 10, 6, 0));
        assert_eq!(ctx.reference_weekday(), 0);
    }

    proptest! {
        /// Every hour of the day maps to exactly one shift.
        #[test]
        fn hours_partition_into_shifts(hour in 0u32..24) {
            let shift = Shift::of_hour(hour);
            let expected = if (6..14).contains(&hour) {
                Shift::First
            } else if (14..22).contains(&hour) {
                Shift::Second
            } else {
                Shift::Night
            };
            prop_assert_eq!(shift, expected);
        }

        /// The reference date is never more than one day behind and only
        /// rolls back during the night shift's post-midnight stretch.
        #[test]
        fn reference_date_rollback_rule(hour in 0u32..24, minute in 0u32..60) {
            let instant = local(2025, 6, 18, hour, minute);
            let ctx = resolve(instant);
            if hour < 6 {
                prop_assert_eq!(ctx.reference_date, instant.date_naive() - Duration::days(1));
            } else {
                prop_assert_eq!(ctx.reference_date, instant.date_naive());
            }
        }
    }
}
