//! Fixed-zone wall clock.
//!
//! Every scheduling decision in Dockwatch is made in Sao Paulo local time.
//! The engine never reads the clock itself; callers resolve "now" once per
//! invocation and pass it down.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// The single operational time zone.
pub const ZONE: Tz = chrono_tz::America::Sao_Paulo;

/// Current instant localized to [`ZONE`].
pub fn now() -> DateTime<Tz> {
    ZONE.from_utc_datetime(&Utc::now().naive_utc())
}
