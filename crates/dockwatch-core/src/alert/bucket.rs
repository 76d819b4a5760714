//! Urgency bucketing of pending departures.

use chrono::DateTime;
use chrono_tz::Tz;
use tracing::debug;

/// One pending departure row, already validated by the sheet source:
/// non-empty trip id, deadline resolved to the operational zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTask {
    /// LH trip number.
    pub trip: String,
    /// Destination station name.
    pub destination: String,
    /// Raw dock label, normalized only at render time.
    pub dock: String,
    /// Committed departure time.
    pub cpt: DateTime<Tz>,
}

/// Urgency tier, keyed by its upper bound of minutes remaining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Urgency {
    Within10,
    Within20,
    Within30,
}

impl Urgency {
    /// All tiers in render order: most urgent first.
    pub const ALL: [Urgency; 3] = [Urgency::Within10, Urgency::Within20, Urgency::Within30];

    /// Upper bound of the tier's minutes-remaining range.
    pub fn threshold(self) -> i64 {
        match self {
            Urgency::Within10 => 10,
            Urgency::Within20 => 20,
            Urgency::Within30 => 30,
        }
    }

    /// Tier for a minutes-remaining value.
    ///
    /// `None` outside (0, 30]: a departure due this very minute gets no
    /// alert, matching the production cutoffs, and anything further out
    /// than 30 minutes is not yet urgent.
    pub fn of_minutes(minutes: i64) -> Option<Urgency> {
        match minutes {
            1..=10 => Some(Urgency::Within10),
            11..=20 => Some(Urgency::Within20),
            21..=30 => Some(Urgency::Within30),
            _ => None,
        }
    }
}

/// A task admitted to a tier, with its minutes remaining at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketedTask {
    pub task: PendingTask,
    pub minutes_remaining: i64,
}

/// Pending departures grouped by urgency tier.
#[derive(Debug, Clone, Default)]
pub struct AlertBuckets {
    within_10: Vec<BucketedTask>,
    within_20: Vec<BucketedTask>,
    within_30: Vec<BucketedTask>,
}

impl AlertBuckets {
    /// True when no task landed in any tier, i.e. no alert is warranted.
    pub fn is_empty(&self) -> bool {
        self.within_10.is_empty() && self.within_20.is_empty() && self.within_30.is_empty()
    }

    /// Tasks in one tier, sorted by ascending minutes remaining.
    pub fn tier(&self, urgency: Urgency) -> &[BucketedTask] {
        match urgency {
            Urgency::Within10 => &self.within_10,
            Urgency::Within20 => &self.within_20,
            Urgency::Within30 => &self.within_30,
        }
    }

    fn tier_mut(&mut self, urgency: Urgency) -> &mut Vec<BucketedTask> {
        match urgency {
            Urgency::Within10 => &mut self.within_10,
            Urgency::Within20 => &mut self.within_20,
            Urgency::Within30 => &mut self.within_30,
        }
    }

    /// Tiers in render order (10, 20, 30), including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (Urgency, &[BucketedTask])> + '_ {
        Urgency::ALL.into_iter().map(move |u| (u, self.tier(u)))
    }
}

/// Group `tasks` into urgency tiers relative to `now`.
///
/// Minutes remaining are whole elapsed minutes: the seconds difference
/// floored toward negative infinity, never rounded. Past-due tasks are
/// dropped, as is anything due this very minute or more than 30 minutes
/// out. Within a tier, tasks sort by ascending minutes remaining; ties
/// keep their input order.
pub fn bucket_tasks(tasks: &[PendingTask], now: DateTime<Tz>) -> AlertBuckets {
    let mut buckets = AlertBuckets::default();

    for task in tasks {
        let minutes = (task.cpt - now).num_seconds().div_euclid(60);
        if minutes < 0 {
            continue;
        }
        let Some(urgency) = Urgency::of_minutes(minutes) else {
            continue;
        };
        buckets.tier_mut(urgency).push(BucketedTask {
            task: task.clone(),
            minutes_remaining: minutes,
        });
    }

    for urgency in Urgency::ALL {
        // Vec::sort_by_key is stable, so input order breaks ties.
        buckets.tier_mut(urgency).sort_by_key(|t| t.minutes_remaining);
    }

    debug!(
        within_10 = buckets.within_10.len(),
        within_20 = buckets.within_20.len(),
        within_30 = buckets.within_30.len(),
        "bucketed pending departures"
    );
    buckets
}
