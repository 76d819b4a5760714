//! Report composition.

use super::bucket::AlertBuckets;
use super::dock::normalize_dock;

/// Render the bucketed departures as a chat-ready report.
///
/// Returns `None` when every tier is empty -- the signal that no
/// notification should go out at all, distinct from an empty message.
/// Sections render strictly in tier order 10, 20, 30 minutes, separated by
/// blank lines, with no trailing blank line.
pub fn compose(buckets: &AlertBuckets) -> Option<String> {
    if buckets.is_empty() {
        return None;
    }

    let mut lines: Vec<String> = Vec::new();
    for (urgency, tasks) in buckets.iter() {
        if tasks.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(format!(
            "⚠️ Atenção, LTs próximas do CPT! (Faixa {} min) ⚠️",
            urgency.threshold()
        ));
        lines.push(String::new());

        for entry in tasks {
            lines.push(format!("🚛 {}", entry.task.trip.trim()));
            lines.push(normalize_dock(&entry.task.dock));
            lines.push(format!("Destino: {}", entry.task.destination.trim()));
            lines.push(format!(
                "CPT: {} (faltam {} min)",
                entry.task.cpt.format("%H:%M"),
                entry.minutes_remaining
            ));
            lines.push(String::new());
        }
    }

    if lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::super::bucket::{bucket_tasks, PendingTask};
    use super::*;
    use crate::clock::ZONE;
    use chrono::{DateTime, Duration, TimeZone};
    use chrono_tz::Tz;

    fn base_now() -> DateTime<Tz> {
        ZONE.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap()
    }

    fn task_due_in(trip: &str, minutes: i64) -> PendingTask {
        PendingTask {
            trip: trip.to_string(),
            destination: "Campinas".to_string(),
            dock: "5".to_string(),
            cpt: base_now() + Duration::minutes(minutes),
        }
    }

    #[test]
    fn empty_buckets_compose_to_none() {
        let buckets = bucket_tasks(&[], base_now());
        assert_eq!(compose(&buckets), None);
    }

    #[test]
    fn sections_render_most_urgent_first() {
        let tasks = vec![
            task_due_in("T-30", 25),
            task_due_in("T-10", 5),
            task_due_in("T-20", 15),
        ];
        let report = compose(&bucket_tasks(&tasks, base_now())).unwrap();

        let faixa_10 = report.find("Faixa 10 min").unwrap();
        let faixa_20 = report.find("Faixa 20 min").unwrap();
        let faixa_30 = report.find("Faixa 30 min").unwrap();
        assert!(faixa_10 < faixa_20 && faixa_20 < faixa_30);

        assert!(report.find("T-10").unwrap() < report.find("T-20").unwrap());
        assert!(report.find("T-20").unwrap() < report.find("T-30").unwrap());
    }

    #[test]
    fn empty_tiers_are_skipped() {
        let tasks = vec![task_due_in("T1", 8), task_due_in("T2", 22)];
        let report = compose(&bucket_tasks(&tasks, base_now())).unwrap();
        assert!(report.contains("Faixa 10 min"));
        assert!(!report.contains("Faixa 20 min"));
        assert!(report.contains("Faixa 30 min"));
        assert!(report.find("T1").unwrap() < report.find("T2").unwrap());
    }

    #[test]
    fn task_block_carries_trip_dock_destination_and_cpt() {
        let tasks = vec![task_due_in("LT123", 8)];
        let report = compose(&bucket_tasks(&tasks, base_now())).unwrap();
        assert!(report.contains("🚛 LT123"));
        assert!(report.contains("Doca 5"));
        assert!(report.contains("Destino: Campinas"));
        assert!(report.contains("CPT: 09:08 (faltam 8 min)"));
    }

    #[test]
    fn report_has_no_trailing_blank_line() {
        let tasks = vec![task_due_in("T1", 8)];
        let report = compose(&bucket_tasks(&tasks, base_now())).unwrap();
        assert!(!report.ends_with('\n'));
        assert!(!report.is_empty());
    }
}
