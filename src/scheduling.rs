//! Calendar arithmetic for slot resolution.
//!
//! Pure functions only: everything here is a deterministic function of its
//! inputs, so the booking service can be exercised without a database. All
//! instants are UTC; weekday and time-of-day are always derived from the UTC
//! value.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};

/// Wall-clock format used for slots in API payloads ("09:30").
pub const SLOT_FORMAT: &str = "%H:%M";

/// Day-of-week index for a calendar date, 0 = Sunday through 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> i16 {
    date.weekday().num_days_from_sunday() as i16
}

/// Generate every bookable time-of-day in `[start, end]`, stepping by
/// `interval_minutes`. The sequence is ascending and duplicate-free, and the
/// end boundary is included when it lands exactly on a step:
/// `generate_slots(09:00, 10:00, 30)` is `[09:00, 09:30, 10:00]`.
///
/// Degenerate inputs (zero interval, end before start) yield an empty
/// sequence rather than an error.
pub fn generate_slots(start: NaiveTime, end: NaiveTime, interval_minutes: u32) -> Vec<NaiveTime> {
    let mut slots = Vec::new();
    if interval_minutes == 0 {
        return slots;
    }

    let step = Duration::minutes(i64::from(interval_minutes));
    let mut current = start;
    while current <= end {
        slots.push(current);
        let (next, wrapped) = current.overflowing_add_signed(step);
        if wrapped != 0 {
            // Stepping past midnight; windows never span days.
            break;
        }
        current = next;
    }
    slots
}

/// True when `time` lies within `[start, end]`, inclusive at both bounds.
/// This is the containment rule for booking validation: evaluated directly,
/// not by regenerating the slot sequence.
pub fn within_window(time: NaiveTime, start: NaiveTime, end: NaiveTime) -> bool {
    start <= time && time <= end
}

/// Remove every candidate whose time-of-day matches a taken slot exactly,
/// preserving candidate order.
pub fn filter_taken(candidates: Vec<NaiveTime>, taken: &[NaiveTime]) -> Vec<NaiveTime> {
    candidates
        .into_iter()
        .filter(|slot| !taken.contains(slot))
        .collect()
}

/// Combine a calendar day and a time-of-day into an absolute UTC instant.
pub fn slot_instant(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    date.and_time(time).and_utc()
}

/// Inclusive UTC bounds of a calendar day, for day-ranged occupancy queries.
pub fn day_bounds(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    let end = date
        .and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap())
        .and_utc();
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, SLOT_FORMAT).unwrap()
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_weekday_index_sunday_is_zero() {
        // 2025-06-15 is a Sunday, 2025-06-16 a Monday, 2025-06-21 a Saturday
        assert_eq!(weekday_index(d("2025-06-15")), 0);
        assert_eq!(weekday_index(d("2025-06-16")), 1);
        assert_eq!(weekday_index(d("2025-06-21")), 6);
    }

    #[test]
    fn test_generate_slots_includes_end_boundary() {
        let slots = generate_slots(t("09:00"), t("10:00"), 30);
        assert_eq!(slots, vec![t("09:00"), t("09:30"), t("10:00")]);
    }

    #[test]
    fn test_generate_slots_excludes_end_off_step() {
        // 10:10 is not on a 30-minute step from 09:00
        let slots = generate_slots(t("09:00"), t("10:10"), 30);
        assert_eq!(slots, vec![t("09:00"), t("09:30"), t("10:00")]);
    }

    #[test]
    fn test_generate_slots_deterministic() {
        let a = generate_slots(t("09:00"), t("12:00"), 30);
        let b = generate_slots(t("09:00"), t("12:00"), 30);
        assert_eq!(a, b);
        assert!(a.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_generate_slots_full_morning() {
        let slots = generate_slots(t("09:00"), t("12:00"), 30);
        let rendered: Vec<String> = slots
            .iter()
            .map(|s| s.format(SLOT_FORMAT).to_string())
            .collect();
        assert_eq!(
            rendered,
            vec!["09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "12:00"]
        );
    }

    #[test]
    fn test_generate_slots_single_point_window() {
        assert_eq!(generate_slots(t("09:00"), t("09:00"), 30), vec![t("09:00")]);
    }

    #[test]
    fn test_generate_slots_end_before_start() {
        assert!(generate_slots(t("12:00"), t("09:00"), 30).is_empty());
    }

    #[test]
    fn test_generate_slots_zero_interval() {
        assert!(generate_slots(t("09:00"), t("12:00"), 0).is_empty());
    }

    #[test]
    fn test_generate_slots_stops_at_midnight() {
        let slots = generate_slots(t("23:00"), t("23:59"), 30);
        assert_eq!(slots, vec![t("23:00"), t("23:30")]);
    }

    #[test]
    fn test_within_window_inclusive_bounds() {
        assert!(within_window(t("09:00"), t("09:00"), t("17:00")));
        assert!(within_window(t("17:00"), t("09:00"), t("17:00")));
        assert!(within_window(t("12:15"), t("09:00"), t("17:00")));
        assert!(!within_window(t("08:59"), t("09:00"), t("17:00")));
        assert!(!within_window(t("17:01"), t("09:00"), t("17:00")));
    }

    #[test]
    fn test_filter_taken_preserves_order() {
        let candidates = generate_slots(t("09:00"), t("11:00"), 30);
        let taken = vec![t("09:30"), t("10:30")];
        let free = filter_taken(candidates, &taken);
        assert_eq!(free, vec![t("09:00"), t("10:00"), t("11:00")]);
    }

    #[test]
    fn test_filter_taken_idempotent() {
        let candidates = generate_slots(t("09:00"), t("11:00"), 30);
        let taken = vec![t("10:00")];
        let once = filter_taken(candidates.clone(), &taken);
        let twice = filter_taken(once.clone(), &taken);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_taken_ignores_unmatched() {
        let candidates = vec![t("09:00"), t("09:30")];
        let free = filter_taken(candidates.clone(), &[t("14:00")]);
        assert_eq!(free, candidates);
    }

    #[test]
    fn test_slot_instant_is_utc() {
        let instant = slot_instant(d("2025-06-16"), t("09:30"));
        assert_eq!(instant.to_rfc3339(), "2025-06-16T09:30:00+00:00");
    }

    #[test]
    fn test_day_bounds_cover_whole_day() {
        let (start, end) = day_bounds(d("2025-06-16"));
        assert_eq!(start.to_rfc3339(), "2025-06-16T00:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-06-16T23:59:59+00:00");
        let booked = slot_instant(d("2025-06-16"), t("09:30"));
        assert!(start <= booked && booked <= end);
    }
}
