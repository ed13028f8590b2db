//! Event records and their derived status.

use chrono::{NaiveDate, NaiveTime};

use crate::dates;

/// One reminder record as persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// `false` at creation; flipped to `true` by the expiry pass once the
    /// date has passed, and never unset afterwards.
    pub completed: bool,
}

/// Derived classification of an event. Never stored directly; computed
/// from the `completed` flag and the event date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Expired,
    Completed,
}

/// Which events a listing keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Pending,
    Completed,
}

impl Event {
    /// Status relative to the given day.
    pub fn status_on(&self, today: NaiveDate) -> Status {
        if self.completed {
            Status::Completed
        } else if self.date < today {
            Status::Expired
        } else {
            Status::Pending
        }
    }

    /// Status relative to the current local day.
    pub fn status(&self) -> Status {
        self.status_on(dates::today())
    }

    /// Chronological sort key. `(date, time)` orders identically to the
    /// zero-padded `YYYY-MM-DD HH:MM` string.
    pub fn sort_key(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.time)
    }
}

impl Filter {
    /// Whether an event passes this filter on the given day.
    ///
    /// `Completed` matches on the stored flag alone, so auto-expired
    /// events count as completed; `Pending` requires the derived status
    /// to be exactly `Status::Pending`.
    pub fn keeps(&self, event: &Event, today: NaiveDate) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => event.status_on(today) == Status::Pending,
            Filter::Completed => event.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event_on(date: NaiveDate, completed: bool) -> Event {
        Event {
            id: 1,
            title: "Dentist".to_string(),
            date,
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            completed,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn completed_flag_wins_over_date() {
        let today = day(2026, 3, 20);
        assert_eq!(event_on(day(2026, 3, 25), true).status_on(today), Status::Completed);
        assert_eq!(event_on(day(2026, 3, 1), true).status_on(today), Status::Completed);
    }

    #[test]
    fn past_date_is_expired() {
        let today = day(2026, 3, 20);
        assert_eq!(event_on(day(2026, 3, 19), false).status_on(today), Status::Expired);
    }

    #[test]
    fn today_and_future_are_pending() {
        let today = day(2026, 3, 20);
        assert_eq!(event_on(today, false).status_on(today), Status::Pending);
        assert_eq!(event_on(day(2026, 3, 21), false).status_on(today), Status::Pending);
    }

    #[test]
    fn pending_filter_excludes_expired_and_completed() {
        let today = day(2026, 3, 20);
        assert!(Filter::Pending.keeps(&event_on(day(2026, 3, 21), false), today));
        assert!(!Filter::Pending.keeps(&event_on(day(2026, 3, 19), false), today));
        assert!(!Filter::Pending.keeps(&event_on(day(2026, 3, 21), true), today));
    }

    #[test]
    fn completed_filter_matches_stored_flag_only() {
        let today = day(2026, 3, 20);
        assert!(Filter::Completed.keeps(&event_on(day(2026, 3, 1), true), today));
        // Expired but not yet flagged: not completed by this filter.
        assert!(!Filter::Completed.keeps(&event_on(day(2026, 3, 1), false), today));
    }

    #[test]
    fn sort_key_orders_by_date_then_time() {
        let early = Event {
            time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            ..event_on(day(2026, 3, 20), false)
        };
        let late = Event {
            time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            ..event_on(day(2026, 3, 20), false)
        };
        let next_day = event_on(day(2026, 3, 21), false);

        assert!(early.sort_key() < late.sort_key());
        assert!(late.sort_key() < next_day.sort_key());
    }
}
