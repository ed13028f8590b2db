//! Durable flat-file storage of events and the queries over them.
//!
//! The store is a newline-delimited text file, one record per line (see
//! [`crate::record`]). Every load runs the expiry pass: events whose date
//! has passed are marked completed and the full set is written back before
//! any query result is returned, so the flip is durable. Query operations
//! therefore perform write I/O as well as reads.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveTime};
use log::warn;

use crate::dates;
use crate::error::{RemindError, RemindResult};
use crate::event::{Event, Filter};
use crate::record;

/// Horizon for the upcoming-events reminder.
pub const DEFAULT_UPCOMING_DAYS: i64 = 7;

/// Outcome of a delete, so callers can tell a removal from a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Handle to the flat-file event store.
///
/// Single writer, single reader, same process; there is no locking, so two
/// processes pointed at the same file can lose each other's writes.
#[derive(Debug, Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EventStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record, run the expiry pass, and persist the result.
    ///
    /// An absent file is an empty store, not an error. Records come back
    /// in file order. Malformed lines are skipped with a warning, which
    /// also drops them from the resave that follows.
    pub fn load(&self) -> RemindResult<Vec<Event>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(self.unavailable(e)),
        };

        let today = dates::today();
        let mut events = Vec::new();

        for line in content.lines() {
            if line.is_empty() {
                continue;
            }
            match record::parse_line(line) {
                Some(mut event) => {
                    // Expiry pass: a past date marks the event completed.
                    // The flip is never undone.
                    if event.date < today {
                        event.completed = true;
                    }
                    events.push(event);
                }
                None => warn!("skipping malformed store line: {line:?}"),
            }
        }

        self.save(&events)?;

        Ok(events)
    }

    /// Overwrite the persisted store with exactly the given events, one
    /// record per line, in the given order.
    ///
    /// Writes to a sibling temp file and renames it into place, so a
    /// reader never observes a half-written store.
    pub fn save(&self, events: &[Event]) -> RemindResult<()> {
        let mut content = String::new();
        for event in events {
            content.push_str(&record::to_line(event));
            content.push('\n');
        }

        let temp = self.path.with_extension("tmp");
        std::fs::write(&temp, content).map_err(|e| self.unavailable(e))?;
        std::fs::rename(&temp, &self.path).map_err(|e| self.unavailable(e))?;
        Ok(())
    }

    /// Append a single record without rewriting existing ones.
    pub fn append(&self, event: &Event) -> RemindResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.unavailable(e))?;
        writeln!(file, "{}", record::to_line(event)).map_err(|e| self.unavailable(e))?;
        Ok(())
    }

    /// Next free id: one past the highest id in use, starting at 1.
    pub fn next_id(events: &[Event]) -> u32 {
        events.iter().map(|e| e.id).max().unwrap_or(0) + 1
    }

    /// Create and persist a new event.
    ///
    /// The title must be non-empty and must not contain the field
    /// separator; date and time are taken as given (the formats carry no
    /// further validation).
    pub fn add(&self, title: &str, date: NaiveDate, time: NaiveTime) -> RemindResult<Event> {
        if title.trim().is_empty() {
            return Err(RemindError::EmptyTitle);
        }
        if title.contains(record::DELIMITER) {
            return Err(RemindError::TitleContainsDelimiter);
        }

        let events = self.load()?;
        let event = Event {
            id: Self::next_id(&events),
            title: title.to_string(),
            date,
            time,
            completed: false,
        };
        self.append(&event)?;
        Ok(event)
    }

    /// List events matching the filter, ascending by date and time.
    pub fn list(&self, filter: Filter) -> RemindResult<Vec<Event>> {
        let today = dates::today();
        let mut events: Vec<Event> = self
            .load()?
            .into_iter()
            .filter(|e| filter.keeps(e, today))
            .collect();

        // Stable sort keeps file order between same-minute events.
        events.sort_by_key(Event::sort_key);
        Ok(events)
    }

    /// All events on exactly the given date, in file order.
    pub fn search_by_date(&self, date: NaiveDate) -> RemindResult<Vec<Event>> {
        Ok(self.load()?.into_iter().filter(|e| e.date == date).collect())
    }

    /// All events whose title contains the keyword as a contiguous,
    /// case-sensitive substring, in file order.
    pub fn search_by_title(&self, keyword: &str) -> RemindResult<Vec<Event>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|e| e.title.contains(keyword))
            .collect())
    }

    /// Remove the event with the given id and persist the rest.
    ///
    /// If the uniqueness invariant was somehow violated, every record
    /// carrying the id goes.
    pub fn delete(&self, id: u32) -> RemindResult<DeleteOutcome> {
        let events = self.load()?;
        let before = events.len();
        let remaining: Vec<Event> = events.into_iter().filter(|e| e.id != id).collect();

        if remaining.len() == before {
            return Ok(DeleteOutcome::NotFound);
        }

        self.save(&remaining)?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Not-yet-completed events falling within the next `days` days.
    ///
    /// An event dated today is excluded (difference 0), as are past dates.
    /// Returned in file order.
    pub fn upcoming_within(&self, days: i64) -> RemindResult<Vec<Event>> {
        let today = dates::today();
        Ok(self
            .load()?
            .into_iter()
            .filter(|e| {
                if e.completed {
                    return false;
                }
                let diff = dates::days_between(today, e.date);
                diff > 0 && diff <= days
            })
            .collect())
    }

    fn unavailable(&self, source: std::io::Error) -> RemindError {
        RemindError::StorageUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}
