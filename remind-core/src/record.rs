//! The pipe-delimited line codec for the on-disk store.
//!
//! Each persisted line is `id|title|date|time|completed`, with `completed`
//! as the literal `1` or `0`. The format has no escaping, so titles must
//! not contain `|`; the store rejects such titles at add time.

use crate::dates::{self, DATE_FORMAT, TIME_FORMAT};
use crate::event::Event;

/// Field separator for persisted records.
pub const DELIMITER: char = '|';

/// Serialize an event to its persisted line (no trailing newline).
pub fn to_line(event: &Event) -> String {
    format!(
        "{}|{}|{}|{}|{}",
        event.id,
        event.title,
        event.date.format(DATE_FORMAT),
        event.time.format(TIME_FORMAT),
        if event.completed { '1' } else { '0' },
    )
}

/// Parse one persisted line.
///
/// Returns `None` on a wrong field count, a non-numeric id, an
/// unparseable date or time, or an unknown completed flag.
pub fn parse_line(line: &str) -> Option<Event> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != 5 {
        return None;
    }

    let id = fields[0].parse().ok()?;
    let title = fields[1].to_string();
    let date = dates::parse_date(fields[2]).ok()?;
    let time = dates::parse_time(fields[3]).ok()?;
    let completed = match fields[4] {
        "1" => true,
        "0" => false,
        _ => return None,
    };

    Some(Event {
        id,
        title,
        date,
        time,
        completed,
    })
}
