//! Terminal rendering for remind-core types.
//!
//! Extension traits that add colored output using owo_colors.

use owo_colors::OwoColorize;
use remind_core::dates::{DATE_FORMAT, TIME_FORMAT};
use remind_core::{Event, Status};

/// Extension trait for rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Status {
    fn render(&self) -> String {
        match self {
            Status::Pending => "[Pending]".yellow().to_string(),
            Status::Expired => "[Expired]".red().to_string(),
            Status::Completed => "[Completed]".green().to_string(),
        }
    }
}

impl Render for Event {
    fn render(&self) -> String {
        format!(
            "ID: {} | {} on {} at {}  {}",
            self.id,
            self.title,
            self.date.format(DATE_FORMAT),
            self.time.format(TIME_FORMAT),
            self.status().render(),
        )
    }
}

/// Print a list of events, or the standard empty message.
pub fn print_events(events: &[Event]) {
    if events.is_empty() {
        println!("{}", "No matching events found.".dimmed());
        return;
    }

    for event in events {
        println!("{}", event.render());
    }
}
