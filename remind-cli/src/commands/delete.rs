use anyhow::Result;
use owo_colors::OwoColorize;
use remind_core::{DeleteOutcome, EventStore};

pub fn run(store: &EventStore, id: u32) -> Result<()> {
    match store.delete(id)? {
        DeleteOutcome::Deleted => println!("{}", "Event deleted.".green()),
        DeleteOutcome::NotFound => println!("{}", "Event not found.".red()),
    }

    Ok(())
}
