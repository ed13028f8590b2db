use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use owo_colors::OwoColorize;
use remind_core::EventStore;

pub fn run(store: &EventStore, title: &str, date: NaiveDate, time: NaiveTime) -> Result<()> {
    let event = store.add(title, date, time)?;

    println!(
        "{}",
        format!("Created event #{}: {}", event.id, event.title).green()
    );

    Ok(())
}
