use anyhow::Result;
use owo_colors::OwoColorize;
use remind_core::EventStore;
use remind_core::dates;

pub fn run(store: &EventStore, days: i64) -> Result<()> {
    let events = store.upcoming_within(days)?;

    if events.is_empty() {
        println!("{}", "No upcoming events.".dimmed());
        return Ok(());
    }

    let today = dates::today();
    for event in &events {
        let in_days = dates::days_between(today, event.date);
        println!("Reminder: Event '{}' is in {} day(s).", event.title, in_days);
    }

    Ok(())
}
