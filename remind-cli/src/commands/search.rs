use anyhow::Result;
use chrono::NaiveDate;
use remind_core::EventStore;

use crate::render;

pub fn by_date(store: &EventStore, date: NaiveDate) -> Result<()> {
    let events = store.search_by_date(date)?;
    render::print_events(&events);
    Ok(())
}

pub fn by_title(store: &EventStore, keyword: &str) -> Result<()> {
    let events = store.search_by_title(keyword)?;
    render::print_events(&events);
    Ok(())
}
