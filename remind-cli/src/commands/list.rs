use anyhow::Result;
use remind_core::{EventStore, Filter};

use crate::render;

pub fn run(store: &EventStore, filter: Filter) -> Result<()> {
    let events = store.list(filter)?;
    render::print_events(&events);
    Ok(())
}
