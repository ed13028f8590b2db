//! Core library for the remind event-reminder manager.
//!
//! This crate provides everything the `remind` CLI delegates to:
//! - `Event` and its derived status
//! - the pipe-delimited line codec for the on-disk store
//! - `EventStore` for persistence and queries

pub mod config;
pub mod dates;
pub mod error;
pub mod event;
pub mod record;
pub mod store;

pub use error::{RemindError, RemindResult};
pub use event::{Event, Filter, Status};
pub use store::{DeleteOutcome, EventStore};
