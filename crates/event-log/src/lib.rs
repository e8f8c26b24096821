//! Audit log of significant galaxy-building events.
//!
//! An [`EventLog`] is an explicit handle owned by the session and passed to
//! every constructor or mutation that records something. Events are kept in
//! the order they were logged and flushed as a report at shutdown; they are
//! never persisted with the galaxy.

pub mod event;


pub use event::{Event, EventLog};
