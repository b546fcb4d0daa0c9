//! Exploration loop
//!
//! Pure state machine ([`Explorer`]) plus a thin console adapter ([`play`])
//! that performs the actual line reads and writes.

mod command;
mod console;
mod event;
mod explorer;

pub use command::{Command, Input, Level};
pub use console::{play, render};
pub use event::{Event, FinishReason};
pub use explorer::{Explorer, Phase};

pub(crate) use event::{write_associations, write_clues};
