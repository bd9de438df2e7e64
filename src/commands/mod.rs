//! Command implementations

mod context;
mod run;
mod status;

pub use run::{harden, restore};
pub use status::status;
