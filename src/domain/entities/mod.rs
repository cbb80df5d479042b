//! Core domain entities.
//!
//! - [`Link`] - A titled URL with a click counter
//! - [`User`] - The owner of links
//!
//! Creation inputs live in separate structs (`NewLink`, `NewUser`) so that
//! database-generated fields never have to be invented by callers.

pub mod link;
pub mod user;

pub use link::{Link, LinkSummary, NewLink};
pub use user::{NewUser, User};
