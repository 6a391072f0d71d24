//! Draft Store - Timed resume draft persistence
//!
//! Persists JSON snapshots of the in-progress resume to a drafts directory,
//! separate from any exported artifact, so an interrupted editing session
//! can be recovered. Saves are debounced and old versions are rotated out.

mod config;
mod error;
mod store;

pub use config::*;
pub use error::*;
pub use store::*;
