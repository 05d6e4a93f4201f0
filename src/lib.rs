//! Match-3 board logic and game progression core.
//!
//! The crate is split in two strictly layered components: the grid engine
//! ([`core::Board`]) owns the gem matrix and every pure grid algorithm, and
//! the progression controller ([`core::GameState`]) drives a full turn —
//! swap validation, cascade rounds, scoring, deadlock recovery — and exposes
//! the event stream ([`core::GameEvent`]) a presentation layer observes.
//! Rendering, input mapping, and timing all live outside this crate.

pub mod core;
pub mod types;
