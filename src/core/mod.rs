//! Core module - pure game logic with no I/O dependencies
//!
//! Contains the grid engine, the progression state machine, scoring, and the
//! event records a presentation layer consumes.

pub mod board;
pub mod events;
pub mod game_state;
pub mod rng;
pub mod scoring;

// Re-export commonly used types
pub use board::Board;
pub use events::GameEvent;
pub use game_state::GameState;
pub use rng::SimpleRng;
