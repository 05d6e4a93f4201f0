//! Event records consumed by a presentation layer
//!
//! The core never holds references to renderable objects; it appends typed
//! events at every phase boundary of a turn and the host drains them to drive
//! animation (or serializes them, line-delimited, for an out-of-process
//! observer).

use serde::{Deserialize, Serialize};

use crate::types::{GemMove, GemSpawn, MatchRun, Position};

/// One phase-boundary event in the order it occurred.
///
/// A match-producing swap emits `SwapResolved { matched: true }` followed by
/// one `MatchesFound`/`ScoreChanged`/`GemsRemoved`/`GemsDropped`/`GemsSpawned`
/// group per cascade round (with `ComboChanged` after the score once the
/// combo passes one); a non-matching swap emits only
/// `SwapResolved { matched: false }` so the host can animate the
/// swap-and-bounce-back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    SwapRejected {
        first: Position,
        second: Position,
    },
    SwapResolved {
        first: Position,
        second: Position,
        matched: bool,
    },
    MatchesFound {
        runs: Vec<MatchRun>,
    },
    GemsRemoved {
        positions: Vec<Position>,
    },
    GemsDropped {
        moves: Vec<GemMove>,
    },
    GemsSpawned {
        spawns: Vec<GemSpawn>,
    },
    ScoreChanged {
        total: u32,
    },
    ComboChanged {
        count: u32,
    },
    BoardReshuffled,
}
