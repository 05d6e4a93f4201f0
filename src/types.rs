//! Core types shared across the engine
//! This module contains pure data types with no dependencies beyond serde derives

use serde::{Deserialize, Serialize};

/// Default board dimensions and tuning, matching the shipped game
pub const BOARD_SIZE: u8 = 8;
pub const GEM_KINDS: u8 = 7;

/// Scoring constants: points per gem in a run, bonus per gem beyond three
pub const BASE_MATCH_POINTS: u32 = 50;
pub const LENGTH_BONUS_POINTS: u32 = 25;

/// Minimum run length that counts as a match
pub const MIN_RUN_LEN: usize = 3;

/// Upper limits accepted by [`BoardConfig`]; board coordinates are `i8` and
/// fill-time scratch buffers are stack-allocated, so both axes stay small
pub const MAX_BOARD_SIZE: u8 = 16;
pub const MAX_GEM_KINDS: u8 = 16;

/// Gem kind tag, one of `gem_kinds` visually distinct kinds (`0..K`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GemKind(pub u8);

/// Cell on the board (None = empty, Some = filled with a gem kind)
pub type Cell = Option<GemKind>;

/// Grid position: `(row, col)`, 0-indexed, row increasing downward.
/// Signed so boundary arithmetic (row - 2, spawn rows above the grid) needs
/// no special casing; out-of-range values are handled by the board accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }
}

/// A maximal same-kind run of length >= 3 along one axis.
///
/// Positions are listed in scan order. A vertical run omits positions already
/// claimed by a horizontal run in the same detection pass, so a cell is never
/// reported twice per pass; the run itself is still emitted as long as at
/// least one position remains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRun {
    pub kind: GemKind,
    pub positions: Vec<Position>,
}

/// One gem sliding down during compaction; emitted only for gems that
/// actually changed row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GemMove {
    pub from: Position,
    pub to: Position,
    pub kind: GemKind,
}

/// One gem created by refill. `spawn_row` is the negative logical row above
/// the visible grid suggesting where a drop-in animation should start; it
/// carries no correctness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GemSpawn {
    pub position: Position,
    pub kind: GemKind,
    pub spawn_row: i8,
}

/// Board and scoring tuning. Runtime-injectable for testability; defaults
/// match the shipped 8x8 / 7-kind game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: u8,
    pub gem_kinds: u8,
    pub base_points: u32,
    pub length_bonus: u32,
}

impl BoardConfig {
    /// Create a config with custom dimensions, clamping both axes into the
    /// supported range (at least 3 so match-avoiding fill always has a
    /// candidate kind left, at most the stack-buffer limits)
    pub fn new(size: u8, gem_kinds: u8) -> Self {
        Self {
            size: size.clamp(3, MAX_BOARD_SIZE),
            gem_kinds: gem_kinds.clamp(3, MAX_GEM_KINDS),
            ..Self::default()
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            gem_kinds: GEM_KINDS,
            base_points: BASE_MATCH_POINTS,
            length_bonus: LENGTH_BONUS_POINTS,
        }
    }
}

/// Turn progression states. `Swapping` only exists transiently while a swap
/// request is being evaluated; `Resolving` persists across cascade rounds
/// until the board is stable again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    Idle,
    Swapping,
    Resolving,
}

impl TurnState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnState::Idle => "idle",
            TurnState::Swapping => "swapping",
            TurnState::Resolving => "resolving",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.size, 8);
        assert_eq!(config.gem_kinds, 7);
        assert_eq!(config.base_points, 50);
        assert_eq!(config.length_bonus, 25);
    }

    #[test]
    fn test_config_clamps_dimensions() {
        let config = BoardConfig::new(2, 40);
        assert_eq!(config.size, 3);
        assert_eq!(config.gem_kinds, MAX_GEM_KINDS);

        let config = BoardConfig::new(200, 2);
        assert_eq!(config.size, MAX_BOARD_SIZE);
        assert_eq!(config.gem_kinds, 3);
    }

    #[test]
    fn test_position_serde_shape() {
        let pos = Position::new(2, 5);
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, r#"{"row":2,"col":5}"#);
        let back: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pos);
    }

    #[test]
    fn test_turn_state_as_str() {
        assert_eq!(TurnState::Idle.as_str(), "idle");
        assert_eq!(TurnState::Swapping.as_str(), "swapping");
        assert_eq!(TurnState::Resolving.as_str(), "resolving");
    }
}
