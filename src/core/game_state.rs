//! Game state module - the turn progression state machine
//!
//! Ties the board, scoring, and event stream together: a swap request is
//! validated and committed here, then repeated cascade rounds of
//! detect -> score -> remove -> drop -> refill run until the board is stable.
//! Each round is one `resolve_step` call so an interactive host can animate
//! between phase boundaries; `resolve` pumps the loop to completion for
//! hosts that don't animate.

use crate::core::events::GameEvent;
use crate::core::scoring::round_points;
use crate::core::Board;
use crate::types::{BoardConfig, Position, TurnState};

/// Complete session state: board, progress counters, and the pending
/// event backlog
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    state: TurnState,
    score: u32,
    combo: u32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session with a freshly initialized (match-free) board
    pub fn new(config: BoardConfig, seed: u32) -> Self {
        let mut board = Board::new(config, seed);
        board.initialize();
        Self {
            board,
            state: TurnState::Idle,
            score: 0,
            combo: 0,
            events: Vec::new(),
        }
    }

    /// Create a session around a prepared board (host-restored or
    /// test-constructed). The board is taken as-is, matches and all.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            state: TurnState::Idle,
            score: 0,
            combo: 0,
            events: Vec::new(),
        }
    }

    /// Re-initialize the board and zero all progress
    pub fn reset(&mut self) {
        self.board.initialize();
        self.state = TurnState::Idle;
        self.score = 0;
        self.combo = 0;
        self.events.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Matching rounds so far in the current cascade (the score multiplier)
    pub fn combo(&self) -> u32 {
        self.combo
    }

    /// Take the ordered event backlog, leaving it empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Attempt to swap two adjacent gems. Returns true iff the swap was
    /// committed (it produced at least one match); the session is then in
    /// `Resolving` and the host must pump [`GameState::resolve_step`] (or
    /// call [`GameState::resolve`]) before the next swap is accepted.
    ///
    /// Malformed requests — out-of-bounds positions, non-adjacent positions,
    /// or a request while not idle — are rejected without mutating anything.
    pub fn attempt_swap(&mut self, first: Position, second: Position) -> bool {
        if self.state != TurnState::Idle {
            return false;
        }
        if !self.board.contains(first)
            || !self.board.contains(second)
            || !self.board.is_adjacent(first, second)
        {
            self.events.push(GameEvent::SwapRejected { first, second });
            return false;
        }

        self.state = TurnState::Swapping;
        self.combo = 0;

        if self.board.would_create_match(first, second) {
            self.board.swap(first, second);
            self.events.push(GameEvent::SwapResolved {
                first,
                second,
                matched: true,
            });
            self.state = TurnState::Resolving;
            true
        } else {
            // The host animates the swap and the bounce-back; the grid is
            // already back in its pre-swap state.
            self.events.push(GameEvent::SwapResolved {
                first,
                second,
                matched: false,
            });
            self.reshuffle_if_dead();
            self.state = TurnState::Idle;
            false
        }
    }

    /// Run one cascade round. Returns the state after the round:
    /// `Resolving` while matches keep forming, `Idle` once stable.
    pub fn resolve_step(&mut self) -> TurnState {
        if self.state != TurnState::Resolving {
            return self.state;
        }

        let runs = self.board.find_matches();
        if runs.is_empty() {
            self.reshuffle_if_dead();
            self.state = TurnState::Idle;
            return self.state;
        }

        self.combo += 1;
        let config = self.board.config();
        let points = round_points(&runs, self.combo, &config);
        self.score = self.score.saturating_add(points);

        self.events.push(GameEvent::MatchesFound { runs: runs.clone() });
        self.events.push(GameEvent::ScoreChanged { total: self.score });
        if self.combo > 1 {
            self.events.push(GameEvent::ComboChanged { count: self.combo });
        }

        let positions = self.board.remove_matches(&runs);
        self.events.push(GameEvent::GemsRemoved { positions });

        let moves = self.board.drop_gems();
        self.events.push(GameEvent::GemsDropped { moves });

        let spawns = self.board.refill();
        self.events.push(GameEvent::GemsSpawned { spawns });

        TurnState::Resolving
    }

    /// Pump [`GameState::resolve_step`] until the board is stable
    pub fn resolve(&mut self) {
        while self.state == TurnState::Resolving {
            self.resolve_step();
        }
    }

    /// Deadlock recovery: while no adjacent swap can produce a match,
    /// regenerate the board. Emits one event per regeneration so the host
    /// can show each reshuffle.
    fn reshuffle_if_dead(&mut self) {
        while !self.board.has_any_legal_move() {
            self.board.initialize();
            self.events.push(GameEvent::BoardReshuffled);
        }
    }
}
