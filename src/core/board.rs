//! Board module - manages the gem grid
//!
//! The board is an NxN grid (8x8 by default) where each cell holds one of K
//! gem kinds or is empty. Uses a flat row-major Vec for cache locality.
//! Coordinates: (row, col) with row 0 at the top, row increasing downward.
//!
//! Bounds policy is deliberately permissive: out-of-bounds reads return an
//! empty cell and out-of-bounds writes are no-ops, so neighbor arithmetic at
//! the edges needs no special casing.

use std::fmt;

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::{
    BoardConfig, Cell, GemKind, GemMove, GemSpawn, MatchRun, Position, MAX_GEM_KINDS, MIN_RUN_LEN,
};

/// The gem grid plus its owned randomness source
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
    rng: SimpleRng,
}

impl Board {
    /// Create an empty board. Call [`Board::initialize`] to fill it.
    pub fn new(config: BoardConfig, seed: u32) -> Self {
        let n = config.size as usize;
        Self {
            config,
            cells: vec![None; n * n],
            rng: SimpleRng::new(seed),
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Board edge length
    pub fn size(&self) -> i8 {
        self.config.size as i8
    }

    /// Current RNG state, reusable as a seed
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < 0 || pos.row >= self.size() || pos.col < 0 || pos.col >= self.size() {
            return None;
        }
        Some((pos.row as usize) * (self.config.size as usize) + (pos.col as usize))
    }

    /// True iff the position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Get the cell at a position; out-of-bounds reads are empty
    pub fn get(&self, pos: Position) -> Cell {
        self.index(pos).and_then(|idx| self.cells[idx])
    }

    /// Set the cell at a position; out-of-bounds writes are ignored.
    /// Returns false when the write was ignored.
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill every cell with a random gem kind that does not complete a run
    /// with the two cells already placed above or to the left. The resulting
    /// grid therefore contains no matches.
    pub fn initialize(&mut self) {
        for row in 0..self.size() {
            for col in 0..self.size() {
                let kind = self.random_kind_avoiding(Position::new(row, col));
                self.set(Position::new(row, col), Some(kind));
            }
        }
    }

    /// Pick a uniformly random kind excluding any kind that would complete a
    /// 3-run with the two left or two upper neighbors. Only the two
    /// immediately preceding cells per axis are checked; a deeper scan would
    /// change the statistical distribution of generated boards.
    fn random_kind_avoiding(&mut self, pos: Position) -> GemKind {
        let mut forbidden: ArrayVec<GemKind, 2> = ArrayVec::new();

        let left1 = self.get(Position::new(pos.row, pos.col - 1));
        let left2 = self.get(Position::new(pos.row, pos.col - 2));
        if let (Some(a), Some(b)) = (left1, left2) {
            if a == b {
                forbidden.push(a);
            }
        }

        let up1 = self.get(Position::new(pos.row - 1, pos.col));
        let up2 = self.get(Position::new(pos.row - 2, pos.col));
        if let (Some(a), Some(b)) = (up1, up2) {
            if a == b && !forbidden.contains(&a) {
                forbidden.push(a);
            }
        }

        let mut available: ArrayVec<GemKind, { MAX_GEM_KINDS as usize }> = ArrayVec::new();
        for k in 0..self.config.gem_kinds {
            let kind = GemKind(k);
            if !forbidden.contains(&kind) {
                available.push(kind);
            }
        }

        if available.is_empty() {
            // Unreachable for K >= 3 (at most two kinds are forbidden); fall
            // back to an unconstrained draw rather than failing.
            return GemKind(self.rng.next_range(self.config.gem_kinds as u32) as u8);
        }
        available[self.rng.next_range(available.len() as u32) as usize]
    }

    /// True iff exactly one axis differs by 1 and the other by 0
    pub fn is_adjacent(&self, a: Position, b: Position) -> bool {
        let row_diff = (a.row as i16 - b.row as i16).abs();
        let col_diff = (a.col as i16 - b.col as i16).abs();
        (row_diff == 1 && col_diff == 0) || (row_diff == 0 && col_diff == 1)
    }

    /// Exchange the contents of two cells. Adjacency is a caller
    /// precondition; out-of-bounds positions make the swap a no-op.
    pub fn swap(&mut self, a: Position, b: Position) {
        if let (Some(i), Some(j)) = (self.index(a), self.index(b)) {
            self.cells.swap(i, j);
        }
    }

    /// Scan all rows then all columns for maximal same-kind runs of length
    /// >= 3. Horizontal runs are reported first in row-major order, then
    /// vertical runs in column-major order. A cell already claimed by a
    /// horizontal run is left out of the vertical run's position list so it
    /// is removed and scored once per pass.
    pub fn find_matches(&self) -> Vec<MatchRun> {
        let n = self.config.size as usize;
        let mut runs: Vec<MatchRun> = Vec::new();
        let mut claimed = vec![false; n * n];

        // Horizontal runs
        for row in 0..n {
            let mut col = 0;
            while col + 2 < n {
                let Some(kind) = self.cells[row * n + col] else {
                    col += 1;
                    continue;
                };
                let mut len = 1;
                while col + len < n && self.cells[row * n + col + len] == Some(kind) {
                    len += 1;
                }
                if len >= MIN_RUN_LEN {
                    let mut positions = Vec::with_capacity(len);
                    for i in 0..len {
                        positions.push(Position::new(row as i8, (col + i) as i8));
                        claimed[row * n + col + i] = true;
                    }
                    runs.push(MatchRun { kind, positions });
                    col += len;
                } else {
                    col += 1;
                }
            }
        }

        // Vertical runs, de-duplicated against horizontal membership
        for col in 0..n {
            let mut row = 0;
            while row + 2 < n {
                let Some(kind) = self.cells[row * n + col] else {
                    row += 1;
                    continue;
                };
                let mut len = 1;
                while row + len < n && self.cells[(row + len) * n + col] == Some(kind) {
                    len += 1;
                }
                if len >= MIN_RUN_LEN {
                    let mut positions = Vec::with_capacity(len);
                    for i in 0..len {
                        if !claimed[(row + i) * n + col] {
                            positions.push(Position::new((row + i) as i8, col as i8));
                            claimed[(row + i) * n + col] = true;
                        }
                    }
                    if !positions.is_empty() {
                        runs.push(MatchRun { kind, positions });
                    }
                    row += len;
                } else {
                    row += 1;
                }
            }
        }

        runs
    }

    /// Clear every position referenced by the given runs. Returns the
    /// distinct positions actually cleared (a position already empty is not
    /// re-reported).
    pub fn remove_matches(&mut self, runs: &[MatchRun]) -> Vec<Position> {
        let mut removed = Vec::new();
        for run in runs {
            for &pos in &run.positions {
                if self.get(pos).is_some() {
                    self.set(pos, None);
                    removed.push(pos);
                }
            }
        }
        removed
    }

    /// Slide gems down within each column to fill the gaps below them,
    /// preserving relative vertical order. Returns one move record per gem
    /// that actually changed row.
    pub fn drop_gems(&mut self) -> Vec<GemMove> {
        let n = self.size();
        let mut moves = Vec::new();

        for col in 0..n {
            let mut write_row = n - 1;
            for row in (0..n).rev() {
                if let Some(kind) = self.get(Position::new(row, col)) {
                    if row != write_row {
                        moves.push(GemMove {
                            from: Position::new(row, col),
                            to: Position::new(write_row, col),
                            kind,
                        });
                        self.set(Position::new(write_row, col), Some(kind));
                        self.set(Position::new(row, col), None);
                    }
                    write_row -= 1;
                }
            }
        }

        moves
    }

    /// Fill every remaining empty cell with a uniformly random kind (no
    /// match avoidance at refill time). The spawn row records where above
    /// the grid a drop-in animation should start.
    pub fn refill(&mut self) -> Vec<GemSpawn> {
        let n = self.size();
        let mut spawns = Vec::new();

        for col in 0..n {
            let empty_count = (0..n)
                .filter(|&row| self.get(Position::new(row, col)).is_none())
                .count() as i8;

            for row in 0..n {
                let pos = Position::new(row, col);
                if self.get(pos).is_none() {
                    let kind = GemKind(self.rng.next_range(self.config.gem_kinds as u32) as u8);
                    self.set(pos, Some(kind));
                    spawns.push(GemSpawn {
                        position: pos,
                        kind,
                        spawn_row: row - empty_count,
                    });
                }
            }
        }

        spawns
    }

    /// Speculatively swap two cells and report whether any run would form.
    /// The grid is restored before returning, whatever the outcome.
    pub fn would_create_match(&mut self, a: Position, b: Position) -> bool {
        self.swap(a, b);
        let found = !self.find_matches().is_empty();
        self.swap(a, b);
        found
    }

    /// Exhaustively try every horizontal and vertical adjacent pair once,
    /// short-circuiting on the first match-producing swap
    pub fn has_any_legal_move(&mut self) -> bool {
        let n = self.size();
        for row in 0..n {
            for col in 0..n {
                let here = Position::new(row, col);
                if col + 1 < n && self.would_create_match(here, Position::new(row, col + 1)) {
                    return true;
                }
                if row + 1 < n && self.would_create_match(here, Position::new(row + 1, col)) {
                    return true;
                }
            }
        }
        false
    }
}

impl fmt::Display for Board {
    /// Debug-friendly grid dump: one row per line, `.` for empty cells
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size() {
            for col in 0..self.size() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(row, col)) {
                    Some(kind) => write!(f, "{}", kind.0)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
