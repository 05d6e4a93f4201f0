//! Scoring module - match scoring with combo multiplier
//!
//! Each gem in a run is worth a base amount, runs longer than three earn a
//! per-extra-gem bonus, and the whole round is multiplied by the combo count
//! (1 for the first matching round of a cascade, 2 for the second, and so on).

use crate::types::{BoardConfig, MatchRun, MIN_RUN_LEN};

/// Points for a single run of the given length, before the combo multiplier
pub fn run_points(len: usize, config: &BoardConfig) -> u32 {
    let base = config.base_points.saturating_mul(len as u32);
    let extra = len.saturating_sub(MIN_RUN_LEN) as u32;
    base.saturating_add(config.length_bonus.saturating_mul(extra))
}

/// Total points for one matching round: the sum over all runs, multiplied by
/// the current combo count. Run length is the number of reported positions,
/// so a cell shared between a horizontal and a vertical run counts once.
pub fn round_points(runs: &[MatchRun], combo: u32, config: &BoardConfig) -> u32 {
    let sum: u32 = runs
        .iter()
        .map(|run| run_points(run.positions.len(), config))
        .sum();
    sum.saturating_mul(combo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GemKind, Position};

    fn run_of(len: usize) -> MatchRun {
        MatchRun {
            kind: GemKind(0),
            positions: (0..len).map(|i| Position::new(0, i as i8)).collect(),
        }
    }

    #[test]
    fn test_run_points() {
        let config = BoardConfig::default();
        assert_eq!(run_points(3, &config), 150);
        assert_eq!(run_points(4, &config), 225);
        assert_eq!(run_points(5, &config), 300);
    }

    #[test]
    fn test_three_run_first_round_scores_150() {
        let config = BoardConfig::default();
        assert_eq!(round_points(&[run_of(3)], 1, &config), 150);
    }

    #[test]
    fn test_five_run_second_round_scores_600() {
        let config = BoardConfig::default();
        // (50*5 + 25*2) * 2
        assert_eq!(round_points(&[run_of(5)], 2, &config), 600);
    }

    #[test]
    fn test_multiple_runs_sum_before_multiplier() {
        let config = BoardConfig::default();
        let runs = [run_of(3), run_of(4)];
        assert_eq!(round_points(&runs, 1, &config), 375);
        assert_eq!(round_points(&runs, 3, &config), 1125);
    }

    #[test]
    fn test_custom_point_values() {
        let config = BoardConfig {
            base_points: 10,
            length_bonus: 5,
            ..BoardConfig::default()
        };
        assert_eq!(run_points(4, &config), 45);
        assert_eq!(round_points(&[run_of(4)], 2, &config), 90);
    }
}
