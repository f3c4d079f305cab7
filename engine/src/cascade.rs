use crate::board::Board;
use crate::combination::{Combination, combination_score, combinations_in_board};
use crate::gravity::{Fall, Spawn, SymbolSource, apply_gravity};
use crate::settings::GameSettings;
use crate::types::Symbol;

/// One detect-remove-gravity iteration, reported so the presentation layer
/// can animate it and update a running total.
#[derive(Clone, Debug)]
pub struct CascadeStep {
    pub combinations: Vec<Combination>,
    pub score_delta: u32,
    pub falls: Vec<Fall>,
    pub spawns: Vec<Spawn>,
}

#[derive(Clone, Debug)]
pub struct CascadeOutcome {
    pub board: Board,
    pub steps: Vec<CascadeStep>,
    pub score_delta: u32,
}

/// Resolves the board to a stable state: detect combinations, score them,
/// clear all their cells, run one gravity pass, repeat until the detector
/// comes up empty. An explicit loop rather than recursion; every iteration
/// removes at least three symbols, so termination is bounded by board size
/// times the spawn rate.
pub fn resolve_cascade(
    board: &Board,
    settings: &GameSettings,
    source: &mut impl SymbolSource,
) -> CascadeOutcome {
    let mut current = board.clone();
    let mut steps = Vec::new();
    let mut total_score = 0u32;
    loop {
        let combinations = combinations_in_board(&current);
        if combinations.is_empty() {
            break;
        }
        let score_delta = combinations
            .iter()
            .map(|combination| combination_score(settings, combination))
            .sum::<u32>();
        for combination in &combinations {
            for &cell in &combination.cells {
                current.set(cell, Symbol::Empty);
            }
        }
        let pass = apply_gravity(&current, settings.palette_size, source);
        current = pass.board;
        total_score += score_delta;
        steps.push(CascadeStep {
            combinations,
            score_delta,
            falls: pass.falls,
            spawns: pass.spawns,
        });
    }
    CascadeOutcome {
        board: current,
        steps,
        score_delta: total_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{apply_action, valid_actions};
    use crate::gravity::ScriptedSymbols;
    use crate::session_rng::SessionRng;
    use crate::types::Direction;
    use Symbol::{Amber as A, Emerald as B, Ruby as C, Sapphire as D, Topaz as T};

    #[test]
    fn test_stable_board_resolves_to_itself() {
        let settings = GameSettings::default();
        let board = Board::from_rows(&[vec![A, B, C], vec![B, C, A], vec![C, A, B]]);
        let outcome = resolve_cascade(&board, &settings, &mut ScriptedSymbols::new([]));
        assert_eq!(outcome.board, board);
        assert!(outcome.steps.is_empty());
        assert_eq!(outcome.score_delta, 0);
    }

    #[test]
    fn test_single_step_scenario_with_scripted_spawns() {
        // One vertical combination in column 2; scripted
        // spawns [T, D, A] fill it top to bottom, then the board is stable.
        let settings = GameSettings::default();
        let board = Board::from_rows(&[vec![A, A, D], vec![B, C, D], vec![B, C, D]]);
        let mut source = ScriptedSymbols::new([T, D, A]);
        let outcome = resolve_cascade(&board, &settings, &mut source);

        assert_eq!(outcome.steps.len(), 1);
        let step = &outcome.steps[0];
        assert_eq!(step.combinations.len(), 1);
        assert_eq!(step.combinations[0].direction, Direction::Vertical);
        assert_eq!(step.combinations[0].height, 3);
        assert_eq!(step.score_delta, 10);
        assert!(step.falls.is_empty());
        assert_eq!(step.spawns.len(), 3);

        assert_eq!(outcome.board.column(2), vec![T, D, A]);
        assert_eq!(outcome.score_delta, 10);
        assert!(combinations_in_board(&outcome.board).is_empty());
    }

    #[test]
    fn test_chained_cascade_accumulates_steps() {
        // Clearing row 2 drops a third A into column 0 and triggers a second
        // vertical match.
        let settings = GameSettings::default();
        let board = Board::from_rows(&[
            vec![A, B, C, D],
            vec![A, C, B, C],
            vec![B, B, B, D],
            vec![A, C, D, C],
        ]);
        assert_eq!(combinations_in_board(&board).len(), 1);
        let mut source = ScriptedSymbols::new([C, D, T, D, C, T]);
        let outcome = resolve_cascade(&board, &settings, &mut source);
        assert_eq!(outcome.steps.len(), 2);
        assert_eq!(outcome.score_delta, 20);
        assert!(combinations_in_board(&outcome.board).is_empty());
    }

    #[test]
    fn test_cascade_terminates_and_stabilizes() {
        let settings = GameSettings::default();
        for seed in 0..50 {
            let mut rng = SessionRng::new(seed);
            let board = Board::generate(&settings, &mut rng);
            let action = valid_actions(&board)[0];
            let swapped = apply_action(&board, action);
            let outcome = resolve_cascade(&swapped, &settings, &mut rng);
            assert!(
                !outcome.steps.is_empty(),
                "Seed {}: a legal action must resolve at least one step",
                seed
            );
            assert!(
                combinations_in_board(&outcome.board).is_empty(),
                "Seed {}: final board still has combinations",
                seed
            );
            assert!(
                outcome
                    .board
                    .playable_positions()
                    .all(|pos| !outcome.board.get(pos).is_empty()),
                "Seed {}: final board exposes empty cells",
                seed
            );
            assert!(outcome.score_delta >= 10);
        }
    }
}
