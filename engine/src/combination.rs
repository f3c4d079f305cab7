use crate::board::Board;
use crate::settings::GameSettings;
use crate::types::{Direction, MIN_RUN_LEN, Position, Symbol};

/// Maximal index range of equal, non-empty consecutive symbols within one
/// line. Runs are disjoint by construction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}

/// A run of 3+ identical adjacent symbols along one row or column. An L/T
/// shape is reported as two combinations sharing a cell, never merged.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Combination {
    /// Cells in line order, start to end.
    pub cells: Vec<Position>,
    pub direction: Direction,
    /// Run length along the combination's own axis.
    pub height: usize,
}

pub fn find_runs_in_line(line: &[Symbol]) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..=line.len() {
        if i == line.len() || line[i] != line[start] {
            if i - start >= MIN_RUN_LEN && !line[start].is_empty() {
                runs.push(Run {
                    start,
                    len: i - start,
                });
            }
            start = i;
        }
    }
    runs
}

/// All combinations on the board. Scans rows and columns per line index,
/// horizontal combinations for a line before vertical ones for the same
/// index, so the output order is deterministic.
pub fn combinations_in_board(board: &Board) -> Vec<Combination> {
    let size = board.size();
    let mut combinations = Vec::new();
    for line in 0..size {
        let row: Vec<Symbol> = (0..size)
            .map(|x| board.get(Position::new(x, line)))
            .collect();
        for run in find_runs_in_line(&row) {
            combinations.push(Combination {
                cells: (run.start..run.start + run.len)
                    .map(|x| Position::new(x, line))
                    .collect(),
                direction: Direction::Horizontal,
                height: run.len,
            });
        }
        for run in find_runs_in_line(&board.column(line)) {
            combinations.push(Combination {
                cells: (run.start..run.start + run.len)
                    .map(|y| Position::new(line, y))
                    .collect(),
                direction: Direction::Vertical,
                height: run.len,
            });
        }
    }
    combinations
}

pub fn combination_score(settings: &GameSettings, combination: &Combination) -> u32 {
    settings.base_match_score * (combination.height as u32 - 2)
}
