use std::collections::HashSet;

use crate::board::Board;
use crate::combination::combinations_in_board;
use crate::types::{Direction, Position};

/// A candidate swap of two adjacent cells, normalized so the origin is the
/// top-left of the pair; the target cell is derived from the direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Action {
    pub origin: Position,
    pub direction: Direction,
}

impl Action {
    pub fn new(origin: Position, direction: Direction) -> Self {
        Self { origin, direction }
    }

    /// Normalized action for two orthogonally adjacent cells, in either
    /// order. `None` when the cells are not adjacent.
    pub fn between(a: Position, b: Position) -> Option<Self> {
        if a.y == b.y && a.x.abs_diff(b.x) == 1 {
            Some(Self::new(
                Position::new(a.x.min(b.x), a.y),
                Direction::Horizontal,
            ))
        } else if a.x == b.x && a.y.abs_diff(b.y) == 1 {
            Some(Self::new(
                Position::new(a.x, a.y.min(b.y)),
                Direction::Vertical,
            ))
        } else {
            None
        }
    }

    pub fn target(self) -> Position {
        match self.direction {
            Direction::Horizontal => Position::new(self.origin.x + 1, self.origin.y),
            Direction::Vertical => Position::new(self.origin.x, self.origin.y + 1),
        }
    }

    /// Dense integer in `[0, 2 * size * size)`: cell index, with vertical
    /// actions offset by `size * size`. Collision-free and stable across
    /// runs, so legality checks reduce to set membership.
    pub fn hash(self, size: usize) -> usize {
        let index = self.origin.to_index(size);
        match self.direction {
            Direction::Horizontal => index,
            Direction::Vertical => size * size + index,
        }
    }
}

/// Swaps the action's two cells on a fresh board. No legality check; callers
/// validate first. An out-of-bounds target is a caller error.
pub fn apply_action(board: &Board, action: Action) -> Board {
    let target = action.target();
    debug_assert!(
        board.in_bounds(action.origin) && board.in_bounds(target),
        "action out of bounds"
    );
    let mut next = board.clone();
    let origin_symbol = next.get(action.origin);
    next.set(action.origin, next.get(target));
    next.set(target, origin_symbol);
    next
}

/// Legality oracle: the swap is legal iff it produces at least one
/// combination on a scratch copy. Which combinations would form is
/// irrelevant.
pub fn is_legal(board: &Board, action: Action) -> bool {
    !combinations_in_board(&apply_action(board, action)).is_empty()
}

/// Every legal action on the board. For each cell the horizontal action is
/// tried unless the cell sits in the last column, the vertical one unless it
/// sits in the last row; actions touching void cells are skipped.
pub fn valid_actions(board: &Board) -> Vec<Action> {
    let size = board.size();
    let mut actions = Vec::new();
    for y in 0..size {
        for x in 0..size {
            let origin = Position::new(x, y);
            if !board.is_playable(origin) {
                continue;
            }
            for direction in [Direction::Horizontal, Direction::Vertical] {
                let action = Action::new(origin, direction);
                let target = action.target();
                if board.in_bounds(target) && board.is_playable(target) && is_legal(board, action)
                {
                    actions.push(action);
                }
            }
        }
    }
    actions
}

/// Hashed form of `valid_actions` for O(1) membership checks.
pub fn valid_action_hashes(board: &Board) -> HashSet<usize> {
    valid_actions(board)
        .iter()
        .map(|action| action.hash(board.size()))
        .collect()
}
