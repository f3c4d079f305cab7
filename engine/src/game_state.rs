use std::collections::HashSet;

use crate::action::{Action, apply_action, valid_action_hashes, valid_actions};
use crate::board::Board;
use crate::cascade::{CascadeStep, resolve_cascade};
use crate::session_rng::SessionRng;
use crate::settings::GameSettings;
use crate::types::{GameStatus, Position};

/// A submitted move's result. `Rejected` is the expected path for an illegal
/// gesture, not an error: the board is untouched and the caller plays its
/// "invalid move" feedback instead of a swap.
#[derive(Clone, Debug)]
pub enum MoveOutcome {
    Rejected,
    Applied {
        steps: Vec<CascadeStep>,
        score_delta: u32,
    },
}

/// Authoritative game state for one board. Callers serialize moves: the next
/// state is produced synchronously and a new move is accepted only after the
/// caller is done pacing the previous cascade's animations.
pub struct Match3GameState {
    settings: GameSettings,
    board: Board,
    valid_actions: HashSet<usize>,
    score: u32,
    moves_made: u32,
    status: GameStatus,
}

impl Match3GameState {
    pub fn new(settings: GameSettings, rng: &mut SessionRng) -> Self {
        let board = Board::generate(&settings, rng);
        Self::from_board(settings, board)
    }

    pub fn new_with_voids(
        settings: GameSettings,
        voids: &[Position],
        rng: &mut SessionRng,
    ) -> Self {
        let board = Board::generate_with_voids(&settings, voids, rng);
        Self::from_board(settings, board)
    }

    /// Wraps an existing board, e.g. a restored snapshot or a test fixture.
    pub fn from_board(settings: GameSettings, board: Board) -> Self {
        let valid_actions = valid_action_hashes(&board);
        let mut state = Self {
            settings,
            board,
            valid_actions,
            score: 0,
            moves_made: 0,
            status: GameStatus::InProgress,
        };
        state.refresh_status();
        state
    }

    /// Commits a legal swap and resolves the whole cascade, or rejects the
    /// move leaving everything unchanged.
    pub fn apply_move(&mut self, action: Action, rng: &mut SessionRng) -> MoveOutcome {
        if self.status != GameStatus::InProgress || !self.is_legal_move(action) {
            return MoveOutcome::Rejected;
        }
        let swapped = apply_action(&self.board, action);
        let outcome = resolve_cascade(&swapped, &self.settings, rng);
        self.board = outcome.board;
        self.score += outcome.score_delta;
        self.moves_made += 1;
        self.valid_actions = valid_action_hashes(&self.board);
        self.refresh_status();
        MoveOutcome::Applied {
            steps: outcome.steps,
            score_delta: outcome.score_delta,
        }
    }

    pub fn is_legal_move(&self, action: Action) -> bool {
        self.valid_actions.contains(&action.hash(self.board.size()))
    }

    pub fn legal_actions(&self) -> Vec<Action> {
        valid_actions(&self.board)
    }

    fn refresh_status(&mut self) {
        if self.score >= self.settings.target_score {
            self.status = GameStatus::Won;
        } else if self.valid_actions.is_empty() {
            self.status = GameStatus::Stalled;
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }
}
