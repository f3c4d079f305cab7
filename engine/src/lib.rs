pub mod action;
pub mod board;
pub mod cascade;
pub mod combination;
pub mod game_state;
pub mod gravity;
pub mod logger;
pub mod session_rng;
pub mod settings;
pub mod types;

pub use action::{Action, apply_action, is_legal, valid_action_hashes, valid_actions};
pub use board::Board;
pub use cascade::{CascadeOutcome, CascadeStep, resolve_cascade};
pub use combination::{Combination, Run, combination_score, combinations_in_board, find_runs_in_line};
pub use game_state::{Match3GameState, MoveOutcome};
pub use gravity::{Fall, GravityPass, ScriptedSymbols, Spawn, SymbolSource, apply_gravity};
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use types::{BOARD_SIZE, Direction, GameStatus, PALETTE_SIZE, Position, Symbol};
