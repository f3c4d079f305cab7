use std::collections::VecDeque;

use crate::board::Board;
use crate::session_rng::SessionRng;
use crate::types::{Position, Symbol};

/// Where freshly spawned symbols come from. The game uses the session RNG;
/// tests and replays can inject a fixed sequence instead.
pub trait SymbolSource {
    fn next_symbol(&mut self, palette_size: usize) -> Symbol;
}

impl SymbolSource for SessionRng {
    fn next_symbol(&mut self, palette_size: usize) -> Symbol {
        Symbol::from_palette_index(self.random_range(0..palette_size))
    }
}

/// Deterministic source fed from a fixed queue. Running dry is a test
/// scripting error.
pub struct ScriptedSymbols {
    queue: VecDeque<Symbol>,
}

impl ScriptedSymbols {
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            queue: symbols.into_iter().collect(),
        }
    }
}

impl SymbolSource for ScriptedSymbols {
    fn next_symbol(&mut self, _palette_size: usize) -> Symbol {
        self.queue
            .pop_front()
            .expect("scripted symbol source ran out of symbols")
    }
}

/// A surviving symbol's move within its column.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Fall {
    pub from: Position,
    pub to: Position,
}

/// A freshly spawned symbol entering from above the board; `origin_y` is the
/// conceptual row it falls in from (negative, above row 0).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Spawn {
    pub origin_y: i32,
    pub to: Position,
    pub symbol: Symbol,
}

#[derive(Clone, Debug)]
pub struct GravityPass {
    pub board: Board,
    pub falls: Vec<Fall>,
    pub spawns: Vec<Spawn>,
}

/// Compacts every column independently: surviving symbols keep their relative
/// order and sink to the lowest playable cells, vacated top slots are filled
/// with fresh symbols. Void cells are skipped over, so survivors fall through
/// them. Returns the resulting board plus the per-symbol move maps the
/// presentation layer animates from.
pub fn apply_gravity(
    board: &Board,
    palette_size: usize,
    source: &mut impl SymbolSource,
) -> GravityPass {
    let size = board.size();
    let mut next = board.clone();
    let mut falls = Vec::new();
    let mut spawns = Vec::new();
    for x in 0..size {
        let rows: Vec<usize> = (0..size)
            .filter(|&y| board.is_playable(Position::new(x, y)))
            .collect();
        let survivors: Vec<(usize, Symbol)> = rows
            .iter()
            .filter_map(|&y| {
                let symbol = board.get(Position::new(x, y));
                (!symbol.is_empty()).then_some((y, symbol))
            })
            .collect();
        let spawn_count = rows.len() - survivors.len();
        for (slot, &y) in rows[..spawn_count].iter().enumerate() {
            let symbol = source.next_symbol(palette_size);
            let to = Position::new(x, y);
            next.set(to, symbol);
            spawns.push(Spawn {
                origin_y: slot as i32 - spawn_count as i32,
                to,
                symbol,
            });
        }
        for (slot, &(from_y, symbol)) in survivors.iter().enumerate() {
            let to = Position::new(x, rows[spawn_count + slot]);
            next.set(to, symbol);
            if from_y != to.y {
                falls.push(Fall {
                    from: Position::new(x, from_y),
                    to,
                });
            }
        }
    }
    GravityPass {
        board: next,
        falls,
        spawns,
    }
}
