use crate::action::valid_actions;
use crate::combination::combinations_in_board;
use crate::session_rng::SessionRng;
use crate::settings::GameSettings;
use crate::types::{Position, Symbol};

/// Square matrix of symbols plus a static playable/void mask. Void cells are
/// never populated and never take part in matching or gravity. `Clone` is a
/// deep copy; mutating a clone never affects the original.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Symbol>,
    playable: Vec<bool>,
}

impl Board {
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Symbol::Empty; size * size],
            playable: vec![true; size * size],
        }
    }

    /// Builds a board from row-major symbol rows. Intended for fixtures and
    /// clients restoring a snapshot.
    pub fn from_rows(rows: &[Vec<Symbol>]) -> Self {
        let size = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == size),
            "board rows must form a square matrix"
        );
        Self {
            size,
            cells: rows.iter().flat_map(|row| row.iter().copied()).collect(),
            playable: vec![true; size * size],
        }
    }

    pub fn with_voids(mut self, voids: &[Position]) -> Self {
        for &pos in voids {
            let index = pos.to_index(self.size);
            self.playable[index] = false;
            self.cells[index] = Symbol::Empty;
        }
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, pos: Position) -> Symbol {
        self.cells[pos.to_index(self.size)]
    }

    pub fn set(&mut self, pos: Position, symbol: Symbol) {
        let index = pos.to_index(self.size);
        debug_assert!(self.playable[index], "void cells never hold symbols");
        self.cells[index] = symbol;
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    pub fn is_playable(&self, pos: Position) -> bool {
        self.playable[pos.to_index(self.size)]
    }

    /// Column `x` sampled top to bottom.
    pub fn column(&self, x: usize) -> Vec<Symbol> {
        (0..self.size)
            .map(|y| self.get(Position::new(x, y)))
            .collect()
    }

    pub fn rows(&self) -> Vec<Vec<Symbol>> {
        (0..self.size)
            .map(|y| {
                (0..self.size)
                    .map(|x| self.get(Position::new(x, y)))
                    .collect()
            })
            .collect()
    }

    pub fn playable_positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.size * self.size)
            .filter(|&index| self.playable[index])
            .map(|index| Position::from_index(self.size, index))
    }

    /// Makes the first game board: every playable cell random, no initial
    /// combinations, at least one legal action.
    pub fn generate(settings: &GameSettings, rng: &mut SessionRng) -> Self {
        Self::generate_with_voids(settings, &[], rng)
    }

    pub fn generate_with_voids(
        settings: &GameSettings,
        voids: &[Position],
        rng: &mut SessionRng,
    ) -> Self {
        for _ in 0..settings.max_generate_attempts {
            let mut board = Self::empty(settings.board_size).with_voids(voids);
            board.fill_random(settings.palette_size, rng);
            board.break_combinations(settings);
            if !valid_actions(&board).is_empty() {
                return board;
            }
        }
        panic!(
            "Board generation produced no playable board after {} attempts",
            settings.max_generate_attempts
        );
    }

    fn fill_random(&mut self, palette_size: usize, rng: &mut SessionRng) {
        for index in 0..self.cells.len() {
            if self.playable[index] {
                self.cells[index] = Symbol::from_palette_index(rng.random_range(0..palette_size));
            }
        }
    }

    /// Recolors the second cell of every detected combination until the
    /// detector reports none. Convergence is expected within a couple of
    /// passes; blowing the cap means the palette cannot break its own runs,
    /// which is an internal invariant violation.
    fn break_combinations(&mut self, settings: &GameSettings) {
        for _ in 0..settings.max_break_passes {
            let combinations = combinations_in_board(self);
            if combinations.is_empty() {
                return;
            }
            for combination in &combinations {
                let cell = combination.cells[1];
                let recolored = self.recolor_symbol(cell, settings.palette_size);
                self.set(cell, recolored);
            }
        }
        panic!(
            "Board generation failed to break combinations within {} passes",
            settings.max_break_passes
        );
    }

    /// First palette symbol equal to neither the cell's own symbol nor any
    /// in-bounds orthogonal neighbor's. Falls back to any symbol different
    /// from the current one when every candidate is excluded; the rescan loop
    /// cleans up whatever that re-creates.
    fn recolor_symbol(&self, pos: Position, palette_size: usize) -> Symbol {
        let current = self.get(pos);
        let excluded: Vec<Symbol> = self
            .orthogonal_neighbors(pos)
            .map(|neighbor| self.get(neighbor))
            .chain([current])
            .collect();
        let palette = Symbol::palette(palette_size);
        palette
            .iter()
            .copied()
            .find(|symbol| !excluded.contains(symbol))
            .or_else(|| palette.iter().copied().find(|&symbol| symbol != current))
            .expect("palette holds at least two symbols")
    }

    fn orthogonal_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        let up = pos.y.checked_sub(1).map(|y| Position::new(pos.x, y));
        let down = (pos.y + 1 < size).then(|| Position::new(pos.x, pos.y + 1));
        let left = pos.x.checked_sub(1).map(|x| Position::new(x, pos.y));
        let right = (pos.x + 1 < size).then(|| Position::new(pos.x + 1, pos.y));
        [up, down, left, right].into_iter().flatten()
    }
}
