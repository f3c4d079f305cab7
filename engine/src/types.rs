pub const BOARD_SIZE: usize = 8;
pub const PALETTE_SIZE: usize = 5;
pub const MIN_RUN_LEN: usize = 3;

/// Tile kind. `Empty` means "no tile present" and only ever appears between a
/// removal step and the completion of gravity; it never participates in a
/// match.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Symbol {
    Empty,
    Amber,
    Emerald,
    Ruby,
    Sapphire,
    Topaz,
}

impl Symbol {
    pub const PALETTE: [Symbol; PALETTE_SIZE] = [
        Symbol::Amber,
        Symbol::Emerald,
        Symbol::Ruby,
        Symbol::Sapphire,
        Symbol::Topaz,
    ];

    pub fn palette(palette_size: usize) -> &'static [Symbol] {
        &Self::PALETTE[..palette_size]
    }

    pub fn from_palette_index(index: usize) -> Self {
        Self::PALETTE[index]
    }

    pub fn is_empty(self) -> bool {
        self == Symbol::Empty
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn to_index(self, size: usize) -> usize {
        self.y * size + self.x
    }

    pub fn from_index(size: usize, index: usize) -> Self {
        Self {
            x: index % size,
            y: index / size,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Won,
    Stalled,
}
