//! Square board geometry: symbols, positions and lines

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// SYMBOLS
// ============================================================================

/// Content of a single cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    #[default]
    Empty,
    Cross,
    Nought,
}

impl Symbol {
    pub fn is_empty(self) -> bool {
        self == Symbol::Empty
    }

    /// Character used when rendering the board
    pub fn as_char(self) -> char {
        match self {
            Symbol::Empty => ' ',
            Symbol::Cross => 'X',
            Symbol::Nought => 'O',
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A player allowed to move. Cross always opens the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Cross,
    Nought,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    pub fn symbol(self) -> Symbol {
        match self {
            Player::Cross => Symbol::Cross,
            Player::Nought => Symbol::Nought,
        }
    }
}

impl From<Player> for Symbol {
    fn from(player: Player) -> Self {
        player.symbol()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ============================================================================
// POSITIONS AND LINES
// ============================================================================

/// Zero-based (row, column) coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A row, a column, or one of the two main diagonals
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
    Diagonal,
    AntiDiagonal,
}

impl Line {
    /// Cells of the line on a board of the given size, in walking order
    pub fn cells(self, size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |i| match self {
            Line::Row(r) => Position::new(r, i),
            Line::Column(c) => Position::new(i, c),
            Line::Diagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(i, size - 1 - i),
        })
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// n x n grid stored row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Symbol>,
}

impl Board {
    /// Empty board; callers validate `size >= 1`
    pub(crate) fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Symbol::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Symbol at a position, `None` when off the board
    pub fn get(&self, pos: Position) -> Option<Symbol> {
        if self.in_bounds(pos.row, pos.col) {
            Some(self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, pos: Position, symbol: Symbol) {
        let idx = pos.row * self.size + pos.col;
        self.cells[idx] = symbol;
    }

    /// Symbol at an in-bounds position
    pub(crate) fn at(&self, pos: Position) -> Symbol {
        self.cells[pos.row * self.size + pos.col]
    }

    /// Empty cells in row-major order
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(move |(i, _)| Position::new(i / self.size, i % self.size))
    }

    pub fn has_empty(&self) -> bool {
        self.cells.iter().any(|s| s.is_empty())
    }

    /// Deep copy of the grid as rows
    pub fn rows(&self) -> Vec<Vec<Symbol>> {
        self.cells.chunks(self.size).map(|r| r.to_vec()).collect()
    }
}
