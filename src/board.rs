use std::fmt::{Debug, Display, Formatter};

/// One of the two sides, the human player or the computer opponent.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Human,
    Computer,
}

/// The absolute outcome for a finished game.
/// A game that is still going on is represented as `None` wherever an `Option<Outcome>` is used.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Side),
    Draw,
}

/// Error returned when a piece cannot be dropped into a column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum PlayError {
    #[error("column {0} is out of range")]
    InvalidColumn(usize),
    #[error("column {0} is already full")]
    ColumnFull(usize),
}

/// Error returned when a move is requested for a board that has no open column left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[error("no playable column left on the board")]
pub struct NoLegalMove;

/// A single cell of the board, `None` if it's empty.
pub type Tile = Option<Side>;

const COLUMNS: usize = 7;
const ROWS: usize = 6;

/// The 7x6 connect four grid.
///
/// Cells are stored column-major, and row `0` is the top row.
/// Pieces always settle in the lowest empty row of their column, so inside every column the occupied cells
/// form a contiguous run ending at the bottom row `HEIGHT - 1`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Board {
    tiles: [[Tile; ROWS]; COLUMNS],
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Human, Side::Computer];

    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Side::Human => 'x',
            Side::Computer => 'o',
        }
    }
}

impl Board {
    pub const WIDTH: usize = COLUMNS;
    pub const HEIGHT: usize = ROWS;
    pub const TILES: usize = Self::WIDTH * Self::HEIGHT;

    /// The number of pieces in a line that wins the game.
    pub const WIN_LENGTH: usize = 4;

    /// Construct an empty board.
    pub fn new() -> Self {
        Board {
            tiles: [[None; ROWS]; COLUMNS],
        }
    }

    /// The tile at the given position, panics if the position is out of bounds.
    pub fn tile(&self, column: usize, row: usize) -> Tile {
        assert!(
            column < Self::WIDTH && row < Self::HEIGHT,
            "({}, {}) is out of bounds",
            column,
            row
        );
        self.tiles[column][row]
    }

    /// Like [Board::tile] but returns `None` for positions outside of the board.
    pub fn tile_checked(&self, column: isize, row: isize) -> Option<Tile> {
        if column < 0 || row < 0 {
            return None;
        }
        self.tiles.get(column as usize)?.get(row as usize).copied()
    }

    /// Drop a piece for `side` into `column`. The piece settles in the lowest empty row,
    /// which is returned.
    pub fn drop_piece(&mut self, column: usize, side: Side) -> Result<usize, PlayError> {
        if column >= Self::WIDTH {
            return Err(PlayError::InvalidColumn(column));
        }
        if self.is_column_full(column) {
            return Err(PlayError::ColumnFull(column));
        }

        // the first occupied row from the top, or the bottom of the board
        let floor = self.tiles[column]
            .iter()
            .position(|tile| tile.is_some())
            .unwrap_or(Self::HEIGHT);
        let row = floor - 1;

        self.tiles[column][row] = Some(side);
        Ok(row)
    }

    /// Clone this board, drop a piece on it and return the new board.
    pub fn clone_and_drop(&self, column: usize, side: Side) -> Result<Board, PlayError> {
        let mut next = self.clone();
        next.drop_piece(column, side)?;
        Ok(next)
    }

    /// Whether `column` has no empty cell left. Panics if the column is out of range.
    pub fn is_column_full(&self, column: usize) -> bool {
        self.tile(column, 0).is_some()
    }

    /// Whether every column is full. This is the draw condition.
    pub fn is_full(&self) -> bool {
        (0..Self::WIDTH).all(|column| self.is_column_full(column))
    }

    /// The columns that still have room for a piece, in ascending order.
    pub fn available_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..Self::WIDTH).filter(move |&column| !self.is_column_full(column))
    }

    /// The row of the topmost piece in `column`, `None` if the column is empty.
    pub fn top_row(&self, column: usize) -> Option<usize> {
        self.tiles[column].iter().position(|tile| tile.is_some())
    }

    /// The number of pieces placed by `side`.
    pub fn piece_count(&self, side: Side) -> usize {
        self.tiles.iter().flatten().filter(|&&tile| tile == Some(side)).count()
    }

    /// The board with every piece handed to the other side.
    /// This allows a bot that always plays as [Side::Computer] to play the human seat.
    pub fn swap_sides(&self) -> Board {
        let mut result = self.clone();
        for tile in result.tiles.iter_mut().flatten() {
            *tile = tile.map(Side::other);
        }
        result
    }

    /// The board mirrored around its middle column.
    pub fn mirror(&self) -> Board {
        let mut result = self.clone();
        result.tiles.reverse();
        result
    }

    /// Check the gravity invariant: no empty cell sits below an occupied one.
    pub fn assert_valid(&self) {
        for (column, tiles) in self.tiles.iter().enumerate() {
            let floor = tiles.iter().position(|tile| tile.is_some()).unwrap_or(Self::HEIGHT);
            assert!(
                tiles[floor..].iter().all(|tile| tile.is_some()),
                "column {} has a gap below its top piece:\n{}",
                column,
                self
            );
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

fn tile_to_char(tile: Tile) -> char {
    tile.map_or('.', Side::to_char)
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board {{ ")?;
        for column in 0..Self::WIDTH {
            if column != 0 {
                write!(f, "/")?;
            }
            // bottom to top, stopping at the first empty cell
            for row in (0..Self::HEIGHT).rev() {
                match self.tiles[column][row] {
                    Some(side) => write!(f, "{}", side.to_char())?,
                    None => break,
                }
            }
        }
        write!(f, " }}")
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..Self::HEIGHT {
            for column in 0..Self::WIDTH {
                write!(f, "{}", tile_to_char(self.tiles[column][row]))?;
            }
            writeln!(f)?;
        }
        for column in 0..Self::WIDTH {
            write!(f, "{}", column)?;
        }
        writeln!(f)?;

        Ok(())
    }
}
