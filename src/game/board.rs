use super::player::Player;

pub const SIZE: usize = 3;

/// The 8 possible winning lines: 3 rows, 3 columns, 2 diagonals.
const WIN_LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    CellOccupied,
    OutOfBounds,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 2 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a cell is occupied; positions off the board count as occupied
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        if row >= SIZE || col >= SIZE {
            return true;
        }
        self.cells[row][col] != Cell::Empty
    }

    /// Place a mark in an empty cell
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), MoveError> {
        if row >= SIZE || col >= SIZE {
            return Err(MoveError::OutOfBounds);
        }

        if self.cells[row][col] != Cell::Empty {
            return Err(MoveError::CellOccupied);
        }

        self.cells[row][col] = cell;
        Ok(())
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    /// Get the player holding a completed line, if any
    pub fn winner(&self) -> Option<Player> {
        for line in &WIN_LINES {
            let [(r0, c0), (r1, c1), (r2, c2)] = *line;
            let first = self.cells[r0][c0];
            if first != Cell::Empty && first == self.cells[r1][c1] && first == self.cells[r2][c2] {
                return match first {
                    Cell::X => Some(Player::X),
                    Cell::O => Some(Player::O),
                    Cell::Empty => None,
                };
            }
        }
        None
    }

    /// Check if a player holds a completed line
    pub fn has_win(&self, player: Player) -> bool {
        self.winner() == Some(player)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
