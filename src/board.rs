use std::collections::HashSet;
use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use ahash::RandomState;
use itertools::iproduct;
use strum_macros::{Display, EnumIter};

use crate::error::{Error, Result};

pub const SIZE: usize = 3;
pub const CELL_COUNT: usize = SIZE * SIZE;

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Display, EnumIter)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn mark(self) -> CellState {
        CellState::Mark(self)
    }

    /// Utility of a win by this player, from X's point of view.
    pub fn win_utility(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

impl Not for Player {
    type Output = Player;

    fn not(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(Error::InvalidPlayer { value: other.to_string() }),
        }
    }
}

#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Default)]
pub enum CellState {
    #[default]
    Empty,
    Mark(Player),
}

impl CellState {
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    pub fn player(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::Mark(player) => Some(player),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Mark(Player::X) => 'X',
            CellState::Mark(Player::O) => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<CellState> {
        match c {
            '.' | '_' | '-' => Some(CellState::Empty),
            'X' | 'x' => Some(CellState::Mark(Player::X)),
            'O' | 'o' => Some(CellState::Mark(Player::O)),
            _ => None,
        }
    }
}

/// A (row, column) coordinate on the board. Always inside the grid.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Action {
    row: usize,
    column: usize,
}

impl Action {
    pub fn new(row: usize, column: usize) -> Result<Self> {
        if row >= SIZE || column >= SIZE {
            return Err(Error::OutOfBounds { row, column });
        }
        Ok(Self { row, column })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Row-major position in `0..9`.
    pub fn index(&self) -> usize {
        self.row * SIZE + self.column
    }

    /// Every coordinate of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Action> {
        iproduct!(0..SIZE, 0..SIZE).map(|(row, column)| Action { row, column })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

pub type ActionSet = HashSet<Action, RandomState>;

/// The 8 lines, checked in this order: rows, columns, diagonals.
static LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// A tic-tac-toe position. `Copy`, so every move yields an independent board.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Default)]
pub struct Board {
    cells: [[CellState; SIZE]; SIZE],
}

impl Board {
    pub fn initial_state() -> Self {
        Self::default()
    }

    pub fn new(cells: [[CellState; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[[CellState; SIZE]; SIZE] {
        &self.cells
    }

    pub fn cell(&self, action: Action) -> CellState {
        self.cells[action.row][action.column]
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == player.mark()).count()
    }

    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    /// The player to move, derived from the mark counts. X moves first.
    pub fn player(&self) -> Player {
        if self.count(Player::X) <= self.count(Player::O) {
            Player::X
        } else {
            Player::O
        }
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Action> + '_ {
        Action::all().filter(move |&a| self.cell(a).is_empty())
    }

    pub fn actions(&self) -> ActionSet {
        self.empty_cells().collect()
    }

    /// The board after the player to move marks `action`. Fails if the cell is taken.
    pub fn result(&self, action: Action) -> Result<Board> {
        if !self.cell(action).is_empty() {
            return Err(Error::InvalidAction { row: action.row, column: action.column });
        }
        Ok(self.placed(action))
    }

    /// Like `result`, for callers that already know the cell is empty.
    pub(crate) fn placed(&self, action: Action) -> Board {
        debug_assert!(self.cell(action).is_empty());
        let mut next = *self;
        next.cells[action.row][action.column] = self.player().mark();
        next
    }

    pub fn winning_line(&self) -> Option<&'static [(usize, usize); 3]> {
        LINES.iter().find(|line| {
            let [a, b, c] = line.map(|(row, column)| self.cells[row][column]);
            !a.is_empty() && a == b && b == c
        })
    }

    pub fn winner(&self) -> Option<Player> {
        self.winning_line()
            .and_then(|&[(row, column), _, _]| self.cells[row][column].player())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    pub fn terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// +1 if X has won, -1 if O has, 0 otherwise.
    pub fn utility(&self) -> i32 {
        self.winner().map_or(0, Player::win_utility)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}|{}|{}", row[0].to_char(), row[1].to_char(), row[2].to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parses 9 cell symbols in row-major order. Whitespace, `|` and `/` are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();
        if symbols.len() != CELL_COUNT {
            return Err(Error::InvalidBoardLength { expected: CELL_COUNT, got: symbols.len() });
        }

        let mut cells = [[CellState::Empty; SIZE]; SIZE];
        for (position, &character) in symbols.iter().enumerate() {
            cells[position / SIZE][position % SIZE] = CellState::from_char(character)
                .ok_or(Error::InvalidCellCharacter { character, position })?;
        }

        let board = Board::new(cells);
        let (x_count, o_count) = (board.count(Player::X), board.count(Player::O));
        if x_count != o_count && x_count != o_count + 1 {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        }
        Ok(board)
    }
}
