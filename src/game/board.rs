use std::fmt::{Display, Formatter};

use generic_array::typenum::U3;

use crate::game::error::GameError;
use crate::game::grid::{Grid, GridIndex};
use crate::game::{GameResult, Mark};

/// 1-based cell address, row-major:
///
/// ```text
/// 1 | 2 | 3
/// 4 | 5 | 6
/// 7 | 8 | 9
/// ```
pub type Position = usize;
pub type Cell = Option<Mark>;

pub const BOARD_SIZE: usize = 9;

/// Copy of all cells in position order, index `i` holds position `i + 1`.
pub type BoardState = [Cell; BOARD_SIZE];

const SEPARATOR: &str = "-------------";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    field: Grid<Cell, U3, U3>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `mark` at `position` if the position is valid and empty.
    pub fn place_mark(&mut self, position: Position, mark: Mark) -> bool {
        self.try_place_mark(position, mark).is_ok()
    }

    pub fn try_place_mark(&mut self, position: Position, mark: Mark) -> GameResult<()> {
        let index = Self::grid_index(position).ok_or(GameError::invalid_position(position))?;
        let cell = &mut self.field[index];
        if cell.is_some() {
            return Err(GameError::cell_is_occupied(position));
        }
        *cell = Some(mark);
        Ok(())
    }

    /// Out-of-range positions read as empty.
    pub fn mark(&self, position: Position) -> Option<Mark> {
        Self::grid_index(position).and_then(|index| self.field[index])
    }

    /// Unlike [`Board::mark`], an out-of-range position is never empty.
    pub fn is_empty(&self, position: Position) -> bool {
        Self::grid_index(position).is_some_and(|index| self.field[index].is_none())
    }

    pub fn is_valid(position: Position) -> bool {
        (1..=BOARD_SIZE).contains(&position)
    }

    pub fn is_full(&self) -> bool {
        self.field.cells().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        self.field.clear();
    }

    pub fn state(&self) -> BoardState {
        let mut state = [None; BOARD_SIZE];
        for (slot, cell) in state.iter_mut().zip(self.field.cells()) {
            *slot = *cell;
        }
        state
    }

    pub fn size(&self) -> usize {
        Grid::<Cell, U3, U3>::len()
    }

    /// Empty positions in ascending order.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.field
            .all_indexed()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| Self::position(index))
            .collect()
    }

    fn grid_index(position: Position) -> Option<GridIndex> {
        if !Self::is_valid(position) {
            return None;
        }
        let cols = Grid::<Cell, U3, U3>::cols();
        Some(GridIndex::new((position - 1) / cols, (position - 1) % cols))
    }

    fn position(index: GridIndex) -> Position {
        index.row() * Grid::<Cell, U3, U3>::cols() + index.col() + 1
    }
}

/// Renders the grid with position numbers in the empty cells.
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", SEPARATOR)?;
        let cols = Grid::<Cell, U3, U3>::cols();
        for (index, cell) in self.field.all_indexed() {
            if index.col() == 0 {
                f.write_str("|")?;
            }
            match cell {
                Some(mark) => write!(f, " {} |", mark)?,
                None => write!(f, " {} |", Self::position(index))?,
            }
            if index.col() == cols - 1 {
                writeln!(f)?;
                writeln!(f, "{}", SEPARATOR)?;
            }
        }
        Ok(())
    }
}
