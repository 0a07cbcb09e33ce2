use generic_array::typenum::Unsigned;
use generic_array::{ArrayLength, GenericArray};
use std::ops::{Index, IndexMut};

/// Index struct to access elements in the [`Grid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridIndex {
    row: usize,
    col: usize,
}

impl From<(usize, usize)> for GridIndex {
    fn from(value: (usize, usize)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl GridIndex {
    /// Constructs a new [`GridIndex`].
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns value of `self.col`
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns value of `self.row`
    pub fn row(&self) -> usize {
        self.row
    }
}

/// Two-dimensional fixed-length array that stores values and allows to mutate them.
/// Length of array is defined by generic parameters `R` and `C`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T, R: ArrayLength, C: ArrayLength> {
    contents: GenericArray<GenericArray<T, C>, R>,
}

impl<T: Default, R: ArrayLength, C: ArrayLength> Default for Grid<T, R, C> {
    fn default() -> Self {
        Self {
            contents: Default::default(),
        }
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Index<GridIndex> for Grid<T, R, C> {
    type Output = T;

    fn index(&self, index: GridIndex) -> &Self::Output {
        &self.contents[index.row()][index.col()]
    }
}

impl<T, R: ArrayLength, C: ArrayLength> IndexMut<GridIndex> for Grid<T, R, C> {
    fn index_mut(&mut self, index: GridIndex) -> &mut Self::Output {
        &mut self.contents[index.row()][index.col()]
    }
}

impl<T, R: ArrayLength, C: ArrayLength> Grid<T, R, C> {
    /// Number of rows in the grid.
    pub fn rows() -> usize {
        R::to_usize()
    }

    /// Number of columns in the grid.
    pub fn cols() -> usize {
        C::to_usize()
    }

    /// Total number of cells.
    pub fn len() -> usize {
        Self::rows() * Self::cols()
    }

    /// Returns an iterator over all elements row by row.
    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.contents.iter().flat_map(|row| row.iter())
    }

    /// Returns an iterator to indexed grid elements row by row
    pub fn all_indexed(&self) -> impl Iterator<Item = (GridIndex, &T)> {
        self.contents.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, val)| (GridIndex::new(i, j), val))
        })
    }
}

impl<T: Default, R: ArrayLength, C: ArrayLength> Grid<T, R, C> {
    /// Resets every element to its default value.
    pub fn clear(&mut self) {
        for cell in self.contents.iter_mut().flat_map(|row| row.iter_mut()) {
            *cell = T::default();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use generic_array::typenum;

    #[test]
    fn test_all_indexed() {
        let mut grid = Grid::<usize, typenum::U2, typenum::U2>::default();
        grid[(1, 1).into()] = 1;
        itertools::assert_equal(
            grid.all_indexed(),
            [
                ((0, 0).into(), &0),
                ((0, 1).into(), &0),
                ((1, 0).into(), &0),
                ((1, 1).into(), &1),
            ]
            .into_iter(),
        );
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::<u8, typenum::U3, typenum::U2>::default();
        grid[(2, 1).into()] = 7;
        grid[(0, 0).into()] = 3;
        grid.clear();
        assert!(grid.cells().all(|val| *val == 0));
        assert_eq!(Grid::<u8, typenum::U3, typenum::U2>::len(), 6);
    }
}
