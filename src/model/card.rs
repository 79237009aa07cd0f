use std::fmt;

use crate::error::CardError;

/// Smallest card that still has a free center surrounded by keywords
pub const MIN_GRID_SIZE: usize = 3;

/// Side length of a bingo card, always odd so the center is unambiguous
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridSize(usize);

impl GridSize {
    pub fn new(size: i64) -> Result<Self, CardError> {
        let side = usize::try_from(size).map_err(|_| CardError::InvalidSize(size))?;
        if side < MIN_GRID_SIZE || side % 2 == 0 {
            return Err(CardError::InvalidSize(size));
        }
        Ok(Self(side))
    }

    /// Number of rows (and columns)
    pub fn side(&self) -> usize {
        self.0
    }

    /// Saturates for sides whose square does not fit in `usize`; no keyword
    /// list is that long, so such cards fail the keyword count check
    pub fn cell_count(&self) -> usize {
        self.0.saturating_mul(self.0)
    }

    /// Keywords required to fill every cell except the free center
    pub fn keywords_needed(&self) -> usize {
        self.cell_count() - 1
    }

    pub fn center(&self) -> Position {
        Position::new(self.0 / 2, self.0 / 2)
    }
}

impl TryFrom<i64> for GridSize {
    type Error = CardError;

    fn try_from(size: i64) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Row/column coordinate of a cell, (0, 0) is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Content of a single card cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    Keyword(String),
    Free,
}

impl Cell {
    pub fn is_free(&self) -> bool {
        matches!(self, Cell::Free)
    }

    pub fn keyword(&self) -> Option<&str> {
        match self {
            Cell::Keyword(word) => Some(word.as_str()),
            Cell::Free => None,
        }
    }
}

/// A finished bingo card
///
/// Cells are stored row-major. The card can only be produced by the builder
/// and has no mutating methods, so rendering it any number of times always
/// shows the same layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Card {
    /// Assemble a card from keywords in placement order.
    ///
    /// Keywords fill the grid row by row, skipping the center cell.
    pub(crate) fn from_placement(size: GridSize, keywords: Vec<String>) -> Self {
        debug_assert_eq!(keywords.len(), size.keywords_needed());

        let center = size.center();
        let mut words = keywords.into_iter();
        let mut cells = Vec::with_capacity(size.cell_count());

        for row in 0..size.side() {
            for col in 0..size.side() {
                if Position::new(row, col) == center {
                    cells.push(Cell::Free);
                } else if let Some(word) = words.next() {
                    cells.push(Cell::Keyword(word));
                }
            }
        }

        Self { size, cells }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Side length of the grid
    pub fn side(&self) -> usize {
        self.size.side()
    }

    pub fn center(&self) -> Position {
        self.size.center()
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if pos.row >= self.side() || pos.col >= self.side() {
            return None;
        }
        self.cells.get(pos.row * self.side() + pos.col)
    }

    /// Iterate over rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.side())
    }

    /// Iterate over every cell with its position, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        let side = self.side();
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Position::new(i / side, i % side), cell))
    }

    /// Keywords on the card in row-major order
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().filter_map(Cell::keyword)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| cell.keyword().unwrap_or("*FREE*"))
                .collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        Ok(())
    }
}
