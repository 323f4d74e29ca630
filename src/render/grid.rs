//! Row-major character/color grid.

/// Colors of a painted cell, as unresolved color codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellColors {
    /// Foreground color code
    pub foreground: String,
    /// Background color code; `None` uses the page default
    pub background: Option<String>,
}

impl CellColors {
    /// Create cell colors.
    pub fn new(foreground: impl Into<String>, background: Option<String>) -> Self {
        Self {
            foreground: foreground.into(),
            background,
        }
    }
}

/// One grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Displayed character
    pub ch: char,
    /// Colors; `None` for cells no section painted
    pub colors: Option<CellColors>,
}

impl Cell {
    /// An unpainted blank cell.
    pub const BLANK: Cell = Cell {
        ch: ' ',
        colors: None,
    };

    /// A painted cell.
    pub fn painted(ch: char, colors: CellColors) -> Self {
        Self {
            ch,
            colors: Some(colors),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Fixed-size grid of cells stored contiguously, `index = row * width + column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl CellGrid {
    /// Create a grid of unpainted blanks.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Cell::BLANK; width * height],
            width,
            height,
        }
    }

    /// Width in columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.height && column < self.width).then(|| row * self.width + column)
    }

    /// Cell at (`row`, `column`).
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.index_of(row, column).map(|i| &self.cells[i])
    }

    /// Overwrite a cell. Out-of-grid writes are ignored and return `false`.
    pub fn set(&mut self, row: usize, column: usize, cell: Cell) -> bool {
        match self.index_of(row, column) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Cells of one row.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        (row < self.height).then(|| &self.cells[row * self.width..(row + 1) * self.width])
    }

    fn row_mut(&mut self, row: usize) -> Option<&mut [Cell]> {
        if row >= self.height {
            return None;
        }
        let width = self.width;
        Some(&mut self.cells[row * width..(row + 1) * width])
    }

    /// Characters of one row as a string.
    pub fn row_text(&self, row: usize) -> String {
        self.row(row)
            .map(|cells| cells.iter().map(|c| c.ch).collect())
            .unwrap_or_default()
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Shift a row one cell right; `fill` enters at column 0, the last cell drops.
    pub fn shift_row_right(&mut self, row: usize, fill: Cell) {
        if let Some(cells) = self.row_mut(row).filter(|c| !c.is_empty()) {
            cells.rotate_right(1);
            cells[0] = fill;
        }
    }

    /// Shift a row one cell left; `fill` enters at the last column, column 0 drops.
    pub fn shift_row_left(&mut self, row: usize, fill: Cell) {
        if let Some(cells) = self.row_mut(row).filter(|c| !c.is_empty()) {
            cells.rotate_left(1);
            let last = cells.len() - 1;
            cells[last] = fill;
        }
    }
}
