use super::{Cell, PieceColor};

/// Direction vectors scanned for a winning run: right, down, down-right, down-left.
const MATCH_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Run length that wins the game.
const MATCH_RUN: usize = 3;

/// Board manages the fixed-size 2D grid of placed pieces.
/// Dimensions are set at construction and never change; cells are only
/// written by placement and only emptied by a full reset.
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new board with all cells empty
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Get board dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the occupant of a cell; `None` when empty or out of bounds
    pub fn get(&self, row: usize, col: usize) -> Cell {
        (row < self.rows && col < self.cols)
            .then(|| self.cells[self.index(row, col)])
            .flatten()
    }

    /// Write a piece into a cell (with bounds checking)
    pub fn set(&mut self, row: usize, col: usize, color: PieceColor) {
        if row < self.rows && col < self.cols {
            let idx = self.index(row, col);
            self.cells[idx] = Some(color);
        }
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// True iff every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Scan for a run of [`MATCH_RUN`] identical pieces along any direction.
    /// Runs extend forward only, so a run is detected from its
    /// topmost/leftmost member; longer runs win through any 3-subrun.
    pub fn has_match(&self) -> bool {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let Some(color) = self.get(row, col) else {
                    continue;
                };

                for (dr, dc) in MATCH_DIRECTIONS {
                    let mut count = 1;
                    for step in 1..MATCH_RUN as isize {
                        let r = row as isize + dr * step;
                        let c = col as isize + dc * step;
                        if r < 0 || r >= self.rows as isize || c < 0 || c >= self.cols as isize {
                            break;
                        }
                        if self.get(r as usize, c as usize) == Some(color) {
                            count += 1;
                        } else {
                            break;
                        }
                    }
                    if count >= MATCH_RUN {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.get(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: PieceColor = PieceColor::Blue;
    const PINK: PieceColor = PieceColor::Pink;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 6);
        assert!(!board.is_full());
        assert!(board.iter_cells().all(|(_, _, cell)| cell.is_none()));
    }

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let mut board = Board::new(6, 6);
        board.set(0, 0, BLUE);
        assert_eq!(board.get(6, 0), None);
        assert_eq!(board.get(0, 6), None);
    }

    #[test]
    fn test_is_full_only_when_every_cell_occupied() {
        let mut board = Board::new(2, 2);
        board.set(0, 0, BLUE);
        board.set(0, 1, PINK);
        board.set(1, 0, PINK);
        assert!(!board.is_full());

        board.set(1, 1, BLUE);
        assert!(board.is_full());
    }

    #[test]
    fn test_match_in_row() {
        let mut board = Board::new(6, 6);
        board.set(0, 0, BLUE);
        board.set(0, 1, BLUE);
        assert!(!board.has_match());

        board.set(0, 2, BLUE);
        assert!(board.has_match());
    }

    #[test]
    fn test_match_in_column() {
        let mut board = Board::new(6, 6);
        board.set(1, 3, PINK);
        board.set(2, 3, PINK);
        board.set(3, 3, PINK);
        assert!(board.has_match());
    }

    #[test]
    fn test_match_down_right_diagonal() {
        let mut board = Board::new(6, 6);
        board.set(2, 2, BLUE);
        board.set(3, 3, BLUE);
        board.set(4, 4, BLUE);
        assert!(board.has_match());
    }

    #[test]
    fn test_match_down_left_diagonal() {
        let mut board = Board::new(6, 6);
        board.set(0, 2, PINK);
        board.set(1, 1, PINK);
        board.set(2, 0, PINK);
        assert!(board.has_match());
    }

    #[test]
    fn test_mixed_colors_do_not_match() {
        let mut board = Board::new(6, 6);
        board.set(0, 0, BLUE);
        board.set(0, 1, PINK);
        board.set(0, 2, BLUE);
        board.set(1, 0, PINK);
        board.set(2, 0, BLUE);
        assert!(!board.has_match());
    }

    #[test]
    fn test_run_near_edge_does_not_scan_out_of_bounds() {
        let mut board = Board::new(6, 6);
        board.set(5, 4, BLUE);
        board.set(5, 5, BLUE);
        assert!(!board.has_match());
    }

    #[test]
    fn test_clear_empties_the_board() {
        let mut board = Board::new(6, 6);
        board.set(0, 0, BLUE);
        board.set(5, 5, PINK);
        board.clear();
        assert!(board.iter_cells().all(|(_, _, cell)| cell.is_none()));
    }
}
