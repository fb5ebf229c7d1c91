use crate::domain::{Board, PieceColor};
use rand::Rng;

/// Game phase. `Won` and `Lost` are terminal until an explicit reset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Human-readable status line for the panel
    pub const fn label(self) -> &'static str {
        match self {
            GameStatus::Playing => "Playing...",
            GameStatus::Won => "You won!",
            GameStatus::Lost => "Board full - you lost",
        }
    }
}

/// GameState owns the board and all round state.
/// Mutated only from input handling; the renderer just reads it.
pub struct GameState {
    pub board: Board,
    pub status: GameStatus,
    pub hover_cell: Option<(usize, usize)>,
    pub next_piece: usize,
}

impl GameState {
    /// Create a fresh game with the given board dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut state = Self {
            board: Board::new(rows, cols),
            status: GameStatus::Playing,
            hover_cell: None,
            next_piece: 0,
        };
        state.redraw_next_piece();
        state
    }

    /// Restart the round: empty board, cleared hover, fresh random piece
    pub fn reset(&mut self) {
        self.board.clear();
        self.hover_cell = None;
        self.status = GameStatus::Playing;
        self.redraw_next_piece();
    }

    /// The color that will be placed on the next valid click
    pub fn next_color(&self) -> PieceColor {
        PieceColor::ALL[self.next_piece]
    }

    /// Direct next-piece override (testing affordance behind the digit keys).
    /// Out-of-range indices are ignored.
    pub fn set_next_piece(&mut self, index: usize) {
        if index < PieceColor::ALL.len() {
            self.next_piece = index;
        }
    }

    /// Place the next piece at (row, col) and evaluate game end.
    /// Clicks on occupied cells, out-of-bounds cells, or after the game has
    /// ended are ignored without any state change.
    pub fn place(&mut self, row: usize, col: usize) {
        if self.status != GameStatus::Playing {
            return;
        }
        let (rows, cols) = self.board.dimensions();
        if row >= rows || col >= cols || self.board.get(row, col).is_some() {
            return;
        }

        self.board.set(row, col, self.next_color());

        if self.board.has_match() {
            self.status = GameStatus::Won;
        } else if self.board.is_full() {
            self.status = GameStatus::Lost;
        } else {
            self.redraw_next_piece();
        }
    }

    fn redraw_next_piece(&mut self) {
        self.next_piece = rand::rng().random_range(0..PieceColor::ALL.len());
    }
}
