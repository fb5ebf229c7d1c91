// Domain layer - board and palette
pub mod domain;

// Application layer - game state and coordinate mapping
pub mod application;

// Infrastructure layer - assets, UI, rendering, input
pub mod assets;
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{GameState, GameStatus, Projection};
pub use assets::{AssetError, AssetStore};
pub use domain::{Board, Cell, PieceColor};
