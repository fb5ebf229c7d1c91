mod game_state;
mod projection;

pub use game_state::{GameState, GameStatus};
pub use projection::Projection;
