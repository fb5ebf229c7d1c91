use macroquad::prelude::*;

use crate::application::{GameState, GameStatus, Projection};

/// Poll the pointer: refresh the hover cell and resolve placement clicks.
/// Leaving the play surface clears the hover highlight.
pub fn process_pointer(state: &mut GameState, projection: &Projection) {
    let (x, y) = mouse_position();
    let (rows, cols) = state.board.dimensions();

    let on_surface = x >= 0.0 && y >= 0.0 && x <= screen_width() && y <= screen_height();
    state.hover_cell = on_surface
        .then(|| projection.screen_to_cell(x, y, rows, cols))
        .flatten();

    if is_mouse_button_pressed(MouseButton::Left) {
        if let Some((row, col)) = projection.screen_to_cell(x, y, rows, cols) {
            let before = state.status;
            state.place(row, col);
            if before == GameStatus::Playing {
                match state.status {
                    GameStatus::Won => info!("three in a row at ({}, {}) - game won", row, col),
                    GameStatus::Lost => info!("board full with no match - game lost"),
                    GameStatus::Playing => {}
                }
            }
        }
    }
}

/// Keyboard: R resets the round; the digit keys force the next piece
/// (a testing affordance with a fixed mapping).
pub fn process_keyboard(state: &mut GameState) {
    if is_key_pressed(KeyCode::R) {
        state.reset();
        info!("game reset");
    }

    const OVERRIDES: [(KeyCode, usize); 3] = [
        (KeyCode::Key1, 0),
        (KeyCode::Key2, 1),
        (KeyCode::Key3, 2),
    ];

    for (key, index) in OVERRIDES {
        if is_key_pressed(key) {
            state.set_next_piece(index);
        }
    }
}
