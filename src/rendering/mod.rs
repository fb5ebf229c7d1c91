use macroquad::prelude::*;

use crate::application::{GameState, GameStatus, Projection};
use crate::assets::{AssetStore, TILE_KEY};
use crate::ui::{PANEL_HEIGHT, PANEL_WIDTH, PANEL_X, PANEL_Y, TILE_HEIGHT, TILE_WIDTH};

/// Window clear color
pub fn background() -> Color {
    Color::from_hex(0x0f172a)
}

/// Draw a sprite scaled to one diamond tile footprint, centered on (x, y)
fn draw_sprite(texture: &Texture2D, x: f32, y: f32) {
    draw_texture_ex(
        texture,
        x - TILE_WIDTH / 2.0,
        y - TILE_HEIGHT / 2.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(TILE_WIDTH, TILE_HEIGHT)),
            ..Default::default()
        },
    );
}

/// Draw every tile, overlaying the occupant's sprite where a piece sits
pub fn draw_board(state: &GameState, assets: &AssetStore, projection: &Projection) {
    for (row, col, cell) in state.board.iter_cells() {
        let (x, y) = projection.grid_to_screen(row, col);
        draw_sprite(assets.texture(TILE_KEY), x, y);
        if let Some(color) = cell {
            draw_sprite(assets.texture(color.id()), x, y);
        }
    }
}

/// Stroke a diamond outline on the hovered cell while the game is live
pub fn draw_hover_highlight(state: &GameState, projection: &Projection) {
    if state.status != GameStatus::Playing {
        return;
    }
    let Some((row, col)) = state.hover_cell else {
        return;
    };

    let (x, y) = projection.grid_to_screen(row, col);
    let hw = TILE_WIDTH / 2.0;
    let hh = TILE_HEIGHT / 2.0;
    let outline = Color::from_rgba(250, 204, 21, 230);

    draw_line(x, y - hh, x + hw, y, 2.0, outline);
    draw_line(x + hw, y, x, y + hh, 2.0, outline);
    draw_line(x, y + hh, x - hw, y, 2.0, outline);
    draw_line(x - hw, y, x, y - hh, 2.0, outline);
}

/// Draw the fixed status panel: next piece label and game phase
pub fn draw_status_panel(state: &GameState) {
    draw_rectangle(
        PANEL_X,
        PANEL_Y,
        PANEL_WIDTH,
        PANEL_HEIGHT,
        Color::from_rgba(15, 23, 42, 166),
    );

    let text_color = Color::from_rgba(226, 232, 240, 255);
    draw_text(
        &format!("Next: {}", state.next_color().label()),
        PANEL_X + 12.0,
        PANEL_Y + 30.0,
        18.0,
        text_color,
    );
    draw_text(
        &format!("Status: {}", state.status.label()),
        PANEL_X + 12.0,
        PANEL_Y + 56.0,
        18.0,
        text_color,
    );
}

/// Centered message for the fatal asset-failure screen
pub fn draw_load_error(message: &str) {
    let font_size = 24.0;
    let dims = measure_text(message, None, font_size as u16, 1.0);
    draw_text(
        message,
        (screen_width() - dims.width) / 2.0,
        screen_height() / 2.0,
        font_size,
        Color::from_rgba(248, 113, 113, 255),
    );
}
