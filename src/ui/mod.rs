// UI layout constants - the grid stays horizontally centered on resize

use macroquad::prelude::screen_width;

/// Board configuration
pub const GRID_ROWS: usize = 6;
pub const GRID_COLS: usize = 6;

/// Diamond tile footprint in pixels
pub const TILE_WIDTH: f32 = 80.0;
pub const TILE_HEIGHT: f32 = 40.0;

/// Vertical anchor of the (0, 0) tile center
pub const ORIGIN_Y: f32 = 140.0;

/// Status panel placement (top-left corner)
pub const PANEL_X: f32 = 20.0;
pub const PANEL_Y: f32 = 20.0;
pub const PANEL_WIDTH: f32 = 260.0;
pub const PANEL_HEIGHT: f32 = 74.0;

/// Get the X position of the grid origin
pub fn origin_x() -> f32 {
    screen_width() / 2.0
}
