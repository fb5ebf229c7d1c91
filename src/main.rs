use macroquad::prelude::*;

use diamond_match::application::{GameState, Projection};
use diamond_match::{assets, input, rendering, ui};

fn window_conf() -> Conf {
    Conf {
        window_title: "Diamond Match".to_owned(),
        window_width: 640,
        window_height: 480,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // All textures must settle before the first frame; any failure is fatal
    // and the game loop never starts.
    let assets = match assets::load_all().await {
        Ok(store) => store,
        Err(err) => {
            error!("startup aborted: {}", err);
            loop {
                clear_background(rendering::background());
                rendering::draw_load_error("Could not load assets. Check the assets/ directory.");
                next_frame().await;
            }
        }
    };

    info!("assets loaded, starting game");
    let mut state = GameState::new(ui::GRID_ROWS, ui::GRID_COLS);

    loop {
        let projection = Projection::new(
            ui::origin_x(),
            ui::ORIGIN_Y,
            ui::TILE_WIDTH,
            ui::TILE_HEIGHT,
        );

        input::process_keyboard(&mut state);
        input::process_pointer(&mut state, &projection);

        clear_background(rendering::background());
        rendering::draw_board(&state, &assets, &projection);
        rendering::draw_hover_highlight(&state, &projection);
        rendering::draw_status_panel(&state);

        next_frame().await;
    }
}
