use log::{error, info};
use macroquad::prelude::*;

use life_canvas::{
    application::DEFAULT_RATE,
    input, rendering,
    rendering::SurfaceView,
    ui::{self, Dropdown, Slider, MAX_TARGET_RATE, MIN_TARGET_RATE, PANEL_WIDTH},
    Controller, PatternCatalog, Universe,
};

const GRID_WIDTH: usize = 64;
const GRID_HEIGHT: usize = 64;

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let catalog = PatternCatalog::load().unwrap_or_else(|err| {
        error!("failed to parse the embedded pattern catalog: {err}");
        PatternCatalog::empty()
    });
    let pattern_items: Vec<String> = catalog.names().map(str::to_owned).collect();
    info!("loaded {} patterns", pattern_items.len());

    // Auto-play from a random soup
    let engine = Universe::randomized(GRID_WIDTH, GRID_HEIGHT);
    let mut controller = Controller::new(engine, catalog, get_time());

    let px = ui::panel_x();
    let mut pattern_dropdown = Dropdown::new(px, 30.0, PANEL_WIDTH, "Pattern", pattern_items);
    let mut rate_slider = Slider::new(
        px,
        110.0,
        PANEL_WIDTH,
        "Target rate",
        MIN_TARGET_RATE,
        MAX_TARGET_RATE,
        DEFAULT_RATE,
    );

    loop {
        let now = get_time();
        let mouse_pos = mouse_position();

        // Keep the panel anchored to the right edge on resize
        let px = ui::panel_x();
        pattern_dropdown.set_position(px, 30.0);
        rate_slider.set_position(px, 110.0);
        let buttons = ui::create_buttons(controller.playback_label());

        // User actions first, so they land before this frame's cycle
        if pattern_dropdown.update(mouse_pos) {
            if let Some(name) = pattern_dropdown.selected_item() {
                controller.select_pattern(name);
            }
        }
        if rate_slider.update(mouse_pos) {
            controller.set_target_rate(rate_slider.value());
        }
        input::process_button_clicks(&mut controller, &buttons, mouse_pos, now);
        input::process_keyboard(&mut controller, now);
        // Keyboard nudges go through the controller; reflect them back
        rate_slider.set_value(controller.scheduler().target_rate());

        let view = SurfaceView::fit(controller.engine());
        if !pattern_dropdown.is_open() {
            input::handle_grid_click(&mut controller, &view, mouse_pos);
        }

        // Tick (when due) strictly before this frame's redraw
        controller.frame(now);

        clear_background(BLACK);
        rendering::draw_frame(controller.engine(), &view);
        rendering::draw_controls(
            &controller,
            &buttons,
            &pattern_dropdown,
            &rate_slider,
            mouse_pos,
        );

        next_frame().await;
    }
}
