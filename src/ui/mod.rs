mod button;
mod dropdown;
mod slider;

pub use button::Button;
pub use dropdown::Dropdown;
pub use slider::Slider;

use macroquad::prelude::{screen_height, screen_width};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Side of one cell square in logical surface pixels
pub const CELL_SIZE: f32 = 10.0;
/// Cell plus one grid line
pub const CELL_PITCH: f32 = CELL_SIZE + 1.0;

/// Target-rate bounds exposed by the rate slider
pub const MIN_TARGET_RATE: f32 = 1.0;
pub const MAX_TARGET_RATE: f32 = 60.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Logical surface size for a grid: pitch per cell plus one closing line
pub fn surface_size(width: usize, height: usize) -> (f32, f32) {
    (
        CELL_PITCH * width as f32 + 1.0,
        CELL_PITCH * height as f32 + 1.0,
    )
}

/// Create the action buttons. The first label is the play/pause
/// affordance and comes from the controller each frame, so it always
/// matches the scheduler state.
pub fn create_buttons(playback_label: &str) -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 470.0, PANEL_WIDTH, BUTTON_HEIGHT, playback_label),
        Button::new(px, 520.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset"),
        Button::new(px, 570.0, PANEL_WIDTH, BUTTON_HEIGHT, "Randomize"),
    ]
}
