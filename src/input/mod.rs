use macroquad::prelude::*;

use crate::application::Controller;
use crate::rendering::SurfaceView;
use crate::ui::{Button, MAX_TARGET_RATE, MIN_TARGET_RATE};

/// Toggle the cell under the pointer on a left click inside the
/// displayed surface. The controller clamps the mapped coordinates.
pub fn handle_grid_click(controller: &mut Controller, view: &SurfaceView, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    if !view.contains(controller.engine(), mouse_pos) {
        return;
    }

    let pointer = view.to_surface(mouse_pos);
    let geometry = view.geometry(controller.engine());
    controller.toggle_cell(pointer, geometry);
}

/// Dispatch clicks on the action buttons
pub fn process_button_clicks(
    controller: &mut Controller,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    now: f64,
) {
    for (idx, button) in buttons.iter().enumerate() {
        if !button.is_clicked(mouse_pos) {
            continue;
        }
        match idx {
            0 => controller.toggle_playback(now),
            1 => controller.reset(),
            2 => controller.randomize(),
            _ => {}
        }
    }
}

/// Keyboard shortcuts mirroring the buttons, plus rate nudges
pub fn process_keyboard(controller: &mut Controller, now: f64) {
    if is_key_pressed(KeyCode::Space) {
        controller.toggle_playback(now);
    }
    if is_key_pressed(KeyCode::C) {
        controller.reset();
    }
    if is_key_pressed(KeyCode::R) {
        controller.randomize();
    }

    let rate = controller.scheduler().target_rate();
    if is_key_pressed(KeyCode::Up) {
        controller.set_target_rate((rate + 1.0).clamp(MIN_TARGET_RATE, MAX_TARGET_RATE));
    }
    if is_key_pressed(KeyCode::Down) {
        controller.set_target_rate((rate - 1.0).clamp(MIN_TARGET_RATE, MAX_TARGET_RATE));
    }
}
