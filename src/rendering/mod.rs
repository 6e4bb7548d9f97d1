use macroquad::prelude::*;

use crate::application::{Controller, SurfaceGeometry};
use crate::domain::Universe;
use crate::ui::{self, Button, Dropdown, Slider, CELL_PITCH, CELL_SIZE, PANEL_WIDTH};

// Palette for the grid surface
const GRID_LINE_COLOR: Color = Color::new(0.25, 0.26, 0.25, 1.0);
const DEAD_COLOR: Color = Color::new(0.68, 0.70, 0.68, 1.0);
const ALIVE_COLOR: Color = Color::new(0.25, 0.26, 0.25, 1.0);
const PANEL_COLOR: Color = Color::new(0.12, 0.12, 0.12, 1.0);

/// Placement of the fixed logical surface inside the window's grid
/// area: uniform scale, top-left anchored.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceView {
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: f32,
}

impl SurfaceView {
    /// Fit the universe's surface into the current grid area
    pub fn fit(universe: &Universe) -> Self {
        let (surface_w, surface_h) = ui::surface_size(universe.width(), universe.height());
        let scale = (ui::grid_area_width() / surface_w).min(ui::grid_area_height() / surface_h);
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            scale,
        }
    }

    /// Displayed size of the surface in window pixels
    pub fn display_size(&self, universe: &Universe) -> (f32, f32) {
        let (surface_w, surface_h) = ui::surface_size(universe.width(), universe.height());
        (surface_w * self.scale, surface_h * self.scale)
    }

    /// Whether a window position falls on the displayed surface
    pub fn contains(&self, universe: &Universe, pos: (f32, f32)) -> bool {
        let (display_w, display_h) = self.display_size(universe);
        pos.0 >= self.offset_x
            && pos.0 < self.offset_x + display_w
            && pos.1 >= self.offset_y
            && pos.1 < self.offset_y + display_h
    }

    /// Window position relative to the surface origin
    pub fn to_surface(&self, pos: (f32, f32)) -> (f32, f32) {
        (pos.0 - self.offset_x, pos.1 - self.offset_y)
    }

    /// Pointer-mapping geometry for the controller
    pub fn geometry(&self, universe: &Universe) -> SurfaceGeometry {
        let (buffer_w, buffer_h) = ui::surface_size(universe.width(), universe.height());
        let (display_w, display_h) = self.display_size(universe);
        SurfaceGeometry {
            display_width: display_w,
            display_height: display_h,
            buffer_width: buffer_w,
            buffer_height: buffer_h,
            cell_pitch: CELL_PITCH,
        }
    }
}

/// Full repaint of the grid: lines first, then every cell fill from the
/// snapshot. Stateless; O(width * height) per frame, fine for the grid
/// sizes this runs at.
pub fn draw_frame(universe: &Universe, view: &SurfaceView) {
    draw_grid_lines(universe, view);
    draw_cells(universe, view);
}

fn draw_grid_lines(universe: &Universe, view: &SurfaceView) {
    let pitch = CELL_PITCH * view.scale;
    let (display_w, display_h) = view.display_size(universe);
    let (ox, oy) = (view.offset_x, view.offset_y);

    // width + 1 vertical lines
    for i in 0..=universe.width() {
        let x = ox + i as f32 * pitch;
        draw_line(x, oy, x, oy + display_h, 1.0, GRID_LINE_COLOR);
    }
    // height + 1 horizontal lines
    for j in 0..=universe.height() {
        let y = oy + j as f32 * pitch;
        draw_line(ox, y, ox + display_w, y, 1.0, GRID_LINE_COLOR);
    }
}

fn draw_cells(universe: &Universe, view: &SurfaceView) {
    let pitch = CELL_PITCH * view.scale;
    let side = CELL_SIZE * view.scale;
    let cells = universe.cells();
    let width = universe.width();

    for row in 0..universe.height() {
        for col in 0..width {
            let color = if cells[row * width + col].is_alive() {
                ALIVE_COLOR
            } else {
                DEAD_COLOR
            };
            draw_rectangle(
                view.offset_x + col as f32 * pitch + view.scale,
                view.offset_y + row as f32 * pitch + view.scale,
                side,
                side,
                color,
            );
        }
    }
}

/// Draw the control panel: buttons, status readouts, then the rate
/// slider and pattern dropdown on top
pub fn draw_controls(
    controller: &Controller,
    buttons: &[Button],
    dropdown: &Dropdown,
    slider: &Slider,
    mouse_pos: (f32, f32),
) {
    let px = ui::panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), PANEL_COLOR);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    // Achieved rate: read-only, the value itself only moves once per cycle
    let achieved = controller.scheduler().achieved_rate();
    let labels = [
        ("Achieved:", px, 200.0, 16.0, WHITE),
        (
            &format!("{achieved:.1} gen/s"),
            px,
            220.0,
            14.0,
            Color::new(0.0, 1.0, 0.59, 1.0),
        ),
        ("Generation:", px, 250.0, 16.0, WHITE),
        (
            &format!("{}", controller.generation()),
            px,
            270.0,
            20.0,
            Color::new(0.0, 1.0, 0.59, 1.0),
        ),
        ("Status:", px, 300.0, 16.0, WHITE),
        (
            if controller.scheduler().is_playing() {
                "Running"
            } else {
                "Paused"
            },
            px,
            320.0,
            16.0,
            if controller.scheduler().is_playing() {
                GREEN
            } else {
                ORANGE
            },
        ),
        ("Keys:", px, 360.0, 14.0, WHITE),
        ("Space: Play/Pause", px, 375.0, 12.0, GRAY),
        ("C: Reset", px, 388.0, 12.0, GRAY),
        ("R: Randomize", px, 401.0, 12.0, GRAY),
        ("Up/Down: Rate", px, 414.0, 12.0, GRAY),
    ];
    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });

    slider.draw(mouse_pos);
    // Dropdown last so its open menu sits on top of everything
    dropdown.draw(mouse_pos);
}
