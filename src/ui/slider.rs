use macroquad::prelude::*;

/// Horizontal slider for the target rate. The numeric readout stays
/// hidden until the user first interacts with the control; clicking the
/// track reveals it without changing the grid. This gesture is
/// deliberately separate from clicking the grid surface.
#[derive(Clone)]
pub struct Slider {
    x: f32,
    y: f32,
    width: f32,
    min: f32,
    max: f32,
    value: f32,
    label: String,
    dragging: bool,
    show_value: bool,
}

const TRACK_HEIGHT: f32 = 6.0;
const KNOB_RADIUS: f32 = 8.0;
const TRACK_COLOR: Color = Color::new(0.27, 0.27, 0.27, 1.0);
const KNOB_COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);

impl Slider {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, min: f32, max: f32, value: f32) -> Self {
        Self {
            x,
            y,
            width,
            min,
            max,
            value: value.clamp(min, max),
            label: label.into(),
            dragging: false,
            show_value: false,
        }
    }

    /// Live slider value, always within [min, max]
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Handle interaction. Returns true when the value changed this
    /// frame. Any press on the control also reveals the readout.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if is_mouse_button_pressed(MouseButton::Left) && self.is_hovered(mouse_pos) {
            self.dragging = true;
            self.show_value = true;
        }
        if !is_mouse_button_down(MouseButton::Left) {
            self.dragging = false;
        }
        if !self.dragging {
            return false;
        }

        let t = ((mouse_pos.0 - self.x) / self.width).clamp(0.0, 1.0);
        let new_value = (self.min + t * (self.max - self.min)).round();
        if (new_value - self.value).abs() > f32::EPSILON {
            self.value = new_value;
            true
        } else {
            false
        }
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 10.0, 14.0, GRAY);

        let track_y = self.y + KNOB_RADIUS - TRACK_HEIGHT / 2.0;
        draw_rectangle(self.x, track_y, self.width, TRACK_HEIGHT, TRACK_COLOR);

        let t = (self.value - self.min) / (self.max - self.min);
        let knob_x = self.x + t * self.width;
        let knob_color = if self.dragging || self.is_hovered(mouse_pos) {
            Color::new(0.39, 0.58, 0.93, 1.0)
        } else {
            KNOB_COLOR
        };
        draw_circle(knob_x, self.y + KNOB_RADIUS, KNOB_RADIUS, knob_color);

        // On-demand readout: only after the control has been touched
        if self.show_value {
            draw_text(
                &format!("{:.0} gen/s", self.value),
                self.x + self.width - 60.0,
                self.y - 10.0,
                14.0,
                WHITE,
            );
        }
    }

    fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x - KNOB_RADIUS
            && mouse_pos.0 <= self.x + self.width + KNOB_RADIUS
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + KNOB_RADIUS * 2.0
    }
}
