use macroquad::prelude::*;

/// Dropdown selector for pattern names. Clicking an item fires a
/// selection event even when the same item is picked again, so a
/// pattern can be re-seeded.
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    row_height: f32,
    label: String,
    items: Vec<String>,
    selected: Option<usize>,
    is_open: bool,
}

const ITEM_COLOR: Color = Color::new(0.18, 0.18, 0.18, 1.0);
const ITEM_HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);
const HEAD_COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            row_height: 30.0,
            label: label.into(),
            items,
            selected: None,
            is_open: false,
        }
    }

    /// Name of the currently selected item, if any
    pub fn selected_item(&self) -> Option<&str> {
        self.selected.map(|i| self.items[i].as_str())
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Handle interaction. Returns true when an item was clicked this
    /// frame (a selection event, even for the already-selected item).
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }

        if self.is_hovered_head(mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }

        if self.is_open {
            for i in 0..self.items.len() {
                if self.is_hovered_item(mouse_pos, i) {
                    self.selected = Some(i);
                    self.is_open = false;
                    return true;
                }
            }
            // Clicked elsewhere: close without selecting
            self.is_open = false;
        }

        false
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, GRAY);

        let head_color = if self.is_hovered_head(mouse_pos) {
            ITEM_HOVER_COLOR
        } else {
            HEAD_COLOR
        };
        draw_rectangle(self.x, self.y, self.width, self.row_height, head_color);
        draw_rectangle_lines(self.x, self.y, self.width, self.row_height, 2.0, WHITE);

        let head_text = self.selected_item().unwrap_or("choose...");
        draw_text(head_text, self.x + 5.0, self.y + 21.0, 16.0, WHITE);
        draw_text("v", self.x + self.width - 18.0, self.y + 21.0, 14.0, WHITE);

        if self.is_open {
            for (i, item) in self.items.iter().enumerate() {
                let item_y = self.item_y(i);
                let color = if self.is_hovered_item(mouse_pos, i) {
                    ITEM_HOVER_COLOR
                } else {
                    ITEM_COLOR
                };
                draw_rectangle(self.x, item_y, self.width, self.row_height, color);
                draw_text(item, self.x + 5.0, item_y + 21.0, 16.0, WHITE);
            }
            let menu_height = self.items.len() as f32 * self.row_height;
            draw_rectangle_lines(
                self.x,
                self.y + self.row_height,
                self.width,
                menu_height,
                2.0,
                WHITE,
            );
        }
    }

    fn item_y(&self, index: usize) -> f32 {
        self.y + self.row_height + index as f32 * self.row_height
    }

    fn is_hovered_head(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.row_height
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        let item_y = self.item_y(index);
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= item_y
            && mouse_pos.1 <= item_y + self.row_height
    }
}
