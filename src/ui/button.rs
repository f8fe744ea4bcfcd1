use macroquad::prelude::*;

/// Clickable control in the top bar
#[derive(Clone)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    /// Highlighted buttons (Pause while running) use the accent colour
    active: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
            active: false,
        }
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// X coordinate of the right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Check if a point lies on the button
    pub fn contains(&self, point: (f32, f32)) -> bool {
        point.0 >= self.x
            && point.0 <= self.x + self.width
            && point.1 >= self.y
            && point.1 <= self.y + self.height
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = match (self.active, self.contains(mouse_pos)) {
            (true, _) => Color::from_rgba(46, 160, 67, 255),
            (false, true) => Color::from_rgba(100, 149, 237, 255),
            (false, false) => Color::from_rgba(70, 130, 180, 255),
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, WHITE);

        let text_size = measure_text(&self.label, None, 20, 1.0);
        draw_text(
            &self.label,
            self.x + (self.width - text_size.width) / 2.0,
            self.y + (self.height + text_size.height) / 2.0,
            20.0,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
