mod button;

pub use button::Button;

use crate::application::{BoardLayout, GridPreset};

pub const TOP_BAR_HEIGHT: f32 = 60.0;
pub const BUTTON_WIDTH: f32 = 110.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_GAP: f32 = 10.0;

/// Indices into `create_buttons`
pub const PLAY_PAUSE: usize = 0;
pub const CLEAR: usize = 1;
pub const RANDOM: usize = 2;

/// Lay out the board for a window of the given width
pub fn board_layout(screen_width: f32, preset: GridPreset) -> BoardLayout {
    BoardLayout::centered(
        screen_width,
        TOP_BAR_HEIGHT,
        preset.cell_size(),
        preset.rows(),
        preset.cols(),
    )
}

/// Create the top-bar buttons; the first one reflects the run state
pub fn create_buttons(is_running: bool) -> Vec<Button> {
    let y = (TOP_BAR_HEIGHT - BUTTON_HEIGHT) / 2.0;
    let x = |idx: usize| BUTTON_GAP + idx as f32 * (BUTTON_WIDTH + BUTTON_GAP);
    let play_label = if is_running { "Pause" } else { "Play" };

    vec![
        Button::new(x(PLAY_PAUSE), y, BUTTON_WIDTH, BUTTON_HEIGHT, play_label)
            .with_active(is_running),
        Button::new(x(CLEAR), y, BUTTON_WIDTH, BUTTON_HEIGHT, "Clear"),
        Button::new(x(RANDOM), y, BUTTON_WIDTH, BUTTON_HEIGHT, "Random"),
    ]
}
