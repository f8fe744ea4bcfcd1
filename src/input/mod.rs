use log::warn;
use macroquad::prelude::*;
use ::rand::Rng;

use crate::application::{BoardLayout, Simulation};
use crate::domain::presets;
use crate::ui::{Button, CLEAR, PLAY_PAUSE, RANDOM};

/// A single-cell edit produced by the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellEdit {
    /// Click: flip the cell
    Toggle(usize, usize),
    /// Drag over: bring the cell to life
    Paint(usize, usize),
}

/// Tracks whether the mouse is held and which cell it last edited
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    held: bool,
    last_cell: Option<(usize, usize)>,
}

impl PointerState {
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Fold one frame of pointer input into at most one edit.
    /// Holding the button only paints after a press has been seen.
    pub fn update(
        &mut self,
        pressed: bool,
        down: bool,
        cell: Option<(usize, usize)>,
    ) -> Option<CellEdit> {
        if !pressed && !down {
            *self = Self::default();
            return None;
        }

        if pressed {
            self.held = true;
            self.last_cell = cell;
            return cell.map(|(r, c)| CellEdit::Toggle(r, c));
        }
        if !self.held || cell == self.last_cell {
            return None;
        }
        self.last_cell = cell;
        cell.map(|(r, c)| CellEdit::Paint(r, c))
    }
}

/// Apply an edit to the simulation, logging anything the board rejects
pub fn apply_edit(sim: &mut Simulation, edit: CellEdit) {
    let result = match edit {
        CellEdit::Toggle(r, c) => sim.toggle_cell(r, c).map(|_| ()),
        CellEdit::Paint(r, c) => sim.paint_cell(r, c),
    };
    if let Err(err) = result {
        warn!("edit {:?} rejected: {}", edit, err);
    }
}

/// Handle clicks and drags on the board
pub fn handle_pointer(
    sim: &mut Simulation,
    pointer: &mut PointerState,
    layout: &BoardLayout,
    mouse_pos: (f32, f32),
) {
    let cell = layout.screen_to_cell(mouse_pos.0, mouse_pos.1);
    let pressed = is_mouse_button_pressed(MouseButton::Left);
    let down = is_mouse_button_down(MouseButton::Left);

    if let Some(edit) = pointer.update(pressed, down, cell) {
        apply_edit(sim, edit);
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input<R: Rng + ?Sized>(sim: &mut Simulation, rng: &mut R) {
    type KeyAction = (KeyCode, fn(&mut Simulation));

    let actions: [KeyAction; 2] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::C, Simulation::clear),
    ];
    for (key, action) in actions {
        if is_key_pressed(key) {
            action(sim);
        }
    }

    if is_key_pressed(KeyCode::R) {
        randomize(sim, rng);
    }

    let pattern_keys = [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4, KeyCode::Key5];
    let patterns = presets::all_patterns();
    for (key, pattern) in pattern_keys.iter().zip(&patterns) {
        if !is_key_pressed(*key) {
            continue;
        }
        let (rows, cols) = sim.board().dimensions();
        let (r, c) = pattern.centered_origin(rows, cols);
        if let Err(err) = sim.place_pattern(pattern, r, c) {
            warn!("could not place {}: {}", pattern.name, err);
        }
    }
}

/// Process top-bar button clicks
pub fn process_button_clicks<R: Rng + ?Sized>(
    sim: &mut Simulation,
    buttons: &[Button],
    mouse_pos: (f32, f32),
    rng: &mut R,
) {
    let clicked = buttons.iter().position(|btn| btn.is_clicked(mouse_pos));
    match clicked {
        Some(PLAY_PAUSE) => sim.toggle_running(),
        Some(CLEAR) => sim.clear(),
        Some(RANDOM) => randomize(sim, rng),
        _ => {}
    }
}

fn randomize<R: Rng + ?Sized>(sim: &mut Simulation, rng: &mut R) {
    if let Err(err) = sim.randomize(rng) {
        warn!("randomize rejected: {}", err);
    }
}
