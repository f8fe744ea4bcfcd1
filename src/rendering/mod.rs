use macroquad::prelude::*;

use crate::application::{BoardLayout, Simulation};
use crate::domain::Board;
use crate::ui::{Button, TOP_BAR_HEIGHT};

const ALIVE_COLOR: Color = Color::new(0.0, 1.0, 0.59, 1.0);
const DEAD_COLOR: Color = Color::new(0.06, 0.06, 0.06, 1.0);
const GRID_LINE_COLOR: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw every cell of the board. The whole grid is redrawn each frame.
pub fn draw_board(board: &Board, layout: &BoardLayout) {
    let size = layout.cell_size;
    let (width, height) = layout.size();
    draw_rectangle(layout.origin_x, layout.origin_y, width, height, DEAD_COLOR);

    for (row, col, cell) in board.iter_cells() {
        let (x, y) = layout.cell_to_screen(row, col);
        if cell.is_alive() {
            draw_rectangle(x, y, size, size, ALIVE_COLOR);
        }
        draw_rectangle_lines(x, y, size, size, 1.0, GRID_LINE_COLOR);
    }
}

/// Draw the top bar: buttons plus generation and status readout
pub fn draw_controls(sim: &Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_rectangle(0.0, 0.0, screen_width(), TOP_BAR_HEIGHT, Color::from_rgba(30, 30, 30, 255));
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let x = buttons.last().map_or(10.0, |btn| btn.right() + 20.0);

    let (status, status_color) = if sim.is_running() {
        ("Running", Color::from_rgba(0, 255, 0, 255))
    } else {
        ("Stopped", Color::from_rgba(255, 165, 0, 255))
    };

    let board = sim.board();
    draw_text(&format!("Generation: {}", sim.generation()), x, 25.0, 18.0, WHITE);
    draw_text(
        &format!("Population: {}  |  {}", board.population(), sim.preset().name()),
        x,
        45.0,
        16.0,
        GRAY,
    );
    draw_text(status, x + 190.0, 25.0, 18.0, status_color);

    if let Some((name, description)) = sim.last_pattern() {
        draw_text(&format!("{}: {}", name, description), x + 290.0, 25.0, 16.0, GRAY);
    }
}
