use std::time::Duration;

use log::{error, info};
use macroquad::prelude::*;
use toroidal_life::{
    GridPreset, Simulation, SimulationConfig,
    input::{self, PointerState},
    rendering, ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Toroidal Life".to_owned(),
        window_width: 1000,
        window_height: 880,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let preset = GridPreset::for_viewport_width(screen_width());
    let mut sim = match Simulation::new(SimulationConfig::default().with_preset(preset)) {
        Ok(sim) => sim,
        Err(err) => {
            error!("could not create board: {}", err);
            return;
        }
    };
    info!("starting with {} board", preset.name());

    let mut pointer = PointerState::default();
    let mut rng = ::rand::rng();

    loop {
        // Crossing the breakpoint swaps in a freshly sized board
        let wanted = GridPreset::for_viewport_width(screen_width());
        if wanted != sim.preset() {
            if let Err(err) = sim.reconfigure(wanted) {
                error!("could not reconfigure board: {}", err);
            }
        }

        let mouse_pos = mouse_position();
        let layout = ui::board_layout(screen_width(), sim.preset());
        let buttons = ui::create_buttons(sim.is_running());

        input::process_button_clicks(&mut sim, &buttons, mouse_pos, &mut rng);
        input::handle_pointer(&mut sim, &mut pointer, &layout, mouse_pos);
        input::process_keyboard_input(&mut sim, &mut rng);

        sim.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_board(sim.board(), &layout);
        rendering::draw_controls(&sim, &ui::create_buttons(sim.is_running()), mouse_pos);

        next_frame().await;
    }
}
