pub mod config;
mod layout;
mod simulation;

pub use config::{GridPreset, SimulationConfig};
pub use layout::BoardLayout;
pub use simulation::{RunState, Simulation};
