// Domain layer - board model and transition rule
pub mod domain;

// Application layer - simulation driver, configuration, layout
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Board, BoardError, Cell, Pattern, presets};
pub use application::{BoardLayout, GridPreset, RunState, Simulation, SimulationConfig};
