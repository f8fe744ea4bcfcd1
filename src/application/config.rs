use std::time::Duration;

/// Windows wider than this use the large layout
pub const LARGE_LAYOUT_MIN_WIDTH: f32 = 769.0;

/// Board size presets offered by the window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GridPreset {
    /// 50x50 cells, 15px each
    #[default]
    Large,
    /// 20x20 cells, 20px each
    Small,
}

impl GridPreset {
    pub const fn rows(self) -> usize {
        match self {
            GridPreset::Large => 50,
            GridPreset::Small => 20,
        }
    }

    pub const fn cols(self) -> usize {
        match self {
            GridPreset::Large => 50,
            GridPreset::Small => 20,
        }
    }

    /// Edge length of one cell in pixels
    pub const fn cell_size(self) -> f32 {
        match self {
            GridPreset::Large => 15.0,
            GridPreset::Small => 20.0,
        }
    }

    /// Pick the layout for a window of the given width
    pub fn for_viewport_width(width: f32) -> Self {
        if width > LARGE_LAYOUT_MIN_WIDTH {
            GridPreset::Large
        } else {
            GridPreset::Small
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GridPreset::Large => "50×50",
            GridPreset::Small => "20×20",
        }
    }
}

/// Tunables for the simulation driver
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub preset: GridPreset,
    /// Wall-clock time between generations while running
    pub step_interval: Duration,
    /// Probability of a cell starting alive when randomizing
    pub random_density: f64,
    /// Step with the rayon pool instead of on the calling thread
    pub parallel: bool,
    /// Stop running once a generation leaves the board unchanged
    pub halt_when_stable: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            preset: GridPreset::default(),
            step_interval: Duration::from_millis(100),
            random_density: 0.3,
            parallel: false,
            halt_when_stable: false,
        }
    }
}

impl SimulationConfig {
    /// Same config with another preset (builder pattern)
    pub fn with_preset(mut self, preset: GridPreset) -> Self {
        self.preset = preset;
        self
    }

    pub fn with_halt_when_stable(mut self, halt: bool) -> Self {
        self.halt_when_stable = halt;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
