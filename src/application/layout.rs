/// BoardLayout places the board on screen and maps between pixels and cells
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    pub rows: usize,
    pub cols: usize,
}

impl BoardLayout {
    pub fn new(origin_x: f32, origin_y: f32, cell_size: f32, rows: usize, cols: usize) -> Self {
        Self { origin_x, origin_y, cell_size, rows, cols }
    }

    /// Centre the board horizontally in a window, below a top bar
    pub fn centered(screen_width: f32, top: f32, cell_size: f32, rows: usize, cols: usize) -> Self {
        let origin_x = ((screen_width - cols as f32 * cell_size) / 2.0).max(0.0);
        Self::new(origin_x, top, cell_size, rows, cols)
    }

    /// Board size in pixels
    pub fn size(&self) -> (f32, f32) {
        (self.cols as f32 * self.cell_size, self.rows as f32 * self.cell_size)
    }

    /// Convert screen coordinates to (row, col), None when off the board
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        let x = screen_x - self.origin_x;
        let y = screen_y - self.origin_y;
        if x < 0.0 || y < 0.0 {
            return None;
        }

        let col = (x / self.cell_size) as usize;
        let row = (y / self.cell_size) as usize;
        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Top-left pixel of a cell
    pub fn cell_to_screen(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.cell_size,
            self.origin_y + row as f32 * self.cell_size,
        )
    }
}
