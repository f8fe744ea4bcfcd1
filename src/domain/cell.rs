/// Cell is one square of the board: either Dead or Alive.
/// The discriminants double as the numeric weight used when summing neighbours.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Numeric value of the state (0 or 1)
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Flip the state, used for click edits
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Pure function to compute the next state based on Conway's rules:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead, "alive with {} neighbors", n);
        }
    }

    #[test]
    fn test_reproduction_only_at_three() {
        for n in 0..=8 {
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(Cell::Dead.evolve(n), expected, "dead with {} neighbors", n);
        }
    }

    #[test]
    fn test_values_are_zero_and_one() {
        assert_eq!(Cell::Dead.value(), 0);
        assert_eq!(Cell::Alive.value(), 1);
        assert_eq!(Cell::default(), Cell::Dead);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(Cell::Dead.toggle(), Cell::Alive);
        assert_eq!(Cell::Dead.toggle().toggle(), Cell::Dead);
    }
}
