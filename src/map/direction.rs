use glam::IVec2;

/// The four cardinal directions a door can face.
///
/// A door label names the direction a player steps to go *from* the room *to* the
/// exterior tile. `Up` means the exterior tile sits above the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Parses a door descriptor label (`U`, `D`, `L` or `R`).
    pub fn from_label(label: &str) -> Option<Direction> {
        match label {
            "U" => Some(Direction::Up),
            "D" => Some(Direction::Down),
            "L" => Some(Direction::Left),
            "R" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the direction as a unit grid offset. `Up` is negative y.
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    /// Door artwork slot index: 1 for up, 2 for right, 3 for down, 4 for left.
    pub const fn slot_index(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
            Direction::Left => 4,
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}
