//! Parsing of tile tokens and door rows into structured board data.

use glam::IVec2;

use crate::constants::{
    DEFAULT_START_PRIORITY, FLOOR_TOKEN, MAX_START_PRIORITY, SPECIAL_TOKEN, START_PREFIX, VOID_TOKEN,
};
use crate::error::{BoardResult, MapError, ParseError};
use crate::map::direction::Direction;

/// What a single cell of the tile layout turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellToken {
    /// Not a playable position (`""` or `-1`).
    Void,
    /// A standard floor tile (`0`).
    Floor,
    /// An intrigue tile (`I`).
    Special,
    /// A standard tile that is also a starting position (`S` or `Sn`).
    Start(u8),
    /// A floor cell of the room with this 0-based index.
    Room(usize),
}

impl CellToken {
    /// Whether the cell takes part in automatic grid adjacency.
    ///
    /// Only cells that produce a real grid tile link to their neighbours; rooms are wired
    /// through doors and shortcuts instead.
    pub fn is_linkable(self) -> bool {
        matches!(self, CellToken::Floor | CellToken::Special | CellToken::Start(_))
    }
}

/// A door read from the door descriptor. Consumed during wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Door {
    /// 0-based index of the room the door leads into.
    pub room: usize,
    /// The exterior tile the door opens onto.
    pub exit: IVec2,
    pub direction: Direction,
}

/// Parser for converting descriptor tokens into board data.
pub struct CellParser;

impl CellParser {
    /// Classifies one tile token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedCellToken`] for anything outside the cell grammar,
    /// including starting markers numbered outside `0..=99`, and [`MapError::NoSuchRoom`]
    /// for a room id above `room_count`.
    pub fn parse_cell(token: &str, x: usize, y: usize, room_count: usize) -> BoardResult<CellToken> {
        let malformed = || ParseError::MalformedCellToken {
            token: token.to_string(),
            x,
            y,
        };

        match token {
            "" | VOID_TOKEN => Ok(CellToken::Void),
            FLOOR_TOKEN => Ok(CellToken::Floor),
            SPECIAL_TOKEN => Ok(CellToken::Special),
            _ => {
                if let Some(number) = token.strip_prefix(START_PREFIX) {
                    if number.is_empty() {
                        return Ok(CellToken::Start(DEFAULT_START_PRIORITY));
                    }
                    return Self::parse_digits(number)
                        .and_then(|n| u8::try_from(n).ok())
                        .filter(|&n| n <= MAX_START_PRIORITY)
                        .map(CellToken::Start)
                        .ok_or_else(|| malformed().into());
                }

                let id = Self::parse_digits(token).ok_or_else(malformed)?;
                match id {
                    0 => Err(malformed().into()),
                    id if id > room_count => Err(MapError::NoSuchRoom(id - 1).into()),
                    id => Ok(CellToken::Room(id - 1)),
                }
            }
        }
    }

    /// Parses one door row: `room id (1-based), exit x, exit y, direction`.
    ///
    /// Rows whose first field is empty are blank and yield `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedDoor`] for short rows or non-numeric fields,
    /// [`ParseError::InvalidDirection`] for a label other than `U`, `D`, `L` or `R`,
    /// [`MapError::NoSuchRoom`] for a room id above `room_count`, and
    /// [`MapError::NoSuchTile`] for an exit coordinate no grid can hold.
    pub fn parse_door<S: AsRef<str>>(fields: &[S], line: usize, room_count: usize) -> BoardResult<Option<Door>> {
        let field = |i: usize| fields.get(i).map(|f| f.as_ref());

        match field(0) {
            None | Some("") => return Ok(None),
            Some(_) => {}
        }

        let [Some(room), Some(x), Some(y), Some(label)] = [field(0), field(1), field(2), field(3)] else {
            return Err(ParseError::MalformedDoor {
                line,
                reason: format!("expected 4 fields, found {}", fields.len()),
            }
            .into());
        };

        let number = |name: &str, value: &str| {
            Self::parse_digits(value).ok_or_else(|| ParseError::MalformedDoor {
                line,
                reason: format!("{name} {value:?} is not a non-negative integer"),
            })
        };

        let room = number("room id", room)?;
        if room == 0 {
            return Err(ParseError::MalformedDoor {
                line,
                reason: "room ids start at 1".to_string(),
            }
            .into());
        }
        if room > room_count {
            return Err(MapError::NoSuchRoom(room - 1).into());
        }

        let coordinate = |name: &str, value: &str| {
            Self::parse_signed(value).ok_or_else(|| ParseError::MalformedDoor {
                line,
                reason: format!("{name} {value:?} is not an integer"),
            })
        };

        let exit_x = coordinate("exit x", x)?;
        let exit_y = coordinate("exit y", y)?;

        let direction = Direction::from_label(label).ok_or_else(|| ParseError::InvalidDirection {
            line,
            label: label.to_string(),
        })?;

        // Coordinates beyond i32 cannot name a cell; smaller ones are checked against the grid later.
        let (Ok(exit_x_cell), Ok(exit_y_cell)) = (i32::try_from(exit_x), i32::try_from(exit_y)) else {
            return Err(MapError::NoSuchTile { x: exit_x, y: exit_y }.into());
        };

        Ok(Some(Door {
            room: room - 1,
            exit: IVec2::new(exit_x_cell, exit_y_cell),
            direction,
        }))
    }

    /// Parses an optionally negative run of ASCII digits. Magnitudes beyond `i64` saturate.
    fn parse_signed(s: &str) -> Option<i64> {
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(s.parse().unwrap_or(if s.starts_with('-') { i64::MIN } else { i64::MAX }))
    }

    /// Parses a string made only of ASCII digits. Signs are not accepted.
    fn parse_digits(s: &str) -> Option<usize> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        s.parse().ok()
    }
}
