//! Centralized error types for board construction and lookup.
//!
//! Every construction entry point returns [`BoardResult`]. Any error raised while
//! building a board is fatal to that build; no partially wired board is ever handed out.

use std::io;
use std::path::PathBuf;

/// Main error type for the board crate.
///
/// This is the error returned by the public construction APIs. It wraps the more
/// specific [`ParseError`] and [`MapError`] types so callers can match on either level.
#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    #[error("Descriptor unavailable: {}: {source}", path.display())]
    DescriptorUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration file unavailable: {}: {source}", path.display())]
    ConfigUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Descriptor parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
}

/// Errors raised while interpreting descriptor tokens.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed cell token {token:?} at ({x}, {y}); expected -1, 0, I, S, Sn (0..=99) or a room id")]
    MalformedCellToken { token: String, x: usize, y: usize },

    #[error("Malformed door on line {line}: {reason}")]
    MalformedDoor { line: usize, reason: String },

    #[error("Invalid door direction {label:?} on line {line}; expected one of U, D, L, R")]
    InvalidDirection { line: usize, label: String },
}

/// Errors related to the structure of the board graph.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("Tile layout contains no playable cells")]
    EmptyBoard,

    #[error("Room id {max} was found, but room id {missing} is missing")]
    MissingRoom { max: usize, missing: usize },

    #[error("No room with index {0}")]
    NoSuchRoom(usize),

    #[error("No tile at ({x}, {y})")]
    NoSuchTile { x: i64, y: i64 },

    #[error("Door slot ({x}, {y}) is not part of room {room}")]
    DetachedDoor { room: usize, x: i32, y: i32 },

    #[error("Node {0} cannot be adjacent to itself")]
    SelfLoop(usize),

    #[error("Node not found in graph: {0}")]
    NodeNotFound(usize),
}

/// Reasons a proposed move is not legal on the board.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Route of {length} steps exceeds the {allowed} allowed")]
    TooLong { length: usize, allowed: usize },

    #[error("Node {to} is not adjacent to node {from}")]
    NotAdjacent { from: usize, to: usize },

    #[error("Node {0} is occupied")]
    Occupied(usize),

    #[error("Route passes through room node {0} before its last step")]
    ThroughRoom(usize),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
