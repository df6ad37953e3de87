//! This module defines the board graph and provides functions for building and querying it.

pub mod board;
pub mod builder;
pub mod direction;
pub mod graph;
pub mod layout;
pub mod parser;
pub mod room;

pub use board::{BoardMapping, StartingTile};
pub use graph::{Graph, NodeId, Tile, TileKind};
pub use room::{DoorSlot, Room, RoomCard};
