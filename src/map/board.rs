//! The finished board: coordinate lookup, rooms and starting positions.

use std::fmt;

use glam::IVec2;
use tracing::debug;

use crate::constants::VOID_COORDINATE;
use crate::error::MapError;
use crate::map::graph::{Graph, NodeId, Tile};
use crate::map::layout::Dimensions;
use crate::map::room::Room;
use crate::search::Pathfinder;

/// A registered starting position and its ordering priority (lower goes first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartingTile {
    pub tile: NodeId,
    pub priority: u8,
}

/// The board graph built from a tile layout and a door table.
///
/// Once built, the structure only changes through [`BoardMapping::add_shortcut`], which is
/// meant to run during setup. Everything else is read-only, so a shared reference can be
/// searched from as many places at once as the caller likes.
#[derive(Debug, Clone)]
pub struct BoardMapping {
    pub(super) dimensions: Dimensions,
    pub(super) graph: Graph,
    /// Row-major grid of node ids; non-playable and room cells hold [`Graph::VOID`].
    pub(super) grid: Vec<NodeId>,
    /// Room nodes, indexed by 0-based room id.
    pub(super) rooms: Vec<NodeId>,
    /// Starting candidates, sorted by priority then registration order.
    pub(super) starting_tiles: Vec<StartingTile>,
}

impl BoardMapping {
    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// A stateless searcher over this board's graph.
    pub fn pathfinder(&self) -> Pathfinder<'_> {
        Pathfinder::new(&self.graph)
    }

    /// Returns the tile with the given node id.
    pub fn tile(&self, id: NodeId) -> Result<&Tile, MapError> {
        self.graph.get(id).ok_or(MapError::NodeNotFound(id))
    }

    /// Tiles adjacent to `id`, in neighbour order. Unknown ids have none.
    pub fn adjacent_tiles(&self, id: NodeId) -> impl Iterator<Item = &Tile> {
        self.graph.neighbors(id).iter().filter_map(|&neighbor| self.graph.get(neighbor))
    }

    /// Looks up the tile or room at a coordinate.
    ///
    /// In-bounds coordinates resolve to the room that claims the cell, if any, and to the grid
    /// cell otherwise. `(-1, id)` addresses the room with that id. Finding the owning room is a
    /// linear scan over every room's cells; boards are small and static, so this is fine.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::NoSuchRoom`] for `(-1, id)` with an unknown id and
    /// [`MapError::NoSuchTile`] for any other out-of-range coordinate. After construction
    /// either one means the caller has a bug.
    pub fn get_tile(&self, x: i32, y: i32) -> Result<&Tile, MapError> {
        self.node_at(x, y).and_then(|id| self.tile(id))
    }

    /// Like [`BoardMapping::get_tile`], returning the node id.
    pub fn node_at(&self, x: i32, y: i32) -> Result<NodeId, MapError> {
        if self.dimensions.contains(x, y) {
            let position = IVec2::new(x, y);
            let owner = self.rooms.iter().copied().find(|&node| {
                self.graph
                    .get(node)
                    .and_then(Tile::as_room)
                    .is_some_and(|room| room.contains(position))
            });

            Ok(owner.unwrap_or(self.grid[y as usize * self.dimensions.width + x as usize]))
        } else if x == VOID_COORDINATE && y >= 0 {
            self.room_node(y as usize)
        } else {
            Err(MapError::NoSuchTile {
                x: x.into(),
                y: y.into(),
            })
        }
    }

    /// Returns the room with the given 0-based id, as a graph tile.
    pub fn get_room(&self, id: usize) -> Result<&Tile, MapError> {
        self.room_node(id).and_then(|node| self.tile(node))
    }

    /// Returns the room data for the given 0-based id.
    pub fn room(&self, id: usize) -> Result<&Room, MapError> {
        self.get_room(id)?.as_room().ok_or(MapError::NoSuchRoom(id))
    }

    pub fn room_node(&self, id: usize) -> Result<NodeId, MapError> {
        self.rooms.get(id).copied().ok_or(MapError::NoSuchRoom(id))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Iterates over all rooms in id order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter_map(|&node| self.graph.get(node).and_then(Tile::as_room))
    }

    /// One row of the grid; always exactly `width` entries long.
    pub fn grid_row(&self, y: usize) -> Option<&[NodeId]> {
        let width = self.dimensions.width;
        (y < self.dimensions.height).then(|| &self.grid[y * width..(y + 1) * width])
    }

    /// Starting positions in play order: ascending priority, ties in layout order.
    pub fn starting_tiles(&self) -> Vec<&Tile> {
        self.starting_tiles.iter().filter_map(|start| self.graph.get(start.tile)).collect()
    }

    /// Starting positions together with their priorities, in play order.
    pub fn starting_candidates(&self) -> &[StartingTile] {
        &self.starting_tiles
    }

    /// Adds a direct room-to-room edge, bypassing doors.
    ///
    /// Repeating a shortcut is harmless; the edge is not duplicated.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::NoSuchRoom`] for an unknown id and [`MapError::SelfLoop`] when
    /// both ids name the same room.
    pub fn add_shortcut(&mut self, a: usize, b: usize) -> Result<(), MapError> {
        let from = self.room_node(a)?;
        let to = self.room_node(b)?;
        self.graph.connect(from, to)?;
        debug!(from = a, to = b, "Added shortcut");
        Ok(())
    }
}

/// Renders the grid one row per line: room cells as their 1-based id, floor as `.`, special
/// tiles as `I` and non-playable cells as `#`.
impl fmt::Display for BoardMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.dimensions.height as i32 {
            for x in 0..self.dimensions.width as i32 {
                if x > 0 {
                    f.write_str(" ")?;
                }
                match self.get_tile(x, y) {
                    Ok(tile) if tile.is_room() => write!(f, "{}", tile.coordinates().y + 1)?,
                    Ok(tile) if tile.is_special() => f.write_str("I")?,
                    Ok(tile) if tile.is_playable() => f.write_str(".")?,
                    _ => f.write_str("#")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
