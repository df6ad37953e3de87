//! Board construction: tile classification, grid adjacency, doors and shortcuts.

use std::path::Path;

use glam::IVec2;
use tracing::{debug, info, trace};

use crate::config::BoardConfig;
use crate::descriptor::Descriptor;
use crate::error::{BoardResult, MapError};
use crate::map::board::{BoardMapping, StartingTile};
use crate::map::graph::{Graph, NodeId};
use crate::map::layout::{Dimensions, Layout};
use crate::map::parser::{CellParser, CellToken};
use crate::map::room::{DoorSlot, RoomRegistry};

/// Output of the classification pass.
struct ClassifiedGrid {
    grid: Vec<NodeId>,
    tokens: Vec<CellToken>,
    starting_tiles: Vec<StartingTile>,
}

impl BoardMapping {
    /// Builds a board from a tile descriptor and a door descriptor.
    ///
    /// Construction runs to completion or not at all: the first error aborts the build and no
    /// partially wired board is returned.
    ///
    /// # Errors
    ///
    /// Fails if the layout is empty, references rooms non-contiguously, contains a malformed
    /// token, or if any door names an unknown room, a non-playable exterior tile, or a slot
    /// outside its room.
    pub fn new(tiles: &Descriptor, doors: &Descriptor) -> BoardResult<BoardMapping> {
        let layout = Layout::from_descriptor(tiles)?;
        let dimensions = layout.dimensions();
        let room_count = RoomRegistry::scan(&layout)?;

        let mut graph = Graph::new();
        let rooms = RoomRegistry::allocate(room_count)
            .into_iter()
            .map(|room| graph.add_room(room))
            .collect::<Vec<_>>();

        let ClassifiedGrid {
            grid,
            tokens,
            mut starting_tiles,
        } = Self::classify(&layout, &mut graph, &rooms)?;

        Self::link_grid(&mut graph, &grid, &tokens, dimensions)?;

        // Stable, so equal priorities keep their layout order.
        starting_tiles.sort_by_key(|start| start.priority);

        let mut board = BoardMapping {
            dimensions,
            graph,
            grid,
            rooms,
            starting_tiles,
        };
        let door_count = board.wire_doors(doors)?;

        info!(
            width = dimensions.width,
            height = dimensions.height,
            rooms = room_count,
            doors = door_count,
            nodes = board.graph.node_count(),
            edges = board.graph.edge_count(),
            "Board built"
        );
        Ok(board)
    }

    /// Reads both descriptor files and builds the board.
    pub fn load(tiles_path: impl AsRef<Path>, doors_path: impl AsRef<Path>) -> BoardResult<BoardMapping> {
        let tiles = Descriptor::load(tiles_path)?;
        let doors = Descriptor::load(doors_path)?;
        Self::new(&tiles, &doors)
    }

    /// Builds the board from descriptor text already in memory.
    pub fn parse(tiles: &str, doors: &str) -> BoardResult<BoardMapping> {
        Self::new(&Descriptor::parse(tiles), &Descriptor::parse(doors))
    }

    /// Builds the board a configuration describes, shortcuts included.
    pub fn from_config(config: &BoardConfig) -> BoardResult<BoardMapping> {
        let mut board = Self::load(&config.tiles, &config.doors)?;
        for (a, b) in config.shortcuts() {
            board.add_shortcut(a, b)?;
        }

        debug!(variant = config.variant.as_ref(), "Applied board variant");
        Ok(board)
    }

    /// Turns every cell into a grid entry, registering room floor and starting candidates.
    fn classify(layout: &Layout, graph: &mut Graph, rooms: &[NodeId]) -> BoardResult<ClassifiedGrid> {
        let mut grid = Vec::with_capacity(layout.dimensions().cell_count());
        let mut tokens = Vec::with_capacity(layout.dimensions().cell_count());
        let mut starting_tiles = Vec::new();

        for (x, y, raw) in layout.iter() {
            let token = CellParser::parse_cell(raw, x, y, rooms.len())?;
            let position = IVec2::new(x as i32, y as i32);

            let node = match token {
                CellToken::Void => Graph::VOID,
                CellToken::Floor => graph.add_tile(position),
                CellToken::Special => graph.add_special(position),
                CellToken::Start(priority) => {
                    let tile = graph.add_tile(position);
                    trace!(x, y, priority, "Registered starting tile");
                    starting_tiles.push(StartingTile { tile, priority });
                    tile
                }
                CellToken::Room(index) => {
                    graph
                        .get_mut(rooms[index])
                        .and_then(|tile| tile.as_room_mut())
                        .ok_or(MapError::NoSuchRoom(index))?
                        .add_location(position);
                    Graph::VOID
                }
            };

            grid.push(node);
            tokens.push(token);
        }

        debug!(
            tiles = graph.node_count() - rooms.len() - 1,
            starting_tiles = starting_tiles.len(),
            "Classified tile layout"
        );
        Ok(ClassifiedGrid {
            grid,
            tokens,
            starting_tiles,
        })
    }

    /// Links each linkable cell to its left and lower neighbours when those are linkable too.
    ///
    /// Every orthogonal pair is visited exactly once, from its right or upper member, and
    /// [`Graph::connect`] adds the edge to both ends.
    fn link_grid(graph: &mut Graph, grid: &[NodeId], tokens: &[CellToken], dimensions: Dimensions) -> BoardResult<()> {
        let Dimensions { width, height } = dimensions;

        for y in 0..height {
            for x in 0..width {
                let index = y * width + x;
                if !tokens[index].is_linkable() {
                    continue;
                }

                if x > 0 && tokens[index - 1].is_linkable() {
                    graph.connect(grid[index], grid[index - 1])?;
                }
                if y + 1 < height && tokens[index + width].is_linkable() {
                    graph.connect(grid[index], grid[index + width])?;
                }
            }
        }

        debug!(edges = graph.edge_count(), "Linked grid adjacency");
        Ok(())
    }

    /// Connects rooms to their exterior tiles and records door slots.
    ///
    /// Returns the number of doors wired. Door slot cells are withdrawn from each room's
    /// drawable floor once every door is in place.
    fn wire_doors(&mut self, doors: &Descriptor) -> BoardResult<usize> {
        let mut count = 0;

        for (index, fields) in doors.rows().iter().enumerate() {
            let line = index + 1;
            let Some(door) = CellParser::parse_door(fields, line, self.rooms.len())? else {
                continue;
            };

            let no_such_tile = MapError::NoSuchTile {
                x: door.exit.x.into(),
                y: door.exit.y.into(),
            };
            let room = self.room_node(door.room)?;
            let exit = self.node_at(door.exit.x, door.exit.y).map_err(|_| no_such_tile.clone())?;
            let exit_tile = self.tile(exit)?;
            if !exit_tile.is_playable() || exit_tile.is_room() {
                return Err(no_such_tile.into());
            }

            self.graph.connect(room, exit)?;

            let slot = DoorSlot::for_exit(door.exit, door.direction);
            self.graph
                .get_mut(room)
                .and_then(|tile| tile.as_room_mut())
                .ok_or(MapError::NoSuchRoom(door.room))?
                .add_door_slot(slot)?;

            trace!(line, room = door.room, exit = %door.exit, slot = slot.index(), "Wired door");
            count += 1;
        }

        for &room in &self.rooms {
            if let Some(room) = self.graph.get_mut(room).and_then(|tile| tile.as_room_mut()) {
                room.retire_door_slots();
            }
        }

        debug!(doors = count, "Wired doors");
        Ok(count)
    }
}
