use glam::IVec2;
use smallvec::SmallVec;

use crate::constants::VOID_COORDINATE;
use crate::error::MapError;
use crate::map::room::Room;

/// A unique identifier for a node, represented by its index in the graph's storage.
pub type NodeId = usize;

/// Tile neighbour lists rarely exceed four grid neighbours plus a door.
pub type Neighbors = SmallVec<[NodeId; 5]>;

/// The capability of a tile: what kind of board position it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileKind {
    /// Not a playable position. Never adjacent to anything.
    Void,
    /// An ordinary floor tile.
    Standard,
    /// An event-triggering floor tile; links exactly like a standard tile.
    Special,
    /// A room, with its floor plan and door slots.
    Room(Room),
}

/// A node of the board graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: NodeId,
    position: IVec2,
    kind: TileKind,
}

impl Tile {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Grid coordinates. Non-playable tiles report `(-1, -1)` and rooms report `(-1, room id)`.
    pub fn coordinates(&self) -> IVec2 {
        self.position
    }

    pub fn kind(&self) -> &TileKind {
        &self.kind
    }

    pub fn is_room(&self) -> bool {
        matches!(self.kind, TileKind::Room(_))
    }

    pub fn is_special(&self) -> bool {
        matches!(self.kind, TileKind::Special)
    }

    /// Whether this tile is an actual playable position (anything but the sentinel).
    pub fn is_playable(&self) -> bool {
        !matches!(self.kind, TileKind::Void)
    }

    pub fn as_room(&self) -> Option<&Room> {
        match &self.kind {
            TileKind::Room(room) => Some(room),
            _ => None,
        }
    }

    pub(crate) fn as_room_mut(&mut self) -> Option<&mut Room> {
        match &mut self.kind {
            TileKind::Room(room) => Some(room),
            _ => None,
        }
    }
}

/// An undirected graph of tiles and rooms, stored as an arena.
///
/// Tiles are stored in a vector and their indices serve as their `NodeId`. Adjacency is kept
/// in a parallel list and is always mutual: connecting `a` to `b` also connects `b` to `a`.
/// Neighbour order is insertion order, which is what gives searches their tie-break.
///
/// Node [`Graph::VOID`] is the shared non-playable sentinel and exists in every graph.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Tile>,
    adjacency_list: Vec<Neighbors>,
}

impl Graph {
    /// The sentinel tile standing in for every non-playable cell.
    pub const VOID: NodeId = 0;

    /// Creates a graph holding only the sentinel tile.
    pub fn new() -> Self {
        let mut graph = Graph {
            nodes: Vec::new(),
            adjacency_list: Vec::new(),
        };
        graph.push(IVec2::splat(VOID_COORDINATE), TileKind::Void);
        graph
    }

    fn push(&mut self, position: IVec2, kind: TileKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Tile { id, position, kind });
        self.adjacency_list.push(Neighbors::new());
        id
    }

    /// Adds a standard tile at the given grid position.
    pub fn add_tile(&mut self, position: IVec2) -> NodeId {
        self.push(position, TileKind::Standard)
    }

    /// Adds a special tile at the given grid position.
    pub fn add_special(&mut self, position: IVec2) -> NodeId {
        self.push(position, TileKind::Special)
    }

    /// Adds a room node. Its coordinates follow the room addressing convention, `(-1, id)`.
    pub fn add_room(&mut self, room: Room) -> NodeId {
        let position = IVec2::new(VOID_COORDINATE, room.id() as i32);
        self.push(position, TileKind::Room(room))
    }

    /// Connects two nodes in both directions.
    ///
    /// Connecting nodes that are already adjacent is a no-op, so no edge is ever duplicated.
    ///
    /// # Errors
    ///
    /// Returns an error if either node does not exist or is the sentinel, or if both ids are
    /// the same node.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> Result<(), MapError> {
        for id in [a, b] {
            if id >= self.nodes.len() || id == Self::VOID {
                return Err(MapError::NodeNotFound(id));
            }
        }
        if a == b {
            return Err(MapError::SelfLoop(a));
        }

        if !self.adjacency_list[a].contains(&b) {
            self.adjacency_list[a].push(b);
        }
        if !self.adjacency_list[b].contains(&a) {
            self.adjacency_list[b].push(a);
        }
        Ok(())
    }

    /// Retrieves a tile by id.
    pub fn get(&self, id: NodeId) -> Option<&Tile> {
        self.nodes.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Tile> {
        self.nodes.get_mut(id)
    }

    /// The nodes adjacent to `id`, in the order the edges were added.
    ///
    /// Unknown ids have no neighbours.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency_list.get(id).map(|list| list.as_slice()).unwrap_or(&[])
    }

    pub fn is_adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors(a).contains(&b)
    }

    pub fn is_room(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Tile::is_room)
    }

    /// Returns the total number of nodes in the graph, the sentinel included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency_list.iter().map(|list| list.len()).sum::<usize>() / 2
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Tile> {
        self.nodes.iter()
    }
}

// Default implementation for creating an empty graph.
impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
