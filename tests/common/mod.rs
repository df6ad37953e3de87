#![allow(dead_code)]

use std::collections::HashSet;

use clue_board::constants::{SAMPLE_DOORS, SAMPLE_TILES};
use clue_board::map::{BoardMapping, Graph, NodeId};
use glam::IVec2;

/// The sample board from `constants`, freshly built.
pub fn sample_board() -> BoardMapping {
    BoardMapping::parse(SAMPLE_TILES, SAMPLE_DOORS).unwrap()
}

/// Node id of the tile or room at `(x, y)`.
pub fn node(board: &BoardMapping, x: i32, y: i32) -> NodeId {
    board.node_at(x, y).unwrap()
}

/// Coordinates of every node along a path.
pub fn coordinates(board: &BoardMapping, path: &[NodeId]) -> Vec<IVec2> {
    path.iter().map(|&id| board.tile(id).unwrap().coordinates()).collect()
}

pub fn occupied(nodes: &[NodeId]) -> HashSet<NodeId> {
    nodes.iter().copied().collect()
}

/// Builds a bare graph of `tiles` standard tiles followed by `rooms` rooms, then connects `edges`.
///
/// Tiles are numbered from 1 and rooms follow them, matching node ids, so `t1` is node 1.
pub fn graph(tiles: usize, rooms: usize, edges: &[(NodeId, NodeId)]) -> Graph {
    let mut graph = Graph::new();
    for x in 0..tiles {
        graph.add_tile(IVec2::new(x as i32, 0));
    }
    for id in 0..rooms {
        graph.add_room(clue_board::map::Room::new(id));
    }
    for &(a, b) in edges {
        graph.connect(a, b).unwrap();
    }
    graph
}
