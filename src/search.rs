//! Read-only searches over a finished board graph, used by automated players.
//!
//! Every search keeps its queue, visited set and predecessor map local to the call. Nothing
//! is written to the graph, so one board can be searched repeatedly, or from several threads
//! at once, and each call sees the same answer for the same inputs.

use std::collections::{HashMap, HashSet, VecDeque};

use pathfinding::prelude::bfs;
use tracing::trace;

use crate::error::MoveError;
use crate::map::graph::{Graph, NodeId};

/// A stateless breadth-first searcher over a board graph.
#[derive(Debug, Clone, Copy)]
pub struct Pathfinder<'a> {
    graph: &'a Graph,
}

impl<'a> Pathfinder<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Pathfinder { graph }
    }

    /// Finds the shortest path from `origin` to the nearest room.
    ///
    /// `occupied` is a snapshot of the tiles other actors stand on; those tiles are never
    /// entered. The origin is always usable, even if it appears in `occupied`.
    ///
    /// The returned path includes both the origin and the room. When several rooms are equally
    /// close, the first one reached in neighbour order wins. An empty path means no room can be
    /// reached; that is a normal outcome, not an error.
    pub fn shortest_path_to_nearest_room(&self, origin: NodeId, occupied: &HashSet<NodeId>) -> Vec<NodeId> {
        let graph = self.graph;
        if graph.get(origin).is_none_or(|tile| !tile.is_playable()) {
            return Vec::new();
        }

        let path = bfs(
            &origin,
            |&node| {
                graph
                    .neighbors(node)
                    .iter()
                    .copied()
                    .filter(move |neighbor| !occupied.contains(neighbor))
            },
            |&node| graph.is_room(node),
        )
        .unwrap_or_default();

        trace!(origin, length = path.len(), "Searched for nearest room");
        path
    }

    /// Lists every node reachable from `origin` in at most `steps` moves, in discovery order.
    ///
    /// Rooms end a move: they are reachable, but the search does not continue through them.
    /// Leaving the room the search starts in is allowed. Occupied tiles are never entered.
    /// The origin itself is not included.
    pub fn reachable_within(&self, origin: NodeId, steps: usize, occupied: &HashSet<NodeId>) -> Vec<NodeId> {
        let graph = self.graph;
        if graph.get(origin).is_none_or(|tile| !tile.is_playable()) {
            return Vec::new();
        }

        let mut distances = HashMap::from([(origin, 0usize)]);
        let mut reached = Vec::new();
        let mut queue = VecDeque::from([origin]);

        while let Some(node) = queue.pop_front() {
            let distance = distances[&node];
            if distance >= steps || (node != origin && graph.is_room(node)) {
                continue;
            }

            for &neighbor in graph.neighbors(node) {
                if occupied.contains(&neighbor) || distances.contains_key(&neighbor) {
                    continue;
                }

                distances.insert(neighbor, distance + 1);
                reached.push(neighbor);
                queue.push_back(neighbor);
            }
        }

        trace!(origin, steps, reached = reached.len(), "Computed movement range");
        reached
    }

    /// Checks that `route` is a legal move of at most `steps` from `origin`.
    ///
    /// `route` lists the nodes entered, in order, without the origin. Each one must be adjacent
    /// to the previous, unoccupied, and only the last may be a room.
    ///
    /// # Errors
    ///
    /// Returns the first rule the route breaks.
    pub fn validate_route(
        &self,
        origin: NodeId,
        route: &[NodeId],
        steps: usize,
        occupied: &HashSet<NodeId>,
    ) -> Result<(), MoveError> {
        if route.len() > steps {
            return Err(MoveError::TooLong {
                length: route.len(),
                allowed: steps,
            });
        }

        let mut previous = origin;
        for (index, &node) in route.iter().enumerate() {
            if !self.graph.is_adjacent(previous, node) {
                return Err(MoveError::NotAdjacent { from: previous, to: node });
            }
            if occupied.contains(&node) {
                return Err(MoveError::Occupied(node));
            }
            if self.graph.is_room(node) && index + 1 < route.len() {
                return Err(MoveError::ThroughRoom(node));
            }
            previous = node;
        }

        Ok(())
    }
}
