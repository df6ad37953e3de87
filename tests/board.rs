use clue_board::constants::{SAMPLE_DOORS, SAMPLE_TILES};
use clue_board::error::{BoardError, MapError, ParseError};
use clue_board::map::{BoardMapping, Graph, RoomCard, TileKind};
use glam::IVec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{coordinates, node, sample_board};

#[test]
fn test_sample_board_dimensions() {
    let board = sample_board();

    assert_that(&board.width()).is_equal_to(7);
    assert_that(&board.height()).is_equal_to(6);
    assert_that(&board.room_count()).is_equal_to(3);

    for y in 0..board.height() {
        assert_that(&board.grid_row(y).map(|row| row.len())).is_equal_to(Some(7));
    }
    assert_that(&board.grid_row(6)).is_none();
}

#[test]
fn test_short_rows_are_padded_with_void() {
    let board = sample_board();
    let last = board.grid_row(5).unwrap();

    assert_eq!(last[1], node(&board, 1, 5));
    for (x, &id) in last.iter().enumerate() {
        if x != 1 {
            assert_eq!(id, Graph::VOID, "cell ({x}, 5)");
        }
    }
}

#[test]
fn test_trailing_blank_rows_and_cells_are_ignored() {
    let board = BoardMapping::parse("0,0,,\n,,\n\n", "").unwrap();

    assert_that(&board.width()).is_equal_to(2);
    assert_that(&board.height()).is_equal_to(1);
    assert!(board.graph().is_adjacent(node(&board, 0, 0), node(&board, 1, 0)));
}

#[test]
fn test_adjacency_is_symmetric_without_self_loops() {
    let board = sample_board();
    let graph = board.graph();

    for tile in graph.nodes() {
        let neighbors = graph.neighbors(tile.id());
        for &neighbor in neighbors {
            assert_ne!(neighbor, tile.id());
            assert!(graph.is_adjacent(neighbor, tile.id()), "{} -> {neighbor}", tile.id());
            assert_eq!(neighbors.iter().filter(|&&n| n == neighbor).count(), 1);
        }
    }
    assert_that(&graph.neighbors(Graph::VOID).is_empty()).is_true();
}

#[test]
fn test_grid_links_orthogonal_neighbors_only() {
    let board = sample_board();
    let graph = board.graph();
    let centre = node(&board, 4, 2);

    assert_eq!(
        coordinates(&board, graph.neighbors(centre)),
        vec![IVec2::new(4, 1), IVec2::new(3, 2), IVec2::new(4, 3), IVec2::new(5, 2)]
    );
    assert!(!graph.is_adjacent(centre, node(&board, 3, 1)));
    assert!(!graph.is_adjacent(node(&board, 1, 3), node(&board, 2, 3)));
}

#[test]
fn test_special_tiles_link_like_standard_tiles() {
    let board = sample_board();
    let special = board.get_tile(3, 2).unwrap();

    assert_that(&special.is_special()).is_true();
    assert_that(&board.graph().neighbors(special.id()).len()).is_equal_to(3);
}

#[test]
fn test_doors_connect_rooms_to_exterior_tiles() {
    let board = sample_board();
    let graph = board.graph();

    let study = board.room_node(0).unwrap();
    assert_eq!(
        coordinates(&board, graph.neighbors(study)),
        vec![IVec2::new(1, 2), IVec2::new(3, 1)]
    );
    assert!(graph.is_adjacent(node(&board, 1, 2), study));
    assert!(graph.is_adjacent(node(&board, 3, 1), study));

    let hall = board.room_node(1).unwrap();
    assert_eq!(coordinates(&board, graph.neighbors(hall)), vec![IVec2::new(4, 1)]);

    let lounge = board.room_node(2).unwrap();
    assert_eq!(
        coordinates(&board, graph.neighbors(lounge)),
        vec![IVec2::new(4, 3), IVec2::new(6, 2)]
    );
}

#[test]
fn test_adjacent_tiles_include_rooms() {
    let board = sample_board();
    let exit = node(&board, 4, 3);

    let adjacent = board
        .adjacent_tiles(exit)
        .map(|tile| tile.coordinates())
        .collect::<Vec<_>>();
    assert_eq!(adjacent, vec![IVec2::new(4, 2), IVec2::new(4, 4), IVec2::new(-1, 2)]);
    assert_that(&board.adjacent_tiles(Graph::VOID).count()).is_equal_to(0);
}

#[test]
fn test_door_slots_leave_room_floor() {
    let board = sample_board();

    let study = board.room(0).unwrap();
    let slots = study.door_slots().iter().map(|slot| slot.position).collect::<Vec<_>>();
    assert_eq!(slots, vec![IVec2::new(1, 1), IVec2::new(2, 1)]);
    assert_that(&study.locations().len()).is_equal_to(6);
    assert_that(&study.floor().len()).is_equal_to(4);
    for slot in &slots {
        assert_that(&study.floor().contains(slot)).is_false();
        assert_that(&study.contains(*slot)).is_true();
    }

    let lounge = board.room(2).unwrap();
    assert_eq!(lounge.floor(), &[IVec2::new(5, 4), IVec2::new(6, 4)]);
    assert_eq!(
        lounge.door_slots().iter().map(|slot| slot.index()).collect::<Vec<_>>(),
        vec![4, 1]
    );
}

#[test]
fn test_rooms_carry_their_card() {
    let board = sample_board();

    let cards = board.rooms().map(|room| room.card()).collect::<Vec<_>>();
    assert_eq!(cards, vec![RoomCard(0), RoomCard(1), RoomCard(2)]);
}

#[test]
fn test_starting_tiles_sorted_by_priority() {
    let board = sample_board();

    let positions = board
        .starting_tiles()
        .iter()
        .map(|tile| tile.coordinates())
        .collect::<Vec<_>>();
    assert_eq!(positions, vec![IVec2::new(0, 3), IVec2::new(4, 0), IVec2::new(4, 4)]);

    let priorities = board
        .starting_candidates()
        .iter()
        .map(|start| start.priority)
        .collect::<Vec<_>>();
    assert_eq!(priorities, vec![2, 7, 100]);
}

#[test]
fn test_equal_priorities_keep_layout_order() {
    let board = BoardMapping::parse("S,S3,S\n0,S3,0", "").unwrap();

    let positions = board
        .starting_tiles()
        .iter()
        .map(|tile| tile.coordinates())
        .collect::<Vec<_>>();
    assert_eq!(
        positions,
        vec![IVec2::new(1, 0), IVec2::new(1, 1), IVec2::new(0, 0), IVec2::new(2, 0)]
    );
}

#[test]
fn test_get_tile_prefers_rooms() {
    let board = sample_board();

    let tile = board.get_tile(1, 1).unwrap();
    assert_that(&tile.is_room()).is_true();
    assert_eq!(tile.coordinates(), IVec2::new(-1, 0));
    assert_eq!(tile.id(), board.get_tile(-1, 0).unwrap().id());
    assert_eq!(tile.id(), board.get_room(0).unwrap().id());

    let floor = board.get_tile(3, 0).unwrap();
    assert_eq!(floor.kind(), &TileKind::Standard);
    assert_eq!(floor.coordinates(), IVec2::new(3, 0));

    let void = board.get_tile(2, 3).unwrap();
    assert_that(&void.is_playable()).is_false();
    assert_eq!(void.coordinates(), IVec2::new(-1, -1));
}

#[test]
fn test_get_tile_out_of_range() {
    let board = sample_board();

    assert_eq!(board.get_tile(7, 0).unwrap_err(), MapError::NoSuchTile { x: 7, y: 0 });
    assert_eq!(board.get_tile(0, 6).unwrap_err(), MapError::NoSuchTile { x: 0, y: 6 });
    assert_eq!(board.get_tile(-1, -1).unwrap_err(), MapError::NoSuchTile { x: -1, y: -1 });
    assert_eq!(board.get_tile(-2, 0).unwrap_err(), MapError::NoSuchTile { x: -2, y: 0 });
    assert_eq!(board.get_tile(-1, 3).unwrap_err(), MapError::NoSuchRoom(3));
    assert_eq!(board.room(3).unwrap_err(), MapError::NoSuchRoom(3));
}

#[test]
fn test_shortcuts() {
    let mut board = sample_board();
    let edges = board.graph().edge_count();
    let study = board.room_node(0).unwrap();
    let hall = board.room_node(1).unwrap();
    let lounge = board.room_node(2).unwrap();

    board.add_shortcut(0, 2).unwrap();
    assert!(board.graph().is_adjacent(study, lounge));
    assert!(board.graph().is_adjacent(lounge, study));
    assert_that(&board.graph().edge_count()).is_equal_to(edges + 1);

    board.add_shortcut(2, 0).unwrap();
    assert_that(&board.graph().edge_count()).is_equal_to(edges + 1);

    assert_eq!(board.add_shortcut(1, 1), Err(MapError::SelfLoop(hall)));
    assert_eq!(board.add_shortcut(0, 5), Err(MapError::NoSuchRoom(5)));
    assert_that(&board.graph().edge_count()).is_equal_to(edges + 1);
}

#[test]
fn test_display_renders_grid() {
    let board = sample_board();

    assert_eq!(
        board.to_string(),
        "1 1 1 . . 2 2\n\
         1 1 1 . . 2 2\n\
         . . . I . . .\n\
         . . # # . 3 3\n\
         . . # # . 3 3\n\
         # . # # # # #\n"
    );
}

#[test]
fn test_builds_are_deterministic() {
    let first = sample_board();
    let second = sample_board();

    assert_eq!(first.to_string(), second.to_string());
    for tile in first.graph().nodes() {
        assert_eq!(first.graph().neighbors(tile.id()), second.graph().neighbors(tile.id()));
    }
}

#[test]
fn test_blank_door_rows_are_skipped() {
    let board = BoardMapping::parse(SAMPLE_TILES, "\n1,1,2,D\n\n").unwrap();

    assert_that(&board.room(0).unwrap().door_slots().len()).is_equal_to(1);
    assert_that(&board.graph().neighbors(board.room_node(1).unwrap()).is_empty()).is_true();
}

#[test]
fn test_layout_errors() {
    assert!(matches!(
        BoardMapping::parse("1,3\n0,0", ""),
        Err(BoardError::Map(MapError::MissingRoom { max: 3, missing: 2 }))
    ));
    assert!(matches!(BoardMapping::parse("", ""), Err(BoardError::Map(MapError::EmptyBoard))));
    assert!(matches!(BoardMapping::parse(",,\n,", ""), Err(BoardError::Map(MapError::EmptyBoard))));
    assert!(matches!(
        BoardMapping::parse("0,X", ""),
        Err(BoardError::Parse(ParseError::MalformedCellToken { ref token, x: 1, y: 0 })) if token == "X"
    ));
    assert!(matches!(
        BoardMapping::parse("0,S100", ""),
        Err(BoardError::Parse(ParseError::MalformedCellToken { x: 1, y: 0, .. }))
    ));
}

#[test]
fn test_door_errors() {
    let build = |doors: &str| BoardMapping::parse(SAMPLE_TILES, doors);

    assert!(matches!(build("4,3,0,U"), Err(BoardError::Map(MapError::NoSuchRoom(3)))));
    assert!(matches!(build("1,2,3,U"), Err(BoardError::Map(MapError::NoSuchTile { x: 2, y: 3 }))));
    assert!(matches!(build("1,5,0,L"), Err(BoardError::Map(MapError::NoSuchTile { x: 5, y: 0 }))));
    assert!(matches!(build("1,9,9,U"), Err(BoardError::Map(MapError::NoSuchTile { x: 9, y: 9 }))));
    assert!(matches!(build("1,-1,2,D"), Err(BoardError::Map(MapError::NoSuchTile { x: -1, y: 2 }))));
    assert!(matches!(build("1,-4,0,D"), Err(BoardError::Map(MapError::NoSuchTile { x: -4, y: 0 }))));
    assert!(matches!(
        build("1,99999999999,2,D"),
        Err(BoardError::Map(MapError::NoSuchTile { x: 99999999999, y: 2 }))
    ));
    assert!(matches!(
        build("1,A,2,D"),
        Err(BoardError::Parse(ParseError::MalformedDoor { line: 1, .. }))
    ));
    assert!(matches!(
        build("1,3,2,U"),
        Err(BoardError::Map(MapError::DetachedDoor { room: 0, x: 3, y: 3 }))
    ));
    assert!(matches!(
        build("1,1,2,X"),
        Err(BoardError::Parse(ParseError::InvalidDirection { line: 1, .. }))
    ));
    assert!(matches!(
        build("1,1,2,D\n1,3"),
        Err(BoardError::Parse(ParseError::MalformedDoor { line: 2, .. }))
    ));
}

#[test]
fn test_sample_constants_build() {
    let board = BoardMapping::parse(SAMPLE_TILES, SAMPLE_DOORS).unwrap();
    assert_that(&board.rooms().count()).is_equal_to(3);
}
