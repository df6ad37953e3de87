#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

use std::collections::HashSet;
use std::env;

use anyhow::{Context, Result};
use clue_board::config::BoardConfig;
use clue_board::constants::{SAMPLE_DOORS, SAMPLE_TILES};
use clue_board::logging::setup_logging;
use clue_board::map::BoardMapping;
use tracing::info;

// Builds a board and prints what it looks like to the game: the grid, the starting positions in
// play order, and the route an automated player would take from each of them.
//
// Usage: board_check [CONFIG.toml]
// Without a configuration file the built-in sample board is used.

fn main() -> Result<()> {
    setup_logging();

    let board = match env::args_os().nth(1) {
        Some(path) => {
            let config = BoardConfig::load(&path).with_context(|| format!("Could not load {}", path.to_string_lossy()))?;
            BoardMapping::from_config(&config).context("Could not build the configured board")?
        }
        None => {
            info!("No configuration given, using the sample board");
            BoardMapping::parse(SAMPLE_TILES, SAMPLE_DOORS).context("Could not build the sample board")?
        }
    };

    println!("{} x {} board, {} rooms", board.width(), board.height(), board.room_count());
    print!("{board}");

    let pathfinder = board.pathfinder();
    let occupied = HashSet::new();

    println!("Starting positions:");
    for start in board.starting_candidates() {
        let tile = board.tile(start.tile)?;
        let route = pathfinder
            .shortest_path_to_nearest_room(start.tile, &occupied)
            .into_iter()
            .map(|node| board.tile(node).map(|tile| tile.coordinates().to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        if route.is_empty() {
            println!("  {} (priority {}): no room reachable", tile.coordinates(), start.priority);
        } else {
            println!("  {} (priority {}): {}", tile.coordinates(), start.priority, route.join(" -> "));
        }
    }

    Ok(())
}
