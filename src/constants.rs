//! This module contains the constants used when reading board descriptors.

/// Field delimiter used by both descriptor tables.
pub const FIELD_DELIMITER: char = ',';

/// Priority given to a bare `S` starting marker. Numbered markers always sort before it.
pub const DEFAULT_START_PRIORITY: u8 = 100;
/// Highest priority an explicitly numbered `Sn` marker may carry.
pub const MAX_START_PRIORITY: u8 = 99;

/// Token for a non-playable cell. An empty cell means the same thing.
pub const VOID_TOKEN: &str = "-1";
/// Token for a standard floor tile.
pub const FLOOR_TOKEN: &str = "0";
/// Token for an intrigue (special) tile.
pub const SPECIAL_TOKEN: &str = "I";
/// Prefix for starting-position markers.
pub const START_PREFIX: char = 'S';

/// Coordinates carried by tiles that are not a playable position.
pub const VOID_COORDINATE: i32 = -1;

/// Shortcuts of the Archer's Avenue board, as 0-based room id pairs.
pub const ARCHERS_AVENUE_SHORTCUTS: [(usize, usize); 2] = [(0, 8), (6, 2)];

/// A small reference board used by the test suite and the `board_check` tool.
///
/// Three rooms, a special tile, three starting markers (`S7`, `S2` and a bare `S`) and an
/// irregular last row that exercises trailing-cell trimming.
pub const SAMPLE_TILES: &str = "\
1,1,1,0,S7,2,2
1,1,1,0,0,2,2
0,0,0,I,0,0,0
S2,0,-1,-1,0,3,3
0,0,-1,-1,S,3,3
-1,0,,,,
";

/// Doors for [`SAMPLE_TILES`]: `room id (1-based), exit x, exit y, direction`.
pub const SAMPLE_DOORS: &str = "\
1,1,2,D
1,3,1,R
2,4,1,L
3,4,3,L
3,6,2,U
";
