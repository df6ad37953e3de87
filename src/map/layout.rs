//! Board dimension inference and padding of the raw tile table.

use tracing::debug;

use crate::constants::VOID_TOKEN;
use crate::descriptor::Descriptor;
use crate::error::MapError;

/// Width and height of a board, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    /// Derives board dimensions from irregular rows.
    ///
    /// A row's effective width ignores its trailing empty cells; the board width is the widest
    /// effective row. The height runs up to and including the last row holding a non-empty cell,
    /// so a table with no content at all measures zero high.
    pub fn measure<S: AsRef<str>>(rows: &[Vec<S>]) -> Dimensions {
        let mut width = 0;
        let mut height = 0;

        for (y, row) in rows.iter().enumerate() {
            let effective = row.iter().rposition(|cell| !cell.as_ref().is_empty()).map_or(0, |i| i + 1);
            if effective > 0 {
                height = y + 1;
            }
            width = width.max(effective);
        }

        Dimensions { width, height }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// A rectangular tile table: every row holds exactly `width` tokens.
///
/// Short rows are padded with the non-playable token, rows past the last meaningful row are
/// dropped, and long rows (which can only be long through trailing blanks) are truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    dimensions: Dimensions,
    cells: Vec<Vec<String>>,
}

impl Layout {
    /// Measures and pads a tile descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::EmptyBoard`] if the descriptor has no non-empty cell.
    pub fn from_descriptor(descriptor: &Descriptor) -> Result<Layout, MapError> {
        let dimensions = Dimensions::measure(descriptor.rows());
        if dimensions.height == 0 {
            return Err(MapError::EmptyBoard);
        }

        let cells = descriptor
            .rows()
            .iter()
            .take(dimensions.height)
            .map(|row| {
                let mut padded = row.iter().take(dimensions.width).cloned().collect::<Vec<_>>();
                padded.resize(dimensions.width, VOID_TOKEN.to_string());
                padded
            })
            .collect::<Vec<_>>();

        debug!(width = dimensions.width, height = dimensions.height, "Measured tile layout");
        Ok(Layout { dimensions, cells })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    /// Iterates over every token with its position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &str)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, token)| (x, y, token.as_str())))
    }
}
