use crate::consts::{IMAGERY_TILE_SIZE, RASTER_PRODUCT_TILE_SIZE};
use crate::{IndexError, IndexErrorCode, Result};

/// Scan order of the rows inside a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileOrientation {
    StartUpperLeft,
    StartLowerLeft,
}

impl TileOrientation {
    pub(crate) fn code(self) -> u8 {
        match self {
            Self::StartUpperLeft => 0,
            Self::StartLowerLeft => 1,
        }
    }

    pub(crate) fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::StartUpperLeft),
            1 => Ok(Self::StartLowerLeft),
            _ => Err(IndexError::new(
                IndexErrorCode::InvalidFieldValue,
                format!("Invalid orientation code {code}."),
            )),
        }
    }
}

/// Geometry shared by every tile addressed in one tile-space.
#[derive(Debug, PartialEq, Eq)]
pub struct Tilespace {
    pub tile_size: u32,
    pub tile_size_log2: u32,
    pub pixels_at_level0: u32,
    pub pixels_at_level0_log2: u32,
    pub orientation: TileOrientation,
}

impl Tilespace {
    const fn new(tile_size: u16, pixels_at_level0: u32, orientation: TileOrientation) -> Self {
        let tile_size = tile_size as u32;
        Self {
            tile_size,
            tile_size_log2: tile_size.trailing_zeros(),
            pixels_at_level0,
            pixels_at_level0_log2: pixels_at_level0.trailing_zeros(),
            orientation,
        }
    }

    /// Number of tiles along one axis at `level`, or `None` when the count
    /// does not fit in a `u64`.
    pub fn tiles_per_axis(&self, level: u32) -> Option<u64> {
        let pixels_log2 = self.pixels_at_level0_log2.checked_add(level)?;
        if pixels_log2 <= self.tile_size_log2 {
            return Some(1);
        }
        1_u64.checked_shl(pixels_log2 - self.tile_size_log2)
    }
}

/// Tile-space of servable client imagery.
pub static CLIENT_IMAGERY_TILESPACE: Tilespace =
    Tilespace::new(IMAGERY_TILE_SIZE, 256, TileOrientation::StartUpperLeft);

/// Tile-space shared by every blended raster product cache.
pub static RASTER_PRODUCT_TILESPACE: Tilespace =
    Tilespace::new(RASTER_PRODUCT_TILE_SIZE, 256, TileOrientation::StartLowerLeft);

const _: () = assert!(IMAGERY_TILE_SIZE.is_power_of_two());
const _: () = assert!(RASTER_PRODUCT_TILE_SIZE.is_power_of_two());
