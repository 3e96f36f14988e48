pub const INDEX_RECORD_LENGTH: usize = 16;

pub const IMAGERY_TILE_SIZE: u16 = 256;
pub const RASTER_PRODUCT_TILE_SIZE: u16 = 1024;

pub(crate) const OFFSET_TILESIZE: usize = 0;
pub(crate) const OFFSET_NUMCOMP: usize = 2;
pub(crate) const OFFSET_DATATYPE: usize = 3;
pub(crate) const OFFSET_ORIENTATION: usize = 4;
pub(crate) const OFFSET_COMPRESSION: usize = 5;
pub(crate) const OFFSET_SUBTYPE: usize = 6;
pub(crate) const OFFSET_UNUSED1: usize = 7;
pub(crate) const OFFSET_UNUSED2: usize = 8;
