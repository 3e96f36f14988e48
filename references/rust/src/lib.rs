//! Index records for raster ffio files.
//!
//! Every tile cataloged in a raster ffio file is described by a 16-byte
//! [`IndexTypeData`] record holding its tile size, component count, data
//! type, orientation, compression mode, and [`Subtype`]. Records are stored
//! little-endian; [`encode_index_record`] and [`decode_index_record`] move
//! between that file image and host order, and [`inspect_index_record`]
//! validates every tag.

use std::fmt;

use thiserror::Error;

mod consts;
mod decoder;
mod encoder;
mod index;
mod subtype;
mod tilespace;

pub use consts::{INDEX_RECORD_LENGTH, IMAGERY_TILE_SIZE, RASTER_PRODUCT_TILE_SIZE};
pub use decoder::{decode_index_record, decode_index_records, inspect_index_record};
pub use encoder::{encode_index_record, encode_index_records};
pub use index::{ByteOrderDirection, IndexType, IndexTypeData};
pub use subtype::{
    subtype_name, subtype_name_from_code, tilespace_from_code, tilespace_from_subtype, Subtype,
};
pub use tilespace::{
    TileOrientation, Tilespace, CLIENT_IMAGERY_TILESPACE, RASTER_PRODUCT_TILESPACE,
};

/// Pixel storage type of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    UInt8,
    Int8,
    UInt16,
    Int16,
    UInt32,
    Int32,
    Float32,
    Float64,
}

impl DataType {
    pub(crate) fn code(self) -> u8 {
        match self {
            Self::UInt8 => 0,
            Self::Int8 => 1,
            Self::UInt16 => 2,
            Self::Int16 => 3,
            Self::UInt32 => 4,
            Self::Int32 => 5,
            Self::Float32 => 6,
            Self::Float64 => 7,
        }
    }

    pub(crate) fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::UInt8),
            1 => Ok(Self::Int8),
            2 => Ok(Self::UInt16),
            3 => Ok(Self::Int16),
            4 => Ok(Self::UInt32),
            5 => Ok(Self::Int32),
            6 => Ok(Self::Float32),
            7 => Ok(Self::Float64),
            _ => Err(IndexError::new(
                IndexErrorCode::InvalidFieldValue,
                format!("Invalid datatype code {code}."),
            )),
        }
    }

    pub fn byte_size(self) -> usize {
        match self {
            Self::UInt8 | Self::Int8 => 1,
            Self::UInt16 | Self::Int16 => 2,
            Self::UInt32 | Self::Int32 | Self::Float32 => 4,
            Self::Float64 => 8,
        }
    }
}

/// Compression applied to a stored tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompressMode {
    #[default]
    None,
    Lz,
    Jpeg,
    Dxt,
    Png,
}

impl CompressMode {
    pub(crate) fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Lz => 1,
            Self::Jpeg => 2,
            Self::Dxt => 3,
            Self::Png => 4,
        }
    }

    pub(crate) fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Lz),
            2 => Ok(Self::Jpeg),
            3 => Ok(Self::Dxt),
            4 => Ok(Self::Png),
            _ => Err(IndexError::new(
                IndexErrorCode::InvalidFieldValue,
                format!("Invalid compression code {code}."),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexErrorCode {
    InvalidRecordLength,
    UnknownSubtype,
    InvalidFieldValue,
}

impl IndexErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRecordLength => "INVALID_RECORD_LENGTH",
            Self::UnknownSubtype => "UNKNOWN_SUBTYPE",
            Self::InvalidFieldValue => "INVALID_FIELD_VALUE",
        }
    }
}

impl fmt::Display for IndexErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}")]
pub struct IndexError {
    pub code: IndexErrorCode,
    pub message: String,
}

impl IndexError {
    pub fn new(code: IndexErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;
