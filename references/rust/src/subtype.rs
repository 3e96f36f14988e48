use std::fmt;

use crate::tilespace::{Tilespace, CLIENT_IMAGERY_TILESPACE, RASTER_PRODUCT_TILESPACE};
use crate::{IndexError, IndexErrorCode, Result};

/// How to interpret a raster index record.
///
/// The codes are persisted in index files. Code 1 belonged to the retired
/// uncached heightmap subtype and is never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subtype {
    /// Servable imagery, 256x256 tiles.
    Imagery,
    /// Blended imagery cache, 1024x1024 tiles.
    ImageryCached,
    /// Blended heightmap cache, 1024x1024 tiles.
    HeightmapCached,
    /// Blended alpha cache, 1024x1024 tiles.
    AlphaCached,
}

const RETIRED_HEIGHTMAP_CODE: u8 = 1;

impl Subtype {
    pub const ALL: [Subtype; 4] = [
        Self::Imagery,
        Self::ImageryCached,
        Self::HeightmapCached,
        Self::AlphaCached,
    ];

    pub fn code(self) -> u8 {
        match self {
            Self::Imagery => 0,
            Self::ImageryCached => 2,
            Self::HeightmapCached => 3,
            Self::AlphaCached => 4,
        }
    }

    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Self::Imagery),
            2 => Ok(Self::ImageryCached),
            3 => Ok(Self::HeightmapCached),
            4 => Ok(Self::AlphaCached),
            RETIRED_HEIGHTMAP_CODE => Err(IndexError::new(
                IndexErrorCode::UnknownSubtype,
                "Subtype code 1 (Heightmap) is retired.",
            )),
            _ => Err(IndexError::new(
                IndexErrorCode::UnknownSubtype,
                format!("Unknown subtype code {code}."),
            )),
        }
    }

    pub fn name(self) -> &'static str {
        subtype_name(self)
    }

    pub fn tilespace(self) -> &'static Tilespace {
        tilespace_from_subtype(self)
    }
}

impl TryFrom<u8> for Subtype {
    type Error = IndexError;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code)
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(subtype_name(*self))
    }
}

pub fn subtype_name(subtype: Subtype) -> &'static str {
    match subtype {
        Subtype::Imagery => "Imagery",
        Subtype::ImageryCached => "ImageryCached",
        Subtype::HeightmapCached => "HeightmapCached",
        Subtype::AlphaCached => "AlphaCached",
    }
}

/// Every cached subtype shares the raster product tile-space.
pub fn tilespace_from_subtype(subtype: Subtype) -> &'static Tilespace {
    match subtype {
        Subtype::Imagery => &CLIENT_IMAGERY_TILESPACE,
        Subtype::ImageryCached | Subtype::HeightmapCached | Subtype::AlphaCached => {
            &RASTER_PRODUCT_TILESPACE
        }
    }
}

pub fn subtype_name_from_code(code: u8) -> Result<&'static str> {
    Subtype::from_code(code).map(subtype_name)
}

pub fn tilespace_from_code(code: u8) -> Result<&'static Tilespace> {
    Subtype::from_code(code).map(tilespace_from_subtype)
}
