use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};

use crate::consts::{
    INDEX_RECORD_LENGTH, OFFSET_COMPRESSION, OFFSET_DATATYPE, OFFSET_NUMCOMP, OFFSET_ORIENTATION,
    OFFSET_SUBTYPE, OFFSET_TILESIZE, OFFSET_UNUSED1, OFFSET_UNUSED2,
};
use crate::subtype::{subtype_name, tilespace_from_subtype, Subtype};
use crate::tilespace::{TileOrientation, Tilespace};
use crate::{CompressMode, DataType, IndexError, IndexErrorCode, Result};

/// One raster index entry, exactly 16 bytes with no padding.
///
/// Fields hold whatever byte order the record is currently in; a record
/// read straight from a file is little-endian until
/// [`IndexTypeData::little_endian_to_host`] runs. Do not reorder fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct IndexTypeData {
    pub tilesize: u16,
    pub numcomp: u8,
    pub datatype: u8,
    pub orientation: u8,
    pub compression: u8,
    pub subtype: u8,
    pub unused1: u8,
    pub unused2: u64,
}

const _: () = assert!(size_of::<IndexTypeData>() == INDEX_RECORD_LENGTH);
const _: () = assert!(offset_of!(IndexTypeData, tilesize) == OFFSET_TILESIZE);
const _: () = assert!(offset_of!(IndexTypeData, numcomp) == OFFSET_NUMCOMP);
const _: () = assert!(offset_of!(IndexTypeData, datatype) == OFFSET_DATATYPE);
const _: () = assert!(offset_of!(IndexTypeData, orientation) == OFFSET_ORIENTATION);
const _: () = assert!(offset_of!(IndexTypeData, compression) == OFFSET_COMPRESSION);
const _: () = assert!(offset_of!(IndexTypeData, subtype) == OFFSET_SUBTYPE);
const _: () = assert!(offset_of!(IndexTypeData, unused1) == OFFSET_UNUSED1);
const _: () = assert!(offset_of!(IndexTypeData, unused2) == OFFSET_UNUSED2);

/// Which way a record is being converted. Both directions perform the same
/// swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrderDirection {
    LittleEndianToHost,
    HostToLittleEndian,
}

impl IndexTypeData {
    /// Builds a host-order record with the reserved fields zeroed.
    ///
    /// `tilesize` is not checked against the subtype's tile-space.
    pub fn new(
        subtype: Subtype,
        tilesize: u16,
        numcomp: u8,
        datatype: DataType,
        orientation: TileOrientation,
        compression: CompressMode,
    ) -> Self {
        Self {
            tilesize,
            numcomp,
            datatype: datatype.code(),
            orientation: orientation.code(),
            compression: compression.code(),
            subtype: subtype.code(),
            unused1: 0,
            unused2: 0,
        }
    }

    /// Copies a raw record without touching byte order.
    pub fn from_raw(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != INDEX_RECORD_LENGTH {
            return Err(IndexError::new(
                IndexErrorCode::InvalidRecordLength,
                format!(
                    "Index record length mismatch. expected={INDEX_RECORD_LENGTH} got={}",
                    bytes.len()
                ),
            ));
        }
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// Raw view of the record in its current byte order.
    pub fn as_bytes(&self) -> &[u8; INDEX_RECORD_LENGTH] {
        bytemuck::cast_ref(self)
    }

    /// Reverses every multi-byte field. Applying it twice is the identity.
    pub fn swap_bytes(&mut self) {
        self.tilesize = self.tilesize.swap_bytes();
        self.unused2 = self.unused2.swap_bytes();
    }

    /// Converts between host order and the little-endian file order. Both
    /// directions apply the same swap, and only on big-endian hosts.
    pub fn normalize_byte_order(&mut self, direction: ByteOrderDirection) {
        if cfg!(target_endian = "big") {
            log::trace!("swapping index record fields ({direction:?})");
            self.swap_bytes();
        }
    }

    pub fn little_endian_to_host(&mut self) {
        self.normalize_byte_order(ByteOrderDirection::LittleEndianToHost);
    }

    pub fn host_to_little_endian(&mut self) {
        self.normalize_byte_order(ByteOrderDirection::HostToLittleEndian);
    }

    pub fn subtype(&self) -> Result<Subtype> {
        Subtype::from_code(self.subtype)
    }

    pub fn has_reserved_bits(&self) -> bool {
        self.unused1 != 0 || self.unused2 != 0
    }
}

/// Validated, host-order interpretation of an [`IndexTypeData`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexType {
    pub subtype: Subtype,
    pub tile_size: u16,
    pub numcomp: u8,
    pub datatype: DataType,
    pub orientation: TileOrientation,
    pub compression: CompressMode,
}

impl IndexType {
    pub fn name(&self) -> &'static str {
        subtype_name(self.subtype)
    }

    pub fn tilespace(&self) -> &'static Tilespace {
        tilespace_from_subtype(self.subtype)
    }

    pub fn to_record(&self) -> IndexTypeData {
        IndexTypeData::new(
            self.subtype,
            self.tile_size,
            self.numcomp,
            self.datatype,
            self.orientation,
            self.compression,
        )
    }
}

impl TryFrom<IndexTypeData> for IndexType {
    type Error = IndexError;

    /// Expects a host-order record. Reserved fields are ignored.
    fn try_from(record: IndexTypeData) -> Result<Self> {
        if record.has_reserved_bits() {
            log::debug!(
                "ignoring reserved index record fields unused1={:#04x} unused2={:#018x}",
                record.unused1,
                record.unused2
            );
        }

        Ok(Self {
            subtype: record.subtype()?,
            tile_size: record.tilesize,
            numcomp: record.numcomp,
            datatype: DataType::from_code(record.datatype)?,
            orientation: TileOrientation::from_code(record.orientation)?,
            compression: CompressMode::from_code(record.compression)?,
        })
    }
}
