use crate::consts::INDEX_RECORD_LENGTH;
use crate::IndexTypeData;

/// Little-endian file image of a host-order record.
pub fn encode_index_record(record: &IndexTypeData) -> [u8; INDEX_RECORD_LENGTH] {
    let mut file_order = *record;
    file_order.host_to_little_endian();
    *file_order.as_bytes()
}

pub fn encode_index_records(records: &[IndexTypeData]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(records.len() * INDEX_RECORD_LENGTH);
    for record in records {
        bytes.extend_from_slice(&encode_index_record(record));
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CompressMode, DataType, Subtype, TileOrientation};

    #[test]
    fn encodes_tilesize_little_endian() {
        let record = IndexTypeData::new(
            Subtype::Imagery,
            256,
            3,
            DataType::UInt8,
            TileOrientation::StartUpperLeft,
            CompressMode::Jpeg,
        );

        let bytes = encode_index_record(&record);
        assert_eq!(
            bytes,
            [0x00, 0x01, 3, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn encodes_records_back_to_back() {
        let first = IndexTypeData::new(
            Subtype::HeightmapCached,
            1024,
            1,
            DataType::Float32,
            TileOrientation::StartLowerLeft,
            CompressMode::Lz,
        );
        let second = IndexTypeData::new(
            Subtype::AlphaCached,
            1024,
            1,
            DataType::UInt8,
            TileOrientation::StartLowerLeft,
            CompressMode::None,
        );

        let bytes = encode_index_records(&[first, second]);
        assert_eq!(bytes.len(), 2 * INDEX_RECORD_LENGTH);
        assert_eq!(bytes[6], 3);
        assert_eq!(bytes[INDEX_RECORD_LENGTH + 6], 4);
    }
}
