use crate::consts::INDEX_RECORD_LENGTH;
use crate::{IndexError, IndexErrorCode, IndexType, IndexTypeData, Result};

/// Reads a little-endian file image into a host-order record.
///
/// Tags are not validated and reserved fields are kept as found.
pub fn decode_index_record(bytes: &[u8]) -> Result<IndexTypeData> {
    let mut record = IndexTypeData::from_raw(bytes)?;
    record.little_endian_to_host();
    Ok(record)
}

pub fn inspect_index_record(bytes: &[u8]) -> Result<IndexType> {
    IndexType::try_from(decode_index_record(bytes)?)
}

pub fn decode_index_records(bytes: &[u8]) -> Result<Vec<IndexType>> {
    if bytes.len() % INDEX_RECORD_LENGTH != 0 {
        return Err(IndexError::new(
            IndexErrorCode::InvalidRecordLength,
            format!(
                "Index byte length {} is not divisible by {INDEX_RECORD_LENGTH}",
                bytes.len()
            ),
        ));
    }

    let mut records = Vec::with_capacity(bytes.len() / INDEX_RECORD_LENGTH);
    for (idx, chunk) in bytes.chunks_exact(INDEX_RECORD_LENGTH).enumerate() {
        let record = inspect_index_record(chunk).map_err(|err| {
            IndexError::new(err.code, format!("Record {idx}: {}", err.message))
        })?;
        records.push(record);
    }
    Ok(records)
}
