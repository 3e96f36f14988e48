use std::fs;
use std::path::PathBuf;

use ffio_raster::{
    decode_index_record, decode_index_records, encode_index_record, encode_index_records,
    inspect_index_record, subtype_name_from_code, tilespace_from_code, CompressMode, DataType,
    IndexErrorCode, IndexTypeData, Subtype, TileOrientation, CLIENT_IMAGERY_TILESPACE,
    INDEX_RECORD_LENGTH, RASTER_PRODUCT_TILESPACE,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from("../../test/fixtures").join(name)
}

#[test]
fn encodes_imagery_cached_fixture_exactly() {
    let expected = fs::read(fixture_path("imagery-cached.idx")).expect("read fixture");
    assert_eq!(expected.len(), INDEX_RECORD_LENGTH);

    let record = IndexTypeData::new(
        Subtype::ImageryCached,
        1024,
        3,
        DataType::UInt8,
        TileOrientation::StartLowerLeft,
        CompressMode::None,
    );
    let bytes = encode_index_record(&record);

    assert_eq!(bytes.as_slice(), expected.as_slice());
    assert_eq!(bytes[6], 2);
    assert_eq!(&bytes[0..2], &1024_u16.to_le_bytes());
    assert!(bytes[7..].iter().all(|byte| *byte == 0));

    let decoded = decode_index_record(&bytes).expect("decode record");
    assert_eq!(decoded, record);
}

#[test]
fn decodes_catalog_fixture() {
    let bytes = fs::read(fixture_path("catalog.idx")).expect("read fixture");
    let records = decode_index_records(&bytes).expect("decode catalog");

    let subtypes: Vec<Subtype> = records.iter().map(|r| r.subtype).collect();
    assert_eq!(subtypes, Subtype::ALL.to_vec());

    assert_eq!(records[0].tile_size, 256);
    assert_eq!(records[0].compression, CompressMode::Jpeg);
    assert_eq!(records[0].orientation, TileOrientation::StartUpperLeft);
    assert!(std::ptr::eq(records[0].tilespace(), &CLIENT_IMAGERY_TILESPACE));

    for record in &records[1..] {
        assert_eq!(record.tile_size, 1024);
        assert!(std::ptr::eq(record.tilespace(), &RASTER_PRODUCT_TILESPACE));
        assert_eq!(u32::from(record.tile_size), record.tilespace().tile_size);
    }
    assert_eq!(records[2].datatype, DataType::Float32);
    assert_eq!(records[2].compression, CompressMode::Lz);

    let reencoded: Vec<IndexTypeData> = records.iter().map(|r| r.to_record()).collect();
    assert_eq!(encode_index_records(&reencoded), bytes);
}

#[test]
fn rejects_retired_heightmap_fixture() {
    let bytes = fs::read(fixture_path("retired-heightmap.idx")).expect("read fixture");

    let record = decode_index_record(&bytes).expect("raw decode does not validate tags");
    assert_eq!(record.subtype, 1);

    let error = inspect_index_record(&bytes).expect_err("retired subtype");
    assert_eq!(error.code, IndexErrorCode::UnknownSubtype);

    let error = subtype_name_from_code(record.subtype).expect_err("retired subtype");
    assert_eq!(error.code, IndexErrorCode::UnknownSubtype);
    let error = tilespace_from_code(record.subtype).expect_err("retired subtype");
    assert_eq!(error.code, IndexErrorCode::UnknownSubtype);
}

#[test]
fn tolerates_reserved_fields_fixture() {
    let bytes = fs::read(fixture_path("reserved-set.idx")).expect("read fixture");

    let record = decode_index_record(&bytes).expect("decode record");
    assert_eq!(record.unused1, 0x5a);
    assert_eq!(record.unused2, 0x0807_0605_0403_0201);

    let typed = inspect_index_record(&bytes).expect("reserved fields are ignored");
    assert_eq!(typed.subtype, Subtype::ImageryCached);
    assert_eq!(typed.numcomp, 3);
    assert_eq!(typed.to_record().unused2, 0);
}
