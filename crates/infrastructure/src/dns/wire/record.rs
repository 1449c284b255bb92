use super::name::{decode_name, encode_name, CompressionTable};
use super::{ByteReader, ByteWriter};
use authdns_domain::{RecordClass, RecordType, ResourceRecord, WireError};

/// Decodes one resource record at `offset`, returning it and the offset after it.
///
/// RDATA is copied out verbatim without length checks against the type;
/// compressed names inside it are not expanded.
pub fn decode_record(
    reader: &ByteReader<'_>,
    offset: usize,
) -> Result<(ResourceRecord, usize), WireError> {
    let (name, consumed) = decode_name(reader, offset)?;
    let (rtype, pos) = reader.read_u16(offset + consumed)?;
    let (rclass, pos) = reader.read_u16(pos)?;
    let (ttl, pos) = reader.read_u32(pos)?;
    let (rdlength, pos) = reader.read_u16(pos)?;
    let (rdata, pos) = reader.read_bytes(pos, usize::from(rdlength))?;

    Ok((
        ResourceRecord::new(
            name,
            RecordType::from_u16(rtype),
            RecordClass::from_u16(rclass),
            ttl,
            rdata.to_vec(),
        ),
        pos,
    ))
}

/// Writes one resource record. Nothing is written when the record is rejected.
pub fn encode_record(
    writer: &mut ByteWriter,
    record: &ResourceRecord,
    table: &mut CompressionTable,
) -> Result<(), WireError> {
    if !record.has_valid_rdata_len() {
        return Err(invalid_rdata(record));
    }
    let rdlength = u16::try_from(record.rdata.len()).map_err(|_| WireError::InvalidRecord {
        rtype: record.rtype.to_u16(),
        expected: usize::from(u16::MAX),
        actual: record.rdata.len(),
    })?;

    encode_name(writer, &record.name, table);
    writer.write_u16(record.rtype.to_u16());
    writer.write_u16(record.rclass.to_u16());
    writer.write_u32(record.ttl);
    writer.write_u16(rdlength);
    writer.write_bytes(&record.rdata);
    Ok(())
}

fn invalid_rdata(record: &ResourceRecord) -> WireError {
    WireError::InvalidRecord {
        rtype: record.rtype.to_u16(),
        expected: record.rtype.expected_rdata_len().unwrap_or_default(),
        actual: record.rdata.len(),
    }
}
