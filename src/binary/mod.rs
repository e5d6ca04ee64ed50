// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary serialization of an [`EsaIndex`].
//!
//! Layout: fixed header, then the sections in order - SEQUENCE (raw ASCII
//! symbols), SUFTAB, LCPTAB (little-endian `u32`), CHILDTAB as three
//! separated `u32` streams (up, down, next; `u32::MAX` encodes "no link") -
//! closed by a CRC32 footer. The bucket table is derived data and rebuilt
//! deterministically on load.
//!
//! `load` trusts nothing: footer magic and checksum come first, then header
//! magic and version, then cross-checks between the recorded section lengths,
//! then per-table content validation. A file that passes all of it answers
//! every query exactly like the index it was saved from.

pub mod header;

use crate::child::{ChildCell, ChildTable};
use crate::error::{Error, Result};
use crate::index::EsaIndex;
use crate::sequence::Sequence;

use self::header::{compute_crc32, IndexFooter, IndexHeader, SectionOffsets, VERSION};

/// Stream encoding of a missing child link.
pub const NO_LINK: u32 = u32::MAX;

/// Serializes an index. Infallible: a built index is well-formed by
/// construction.
pub fn save(index: &EsaIndex) -> Vec<u8> {
    let header = IndexHeader {
        version: VERSION,
        bucket_depth: index.bucket_depth() as u8,
        seq_len: index.len() as u32,
        suftab_len: index.suftab().len() as u32,
        lcptab_len: index.lcptab().len() as u32,
        childtab_len: index.childtab().len() as u32,
    };
    let offsets = header.section_offsets();

    let mut out = Vec::with_capacity(offsets.total_size());
    header.write(&mut out);
    out.extend_from_slice(index.sequence().as_bytes());
    write_u32s(&mut out, index.suftab().iter().copied());
    write_u32s(&mut out, index.lcptab().iter().copied());
    let cells = index.childtab().cells();
    write_u32s(&mut out, cells.iter().map(|c| c.up.unwrap_or(NO_LINK)));
    write_u32s(&mut out, cells.iter().map(|c| c.down.unwrap_or(NO_LINK)));
    write_u32s(&mut out, cells.iter().map(|c| c.next.unwrap_or(NO_LINK)));

    let footer = IndexFooter {
        crc32: compute_crc32(&out),
    };
    footer.write(&mut out);
    out
}

/// Deserializes and fully validates an index.
pub fn load(bytes: &[u8]) -> Result<EsaIndex> {
    let min = IndexHeader::SIZE + IndexFooter::SIZE;
    if bytes.len() < min {
        return Err(Error::Truncated {
            len: bytes.len(),
            min,
        });
    }

    // Integrity first: a failed checksum makes every other field suspect.
    let footer = IndexFooter::read(bytes)?;
    let computed = compute_crc32(&bytes[..bytes.len() - IndexFooter::SIZE]);
    if footer.crc32 != computed {
        return Err(Error::ChecksumMismatch {
            stored: footer.crc32,
            computed,
        });
    }

    let header = IndexHeader::read(bytes)?;
    // A file claiming an empty sequence is corrupt: an index can never be
    // built over one.
    if header.seq_len == 0 {
        return Err(Error::TableSizeMismatch {
            table: "sequence",
            len: 0,
            expected: 1,
        });
    }
    let expected = header.seq_len as usize + 1;
    for (table, len) in [
        ("suffix table", header.suftab_len as usize),
        ("LCP table", header.lcptab_len as usize),
        ("child table", header.childtab_len as usize),
    ] {
        if len != expected {
            return Err(Error::TableSizeMismatch {
                table,
                len,
                expected,
            });
        }
    }
    let depth = header.bucket_depth as usize;
    if depth == 0 || depth > crate::bucket::MAX_DEPTH {
        return Err(Error::BucketDepthOutOfRange {
            depth,
            max: crate::bucket::MAX_DEPTH,
        });
    }

    let offsets = header.section_offsets();
    if bytes.len() < offsets.total_size() {
        return Err(Error::Truncated {
            len: bytes.len(),
            min: offsets.total_size(),
        });
    }
    if bytes.len() != offsets.total_size() {
        return Err(Error::TableSizeMismatch {
            table: "file content",
            len: bytes.len(),
            expected: offsets.total_size(),
        });
    }

    let sequence = read_sequence(bytes, &offsets)?;
    let suftab = read_u32s(section(bytes, offsets.suftab));
    validate_permutation(&suftab, header.seq_len)?;
    let lcptab = read_u32s(section(bytes, offsets.lcptab));
    let childtab = read_child_table(bytes, &offsets, header.suftab_len)?;

    Ok(EsaIndex::from_parts(
        sequence, suftab, lcptab, childtab, depth,
    ))
}

impl EsaIndex {
    /// See [`save`].
    pub fn to_bytes(&self) -> Vec<u8> {
        save(self)
    }

    /// See [`load`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        load(bytes)
    }
}

fn read_sequence(bytes: &[u8], offsets: &SectionOffsets) -> Result<Sequence> {
    let raw = section(bytes, offsets.sequence);
    Sequence::new(raw.to_vec()).map_err(|e| match e {
        // An invalid symbol in a checksummed file is corruption (or a
        // crafted file), not caller input.
        Error::InvalidSymbol { byte, position } => Error::CorruptSequence { byte, position },
        other => other,
    })
}

/// The suffix table must contain each of `0..=n` exactly once.
fn validate_permutation(suftab: &[u32], seq_len: u32) -> Result<()> {
    let mut seen = vec![false; suftab.len()];
    for (row, &offset) in suftab.iter().enumerate() {
        if offset > seq_len {
            return Err(Error::OffsetOutOfRange {
                row,
                offset,
                max: seq_len,
            });
        }
        if seen[offset as usize] {
            return Err(Error::NotAPermutation { offset });
        }
        seen[offset as usize] = true;
    }
    Ok(())
}

fn read_child_table(
    bytes: &[u8],
    offsets: &SectionOffsets,
    suftab_len: u32,
) -> Result<ChildTable> {
    let ups = read_u32s(section(bytes, offsets.child_up));
    let downs = read_u32s(section(bytes, offsets.child_down));
    let nexts = read_u32s(section(bytes, offsets.child_next));

    let decode = |row: usize, raw: u32| -> Result<Option<u32>> {
        if raw == NO_LINK {
            Ok(None)
        } else if raw < suftab_len {
            Ok(Some(raw))
        } else {
            Err(Error::OffsetOutOfRange {
                row,
                offset: raw,
                max: suftab_len - 1,
            })
        }
    };

    let mut cells = Vec::with_capacity(ups.len());
    for row in 0..ups.len() {
        cells.push(ChildCell {
            up: decode(row, ups[row])?,
            down: decode(row, downs[row])?,
            next: decode(row, nexts[row])?,
        });
    }
    Ok(ChildTable::from_cells(cells))
}

fn section(bytes: &[u8], range: (usize, usize)) -> &[u8] {
    &bytes[range.0..range.1]
}

fn write_u32s(out: &mut Vec<u8>, values: impl Iterator<Item = u32>) {
    for value in values {
        out.extend_from_slice(&value.to_le_bytes());
    }
}

fn read_u32s(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}
