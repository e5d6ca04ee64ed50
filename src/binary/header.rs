// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-size header and footer of the on-disk index format.
//!
//! The header records the format version, the bucket depth and the length of
//! every section, making [`SectionOffsets`] the single source of truth for
//! where each table lives in the byte stream. The footer closes the file
//! with a CRC32 over everything before it plus the reversed magic, so both
//! truncation and bit rot are caught before any table is decoded.

use crate::error::{Error, Result};

/// File magic, first four bytes.
pub const MAGIC: [u8; 4] = *b"TLPA";

/// Footer magic, last four bytes (header magic reversed).
pub const FOOTER_MAGIC: [u8; 4] = *b"APLT";

/// Current format version.
pub const VERSION: u8 = 1;

/// Decoded header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexHeader {
    pub version: u8,
    pub bucket_depth: u8,
    pub seq_len: u32,
    pub suftab_len: u32,
    pub lcptab_len: u32,
    pub childtab_len: u32,
}

impl IndexHeader {
    /// Encoded size: magic, version, depth, two reserved bytes, four `u32`
    /// section lengths.
    pub const SIZE: usize = 24;

    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&MAGIC);
        out.push(self.version);
        out.push(self.bucket_depth);
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&self.seq_len.to_le_bytes());
        out.extend_from_slice(&self.suftab_len.to_le_bytes());
        out.extend_from_slice(&self.lcptab_len.to_le_bytes());
        out.extend_from_slice(&self.childtab_len.to_le_bytes());
    }

    pub fn read(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(Error::Truncated {
                len: bytes.len(),
                min: Self::SIZE,
            });
        }
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&bytes[0..4]);
        if magic != MAGIC {
            return Err(Error::BadMagic { found: magic });
        }
        let version = bytes[4];
        if version != VERSION {
            return Err(Error::UnsupportedVersion {
                found: version,
                expected: VERSION,
            });
        }
        Ok(IndexHeader {
            version,
            bucket_depth: bytes[5],
            seq_len: read_u32(bytes, 8),
            suftab_len: read_u32(bytes, 12),
            lcptab_len: read_u32(bytes, 16),
            childtab_len: read_u32(bytes, 20),
        })
    }

    /// Byte ranges of every section, derived from the recorded lengths.
    /// The child table is stored as three separated `u32` streams.
    pub fn section_offsets(&self) -> SectionOffsets {
        let sequence_start = Self::SIZE;
        let sequence_end = sequence_start + self.seq_len as usize;
        let suftab_end = sequence_end + 4 * self.suftab_len as usize;
        let lcptab_end = suftab_end + 4 * self.lcptab_len as usize;
        let child_up_end = lcptab_end + 4 * self.childtab_len as usize;
        let child_down_end = child_up_end + 4 * self.childtab_len as usize;
        let child_next_end = child_down_end + 4 * self.childtab_len as usize;
        SectionOffsets {
            sequence: (sequence_start, sequence_end),
            suftab: (sequence_end, suftab_end),
            lcptab: (suftab_end, lcptab_end),
            child_up: (lcptab_end, child_up_end),
            child_down: (child_up_end, child_down_end),
            child_next: (child_down_end, child_next_end),
        }
    }
}

/// Byte ranges `(start, end)` of each section within the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionOffsets {
    pub sequence: (usize, usize),
    pub suftab: (usize, usize),
    pub lcptab: (usize, usize),
    pub child_up: (usize, usize),
    pub child_down: (usize, usize),
    pub child_next: (usize, usize),
}

impl SectionOffsets {
    /// Everything covered by the checksum.
    pub fn content_size(&self) -> usize {
        self.child_next.1
    }

    pub fn total_size(&self) -> usize {
        self.content_size() + IndexFooter::SIZE
    }
}

/// File footer: CRC32 plus reversed magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexFooter {
    pub crc32: u32,
}

impl IndexFooter {
    pub const SIZE: usize = 8;

    pub fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.crc32.to_le_bytes());
        out.extend_from_slice(&FOOTER_MAGIC);
    }

    /// Reads the footer from the last eight bytes of the file.
    pub fn read(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(Error::Truncated {
                len: bytes.len(),
                min: Self::SIZE,
            });
        }
        let tail = &bytes[bytes.len() - Self::SIZE..];
        let mut magic = [0u8; 4];
        magic.copy_from_slice(&tail[4..8]);
        if magic != FOOTER_MAGIC {
            return Err(Error::BadFooterMagic { found: magic });
        }
        Ok(IndexFooter {
            crc32: read_u32(tail, 0),
        })
    }
}

/// CRC32 over the file content (everything before the footer).
pub fn compute_crc32(content: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(content);
    hasher.finalize()
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_le_bytes(buf)
}
