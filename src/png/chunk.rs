use std::io::{self, Write};

use flate2::Crc;

// ── Chunk ─────────────────────────────────────────────────────────────────────

/// One PNG chunk: a 4-byte ASCII type tag and its payload.
///
/// On disk a chunk is laid out as:
///
/// ```text
/// ┌────────────┬──────────┬─────────────┬────────────┐
/// │ length BE  │ type tag │   payload   │ CRC-32 BE  │
/// │  4 bytes   │ 4 bytes  │ length bytes│  4 bytes   │
/// └────────────┴──────────┴─────────────┴────────────┘
/// ```
///
/// The CRC covers the type tag and the payload, never the length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub kind: [u8; 4],
    pub data: Vec<u8>,
}

impl Chunk {
    pub fn new(kind: &[u8; 4], data: Vec<u8>) -> Self {
        Self { kind: *kind, data }
    }

    /// CRC-32 over `kind ++ data`.
    pub fn crc(&self) -> u32 {
        let mut crc = Crc::new();
        crc.update(&self.kind);
        crc.update(&self.data);
        crc.sum()
    }

    /// Total serialized size: 12 bytes of framing plus the payload.
    pub fn encoded_len(&self) -> usize {
        12 + self.data.len()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&(self.data.len() as u32).to_be_bytes())?;
        out.write_all(&self.kind)?;
        out.write_all(&self.data)?;
        out.write_all(&self.crc().to_be_bytes())
    }
}

// ── Reading (used by `verify` and tests) ─────────────────────────────────────

/// A chunk as found in an encoded file, with the stored CRC kept separately
/// so callers can check it against [`Chunk::crc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawChunk {
    pub chunk: Chunk,
    pub stored_crc: u32,
}

impl RawChunk {
    pub fn crc_ok(&self) -> bool {
        self.chunk.crc() == self.stored_crc
    }
}

/// Split the bytes following the PNG signature into chunks.
///
/// Returns `None` if a chunk header or payload runs past the end of `bytes`.
pub fn split_chunks(mut bytes: &[u8]) -> Option<Vec<RawChunk>> {
    let mut chunks = Vec::new();
    while !bytes.is_empty() {
        if bytes.len() < 12 {
            return None;
        }
        let len = u32::from_be_bytes(bytes[0..4].try_into().ok()?) as usize;
        let kind: [u8; 4] = bytes[4..8].try_into().ok()?;
        let end = 8usize.checked_add(len)?;
        if bytes.len() < end + 4 {
            return None;
        }
        let data = bytes[8..end].to_vec();
        let stored_crc = u32::from_be_bytes(bytes[end..end + 4].try_into().ok()?);
        chunks.push(RawChunk { chunk: Chunk { kind, data }, stored_crc });
        bytes = &bytes[end + 4..];
    }
    Some(chunks)
}

// ── Tests ──────────────────────────────────────────────────────────────────────
