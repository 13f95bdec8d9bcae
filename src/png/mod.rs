// =============================================================================
// PNG — hand-assembled PNG container
//
// Writes the smallest valid PNG layout:
//   signature, IHDR, a single IDAT with the zlib stream of all scanlines,
//   and an empty IEND.
// Every scanline uses filter type 0 (None); bit depth is always 8.
// =============================================================================

pub mod chunk;

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

pub use chunk::{Chunk, RawChunk, split_chunks};

use crate::error::{AssetError, Result};

/// The fixed 8-byte PNG file signature.
pub const SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Largest width or height the format allows (2^31 - 1).
pub const MAX_DIMENSION: u32 = 0x7FFF_FFFF;

const FILTER_NONE: u8 = 0;

// ── ColorType ─────────────────────────────────────────────────────────────────

/// Pixel layouts the encoder can write, both 8 bits per channel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorType {
    /// Truecolor, IHDR color type 2.
    Rgb,
    /// Truecolor with alpha, IHDR color type 6.
    Rgba,
}

impl ColorType {
    pub fn channels(self) -> usize {
        match self {
            ColorType::Rgb => 3,
            ColorType::Rgba => 4,
        }
    }

    /// Value stored in the IHDR color type byte.
    pub fn ihdr_code(self) -> u8 {
        match self {
            ColorType::Rgb => 2,
            ColorType::Rgba => 6,
        }
    }
}

// ── Chunk builders ────────────────────────────────────────────────────────────

/// IHDR payload: width, height, bit depth 8, color type, then compression,
/// filter and interlace methods all 0.
pub fn ihdr(width: u32, height: u32, color: ColorType) -> Chunk {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.push(8);
    data.push(color.ihdr_code());
    data.push(0); // compression: deflate
    data.push(0); // filter method: adaptive
    data.push(0); // interlace: none
    Chunk::new(b"IHDR", data)
}

/// IDAT holding the zlib-compressed, filter-prefixed scanlines of `pixels`.
pub fn idat(width: u32, height: u32, color: ColorType, pixels: &[u8]) -> Result<Chunk> {
    let row_len = width as usize * color.channels();
    if row_len == 0 || height == 0 {
        return Err(AssetError::InvalidDimensions { width, height });
    }

    let mut raw = Vec::with_capacity((row_len + 1) * height as usize);
    for row in pixels.chunks_exact(row_len) {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(row);
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&raw).map_err(AssetError::Compress)?;
    let compressed = encoder.finish().map_err(AssetError::Compress)?;

    Ok(Chunk::new(b"IDAT", compressed))
}

pub fn iend() -> Chunk {
    Chunk::new(b"IEND", Vec::new())
}

// ── Encoding ──────────────────────────────────────────────────────────────────

/// Encode a row-major, tightly packed pixel buffer as a PNG file.
///
/// # Errors
/// - [`AssetError::InvalidDimensions`] when either side is zero or exceeds
///   [`MAX_DIMENSION`].
/// - [`AssetError::PixelBufferSize`] when `pixels` is not exactly
///   `width * height * channels` bytes.
pub fn encode(width: u32, height: u32, color: ColorType, pixels: &[u8]) -> Result<Vec<u8>> {
    let expected = buffer_len(width, height, color)?;
    if pixels.len() != expected {
        return Err(AssetError::PixelBufferSize { expected, actual: pixels.len() });
    }

    let chunks = [ihdr(width, height, color), idat(width, height, color, pixels)?, iend()];

    let total = SIGNATURE.len() + chunks.iter().map(Chunk::encoded_len).sum::<usize>();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&SIGNATURE);
    for chunk in &chunks {
        // Writing into a Vec cannot fail.
        chunk.write_to(&mut out).map_err(AssetError::Compress)?;
    }
    Ok(out)
}

/// Encode an RGB image where every pixel is `rgb`.
pub fn encode_solid(width: u32, height: u32, rgb: [u8; 3]) -> Result<Vec<u8>> {
    let len = buffer_len(width, height, ColorType::Rgb)?;
    let pixels = rgb.repeat(len / 3);
    encode(width, height, ColorType::Rgb, &pixels)
}

/// True when both sides are non-zero and within [`MAX_DIMENSION`].
pub fn dimensions_ok(width: u32, height: u32) -> bool {
    (1..=MAX_DIMENSION).contains(&width) && (1..=MAX_DIMENSION).contains(&height)
}

/// Byte length of a tightly packed `width × height` buffer, checked before
/// anything is allocated.
fn buffer_len(width: u32, height: u32, color: ColorType) -> Result<usize> {
    if !dimensions_ok(width, height) {
        return Err(AssetError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(color.channels()))
        // A Vec can never hold more than isize::MAX bytes.
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(AssetError::InvalidDimensions { width, height })
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ihdr_payload_layout() {
        let chunk = ihdr(1284, 2778, ColorType::Rgb);
        assert_eq!(&chunk.kind, b"IHDR");
        assert_eq!(
            chunk.data,
            vec![0, 0, 0x05, 0x04, 0, 0, 0x0A, 0xDA, 8, 2, 0, 0, 0]
        );
    }

    #[test]
    fn rgba_sets_color_type_six() {
        assert_eq!(ihdr(1, 1, ColorType::Rgba).data[9], 6);
    }

    #[test]
    fn encoded_file_starts_with_signature_and_has_three_chunks() {
        let bytes = encode_solid(4, 3, [32, 136, 203]).unwrap();
        assert_eq!(&bytes[..8], &SIGNATURE);

        let chunks = split_chunks(&bytes[8..]).unwrap();
        let kinds: Vec<&[u8; 4]> = chunks.iter().map(|c| &c.chunk.kind).collect();
        assert_eq!(kinds, vec![b"IHDR", b"IDAT", b"IEND"]);
        assert!(chunks.iter().all(RawChunk::crc_ok));
        assert!(chunks[2].chunk.data.is_empty());
    }

    #[test]
    fn idat_decompresses_to_filter_prefixed_rows() {
        use flate2::read::ZlibDecoder;
        use std::io::Read;

        let pixels = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let chunk = idat(2, 2, ColorType::Rgb, &pixels).unwrap();

        let mut raw = Vec::new();
        ZlibDecoder::new(&chunk.data[..]).read_to_end(&mut raw).unwrap();
        assert_eq!(raw, vec![0, 1, 2, 3, 4, 5, 6, 0, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            encode_solid(0, 10, [0, 0, 0]),
            Err(AssetError::InvalidDimensions { width: 0, height: 10 })
        ));
    }

    #[test]
    fn oversized_dimensions_are_rejected_before_allocating() {
        assert!(matches!(
            encode_solid(u32::MAX, u32::MAX, [0, 0, 0]),
            Err(AssetError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_solid(MAX_DIMENSION + 1, 1, [0, 0, 0]),
            Err(AssetError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_solid(MAX_DIMENSION, MAX_DIMENSION, [0, 0, 0]),
            Err(AssetError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode(1, MAX_DIMENSION + 1, ColorType::Rgba, &[]),
            Err(AssetError::InvalidDimensions { .. })
        ));
        assert!(dimensions_ok(MAX_DIMENSION, 1));
        assert!(!dimensions_ok(0, 1));
    }

    #[test]
    fn wrong_buffer_length_is_rejected() {
        let err = encode(2, 2, ColorType::Rgba, &[0; 15]).unwrap_err();
        assert!(matches!(err, AssetError::PixelBufferSize { expected: 16, actual: 15 }));
    }
}
