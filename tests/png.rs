use orderia_assets::AssetError;
use orderia_assets::png::{ColorType, SIGNATURE, encode, encode_solid, split_chunks};

// ── Decoder compatibility ─────────────────────────────────────────────────

#[test]
fn solid_png_decodes_with_expected_size_and_color() {
    let bytes = encode_solid(48, 48, [32, 136, 203]).unwrap();
    let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
        .unwrap()
        .to_rgb8();
    assert_eq!(img.dimensions(), (48, 48));
    assert!(img.pixels().all(|p| p.0 == [32, 136, 203]));
}

#[test]
fn non_square_solid_png_keeps_orientation() {
    let bytes = encode_solid(3, 7, [1, 2, 3]).unwrap();
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!((img.width(), img.height()), (3, 7));
}

#[test]
fn splash_sized_png_is_valid_and_compact() {
    let bytes = encode_solid(1284, 2778, [32, 136, 203]).unwrap();
    // Uniform rows compress to a tiny fraction of the 10 MB raw buffer.
    assert!(bytes.len() < 200_000, "{} bytes", bytes.len());

    let img = image::load_from_memory(&bytes).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (1284, 2778));
    assert_eq!(img.get_pixel(1283, 2777).0, [32, 136, 203]);
}

#[test]
fn rgba_buffer_round_trips_through_standard_decoder() {
    let (w, h) = (5u32, 4u32);
    let pixels: Vec<u8> = (0..w * h * 4).map(|i| (i * 7 % 251) as u8).collect();
    let bytes = encode(w, h, ColorType::Rgba, &pixels).unwrap();

    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (w, h));
    assert_eq!(img.into_raw(), pixels);
}

// ── Container layout ─────────────────────────────────────────────────────

#[test]
fn container_is_signature_then_ihdr_idat_iend() {
    let bytes = encode_solid(2, 2, [0, 0, 0]).unwrap();
    assert_eq!(&bytes[..8], &SIGNATURE);

    let chunks = split_chunks(&bytes[8..]).unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(&chunks[0].chunk.kind, b"IHDR");
    assert_eq!(chunks[0].chunk.data.len(), 13);
    assert_eq!(&chunks[1].chunk.kind, b"IDAT");
    assert_eq!(&chunks[2].chunk.kind, b"IEND");
    assert!(chunks.iter().all(|c| c.crc_ok()));

    // Fixed trailer shared by every PNG.
    assert_eq!(
        &bytes[bytes.len() - 12..],
        &[0, 0, 0, 0, b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82]
    );
}

#[test]
fn encoding_is_deterministic() {
    assert_eq!(encode_solid(16, 9, [9, 8, 7]).unwrap(), encode_solid(16, 9, [9, 8, 7]).unwrap());
}

// ── Errors ───────────────────────────────────────────────────────────────

#[test]
fn zero_height_is_rejected() {
    assert!(matches!(
        encode_solid(4, 0, [0, 0, 0]),
        Err(AssetError::InvalidDimensions { .. })
    ));
}

#[test]
fn short_rgb_buffer_is_rejected() {
    let err = encode(2, 2, ColorType::Rgb, &[0; 11]).unwrap_err();
    assert!(matches!(err, AssetError::PixelBufferSize { expected: 12, actual: 11 }));
}
