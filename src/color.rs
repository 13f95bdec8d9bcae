// ── Colors ────────────────────────────────────────────────────────────────────
//
// Icons are drawn in 8-bit RGBA using `image::Rgba<u8>`.  Configuration stores
// colors as CSS-style hex strings, parsed here.

use image::Rgba;

use crate::error::{AssetError, Result};

/// Fully transparent black, the initial state of every canvas.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Parse `#rrggbb` (alpha 255) or `#rrggbbaa`.
///
/// The leading `#` is optional; hex digits are case-insensitive.
pub fn parse_hex(s: &str) -> Result<Rgba<u8>> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        return Err(AssetError::InvalidColor(s.to_string()));
    }

    let mut out = [0u8, 0, 0, 255];
    for (i, slot) in out.iter_mut().enumerate().take(digits.len() / 2) {
        *slot = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| AssetError::InvalidColor(s.to_string()))?;
    }
    Ok(Rgba(out))
}

/// `from + (to - from) * ratio`, truncated toward zero.
#[inline]
pub fn lerp_channel(from: u8, to: u8, ratio: f32) -> u8 {
    let v = from as f32 + (to as f32 - from as f32) * ratio;
    v.clamp(0.0, 255.0) as u8
}

/// Composite `src` over `dst` (straight alpha, 8-bit).
pub fn blend_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = src.0[3] as u32;
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }
    let da = dst.0[3] as u32;

    // out_a = sa + da * (1 - sa), all scaled by 255.
    let out_a = sa * 255 + da * (255 - sa);
    if out_a == 0 {
        return TRANSPARENT;
    }

    let mut out = [0u8; 4];
    for i in 0..3 {
        let s = src.0[i] as u32 * sa * 255;
        let d = dst.0[i] as u32 * da * (255 - sa);
        out[i] = ((s + d + out_a / 2) / out_a) as u8;
    }
    out[3] = ((out_a + 127) / 255) as u8;
    Rgba(out)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex_as_opaque() {
        assert_eq!(parse_hex("#5747d6").unwrap(), Rgba([0x57, 0x47, 0xd6, 255]));
    }

    #[test]
    fn parses_eight_digit_hex_with_alpha() {
        assert_eq!(parse_hex("#0000001e").unwrap(), Rgba([0, 0, 0, 30]));
    }

    #[test]
    fn hash_prefix_is_optional_and_case_insensitive() {
        assert_eq!(parse_hex("F8F8F8").unwrap(), Rgba([0xf8, 0xf8, 0xf8, 255]));
    }

    #[test]
    fn rejects_bad_lengths_and_digits() {
        assert!(parse_hex("#fff").is_err());
        assert!(parse_hex("#gggggg").is_err());
        assert!(parse_hex("").is_err());
        assert!(parse_hex("#ééé").is_err());
    }

    #[test]
    fn lerp_truncates_toward_zero() {
        // 135 + (71 - 135) * 0.5 = 103.0
        assert_eq!(lerp_channel(135, 71, 0.5), 103);
        // 113 + (50 - 113) * 0.1 = 106.7 → 106
        assert_eq!(lerp_channel(113, 50, 0.1), 106);
        assert_eq!(lerp_channel(10, 200, 0.0), 10);
    }

    #[test]
    fn blend_opaque_source_replaces() {
        let dst = Rgba([1, 2, 3, 255]);
        let src = Rgba([9, 9, 9, 255]);
        assert_eq!(blend_over(dst, src), src);
    }

    #[test]
    fn blend_transparent_source_keeps_destination() {
        let dst = Rgba([1, 2, 3, 255]);
        assert_eq!(blend_over(dst, TRANSPARENT), dst);
    }

    #[test]
    fn blend_translucent_black_darkens_opaque_destination() {
        let dst = Rgba([200, 200, 200, 255]);
        let out = blend_over(dst, Rgba([0, 0, 0, 30]));
        assert_eq!(out.0[3], 255);
        assert!(out.0[0] < 200 && out.0[0] > 160, "got {:?}", out);
    }

    #[test]
    fn blend_onto_transparent_keeps_source_color() {
        let out = blend_over(TRANSPARENT, Rgba([0, 0, 0, 30]));
        assert_eq!(out, Rgba([0, 0, 0, 30]));
    }
}
