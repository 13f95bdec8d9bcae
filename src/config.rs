// ── Generator configuration ───────────────────────────────────────────────────
//
// Everything the generators produce is described here.  `Default` reproduces
// the app's stock asset set; a JSON file may override any subset of fields.

use std::path::{Path, PathBuf};

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::color::parse_hex;
use crate::error::{AssetError, Result};
use crate::png::dimensions_ok;

// ── Top level ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub placeholders: PlaceholderConfig,
    pub android: AndroidConfig,
}

impl GeneratorConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| AssetError::io(path, e))?;
        Self::from_json(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every color parses and every image size is one PNG can hold.
    pub fn validate(&self) -> Result<()> {
        self.placeholders.rgb()?;
        for f in &self.placeholders.files {
            if !dimensions_ok(f.width, f.height) {
                return Err(AssetError::InvalidDimensions { width: f.width, height: f.height });
            }
        }
        for d in &self.android.densities {
            if !dimensions_ok(d.size, d.size) {
                return Err(AssetError::InvalidDimensions { width: d.size, height: d.size });
            }
        }
        self.android.style.palette()?;
        Ok(())
    }
}

// ── Placeholders ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    /// Shared fill color, `#rrggbb`.
    pub color: String,
    pub files: Vec<PlaceholderFile>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderFile {
    /// Output path relative to the generation root.
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl PlaceholderFile {
    fn new(path: &str, width: u32, height: u32) -> Self {
        Self { path: PathBuf::from(path), width, height }
    }
}

impl PlaceholderConfig {
    /// The fill color as RGB; alpha is ignored.
    pub fn rgb(&self) -> Result<[u8; 3]> {
        let [r, g, b, _] = parse_hex(&self.color)?.0;
        Ok([r, g, b])
    }
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            color: "#2088cb".into(),
            files: vec![
                PlaceholderFile::new("assets/icon.png", 1024, 1024),
                PlaceholderFile::new("assets/adaptive-icon.png", 1024, 1024),
                PlaceholderFile::new("assets/splash.png", 1284, 2778),
                PlaceholderFile::new("assets/favicon.png", 48, 48),
            ],
        }
    }
}

// ── Android launcher icons ───────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidConfig {
    /// Resource directory relative to the generation root.
    pub res_dir: PathBuf,
    pub densities: Vec<Density>,
    pub style: IconStyle,
    /// Optional bitmap font; the built-in font is used when absent or broken.
    pub font: Option<FontSource>,
}

impl Default for AndroidConfig {
    fn default() -> Self {
        Self {
            res_dir: ["android", "app", "src", "main", "res"].iter().collect(),
            densities: vec![
                Density::new("mipmap-mdpi", 48),
                Density::new("mipmap-hdpi", 72),
                Density::new("mipmap-xhdpi", 96),
                Density::new("mipmap-xxhdpi", 144),
                Density::new("mipmap-xxxhdpi", 192),
            ],
            style: IconStyle::default(),
            font: None,
        }
    }
}

/// One `mipmap-*` bucket and its square icon size in pixels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Density {
    pub name: String,
    pub size: u32,
}

impl Density {
    fn new(name: &str, size: u32) -> Self {
        Self { name: name.into(), size }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSource {
    pub atlas: PathBuf,
    pub glyphs: PathBuf,
}

/// Colors and label of the launcher icon, as hex strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconStyle {
    pub label: String,
    pub gradient_top: String,
    pub gradient_bottom: String,
    pub plate_fill: String,
    pub plate_outline: String,
    pub plate_rim: String,
    pub shadow: String,
    pub text: String,
    pub text_shadow: String,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            label: "Orderia".into(),
            gradient_top: "#8771d6".into(),
            gradient_bottom: "#4732a6".into(),
            plate_fill: "#f8f8f8".into(),
            plate_outline: "#e8e8e8".into(),
            plate_rim: "#e0e0e0".into(),
            shadow: "#0000001e".into(),
            text: "#999999".into(),
            text_shadow: "#c0c0c0".into(),
        }
    }
}

/// [`IconStyle`] with every color parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct IconPalette {
    pub gradient_top: Rgba<u8>,
    pub gradient_bottom: Rgba<u8>,
    pub plate_fill: Rgba<u8>,
    pub plate_outline: Rgba<u8>,
    pub plate_rim: Rgba<u8>,
    pub shadow: Rgba<u8>,
    pub text: Rgba<u8>,
    pub text_shadow: Rgba<u8>,
}

impl IconStyle {
    pub fn palette(&self) -> Result<IconPalette> {
        Ok(IconPalette {
            gradient_top: parse_hex(&self.gradient_top)?,
            gradient_bottom: parse_hex(&self.gradient_bottom)?,
            plate_fill: parse_hex(&self.plate_fill)?,
            plate_outline: parse_hex(&self.plate_outline)?,
            plate_rim: parse_hex(&self.plate_rim)?,
            shadow: parse_hex(&self.shadow)?,
            text: parse_hex(&self.text)?,
            text_shadow: parse_hex(&self.text_shadow)?,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
