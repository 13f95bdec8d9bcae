use image::Rgba;
use orderia_assets::android::{
    FOREGROUND_FILE, LAUNCHER_FILE, ROUND_FILE, generate_android_icons, render_foreground,
    render_launcher,
};
use orderia_assets::config::{AndroidConfig, IconStyle};
use orderia_assets::text::Font;

fn style() -> IconStyle {
    IconStyle::default()
}

// ── render_launcher ───────────────────────────────────────────────────────

#[test]
fn launcher_corner_is_opaque_gradient_top() {
    let s = style();
    let img = render_launcher(192, &s, &s.palette().unwrap(), &Font::builtin());
    assert_eq!(img.dimensions(), (192, 192));
    assert_eq!(*img.get_pixel(0, 0), Rgba([0x87, 0x71, 0xd6, 255]));
    assert!(img.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn launcher_plate_interior_is_plate_color() {
    // Plate bounds [32, 32, 160, 160]; (96, 34) is inside the plate but
    // outside both the outline and the inner rim.
    let s = style();
    let img = render_launcher(192, &s, &s.palette().unwrap(), &Font::builtin());
    assert_eq!(*img.get_pixel(96, 34), Rgba([0xf8, 0xf8, 0xf8, 255]));
}

#[test]
fn launcher_shadow_darkens_gradient_beside_plate() {
    // (163, 100) lies in the shadow ellipse [36, 36, 164, 164] but outside
    // the plate.  Column 0 of the same row is plain gradient.
    let s = style();
    let img = render_launcher(192, &s, &s.palette().unwrap(), &Font::builtin());
    let shaded = img.get_pixel(163, 100).0;
    let plain = img.get_pixel(0, 100).0;
    for ch in 0..3 {
        assert!(shaded[ch] < plain[ch], "channel {ch}: {shaded:?} vs {plain:?}");
    }
    assert_eq!(shaded[3], 255);
}

#[test]
fn launcher_draws_label_and_its_shadow() {
    let s = style();
    let p = s.palette().unwrap();
    let img = render_launcher(144, &s, &p, &Font::builtin());
    assert!(img.pixels().any(|px| *px == p.text));
    assert!(img.pixels().any(|px| *px == p.text_shadow));
}

#[test]
fn launcher_without_label_has_no_text_pixels() {
    let s = IconStyle { label: String::new(), ..style() };
    let p = s.palette().unwrap();
    let img = render_launcher(96, &s, &p, &Font::builtin());
    assert!(!img.pixels().any(|px| *px == p.text));
}

// ── render_foreground ─────────────────────────────────────────────────────

#[test]
fn foreground_corners_stay_transparent() {
    let s = style();
    let img = render_foreground(96, &s, &s.palette().unwrap(), &Font::builtin());
    for (x, y) in [(0, 0), (95, 0), (0, 95), (95, 95), (20, 48)] {
        assert_eq!(img.get_pixel(x, y).0[3], 0, "({x},{y})");
    }
}

#[test]
fn foreground_plate_is_smaller_than_launcher_plate() {
    // At 192 the launcher plate starts at 32, the foreground plate at 48.
    let s = style();
    let img = render_foreground(192, &s, &s.palette().unwrap(), &Font::builtin());
    assert_eq!(img.get_pixel(96, 40).0[3], 0);
    assert_eq!(*img.get_pixel(96, 52), Rgba([0xf8, 0xf8, 0xf8, 255]));
}

#[test]
fn foreground_label_has_no_shadow() {
    let s = style();
    let p = s.palette().unwrap();
    let img = render_foreground(192, &s, &p, &Font::builtin());
    assert!(img.pixels().any(|px| *px == p.text));
    assert!(!img.pixels().any(|px| *px == p.text_shadow));
}

// ── generate_android_icons ────────────────────────────────────────────────

#[test]
fn writes_three_icons_per_density() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = AndroidConfig::default();
    let written = generate_android_icons(dir.path(), &cfg, &Font::builtin()).unwrap();
    assert_eq!(written.len(), 15);

    for density in &cfg.densities {
        let d = dir.path().join(&cfg.res_dir).join(&density.name);
        for name in [LAUNCHER_FILE, ROUND_FILE, FOREGROUND_FILE] {
            let img = image::open(d.join(name)).unwrap();
            assert_eq!((img.width(), img.height()), (density.size, density.size), "{name}");
        }
    }
}

#[test]
fn round_icon_is_byte_identical_to_launcher() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = AndroidConfig::default();
    generate_android_icons(dir.path(), &cfg, &Font::builtin()).unwrap();

    let d = dir.path().join(&cfg.res_dir).join("mipmap-xhdpi");
    let square = std::fs::read(d.join(LAUNCHER_FILE)).unwrap();
    let round = std::fs::read(d.join(ROUND_FILE)).unwrap();
    assert_eq!(square, round);
}

#[test]
fn invalid_style_color_fails_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = AndroidConfig::default();
    cfg.style.plate_fill = "white".into();
    assert!(generate_android_icons(dir.path(), &cfg, &Font::builtin()).is_err());
    assert!(!dir.path().join(&cfg.res_dir).exists());
}
