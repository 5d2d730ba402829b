// File: crates/bars-render-skia/tests/snapshot.rs
// Purpose: Golden snapshots with bless flow.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and skips the golden comparison.
// - Either way, decoded pixels are checked against the laid-out geometry.

use bars_core::{threshold_colors, BarChart, Color, Size, Theme};
use bars_render_skia::{Frame, SkiaRenderer};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn rgba(c: Color) -> [u8; 4] {
    [c.r, c.g, c.b, 255]
}

fn decode(bytes: &[u8]) -> image::RgbaImage {
    image::load_from_memory(bytes).expect("decode png").to_rgba8()
}

fn render_to_bytes(frame: &mut Frame, width: f32, theme: &Theme) -> Vec<u8> {
    frame.layout(width);
    let mut renderer = SkiaRenderer::new(theme);
    renderer.draw_labels = false; // deterministic
    renderer.render_to_png_bytes(frame).expect("render bytes")
}

fn snapshot_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name)
}

#[test]
fn golden_ramp() {
    let chart = BarChart::new(8).unwrap().with_spacing(4.0);
    for i in 0..8 {
        chart.set_value(i, i as f64 / 7.0);
    }
    let mut frame = Frame::new();
    frame.push(chart);
    let theme = Theme::dark();
    let bytes = render_to_bytes(&mut frame, 240.0, &theme);
    write_or_compare(&snapshot_path("ramp.png"), &bytes);

    let img = decode(&bytes);
    assert_eq!(img.dimensions(), (240, 100));
    let bars = frame.charts()[0].bars();
    for bar in bars {
        let cx = (bar.foreground.x + bar.foreground.width * 0.5) as u32;
        let bottom = img.get_pixel(cx, 99).0;
        let top = img.get_pixel(cx, 0).0;
        if bar.value > 0.0 {
            assert_eq!(bottom, rgba(theme.primary), "bar {} bottom", bar.index);
        } else {
            assert_eq!(bottom, rgba(theme.input_background), "empty bar {} bottom", bar.index);
        }
        if bar.value < 1.0 {
            assert_eq!(top, rgba(theme.input_background), "bar {} top", bar.index);
        } else {
            assert_eq!(top, rgba(theme.primary), "full bar {} top", bar.index);
        }
    }
    // bar 0 spans 0..26.5, bar 1 starts at 30.5
    assert_eq!(img.get_pixel(28, 50).0, rgba(theme.background), "gap between bars");
}

#[test]
fn golden_traffic_light_stack() {
    let mut frame = Frame::new();
    for j in 0..3 {
        let chart = BarChart::new(5)
            .unwrap()
            .with_spacing(5.0)
            .with_bar_min_size(Size::new(30.0, 50.0))
            .with_theme(Theme::light())
            .with_color_fn(threshold_colors(vec![(0.2, Color::RED), (0.4, Color::YELLOW)], Color::GREEN));
        for i in 0..5 {
            chart.set_value(i, ((j as f64) + 0.1 * i as f64).sin().abs());
        }
        frame.push(chart);
    }
    let theme = Theme::light();
    let bytes = render_to_bytes(&mut frame, 200.0, &theme);
    write_or_compare(&snapshot_path("traffic_light_stack.png"), &bytes);

    let img = decode(&bytes);
    assert_eq!(img.dimensions(), (200, 158));
    let traffic = |v: f64| if v < 0.2 { Color::RED } else if v < 0.4 { Color::YELLOW } else { Color::GREEN };
    let mut checked = 0;
    for (origin, chart) in frame.placements() {
        assert_eq!(chart.size().height, 50.0);
        for bar in chart.bars() {
            let cx = (bar.foreground.x + bar.foreground.width * 0.5) as u32;
            if bar.background.height >= 2.0 {
                let top = img.get_pixel(cx, origin.y as u32).0;
                assert_eq!(top, rgba(theme.input_background), "chart at {} bar {} top", origin.y, bar.index);
            }
            // skip fills too thin to cover the bottom row
            if bar.foreground.height >= 2.0 {
                let bottom = img.get_pixel(cx, origin.y as u32 + 49).0;
                assert_eq!(bottom, rgba(traffic(bar.value)), "chart at {} bar {} fill", origin.y, bar.index);
                checked += 1;
            }
        }
    }
    assert!(checked >= 10);
    // gap between the first and second chart
    assert_eq!(img.get_pixel(100, 52).0, rgba(theme.background));
}
