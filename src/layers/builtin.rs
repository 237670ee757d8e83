//! Builtin layer set

use super::{Color, Layer};

const LIGHTEN_STEP: u8 = 40;
const TINT_STRENGTH: f64 = 0.5;

fn hue_to_color(hue: f64) -> Color {
    // HSV with full saturation and value
    let h = hue.rem_euclid(360.0) / 60.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    let to_u8 = |v: f64| (v * 255.0).round() as u8;
    Color::rgb(to_u8(r), to_u8(g), to_u8(b))
}

/// The default layers, indices 0..=8.
pub(super) fn builtin_layers() -> Vec<Layer> {
    vec![
        Layer::new("rainbow", 0, "rainbow", |_, timestamp, x, y| {
            hue_to_color(timestamp * 90.0 + (x + y) as f64 * 12.0)
        })
        .with_background(Color::rgb(255, 128, 0)),
        Layer::new("black", 1, "black", |_, _, _, _| Color::BLACK)
            .with_background(Color::BLACK),
        Layer::new("lighten", 2, "lighten", |c, _, _, _| {
            c.map(|v| v.saturating_add(LIGHTEN_STEP))
        })
        .with_background(Color::rgb(220, 220, 220)),
        Layer::new("invert", 3, "invert", |c, _, _, _| c.inverted())
            .with_background(Color::rgb(128, 128, 128)),
        Layer::new("red", 4, "red", |c, _, _, _| {
            c.blend(Color::rgb(255, 0, 0), TINT_STRENGTH)
        })
        .with_background(Color::rgb(255, 0, 0)),
        Layer::new("green", 5, "green", |c, _, _, _| {
            c.blend(Color::rgb(0, 255, 0), TINT_STRENGTH)
        })
        .with_background(Color::rgb(0, 255, 0)),
        Layer::new("blue", 6, "blue", |c, _, _, _| {
            c.blend(Color::rgb(0, 0, 255), TINT_STRENGTH)
        })
        .with_background(Color::rgb(0, 0, 255)),
        Layer::new("sparkle", 7, "sparkle", |c, timestamp, x, y| {
            // Each cell flashes white for one tick in every eight
            let tick = (timestamp * 10.0) as usize;
            if (tick + x * 3 + y * 5) % 8 == 0 {
                Color::WHITE
            } else {
                c
            }
        })
        .with_background(Color::rgb(255, 255, 160)),
        Layer::new("darken", 8, "darken", |c, _, _, _| {
            c.map(|v| v.saturating_sub(LIGHTEN_STEP))
        })
        .with_background(Color::rgb(60, 60, 60)),
    ]
}
