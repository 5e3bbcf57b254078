//! Score-grid RGBA rendering.
//!
//! The colour contract consumers rely on: scores are
//! normalized against `max_score`, mapped onto a blue-to-red hue ramp
//! (`hue = (1 - norm) * 240`) with an inline HSL-to-RGB conversion at
//! full saturation, and written at a fixed alpha of 150. Zero-score and
//! non-land cells are fully transparent. Output rows are flipped so image
//! row 0 is the northern edge, matching screen conventions.

use crate::engine::ScoreGrid;

const ALPHA: u8 = 150;

fn hue_to_rgb(hue: f32) -> (f32, f32, f32) {
    // HSL to RGB with s = 1, l = 0.5, so chroma C = 1.
    let x = 1.0 - ((hue / 60.0) % 2.0 - 1.0).abs();
    match hue {
        h if h < 60.0 => (1.0, x, 0.0),
        h if h < 120.0 => (x, 1.0, 0.0),
        h if h < 180.0 => (0.0, 1.0, x),
        h if h < 240.0 => (0.0, x, 1.0),
        h if h < 300.0 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    }
}

/// Render a score grid into an RGBA byte buffer
/// (`width * height * 4`, image row 0 = north).
pub fn render_rgba(score: &ScoreGrid) -> Vec<u8> {
    let width = score.width();
    let height = score.height();
    let values = score.values.values();
    let mask = score.land_mask.values();
    // An all-zero grid normalizes against 1 instead of dividing by zero.
    let denom = if score.max_score > 0.0 {
        score.max_score
    } else {
        1.0
    };

    let mut pixels = vec![0u8; width * height * 4];
    for y in 0..height {
        let grid_row = height - 1 - y;
        for x in 0..width {
            let i = grid_row * width + x;
            let v = values[i];
            if v <= 0.0 || !mask[i] {
                continue; // transparent
            }
            let norm = (v / denom).min(1.0);
            let hue = (1.0 - norm) * 240.0;
            let (r, g, b) = hue_to_rgb(hue);
            let p = (y * width + x) * 4;
            pixels[p] = (r * 255.0).round() as u8;
            pixels[p + 1] = (g * 255.0).round() as u8;
            pixels[p + 2] = (b * 255.0).round() as u8;
            pixels[p + 3] = ALPHA;
        }
    }
    pixels
}
