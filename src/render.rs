//! Rasterization of the chemical fields to RGBA. The engine never clamps its
//! concentrations; clamping to displayable range happens here only.

use rayon::prelude::*;

use crate::Engine;

const B_LOW: [u8; 4] = [12, 16, 48, 255];
const B_MID: [u8; 4] = [40, 90, 170, 255];
const B_HIGH: [u8; 4] = [250, 245, 120, 255];

#[inline]
fn lerp_color(a: [u8; 4], b: [u8; 4], t: f32) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);
    [
        (a[0] as f32 + (b[0] as f32 - a[0] as f32) * t).round() as u8,
        (a[1] as f32 + (b[1] as f32 - a[1] as f32) * t).round() as u8,
        (a[2] as f32 + (b[2] as f32 - a[2] as f32) * t).round() as u8,
        255,
    ]
}

/// Classic grayscale view: gray = clamp((A - B) * 255). High A reads white,
/// B-rich pattern fronts read dark.
pub fn render_gray(engine: &Engine) -> Vec<u8> {
    let (rows, cols) = engine.dimensions();
    let mut rgba = vec![0u8; rows * cols * 4];

    rgba.par_chunks_mut(cols * 4).enumerate().for_each(|(x, row)| {
        for y in 0..cols {
            let c = engine.cell(x, y);
            let g = ((c.a - c.b) * 255.0).clamp(0.0, 255.0) as u8;
            row[y * 4..y * 4 + 4].copy_from_slice(&[g, g, g, 255]);
        }
    });

    rgba
}

/// False-color view of the B concentration, for inspecting pattern growth.
pub fn render_chemical_b(engine: &Engine) -> Vec<u8> {
    let (rows, cols) = engine.dimensions();
    let mut rgba = vec![0u8; rows * cols * 4];

    rgba.par_chunks_mut(cols * 4).enumerate().for_each(|(x, row)| {
        for y in 0..cols {
            let b = engine.cell(x, y).b.clamp(0.0, 1.0) as f32;
            let color = if b < 0.5 {
                lerp_color(B_LOW, B_MID, b / 0.5)
            } else {
                lerp_color(B_MID, B_HIGH, (b - 0.5) / 0.5)
            };
            row[y * 4..y * 4 + 4].copy_from_slice(&color);
        }
    });

    rgba
}
