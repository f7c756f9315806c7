//! Built-in background model: a color-keyed matte grown from the border.
//!
//! ## Algorithm
//! 1. Estimate the backdrop color as the per-channel median of the border pixels
//! 2. Seed a flood fill with every border pixel close to that color
//! 3. Grow through 4-connected neighbours while they stay within `tolerance`
//! 4. Pixels reached by the fill get alpha from their color distance:
//!    0 within `tolerance`, a smootherstep ramp across `feather`, opaque beyond
//!
//! Only the region connected to the border is keyed out, so subject pixels
//! that happen to match the backdrop color survive when they are enclosed.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{BackgroundRemover, SegmentationError};
use crate::decode::{decode, Bitmap, ColorMode};
use crate::encode::encode_png;

/// Tuning for [`BorderMatte`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderMatteConfig {
    /// Euclidean RGB distance (0 to ~441) treated as pure background.
    pub tolerance: f32,
    /// Width of the soft edge beyond `tolerance`. 0 gives a hard matte.
    pub feather: f32,
}

impl Default for BorderMatteConfig {
    fn default() -> Self {
        Self {
            tolerance: 32.0,
            feather: 24.0,
        }
    }
}

/// Keys out the backdrop connected to the image border.
#[derive(Debug, Clone, Default)]
pub struct BorderMatte {
    config: BorderMatteConfig,
}

impl BorderMatte {
    pub fn new(config: BorderMatteConfig) -> Self {
        Self { config }
    }

    /// Compute the matted RGBA bitmap directly.
    pub fn matte(&self, bitmap: &Bitmap) -> Bitmap {
        let rgba = to_rgba(bitmap);
        if rgba.is_empty() {
            return rgba;
        }

        let width = rgba.width as usize;
        let height = rgba.height as usize;
        let backdrop = backdrop_color(&rgba);
        let tolerance = self.config.tolerance.max(0.0);
        let feather = self.config.feather.max(0.0);
        let reach = tolerance + feather;

        let distance = |idx: usize| -> f32 {
            let px = &rgba.pixels[idx * 4..idx * 4 + 3];
            let dr = px[0] as f32 - backdrop[0];
            let dg = px[1] as f32 - backdrop[1];
            let db = px[2] as f32 - backdrop[2];
            (dr * dr + dg * dg + db * db).sqrt()
        };

        let mut visited = vec![false; width * height];
        let mut queue = VecDeque::new();
        for idx in border_indices(width, height) {
            if !visited[idx] && distance(idx) <= reach {
                visited[idx] = true;
                queue.push_back(idx);
            }
        }

        let mut out = rgba.clone();
        let mut keyed = 0usize;
        while let Some(idx) = queue.pop_front() {
            let d = distance(idx);
            let alpha = &mut out.pixels[idx * 4 + 3];
            *alpha = (*alpha).min(matte_alpha(d, tolerance, feather));
            keyed += 1;

            // Soft-edge pixels are kept but don't spread the fill
            if d > tolerance {
                continue;
            }
            let (x, y) = (idx % width, idx / width);
            let neighbours = [
                (x > 0).then(|| idx - 1),
                (x + 1 < width).then(|| idx + 1),
                (y > 0).then(|| idx - width),
                (y + 1 < height).then(|| idx + width),
            ];
            for next in neighbours.into_iter().flatten() {
                if !visited[next] && distance(next) <= reach {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        debug!(?backdrop, keyed, total = width * height, "Border matte computed");
        out
    }
}

impl BackgroundRemover for BorderMatte {
    fn name(&self) -> &str {
        "border-matte"
    }

    fn remove(&self, png: &[u8]) -> Result<Vec<u8>, SegmentationError> {
        let bitmap = decode(png).map_err(|e| SegmentationError::InvalidInput(e.to_string()))?;
        encode_png(&self.matte(&bitmap)).map_err(|e| SegmentationError::ModelFailed(e.to_string()))
    }
}

/// Smootherstep interpolation: `6t^5 - 15t^4 + 10t^3`, clamped to 0..=1.
#[inline]
fn smootherstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn matte_alpha(distance: f32, tolerance: f32, feather: f32) -> u8 {
    if distance <= tolerance {
        0
    } else if feather <= 0.0 {
        255
    } else {
        (smootherstep((distance - tolerance) / feather) * 255.0).round() as u8
    }
}

fn to_rgba(bitmap: &Bitmap) -> Bitmap {
    match bitmap.mode {
        ColorMode::Rgba8 => bitmap.clone(),
        ColorMode::Rgb8 => Bitmap::new(
            bitmap.width,
            bitmap.height,
            ColorMode::Rgba8,
            bitmap.to_rgba_pixels(),
        ),
    }
}

/// Pixel indices along the outer edge, each listed once.
fn border_indices(width: usize, height: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..width).collect();
    if height > 1 {
        indices.extend((0..width).map(|x| (height - 1) * width + x));
    }
    for y in 1..height.saturating_sub(1) {
        indices.push(y * width);
        if width > 1 {
            indices.push(y * width + width - 1);
        }
    }
    indices
}

/// Per-channel median of the border pixels.
fn backdrop_color(rgba: &Bitmap) -> [f32; 3] {
    let border = border_indices(rgba.width as usize, rgba.height as usize);
    let mut color = [0.0; 3];
    for (channel, slot) in color.iter_mut().enumerate() {
        let mut values: Vec<u8> = border
            .iter()
            .map(|&idx| rgba.pixels[idx * 4 + channel])
            .collect();
        values.sort_unstable();
        *slot = values[values.len() / 2] as f32;
    }
    color
}
