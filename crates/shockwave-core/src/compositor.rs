//! CPU reference of the per-pixel shockwave compositor.
//!
//! Mirrors `shaders/shockwave.wgsl` line for line: same constants, same
//! order of operations. Every output pixel depends only on its uv, the
//! packed parameters and the read-only source buffer, so rows can be split
//! across threads freely.

use crate::constants::*;
use crate::packer::PackedShockwaves;
use glam::{Vec2, Vec3, Vec4};

/// A read-only color buffer addressed in normalized uv with a bottom-left
/// origin (the previous pass's output).
pub trait ColorSource {
    fn sample(&self, uv: Vec2) -> Vec4;
}

impl<F: Fn(Vec2) -> Vec4> ColorSource for F {
    fn sample(&self, uv: Vec2) -> Vec4 {
        self(uv)
    }
}

/// Hermite smoothstep, total over all inputs: equal edges act as a step.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Signed distortion strength of one ring at eased time `t`.
///
/// Non-zero only within `thickness` of the ring front, and faded in over the
/// first 5% of `t` and out over the second half.
pub fn offset_strength(t: f32, dir: Vec2, max_radius: f32, thickness: f32, aspect: Vec2) -> f32 {
    let mut dist = (dir / aspect).length() - t * max_radius;
    dist *= 1.0 - smoothstep(0.0, thickness, dist.abs());

    dist *= smoothstep(0.0, FADE_IN_END, t);
    dist *= 1.0 - smoothstep(FADE_OUT_START, FADE_OUT_END, t);
    dist
}

/// Summed displacement direction and per-channel offsets at `uv`.
pub fn accumulate(uv: Vec2, packed: &PackedShockwaves) -> (Vec2, Vec3) {
    let mut total_dir = Vec2::ZERO;
    let mut total_offsets = Vec3::ZERO;
    let aspect = packed.aspect_ratio;
    for i in 0..packed.count.min(MAX_SHOCKWAVES) {
        let t = packed.t[i];
        let center = Vec2::new(packed.center_x[i], packed.center_y[i]);
        let dir = center - uv;
        let (r, w) = (packed.max_radius[i], packed.thickness[i]);
        let rd = offset_strength(t + CHANNEL_PHASE_OFFSET, dir, r, w, aspect);
        let gd = offset_strength(t, dir, r, w, aspect);
        let bd = offset_strength(t - CHANNEL_PHASE_OFFSET, dir, r, w, aspect);
        total_dir += dir.normalize_or_zero();
        total_offsets += Vec3::new(rd, gd, bd);
    }
    (total_dir, total_offsets)
}

/// Final color of the pixel at `uv`.
pub fn composite_pixel<S: ColorSource + ?Sized>(
    uv: Vec2,
    packed: &PackedShockwaves,
    source: &S,
) -> Vec4 {
    let (total_dir, off) = accumulate(uv, packed);
    let r = source.sample(uv + total_dir * off.x).x;
    let g = source.sample(uv + total_dir * off.y).y;
    let b = source.sample(uv + total_dir * off.z).z;

    let shading = off.y * SHADING_GAIN;
    Vec4::new(r + shading, g + shading, b + shading, 1.0)
}

/// Row-major RGBA float image; row 0 is the top of the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Vec4>,
}

impl ColorBuffer {
    pub fn new(width: u32, height: u32, fill: Vec4) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Vec4) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Black and white squares, `cells_x` across; the demo background.
    pub fn checkerboard(width: u32, height: u32, cells_x: f32) -> Self {
        let cell = (width as f32 / cells_x.max(1.0)).max(1.0);
        Self::from_fn(width, height, |x, y| {
            let cx = (x as f32 / cell) as u32;
            let cy = (y as f32 / cell) as u32;
            if (cx + cy) % 2 == 0 {
                Vec4::ONE
            } else {
                Vec4::new(0.0, 0.0, 0.0, 1.0)
            }
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Vec4] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Vec4 {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Normalized coordinate of a pixel center, bottom-left origin.
    pub fn uv_of(&self, x: u32, y: u32) -> Vec2 {
        Vec2::new(
            (x as f32 + 0.5) / self.width as f32,
            1.0 - (y as f32 + 0.5) / self.height as f32,
        )
    }

    fn texel(&self, x: i64, y: i64) -> Vec4 {
        let x = x.clamp(0, self.width as i64 - 1) as u32;
        let y = y.clamp(0, self.height as i64 - 1) as u32;
        self.get(x, y)
    }
}

impl ColorSource for ColorBuffer {
    /// Bilinear, clamp-to-edge.
    fn sample(&self, uv: Vec2) -> Vec4 {
        if self.pixels.is_empty() {
            return Vec4::ZERO;
        }
        let fx = uv.x * self.width as f32 - 0.5;
        let fy = (1.0 - uv.y) * self.height as f32 - 0.5;
        let x0 = fx.floor();
        let y0 = fy.floor();
        let (tx, ty) = (fx - x0, fy - y0);
        let (x0, y0) = (x0 as i64, y0 as i64);

        let top = self.texel(x0, y0).lerp(self.texel(x0 + 1, y0), tx);
        let bottom = self.texel(x0, y0 + 1).lerp(self.texel(x0 + 1, y0 + 1), tx);
        top.lerp(bottom, ty)
    }
}

/// Run the compositor over every pixel of `source`.
pub fn composite_frame(source: &ColorBuffer, packed: &PackedShockwaves) -> ColorBuffer {
    ColorBuffer::from_fn(source.width(), source.height(), |x, y| {
        composite_pixel(source.uv_of(x, y), packed, source)
    })
}
