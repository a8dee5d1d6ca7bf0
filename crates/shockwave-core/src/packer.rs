use crate::config::Viewport;
use crate::constants::{EASE_EXPONENT, MAX_SHOCKWAVES};
use crate::registry::ShockwaveInstance;
use crate::uniforms::*;
use glam::Vec2;

/// Eased ring progress: `age^(1/1.5)`, fast start and slow finish.
///
/// Negative ages (only reachable with a negative speed) are treated as 0.
#[inline]
pub fn eased_progress(age: f32) -> f32 {
    age.max(0.0).powf(1.0 / EASE_EXPONENT)
}

/// Live shockwaves flattened into fixed-capacity parallel arrays.
///
/// Only the first `count` slots are meaningful; the rest are zero and never
/// read by the compositor.
#[derive(Clone, Debug, PartialEq)]
pub struct PackedShockwaves {
    pub t: [f32; MAX_SHOCKWAVES],
    pub center_x: [f32; MAX_SHOCKWAVES],
    /// Already flipped to a bottom-left origin.
    pub center_y: [f32; MAX_SHOCKWAVES],
    pub max_radius: [f32; MAX_SHOCKWAVES],
    pub thickness: [f32; MAX_SHOCKWAVES],
    pub count: usize,
    pub aspect_ratio: Vec2,
}

impl Default for PackedShockwaves {
    fn default() -> Self {
        Self {
            t: [0.0; MAX_SHOCKWAVES],
            center_x: [0.0; MAX_SHOCKWAVES],
            center_y: [0.0; MAX_SHOCKWAVES],
            max_radius: [0.0; MAX_SHOCKWAVES],
            thickness: [0.0; MAX_SHOCKWAVES],
            count: 0,
            aspect_ratio: Vec2::ONE,
        }
    }
}

impl PackedShockwaves {
    pub fn pack(live: &[ShockwaveInstance], viewport: Viewport) -> Self {
        let mut packed = Self::default();
        packed.repack(live, viewport);
        packed
    }

    /// Refill in place from the registry's live slice.
    ///
    /// If handed more than [`MAX_SHOCKWAVES`] instances, the newest ones win,
    /// mirroring the registry's eviction order.
    pub fn repack(&mut self, live: &[ShockwaveInstance], viewport: Viewport) {
        let live = &live[live.len().saturating_sub(MAX_SHOCKWAVES)..];
        *self = Self {
            aspect_ratio: viewport.aspect_ratio(),
            ..Self::default()
        };
        for (i, s) in live.iter().enumerate() {
            self.t[i] = eased_progress(s.age());
            self.center_x[i] = s.center.x;
            self.center_y[i] = 1.0 - s.center.y;
            self.max_radius[i] = s.max_radius;
            self.thickness[i] = s.thickness;
        }
        self.count = live.len();
        log::trace!("[shockwave] packed {} waves", self.count);
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Push every uniform by name, arrays trimmed to the live count.
    pub fn upload(&self, sink: &mut dyn UniformSink) {
        let n = self.count;
        sink.set_uniform_int(U_NUM_SHOCKWAVES, n as i32);
        sink.set_uniform_vec2(U_ASPECT_RATIO, self.aspect_ratio);
        sink.set_uniform_float_array(U_T, &self.t[..n]);
        sink.set_uniform_float_array(U_MAX_RADIUS, &self.max_radius[..n]);
        sink.set_uniform_float_array(U_CENTER_X, &self.center_x[..n]);
        sink.set_uniform_float_array(U_CENTER_Y, &self.center_y[..n]);
        sink.set_uniform_float_array(U_THICKNESS, &self.thickness[..n]);
    }

    /// Convenience: the GPU uniform block for these parameters.
    pub fn to_uniforms(&self) -> ShockwaveUniforms {
        let mut block = ShockwaveUniforms::default();
        self.upload(&mut block);
        block
    }
}
