//! Uniform interface between the packer and the compositing program.
//!
//! The names below are the shader-side contract and must match
//! `shaders/shockwave.wgsl` exactly.

use crate::constants::{MAX_SHOCKWAVES, PACKED_VEC4S};
use glam::Vec2;

pub const U_T: &str = "u_t";
pub const U_CENTER_X: &str = "u_centerX";
pub const U_CENTER_Y: &str = "u_centerY";
pub const U_MAX_RADIUS: &str = "u_maxRadius";
pub const U_THICKNESS: &str = "u_thickness";
pub const U_NUM_SHOCKWAVES: &str = "u_numShockwaves";
pub const U_ASPECT_RATIO: &str = "u_aspectRatio";

/// Anything that can receive named uniforms: a GPU uniform block, a test
/// recorder, a GL program wrapper.
pub trait UniformSink {
    fn set_uniform_int(&mut self, name: &str, value: i32);
    fn set_uniform_vec2(&mut self, name: &str, value: Vec2);
    fn set_uniform_float_array(&mut self, name: &str, values: &[f32]);
}

/// std140-compatible uniform block for `shockwave.wgsl`.
///
/// Uniform-space arrays need a 16-byte stride, so each `[f32; 20]` is stored
/// as five `vec4`s and read back in the shader as `arr[i / 4][i % 4]`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShockwaveUniforms {
    pub t: [[f32; 4]; PACKED_VEC4S],
    pub center_x: [[f32; 4]; PACKED_VEC4S],
    pub center_y: [[f32; 4]; PACKED_VEC4S],
    pub max_radius: [[f32; 4]; PACKED_VEC4S],
    pub thickness: [[f32; 4]; PACKED_VEC4S],
    pub aspect_ratio: [f32; 2],
    pub num_shockwaves: i32,
    pub _pad: f32,
}

impl Default for ShockwaveUniforms {
    fn default() -> Self {
        Self {
            aspect_ratio: [1.0, 1.0],
            ..bytemuck::Zeroable::zeroed()
        }
    }
}

impl ShockwaveUniforms {
    pub fn count(&self) -> usize {
        self.num_shockwaves.clamp(0, MAX_SHOCKWAVES as i32) as usize
    }

    pub fn t_at(&self, i: usize) -> f32 {
        lane(&self.t, i)
    }

    pub fn center_at(&self, i: usize) -> Vec2 {
        Vec2::new(lane(&self.center_x, i), lane(&self.center_y, i))
    }

    pub fn max_radius_at(&self, i: usize) -> f32 {
        lane(&self.max_radius, i)
    }

    pub fn thickness_at(&self, i: usize) -> f32 {
        lane(&self.thickness, i)
    }
}

impl UniformSink for ShockwaveUniforms {
    fn set_uniform_int(&mut self, name: &str, value: i32) {
        match name {
            U_NUM_SHOCKWAVES => self.num_shockwaves = value,
            _ => log::warn!("[uniforms] unknown int uniform {name}"),
        }
    }

    fn set_uniform_vec2(&mut self, name: &str, value: Vec2) {
        match name {
            U_ASPECT_RATIO => self.aspect_ratio = value.to_array(),
            _ => log::warn!("[uniforms] unknown vec2 uniform {name}"),
        }
    }

    fn set_uniform_float_array(&mut self, name: &str, values: &[f32]) {
        let dst = match name {
            U_T => &mut self.t,
            U_CENTER_X => &mut self.center_x,
            U_CENTER_Y => &mut self.center_y,
            U_MAX_RADIUS => &mut self.max_radius,
            U_THICKNESS => &mut self.thickness,
            _ => {
                log::warn!("[uniforms] unknown float array uniform {name}");
                return;
            }
        };
        *dst = pack_lanes(values);
    }
}

/// Spread up to [`MAX_SHOCKWAVES`] floats across vec4 lanes, zero-padding the rest.
pub fn pack_lanes(values: &[f32]) -> [[f32; 4]; PACKED_VEC4S] {
    let mut out = [[0.0; 4]; PACKED_VEC4S];
    for (i, v) in values.iter().take(MAX_SHOCKWAVES).enumerate() {
        out[i / 4][i % 4] = *v;
    }
    out
}

#[inline]
fn lane(arr: &[[f32; 4]; PACKED_VEC4S], i: usize) -> f32 {
    arr.get(i / 4).map_or(0.0, |v| v[i % 4])
}
