use crate::constants::*;
use crate::error::{Result, ShockwaveError};
use glam::Vec2;
use rand::Rng;

/// Parameters of a single shockwave trigger, as passed to
/// [`ShockwaveRegistry::trigger`](crate::ShockwaveRegistry::trigger).
///
/// `location` is normalized screen space with a top-left origin, matching
/// pointer coordinates divided by the viewport size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRequest {
    pub location: Vec2,
    pub duration_ms: f32,
    pub speed: f32,
    pub max_radius: f32,
    pub thickness: f32,
}

/// Render-target dimensions in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ShockwaveError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// `(1.0, width / height)`; dividing a uv-space offset by this makes
    /// distances round on non-square targets.
    pub fn aspect_ratio(&self) -> Vec2 {
        Vec2::new(1.0, self.width as f32 / self.height as f32)
    }

    /// Normalize a pixel position (top-left origin) to [0, 1] on both axes.
    pub fn normalize_px(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x / self.width as f32).clamp(0.0, 1.0),
            (y / self.height as f32).clamp(0.0, 1.0),
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Uniform ranges for the click-to-spawn demo: each parameter is drawn from
/// `[min, min + span)`.
#[derive(Clone, Debug)]
pub struct TriggerRanges {
    pub duration_ms: (f32, f32),
    pub speed: (f32, f32),
    pub max_radius: (f32, f32),
    pub thickness: (f32, f32),
}

impl Default for TriggerRanges {
    fn default() -> Self {
        Self {
            duration_ms: (TRIGGER_DURATION_MS_MIN, TRIGGER_DURATION_MS_SPAN),
            speed: (TRIGGER_SPEED_MIN, TRIGGER_SPEED_SPAN),
            max_radius: (TRIGGER_MAX_RADIUS_MIN, TRIGGER_MAX_RADIUS_SPAN),
            thickness: (TRIGGER_THICKNESS_MIN, TRIGGER_THICKNESS_SPAN),
        }
    }
}

impl TriggerRanges {
    pub fn sample<R: Rng>(&self, rng: &mut R, location: Vec2) -> TriggerRequest {
        let mut draw = |(min, span): (f32, f32)| min + rng.gen::<f32>() * span;
        TriggerRequest {
            location,
            duration_ms: draw(self.duration_ms),
            speed: draw(self.speed),
            max_radius: draw(self.max_radius),
            thickness: draw(self.thickness),
        }
    }
}
