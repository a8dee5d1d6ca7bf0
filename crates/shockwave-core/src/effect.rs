use crate::config::{TriggerRequest, Viewport};
use crate::packer::PackedShockwaves;
use crate::registry::ShockwaveRegistry;
use crate::uniforms::UniformSink;
use glam::Vec2;

/// Frame-level driver: registry + packing for one render target.
///
/// GPU-agnostic; the wgpu post-processor wraps this and uploads the packed
/// parameters. Until a viewport is bound, [`ShockwaveEffect::on_update`] does
/// nothing at all, triggers are still recorded.
#[derive(Clone, Debug, Default)]
pub struct ShockwaveEffect {
    registry: ShockwaveRegistry,
    viewport: Option<Viewport>,
    packed: PackedShockwaves,
}

impl ShockwaveEffect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind (or rebind after a resize) the render-target dimensions.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn trigger_shockwave(
        &mut self,
        location: Vec2,
        duration_ms: f32,
        speed: f32,
        max_radius: f32,
        thickness: f32,
    ) {
        self.registry
            .trigger(location, duration_ms, speed, max_radius, thickness);
    }

    pub fn trigger(&mut self, req: TriggerRequest) {
        self.registry.trigger_request(req);
    }

    /// Advance, evict and pack. Returns the fresh parameters, or `None` when
    /// no viewport is bound yet.
    pub fn on_update(&mut self, elapsed_ms: f32) -> Option<&PackedShockwaves> {
        let viewport = self.viewport?;
        self.registry.advance(elapsed_ms);
        self.packed.repack(self.registry.live_instances(), viewport);
        Some(&self.packed)
    }

    /// [`Self::on_update`] followed by an upload into `sink`.
    pub fn update_into(&mut self, elapsed_ms: f32, sink: &mut dyn UniformSink) -> bool {
        match self.on_update(elapsed_ms) {
            Some(packed) => {
                packed.upload(sink);
                true
            }
            None => false,
        }
    }

    pub fn registry(&self) -> &ShockwaveRegistry {
        &self.registry
    }

    pub fn packed(&self) -> &PackedShockwaves {
        &self.packed
    }
}
