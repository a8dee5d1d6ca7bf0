use super::program::ShockwaveProgram;
use super::quad::QuadVertex;
use glam::Vec2;
use shockwave_core::{ShockwaveEffect, ShockwaveError, TriggerRequest, Viewport};
use wgpu;

/// Post-processor the host drives once per frame: owns the live shockwaves
/// and, once [`initialize`](Self::initialize)d, the GPU program they feed.
#[derive(Default)]
pub struct ShockwavePostProcessor {
    effect: ShockwaveEffect,
    program: Option<ShockwaveProgram>,
}

impl ShockwavePostProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile the compositing program for `target_format`.
    pub fn initialize(&mut self, device: &wgpu::Device, target_format: wgpu::TextureFormat) {
        self.program = Some(ShockwaveProgram::new(device, target_format));
    }

    pub fn is_initialized(&self) -> bool {
        self.program.is_some()
    }

    /// Bind the render-target size the effect is laid out against.
    pub fn init(&mut self, viewport: Viewport) {
        self.effect.set_viewport(viewport);
    }

    /// Vertex layout of the full-screen quad the program expects.
    pub fn layout(&self) -> Result<wgpu::VertexBufferLayout<'static>, ShockwaveError> {
        self.program()?;
        Ok(QuadVertex::layout())
    }

    pub fn program(&self) -> Result<&ShockwaveProgram, ShockwaveError> {
        self.program.as_ref().ok_or(ShockwaveError::NotInitialized)
    }

    pub fn trigger_shockwave(
        &mut self,
        location: Vec2,
        duration_ms: f32,
        speed: f32,
        max_radius: f32,
        thickness: f32,
    ) {
        self.effect
            .trigger_shockwave(location, duration_ms, speed, max_radius, thickness);
    }

    pub fn trigger(&mut self, req: TriggerRequest) {
        self.effect.trigger(req);
    }

    /// Advance, evict, pack and upload. Without a viewport nothing happens;
    /// without a program the upload is skipped.
    pub fn on_update(&mut self, queue: &wgpu::Queue, elapsed_ms: f32) {
        let Some(packed) = self.effect.on_update(elapsed_ms) else {
            return;
        };
        match self.program.as_mut() {
            Some(program) => program.upload(queue, packed),
            None => log::debug!("[shockwave] program not initialized; skipping upload"),
        }
    }

    pub fn bind_source(
        &mut self,
        device: &wgpu::Device,
        source: &wgpu::TextureView,
    ) -> Result<(), ShockwaveError> {
        self.program
            .as_mut()
            .ok_or(ShockwaveError::NotInitialized)?
            .bind_source(device, source);
        Ok(())
    }

    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
    ) -> Result<(), ShockwaveError> {
        self.program()?.draw(encoder, target)
    }

    pub fn effect(&self) -> &ShockwaveEffect {
        &self.effect
    }
}
