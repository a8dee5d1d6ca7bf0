use super::processor::ShockwavePostProcessor;
use super::scene::ScenePass;
use super::targets::SceneTarget;
use shockwave_core::{ShockwaveError, TriggerRequest, Viewport};
use wgpu;

/// Scene pass into an offscreen target, then the shockwave pass onto the
/// swapchain. Shared by the native and web hosts.
pub struct ShockwaveRenderer {
    scene: ScenePass,
    target: SceneTarget,
    post: ShockwavePostProcessor,
    viewport: Viewport,
}

impl ShockwaveRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
    ) -> Result<Self, ShockwaveError> {
        let target = SceneTarget::new(device, viewport.width, viewport.height);
        let scene = ScenePass::new(device, target.format);
        let mut post = ShockwavePostProcessor::new();
        post.initialize(device, surface_format);
        post.init(viewport);
        post.bind_source(device, &target.view)?;
        Ok(Self {
            scene,
            target,
            post,
            viewport,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn resize(
        &mut self,
        device: &wgpu::Device,
        viewport: Viewport,
    ) -> Result<(), ShockwaveError> {
        self.viewport = viewport;
        self.post.init(viewport);
        if self.target.recreate(device, viewport.width, viewport.height) {
            log::info!("[renderer] resized to {}x{}", viewport.width, viewport.height);
            self.post.bind_source(device, &self.target.view)?;
        }
        Ok(())
    }

    pub fn trigger(&mut self, req: TriggerRequest) {
        self.post.trigger(req);
    }

    /// One frame: update the effect, draw the scene, composite onto `output`.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        output: &wgpu::TextureView,
        elapsed_ms: f32,
    ) -> Result<(), ShockwaveError> {
        self.post.on_update(queue, elapsed_ms);
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("frame_encoder"),
        });
        self.scene
            .draw(&mut encoder, queue, &self.target.view, self.viewport);
        self.post.render(&mut encoder, output)?;
        queue.submit(Some(encoder.finish()));
        Ok(())
    }
}
