use super::helpers;
use wgpu;

/// Offscreen color target the scene is rendered into and the shockwave
/// program samples from.
pub struct SceneTarget {
    pub tex: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub format: wgpu::TextureFormat,
    pub width: u32,
    pub height: u32,
}

impl SceneTarget {
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (tex, view) = Self::create(device, width, height);
        Self {
            tex,
            view,
            format: Self::FORMAT,
            width,
            height,
        }
    }

    /// Recreate the texture at a new size. Returns `false` if nothing changed.
    pub fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        (self.tex, self.view) = Self::create(device, width, height);
        self.width = width;
        self.height = height;
        true
    }

    fn create(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        helpers::create_color_texture(
            device,
            "scene_tex",
            width,
            height,
            Self::FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        )
    }
}
