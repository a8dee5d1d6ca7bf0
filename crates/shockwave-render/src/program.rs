use super::helpers;
use super::quad::{QuadVertex, FULLSCREEN_QUAD};
use shockwave_core::{PackedShockwaves, ShockwaveError, ShockwaveUniforms, SHOCKWAVE_WGSL};
use wgpu;
use wgpu::util::DeviceExt;

/// The compiled shockwave compositing program and the GPU state it reads.
///
/// Bindings: `0` previous pass color, `1` linear clamp sampler, `2` the
/// [`ShockwaveUniforms`] block.
pub struct ShockwaveProgram {
    pipeline: wgpu::RenderPipeline,
    bgl: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
    sampler: wgpu::Sampler,
    quad_vb: wgpu::Buffer,
    bind_group: Option<wgpu::BindGroup>,
    block: ShockwaveUniforms,
}

impl ShockwaveProgram {
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shockwave_shader"),
            source: wgpu::ShaderSource::Wgsl(SHOCKWAVE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("shockwave_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    // previous frame color
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
                helpers::uniform_entry(2),
            ],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("shockwave_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_pipeline(
            device,
            "shockwave_pipeline",
            &pl,
            &shader,
            "vs_quad",
            &[QuadVertex::layout()],
            "fs_shockwave",
            target_format,
        );
        let block = ShockwaveUniforms::default();
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("shockwave_uniforms"),
            contents: bytemuck::bytes_of(&block),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("shockwave_quad_vb"),
            contents: bytemuck::cast_slice(&FULLSCREEN_QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("shockwave_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        log::info!("[shockwave] program compiled for {:?}", target_format);

        Self {
            pipeline,
            bgl,
            uniform_buffer,
            sampler,
            quad_vb,
            bind_group: None,
            block,
        }
    }

    /// Point the program at the color buffer it distorts. Must be called
    /// again whenever that texture is recreated.
    pub fn bind_source(&mut self, device: &wgpu::Device, source: &wgpu::TextureView) {
        self.bind_group = Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("shockwave_bg"),
            layout: &self.bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(source),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: self.uniform_buffer.as_entire_binding(),
                },
            ],
        }));
    }

    pub fn upload(&mut self, queue: &wgpu::Queue, packed: &PackedShockwaves) {
        packed.upload(&mut self.block);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&self.block));
    }

    pub fn draw(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
    ) -> Result<(), ShockwaveError> {
        let bind_group = self.bind_group.as_ref().ok_or(ShockwaveError::NoSource)?;
        let mut rpass = helpers::begin_pass(encoder, "shockwave_pass", target, wgpu::Color::BLACK);
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        rpass.draw(0..FULLSCREEN_QUAD.len() as u32, 0..1);
        Ok(())
    }
}
