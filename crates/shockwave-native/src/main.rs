use std::time::Instant;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use glam::Vec2;
use rand::rngs::ThreadRng;
use shockwave_core::{TriggerRanges, Viewport};
use shockwave_render::ShockwaveRenderer;

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: ShockwaveRenderer,
    last_frame: Instant,
    cursor: Vec2,
    ranges: TriggerRanges,
    rng: ThreadRng,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let viewport = Viewport::new(size.width, size.height)?;
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .first()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let renderer = ShockwaveRenderer::new(&device, format, viewport)?;
        log::info!("[native] {}x{} surface, format {:?}", size.width, size.height, format);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            last_frame: Instant::now(),
            cursor: Vec2::ZERO,
            ranges: TriggerRanges::default(),
            rng: rand::thread_rng(),
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        let Ok(viewport) = Viewport::new(new_size.width, new_size.height) else {
            return;
        };
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
        if let Err(e) = self.renderer.resize(&self.device, viewport) {
            log::error!("[native] resize failed: {e}");
        }
    }

    fn click(&mut self) {
        let location = self
            .renderer
            .viewport()
            .normalize_px(self.cursor.x, self.cursor.y);
        let req = self.ranges.sample(&mut self.rng, location);
        log::debug!("[native] shockwave at {:?}", req.location);
        self.renderer.trigger(req);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let now = Instant::now();
        let elapsed_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        if let Err(e) = self
            .renderer
            .render(&self.device, &self.queue, &view, elapsed_ms)
        {
            log::error!("[native] frame skipped: {e}");
        }
        frame.present();
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Shockwave (native)")
        .with_inner_size(winit::dpi::PhysicalSize::new(
            shockwave_core::DEFAULT_VIEWPORT_WIDTH,
            shockwave_core::DEFAULT_VIEWPORT_HEIGHT,
        ))
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => state.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::CursorMoved { position, .. },
            ..
        } => state.cursor = Vec2::new(position.x as f32, position.y as f32),
        Event::WindowEvent {
            event:
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                },
            ..
        } => state.click(),
        Event::AboutToWait => match state.render() {
            Ok(_) => state.window.request_redraw(),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                state.resize(state.window.inner_size())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
            Err(e) => log::warn!("[native] surface error: {e:?}"),
        },
        _ => {}
    })?;
    Ok(())
}
