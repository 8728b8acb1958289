//! The window-side render sink.
//!
//! Owns the wgpu surface, device and frame texture. The loop hands it a
//! finished frame once per tick via [`State::present`]; everything the
//! simulation core knows about rendering is that call.

use std::sync::Arc;

use anyhow::Context;
use winit::window::Window;

use crate::palette::Pixel;
use crate::render;

pub struct State {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
    pub window: Arc<Window>,

    pub grid_width: u32,
    pub grid_height: u32,
    frame_texture: wgpu::Texture,
    render_pipeline: wgpu::RenderPipeline,
    render_bind_group: wgpu::BindGroup,
}

impl State {
    /// Brings up the GPU and a `grid_width x grid_height` frame texture that
    /// gets stretched over the window. Fails (rather than panics) so the
    /// binaries can exit with a message when no surface or adapter exists.
    pub async fn new(window: Arc<Window>, grid_width: u32, grid_height: u32) -> anyhow::Result<Self> {
        let size = window.inner_size();

        log::info!("Initializing wgpu...");

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create rendering surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .context("no suitable GPU adapter found")?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .context("failed to create device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps.formats[0];

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![surface_format],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (frame_texture, frame_view) = render::create_frame_texture(&device, grid_width, grid_height);
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Frame Sampler"),
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let render_bind_group_layout = render::create_render_bind_group_layout(&device);
        let render_bind_group =
            render::create_render_bind_group(&device, &render_bind_group_layout, &sampler, &frame_view);
        let render_pipeline =
            render::create_render_pipeline(&device, &render_bind_group_layout, config.format);

        log::info!(
            "wgpu initialized: {}x{} cells onto a {}x{} window",
            grid_width,
            grid_height,
            size.width,
            size.height
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            window,
            grid_width,
            grid_height,
            frame_texture,
            render_pipeline,
            render_bind_group,
        })
    }

    /// Reconfigures the surface. The frame texture keeps the grid size; the
    /// blit stretches it to whatever the window becomes.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        } else {
            log::warn!(
                "Ignoring resize to zero dimensions: {}x{}",
                new_size.width,
                new_size.height
            );
        }
    }

    /// Uploads the finished frame and draws it. Fire-and-forget from the
    /// simulation's point of view; surface errors are the loop's problem.
    pub fn present(&mut self, frame: &[Pixel]) -> Result<(), wgpu::SurfaceError> {
        debug_assert_eq!(frame.len(), (self.grid_width * self.grid_height) as usize);

        self.queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &self.frame_texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            bytemuck::cast_slice(frame),
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.grid_width),
                rows_per_image: Some(self.grid_height),
            },
            wgpu::Extent3d {
                width: self.grid_width,
                height: self.grid_height,
                depth_or_array_layers: 1,
            },
        );

        let output_frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost) => {
                log::warn!("Surface lost, recreating...");
                self.resize(self.size);
                return Err(wgpu::SurfaceError::Lost);
            }
            Err(e) => {
                log::error!("Failed to acquire next swap chain texture: {:?}", e);
                return Err(e);
            }
        };

        let output_view = output_frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &output_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.render_bind_group, &[]);
            render_pass.draw(0..3, 0..1);
        }
        self.queue.submit(Some(encoder.finish()));
        output_frame.present();

        Ok(())
    }
}
