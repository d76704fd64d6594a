use std::sync::Arc;

use anyhow::{Context, Result};
use reach::draw::{DrawList, LineVertex, SphereInstance};
use reach::scene::LightRig;
use winit::window::Window;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.03,
    b: 0.07,
    a: 1.0,
};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct SphereRaw {
    center: [f32; 3],
    radius: f32,
    color: [f32; 4],
    glow: [f32; 3],
    shininess: f32,
}

impl From<&SphereInstance> for SphereRaw {
    fn from(sphere: &SphereInstance) -> Self {
        Self {
            center: sphere.center.to_array(),
            radius: sphere.radius,
            color: sphere.color.to_array(),
            glow: sphere.glow.rgb(),
            shininess: sphere.shininess,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct LineRaw {
    position: [f32; 3],
    color: [f32; 4],
}

impl From<&LineVertex> for LineRaw {
    fn from(vertex: &LineVertex) -> Self {
        Self {
            position: vertex.position.to_array(),
            color: vertex.color.to_array(),
        }
    }
}

/// Must match `Globals` in both shaders.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    right: [f32; 4],
    up: [f32; 4],
    ambient: [f32; 4],
    directional_color: [f32; 4],
    directional_dir: [f32; 4],
    point_color: [f32; 4],
    point_position: [f32; 4],
    hemisphere_sky: [f32; 4],
    hemisphere_ground: [f32; 4],
}

impl Globals {
    fn new(draw: &DrawList) -> Self {
        let lights = draw.lights.clone().unwrap_or_default();
        let LightRig {
            ambient,
            directional,
            point,
            hemisphere,
        } = lights;

        Self {
            view_proj: draw.view_proj.to_cols_array_2d(),
            eye: draw.eye.extend(1.0).to_array(),
            right: draw.right.extend(0.0).to_array(),
            up: draw.up.extend(0.0).to_array(),
            ambient: ambient.color.scaled(ambient.intensity).to_array(),
            directional_color: directional.color.scaled(directional.intensity).to_array(),
            directional_dir: directional.direction().extend(0.0).to_array(),
            point_color: point.color.scaled(point.intensity).to_array(),
            point_position: point.position.extend(point.distance).to_array(),
            hemisphere_sky: hemisphere.sky.scaled(hemisphere.intensity).to_array(),
            hemisphere_ground: hemisphere.ground.scaled(hemisphere.intensity).to_array(),
        }
    }
}

/// Vertex buffer that is rewritten every frame and grows on demand.
struct DynamicBuffer {
    label: &'static str,
    buffer: wgpu::Buffer,
    capacity: u64,
    len: u32,
}

impl DynamicBuffer {
    const MIN_CAPACITY: u64 = 4096;

    fn new(device: &wgpu::Device, label: &'static str) -> Self {
        Self {
            label,
            buffer: Self::allocate(device, label, Self::MIN_CAPACITY),
            capacity: Self::MIN_CAPACITY,
            len: 0,
        }
    }

    fn allocate(device: &wgpu::Device, label: &'static str, size: u64) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn upload<T: bytemuck::Pod>(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, items: &[T]) {
        let bytes: &[u8] = bytemuck::cast_slice(items);
        let needed = bytes.len() as u64;
        if needed > self.capacity {
            self.capacity = needed.next_power_of_two();
            self.buffer = Self::allocate(device, self.label, self.capacity);
            tracing::debug!(target: "renderer", buffer = self.label, bytes = self.capacity, "buffer grown");
        }
        if !bytes.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
        self.len = items.len() as u32;
    }
}

pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
    can_capture: bool,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,

    sphere_pipeline: wgpu::RenderPipeline,
    spheres: DynamicBuffer,

    line_pipeline: wgpu::RenderPipeline,
    lines: DynamicBuffer,

    sphere_scratch: Vec<SphereRaw>,
    line_scratch: Vec<LineRaw>,
}

impl Renderer {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no suitable GPU adapter")?;

        #[cfg(target_arch = "wasm32")]
        let required_limits = wgpu::Limits::downlevel_webgl2_defaults();
        #[cfg(not(target_arch = "wasm32"))]
        let required_limits = wgpu::Limits::default();

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("reach device"),
                required_features: wgpu::Features::empty(),
                required_limits,
                memory_hints: wgpu::MemoryHints::default(),
                ..Default::default()
            })
            .await
            .context("failed to open GPU device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Colors are authored in display space, so prefer a non-sRGB target.
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|format| !format.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no formats")?;
        let can_capture = surface_caps.usages.contains(wgpu::TextureUsages::COPY_SRC);
        let mut usage = wgpu::TextureUsages::RENDER_ATTACHMENT;
        if can_capture {
            usage |= wgpu::TextureUsages::COPY_SRC;
        }

        let config = wgpu::SurfaceConfiguration {
            usage,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        tracing::info!(
            target: "renderer",
            adapter = %adapter.get_info().name,
            ?format,
            width = config.width,
            height = config.height,
            "renderer ready"
        );

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
            label: Some("globals_bind_group_layout"),
        });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
            label: Some("globals_bind_group"),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // Spheres: one camera-facing quad per instance.
        let sphere_shader = device.create_shader_module(wgpu::include_wgsl!("shaders/sphere.wgsl"));
        let sphere_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sphere pipeline"),
            layout: Some(&pipeline_layout),
            cache: None,
            vertex: wgpu::VertexState {
                module: &sphere_shader,
                entry_point: Some("vs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<SphereRaw>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &wgpu::vertex_attr_array![
                        0 => Float32x3,
                        1 => Float32,
                        2 => Float32x4,
                        3 => Float32x3,
                        4 => Float32,
                    ],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &sphere_shader,
                entry_point: Some("fs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let line_shader = device.create_shader_module(wgpu::include_wgsl!("shaders/line.wgsl"));
        let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("line pipeline"),
            layout: Some(&pipeline_layout),
            cache: None,
            vertex: wgpu::VertexState {
                module: &line_shader,
                entry_point: Some("vs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<LineRaw>() as wgpu::BufferAddress,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4],
                }],
            },
            fragment: Some(wgpu::FragmentState {
                module: &line_shader,
                entry_point: Some("fs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                unclipped_depth: false,
                polygon_mode: wgpu::PolygonMode::Fill,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let spheres = DynamicBuffer::new(&device, "sphere instances");
        let lines = DynamicBuffer::new(&device, "line vertices");

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            can_capture,
            globals_buffer,
            globals_bind_group,
            sphere_pipeline,
            spheres,
            line_pipeline,
            lines,
            sphere_scratch: Vec::new(),
            line_scratch: Vec::new(),
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reconfigures the surface at its current size.
    pub fn reconfigure(&mut self) {
        self.resize(self.size);
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    fn upload(&mut self, draw: &DrawList) {
        let globals = Globals::new(draw);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::cast_slice(&[globals]));

        self.sphere_scratch.clear();
        self.sphere_scratch.extend(draw.spheres.iter().map(SphereRaw::from));
        self.spheres
            .upload(&self.device, &self.queue, &self.sphere_scratch);

        self.line_scratch.clear();
        self.line_scratch.extend(draw.lines.iter().map(LineRaw::from));
        self.lines.upload(&self.device, &self.queue, &self.line_scratch);
    }

    pub fn render(
        &mut self,
        draw: &DrawList,
        gui_renderer: Option<&mut egui_wgpu::Renderer>,
        gui_primitives: &[egui::ClippedPrimitive],
        screen_descriptor: &egui_wgpu::ScreenDescriptor,
        capture_request: Option<&std::path::Path>,
    ) -> Result<(), wgpu::SurfaceError> {
        self.upload(draw);

        let surface_texture = self.surface.get_current_texture()?;
        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_bind_group(0, &self.globals_bind_group, &[]);

            if self.lines.len > 0 {
                render_pass.set_pipeline(&self.line_pipeline);
                render_pass.set_vertex_buffer(0, self.lines.buffer.slice(..));
                render_pass.draw(0..self.lines.len, 0..1);
            }

            // Instances arrive sorted back to front.
            if self.spheres.len > 0 {
                render_pass.set_pipeline(&self.sphere_pipeline);
                render_pass.set_vertex_buffer(0, self.spheres.buffer.slice(..));
                render_pass.draw(0..4, 0..self.spheres.len);
            }
        }

        if let Some(gui_renderer) = gui_renderer {
            gui_renderer.update_buffers(
                &self.device,
                &self.queue,
                &mut encoder,
                gui_primitives,
                screen_descriptor,
            );

            let mut gui_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("gui pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &surface_view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                        depth_slice: None,
                    })],
                    depth_stencil_attachment: None,
                    occlusion_query_set: None,
                    timestamp_writes: None,
                })
                .forget_lifetime();

            gui_renderer.render(&mut gui_pass, gui_primitives, screen_descriptor);
        }

        self.queue.submit(std::iter::once(encoder.finish()));

        if let Some(path) = capture_request {
            match self.save_screenshot(&surface_texture.texture, path) {
                Ok(()) => tracing::info!(target: "renderer", path = %path.display(), "screenshot saved"),
                Err(err) => tracing::error!(target: "renderer", "{err:#}"),
            }
        }

        surface_texture.present();

        Ok(())
    }

    fn save_screenshot(&self, texture: &wgpu::Texture, path: &std::path::Path) -> Result<()> {
        anyhow::ensure!(self.can_capture, "surface does not support screenshots");
        let image = self.capture_texture(texture, self.config.width, self.config.height)?;
        image
            .save(path)
            .with_context(|| format!("failed to write screenshot {}", path.display()))
    }

    /// Reads a surface texture back into an RGBA image.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn capture_texture(
        &self,
        texture: &wgpu::Texture,
        width: u32,
        height: u32,
    ) -> Result<image::RgbaImage> {
        // Rows must be 256-byte aligned for texture copies.
        let bytes_per_pixel = 4;
        let unpadded_bytes_per_row = width * bytes_per_pixel;
        let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
        let padded_bytes_per_row_padding = (align - unpadded_bytes_per_row % align) % align;
        let padded_bytes_per_row = unpadded_bytes_per_row + padded_bytes_per_row_padding;

        let output_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("screenshot buffer"),
            size: (padded_bytes_per_row * height) as u64,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("screenshot encoder"),
            });

        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &output_buffer,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_bytes_per_row),
                    rows_per_image: Some(height),
                },
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        self.queue.submit(Some(encoder.finish()));

        let buffer_slice = output_buffer.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });

        let mapped = loop {
            let _ = self.device.poll(wgpu::PollType::Poll);
            if let Ok(result) = rx.try_recv() {
                break result;
            }
            std::thread::sleep(std::time::Duration::from_millis(1));
        };
        mapped.context("failed to map screenshot buffer")?;

        let swap_red_blue = matches!(
            self.config.format,
            wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Bgra8UnormSrgb
        );

        let mut pixels: Vec<u8> = Vec::with_capacity((width * height * 4) as usize);
        {
            let data = buffer_slice.get_mapped_range();
            for row in 0..height {
                let start = (row * padded_bytes_per_row) as usize;
                let end = start + unpadded_bytes_per_row as usize;
                pixels.extend_from_slice(&data[start..end]);
            }
        }
        output_buffer.unmap();

        if swap_red_blue {
            for pixel in pixels.chunks_exact_mut(4) {
                pixel.swap(0, 2);
            }
        }

        image::RgbaImage::from_raw(width, height, pixels)
            .context("screenshot buffer does not match its dimensions")
    }

    #[cfg(target_arch = "wasm32")]
    pub fn capture_texture(
        &self,
        _texture: &wgpu::Texture,
        _width: u32,
        _height: u32,
    ) -> Result<image::RgbaImage> {
        anyhow::bail!("screenshots are not available in the browser")
    }
}
