use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiState;
use reach::core::color::Color;
use reach::panel::ControlPanel;
use reach::{CommandQueue, CommandSender, ContainerSize, SceneConfig, SceneEngine};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::host::WindowHost;
use crate::renderer::Renderer;

/// GPU state created asynchronously and handed back to the event loop.
pub struct AsyncInitData {
    pub renderer: Renderer,
    pub gui: Gui,
}

pub struct Gui {
    ctx: egui::Context,
    state: EguiState,
    renderer: EguiRenderer,
    panel: ControlPanel,
    commands: CommandSender,

    cursor_pos: Option<[f32; 2]>,
    dragging: bool,
    capture_next: bool,
}

impl Gui {
    fn new(window: &Window, renderer: &Renderer, commands: CommandSender) -> Self {
        let ctx = egui::Context::default();
        let state = EguiState::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            Some(2048),
        );
        let egui_renderer = EguiRenderer::new(
            renderer.device(),
            renderer.format(),
            egui_wgpu::RendererOptions::default(),
        );
        Self {
            ctx,
            state,
            renderer: egui_renderer,
            panel: ControlPanel::default(),
            commands,
            cursor_pos: None,
            dragging: false,
            capture_next: false,
        }
    }
}

struct Stats {
    fps: f32,
    nodes: usize,
    sparks: usize,
}

fn to_color32(color: Color) -> egui::Color32 {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        channel(color.r),
        channel(color.g),
        channel(color.b),
        channel(color.a),
    )
}

fn draw_panel(ctx: &egui::Context, panel: &ControlPanel, commands: &CommandSender, size: egui::Vec2) {
    let buttons = panel.layout(size.x, size.y);
    let Some(first) = buttons.first() else {
        return;
    };
    let hover = ctx.pointer_hover_pos();

    egui::Area::new(egui::Id::new("control_panel"))
        .fixed_pos(egui::pos2(first.rect.x, first.rect.y))
        .show(ctx, |ui| {
            for button in &buttons {
                let rect = egui::Rect::from_min_size(
                    egui::pos2(button.rect.x, button.rect.y),
                    egui::vec2(button.rect.width, button.rect.height),
                );
                let hovered = hover.is_some_and(|p| button.rect.contains(p.x, p.y));
                let label = egui::RichText::new(button.label).color(egui::Color32::WHITE);
                let widget = egui::Button::new(label).fill(to_color32(button.background(hovered)));
                if ui.put(rect, widget).clicked() {
                    tracing::debug!(target: "viewer", button = button.label, "control clicked");
                    commands.send(button.command.clone());
                }
            }
        });
}

fn draw_stats(ctx: &egui::Context, stats: &Stats) {
    egui::Area::new(egui::Id::new("stats"))
        .fixed_pos(egui::pos2(12.0, 12.0))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "FPS {:.0}  nodes {}  sparks {}",
                    stats.fps, stats.nodes, stats.sparks
                ))
                .monospace()
                .color(egui::Color32::from_gray(200)),
            );
        });
}

async fn init_gpu(window: Arc<Window>, commands: CommandSender) -> Result<AsyncInitData> {
    let renderer = Renderer::new(window.clone()).await?;
    let gui = Gui::new(&window, &renderer, commands);
    Ok(AsyncInitData { renderer, gui })
}

struct App {
    #[cfg_attr(not(target_arch = "wasm32"), allow(unused))]
    proxy: EventLoopProxy<AsyncInitData>,
    config: SceneConfig,
    host: WindowHost,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    gui: Option<Gui>,
    engine: Option<SceneEngine>,
    queue: CommandQueue,
    sender: CommandSender,
    error: Option<anyhow::Error>,

    init_width: f64,
    init_height: f64,
}

impl App {
    fn new(proxy: EventLoopProxy<AsyncInitData>, config: SceneConfig) -> Self {
        let (queue, sender) = CommandQueue::new();
        Self {
            proxy,
            host: WindowHost::new(config.container_id.clone(), ContainerSize::default()),
            config,
            window: None,
            renderer: None,
            gui: None,
            engine: None,
            queue,
            sender,
            error: None,
            init_width: 1280.0,
            init_height: 720.0,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        tracing::error!(target: "viewer", "{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn attach_engine(&mut self, window: &Window) -> SceneEngine {
        let size = window.inner_size();
        self.host
            .set_size(ContainerSize::new(size.width, size.height));

        #[cfg(target_arch = "wasm32")]
        let engine = SceneEngine::attach_with_clock(
            &self.host,
            self.config.clone(),
            crate::host::PerformanceClock::new(),
        );
        #[cfg(not(target_arch = "wasm32"))]
        let engine = SceneEngine::attach(&self.host, self.config.clone());

        engine
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop, window: &Window) {
        let (Some(renderer), Some(gui), Some(engine)) = (
            self.renderer.as_mut(),
            self.gui.as_mut(),
            self.engine.as_mut(),
        ) else {
            return;
        };

        engine.drain_commands(&self.queue);

        let stats = Stats {
            fps: engine.timing().fps,
            nodes: engine.network().map_or(0, |network| network.len()),
            sparks: engine.effect_particles(),
        };

        let pixels_per_point = window.scale_factor() as f32;
        let logical = egui::vec2(
            renderer.size.width as f32 / pixels_per_point,
            renderer.size.height as f32 / pixels_per_point,
        );

        let raw_input = gui.state.take_egui_input(window);
        let full_output = gui.ctx.run(raw_input, |ctx| {
            draw_panel(ctx, &gui.panel, &gui.commands, logical);
            draw_stats(ctx, &stats);
        });

        gui.state
            .handle_platform_output(window, full_output.platform_output);
        let clipped_primitives = gui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, delta) in &full_output.textures_delta.set {
            gui.renderer
                .update_texture(renderer.device(), renderer.queue(), *id, delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [renderer.size.width, renderer.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let capture = std::mem::take(&mut gui.capture_next)
            .then(|| PathBuf::from(format!("reach-{:06}.png", engine.frame_count())));

        let result = match engine.frame() {
            Some(draw) => renderer.render(
                draw,
                Some(&mut gui.renderer),
                &clipped_primitives,
                &screen_descriptor,
                capture.as_deref(),
            ),
            None => Ok(()),
        };

        for id in &full_output.textures_delta.free {
            gui.renderer.free_texture(id);
        }

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                tracing::error!(target: "viewer", "GPU out of memory");
                event_loop.exit();
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!(target: "viewer", "surface timed out, skipping frame");
            }
            #[allow(unreachable_patterns)]
            Err(err) => tracing::warn!(target: "viewer", %err, "surface error"),
        }
    }
}

impl ApplicationHandler<AsyncInitData> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Reach")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.init_width,
                self.init_height,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.fail(event_loop, anyhow::Error::new(err).context("failed to create window"));
                return;
            }
        };
        self.window = Some(window.clone());

        // WASM: place the canvas inside the scene container.
        #[cfg(target_arch = "wasm32")]
        {
            use winit::platform::web::WindowExtWebSys;
            let attached = self
                .host
                .element()
                .zip(window.canvas())
                .and_then(|(element, canvas)| element.append_child(&canvas).ok());
            if attached.is_none() {
                tracing::warn!(target: "viewer", container = %self.config.container_id, "container element missing");
            }
            if let Some(size) = reach::ContainerHost::container_size(&self.host, &self.config.container_id) {
                let _ = window.request_inner_size(winit::dpi::PhysicalSize::new(
                    size.width.max(1),
                    size.height.max(1),
                ));
            }
        }

        let engine = self.attach_engine(&window);
        let inert = engine.is_inert();
        self.engine = Some(engine);
        if inert {
            tracing::info!(target: "viewer", "scene inert, skipping GPU setup");
            return;
        }

        // Native: block on GPU setup.
        #[cfg(not(target_arch = "wasm32"))]
        match pollster::block_on(init_gpu(window.clone(), self.sender.clone())) {
            Ok(data) => self.user_event(event_loop, data),
            Err(err) => self.fail(event_loop, err),
        }

        // WASM: finish GPU setup on the browser's executor.
        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            let commands = self.sender.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match init_gpu(window, commands).await {
                    Ok(data) => {
                        if proxy.send_event(data).is_err() {
                            tracing::warn!(target: "viewer", "event loop closed before GPU setup finished");
                        }
                    }
                    Err(err) => tracing::error!(target: "viewer", "{err:#}"),
                }
            });
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: AsyncInitData) {
        self.renderer = Some(event.renderer);
        self.gui = Some(event.gui);
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        if let Some(gui) = self.gui.as_mut() {
            let _ = gui.state.on_window_event(&window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!(target: "viewer", "shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(physical_size);
                }
                self.host
                    .set_size(ContainerSize::new(physical_size.width, physical_size.height));
                if let Some(engine) = self.engine.as_mut() {
                    engine.handle_resize(&self.host);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let Some(gui) = self.gui.as_mut() else {
                    return;
                };
                let pos = [position.x as f32, position.y as f32];
                if let (Some(previous), true) = (gui.cursor_pos, gui.dragging) {
                    if let Some(engine) = self.engine.as_mut() {
                        engine.orbit_drag(pos[0] - previous[0], pos[1] - previous[1]);
                    }
                }
                gui.cursor_pos = Some(pos);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(gui) = self.gui.as_mut() {
                    gui.dragging =
                        state == ElementState::Pressed && !gui.ctx.wants_pointer_input();
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::F12),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if let Some(gui) = self.gui.as_mut() {
                    gui.capture_next = true;
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop, &window),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

/// Opens the viewer and runs it until the window closes.
pub fn run(config: SceneConfig) -> Result<()> {
    let event_loop = EventLoop::<AsyncInitData>::with_user_event()
        .build()
        .context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let proxy = event_loop.create_proxy();
    let mut app = App::new(proxy, config);
    event_loop
        .run_app(&mut app)
        .context("event loop exited with an error")?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
