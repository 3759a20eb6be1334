//! 3D Black Hole Visualization
//!
//! Interactive Schwarzschild black hole featuring:
//! - Event horizon with spin-dependent warping
//! - Accretion disk with temperature-based coloring
//! - Relativistic jets tied to the spin parameter
//! - Hawking radiation particle field
//! - Gravitational lensing shell and background starfield
//!
//! Controls:
//! - Left mouse drag: Orbit camera
//! - Scroll: Zoom in/out
//! - Sidebar sliders: Mass, spin, accretion rate
//!
//! Set PHYS_CAMERA=basic to use the minimal drag/zoom camera controller.

mod animator;
mod controller;
mod geometry;
mod physics;
mod renderer;
mod scene;
mod ui;

use animator::Animator;
use common::{Camera3D, CameraController, ControllerKind, GraphicsContext, GraphicsError};
use controller::ParameterController;
use physics::BlackHoleParams;
use renderer::{Renderer, SceneUniform};
use scene::SceneGraph;
use winit::{
    event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::ControlFlow,
};

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    renderer: Renderer,
    scene: SceneGraph,
    controller: ParameterController,
    animator: Animator,
    camera: Camera3D,
    camera_controller: Box<dyn CameraController>,
    visual: controller::VisualUpdate,
    rng: rand::rngs::ThreadRng,
    egui: EguiState,
    mouse_pressed: bool,
    last_mouse_pos: Option<(f64, f64)>,
}

impl App {
    fn new(ctx: GraphicsContext) -> Self {
        let params = BlackHoleParams::default();
        let mut rng = rand::thread_rng();
        let scene = SceneGraph::build(&params, &mut rng);
        let renderer = Renderer::new(&ctx, &scene);
        let parameter_controller = ParameterController::new(params);
        let visual = parameter_controller.visual_update();

        let camera = Camera3D::new(ctx.aspect_ratio());
        let camera_controller = ControllerKind::from_env().build();

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Self {
            ctx,
            renderer,
            scene,
            controller: parameter_controller,
            animator: Animator::new(),
            camera,
            camera_controller,
            visual,
            rng,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
            mouse_pressed: false,
            last_mouse_pos: None,
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.camera.update_aspect_ratio(self.ctx.aspect_ratio());
        self.renderer
            .resize(&self.ctx.device, new_size.width, new_size.height);
    }

    fn update(&mut self, dt: f32) {
        self.camera_controller.update(&mut self.camera, dt);
        self.animator.tick(dt, &mut self.scene, &mut self.rng);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.update_camera(&self.ctx.queue, &self.camera);
        self.renderer.update_scene(
            &self.ctx.queue,
            SceneUniform::new(self.animator.time(), &self.visual, &self.scene),
        );
        self.renderer.upload_particles(&self.ctx.queue, &self.scene);

        // Build the control sidebar
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            if let Some(update) = ui::draw_control_panel(ctx, &mut self.controller) {
                self.visual = update;
            }
        });

        self.egui
            .state
            .handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer
            .render(&mut encoder, &view, self.visual.jets_visible);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_mouse_move(&mut self, x: f64, y: f64) {
        if self.mouse_pressed {
            if let Some((last_x, last_y)) = self.last_mouse_pos {
                let dx = (x - last_x) as f32;
                let dy = (y - last_y) as f32;
                self.camera_controller.drag(&mut self.camera, dx, dy);
            }
        }
        self.last_mouse_pos = Some((x, y));
    }

    fn handle_scroll(&mut self, delta: f32) {
        self.camera_controller.scroll(&mut self.camera, delta);
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui
            .state
            .on_window_event(&self.ctx.window, event)
            .consumed
    }
}

fn main() {
    if let Err(e) = run() {
        log::error!("failed to initialize 3D visualization: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), GraphicsError> {
    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        "Black Hole - 3D Visualization",
        1280,
        720,
    ))?;

    let mut app = App::new(ctx);
    let mut last_time = std::time::Instant::now();

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, .. } => {
                let consumed = app.handle_window_event(event);

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(size) => app.resize(*size),
                    WindowEvent::MouseInput { state, button, .. } if !consumed => {
                        if *button == MouseButton::Left {
                            app.mouse_pressed = *state == ElementState::Pressed;
                            if !app.mouse_pressed {
                                app.last_mouse_pos = None;
                            }
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } if !consumed => {
                        app.handle_mouse_move(position.x, position.y);
                    }
                    WindowEvent::MouseWheel { delta, .. } if !consumed => {
                        let scroll = match delta {
                            MouseScrollDelta::LineDelta(_, y) => *y,
                            MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                        };
                        app.handle_scroll(scroll);
                    }
                    WindowEvent::RedrawRequested => {
                        let now = std::time::Instant::now();
                        let dt = (now - last_time).as_secs_f32().min(0.1);
                        last_time = now;

                        app.update(dt);
                        match app.render() {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                            Err(e) => log::warn!("render error: {e:?}"),
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                app.ctx.window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}
