//! Event horizon vs. solar system
//!
//! Drag the slider to set the black hole mass (log₁₀ of solar masses, 0 to 10).
//! The event horizon is drawn as a black circle next to the closest smaller
//! and up to two larger solar-system references.
//!
//! Controls:
//! - Slider: log₁₀(mass in M☉)
//! - Left/Right: step the slider by 0.1
//! - Home: reset to 1 M☉
//! - Escape: quit

use anyhow::Context as _;
use common::{Camera2D, GraphicsContext, PixelViewport};
use horizon_scale::config::{
    LOG10_MASS_DEFAULT, MAX_VERTICES, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};
use horizon_scale::figure::MassSetting;
use horizon_scale::panel::{
    draw_controls, draw_equations_sidebar, draw_figure_overlay, draw_reference_values, step_slider,
    SCHWARZSCHILD_EQUATIONS, SCHWARZSCHILD_VARIABLES,
};
use horizon_scale::renderer::FigureRenderer;
use log::{error, info};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    renderer: FigureRenderer,
    camera: Camera2D,
    setting: MassSetting,
    /// Viewport the vertex buffer was last tessellated for
    mesh_viewport: Option<PixelViewport>,
    figure_dirty: bool,
    egui: EguiState,
}

impl App {
    fn new(ctx: GraphicsContext) -> Self {
        let renderer = FigureRenderer::new(&ctx, MAX_VERTICES);
        let camera = Camera2D::new(1.0);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        let setting = MassSetting::new(LOG10_MASS_DEFAULT);
        info!("Initial figure: {}", setting.figure().title);

        Self {
            ctx,
            renderer,
            camera,
            setting,
            mesh_viewport: None,
            figure_dirty: true,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        }
    }

    fn set_log10_mass(&mut self, log10_mass: f64) {
        if self.setting.set_log10_mass(log10_mass) {
            self.figure_dirty = true;
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
        self.mesh_viewport = None;
    }

    /// Upload camera and vertices when the figure or its pixel size changed.
    fn prepare_figure(&mut self, viewport: PixelViewport) {
        if !self.figure_dirty && self.mesh_viewport == Some(viewport) {
            return;
        }

        self.camera.update_aspect_ratio(viewport.aspect_ratio());
        let figure = self.setting.figure();
        self.camera.fit_symmetric(figure.limit as f32);
        let units_per_pixel = self.camera.units_per_pixel(viewport.height);

        self.renderer.update_camera(&self.ctx.queue, &self.camera);
        self.renderer
            .update_figure(&self.ctx.queue, figure, units_per_pixel);

        self.mesh_viewport = Some(viewport);
        self.figure_dirty = false;
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        // Build egui UI first: the slider decides what the figure shows
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let setting = &mut self.setting;
        let mut slider_moved = false;
        let mut plot_rect = None;
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            slider_moved = draw_controls(ctx, setting);
            draw_reference_values(ctx);
            draw_equations_sidebar(
                ctx,
                "Schwarzschild Radius",
                SCHWARZSCHILD_EQUATIONS,
                SCHWARZSCHILD_VARIABLES,
                setting.figure(),
            );
            plot_rect = draw_figure_overlay(ctx, setting.figure());
        });
        if slider_moved {
            self.figure_dirty = true;
        }

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

        let pixels_per_point = full_output.pixels_per_point;
        let viewport = plot_rect.and_then(|rect| {
            PixelViewport::new(
                rect.left() * pixels_per_point,
                rect.top() * pixels_per_point,
                rect.width() * pixels_per_point,
                rect.height() * pixels_per_point,
            )
            .clamped_to(self.ctx.size)
        });
        if let Some(viewport) = viewport {
            self.prepare_figure(viewport);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view, viewport);

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

    /// Returns true when the app should exit.
    fn handle_key(&mut self, key: KeyCode, state: ElementState) -> bool {
        if state != ElementState::Pressed {
            return false;
        }

        match key {
            KeyCode::ArrowRight => self.set_log10_mass(step_slider(self.setting.log10_mass(), 1)),
            KeyCode::ArrowLeft => self.set_log10_mass(step_slider(self.setting.log10_mass(), -1)),
            KeyCode::Home => self.set_log10_mass(LOG10_MASS_DEFAULT),
            KeyCode::Escape => return true,
            _ => {}
        }

        false
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui.state.on_window_event(&self.ctx.window, event).consumed
    }
}

fn main() -> anyhow::Result<()> {
    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        WINDOW_TITLE,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
    ))?;

    let mut app = App::new(ctx);

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { ref event, .. } => {
                    let consumed = app.handle_window_event(event);

                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(size) => app.resize(*size),
                        WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    physical_key: PhysicalKey::Code(key),
                                    state,
                                    ..
                                },
                            ..
                        } if !consumed => {
                            if app.handle_key(*key, *state) {
                                elwt.exit();
                            }
                        }
                        WindowEvent::RedrawRequested => match app.render() {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                error!("GPU out of memory");
                                elwt.exit();
                            }
                            Err(e) => error!("Render error: {:?}", e),
                        },
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    app.ctx.window.request_redraw();
                }
                _ => {}
            }
        })
        .context("event loop error")?;

    Ok(())
}
