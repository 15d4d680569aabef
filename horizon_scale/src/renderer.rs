//! Rendering system for the scale figure
//!
//! The figure is tessellated on the CPU into a line list in plot units and
//! drawn through an orthographic camera into a square viewport.

use common::{create_uniform_buffer, Camera2D, CameraUniform, GraphicsContext, PixelViewport};
use glam::Vec2;
use log::warn;

use crate::catalog::{palette, Rgba};
use crate::config::{CIRCLE_SEGMENTS, DASH_SEGMENTS};
use crate::figure::{Figure, FigureCircle, LineStyle};

/// Plot background (white, like a printed chart)
const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Line vertex for circle and axis segments
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl LineVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Build the line list for a figure.
///
/// `units_per_pixel` converts pixel sizes (stroke widths, the centre marker)
/// into plot units. Wide strokes are drawn as adjacent one-pixel rings.
pub fn tessellate(figure: &Figure, units_per_pixel: f32) -> Vec<LineVertex> {
    let mut vertices = Vec::new();
    let limit = figure.limit as f32;

    if figure.show_grid {
        for tick in figure.ticks() {
            let t = tick as f32;
            push_segment(&mut vertices, Vec2::new(t, -limit), Vec2::new(t, limit), palette::GRID_GRAY);
            push_segment(&mut vertices, Vec2::new(-limit, t), Vec2::new(limit, t), palette::GRID_GRAY);
        }
    }

    // Axes through the origin
    push_segment(&mut vertices, Vec2::new(-limit, 0.0), Vec2::new(limit, 0.0), palette::AXIS_GRAY);
    push_segment(&mut vertices, Vec2::new(0.0, -limit), Vec2::new(0.0, limit), palette::AXIS_GRAY);

    for circle in &figure.references {
        push_circle(&mut vertices, circle, units_per_pixel);
    }

    // Horizon on top of the references, outline only
    push_circle(&mut vertices, &figure.horizon, units_per_pixel);

    let half = figure.center_marker_px * 0.5 * units_per_pixel;
    push_segment(&mut vertices, Vec2::new(-half, 0.0), Vec2::new(half, 0.0), palette::BLACK);
    push_segment(&mut vertices, Vec2::new(0.0, -half), Vec2::new(0.0, half), palette::BLACK);

    vertices
}

fn push_segment(vertices: &mut Vec<LineVertex>, a: Vec2, b: Vec2, color: Rgba) {
    let color = srgb_to_linear(color);
    vertices.push(LineVertex { position: a.to_array(), color });
    vertices.push(LineVertex { position: b.to_array(), color });
}

/// Catalog colours are sRGB; the surface is an sRGB format and expects linear input.
pub fn srgb_to_linear(color: Rgba) -> Rgba {
    let channel = |c: f32| {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(color[0]), channel(color[1]), channel(color[2]), color[3]]
}

fn push_circle(vertices: &mut Vec<LineVertex>, circle: &FigureCircle, units_per_pixel: f32) {
    let passes = circle.width.ceil().max(1.0) as usize;
    let step = std::f32::consts::TAU / CIRCLE_SEGMENTS as f32;

    for pass in 0..passes {
        let offset_px = pass as f32 - (passes - 1) as f32 * 0.5;
        let radius = circle.radius as f32 + offset_px * units_per_pixel;
        if radius <= 0.0 {
            continue;
        }

        for i in 0..CIRCLE_SEGMENTS {
            if circle.style == LineStyle::Dashed && (i / DASH_SEGMENTS) % 2 == 1 {
                continue;
            }

            let a0 = i as f32 * step;
            let a1 = a0 + step;
            push_segment(
                vertices,
                Vec2::new(a0.cos(), a0.sin()) * radius,
                Vec2::new(a1.cos(), a1.sin()) * radius,
                circle.color,
            );
        }
    }
}

/// Line-list renderer for the scale figure
pub struct FigureRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    max_vertices: usize,
    vertex_count: u32,
}

impl FigureRenderer {
    pub fn new(ctx: &GraphicsContext, max_vertices: usize) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Figure Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/figure.wgsl").into()),
        });

        let camera_buffer = create_uniform_buffer(
            device,
            "Camera Buffer",
            &CameraUniform::from_camera_2d(&Camera2D::new(1.0)),
        );

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Figure Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Figure Line Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_line",
                buffers: &[LineVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_line",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::LineList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Figure Vertex Buffer"),
            size: (std::mem::size_of::<LineVertex>() * max_vertices) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            pipeline,
            vertex_buffer,
            camera_buffer,
            camera_bind_group,
            max_vertices,
            vertex_count: 0,
        }
    }

    pub fn update_camera(&self, queue: &wgpu::Queue, camera: &Camera2D) {
        let uniform = CameraUniform::from_camera_2d(camera);
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    /// Re-tessellate the figure into the vertex buffer.
    pub fn update_figure(&mut self, queue: &wgpu::Queue, figure: &Figure, units_per_pixel: f32) {
        let mut vertices = tessellate(figure, units_per_pixel);

        if vertices.len() > self.max_vertices {
            warn!(
                "Figure needs {} vertices, truncating to {}",
                vertices.len(),
                self.max_vertices
            );
            // Keep whole segments
            vertices.truncate(self.max_vertices & !1);
        }

        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        self.vertex_count = vertices.len() as u32;
    }

    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        viewport: Option<PixelViewport>,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Figure Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(BACKGROUND),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        // Nothing to draw until the plot area has a size
        let Some(viewport) = viewport else {
            return;
        };
        if self.vertex_count == 0 {
            return;
        }

        render_pass.set_viewport(viewport.x, viewport.y, viewport.width, viewport.height, 0.0, 1.0);
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}
