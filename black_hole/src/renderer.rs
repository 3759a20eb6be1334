//! Rendering system for the black hole scene
//!
//! All pipelines come from one WGSL module. Geometry is tessellated once at
//! startup; per-frame work is limited to uniform writes and re-uploading the
//! particle positions.

use common::{Camera3D, CameraUniform, GraphicsContext};
use wgpu::util::DeviceExt;

use crate::controller::VisualUpdate;
use crate::geometry::{self, Mesh, MeshVertex};
use crate::scene::{SceneGraph, PARTICLE_COUNT};

/// Shared per-object uniform values
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub time: f32,
    pub spin: f32,
    pub accretion_rate: f32,
    pub horizon_scale: f32,
    pub disk_inner: f32,
    pub disk_outer: f32,
    pub _padding: [f32; 2],
}

impl SceneUniform {
    pub fn new(time: f32, visual: &VisualUpdate, scene: &SceneGraph) -> Self {
        Self {
            time,
            spin: visual.spin,
            accretion_rate: visual.accretion_rate,
            horizon_scale: visual.horizon_scale,
            disk_inner: scene.params.disk_inner,
            disk_outer: scene.params.disk_outer,
            _padding: [0.0; 2],
        }
    }
}

/// Vertex for the point-rendered objects (starfield, particles)
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl PointVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

struct MeshBuffers {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

impl MeshBuffers {
    fn new(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertices,
            indices,
            index_count: mesh.index_count(),
        }
    }

    fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        render_pass.set_vertex_buffer(0, self.vertices.slice(..));
        render_pass.set_index_buffer(self.indices.slice(..), wgpu::IndexFormat::Uint32);
        render_pass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

/// Merge two meshes into a single buffer pair
fn merge(mut a: Mesh, b: Mesh) -> Mesh {
    let offset = a.vertices.len() as u32;
    a.vertices.extend_from_slice(&b.vertices);
    a.indices.extend(b.indices.iter().map(|i| i + offset));
    a
}

pub struct Renderer {
    horizon_pipeline: wgpu::RenderPipeline,
    disk_pipeline: wgpu::RenderPipeline,
    jet_pipeline: wgpu::RenderPipeline,
    lens_pipeline: wgpu::RenderPipeline,
    point_pipeline: wgpu::RenderPipeline,

    horizon: MeshBuffers,
    disk: MeshBuffers,
    jets: MeshBuffers,
    lens: MeshBuffers,

    star_buffer: wgpu::Buffer,
    star_count: u32,
    particle_buffer: wgpu::Buffer,

    camera_buffer: wgpu::Buffer,
    scene_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    scene_bind_group: wgpu::BindGroup,

    depth_texture: wgpu::TextureView,
}

impl Renderer {
    pub fn new(ctx: &GraphicsContext, scene: &SceneGraph) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Black Hole Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/black_hole.wgsl").into()),
        });

        // Uniform buffers
        let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Camera Buffer"),
            size: std::mem::size_of::<CameraUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let scene_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Scene Buffer"),
            size: std::mem::size_of::<SceneUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_layout_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[uniform_layout_entry(0)],
            });

        let scene_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Scene Bind Group Layout"),
                entries: &[uniform_layout_entry(0)],
            });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &scene_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout, &scene_bind_group_layout],
            push_constant_ranges: &[],
        });

        let depth_texture = Self::create_depth_texture(device, ctx.size.width, ctx.size.height);

        let depth_state = |write_enabled| {
            Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: write_enabled,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            })
        };

        // Horizon sphere: opaque, writes depth
        let horizon_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Horizon Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_horizon",
                buffers: &[MeshVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_horizon",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: depth_state(true),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        // Accretion disk: alpha-blended, double-sided
        let disk_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Disk Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_disk",
                buffers: &[MeshVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_disk",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: depth_state(false),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        let jet_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Jet Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_jet",
                buffers: &[MeshVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_jet",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: depth_state(false),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        // Lensing shell renders its back faces only
        let lens_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Lens Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_lens",
                buffers: &[MeshVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_lens",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Front),
                ..Default::default()
            },
            depth_stencil: depth_state(false),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        // Starfield and Hawking radiation particles
        let point_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Point Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_point",
                buffers: &[PointVertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_point",
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::PointList,
                ..Default::default()
            },
            depth_stencil: depth_state(false),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        // Static geometry, built once from the scene parameters
        let p = &scene.params;
        let horizon = MeshBuffers::new(
            device,
            "Horizon Mesh",
            &geometry::uv_sphere(p.horizon_radius, 64, 64),
        );
        let disk = MeshBuffers::new(
            device,
            "Disk Mesh",
            &geometry::ring(p.disk_inner, p.disk_outer, 64, 32),
        );

        let top_jet = geometry::cylinder(0.2, 0.8, p.jet_length, 16)
            .translated(glam::Vec3::new(0.0, p.jet_offset, 0.0));
        let bottom_jet = geometry::cylinder(0.2, 0.8, p.jet_length, 16)
            .translated(glam::Vec3::new(0.0, p.jet_offset, 0.0))
            .mirrored_y();
        let jets = MeshBuffers::new(device, "Jet Mesh", &merge(top_jet, bottom_jet));

        let lens = MeshBuffers::new(
            device,
            "Lens Mesh",
            &geometry::uv_sphere(p.lens_radius, 64, 64),
        );

        let star_vertices: Vec<PointVertex> = scene
            .stars
            .iter()
            .map(|s| PointVertex {
                position: [s.x, s.y, s.z],
                color: [1.0, 1.0, 1.0, 1.0],
            })
            .collect();
        let star_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Star Buffer"),
            contents: bytemuck::cast_slice(&star_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let particle_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Particle Buffer"),
            size: (std::mem::size_of::<PointVertex>() * PARTICLE_COUNT) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            horizon_pipeline,
            disk_pipeline,
            jet_pipeline,
            lens_pipeline,
            point_pipeline,
            horizon,
            disk,
            jets,
            lens,
            star_buffer,
            star_count: star_vertices.len() as u32,
            particle_buffer,
            camera_buffer,
            scene_buffer,
            camera_bind_group,
            scene_bind_group,
            depth_texture,
        }
    }

    fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    pub fn update_camera(&self, queue: &wgpu::Queue, camera: &Camera3D) {
        let uniform = CameraUniform::from_camera(camera);
        queue.write_buffer(&self.camera_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    pub fn update_scene(&self, queue: &wgpu::Queue, uniform: SceneUniform) {
        queue.write_buffer(&self.scene_buffer, 0, bytemuck::cast_slice(&[uniform]));
    }

    /// Re-upload particle positions mutated by the animator this tick
    pub fn upload_particles(&self, queue: &wgpu::Queue, scene: &SceneGraph) {
        let vertices: Vec<PointVertex> = scene
            .particles
            .positions
            .iter()
            .zip(&scene.particles.colors)
            .map(|(pos, color)| PointVertex {
                position: [pos.x, pos.y, pos.z],
                color: [color[0], color[1], color[2], 0.6],
            })
            .collect();
        queue.write_buffer(&self.particle_buffer, 0, bytemuck::cast_slice(&vertices));
    }

    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        jets_visible: bool,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &self.depth_texture,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_bind_group(1, &self.scene_bind_group, &[]);

        // Starfield
        render_pass.set_pipeline(&self.point_pipeline);
        render_pass.set_vertex_buffer(0, self.star_buffer.slice(..));
        render_pass.draw(0..self.star_count, 0..1);

        // Opaque horizon writes depth; translucent objects test against it
        render_pass.set_pipeline(&self.horizon_pipeline);
        self.horizon.draw(&mut render_pass);

        render_pass.set_pipeline(&self.lens_pipeline);
        self.lens.draw(&mut render_pass);

        render_pass.set_pipeline(&self.disk_pipeline);
        self.disk.draw(&mut render_pass);

        if jets_visible {
            render_pass.set_pipeline(&self.jet_pipeline);
            self.jets.draw(&mut render_pass);
        }

        // Hawking radiation particles
        render_pass.set_pipeline(&self.point_pipeline);
        render_pass.set_vertex_buffer(0, self.particle_buffer.slice(..));
        render_pass.draw(0..PARTICLE_COUNT as u32, 0..1);
    }
}
