use super::helpers;
use crate::core::geometry::Vertex;
use crate::core::scene::{DecorativeObject, Material, Scene};
use glam::Vec3;
use smallvec::SmallVec;
use wgpu::util::DeviceExt;

pub(crate) const VERTEX_LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<Vertex>() as u64,
    step_mode: wgpu::VertexStepMode::Vertex,
    attributes: &[
        wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: 12,
            shader_location: 1,
            format: wgpu::VertexFormat::Float32x3,
        },
        wgpu::VertexAttribute {
            offset: 24,
            shader_location: 2,
            format: wgpu::VertexFormat::Float32x2,
        },
    ],
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    sun_dir: [f32; 4],
    sun_color: [f32; 4],
    point_pos: [[f32; 4]; 3],
    point_color: [[f32; 4]; 3],
}

impl SceneUniforms {
    pub(crate) fn from_scene(scene: &Scene) -> Self {
        let cam = &scene.camera;
        let lights = &scene.lights;
        let sun = &lights.directional;
        Self {
            view_proj: cam.view_proj().to_cols_array_2d(),
            view: cam.view().to_cols_array_2d(),
            camera_pos: cam.position.extend(1.0).to_array(),
            ambient: (lights.ambient.color * lights.ambient.intensity)
                .extend(0.0)
                .to_array(),
            sun_dir: sun.position.normalize_or_zero().extend(0.0).to_array(),
            sun_color: (sun.color * sun.intensity).extend(0.0).to_array(),
            point_pos: lights.points.map(|l| l.position.extend(l.distance).to_array()),
            point_color: lights.points.map(|l| l.color.extend(l.intensity).to_array()),
        }
    }
}

// Opacity of the glow material; the rim term shapes the colour underneath.
const GLOW_ALPHA: f32 = 0.7;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    params: [f32; 4],
}

impl ObjectUniforms {
    pub(crate) fn from_object(obj: &DecorativeObject) -> Self {
        let material = &obj.mesh.material;
        let (alpha, params) = match *material {
            Material::Glow { time, .. } => (GLOW_ALPHA, [0.0, 0.0, 0.0, time]),
            Material::Physical {
                metalness,
                roughness,
                opacity,
                ..
            } => (opacity, [1.0, metalness, roughness, 0.0]),
            Material::Standard {
                metalness,
                roughness,
                opacity,
                ..
            } => (opacity, [2.0, metalness, roughness, 0.0]),
        };
        Self {
            model: obj.mesh.model_matrix().to_cols_array_2d(),
            color: material.color().extend(alpha).to_array(),
            params,
        }
    }
}

pub(crate) struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

pub(crate) struct MeshResources {
    pipeline: wgpu::RenderPipeline,
    scene_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    meshes: Vec<GpuMesh>,
}

pub(crate) fn create_mesh_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    scene: &Scene,
) -> MeshResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("mesh_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::MESH_WGSL.into()),
    });
    let scene_bgl = helpers::uniform_layout(
        device,
        "mesh_scene_bgl",
        wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
    );
    let object_bgl = helpers::uniform_layout(
        device,
        "mesh_object_bgl",
        wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
    );
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("mesh_pl"),
        bind_group_layouts: &[&scene_bgl, &object_bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("mesh_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[VERTEX_LAYOUT],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(helpers::depth_state(true)),
        multisample: helpers::multisample_state(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let scene_buffer = helpers::uniform_buffer::<SceneUniforms>(device, "mesh_scene_uniforms");
    let scene_bind_group =
        helpers::single_buffer_bind_group(device, "mesh_scene_bg", &scene_bgl, &scene_buffer);

    let meshes = scene
        .objects
        .iter()
        .map(|obj| {
            let label = obj.mesh.geometry.label();
            let data = obj.mesh.geometry.build();
            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&data.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&data.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
            let uniform_buffer = helpers::uniform_buffer::<ObjectUniforms>(device, label);
            let bind_group =
                helpers::single_buffer_bind_group(device, label, &object_bgl, &uniform_buffer);
            GpuMesh {
                vertex_buffer,
                index_buffer,
                index_count: data.indices.len() as u32,
                uniform_buffer,
                bind_group,
            }
        })
        .collect();

    MeshResources {
        pipeline,
        scene_buffer,
        scene_bind_group,
        meshes,
    }
}

impl MeshResources {
    pub(crate) fn write(&self, queue: &wgpu::Queue, scene: &Scene) {
        let su = SceneUniforms::from_scene(scene);
        queue.write_buffer(&self.scene_buffer, 0, bytemuck::bytes_of(&su));
        for (gpu, obj) in self.meshes.iter().zip(&scene.objects) {
            let ou = ObjectUniforms::from_object(obj);
            queue.write_buffer(&gpu.uniform_buffer, 0, bytemuck::bytes_of(&ou));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, scene: &Scene) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.scene_bind_group, &[]);
        for i in back_to_front(scene) {
            let Some(gpu) = self.meshes.get(i) else {
                continue;
            };
            rpass.set_bind_group(1, &gpu.bind_group, &[]);
            rpass.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
            rpass.set_index_buffer(gpu.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..gpu.index_count, 0, 0..1);
        }
    }
}

/// Every material is translucent, so draw the farthest object first.
fn back_to_front(scene: &Scene) -> SmallVec<[usize; 8]> {
    let eye: Vec3 = scene.camera.position;
    let mut order: SmallVec<[usize; 8]> = (0..scene.objects.len()).collect();
    order.sort_by(|&a, &b| {
        let da = scene.objects[a].mesh.position.distance_squared(eye);
        let db = scene.objects[b].mesh.position.distance_squared(eye);
        db.total_cmp(&da)
    });
    order
}
