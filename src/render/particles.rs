use super::helpers;
use crate::constants::{PARTICLE_COLOR, PARTICLE_OPACITY, PARTICLE_SIZE};
use crate::core::scene::Scene;
use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    camera_right: [f32; 4],
    camera_up: [f32; 4],
    color: [f32; 4],
    params: [f32; 4],
}

pub(crate) struct ParticleResources {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    count: u32,
}

pub(crate) fn create_particle_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    particle_count: usize,
) -> ParticleResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("particles_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PARTICLES_WGSL.into()),
    });
    let bgl = helpers::uniform_layout(
        device,
        "particles_bgl",
        wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
    );
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("particles_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("particles_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vec3>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                }],
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(helpers::depth_state(false)),
        multisample: helpers::multisample_state(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(helpers::ADDITIVE_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });
    let uniform_buffer = helpers::uniform_buffer::<ParticleUniforms>(device, "particles_uniforms");
    let bind_group =
        helpers::single_buffer_bind_group(device, "particles_bg", &bgl, &uniform_buffer);
    let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("particles_instances"),
        size: (particle_count.max(1) * std::mem::size_of::<Vec3>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    ParticleResources {
        pipeline,
        uniform_buffer,
        bind_group,
        instance_buffer,
        count: particle_count as u32,
    }
}

impl ParticleResources {
    /// Upload uniforms, and positions only when the cloud reports changes.
    pub(crate) fn write(&self, queue: &wgpu::Queue, scene: &mut Scene) {
        let view = scene.camera.view();
        let pu = ParticleUniforms {
            view_proj: scene.camera.view_proj().to_cols_array_2d(),
            model: scene.particles.model_matrix().to_cols_array_2d(),
            camera_right: view.row(0).truncate().extend(0.0).to_array(),
            camera_up: view.row(1).truncate().extend(0.0).to_array(),
            color: [
                PARTICLE_COLOR[0],
                PARTICLE_COLOR[1],
                PARTICLE_COLOR[2],
                PARTICLE_OPACITY,
            ],
            params: [PARTICLE_SIZE, 0.0, 0.0, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&pu));

        let cloud = &mut scene.particles;
        if cloud.dirty {
            let n = cloud.len().min(self.count as usize);
            queue.write_buffer(
                &self.instance_buffer,
                0,
                bytemuck::cast_slice(&cloud.positions()[..n]),
            );
            cloud.dirty = false;
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instance_buffer.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
