//! Specimen renderer.
//!
//! Every specimen owns two identical circle meshes (slot A and slot B). Each
//! frame the caller plans a `DrawCall` list with `microscope_focus::plan_draws`
//! and this renderer replays it: bind mesh, bind slice texture, select the
//! draw's alpha, draw. Calls are issued in list order with straight alpha
//! blending and no depth test, so later specimens composite over earlier ones.

pub mod mesh;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use microscope_focus::{DrawCall, Specimen};

use crate::render::shader::{compile_wgsl, ShaderCompileError};
use crate::render::{RenderCtx, RenderTarget};
use crate::texture::{TextureId, TextureStore};

use mesh::{circle_vertices, CircleVertex, CIRCLE_VERTEX_COUNT};

/// Depth of every specimen mesh in clip space.
const MESH_Z: f32 = 0.0;

/// Per-draw uniform (16 bytes). Matches `DrawAlpha` in `specimen.wgsl`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct DrawAlpha {
    alpha: f32,
    _pad: [f32; 3],
}

const DRAW_ALPHA_SIZE: u64 = std::mem::size_of::<DrawAlpha>() as u64;

pub struct SpecimenRenderer {
    pipeline: wgpu::RenderPipeline,

    /// Two meshes per specimen, indexed by `DrawCall::mesh`.
    meshes: Vec<wgpu::Buffer>,

    alpha_layout: wgpu::BindGroupLayout,
    alpha_ubo: wgpu::Buffer,
    alpha_bind_group: wgpu::BindGroup,
    /// Distance between per-draw uniforms; a multiple of the device's
    /// dynamic offset alignment.
    alpha_stride: u64,
    alpha_capacity: usize,
    alpha_staging: Vec<u8>,

    warned_bad_call: bool,
}

impl SpecimenRenderer {
    /// Compiles the pipeline and uploads both meshes for every specimen.
    pub fn new(
        ctx: &RenderCtx<'_>,
        textures: &TextureStore,
        specimens: &[Specimen<TextureId>],
    ) -> Result<Self, ShaderCompileError> {
        let shader = compile_wgsl(
            ctx.device,
            "microscope specimen shader",
            include_str!("../shaders/specimen.wgsl"),
        )?;

        let alpha_layout = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("microscope alpha bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(DRAW_ALPHA_SIZE),
                },
                count: None,
            }],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("microscope specimen pipeline layout"),
            bind_group_layouts: &[textures.bind_group_layout(), &alpha_layout],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("microscope specimen pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[CircleVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    // src.rgb * src.a + dst.rgb * (1 - src.a)
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // The fan winds clockwise; draw both faces.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let mut meshes = Vec::with_capacity(specimens.len() * 2);
        for (i, specimen) in specimens.iter().enumerate() {
            let verts = circle_vertices(specimen.center(), MESH_Z, specimen.radius());
            for slot in ["a", "b"] {
                meshes.push(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("microscope specimen {i} mesh {slot}")),
                    contents: bytemuck::cast_slice(&verts),
                    usage: wgpu::BufferUsages::VERTEX,
                }));
            }
        }

        let align = ctx.device.limits().min_uniform_buffer_offset_alignment as u64;
        let alpha_stride = DRAW_ALPHA_SIZE.div_ceil(align) * align;
        let alpha_capacity = meshes.len().max(1);
        let (alpha_ubo, alpha_bind_group) =
            create_alpha_slots(ctx.device, &alpha_layout, alpha_stride, alpha_capacity);

        log::info!(
            "specimen renderer ready: {} specimens, {} meshes, {} textures",
            specimens.len(),
            meshes.len(),
            textures.len()
        );

        Ok(Self {
            pipeline,
            meshes,
            alpha_layout,
            alpha_ubo,
            alpha_bind_group,
            alpha_stride,
            alpha_capacity,
            alpha_staging: Vec::new(),
            warned_bad_call: false,
        })
    }

    /// Replays `calls` in order into the target's colour view.
    ///
    /// Calls referring to an unknown mesh or texture are skipped with a
    /// one-time warning.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        calls: &[DrawCall<TextureId>],
        textures: &TextureStore,
    ) {
        if calls.is_empty() {
            return;
        }

        self.ensure_alpha_capacity(ctx, calls.len());
        self.write_alphas(ctx, calls);

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("microscope specimen pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(&self.pipeline);

        for (i, call) in calls.iter().enumerate() {
            let mesh = self.meshes.get(call.mesh);
            let slice = textures.bind_group(call.texture);
            let (Some(mesh), Some(slice)) = (mesh, slice) else {
                if !self.warned_bad_call {
                    log::warn!("skipping draw call with unknown mesh or texture: {call:?}");
                    self.warned_bad_call = true;
                }
                continue;
            };

            let offset = alpha_offset(i, self.alpha_stride);
            rpass.set_bind_group(0, slice, &[]);
            rpass.set_bind_group(1, &self.alpha_bind_group, &[offset]);
            rpass.set_vertex_buffer(0, mesh.slice(..));
            rpass.draw(0..CIRCLE_VERTEX_COUNT, 0..1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn write_alphas(&mut self, ctx: &RenderCtx<'_>, calls: &[DrawCall<TextureId>]) {
        pack_alphas(calls, self.alpha_stride as usize, &mut self.alpha_staging);
        ctx.queue.write_buffer(&self.alpha_ubo, 0, &self.alpha_staging);
    }

    fn ensure_alpha_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.alpha_capacity {
            return;
        }
        let new_cap = required.next_power_of_two();
        let (ubo, bind_group) =
            create_alpha_slots(ctx.device, &self.alpha_layout, self.alpha_stride, new_cap);
        self.alpha_ubo = ubo;
        self.alpha_bind_group = bind_group;
        self.alpha_capacity = new_cap;
        log::debug!("grew alpha uniform slots to {new_cap}");
    }
}

/// Writes one `DrawAlpha` per call into `out`, call `i` at byte `i * stride`.
///
/// `stride` must be at least `DRAW_ALPHA_SIZE`; bytes between records are zero.
fn pack_alphas<T>(calls: &[DrawCall<T>], stride: usize, out: &mut Vec<u8>) {
    out.clear();
    out.resize(calls.len() * stride, 0);

    for (i, call) in calls.iter().enumerate() {
        let uniform = DrawAlpha { alpha: call.alpha.clamp(0.0, 1.0), _pad: [0.0; 3] };
        let start = i * stride;
        out[start..start + DRAW_ALPHA_SIZE as usize].copy_from_slice(bytemuck::bytes_of(&uniform));
    }
}

/// Offset of call `i`'s uniform, a multiple of `stride`.
fn alpha_offset(i: usize, stride: u64) -> u32 {
    (i as u64 * stride) as u32
}

fn create_alpha_slots(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    stride: u64,
    capacity: usize,
) -> (wgpu::Buffer, wgpu::BindGroup) {
    let ubo = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("microscope alpha ubo"),
        size: stride * capacity as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("microscope alpha bind group"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                buffer: &ubo,
                offset: 0,
                size: wgpu::BufferSize::new(DRAW_ALPHA_SIZE),
            }),
        }],
    });

    (ubo, bind_group)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(mesh: usize, alpha: f32) -> DrawCall<usize> {
        DrawCall { mesh, texture: mesh, alpha }
    }

    fn alpha_at(bytes: &[u8], start: usize) -> f32 {
        f32::from_ne_bytes(bytes[start..start + 4].try_into().unwrap())
    }

    #[test]
    fn draw_alpha_is_16_bytes() {
        assert_eq!(DRAW_ALPHA_SIZE, 16);
    }

    #[test]
    fn each_call_lands_at_its_stride() {
        let calls = [call(0, 0.25), call(1, 0.75), call(2, 1.0)];
        let stride = 256;
        let mut out = Vec::new();
        pack_alphas(&calls, stride, &mut out);

        assert_eq!(out.len(), calls.len() * stride);
        for (i, c) in calls.iter().enumerate() {
            assert_eq!(alpha_at(&out, i * stride), c.alpha);
            assert_eq!(alpha_offset(i, stride as u64) as usize, i * stride);
        }
    }

    #[test]
    fn padding_and_gaps_are_zero() {
        let calls = [call(0, 0.5), call(1, 0.5)];
        let stride = 64;
        let mut out = Vec::new();
        pack_alphas(&calls, stride, &mut out);

        for i in 0..calls.len() {
            let record = &out[i * stride..(i + 1) * stride];
            assert!(record[4..].iter().all(|b| *b == 0));
        }
    }

    #[test]
    fn out_of_range_alphas_are_clamped() {
        let calls = [call(0, -0.5), call(1, 1.5), call(2, 0.3)];
        let mut out = Vec::new();
        pack_alphas(&calls, 16, &mut out);

        assert_eq!(alpha_at(&out, 0), 0.0);
        assert_eq!(alpha_at(&out, 16), 1.0);
        assert_eq!(alpha_at(&out, 32), 0.3);
    }

    #[test]
    fn repacking_reuses_and_shrinks_the_buffer() {
        let mut out = Vec::new();
        pack_alphas(&[call(0, 1.0), call(1, 1.0)], 32, &mut out);
        pack_alphas(&[call(0, 0.5)], 32, &mut out);

        assert_eq!(out.len(), 32);
        assert_eq!(alpha_at(&out, 0), 0.5);
    }
}
