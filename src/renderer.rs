use std::sync::Arc;

use log::{info, warn};
use winit::window::Window;

use crate::core::{FrameSnapshot, GpuContext};
use crate::error::{RenderError, RenderResult};
use crate::loaders::textures::{TextureTable, CUBE_FACES, MATERIAL_TEXTURES, TEXTURE_SIZE};
use crate::traits::{Presentation, RenderBackend};
use crate::types::{FrameHeader, SceneBlock};

pub const WORKGROUP_SIZE: u32 = 8;

const ACCUMULATION_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Fill for empty slots. The kernel never samples them, but the texture
/// arrays need every layer.
const BLANK_DIFFUSE: [u8; 4] = [255, 255, 255, 255];
const FLAT_NORMAL: [u8; 4] = [128, 128, 255, 255];
const BLANK_ENVIRONMENT: [u8; 4] = [0, 0, 0, 255];

/// One accumulation buffer on the GPU
pub struct AccumulationSurface {
    _texture: wgpu::Texture,
    view: wgpu::TextureView,
}

/// egui output waiting to be drawn over the next composite
pub struct OverlayFrame {
    pub primitives: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
}

impl OverlayFrame {
    /// Fold a newer frame into this one. The newest shapes win, but texture
    /// updates accumulate so none is lost while presentation is skipped.
    pub fn merge(&mut self, newer: OverlayFrame) {
        self.textures_delta.append(newer.textures_delta);
        self.primitives = newer.primitives;
        self.pixels_per_point = newer.pixels_per_point;
    }
}

struct SceneTextures {
    diffuse: wgpu::TextureView,
    normal: wgpu::TextureView,
    environments: [wgpu::TextureView; 2],
    mask: u32,
}

/// wgpu implementation of [`RenderBackend`]: a compute kernel writing
/// `Rgba16Float` surfaces and a fullscreen pass presenting them.
pub struct GpuBackend {
    context: GpuContext,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    kernel_pipeline: wgpu::ComputePipeline,
    kernel_layout: wgpu::BindGroupLayout,
    header_buffer: wgpu::Buffer,
    scene_buffer: wgpu::Buffer,
    composite_pipeline: wgpu::RenderPipeline,
    composite_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    textures: SceneTextures,
    egui_renderer: egui_wgpu::Renderer,
    overlay: Option<OverlayFrame>,
}

impl GpuBackend {
    pub async fn new(window: Arc<Window>, table: &TextureTable) -> RenderResult<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .map_err(|e| RenderError::SurfaceCreation(e.to_string()))?;
        let context = GpuContext::new_with_surface(&instance, &surface).await?;

        let config = Self::create_surface_config(&surface, context.adapter(), size.width, size.height)?;
        if config.width > 0 && config.height > 0 {
            surface.configure(context.device(), &config);
        }

        let device = context.device();
        let header_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Header"),
            size: std::mem::size_of::<FrameHeader>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Scene Block"),
            size: std::mem::size_of::<SceneBlock>() as u64,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Linear Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let (kernel_pipeline, kernel_layout) = Self::create_kernel_pipeline(device);
        let (composite_pipeline, composite_layout) =
            Self::create_composite_pipeline(device, config.format);
        let textures = Self::upload_textures(&context, table);

        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            config.format,
            egui_wgpu::RendererOptions::default(),
        );

        info!(
            "GPU backend ready: {}x{} {:?}",
            config.width, config.height, config.format
        );

        Ok(Self {
            context,
            surface,
            config,
            kernel_pipeline,
            kernel_layout,
            header_buffer,
            scene_buffer,
            composite_pipeline,
            composite_layout,
            sampler,
            textures,
            egui_renderer,
            overlay: None,
        })
    }

    /// Draw `overlay` on top of the next composited frame. Texture updates
    /// from frames that were never presented are kept.
    pub fn queue_overlay(&mut self, overlay: OverlayFrame) {
        let merged = match self.overlay.take() {
            Some(mut pending) => {
                pending.merge(overlay);
                pending
            }
            None => overlay,
        };
        self.overlay = Some(merged);
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> RenderResult<wgpu::SurfaceConfiguration> {
        let caps = surface.get_capabilities(adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| RenderError::SurfaceCreation("surface reports no formats".into()))?;

        Ok(wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        })
    }

    fn create_texture_layers(
        context: &GpuContext,
        label: &str,
        format: wgpu::TextureFormat,
        layers: &[Option<&[u8]>],
        fill: [u8; 4],
    ) -> wgpu::Texture {
        let texture = context.device().create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width: TEXTURE_SIZE,
                height: TEXTURE_SIZE,
                depth_or_array_layers: layers.len() as u32,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let blank: Vec<u8> = fill
            .iter()
            .copied()
            .cycle()
            .take((TEXTURE_SIZE * TEXTURE_SIZE * 4) as usize)
            .collect();

        for (layer, data) in layers.iter().enumerate() {
            context.queue().write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d {
                        x: 0,
                        y: 0,
                        z: layer as u32,
                    },
                    aspect: wgpu::TextureAspect::All,
                },
                data.unwrap_or(blank.as_slice()),
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * TEXTURE_SIZE),
                    rows_per_image: Some(TEXTURE_SIZE),
                },
                wgpu::Extent3d {
                    width: TEXTURE_SIZE,
                    height: TEXTURE_SIZE,
                    depth_or_array_layers: 1,
                },
            );
        }
        texture
    }

    fn upload_textures(context: &GpuContext, table: &TextureTable) -> SceneTextures {
        let ids = 1..=MATERIAL_TEXTURES.len() as u32;
        let diffuse: Vec<Option<&[u8]>> = ids
            .clone()
            .map(|id| table.diffuse(id).map(|img| img.as_raw().as_slice()))
            .collect();
        let normal: Vec<Option<&[u8]>> = ids
            .map(|id| table.normal(id).map(|img| img.as_raw().as_slice()))
            .collect();

        let array_view = |texture: wgpu::Texture| {
            texture.create_view(&wgpu::TextureViewDescriptor {
                dimension: Some(wgpu::TextureViewDimension::D2Array),
                ..Default::default()
            })
        };
        let cube_view = |texture: wgpu::Texture| {
            texture.create_view(&wgpu::TextureViewDescriptor {
                dimension: Some(wgpu::TextureViewDimension::Cube),
                ..Default::default()
            })
        };

        let diffuse = array_view(Self::create_texture_layers(
            context,
            "Diffuse Maps",
            wgpu::TextureFormat::Rgba8UnormSrgb,
            &diffuse,
            BLANK_DIFFUSE,
        ));
        let normal = array_view(Self::create_texture_layers(
            context,
            "Normal Maps",
            wgpu::TextureFormat::Rgba8Unorm,
            &normal,
            FLAT_NORMAL,
        ));
        let environments = [0u32, 1].map(|cube| {
            let faces: Vec<Option<&[u8]>> = match table.environment(cube) {
                Some(faces) => faces.iter().map(|img| Some(img.as_raw().as_slice())).collect(),
                None => vec![None; CUBE_FACES.len()],
            };
            cube_view(Self::create_texture_layers(
                context,
                "Environment Cube",
                wgpu::TextureFormat::Rgba8UnormSrgb,
                &faces,
                BLANK_ENVIRONMENT,
            ))
        });

        SceneTextures {
            diffuse,
            normal,
            environments,
            mask: table.presence_mask(),
        }
    }

    fn create_kernel_pipeline(device: &wgpu::Device) -> (wgpu::ComputePipeline, wgpu::BindGroupLayout) {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Ray Trace Kernel"),
            source: wgpu::ShaderSource::Wgsl(include_str!("raytrace.wgsl").into()),
        });

        let texture_entry = |binding: u32, view_dimension: wgpu::TextureViewDimension| {
            wgpu::BindGroupLayoutEntry {
                binding,
                visibility: wgpu::ShaderStages::COMPUTE,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension,
                    multisampled: false,
                },
                count: None,
            }
        };

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("kernel_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                texture_entry(2, wgpu::TextureViewDimension::D2),
                wgpu::BindGroupLayoutEntry {
                    binding: 3,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::StorageTexture {
                        access: wgpu::StorageTextureAccess::WriteOnly,
                        format: ACCUMULATION_FORMAT,
                        view_dimension: wgpu::TextureViewDimension::D2,
                    },
                    count: None,
                },
                texture_entry(4, wgpu::TextureViewDimension::D2Array),
                texture_entry(5, wgpu::TextureViewDimension::D2Array),
                texture_entry(6, wgpu::TextureViewDimension::Cube),
                texture_entry(7, wgpu::TextureViewDimension::Cube),
                wgpu::BindGroupLayoutEntry {
                    binding: 8,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Kernel Pipeline Layout"),
            bind_group_layouts: &[&layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("Kernel Pipeline"),
            layout: Some(&pipeline_layout),
            module: &shader,
            entry_point: Some("main"),
            compilation_options: Default::default(),
            cache: None,
        });

        (pipeline, layout)
    }

    fn create_composite_pipeline(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
    ) -> (wgpu::RenderPipeline, wgpu::BindGroupLayout) {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Composite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("composite.wgsl").into()),
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("composite_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Composite Pipeline Layout"),
            bind_group_layouts: &[&layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Composite Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        (pipeline, layout)
    }

    fn draw_overlay(&mut self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let Some(overlay) = self.overlay.take() else {
            return;
        };
        let device = self.context.device();
        let queue = self.context.queue();

        for (id, delta) in &overlay.textures_delta.set {
            self.egui_renderer.update_texture(device, queue, *id, delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: overlay.pixels_per_point,
        };
        self.egui_renderer
            .update_buffers(device, queue, encoder, &overlay.primitives, &screen_descriptor);

        {
            let mut render_pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui Pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
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
            self.egui_renderer
                .render(&mut render_pass, &overlay.primitives, &screen_descriptor);
        }

        for id in &overlay.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}

impl RenderBackend for GpuBackend {
    type Surface = AccumulationSurface;

    fn allocate_surface(&mut self, width: u32, height: u32) -> RenderResult<AccumulationSurface> {
        if width == 0 || height == 0 {
            return Err(RenderError::ZeroExtent { width, height });
        }
        let texture = self.context.device().create_texture(&wgpu::TextureDescriptor {
            label: Some("Accumulation Surface"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: ACCUMULATION_FORMAT,
            usage: wgpu::TextureUsages::STORAGE_BINDING | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Ok(AccumulationSurface {
            _texture: texture,
            view,
        })
    }

    fn trace(
        &mut self,
        snapshot: &FrameSnapshot,
        previous: &AccumulationSurface,
        next: &AccumulationSurface,
    ) -> RenderResult<()> {
        let queue = self.context.queue();
        queue.write_buffer(
            &self.header_buffer,
            0,
            bytemuck::cast_slice(&[snapshot.header(self.textures.mask)]),
        );
        queue.write_buffer(
            &self.scene_buffer,
            0,
            bytemuck::cast_slice(&[snapshot.scene_block()]),
        );

        let device = self.context.device();
        let [env0, env1] = &self.textures.environments;
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("kernel_bind_group"),
            layout: &self.kernel_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: self.header_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: self.scene_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&previous.view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(&next.view),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::TextureView(&self.textures.diffuse),
                },
                wgpu::BindGroupEntry {
                    binding: 5,
                    resource: wgpu::BindingResource::TextureView(&self.textures.normal),
                },
                wgpu::BindGroupEntry {
                    binding: 6,
                    resource: wgpu::BindingResource::TextureView(env0),
                },
                wgpu::BindGroupEntry {
                    binding: 7,
                    resource: wgpu::BindingResource::TextureView(env1),
                },
                wgpu::BindGroupEntry {
                    binding: 8,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        });

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Kernel Encoder"),
        });
        {
            let mut compute_pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("Kernel Pass"),
                timestamp_writes: None,
            });
            compute_pass.set_pipeline(&self.kernel_pipeline);
            compute_pass.set_bind_group(0, &bind_group, &[]);
            let (width, height) = snapshot.dimensions;
            compute_pass.dispatch_workgroups(
                width.div_ceil(WORKGROUP_SIZE),
                height.div_ceil(WORKGROUP_SIZE),
                1,
            );
        }
        queue.submit(std::iter::once(encoder.finish()));
        self.context.wait_idle()
    }

    fn composite(
        &mut self,
        _snapshot: &FrameSnapshot,
        next: &AccumulationSurface,
    ) -> RenderResult<Presentation> {
        if self.config.width == 0 || self.config.height == 0 {
            return Ok(Presentation::Skipped);
        }

        let output = match self.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                warn!("Display surface out of date, reconfiguring");
                self.surface.configure(self.context.device(), &self.config);
                return Ok(Presentation::Skipped);
            }
            Err(wgpu::SurfaceError::Timeout) => {
                warn!("Timed out acquiring display surface");
                return Ok(Presentation::Skipped);
            }
            Err(e) => return Err(RenderError::Surface(e)),
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = self
            .context
            .device()
            .create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("composite_bind_group"),
                layout: &self.composite_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&next.view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&self.sampler),
                    },
                ],
            });

        let mut encoder = self
            .context
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Composite Encoder"),
            });
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Composite Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_pipeline(&self.composite_pipeline);
            render_pass.set_bind_group(0, &bind_group, &[]);
            render_pass.draw(0..3, 0..1);
        }

        self.draw_overlay(&mut encoder, &view);

        self.context.queue().submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(Presentation::Presented)
    }

    fn resize_display(&mut self, width: u32, height: u32) {
        self.config.width = width;
        self.config.height = height;
        if width > 0 && height > 0 {
            self.surface.configure(self.context.device(), &self.config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay(textures: &[u64], pixels_per_point: f32) -> OverlayFrame {
        let mut textures_delta = egui::TexturesDelta::default();
        for &id in textures {
            let image = egui::ColorImage::from_rgba_unmultiplied([1, 1], &[255, 255, 255, 255]);
            textures_delta.set.push((
                egui::TextureId::Managed(id),
                egui::epaint::ImageDelta::full(image, egui::TextureOptions::LINEAR),
            ));
        }
        OverlayFrame {
            primitives: Vec::new(),
            textures_delta,
            pixels_per_point,
        }
    }

    #[test]
    fn test_merge_keeps_texture_uploads_from_skipped_frames() {
        let mut pending = overlay(&[0], 1.0);
        pending.merge(overlay(&[], 2.0));
        pending.merge(overlay(&[7], 1.5));

        let ids: Vec<egui::TextureId> = pending.textures_delta.set.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![egui::TextureId::Managed(0), egui::TextureId::Managed(7)]);
        assert_eq!(pending.pixels_per_point, 1.5);
    }

    #[test]
    fn test_merge_carries_frees() {
        let mut pending = overlay(&[], 1.0);
        let mut newer = overlay(&[], 1.0);
        newer.textures_delta.free.push(egui::TextureId::Managed(3));
        pending.merge(newer);
        assert_eq!(pending.textures_delta.free, vec![egui::TextureId::Managed(3)]);
    }
}
