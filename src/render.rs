use crate::overlay::TooltipLayer;
use fnv::FnvHashMap;
use glam::Vec2;
use hero_core::{Camera, MeshKind, RenderSurface, SceneFrame, SurfaceError, TextureKey};
use web_sys as web;

mod helpers;
mod meshes;
mod textures;
mod uniforms;

use helpers::PipelineSpec;
use meshes::GpuMesh;
use textures::TextureCache;
use uniforms::{aligned_stride, Globals, ObjectUniform};

// Slots reserved up front; the scene needs a few dozen.
const INITIAL_OBJECT_SLOTS: u64 = 64;

struct ObjectSlots {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    stride: u64,
    capacity: u64,
}

impl ObjectSlots {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, stride: u64, capacity: u64) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("object_uniforms"),
            size: stride * capacity,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("object_bg"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<ObjectUniform>() as u64),
                }),
            }],
        });
        Self {
            buffer,
            bind_group,
            stride,
            capacity,
        }
    }
}

pub struct GpuState {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: (wgpu::Texture, wgpu::TextureView),

    globals_buffer: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    object_layout: wgpu::BindGroupLayout,
    objects: ObjectSlots,
    lit_pipeline: wgpu::RenderPipeline,
    sprite_pipeline: wgpu::RenderPipeline,

    meshes: FnvHashMap<MeshKind, GpuMesh>,
    textures: TextureCache,
    tooltips: TooltipLayer,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    staging: Vec<u8>,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        transparent: bool,
    ) -> Result<Self, SurfaceError> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| SurfaceError::Init(e.to_string()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(SurfaceError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| SurfaceError::Init(format!("request_device: {e}")))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| SurfaceError::Init("surface reports no formats".into()))?;
        let alpha_mode = if transparent
            && caps
                .alpha_modes
                .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        let depth = helpers::create_depth_texture(&device, width, height);

        let globals_size = std::mem::size_of::<Globals>() as u64;
        let object_size = std::mem::size_of::<ObjectUniform>() as u64;
        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[helpers::uniform_layout_entry(0, false, globals_size)],
        });
        let object_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[helpers::uniform_layout_entry(0, true, object_size)],
        });
        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: globals_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let stride = aligned_stride(
            object_size,
            device.limits().min_uniform_buffer_offset_alignment as u64,
        );
        let objects = ObjectSlots::new(&device, &object_layout, stride, INITIAL_OBJECT_SLOTS);
        let textures = TextureCache::new(&device);

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(hero_core::SCENE_WGSL.into()),
        });
        let sprite_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sprite_shader"),
            source: wgpu::ShaderSource::Wgsl(hero_core::SPRITE_WGSL.into()),
        });
        let lit_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lit_pl"),
            bind_group_layouts: &[&globals_layout, &object_layout],
            push_constant_ranges: &[],
        });
        let sprite_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sprite_pl"),
            bind_group_layouts: &[&globals_layout, &object_layout, textures.layout()],
            push_constant_ranges: &[],
        });
        let lit_pipeline = helpers::make_mesh_pipeline(
            &device,
            PipelineSpec {
                label: "lit_pipeline",
                layout: &lit_layout,
                shader: &scene_shader,
                vs_entry: "vs_main",
                fs_entry: "fs_main",
                color_format: format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: true,
                cull_mode: Some(wgpu::Face::Back),
            },
        );
        let sprite_pipeline = helpers::make_mesh_pipeline(
            &device,
            PipelineSpec {
                label: "sprite_pipeline",
                layout: &sprite_layout,
                shader: &sprite_shader,
                vs_entry: "vs_sprite",
                fs_entry: "fs_sprite",
                color_format: format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
                cull_mode: Some(wgpu::Face::Back),
            },
        );
        let meshes = meshes::upload_all(&device);

        let clear_color = if transparent {
            wgpu::Color::TRANSPARENT
        } else {
            let [r, g, b] = crate::constants::OPAQUE_CLEAR;
            wgpu::Color { r, g, b, a: 1.0 }
        };
        log::info!("[gpu] {width}x{height} {format:?} alpha={alpha_mode:?}");

        Ok(Self {
            canvas: canvas.clone(),
            surface,
            device,
            queue,
            config,
            depth,
            globals_buffer,
            globals_bg,
            object_layout,
            objects,
            lit_pipeline,
            sprite_pipeline,
            meshes,
            textures,
            tooltips: TooltipLayer::default(),
            width,
            height,
            clear_color,
            staging: Vec::new(),
        })
    }

    pub fn set_tooltips(&mut self, tooltips: TooltipLayer) {
        self.tooltips.remove();
        self.tooltips = tooltips;
    }

    pub fn upload_texture(&mut self, key: TextureKey, size: u32, rgba: &[u8]) -> Result<(), SurfaceError> {
        self.textures
            .insert(&self.device, &self.queue, key, size, rgba)
            .map_err(SurfaceError::Draw)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth = helpers::create_depth_texture(&self.device, width, height);
        }
    }

    fn ensure_object_slots(&mut self, count: u64) {
        if count <= self.objects.capacity {
            return;
        }
        let capacity = count.next_power_of_two();
        log::debug!("[gpu] growing object slots to {capacity}");
        self.objects = ObjectSlots::new(&self.device, &self.object_layout, self.objects.stride, capacity);
    }

    fn write_uniforms(&mut self, frame: &SceneFrame, camera: &Camera) {
        let globals = Globals::new(camera, &frame.lights, frame.time.elapsed);
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));

        self.ensure_object_slots(frame.items.len() as u64);
        let stride = self.objects.stride as usize;
        self.staging.clear();
        self.staging.resize(stride * frame.items.len(), 0);
        for (i, item) in frame.items.iter().enumerate() {
            let u = ObjectUniform::new(item);
            let bytes = bytemuck::bytes_of(&u);
            self.staging[i * stride..i * stride + bytes.len()].copy_from_slice(bytes);
        }
        if !self.staging.is_empty() {
            self.queue.write_buffer(&self.objects.buffer, 0, &self.staging);
        }
    }

    fn css_size(&self) -> Vec2 {
        let rect = self.canvas.get_bounding_client_rect();
        Vec2::new(rect.width() as f32, rect.height() as f32)
    }
}

impl RenderSurface for GpuState {
    fn viewport(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    fn draw(&mut self, frame: &SceneFrame, camera: &Camera) -> Result<(), SurfaceError> {
        self.resize_if_needed(self.canvas.width(), self.canvas.height());
        self.write_uniforms(frame, camera);

        let output = self
            .surface
            .get_current_texture()
            .map_err(|e| SurfaceError::Draw(e.to_string()))?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.1,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bg, &[]);

            // solids first so decals depth-test against them
            rpass.set_pipeline(&self.lit_pipeline);
            for (i, item) in frame.items.iter().enumerate() {
                if item.texture.is_some() {
                    continue;
                }
                let Some(mesh) = self.meshes.get(&item.mesh) else {
                    continue;
                };
                let offset = (i as u64 * self.objects.stride) as u32;
                rpass.set_bind_group(1, &self.objects.bind_group, &[offset]);
                rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
                rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }

            rpass.set_pipeline(&self.sprite_pipeline);
            for (i, item) in frame.items.iter().enumerate() {
                // faces whose texture has not been uploaded yet are skipped
                let Some(texture) = item.texture.as_ref().and_then(|k| self.textures.get(k)) else {
                    continue;
                };
                let Some(mesh) = self.meshes.get(&item.mesh) else {
                    continue;
                };
                let offset = (i as u64 * self.objects.stride) as u32;
                rpass.set_bind_group(1, &self.objects.bind_group, &[offset]);
                rpass.set_bind_group(2, texture, &[]);
                rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
                rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();

        self.tooltips
            .place(&frame.tooltips, camera, self.viewport(), self.css_size());
        Ok(())
    }

    fn release(&mut self) {
        log::debug!("[gpu] releasing {} face textures", self.textures.len());
        self.textures.clear();
        self.tooltips.remove();
        self.depth.0.destroy();
        self.objects.buffer.destroy();
        self.globals_buffer.destroy();
        for mesh in self.meshes.values() {
            mesh.vertices.destroy();
            mesh.indices.destroy();
        }
    }
}
