use crate::dom::{listen, listen_mouse, sync_canvas_backing_size, viewport_size};
use crate::geometry::unit_pointer;
use crate::markup::SECTION_BG_CLASS;
use fx_core::scene::{PointCloudConfig, PointScene, PointUniforms};
use fx_core::FrameRegistry;
use glam::Vec3;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;
use wgpu::util::DeviceExt;

const LAYER_STYLE: &str =
    "position: absolute; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none;";
const SECTION_LAYER_STYLE: &str =
    "position: absolute; top: 0; left: 0; width: 100%; height: 100%; z-index: -1;";

// Points glow where they overlap.
const ADDITIVE: wgpu::BlendState = wgpu::BlendState {
    color: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
    alpha: wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::One,
        operation: wgpu::BlendOperation::Add,
    },
};

pub struct Gpu {
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
}

/// One canvas drawing one rotating point cloud.
pub struct PointLayer {
    gpu: Rc<Gpu>,
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    point_buffer: wgpu::Buffer,
    point_count: u32,
    pub scene: PointScene,
}

impl PointLayer {
    fn new(
        gpu: Rc<Gpu>,
        canvas: web::HtmlCanvasElement,
        surface: wgpu::Surface<'static>,
        scene: PointScene,
    ) -> anyhow::Result<Self> {
        let (width, height) = sync_canvas_backing_size(&canvas);
        let caps = surface.get_capabilities(&gpu.adapter);
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
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
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
        surface.configure(&gpu.device, &config);

        let device = &gpu.device;
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("points_shader"),
            source: wgpu::ShaderSource::Wgsl(fx_core::POINTS_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("points_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("points_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("points_pipeline"),
            layout: Some(&layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_points"),
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vec3>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3],
                }],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_points"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(ADDITIVE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });
        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("points_uniforms"),
            size: std::mem::size_of::<PointUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("points_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let point_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("points"),
            contents: bytemuck::cast_slice(&scene.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let point_count = scene.positions.len() as u32;

        let mut layer = Self {
            gpu: gpu.clone(),
            canvas,
            surface,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
            point_buffer,
            point_count,
            scene,
        };
        layer.scene.set_viewport(width as f32, height as f32);
        Ok(layer)
    }

    pub fn resize(&mut self) {
        let (width, height) = sync_canvas_backing_size(&self.canvas);
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.gpu.device, &self.config);
        self.scene.set_viewport(width as f32, height as f32);
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.gpu.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&self.scene.uniforms()),
        );
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("points_encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("points_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.point_buffer.slice(..));
            rpass.draw(0..6, 0..self.point_count);
        }
        self.gpu.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Spins, then draws. A lost surface is reconfigured for the next frame.
    pub fn frame(&mut self) {
        self.scene.tick();
        match self.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.gpu.device, &self.config);
            }
            Err(e) => log::warn!("[points] frame skipped: {:?}", e),
        }
    }
}

fn layer_canvas(
    document: &web::Document,
    class: Option<&str>,
    style: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("created element is not a canvas"))?;
    if let Some(class) = class {
        canvas.set_class_name(class);
    }
    _ = canvas.set_attribute("style", style);
    Ok(canvas)
}

struct Pending {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    config: PointCloudConfig,
    host: web::Element,
}

impl Pending {
    /// Inserts the canvas into its host. Hero layers go last, section
    /// layers first so the section content paints above them.
    fn attach(&self) -> anyhow::Result<()> {
        let r = if self.config == PointCloudConfig::HERO {
            self.host.append_child(&self.canvas).map(|_| ())
        } else {
            if let Some(el) = self.host.dyn_ref::<web::HtmlElement>() {
                _ = el.style().set_property("position", "relative");
            }
            self.host.prepend_with_node_1(&self.canvas)
        };
        r.map_err(|e| anyhow::anyhow!("{:?}", e))
    }
}

/// Which point layers to build.
pub struct PointTargets<'a> {
    pub hero: Option<&'a web::Element>,
    pub sections: &'a [web::Element],
}

/// Creates the hero and section canvases, acquires one device for all of
/// them and registers a frame consumer per kind. Canvases are only inserted
/// once the device exists, so without WebGPU the page is left untouched and
/// the error is returned for logging.
pub async fn install_point_layers(
    document: &web::Document,
    targets: PointTargets<'_>,
    rng: &mut StdRng,
    frames: &mut FrameRegistry,
) -> anyhow::Result<()> {
    let instance = wgpu::Instance::default();
    let mut pending = Vec::new();
    if let Some(hero) = targets.hero {
        let canvas = layer_canvas(document, None, LAYER_STYLE)?;
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        pending.push(Pending {
            canvas,
            surface,
            config: PointCloudConfig::HERO,
            host: hero.clone(),
        });
    }
    for section in targets.sections {
        let canvas = layer_canvas(document, Some(SECTION_BG_CLASS), SECTION_LAYER_STYLE)?;
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        pending.push(Pending {
            canvas,
            surface,
            config: PointCloudConfig::SECTION,
            host: section.clone(),
        });
    }
    if pending.is_empty() {
        return Ok(());
    }

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: pending.first().map(|p| &p.surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
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
        .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
    let gpu = Rc::new(Gpu {
        adapter,
        device,
        queue,
    });

    let mut hero_layer = None;
    let mut section_layers = Vec::new();
    for p in pending {
        p.attach()?;
        let aspect = {
            let rect = p.canvas.get_bounding_client_rect();
            (rect.width().max(1.0) / rect.height().max(1.0)) as f32
        };
        let scene = PointScene::new(p.config, aspect, rng);
        let layer = PointLayer::new(gpu.clone(), p.canvas, p.surface, scene)?;
        if p.config == PointCloudConfig::HERO {
            hero_layer = Some(layer);
        } else {
            section_layers.push(layer);
        }
    }
    log::info!(
        "[points] hero={} sections={}",
        hero_layer.is_some(),
        section_layers.len()
    );

    let hero_layer = hero_layer.map(|l| Rc::new(RefCell::new(l)));
    let section_layers = Rc::new(RefCell::new(section_layers));

    if let Some(window) = web::window() {
        let hero = hero_layer.clone();
        let sections = section_layers.clone();
        listen(&window, "resize", move |_| {
            if let Some(h) = &hero {
                h.borrow_mut().resize();
            }
            for l in sections.borrow_mut().iter_mut() {
                l.resize();
            }
        });
    }

    if let Some(hero) = hero_layer {
        let h = hero.clone();
        listen_mouse(document, "mousemove", move |ev| {
            let Some(window) = web::window() else {
                return;
            };
            let (vw, vh) = viewport_size(&window);
            let (nx, ny) = unit_pointer(ev.client_x() as f64, ev.client_y() as f64, vw, vh);
            h.borrow_mut().scene.follow_pointer(nx, ny);
        });
        frames.register("hero points", move |_| hero.borrow_mut().frame());
    }
    if !section_layers.borrow().is_empty() {
        frames.register("section points", move |_| {
            for l in section_layers.borrow_mut().iter_mut() {
                l.frame();
            }
        });
    }
    Ok(())
}
