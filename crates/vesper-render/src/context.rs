use std::sync::Arc;

/// A globally shared graphics context.
///
/// Owns the wgpu instance, adapter, device, and queue. Contexts are
/// `Arc`-owned so renderers and meshes can share them cheaply:
///
/// ```rust,no_run
/// use vesper_render::GraphicsContext;
///
/// let ctx = GraphicsContext::new_owned_sync();
/// let ctx2 = ctx.clone(); // cheap Arc clone
/// ```
pub struct GraphicsContext {
    instance: wgpu::Instance,
    adapter: wgpu::Adapter,
    device: wgpu::Device,
    queue: wgpu::Queue,
}

impl GraphicsContext {
    /// Creates a new graphics context asynchronously.
    pub async fn new_owned() -> Arc<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to find a suitable GPU adapter");

        tracing::info!("using graphics adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                label: None,
                ..Default::default()
            })
            .await
            .expect("Failed to create device");

        Arc::new(Self {
            instance,
            adapter,
            device,
            queue,
        })
    }

    /// Creates a new graphics context synchronously.
    ///
    /// This blocks the current thread until the context is created. See
    /// [`GraphicsContext::new_owned`] for the asynchronous version.
    pub fn new_owned_sync() -> Arc<Self> {
        pollster::block_on(Self::new_owned())
    }

    pub fn instance(&self) -> &wgpu::Instance {
        &self.instance
    }

    pub fn adapter(&self) -> &wgpu::Adapter {
        &self.adapter
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}
