use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` overrides the default filter, which keeps the engine chatty
/// while quieting the graphics stack internals.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("debug,wgpu_core=info,wgpu_hal=info,naga=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::debug!("tracing subscriber installed");
}
