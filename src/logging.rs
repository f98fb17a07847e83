//! Logging Setup
//!
//! Routes `tracing` events to the browser console.

/// Install the global subscriber; call once before mounting
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    {
        let config = tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(crate::config::log_level())
            .build();
        tracing_wasm::set_as_global_default_with_config(config);
    }
}
