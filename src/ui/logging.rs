//! Console logging through `tracing-wasm`

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the console subscriber; later calls are ignored.
pub fn init(level: tracing::Level) {
    INIT.call_once(|| {
        let config = tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .build();
        tracing_wasm::set_as_global_default_with_config(config);
    });
}
