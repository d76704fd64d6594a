//! Window and browser host for the `reach` hero scene: a wgpu renderer for
//! the engine's draw list with an egui control overlay.

pub mod host;
pub mod renderer;
pub mod window;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(log::Level::Info).expect("Could not initialize logger");
    if let Err(err) = window::run(reach::SceneConfig::default()) {
        tracing::error!(target: "viewer", "{err:#}");
    }
}

pub use window::run;
