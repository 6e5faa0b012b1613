//! Browser bindings for the route follow camera
//!
//! - [`WebHost`]: `requestAnimationFrame` / `setTimeout` frame host
//! - [`JsMapSink`], [`JsObserver`]: adapters for the map and secondary displays
//! - [`RouteFollower`]: controller exported to the UI layer
//! - [`parse_directions`], [`route_bounds`]: route helpers for the UI

mod bridge;
mod controller;
mod host;
mod plan;

pub use bridge::{pose_from_js, pose_to_js, JsMapSink, JsObserver};
pub use controller::RouteFollower;
pub use host::{WebHandle, WebHost};
pub use plan::{parse_directions, route_bounds};

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
}
