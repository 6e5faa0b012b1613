//! WASM exports for the route follow camera
//!
//! [`RouteFollower`] wraps a [`RouteAnimator`] with a JS-friendly API. The
//! animator is shared with the browser callbacks through `Rc<RefCell<_>>`;
//! a call that arrives while the animator is already borrowed (a JS sink
//! calling back into the follower mid-frame) is logged and ignored.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use follow_camera::{DetachedSink, FollowConfig, Route, RouteAnimator};
use js_sys::Function;
use tracing::{error, warn};
use wasm_bindgen::prelude::*;

use crate::bridge::{JsMapSink, JsObserver};
use crate::host::WebHost;

type SharedAnimator = Rc<RefCell<RouteAnimator<WebHost>>>;

/// Route follow controller for WASM
#[wasm_bindgen]
pub struct RouteFollower {
    animator: SharedAnimator,
}

#[wasm_bindgen]
impl RouteFollower {
    /// Create a follower; `config_json` is an optional camelCase `FollowConfig`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<RouteFollower, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => FollowConfig::from_json(json).map_err(to_js)?,
            None => FollowConfig::default(),
        };

        let slot: Rc<RefCell<Weak<RefCell<RouteAnimator<WebHost>>>>> =
            Rc::new(RefCell::new(Weak::new()));
        let target = Rc::clone(&slot);
        let host = WebHost::new(Rc::new(move |now_ms: f64| {
            let Some(animator) = target.borrow().upgrade() else {
                return;
            };
            match animator.try_borrow_mut() {
                Ok(mut animator) => {
                    animator.tick(now_ms);
                }
                Err(_) => error!("frame callback re-entered the follower, frame lost"),
            };
        }))
        .map_err(to_js)?;

        let animator = RouteAnimator::with_config(host, Box::new(DetachedSink), config)
            .map_err(to_js)?;
        let animator = Rc::new(RefCell::new(animator));
        *slot.borrow_mut() = Rc::downgrade(&animator);

        Ok(Self { animator })
    }

    // =========================================================================
    // Map and observers
    // =========================================================================

    /// Attach the main map through its view-state setter and getter
    #[wasm_bindgen]
    pub fn attach_map(&self, set_view_state: Function, get_view_state: Function) {
        self.with_animator(|animator| {
            animator.set_sink(Box::new(JsMapSink::new(set_view_state, get_view_state)));
        });
    }

    /// Detach the main map (poses are dropped until a map is attached again)
    #[wasm_bindgen]
    pub fn detach_map(&self) {
        self.with_animator(|animator| animator.set_sink(Box::new(DetachedSink)));
    }

    /// Register a secondary display
    #[wasm_bindgen]
    pub fn add_observer(&self, on_position: Function, on_following: Option<Function>) {
        self.with_animator(|animator| {
            animator.add_observer(Box::new(JsObserver::new(on_position, on_following)));
        });
    }

    // =========================================================================
    // Control
    // =========================================================================

    /// Start following a route given as `[[lng, lat], ...]` or GeoJSON
    #[wasm_bindgen]
    pub fn start(&self, route_json: &str) -> Result<(), JsValue> {
        let route = Route::from_json(route_json).map_err(to_js)?;
        match self.with_animator(|animator| animator.start(route)) {
            Some(result) => result.map_err(to_js),
            None => Ok(()),
        }
    }

    /// Stop following and restore the camera
    #[wasm_bindgen]
    pub fn cancel(&self) {
        self.with_animator(|animator| animator.cancel());
    }

    /// Swap the followed route mid-flight; returns whether it was applied
    #[wasm_bindgen]
    pub fn replace_route(&self, route_json: &str) -> Result<bool, JsValue> {
        let route = Route::from_json(route_json).map_err(to_js)?;
        Ok(self
            .with_animator(|animator| animator.replace_route(route))
            .unwrap_or(false))
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Progress of the current run in [0, 1]
    #[wasm_bindgen]
    pub fn progress(&self) -> f64 {
        self.read(|animator| animator.progress()).unwrap_or(0.0)
    }

    /// Progress in whole percent
    #[wasm_bindgen]
    pub fn progress_percent(&self) -> u8 {
        self.read(|animator| animator.progress_percent()).unwrap_or(0)
    }

    #[wasm_bindgen]
    pub fn is_running(&self) -> bool {
        self.read(|animator| animator.is_running()).unwrap_or(false)
    }

    /// Lifecycle state: "idle", "running" or "completing"
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        self.read(|animator| animator.state().as_str().to_string()).unwrap_or_default()
    }

    /// Active configuration as JSON
    #[wasm_bindgen]
    pub fn get_config_json(&self) -> String {
        self.read(|animator| serde_json::to_string(animator.config()).unwrap_or_default())
            .unwrap_or_default()
    }

    /// Last follow pose as JSON, or `null`
    #[wasm_bindgen]
    pub fn get_last_pose_json(&self) -> String {
        self.read(|animator| {
            serde_json::to_string(&animator.last_pose()).unwrap_or_else(|_| "null".to_string())
        })
        .unwrap_or_else(|| "null".to_string())
    }
}

impl RouteFollower {
    fn with_animator<R>(&self, f: impl FnOnce(&mut RouteAnimator<WebHost>) -> R) -> Option<R> {
        match self.animator.try_borrow_mut() {
            Ok(mut animator) => Some(f(&mut animator)),
            Err(_) => {
                warn!("route follower re-entered from a callback, call ignored");
                None
            }
        }
    }

    fn read<R>(&self, f: impl FnOnce(&RouteAnimator<WebHost>) -> R) -> Option<R> {
        match self.animator.try_borrow() {
            Ok(animator) => Some(f(&animator)),
            Err(_) => {
                warn!("route follower read during a frame, call ignored");
                None
            }
        }
    }
}

impl Drop for RouteFollower {
    fn drop(&mut self) {
        // Unmount: hand the camera back and drop any pending callback
        self.with_animator(|animator| animator.cancel());
    }
}

pub(crate) fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
