//! Browser frame host
//!
//! Frames come from `requestAnimationFrame`, the settle delay from
//! `setTimeout`. Both callbacks are created once and reused for every
//! request, so scheduling never allocates.

use std::rc::Rc;

use follow_hal::{check_delay, FrameHost, HostError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Performance, Window};

/// Identifier of a pending browser callback
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WebHandle {
    /// `requestAnimationFrame` id
    Frame(i32),
    /// `setTimeout` id
    Timeout(i32),
}

/// [`FrameHost`] backed by the browser window
pub struct WebHost {
    window: Window,
    performance: Performance,
    /// Closures must be stored to prevent garbage collection
    on_frame: Closure<dyn FnMut(f64)>,
    on_timeout: Closure<dyn FnMut()>,
}

impl WebHost {
    /// Create a host that calls `on_fire` with the callback timestamp
    ///
    /// Animation-frame and timeout callbacks report time on the same clock
    /// (`performance.now()`).
    pub fn new(on_fire: Rc<dyn Fn(f64)>) -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::SchedulerUnavailable)?;
        let performance = window
            .performance()
            .ok_or(HostError::SchedulerUnavailable)?;

        let frame_target = Rc::clone(&on_fire);
        let on_frame = Closure::wrap(Box::new(move |timestamp: f64| {
            frame_target(timestamp);
        }) as Box<dyn FnMut(f64)>);

        let clock = performance.clone();
        let on_timeout = Closure::wrap(Box::new(move || {
            on_fire(clock.now());
        }) as Box<dyn FnMut()>);

        Ok(Self {
            window,
            performance,
            on_frame,
            on_timeout,
        })
    }
}

impl FrameHost for WebHost {
    type Handle = WebHandle;

    fn now_ms(&self) -> f64 {
        self.performance.now()
    }

    fn request_frame(&self) -> Result<WebHandle, HostError> {
        self.window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
            .map(WebHandle::Frame)
            .map_err(|_| HostError::RegistrationFailed)
    }

    fn request_timeout(&self, delay_ms: f64) -> Result<WebHandle, HostError> {
        let delay_ms = check_delay(delay_ms)?.ceil().min(i32::MAX as f64) as i32;
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.on_timeout.as_ref().unchecked_ref(),
                delay_ms,
            )
            .map(WebHandle::Timeout)
            .map_err(|_| HostError::RegistrationFailed)
    }

    fn cancel(&self, handle: WebHandle) {
        match handle {
            WebHandle::Frame(id) => {
                let _ = self.window.cancel_animation_frame(id);
            }
            WebHandle::Timeout(id) => self.window.clear_timeout_with_handle(id),
        }
    }
}
