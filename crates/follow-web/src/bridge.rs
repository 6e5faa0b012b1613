//! JS adapters for the map surface and secondary displays
//!
//! Poses cross the boundary as plain objects shaped like a map view state:
//! `{ longitude, latitude, zoom, pitch, bearing }`.

use follow_camera::{CameraPose, LngLat, MapSink, PositionObserver, SinkError};
use js_sys::{Function, Object, Reflect};
use tracing::warn;
use wasm_bindgen::JsValue;

/// Map surface driven through two JS callbacks
pub struct JsMapSink {
    /// `(viewState) => void`
    set_view_state: Function,
    /// `() => viewState | null`
    get_view_state: Function,
}

impl JsMapSink {
    pub fn new(set_view_state: Function, get_view_state: Function) -> Self {
        Self {
            set_view_state,
            get_view_state,
        }
    }
}

impl MapSink for JsMapSink {
    fn current_pose(&self) -> Option<CameraPose> {
        let value = self.get_view_state.call0(&JsValue::NULL).ok()?;
        pose_from_js(&value)
    }

    fn apply_pose(&mut self, pose: CameraPose) -> Result<(), SinkError> {
        let view_state = pose_to_js(&pose).map_err(rejected)?;
        self.set_view_state
            .call1(&JsValue::NULL, &view_state)
            .map(|_| ())
            .map_err(rejected)
    }
}

/// Secondary display (overview mini-map, progress widgets) fed from JS
pub struct JsObserver {
    /// `({ longitude, latitude }) => void`
    on_position: Function,
    /// `(following: boolean) => void`
    on_following: Option<Function>,
}

impl JsObserver {
    pub fn new(on_position: Function, on_following: Option<Function>) -> Self {
        Self {
            on_position,
            on_following,
        }
    }
}

impl PositionObserver for JsObserver {
    fn position_changed(&mut self, position: LngLat) {
        let result = position_to_js(position)
            .and_then(|object| self.on_position.call1(&JsValue::NULL, &object));
        if let Err(err) = result {
            warn!(error = ?err, "position observer threw");
        }
    }

    fn following_changed(&mut self, following: bool) {
        if let Some(callback) = &self.on_following {
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_bool(following)) {
                warn!(error = ?err, "following observer threw");
            }
        }
    }
}

/// Build a view-state object from a pose
pub fn pose_to_js(pose: &CameraPose) -> Result<JsValue, JsValue> {
    let object = Object::new();
    set_number(&object, "longitude", pose.longitude)?;
    set_number(&object, "latitude", pose.latitude)?;
    set_number(&object, "zoom", pose.zoom)?;
    set_number(&object, "pitch", pose.pitch)?;
    set_number(&object, "bearing", pose.bearing)?;
    Ok(object.into())
}

/// Read a pose from a view-state object
///
/// `longitude`, `latitude` and `zoom` are required; missing `pitch` and
/// `bearing` default to 0.
pub fn pose_from_js(value: &JsValue) -> Option<CameraPose> {
    if !value.is_object() {
        return None;
    }
    let longitude = get_number(value, "longitude")?;
    let latitude = get_number(value, "latitude")?;
    let zoom = get_number(value, "zoom")?;
    let pitch = get_number(value, "pitch").unwrap_or(0.0);
    let bearing = get_number(value, "bearing").unwrap_or(0.0);
    Some(CameraPose::new(
        LngLat::new(longitude, latitude),
        zoom,
        pitch,
        bearing,
    ))
}

fn position_to_js(position: LngLat) -> Result<JsValue, JsValue> {
    let object = Object::new();
    set_number(&object, "longitude", position.lng)?;
    set_number(&object, "latitude", position.lat)?;
    Ok(object.into())
}

fn set_number(object: &Object, key: &str, value: f64) -> Result<(), JsValue> {
    Reflect::set(object, &JsValue::from_str(key), &JsValue::from_f64(value)).map(|_| ())
}

fn get_number(object: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(object, &JsValue::from_str(key))
        .ok()?
        .as_f64()
        .filter(|v| v.is_finite())
}

fn rejected(err: JsValue) -> SinkError {
    SinkError::Rejected(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
