//! Browser tests for the route follow bindings
//!
//! Run with `wasm-pack test --headless --firefox crates/follow-web`.

#![cfg(target_arch = "wasm32")]

use follow_camera::{CameraPose, LngLat};
use follow_web::{parse_directions, pose_from_js, pose_to_js, route_bounds, RouteFollower};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_pose_crosses_boundary() {
    let pose = CameraPose::new(LngLat::new(28.97, 41.0), 18.0, 60.0, 90.0);
    let value = pose_to_js(&pose).unwrap();
    assert_eq!(pose_from_js(&value), Some(pose));
}

#[wasm_bindgen_test]
fn test_pose_from_incomplete_object() {
    assert_eq!(pose_from_js(&JsValue::NULL), None);
    let object = js_sys::Object::new();
    assert_eq!(pose_from_js(&object.into()), None);
}

#[wasm_bindgen_test]
fn test_follower_lifecycle() {
    let follower = RouteFollower::new(None).unwrap();
    assert_eq!(follower.state(), "idle");

    follower.start("[[28.97, 41.0], [28.98, 41.01]]").unwrap();
    assert!(follower.is_running());
    assert_eq!(follower.state(), "running");

    follower.cancel();
    assert!(!follower.is_running());
    assert_eq!(follower.progress(), 0.0);
}

#[wasm_bindgen_test]
fn test_follower_rejects_bad_input() {
    assert!(RouteFollower::new(Some(r#"{"durationMs": 0}"#.to_string())).is_err());

    let follower = RouteFollower::new(None).unwrap();
    assert!(follower.start("not json").is_err());
    assert_eq!(follower.replace_route("[[1.0, 2.0], [3.0, 4.0]]"), Ok(false));
}

#[wasm_bindgen_test]
fn test_route_helpers() {
    let bounds = route_bounds("[[1.0, 5.0], [3.0, 2.0]]").unwrap();
    assert_eq!(bounds, "[[1.0,2.0],[3.0,5.0]]");

    let json = r#"{"routes": [{
        "geometry": {"type": "LineString", "coordinates": [[1.0, 1.0], [2.0, 2.0]]},
        "legs": [{"steps": [{"name": "", "distance": 120.0, "duration": 65.0}]}]
    }]}"#;
    let plan: serde_json::Value = serde_json::from_str(&parse_directions(json).unwrap()).unwrap();
    assert_eq!(plan["steps"][0]["name"], "Unnamed road");
    assert_eq!(plan["summary"]["durationText"], "1 min 5 s");
    assert_eq!(plan["coordinates"].as_array().unwrap().len(), 2);
    assert_eq!(plan["center"], serde_json::json!([1.5, 1.5]));
}
