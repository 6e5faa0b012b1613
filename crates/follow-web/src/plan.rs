//! Route helpers for the UI layer

use follow_camera::{Route, RoutePlan};
use serde_json::json;
use wasm_bindgen::prelude::*;

use crate::controller::to_js;

/// Parse a Directions response into the JSON the UI renders
///
/// Returns `{ coordinates, bounds, center, steps, summary }` where `bounds`
/// is `[[west, south], [east, north]]` for `fitBounds` and `center` is the
/// middle of that box, for the overview mini-map.
#[wasm_bindgen]
pub fn parse_directions(json: &str) -> Result<String, JsValue> {
    let plan = RoutePlan::from_directions_json(json).map_err(to_js)?;
    let summary = plan.summary();
    let steps: Vec<_> = plan
        .steps
        .iter()
        .map(|step| {
            json!({
                "name": step.display_name(),
                "distance": step.distance,
                "duration": step.duration,
            })
        })
        .collect();

    let value = json!({
        "coordinates": plan.route,
        "bounds": bounds_value(&plan.route),
        "center": plan.route.bounds().map(|bounds| bounds.center()),
        "steps": steps,
        "summary": {
            "distanceM": summary.distance_m,
            "durationS": summary.duration_s,
            "distanceText": summary.format_distance(),
            "durationText": summary.format_duration(),
        },
    });
    serde_json::to_string(&value).map_err(to_js)
}

/// Bounds of a route as `[[west, south], [east, north]]`, or `null` when empty
#[wasm_bindgen]
pub fn route_bounds(route_json: &str) -> Result<String, JsValue> {
    let route = Route::from_json(route_json).map_err(to_js)?;
    serde_json::to_string(&bounds_value(&route)).map_err(to_js)
}

fn bounds_value(route: &Route) -> serde_json::Value {
    match route.bounds() {
        Some(bounds) => json!([bounds.south_west, bounds.north_east]),
        None => serde_json::Value::Null,
    }
}
