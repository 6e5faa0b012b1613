//! Reading routes from GeoJSON and Directions responses

use serde::Deserialize;
use serde_json::Value;

use super::{Route, RouteStep, RouteSummary};
use crate::error::RouteError;
use crate::geo::LngLat;

#[derive(Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

impl Geometry {
    fn into_route(self) -> Result<Route, RouteError> {
        if self.kind != "LineString" {
            return Err(RouteError::GeometryType(self.kind));
        }
        let points: Vec<LngLat> = serde_json::from_value(self.coordinates).map_err(json_err)?;
        Ok(Route::new(points))
    }
}

#[derive(Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Deserialize)]
struct DirectionsRoute {
    geometry: Geometry,
    #[serde(default)]
    legs: Vec<DirectionsLeg>,
}

#[derive(Deserialize)]
struct DirectionsLeg {
    #[serde(default)]
    steps: Vec<RouteStep>,
}

fn json_err(e: serde_json::Error) -> RouteError {
    RouteError::Json(e.to_string())
}

fn route_from_value(value: Value) -> Result<Route, RouteError> {
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    match kind.as_str() {
        "Feature" => {
            let feature: Feature = serde_json::from_value(value).map_err(json_err)?;
            feature.geometry.into_route()
        }
        "FeatureCollection" => {
            let collection: FeatureCollection = serde_json::from_value(value).map_err(json_err)?;
            collection
                .features
                .into_iter()
                .find(|f| f.geometry.kind == "LineString")
                .ok_or(RouteError::GeometryType(kind))?
                .geometry
                .into_route()
        }
        _ => {
            let geometry: Geometry = serde_json::from_value(value).map_err(json_err)?;
            geometry.into_route()
        }
    }
}

impl Route {
    /// Read a route from a GeoJSON `LineString`, a `Feature` wrapping one,
    /// or the first `LineString` feature of a `FeatureCollection`
    pub fn from_geojson(json: &str) -> Result<Route, RouteError> {
        let value: Value = serde_json::from_str(json).map_err(json_err)?;
        route_from_value(value)
    }

    /// Read a route from a bare `[[lng, lat], ...]` array or any GeoJSON
    /// shape accepted by [`Route::from_geojson`]
    pub fn from_json(json: &str) -> Result<Route, RouteError> {
        let value: Value = serde_json::from_str(json).map_err(json_err)?;
        if value.is_array() {
            let points: Vec<LngLat> = serde_json::from_value(value).map_err(json_err)?;
            return Ok(Route::new(points));
        }
        route_from_value(value)
    }
}

/// Route geometry plus the turn-by-turn steps of its first leg
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoutePlan {
    pub route: Route,
    pub steps: Vec<RouteStep>,
}

impl RoutePlan {
    /// Read the first route of a Directions response
    /// (`routes[0].geometry`, `routes[0].legs[0].steps`)
    pub fn from_directions_json(json: &str) -> Result<RoutePlan, RouteError> {
        let response: DirectionsResponse = serde_json::from_str(json).map_err(json_err)?;
        let first = response.routes.into_iter().next().ok_or(RouteError::NoRoutes)?;
        let route = first.geometry.into_route()?;
        let steps = first
            .legs
            .into_iter()
            .next()
            .map(|leg| leg.steps)
            .unwrap_or_default();
        Ok(RoutePlan { route, steps })
    }

    /// Total distance and duration of the steps
    pub fn summary(&self) -> RouteSummary {
        RouteSummary::from_steps(&self.steps)
    }
}
