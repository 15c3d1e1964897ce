//! OSRM routing client.
//!
//! Each path overlay asks OSRM for a routed line between its two endpoint
//! coordinates. A failed request is local to that overlay: the widget falls
//! back to a straight segment between the endpoints and other layers are
//! unaffected. Requests are never retried.

use serde::Deserialize;

use waymark_core::{Result, WaymarkError};

/// Route geometry as (lat, lng) vertices, ready for the widget to draw.
pub type RouteLine = Vec<(f64, f64)>;

/// Client for an OSRM `route/v1` service.
pub struct OsrmRouter {
    /// Base URL, e.g. "https://router.project-osrm.org"
    base_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl OsrmRouter {
    /// Create a new router against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch the routed line between two coordinates, given as (lat, lng).
    pub async fn route(&self, start: (f64, f64), end: (f64, f64)) -> Result<RouteLine> {
        // OSRM takes lng,lat pairs.
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson&alternatives=false&steps=false",
            self.base_url, start.1, start.0, end.1, end.0
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WaymarkError::Routing {
                reason: format!("Failed to reach routing service: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(WaymarkError::Routing {
                reason: format!("Routing service error ({})", status),
            });
        }

        let body: OsrmRouteResponse =
            response.json().await.map_err(|e| WaymarkError::Routing {
                reason: format!("Failed to parse routing response: {}", e),
            })?;

        parse_route(body)
    }
}

fn parse_route(body: OsrmRouteResponse) -> Result<RouteLine> {
    if body.code != "Ok" {
        return Err(WaymarkError::Routing {
            reason: format!("Routing service returned code '{}'", body.code),
        });
    }

    let route = body
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| WaymarkError::Routing {
            reason: "Routing service returned no routes".to_string(),
        })?;

    Ok(route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lng, lat]| (lat, lng))
        .collect())
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_linestring_into_lat_lng_order() {
        let body: OsrmRouteResponse = serde_json::from_str(
            r#"{
                "code": "Ok",
                "routes": [{
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[30.06, -1.95], [30.08, -1.94]]
                    }
                }]
            }"#,
        )
        .unwrap();

        let line = parse_route(body).unwrap();
        assert_eq!(line, vec![(-1.95, 30.06), (-1.94, 30.08)]);
    }

    #[test]
    fn non_ok_code_is_an_error() {
        let body: OsrmRouteResponse =
            serde_json::from_str(r#"{"code": "NoRoute", "routes": []}"#).unwrap();
        assert!(parse_route(body).is_err());
    }

    #[test]
    fn missing_routes_is_an_error() {
        let body: OsrmRouteResponse =
            serde_json::from_str(r#"{"code": "Ok", "routes": []}"#).unwrap();
        assert!(parse_route(body).is_err());
    }
}
