//! HTTP client for the trip API
//!
//! Two read-only endpoints:
//! - `GET {base}/trips`      → list of trip summaries
//! - `GET {base}/trips/{id}` → one trip with guide and packing items
//!
//! Each call is a single GET parsed as JSON. No retry, no timeout, no cache.

mod error;

pub use error::ApiError;

use crate::trips::{Trip, TripDetail, TripId};
use serde::de::DeserializeOwned;

/// Base endpoint used when nothing else is configured
pub const DEFAULT_API_URL: &str = "https://tripapi.cphbusinessapps.dk/api";

/// Client for the trip API
///
/// Cheap to clone: `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct TripClient {
    client: reqwest::Client,
    base_url: String,
}

impl TripClient {
    /// Create a client for the given base URL (trailing slashes ignored)
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tripdeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the trip collection
    pub fn trips_url(&self) -> String {
        format!("{}/trips", self.base_url)
    }

    /// URL of a single trip
    pub fn trip_url(&self, id: TripId) -> String {
        format!("{}/trips/{}", self.base_url, id)
    }

    /// Fetch every trip summary
    pub async fn fetch_all_trips(&self) -> Result<Vec<Trip>, ApiError> {
        let trips: Vec<Trip> = self.get_json(&self.trips_url()).await?;
        tracing::debug!("Fetched {} trips", trips.len());
        Ok(trips)
    }

    /// Fetch the detailed record of one trip
    pub async fn fetch_trip_detail(&self, id: TripId) -> Result<TripDetail, ApiError> {
        let detail: TripDetail = self.get_json(&self.trip_url(id)).await?;
        tracing::debug!(
            "Fetched trip {} ({} packing items, guide: {})",
            id,
            detail.packing_items.len(),
            detail.guide.is_some()
        );
        Ok(detail)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Path,
        http::StatusCode,
        response::IntoResponse,
        routing::get,
        Json, Router,
    };
    use serde_json::json;

    /// Serve fixture routes on an ephemeral port, returning the base URL
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fixture server");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fixture server");
        });
        format!("http://{}/api", addr)
    }

    fn fixture_app() -> Router {
        Router::new()
            .route(
                "/api/trips",
                get(|| async {
                    Json(json!([
                        {
                            "id": 1,
                            "name": "Beach Holiday",
                            "starttime": "2024-01-01T00:00:00Z",
                            "endtime": "2024-01-03T00:00:00Z",
                            "price": 3000,
                            "category": "BEACH"
                        },
                        {
                            "id": 2,
                            "name": "City Break",
                            "starttime": "2024-03-01T10:00:00",
                            "endtime": "2024-03-01T20:00:00",
                            "price": 799.5,
                            "category": "CITY"
                        }
                    ]))
                }),
            )
            .route(
                "/api/trips/:id",
                get(|Path(id): Path<i64>| async move {
                    match id {
                        1 => Json(json!({
                            "id": 1,
                            "name": "Beach Holiday",
                            "starttime": "2024-01-01T00:00:00Z",
                            "endtime": "2024-01-03T00:00:00Z",
                            "price": 3000,
                            "category": "BEACH",
                            "guide": {
                                "firstname": "Ada",
                                "lastname": "Berg",
                                "email": "ada@example.com",
                                "phone": "12345678",
                                "yearsOfExperience": 4
                            },
                            "packingItems": [{
                                "name": "Sunscreen",
                                "weightInGrams": 200,
                                "quantity": 1,
                                "description": "SPF 50",
                                "category": "BEACH",
                                "buyingOptions": []
                            }]
                        }))
                        .into_response(),
                        2 => "<html>not json</html>".into_response(),
                        _ => (StatusCode::NOT_FOUND, "Trip not found").into_response(),
                    }
                }),
            )
    }

    #[test]
    fn test_urls_ignore_trailing_slash() {
        let client = TripClient::new("http://localhost:7070/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:7070/api");
        assert_eq!(client.trips_url(), "http://localhost:7070/api/trips");
        assert_eq!(client.trip_url(42), "http://localhost:7070/api/trips/42");
    }

    #[tokio::test]
    async fn test_fetch_all_trips() {
        let base = serve(fixture_app()).await;
        let client = TripClient::new(base).unwrap();

        let trips = client.fetch_all_trips().await.unwrap();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].id, 1);
        assert_eq!(trips[1].category, "CITY");
        assert_eq!(trips[1].price, 799.5);
    }

    #[tokio::test]
    async fn test_fetch_trip_detail() {
        let base = serve(fixture_app()).await;
        let client = TripClient::new(base).unwrap();

        let detail = client.fetch_trip_detail(1).await.unwrap();
        assert_eq!(detail.trip.name, "Beach Holiday");
        assert_eq!(detail.guide.unwrap().years_of_experience, 4);
        assert_eq!(detail.packing_items.len(), 1);
        assert!(detail.packing_items[0].buying_options.is_empty());
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let base = serve(fixture_app()).await;
        let client = TripClient::new(base).unwrap();

        let err = client.fetch_trip_detail(2).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let base = serve(fixture_app()).await;
        let client = TripClient::new(base).unwrap();

        match client.fetch_trip_detail(99).await {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, "Trip not found");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = TripClient::new(format!("http://{}/api", addr)).unwrap();
        let err = client.fetch_all_trips().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
    }
}
