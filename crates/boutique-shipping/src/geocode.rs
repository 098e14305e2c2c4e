//! Address resolution against a Nominatim-style lookup service.
//!
//! One outbound GET per query, timeout-bounded, no retry. Callers wanting a
//! retry policy compose it around [`Geocoder::locate`].

use crate::distance::Coordinate;
use crate::error::ShippingError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Public endpoint of the OpenStreetMap Nominatim service.
pub const NOMINATIM_BASE: &str = "https://nominatim.openstreetmap.org";

/// Nominatim requires a client-identifying User-Agent.
const DEFAULT_USER_AGENT: &str = "purse-boutique/0.1";

/// Free-text address fields composing a lookup query.
///
/// Empty fields are permitted; they only reduce query precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQuery {
    /// Street address.
    pub street: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// Postal/ZIP code.
    pub zip: String,
}

impl AddressQuery {
    /// Create a query from the four address fields.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
        }
    }

    /// The human-readable query string sent to the lookup service.
    pub fn to_query_string(&self) -> String {
        format!(
            "{}, {}, {} {}, USA",
            self.street, self.city, self.state, self.zip
        )
    }
}

/// Resolves a free-text address to geographic coordinates.
///
/// `Ok(None)` means the service answered with zero candidates; `Err` means
/// the single attempt failed outright (transport, HTTP status, or parse).
/// Quote assembly treats both as "unresolved."
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn locate(&self, query: &AddressQuery) -> Result<Option<Coordinate>, ShippingError>;
}

/// Configuration for the lookup client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL of the lookup service.
    pub base_url: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Total request timeout.
    pub total_timeout: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: NOMINATIM_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(5),
            total_timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the address lookup service.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    /// Create a client against the public Nominatim endpoint.
    pub fn new() -> Result<Self, ShippingError> {
        Self::with_config(GeocoderConfig::default())
    }

    /// Create a client with explicit configuration.
    pub fn with_config(config: GeocoderConfig) -> Result<Self, ShippingError> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.connect_timeout)
            .timeout(config.total_timeout)
            .build()
            .map_err(|e| ShippingError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

/// One candidate from the lookup service. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Parse the service's JSON array, taking the first candidate only.
fn parse_places(body: &str) -> Result<Option<Coordinate>, ShippingError> {
    let places: Vec<Place> =
        serde_json::from_str(body).map_err(|e| ShippingError::Parse(e.to_string()))?;

    let Some(first) = places.first() else {
        return Ok(None);
    };

    let lat = first
        .lat
        .parse::<f64>()
        .map_err(|_| ShippingError::MalformedCoordinate(first.lat.clone()))?;
    let lon = first
        .lon
        .parse::<f64>()
        .map_err(|_| ShippingError::MalformedCoordinate(first.lon.clone()))?;

    Ok(Some(Coordinate::new(lat, lon)))
}

#[async_trait]
impl Geocoder for GeocodeClient {
    async fn locate(&self, query: &AddressQuery) -> Result<Option<Coordinate>, ShippingError> {
        let q = query.to_query_string();
        let response = self
            .http
            .get(self.search_url())
            .query(&[("format", "json"), ("q", q.as_str()), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShippingError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        parse_places(&body)
    }
}
