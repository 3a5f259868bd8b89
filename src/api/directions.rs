use reqwest::Method;
use serde::Deserialize;

use crate::{credential::Credential, error::CommuteError};

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct Measure {
    pub value: f64,
}

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct Leg {
    pub duration: Option<Measure>,
    pub distance: Option<Measure>,
}

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct Route {
    #[serde(default)]
    pub legs: Vec<Leg>,
}

#[derive(Clone, Deserialize, Debug, PartialEq)]
pub struct DirectionsResponse {
    pub status: String,
    pub error_message: Option<String>,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl DirectionsResponse {
    pub fn status_ok(&self) -> bool {
        self.status == "OK"
    }
}

pub trait FetchDirections {
    fn get_directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DirectionsResponse, CommuteError>;
}

/// Google Maps Directions client.
pub struct GmapsFetcher {
    client: reqwest::blocking::Client,
    api_key: Credential,
    base_url: String,
}

impl GmapsFetcher {
    pub fn with_base_url(api_key: Credential, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key,
            base_url: base_url.into(),
        }
    }

    pub fn request_url(&self, origin: &str, destination: &str) -> String {
        format!(
            "{}?origin={}&destination={}&key={}",
            self.base_url,
            urlencoding::encode(origin),
            urlencoding::encode(destination),
            urlencoding::encode(self.api_key.as_str())
        )
    }
}

impl FetchDirections for GmapsFetcher {
    fn get_directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DirectionsResponse, CommuteError> {
        log::debug!("Getting directions from {} to {}", origin, destination);

        let response = self
            .client
            .request(Method::GET, self.request_url(origin, destination))
            .send()?;
        let text = response.text()?;

        let json = serde_json::from_str::<DirectionsResponse>(&text).map_err(|e| {
            log::error!("Failed to parse DirectionsResponse: {}. Body: {}", e, text);
            e
        })?;

        Ok(json)
    }
}
