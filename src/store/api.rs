//! HTTP client for the entity store.

use std::time::Duration;

use bevy::prelude::*;
use serde::de::DeserializeOwned;

use super::types::{ApiResponse, EntityDraft, GeoEntity};

/// Fallback when the server gives no usable failure message
pub const NETWORK_ERROR: &str = "Network error occurred";

const USER_AGENT: &str = concat!("mapscribe/", env!("CARGO_PKG_VERSION"));

/// Remote persistence for geographic entities.
///
/// Every call blocks; callers run them on a task pool.
pub trait EntityStore: Send + Sync {
    fn list(&self) -> Result<Vec<GeoEntity>, String>;
    fn create(&self, draft: &EntityDraft) -> Result<GeoEntity, String>;
    fn update(&self, id: i64, draft: &EntityDraft) -> Result<GeoEntity, String>;
    /// Returns the server's confirmation message
    fn delete(&self, id: i64) -> Result<String, String>;
}

pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(15))
            .user_agent(USER_AGENT)
            .build();

        Self {
            agent,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn points_url(&self) -> String {
        format!("{}/Points", self.base_url)
    }

    fn point_url(&self, id: i64) -> String {
        format!("{}/Points/{}", self.base_url, id)
    }

    fn with_draft(request: ureq::Request, draft: &EntityDraft) -> ureq::Request {
        request
            .query("geometry", &draft.geometry)
            .query("name", &draft.name)
            .query("coordinateType", &draft.kind.code().to_string())
    }
}

/// Decode a response envelope, mapping transport and status failures to a message.
fn read_envelope<T: DeserializeOwned>(
    response: Result<ureq::Response, ureq::Error>,
) -> Result<ApiResponse<T>, String> {
    match response {
        Ok(resp) => resp.into_json::<ApiResponse<T>>().map_err(|e| {
            warn!("Malformed store response: {}", e);
            NETWORK_ERROR.to_string()
        }),
        Err(ureq::Error::Status(code, resp)) => {
            let message = resp
                .into_json::<ApiResponse<serde_json::Value>>()
                .ok()
                .map(|envelope| envelope.message)
                .filter(|message| !message.is_empty());
            warn!("Store returned HTTP {}: {:?}", code, message);
            Err(message.unwrap_or_else(|| NETWORK_ERROR.to_string()))
        }
        Err(e) => {
            warn!("Store request failed: {}", e);
            Err(NETWORK_ERROR.to_string())
        }
    }
}

impl EntityStore for ApiClient {
    fn list(&self) -> Result<Vec<GeoEntity>, String> {
        let response = self.agent.get(&self.points_url()).call();
        read_envelope(response)?.into_data()
    }

    fn create(&self, draft: &EntityDraft) -> Result<GeoEntity, String> {
        let request = Self::with_draft(self.agent.post(&self.points_url()), draft);
        read_envelope(request.call())?.into_data()
    }

    fn update(&self, id: i64, draft: &EntityDraft) -> Result<GeoEntity, String> {
        let request = Self::with_draft(self.agent.put(&self.point_url(id)), draft);
        read_envelope(request.call())?.into_data()
    }

    fn delete(&self, id: i64) -> Result<String, String> {
        let response = self.agent.delete(&self.point_url(id)).call();
        read_envelope::<serde_json::Value>(response)?.into_ack()
    }
}
