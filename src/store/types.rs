use serde::{Deserialize, Serialize};

use crate::geometry::EntityKind;

/// A persisted geographic record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoEntity {
    pub id: i64,
    pub name: String,
    /// Canonical `"lng lat, lng lat"` text
    pub geometry: String,
    #[serde(rename = "coordinateType")]
    pub kind: EntityKind,
}

/// Fields sent on create and update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityDraft {
    pub name: String,
    pub geometry: String,
    pub kind: EntityKind,
}

impl EntityDraft {
    pub fn from_entity(entity: &GeoEntity) -> Self {
        Self {
            name: entity.name.clone(),
            geometry: entity.geometry.clone(),
            kind: entity.kind,
        }
    }
}

/// Success-flag-plus-message envelope around every store response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub is_success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    fn failure_message(&self) -> String {
        if self.message.is_empty() {
            "Request failed".to_string()
        } else {
            self.message.clone()
        }
    }

    /// Payload of a successful response; a success without data counts as failure.
    pub fn into_data(self) -> Result<T, String> {
        if !self.is_success {
            return Err(self.failure_message());
        }
        let message = self.failure_message();
        self.data.ok_or(message)
    }

    /// Success message for responses that carry no payload.
    pub fn into_ack(self) -> Result<String, String> {
        if self.is_success {
            Ok(self.message)
        } else {
            Err(self.failure_message())
        }
    }
}
