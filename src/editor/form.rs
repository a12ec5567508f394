//! The create/edit form model behind the entity dialog.

use crate::drawing::ShapeDrawn;
use crate::geometry::{encode, validate_form, EntityKind, FormErrors, LatLng};
use crate::store::{EntityDraft, GeoEntity, StoreRequest, UpdateOrigin};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityForm {
    pub name: String,
    pub geometry: String,
    pub kind: EntityKind,
    /// Set when editing an existing entity
    pub editing: Option<i64>,
    pub errors: FormErrors,
    /// Request sent on save, cleared when it fails
    pub submitted: Option<StoreRequest>,
}

impl EntityForm {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Point form at a clicked map position
    pub fn at_position(position: LatLng) -> Self {
        Self {
            geometry: encode(&[position]),
            ..Self::default()
        }
    }

    pub fn from_shape(shape: &ShapeDrawn) -> Self {
        Self {
            geometry: shape.geometry.clone(),
            kind: shape.kind,
            ..Self::default()
        }
    }

    pub fn edit(entity: &GeoEntity) -> Self {
        Self {
            name: entity.name.clone(),
            geometry: entity.geometry.clone(),
            kind: entity.kind,
            editing: Some(entity.id),
            ..Self::default()
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Entity"
        } else {
            "New Entity"
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitted.is_some()
    }

    pub fn set_kind(&mut self, kind: EntityKind) {
        if self.kind != kind {
            self.kind = kind;
            self.errors.geometry = None;
        }
    }

    /// Validate and build the store request. Errors are kept on the form.
    pub fn submit(&mut self) -> Option<StoreRequest> {
        self.errors = validate_form(&self.name, &self.geometry, self.kind);
        if !self.errors.is_empty() {
            return None;
        }

        let draft = EntityDraft {
            name: self.name.trim().to_string(),
            geometry: self.geometry.trim().to_string(),
            kind: self.kind,
        };
        let request = match self.editing {
            Some(id) => StoreRequest::Update {
                id,
                draft,
                origin: UpdateOrigin::Form,
            },
            None => StoreRequest::Create(draft),
        };
        self.submitted = Some(request.clone());
        Some(request)
    }

    /// Whether a settled request is the one this form is waiting on
    pub fn is_waiting_on(&self, request: &StoreRequest) -> bool {
        self.submitted.as_ref() == Some(request)
    }

    pub fn submission_failed(&mut self) {
        self.submitted = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_click_prefills_point() {
        let form = EntityForm::at_position(LatLng::new(41.0082, 28.9784));

        assert_eq!(form.kind, EntityKind::Point);
        assert_eq!(form.geometry, "28.9784 41.0082");
        assert!(form.editing.is_none());
    }

    #[test]
    fn test_shape_prefills_kind_and_geometry() {
        let form = EntityForm::from_shape(&ShapeDrawn {
            kind: EntityKind::Line,
            geometry: "29 41, 32 40".to_string(),
        });

        assert_eq!(form.kind, EntityKind::Line);
        assert_eq!(form.geometry, "29 41, 32 40");
        assert_eq!(form.title(), "New Entity");
    }

    #[test]
    fn test_submit_create_trims() {
        let mut form = EntityForm {
            name: "  Harbour ".to_string(),
            geometry: " 29 41 ".to_string(),
            ..Default::default()
        };

        let request = form.submit().unwrap();

        assert_eq!(
            request,
            StoreRequest::Create(EntityDraft {
                name: "Harbour".to_string(),
                geometry: "29 41".to_string(),
                kind: EntityKind::Point,
            })
        );
        assert!(form.is_submitting());
        assert!(form.is_waiting_on(&request));
    }

    #[test]
    fn test_submit_edit_builds_update() {
        let entity = GeoEntity {
            id: 8,
            name: "Field".to_string(),
            geometry: "0 0, 1 0, 1 1, 0 0".to_string(),
            kind: EntityKind::Polygon,
        };
        let mut form = EntityForm::edit(&entity);

        let request = form.submit().unwrap();

        assert_eq!(form.title(), "Edit Entity");
        assert_eq!(request.updated_id(), Some(8));
        assert!(matches!(
            request,
            StoreRequest::Update {
                origin: UpdateOrigin::Form,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_form_keeps_errors() {
        let mut form = EntityForm {
            name: "   ".to_string(),
            geometry: "28.9 41.0, 29.0 42.0".to_string(),
            ..Default::default()
        };

        assert!(form.submit().is_none());
        assert_eq!(form.errors.name.as_deref(), Some("Name is required"));
        assert!(form.errors.geometry.is_some());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_changing_kind_clears_geometry_error() {
        let mut form = EntityForm {
            name: "x".to_string(),
            ..Default::default()
        };
        form.submit();
        assert!(form.errors.geometry.is_some());

        form.set_kind(EntityKind::Line);
        assert!(form.errors.geometry.is_none());
    }

    #[test]
    fn test_failed_submission_can_retry() {
        let mut form = EntityForm {
            name: "Depot".to_string(),
            geometry: "29 41".to_string(),
            ..Default::default()
        };
        form.submit();
        form.submission_failed();

        assert!(!form.is_submitting());
        assert!(form.submit().is_some());
    }
}
