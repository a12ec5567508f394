//! Glue between finished drawings, map clicks, the entity dialog and the store.

use bevy::prelude::*;

use crate::drawing::ShapeDrawn;
use crate::filter::HiddenSet;
use crate::map::{MapClicked, MapSelection, OverlayClicked};
use crate::store::{
    EntityCollection, StoreOutcome, StoreRequest, StoreResult, StoreSettled, UpdateOrigin,
};

use super::drawing::DrawingState;
use super::form::EntityForm;
use super::notifications::{Notifications, ToastLevel};

/// The entity dialog's form, `None` while closed.
#[derive(Resource, Debug, Default)]
pub struct EntityDialog {
    pub form: Option<EntityForm>,
}

impl EntityDialog {
    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn open(&mut self, form: EntityForm) {
        self.form = Some(form);
    }

    pub fn close(&mut self) {
        self.form = None;
    }
}

/// Toast for a settled request, if it deserves one
pub fn settle_notice(result: &StoreResult) -> Option<(ToastLevel, String)> {
    match &result.outcome {
        Err(message) => {
            let message = match result.request {
                StoreRequest::Refresh => format!("Could not load entities: {}", message),
                _ => message.clone(),
            };
            Some((ToastLevel::Error, message))
        }
        Ok(StoreOutcome::Listed(_)) => None,
        Ok(StoreOutcome::Created(entity)) => {
            Some((ToastLevel::Success, format!("\"{}\" created", entity.name)))
        }
        Ok(StoreOutcome::Updated(entity)) => {
            let verb = match result.request {
                StoreRequest::Update {
                    origin: UpdateOrigin::Drag,
                    ..
                } => "moved",
                _ => "updated",
            };
            Some((ToastLevel::Success, format!("\"{}\" {}", entity.name, verb)))
        }
        Ok(StoreOutcome::Deleted { message, .. }) => {
            let message = if message.is_empty() {
                "Entity deleted".to_string()
            } else {
                message.clone()
            };
            Some((ToastLevel::Success, message))
        }
    }
}

/// A finished drawing opens the dialog pre-filled
pub fn open_dialog_for_shape(
    mut shapes: MessageReader<ShapeDrawn>,
    mut dialog: ResMut<EntityDialog>,
) {
    if let Some(shape) = shapes.read().last() {
        dialog.open(EntityForm::from_shape(shape));
    }
}

/// A click on empty map (while not drawing) opens a point form at that spot
pub fn open_dialog_for_click(
    mut clicks: MessageReader<MapClicked>,
    drawing: Res<DrawingState>,
    mut dialog: ResMut<EntityDialog>,
    mut selection: ResMut<MapSelection>,
) {
    let Some(MapClicked(position)) = clicks.read().last().copied() else {
        return;
    };
    if drawing.mode().is_drawing() || dialog.is_open() {
        return;
    }
    selection.0 = None;
    dialog.open(EntityForm::at_position(position));
}

pub fn select_clicked_overlay(
    mut clicks: MessageReader<OverlayClicked>,
    mut selection: ResMut<MapSelection>,
) {
    if let Some(click) = clicks.read().last() {
        selection.0 = Some(click.entity_id);
    }
}

/// Toasts, dialog closing and bookkeeping once the store answers
pub fn handle_store_settled(
    mut settled: MessageReader<StoreSettled>,
    collection: Res<EntityCollection>,
    mut dialog: ResMut<EntityDialog>,
    mut notifications: ResMut<Notifications>,
    mut selection: ResMut<MapSelection>,
    mut hidden: ResMut<HiddenSet>,
) {
    for StoreSettled(result) in settled.read() {
        if let Some((level, message)) = settle_notice(result) {
            notifications.push(level, message);
        }

        if let Some(form) = dialog.form.as_mut()
            && form.is_waiting_on(&result.request)
        {
            if result.is_success() {
                dialog.close();
            } else {
                form.submission_failed();
            }
        }

        if result.is_success() {
            if let Some(id) = selection.0
                && collection.get(id).is_none()
            {
                selection.0 = None;
            }
            if matches!(result.request, StoreRequest::Refresh | StoreRequest::Delete { .. }) {
                hidden.retain_existing(collection.entities());
            }
        }
    }
}
