use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::editor::EntityDialog;
use crate::geometry::EntityKind;
use crate::store::{GeoEntity, StoreRequest};

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 90, 90);

/// Entity awaiting delete confirmation
#[derive(Resource, Default)]
pub struct DeleteConfirmState {
    pub target: Option<GeoEntity>,
}

fn field_error(ui: &mut egui::Ui, error: &Option<String>) {
    if let Some(message) = error {
        ui.label(egui::RichText::new(message).color(ERROR_COLOR).small());
    }
}

/// Create/edit form
pub fn entity_dialog_ui(
    mut contexts: EguiContexts,
    mut dialog: ResMut<EntityDialog>,
    mut requests: MessageWriter<StoreRequest>,
) -> Result {
    let Some(form) = dialog.form.as_mut() else {
        return Ok(());
    };

    let mut should_close = false;
    let mut should_save = false;

    egui::Window::new(form.title())
        .collapsible(false)
        .resizable(false)
        .min_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_enabled_ui(!form.is_submitting(), |ui| {
                ui.label(egui::RichText::new("Name").strong());
                ui.add(
                    egui::TextEdit::singleline(&mut form.name)
                        .desired_width(400.0)
                        .hint_text("Entity name"),
                );
                field_error(ui, &form.errors.name);

                ui.add_space(8.0);
                ui.label(egui::RichText::new("Type").strong());
                let mut kind = form.kind;
                ui.horizontal(|ui| {
                    for option in EntityKind::all() {
                        ui.radio_value(&mut kind, *option, option.display_name());
                    }
                });
                form.set_kind(kind);

                ui.add_space(8.0);
                ui.label(egui::RichText::new("Coordinates").strong());
                ui.add(
                    egui::TextEdit::multiline(&mut form.geometry)
                        .desired_width(400.0)
                        .desired_rows(3)
                        .hint_text(form.kind.geometry_placeholder()),
                );
                ui.label(egui::RichText::new(form.kind.geometry_help()).weak().small());
                field_error(ui, &form.errors.geometry);
            });

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                let label = if form.is_submitting() { "Saving..." } else { "Save" };
                if ui
                    .add_enabled(!form.is_submitting(), egui::Button::new(label))
                    .clicked()
                {
                    should_save = true;
                }
                if ui.button("Cancel").clicked() {
                    should_close = true;
                }
            });
        });

    if should_save && let Some(request) = form.submit() {
        requests.write(request);
    }
    if should_close {
        dialog.close();
    }
    Ok(())
}

pub fn delete_confirm_ui(
    mut contexts: EguiContexts,
    mut confirm: ResMut<DeleteConfirmState>,
    mut requests: MessageWriter<StoreRequest>,
) -> Result {
    let Some(target) = confirm.target.as_ref() else {
        return Ok(());
    };

    let mut should_close = false;
    let mut should_delete = false;

    egui::Window::new("Delete Entity")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label(format!(
                "Delete \"{}\"? This cannot be undone.",
                target.name
            ));
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui
                    .button(egui::RichText::new("Delete").color(ERROR_COLOR))
                    .clicked()
                {
                    should_delete = true;
                }
                if ui.button("Cancel").clicked() {
                    should_close = true;
                }
            });
        });

    if should_delete {
        requests.write(StoreRequest::Delete { id: target.id });
        should_close = true;
    }
    if should_close {
        confirm.target = None;
    }
    Ok(())
}
