//! Main entities panel UI orchestration.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::editor::EntityDialog;
use crate::filter::{FilterState, HiddenSet, SearchDebounce};
use crate::map::MapSelection;
use crate::store::{EntityCollection, PendingDrags, StoreStatus};

use super::super::edit_resource;
use super::super::entity_dialog::DeleteConfirmState;
use super::filter::render_filter_controls;
use super::list::{render_entity_list, RowAction};

/// Filter resources edited by the panel
#[derive(SystemParam)]
pub struct FilterParams<'w> {
    pub filter: ResMut<'w, FilterState>,
    pub debounce: ResMut<'w, SearchDebounce>,
    pub hidden: ResMut<'w, HiddenSet>,
}

pub fn entities_panel_ui(
    mut contexts: EguiContexts,
    collection: Res<EntityCollection>,
    status: Res<StoreStatus>,
    pending: Res<PendingDrags>,
    mut filters: FilterParams,
    mut selection: ResMut<MapSelection>,
    mut dialog: ResMut<EntityDialog>,
    mut delete_confirm: ResMut<DeleteConfirmState>,
) -> Result {
    let mut action = None;

    egui::SidePanel::right("entities_panel")
        .default_width(300.0)
        .min_width(240.0)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(4.0);
            ui.heading("Entities");
            ui.separator();

            edit_resource(&mut filters.filter, |filter| {
                render_filter_controls(ui, filter, &mut filters.debounce, collection.entities());
            });

            ui.separator();

            if status.loading && collection.is_empty() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Loading entities...");
                });
                return;
            }

            if let Some(error) = &status.error {
                ui.label(
                    egui::RichText::new(format!("Last request failed: {}", error))
                        .color(egui::Color32::from_rgb(230, 90, 90))
                        .small(),
                );
                ui.add_space(4.0);
            }

            let visible = filters.filter.visible(collection.entities());
            action = render_entity_list(ui, &visible, &filters.hidden, &pending, selection.0);
        });

    match action {
        Some(RowAction::Select(id)) => {
            selection.0 = if selection.0 == Some(id) { None } else { Some(id) };
        }
        Some(RowAction::ToggleHidden(id)) => {
            let hidden = filters.hidden.toggle(id);
            debug!("Entity {} hidden: {}", id, hidden);
        }
        Some(RowAction::Edit(id)) => {
            if let Some(entity) = collection.get(id) {
                dialog.open(crate::editor::EntityForm::edit(entity));
            }
        }
        Some(RowAction::Delete(id)) => {
            delete_confirm.target = collection.get(id).cloned();
        }
        None => {}
    }
    Ok(())
}
