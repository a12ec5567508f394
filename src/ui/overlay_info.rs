use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::map::projection::project;
use crate::map::{MapOverlay, MapSelection, MapView, PointerState};
use crate::store::{EntityCollection, GeoEntity};

/// Heading, type label and id line of the popup
pub fn info_lines(entity: &GeoEntity) -> [String; 3] {
    [
        entity.name.clone(),
        entity.kind.display_name().to_string(),
        format!("ID: {}", entity.id),
    ]
}

/// Popup above the selected overlay
pub fn overlay_info_ui(
    mut contexts: EguiContexts,
    mut selection: ResMut<MapSelection>,
    collection: Res<EntityCollection>,
    overlays: Query<&MapOverlay>,
    pointer: Res<PointerState>,
    view: MapView,
) -> Result {
    let Some(id) = selection.0 else {
        return Ok(());
    };
    if pointer.is_dragging() {
        return Ok(());
    }
    // Only rendered overlays get a popup
    let Some(overlay) = overlays.iter().find(|overlay| overlay.entity_id == id) else {
        return Ok(());
    };
    let Some(entity) = collection.get(id) else {
        return Ok(());
    };
    let Some(screen) = view.world_to_screen(project(overlay.shape.anchor())) else {
        return Ok(());
    };

    let [name, kind, id_line] = info_lines(entity);
    let mut should_close = false;

    egui::Area::new(egui::Id::new("overlay_info"))
        .fixed_pos(egui::pos2(screen.x, screen.y - 12.0))
        .pivot(egui::Align2::CENTER_BOTTOM)
        .show(contexts.ctx_mut()?, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(name).strong());
                    if ui.small_button("x").clicked() {
                        should_close = true;
                    }
                });
                ui.label(egui::RichText::new(kind).weak());
                ui.label(egui::RichText::new(id_line).weak().small());
            });
        });

    if should_close {
        selection.0 = None;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::EntityKind;

    #[test]
    fn test_info_lines_show_name_type_and_id() {
        let entity = GeoEntity {
            id: 12,
            name: "Harbour".to_string(),
            geometry: "28.5 40.5, 29.5 40.5, 29.5 41.5, 28.5 40.5".to_string(),
            kind: EntityKind::Polygon,
        };

        assert_eq!(info_lines(&entity), ["Harbour", "Polygon", "ID: 12"]);
    }
}
