use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::drawing::DrawingMode;
use crate::editor::tools::tool_label;
use crate::editor::{DrawingState, EntityDialog, EntityForm, SetDrawingMode};
use crate::geometry::EntityKind;
use crate::map::kind_color;
use crate::store::{StoreRequest, StoreStatus};

use super::color32;

/// Drawing toolbar: one button per kind, cancel while drawing, add and refresh
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    drawing: Res<DrawingState>,
    status: Res<StoreStatus>,
    mut dialog: ResMut<EntityDialog>,
    mut mode_requests: MessageWriter<SetDrawingMode>,
    mut store_requests: MessageWriter<StoreRequest>,
) -> Result {
    let mode = drawing.mode();

    egui::TopBottomPanel::top("drawing_toolbar")
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .inner_margin(egui::Margin::symmetric(12, 8)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;

                ui.label(egui::RichText::new("Draw:").color(egui::Color32::LIGHT_GRAY));
                for kind in EntityKind::all() {
                    let selected = mode == DrawingMode::Drawing(*kind);
                    let button = egui::Button::new(
                        egui::RichText::new(tool_label(*kind))
                            .size(14.0)
                            .strong()
                            .color(color32(kind_color(*kind))),
                    )
                    .min_size(egui::vec2(0.0, 28.0))
                    .selected(selected);

                    if ui.add(button).clicked() {
                        mode_requests.write(SetDrawingMode(DrawingMode::Drawing(*kind)));
                    }
                }

                if mode.is_drawing() {
                    ui.add_space(4.0);
                    if ui
                        .add(egui::Button::new("Cancel (Esc)").min_size(egui::vec2(0.0, 28.0)))
                        .clicked()
                    {
                        mode_requests.write(SetDrawingMode(DrawingMode::Off));
                    }
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(mode.hint()).weak());
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add_enabled(
                            !status.loading,
                            egui::Button::new("Refresh").min_size(egui::vec2(0.0, 24.0)),
                        )
                        .clicked()
                    {
                        store_requests.write(StoreRequest::Refresh);
                    }
                    if ui
                        .add(egui::Button::new("Add Entity").min_size(egui::vec2(0.0, 24.0)))
                        .clicked()
                    {
                        dialog.open(EntityForm::blank());
                    }
                });
            });
        });
    Ok(())
}
