//! Entity rows.

use bevy_egui::egui;

use crate::constants::GEOMETRY_PREVIEW_CHARS;
use crate::filter::HiddenSet;
use crate::map::kind_color;
use crate::store::{GeoEntity, PendingDrags};

use super::super::color32;

/// Action picked from a row this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Select(i64),
    ToggleHidden(i64),
    Edit(i64),
    Delete(i64),
}

/// Shorten geometry text for display, appending "..." when cut
pub fn truncate_geometry(geometry: &str, max_chars: usize) -> String {
    if geometry.chars().count() <= max_chars {
        return geometry.to_string();
    }
    let cut: String = geometry.chars().take(max_chars).collect();
    format!("{}...", cut)
}

pub fn render_entity_list(
    ui: &mut egui::Ui,
    entities: &[&GeoEntity],
    hidden: &HiddenSet,
    pending: &PendingDrags,
    selected: Option<i64>,
) -> Option<RowAction> {
    if entities.is_empty() {
        ui.label(egui::RichText::new("No entities match the current filters").italics().weak());
        return None;
    }

    let mut action = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entity in entities {
                let is_hidden = hidden.contains(entity.id);
                let is_selected = selected == Some(entity.id);

                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("●").color(color32(kind_color(entity.kind))));

                        let mut name = egui::RichText::new(&entity.name).strong();
                        if is_hidden {
                            name = name.weak();
                        }
                        if ui.selectable_label(is_selected, name).clicked() {
                            action = Some(RowAction::Select(entity.id));
                        }
                        if pending.contains(entity.id) {
                            ui.spinner();
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("Delete").clicked() {
                                action = Some(RowAction::Delete(entity.id));
                            }
                            if ui.small_button("Edit").clicked() {
                                action = Some(RowAction::Edit(entity.id));
                            }
                            let eye = if is_hidden { "Show" } else { "Hide" };
                            if ui.small_button(eye).clicked() {
                                action = Some(RowAction::ToggleHidden(entity.id));
                            }
                        });
                    });
                    ui.label(
                        egui::RichText::new(format!(
                            "{} | {}",
                            entity.kind.display_name(),
                            truncate_geometry(&entity.geometry, GEOMETRY_PREVIEW_CHARS)
                        ))
                        .weak()
                        .small(),
                    );
                });
            }
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_geometry_is_unchanged() {
        assert_eq!(truncate_geometry("29 41", 30), "29 41");
    }

    #[test]
    fn test_long_geometry_is_cut() {
        let geometry = "28.5 40.5, 29.5 40.5, 29.5 41.5, 28.5 41.5, 28.5 40.5";
        let preview = truncate_geometry(geometry, 30);
        assert_eq!(preview.chars().count(), 33);
        assert!(preview.ends_with("..."));
        assert!(geometry.starts_with(preview.trim_end_matches("...")));
    }

    #[test]
    fn test_exact_length_is_not_cut() {
        let geometry = "a".repeat(30);
        assert_eq!(truncate_geometry(&geometry, 30), geometry);
    }
}
