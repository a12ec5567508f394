//! Search and kind filter controls.

use bevy_egui::egui;

use crate::filter::{FilterState, KindCounts, SearchDebounce};
use crate::geometry::EntityKind;
use crate::map::kind_color;
use crate::store::GeoEntity;

use super::super::color32;

/// Render the filter controls
pub fn render_filter_controls(
    ui: &mut egui::Ui,
    filter: &mut FilterState,
    debounce: &mut SearchDebounce,
    entities: &[GeoEntity],
) {
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut debounce.buffer)
                .hint_text("Search by name...")
                .desired_width(ui.available_width() - 28.0),
        );
        if response.changed() {
            debounce.touch();
        }
        if ui
            .add_enabled(!debounce.buffer.is_empty(), egui::Button::new("x").small())
            .on_hover_text("Clear search")
            .clicked()
        {
            debounce.input("");
        }
    });

    ui.add_space(4.0);

    let counts = KindCounts::from_entities(entities);
    ui.horizontal_wrapped(|ui| {
        for kind in EntityKind::all() {
            let mut active = filter.is_kind_active(*kind);
            let label = egui::RichText::new(format!("{} ({})", kind.plural_name(), counts.get(*kind)))
                .color(color32(kind_color(*kind)));
            if ui.checkbox(&mut active, label).changed() {
                filter.toggle_kind(*kind);
            }
        }
    });

    ui.horizontal(|ui| {
        if ui.small_button("Show all").clicked() {
            filter.show_all();
        }
        if ui.small_button("Hide all").clicked() {
            filter.hide_all();
        }
        if filter.has_active_filters() && ui.small_button("Clear filters").clicked() {
            filter.clear();
            debounce.clear();
        }
    });

    let visible = entities.iter().filter(|entity| filter.matches(entity)).count();
    ui.label(
        egui::RichText::new(format!("Showing {} of {}", visible, entities.len()))
            .weak()
            .small(),
    );
}
