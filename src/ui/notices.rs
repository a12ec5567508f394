use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::{ConfigResetNotification, SaveConfigRequest};
use crate::editor::{Notifications, ToastLevel};

/// Toast stack in the bottom-right corner
pub fn toasts_ui(mut contexts: EguiContexts, mut notifications: ResMut<Notifications>) -> Result {
    if notifications.toasts().is_empty() {
        return Ok(());
    }

    let mut dismissed = None;

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, [-16.0, -16.0])
        .show(contexts.ctx_mut()?, |ui| {
            for (index, toast) in notifications.toasts().iter().enumerate() {
                let fill = match toast.level {
                    ToastLevel::Success => egui::Color32::from_rgb(40, 110, 60),
                    ToastLevel::Error => egui::Color32::from_rgb(140, 45, 45),
                };
                egui::Frame::popup(ui.style())
                    .fill(fill)
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(&toast.message).color(egui::Color32::WHITE));
                            if ui.small_button("x").clicked() {
                                dismissed = Some(index);
                            }
                        });
                    });
                ui.add_space(4.0);
            }
        });

    if let Some(index) = dismissed {
        notifications.dismiss(index);
    }
    Ok(())
}

pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
    mut save_requests: MessageWriter<SaveConfigRequest>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    let mut should_close = false;

    egui::Window::new("Configuration Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Your configuration file could not be loaded and was reset to defaults.");
            if let Some(reason) = &notification.reason {
                ui.add_space(4.0);
                ui.label(egui::RichText::new(reason).weak().small());
            }
            ui.add_space(12.0);
            if ui.button("OK").clicked() {
                should_close = true;
            }
        });

    if should_close {
        notification.show = false;
        notification.reason = None;
        save_requests.write(SaveConfigRequest);
    }
    Ok(())
}
