use bevy::prelude::*;

use crate::constants::TOAST_DURATION_SECS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub remaining: f32,
}

/// Transient success and error messages.
#[derive(Resource, Debug, Default)]
pub struct Notifications {
    toasts: Vec<Toast>,
}

impl Notifications {
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toasts.push(Toast {
            level,
            message: message.into(),
            remaining: TOAST_DURATION_SECS,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.toasts.len() {
            self.toasts.remove(index);
        }
    }

    pub fn tick(&mut self, delta_secs: f32) {
        for toast in &mut self.toasts {
            toast.remaining -= delta_secs;
        }
        self.toasts.retain(|toast| toast.remaining > 0.0);
    }
}

pub fn expire_notifications(time: Res<Time>, mut notifications: ResMut<Notifications>) {
    if !notifications.toasts.is_empty() {
        notifications.tick(time.delta_secs());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire() {
        let mut notifications = Notifications::default();
        notifications.success("Saved");
        notifications.tick(TOAST_DURATION_SECS - 0.5);
        assert_eq!(notifications.toasts().len(), 1);

        notifications.tick(1.0);
        assert!(notifications.toasts().is_empty());
    }

    #[test]
    fn test_levels_kept() {
        let mut notifications = Notifications::default();
        notifications.success("ok");
        notifications.error("bad");

        let levels: Vec<ToastLevel> = notifications.toasts().iter().map(|t| t.level).collect();
        assert_eq!(levels, vec![ToastLevel::Success, ToastLevel::Error]);
    }

    #[test]
    fn test_dismiss() {
        let mut notifications = Notifications::default();
        notifications.error("a");
        notifications.dismiss(0);
        notifications.dismiss(5);
        assert!(notifications.toasts().is_empty());
    }
}
