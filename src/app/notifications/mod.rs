//! User-facing notification surface.
//!
//! Generation outcomes are reported here: failures stay until dismissed,
//! successes auto-expire. The manager renders a compact status-bar indicator
//! and backs the details window in [`error_window`].

use egui::Color32;
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub mod error_window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
}

/// A single user-visible notification.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub kind: NotificationKind,
    pub message: String,
    pub details: Option<String>,
    pub created_at: Instant,
    pub expires_at: Option<Instant>,
    pub dismissible: bool,
    pub source: String, // e.g., "Generation", "Agent Service"
}

impl Notification {
    pub fn new_error(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: NotificationKind::Error,
            message: message.into(),
            details: None,
            created_at: Instant::now(),
            expires_at: None, // Errors don't auto-expire
            dismissible: true,
            source: source.into(),
        }
    }

    pub fn new_success(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: NotificationKind::Success,
            message: message.into(),
            details: None,
            created_at: Instant::now(),
            expires_at: Some(Instant::now() + Duration::from_secs(5)),
            dismissible: true,
            source: source.into(),
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Instant::now() > expires_at,
            None => false,
        }
    }

    pub fn color(&self) -> Color32 {
        match self.kind {
            NotificationKind::Error => Color32::from_rgb(220, 50, 50),
            NotificationKind::Success => Color32::from_rgb(40, 180, 40),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            NotificationKind::Error => "✗",
            NotificationKind::Success => "✓",
        }
    }
}

/// Holds active notifications and drives the status-bar indicator.
#[derive(Default)]
pub struct NotificationManager {
    notifications: HashMap<String, Notification>,
    pub show_details_window: bool,
    pub selected_notification_id: Option<String>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification, replacing any existing one with the same id.
    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications
            .insert(notification.id.clone(), notification);
    }

    pub fn dismiss_notification(&mut self, id: &str) {
        self.notifications.remove(id);
        if self.selected_notification_id.as_deref() == Some(id) {
            self.selected_notification_id = None;
            self.show_details_window = false;
        }
    }

    pub fn clear_expired(&mut self) {
        self.notifications
            .retain(|_, notification| !notification.is_expired());
    }

    pub fn get_notification(&self, id: &str) -> Option<&Notification> {
        self.notifications.get(id)
    }

    pub fn error_count(&self) -> usize {
        self.notifications
            .values()
            .filter(|n| n.kind == NotificationKind::Error)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Most recent active success notification, if any.
    pub fn latest_success(&self) -> Option<&Notification> {
        self.notifications
            .values()
            .filter(|n| n.kind == NotificationKind::Success)
            .max_by_key(|n| n.created_at)
    }

    pub fn show_notification_details(&mut self, notification_id: String) {
        self.selected_notification_id = Some(notification_id);
        self.show_details_window = true;
    }

    /// Compact indicator for the bottom status bar.
    ///
    /// Shows the active success message while it lives, and an error count
    /// that opens the details window for the first error when clicked.
    pub fn render_status_bar_indicator(&mut self, ui: &mut egui::Ui) {
        self.clear_expired();

        if let Some(success) = self.latest_success() {
            ui.colored_label(success.color(), format!("{} {}", success.icon(), success.message));
        }

        let error_count = self.error_count();
        if error_count > 0 {
            let error_text = if error_count == 1 {
                "1 error".to_string()
            } else {
                format!("{} errors", error_count)
            };

            if ui
                .colored_label(Color32::from_rgb(220, 50, 50), format!("✗ {}", error_text))
                .clicked()
            {
                let first_error = self
                    .notifications
                    .values()
                    .filter(|n| n.kind == NotificationKind::Error)
                    .max_by_key(|n| n.created_at)
                    .map(|n| n.id.clone());
                if let Some(id) = first_error {
                    self.show_notification_details(id);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_do_not_auto_expire() {
        let n = Notification::new_error("e1", "Generation failed", "boom", "Generation");
        assert!(n.expires_at.is_none());
        assert!(!n.is_expired());
    }

    #[test]
    fn add_replaces_same_id() {
        let mut manager = NotificationManager::new();
        manager.add_notification(Notification::new_error("e1", "first", "a", "Generation"));
        manager.add_notification(Notification::new_error("e1", "second", "b", "Generation"));
        assert_eq!(manager.error_count(), 1);
        assert_eq!(manager.get_notification("e1").unwrap().title, "second");
    }

    #[test]
    fn dismiss_clears_details_selection() {
        let mut manager = NotificationManager::new();
        manager.add_notification(Notification::new_error("e1", "oops", "a", "Generation"));
        manager.show_notification_details("e1".to_string());
        manager.dismiss_notification("e1");
        assert!(!manager.show_details_window);
        assert!(manager.selected_notification_id.is_none());
        assert!(!manager.has_errors());
    }
}
