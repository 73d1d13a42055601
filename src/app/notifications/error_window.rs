use super::{Notification, NotificationKind, NotificationManager};
use egui::{Context, RichText, ScrollArea};

pub struct NotificationDetailsWindow;

impl NotificationDetailsWindow {
    pub fn show(manager: &mut NotificationManager, ctx: &Context) {
        if !manager.show_details_window {
            return;
        }

        let mut open = manager.show_details_window;
        let selected_id = manager.selected_notification_id.clone();

        if let Some(notification_id) = selected_id {
            if let Some(notification) = manager.get_notification(&notification_id).cloned() {
                egui::Window::new(format!(
                    "{} - {}",
                    notification.icon(),
                    notification.title
                ))
                .open(&mut open)
                .collapsible(false)
                .resizable(true)
                .min_width(420.0)
                .show(ctx, |ui| {
                    Self::show_notification_details(ui, &notification, manager);
                });
            } else {
                // Notification no longer exists, close the window
                open = false;
            }
        } else {
            open = false;
        }

        manager.show_details_window = open;
        if !open {
            manager.selected_notification_id = None;
        }
    }

    fn show_notification_details(
        ui: &mut egui::Ui,
        notification: &Notification,
        manager: &mut NotificationManager,
    ) {
        ui.horizontal(|ui| {
            ui.colored_label(
                notification.color(),
                format!("{} {}", notification.icon(), notification.title),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Copy to Clipboard").clicked() {
                    ui.ctx().copy_text(Self::clipboard_summary(notification));
                }
            });
        });

        ui.separator();

        ui.horizontal(|ui| {
            ui.label(RichText::new("Source:").strong());
            ui.label(&notification.source);
        });

        ui.horizontal(|ui| {
            ui.label(RichText::new("Time:").strong());
            ui.label(format!("{:?} ago", notification.created_at.elapsed()));
        });

        ui.separator();

        let section_title = match notification.kind {
            NotificationKind::Error => "Error",
            NotificationKind::Success => "Success",
        };

        ui.group(|ui| {
            ui.label(
                RichText::new(section_title)
                    .color(notification.color())
                    .strong(),
            );

            ScrollArea::vertical().max_height(240.0).show(ui, |ui| {
                ui.label(&notification.message);
                if let Some(details) = &notification.details {
                    ui.label(RichText::new(details).size(11.0).weak());
                }
            });
        });

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("Close").clicked() {
                manager.show_details_window = false;
                manager.selected_notification_id = None;
            }

            if notification.dismissible && ui.button("Dismiss").clicked() {
                manager.dismiss_notification(&notification.id);
            }
        });
    }

    fn clipboard_summary(notification: &Notification) -> String {
        let mut summary = String::new();

        summary.push_str(&format!(
            "{} - {}\n",
            notification.icon(),
            notification.title
        ));
        summary.push_str("==========================================\n\n");
        summary.push_str(&format!("Source: {}\n", notification.source));
        summary.push_str(&format!(
            "Time: {:?} ago\n\n",
            notification.created_at.elapsed()
        ));
        summary.push_str(&format!("{}\n", notification.message));

        if let Some(details) = &notification.details {
            summary.push_str(&format!("Details: {}\n", details));
        }

        summary
    }
}
