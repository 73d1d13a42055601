use eframe::egui;
use egui::{Context, RichText, Ui};

#[derive(Default)]
pub struct HelpWindow {
    pub open: bool,
}

impl HelpWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ctx: &Context) {
        if !self.open {
            return;
        }

        let central_panel_size = ctx.available_rect().size();
        let window_width = central_panel_size.x.min(520.0);
        let window_height = central_panel_size.y.min(460.0);

        let mut open = self.open;
        egui::Window::new("Help")
            .open(&mut open)
            .fixed_size([window_width, window_height])
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                self.ui_content(ui);
            });
        self.open = open;
    }

    fn ui_content(&self, ui: &mut Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(5.0);

            ui.heading("Workflow");
            ui.add_space(5.0);
            ui.label("1. Fill in a topic and a target audience (both required)");
            ui.label("2. Pick a goal, tone, depth and CTA, then click Generate Carousel");
            ui.label("3. Copy slides, caption, hashtags and extras from the output tabs");
            ui.add_space(15.0);

            ui.heading("Keyboard Shortcuts");
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Ctrl+Enter").strong());
                ui.label("- Generate (or regenerate) a carousel");
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Escape").strong());
                ui.label("- Close this window");
            });
            ui.add_space(15.0);

            ui.heading("Output Tabs");
            ui.add_space(5.0);
            ui.label("Slides - one card per carousel slide with visual and design notes");
            ui.label("Caption - the full post caption plus its hook/body/CTA breakdown");
            ui.label("Hashtags - broad, niche and authority tiers plus the combined set");
            ui.label("Extras - alternative hooks/CTAs, posting times, engagement questions");
            ui.add_space(20.0);

            ui.separator();
            ui.label(
                RichText::new(format!(
                    "postdeck {} ({} @ {})",
                    env!("CARGO_PKG_VERSION"),
                    env!("GIT_BRANCH"),
                    env!("GIT_COMMIT")
                ))
                .size(11.0)
                .weak(),
            );
        });
    }
}
