//! Generated-carousel output view.
//!
//! Three mutually exclusive states: a placeholder before the first
//! generation, a spinner while the first generation is in flight, and the
//! tabbed result otherwise. A stale result stays visible while a
//! regeneration runs. Every card carries a copy button that flips to a
//! confirmation tick for the copy-confirmation window.

use egui::{Color32, RichText, ScrollArea, Ui};

use crate::app::carousel::CarouselResult;
use crate::app::dashui::copy_state::CopyConfirmations;

const ACCENT_BLUE: Color32 = Color32::from_rgb(70, 130, 200);
const ACCENT_PURPLE: Color32 = Color32::from_rgb(150, 100, 200);
const ACCENT_GREEN: Color32 = Color32::from_rgb(40, 180, 40);
const ACCENT_AMBER: Color32 = Color32::from_rgb(200, 150, 40);

/// Tabs over the generated result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputTab {
    #[default]
    Slides,
    Caption,
    Hashtags,
    Extras,
}

impl OutputTab {
    pub const ALL: [OutputTab; 4] = [
        OutputTab::Slides,
        OutputTab::Caption,
        OutputTab::Hashtags,
        OutputTab::Extras,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OutputTab::Slides => "Slides",
            OutputTab::Caption => "Caption",
            OutputTab::Hashtags => "Hashtags",
            OutputTab::Extras => "Extras",
        }
    }
}

/// What the output view wants the app to do after this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputAction {
    None,
    Regenerate,
    EditInputs,
}

pub fn show(
    ui: &mut Ui,
    result: Option<&CarouselResult>,
    loading: bool,
    last_error: Option<&str>,
    narrow: bool,
    active_tab: &mut OutputTab,
    copied: &mut CopyConfirmations,
) -> OutputAction {
    match (result, loading) {
        (None, false) => {
            show_placeholder(ui, last_error);
            OutputAction::None
        }
        (None, true) => {
            show_loading(ui);
            OutputAction::None
        }
        (Some(result), _) => {
            show_result(ui, result, loading, last_error, narrow, active_tab, copied)
        }
    }
}

fn show_placeholder(ui: &mut Ui, last_error: Option<&str>) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.35);
        ui.heading("Your carousel will appear here");
        ui.label("Fill in the form and click Generate Carousel to get started");
        if let Some(error) = last_error {
            ui.add_space(12.0);
            ui.colored_label(Color32::from_rgb(220, 50, 50), RichText::new(error).strong());
        }
    });
}

fn show_loading(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.4);
        ui.add(egui::Spinner::new().size(32.0));
        ui.add_space(8.0);
        ui.label("Generating your carousel...");
    });
}

fn show_result(
    ui: &mut Ui,
    result: &CarouselResult,
    loading: bool,
    last_error: Option<&str>,
    narrow: bool,
    active_tab: &mut OutputTab,
    copied: &mut CopyConfirmations,
) -> OutputAction {
    let mut action = OutputAction::None;

    // Action row above the tab strip. The form is already on screen in the
    // side-by-side layout, so Edit Inputs only appears on narrow windows.
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if narrow && ui.button("Edit Inputs").clicked() {
            action = OutputAction::EditInputs;
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if loading {
                ui.spinner();
                ui.label(RichText::new("Regenerating...").italics());
            } else if ui.button("⟳ Regenerate").clicked() {
                action = OutputAction::Regenerate;
            }
        });
    });

    if let Some(error) = last_error {
        ui.colored_label(Color32::from_rgb(220, 50, 50), RichText::new(error).strong());
    }

    ui.add_space(4.0);
    ui.horizontal(|ui| {
        for tab in OutputTab::ALL {
            if ui
                .selectable_label(*active_tab == tab, tab.label())
                .clicked()
            {
                *active_tab = tab;
            }
        }
    });
    ui.separator();

    ScrollArea::vertical()
        .id_salt("output_scroll_area")
        .auto_shrink([false, false])
        .show(ui, |ui| match active_tab {
            OutputTab::Slides => show_slides(ui, result, copied),
            OutputTab::Caption => show_caption(ui, result, copied),
            OutputTab::Hashtags => show_hashtags(ui, result, copied),
            OutputTab::Extras => show_extras(ui, result, copied),
        });

    action
}

/// Copy button that turns into a confirmation tick for the copy window.
fn copy_button(ui: &mut Ui, copied: &mut CopyConfirmations, key: &str, payload: String) {
    if copied.is_confirmed(key) {
        ui.colored_label(ACCENT_GREEN, "✓ Copied");
    } else if ui.button("📋 Copy").clicked() {
        ui.ctx().copy_text(payload);
        copied.confirm(key);
    }
}

fn card(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::new()
        .fill(ui.visuals().extreme_bg_color)
        .stroke(egui::Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color))
        .inner_margin(egui::vec2(12.0, 10.0))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
    ui.add_space(10.0);
}

/// Tinted sub-block inside a card, e.g. the visual suggestion of a slide.
fn sub_block(ui: &mut Ui, accent: Color32, title: &str, body: &str) {
    egui::Frame::new()
        .fill(accent.linear_multiply(0.08))
        .inner_margin(egui::vec2(8.0, 6.0))
        .corner_radius(2.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).color(accent).size(11.0).strong());
            ui.label(body);
        });
    ui.add_space(4.0);
}

fn chip_row(ui: &mut Ui, accent: Color32, items: &[String]) {
    ui.horizontal_wrapped(|ui| {
        for item in items {
            egui::Frame::new()
                .fill(accent.linear_multiply(0.12))
                .inner_margin(egui::vec2(8.0, 3.0))
                .corner_radius(8.0)
                .show(ui, |ui| {
                    ui.label(RichText::new(item).color(accent).strong());
                });
        }
    });
}

fn show_slides(ui: &mut Ui, result: &CarouselResult, copied: &mut CopyConfirmations) {
    ui.add_space(8.0);
    for slide in &result.carousel_slides {
        let key = format!("slide-{}", slide.slide_number);
        card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    ACCENT_BLUE,
                    RichText::new(format!("{}", slide.slide_number)).strong(),
                );
                ui.heading(&slide.headline);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    copy_button(ui, copied, &key, slide.clipboard_text());
                });
            });
            ui.add_space(6.0);
            ui.label(&slide.supporting_text);
            ui.add_space(6.0);
            sub_block(ui, ACCENT_BLUE, "Visual Suggestion:", &slide.visual_suggestion);
            sub_block(ui, ACCENT_PURPLE, "Design Notes:", &slide.design_notes);
        });
    }
}

fn show_caption(ui: &mut Ui, result: &CarouselResult, copied: &mut CopyConfirmations) {
    ui.add_space(8.0);
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Post Caption");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                copy_button(ui, copied, "caption", result.caption.full_caption.clone());
            });
        });
        ui.add_space(6.0);
        ui.label(&result.caption.full_caption);
        ui.add_space(10.0);
        sub_block(ui, ACCENT_BLUE, "Hook:", &result.caption.hook);
        sub_block(ui, ACCENT_PURPLE, "Body:", &result.caption.body);
        sub_block(ui, ACCENT_GREEN, "CTA:", &result.caption.cta);
    });
}

fn show_hashtags(ui: &mut Ui, result: &CarouselResult, copied: &mut CopyConfirmations) {
    let tiers = [
        (
            "Broad Reach Hashtags",
            "Hashtags for maximum visibility",
            "hashtags-broad",
            ACCENT_BLUE,
            &result.hashtags.broad,
        ),
        (
            "Niche Specific Hashtags",
            "Hashtags for the target audience",
            "hashtags-niche",
            ACCENT_PURPLE,
            &result.hashtags.niche,
        ),
        (
            "Authority Building Hashtags",
            "Hashtags for thought leadership",
            "hashtags-authority",
            ACCENT_GREEN,
            &result.hashtags.authority,
        ),
    ];

    ui.add_space(8.0);
    for (title, subtitle, key, accent, tags) in tiers {
        card(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.heading(title);
                    ui.label(RichText::new(subtitle).size(11.0).weak());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    copy_button(ui, copied, key, tags.join(" "));
                });
            });
            ui.add_space(6.0);
            chip_row(ui, accent, tags);
        });
    }

    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading("All Hashtags Combined");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                copy_button(
                    ui,
                    copied,
                    "hashtags-all",
                    result.hashtags.all_hashtags.clone(),
                );
            });
        });
        ui.add_space(6.0);
        ui.label(&result.hashtags.all_hashtags);
    });
}

fn show_extras(ui: &mut Ui, result: &CarouselResult, copied: &mut CopyConfirmations) {
    ui.add_space(8.0);

    card(ui, |ui| {
        ui.heading("Alternative Hooks");
        ui.label(RichText::new("Alternative opening lines for testing").size(11.0).weak());
        ui.add_space(6.0);
        numbered_copy_list(ui, copied, "hook", ACCENT_BLUE, &result.alternative_hooks);
    });

    card(ui, |ui| {
        ui.heading("Alternative CTAs");
        ui.label(RichText::new("Alternative call-to-action options").size(11.0).weak());
        ui.add_space(6.0);
        numbered_copy_list(ui, copied, "cta", ACCENT_PURPLE, &result.alternative_ctas);
    });

    card(ui, |ui| {
        ui.heading("Posting Time Recommendations");
        ui.add_space(6.0);
        ui.label(RichText::new("Best Times:").strong());
        chip_row(ui, ACCENT_BLUE, &result.posting_recommendations.best_times);
        ui.add_space(6.0);
        ui.label(RichText::new("Best Days:").strong());
        chip_row(ui, ACCENT_GREEN, &result.posting_recommendations.best_days);
        ui.add_space(6.0);
        sub_block(
            ui,
            ACCENT_AMBER,
            "Reasoning:",
            &result.posting_recommendations.reasoning,
        );
    });

    card(ui, |ui| {
        ui.heading("Engagement Questions");
        ui.label(
            RichText::new(format!(
                "{} questions to spark conversation",
                result.engagement_questions.len()
            ))
            .size(11.0)
            .weak(),
        );
        ui.add_space(6.0);
        numbered_copy_list(
            ui,
            copied,
            "question",
            ACCENT_GREEN,
            &result.engagement_questions,
        );
    });

    if !result.content_strategy_notes.is_empty() {
        card(ui, |ui| {
            ui.heading("Content Strategy Notes");
            ui.add_space(6.0);
            sub_block(ui, ACCENT_AMBER, "Notes:", &result.content_strategy_notes);
        });
    }
}

fn numbered_copy_list(
    ui: &mut Ui,
    copied: &mut CopyConfirmations,
    key_prefix: &str,
    accent: Color32,
    items: &[String],
) {
    for (idx, item) in items.iter().enumerate() {
        let key = format!("{key_prefix}-{idx}");
        ui.horizontal(|ui| {
            ui.colored_label(accent, RichText::new(format!("{}", idx + 1)).strong());
            ui.label(item);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                copy_button(ui, copied, &key, item.clone());
            });
        });
        if idx + 1 < items.len() {
            ui.separator();
        }
    }
}
