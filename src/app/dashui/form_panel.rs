//! Carousel input form.
//!
//! Renders every [`CarouselInput`] field and reports whether the user asked
//! to generate. All state lives in the caller; this module only mutates the
//! input it is handed.

use egui::{RichText, Ui};

use crate::app::carousel::{CarouselInput, ContentDepth, CtaType, PrimaryGoal, Tone};

/// What the form wants the app to do after this frame.
#[derive(Debug, Default)]
pub struct FormResponse {
    pub generate_clicked: bool,
}

pub fn show(
    ui: &mut Ui,
    input: &mut CarouselInput,
    show_examples: &mut bool,
    loading: bool,
) -> FormResponse {
    let mut response = FormResponse::default();

    egui::ScrollArea::vertical()
        .id_salt("form_scroll_area")
        .show(ui, |ui| {
            ui.add_space(6.0);
            ui.heading("Carousel Inputs");
            ui.add_space(10.0);

            required_label(ui, "Topic");
            ui.add(
                egui::TextEdit::multiline(&mut input.topic)
                    .hint_text("Enter your carousel topic...")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(10.0);

            required_label(ui, "Target Audience");
            ui.add(
                egui::TextEdit::singleline(&mut input.target_audience)
                    .hint_text("e.g., early-stage startup founders")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(10.0);

            ui.label(RichText::new("Primary Goal").strong());
            egui::ComboBox::from_id_salt("primary_goal")
                .selected_text(input.primary_goal.label())
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for goal in PrimaryGoal::ALL {
                        ui.selectable_value(&mut input.primary_goal, goal, goal.label());
                    }
                });
            ui.add_space(10.0);

            ui.label(RichText::new("Tone").strong());
            ui.horizontal_wrapped(|ui| {
                for tone in Tone::ALL {
                    if ui
                        .selectable_label(input.tone == tone, tone.label())
                        .clicked()
                    {
                        input.tone = tone;
                    }
                }
            });
            ui.add_space(10.0);

            ui.label(RichText::new("Content Depth").strong());
            ui.horizontal(|ui| {
                for depth in ContentDepth::ALL {
                    if ui
                        .selectable_label(input.content_depth == depth, depth.label())
                        .clicked()
                    {
                        input.content_depth = depth;
                    }
                }
            });
            ui.add_space(10.0);

            ui.label(RichText::new("CTA Type").strong());
            egui::ComboBox::from_id_salt("cta_type")
                .selected_text(input.cta_type.label())
                .width(ui.available_width())
                .show_ui(ui, |ui| {
                    for cta in CtaType::ALL {
                        ui.selectable_value(&mut input.cta_type, cta, cta.label());
                    }
                });
            ui.add_space(10.0);

            ui.label(RichText::new("Industry").strong());
            ui.add(
                egui::TextEdit::singleline(&mut input.industry)
                    .hint_text("e.g., SaaS, Marketing, Finance")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(10.0);

            // Collapsible optional section, toggled by its header
            let arrow = if *show_examples { "⏷" } else { "⏵" };
            if ui
                .selectable_label(
                    *show_examples,
                    format!("{arrow} Examples / Inspiration (Optional)"),
                )
                .clicked()
            {
                *show_examples = !*show_examples;
            }
            if *show_examples {
                ui.add(
                    egui::TextEdit::multiline(&mut input.examples)
                        .hint_text("Add examples or inspiration for content style...")
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );
            }
            ui.add_space(16.0);

            // Submission gate: both required fields non-blank and no request in flight
            let can_generate = !loading && input.is_submittable();
            let button_text = if loading {
                "Generating..."
            } else {
                "Generate Carousel"
            };

            ui.horizontal(|ui| {
                if loading {
                    ui.spinner();
                }
                let button = egui::Button::new(RichText::new(button_text).strong())
                    .min_size(egui::vec2(ui.available_width(), 36.0))
                    .fill(ui.visuals().selection.bg_fill);
                if ui.add_enabled(can_generate, button).clicked() {
                    response.generate_clicked = true;
                }
            });

            ui.add_space(10.0);
        });

    response
}

fn required_label(ui: &mut Ui, text: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(text).strong());
        ui.colored_label(egui::Color32::from_rgb(220, 50, 50), "*");
    });
}
