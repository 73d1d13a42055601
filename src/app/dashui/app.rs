use eframe::egui;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::app::carousel::{CarouselInput, CarouselResult};
use crate::app::dashui::copy_state::CopyConfirmations;
use crate::app::dashui::form_panel;
use crate::app::dashui::help_window::HelpWindow;
use crate::app::dashui::menu::{self, MenuAction};
use crate::app::dashui::output_panel::{self, OutputAction, OutputTab};
use crate::app::generation::{self, GenerationUpdate};
use crate::app::notifications::error_window::NotificationDetailsWindow;
use crate::app::notifications::{Notification, NotificationManager};

/// Below this window width only one of the two panels is shown at a time,
/// switched by `show_output` (Generate reveals the output, Edit Inputs
/// returns to the form).
const NARROW_LAYOUT_WIDTH: f32 = 900.0;

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

/// Top-level application state.
///
/// Owns the form input, the held result, the tab/copy state and the pending
/// generation channel. Only the theme survives restarts; everything else is
/// session state.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct PostdeckApp {
    pub theme: ThemeChoice,

    #[serde(skip)]
    pub input: CarouselInput,
    #[serde(skip)]
    pub result: Option<CarouselResult>,
    #[serde(skip)]
    pub active_tab: OutputTab,
    #[serde(skip)]
    pub loading: bool,
    #[serde(skip)]
    pub show_output: bool,
    #[serde(skip)]
    pub show_examples: bool,
    #[serde(skip)]
    pub copy_confirmations: CopyConfirmations,
    #[serde(skip)]
    pub notification_manager: NotificationManager,
    #[serde(skip)]
    pub help_window: HelpWindow,
    /// User-displayable reason for the most recent generation failure
    #[serde(skip)]
    pub last_error: Option<String>,
    #[serde(skip)]
    pub last_generated_at: Option<chrono::DateTime<chrono::Local>>,
    #[serde(skip)]
    pending_generation: Option<mpsc::Receiver<GenerationUpdate>>,
}

impl Default for PostdeckApp {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            input: CarouselInput::default(),
            result: None,
            active_tab: OutputTab::default(),
            loading: false,
            show_output: false,
            show_examples: false,
            copy_confirmations: CopyConfirmations::new(),
            notification_manager: NotificationManager::new(),
            help_window: HelpWindow::new(),
            last_error: None,
            last_generated_at: None,
            pending_generation: None,
        }
    }
}

impl PostdeckApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app: PostdeckApp = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        // Apply the saved theme
        app.apply_theme(&cc.egui_ctx);

        app
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        match self.theme {
            ThemeChoice::Latte => catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE),
            ThemeChoice::Frappe => catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE),
            ThemeChoice::Macchiato => catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO),
            ThemeChoice::Mocha => catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA),
        }

        let mut style = (*ctx.style()).clone();
        style.visuals.window_corner_radius = egui::CornerRadius::same(2);
        ctx.set_style(style);
    }

    /// Kick off a generation for the current input.
    ///
    /// The output panel is revealed immediately, before the response arrives;
    /// a previously held result stays visible until replaced. No-op while a
    /// request is already in flight or while the input is not submittable.
    pub fn start_generation(&mut self) {
        if self.loading || !self.input.is_submittable() {
            return;
        }

        info!("Starting carousel generation");
        self.loading = true;
        self.show_output = true;
        self.last_error = None;
        self.pending_generation = Some(generation::spawn_generation(self.input.clone()));
    }

    /// Drain pending generation updates from the worker channel.
    fn poll_generation(&mut self) {
        let mut updates = Vec::new();
        let mut disconnected = false;

        match &self.pending_generation {
            Some(rx) => loop {
                match rx.try_recv() {
                    Ok(update) => updates.push(update),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        disconnected = true;
                        break;
                    }
                }
            },
            None => return,
        }

        let mut finished = disconnected;
        for update in updates {
            if self.apply_generation_update(update) {
                finished = true;
            }
        }

        if finished {
            self.pending_generation = None;
            if self.loading {
                // Worker went away without a terminal update
                warn!("Generation worker disconnected before reporting a result");
                self.loading = false;
            }
        }
    }

    /// Fold one worker update into application state.
    ///
    /// Returns true when the update terminates the generation exchange.
    pub fn apply_generation_update(&mut self, update: GenerationUpdate) -> bool {
        match update {
            GenerationUpdate::Started => false,
            GenerationUpdate::Completed(result) => {
                info!(
                    "Carousel ready: {} slides, {} engagement questions",
                    result.carousel_slides.len(),
                    result.engagement_questions.len()
                );
                self.result = Some(result);
                self.active_tab = OutputTab::Slides;
                self.loading = false;
                self.last_error = None;
                self.last_generated_at = Some(chrono::Local::now());
                self.notification_manager.add_notification(Notification::new_success(
                    "generation_done",
                    "Carousel ready",
                    "Carousel generated",
                    "Generation",
                ));
                true
            }
            GenerationUpdate::Failed(reason) => {
                error!("Generation failed: {}", reason);
                // Held result (stale or none) is deliberately left unchanged
                self.loading = false;
                self.last_error = Some(reason.clone());
                self.notification_manager.add_notification(
                    Notification::new_error(
                        "generation_failed",
                        "Carousel generation failed",
                        reason,
                        "Generation",
                    )
                    .with_details("The previous result, if any, is still shown."),
                );
                true
            }
        }
    }

    fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let (generate, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Enter) && i.modifiers.command,
                i.key_pressed(egui::Key::Escape),
            )
        });

        if generate {
            self.start_generation();
        }
        if escape && self.help_window.open {
            self.help_window.open = false;
        }
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let action =
                    menu::build_menu(ui, ctx, &mut self.theme, &mut self.help_window.open);
                match action {
                    MenuAction::Generate => self.start_generation(),
                    MenuAction::ThemeChanged => {
                        info!("Theme changed to {}", self.theme);
                    }
                    MenuAction::Quit => {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    MenuAction::None => {}
                }
            });
        });
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.notification_manager.render_status_bar_indicator(ui);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(at) = self.last_generated_at {
                        ui.label(
                            egui::RichText::new(format!(
                                "Last generated {}",
                                at.format("%H:%M:%S")
                            ))
                            .size(11.0)
                            .weak(),
                        );
                    }
                });
            });
        });
    }

    fn render_form(&mut self, ui: &mut egui::Ui) {
        let response =
            form_panel::show(ui, &mut self.input, &mut self.show_examples, self.loading);
        if response.generate_clicked {
            self.start_generation();
        }
    }

    fn render_output(&mut self, ui: &mut egui::Ui, narrow: bool) {
        let action = output_panel::show(
            ui,
            self.result.as_ref(),
            self.loading,
            self.last_error.as_deref(),
            narrow,
            &mut self.active_tab,
            &mut self.copy_confirmations,
        );
        match action {
            OutputAction::Regenerate => self.start_generation(),
            OutputAction::EditInputs => self.show_output = false,
            OutputAction::None => {}
        }
    }

    fn render_main_panels(&mut self, ctx: &egui::Context) {
        let narrow = ctx.screen_rect().width() < NARROW_LAYOUT_WIDTH;

        if narrow {
            // One panel at a time, mirroring the form/output toggle
            if self.show_output {
                egui::CentralPanel::default().show(ctx, |ui| self.render_output(ui, true));
            } else {
                egui::CentralPanel::default().show(ctx, |ui| self.render_form(ui));
            }
        } else {
            egui::SidePanel::left("form_panel")
                .resizable(true)
                .default_width(380.0)
                .width_range(300.0..=520.0)
                .show(ctx, |ui| self.render_form(ui));
            egui::CentralPanel::default().show(ctx, |ui| self.render_output(ui, false));
        }
    }
}

impl eframe::App for PostdeckApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_generation();
        self.copy_confirmations.prune();
        self.handle_keyboard_input(ctx);

        self.render_menu_bar(ctx);
        self.render_status_bar(ctx);
        self.render_main_panels(ctx);

        self.help_window.show(ctx);
        NotificationDetailsWindow::show(&mut self.notification_manager, ctx);

        // Keep the frame loop alive while there is time-driven state to watch:
        // an in-flight generation or copy confirmations waiting to expire.
        if self.pending_generation.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else if !self.copy_confirmations.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
    }
}
