pub mod config;
mod content_view;
mod quiz_view;

use config::AppConfig;
use egui::{Align, Color32, RichText, ScrollArea, Visuals, style::Widgets};
use log::error;

use crate::content::Section;
use crate::quiz::QuizSession;

use super::{PALETTE_BORDER, PALETTE_INK, PALETTE_PAPER, PALETTE_SKY};

const PAGE_MAX_WIDTH: f32 = 960.;

/// `GuideApp` renders the buying guide as one scrollable page: a navigation
/// bar on top, the content sections below, and the quiz embedded among them.
///
/// The quiz session lives exactly as long as this window; closing the app
/// discards the answers.
pub struct GuideApp {
    app_config: AppConfig,
    quiz: QuizSession,
    pending_scroll: Option<Section>,
}

impl GuideApp {
    pub fn new(
        app_config: AppConfig,
        start_section: Option<Section>,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let default_visuals = Visuals {
            dark_mode: false,
            override_text_color: Some(PALETTE_INK),
            hyperlink_color: PALETTE_SKY,
            faint_bg_color: PALETTE_PAPER,
            extreme_bg_color: PALETTE_BORDER,
            panel_fill: Color32::WHITE,
            window_fill: Color32::WHITE,
            widgets: Widgets::light(),
            striped: true,
            ..Default::default()
        };
        cc.egui_ctx.set_visuals(default_visuals);

        Self {
            app_config,
            quiz: QuizSession::new(),
            pending_scroll: start_section,
        }
    }

    fn nav_bar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.);
        ui.horizontal_wrapped(|ui| {
            ui.label(
                RichText::new("Drive Knowledge Hub")
                    .strong()
                    .color(PALETTE_INK),
            );
            ui.separator();
            for section in Section::ALL {
                if let Some(label) = section.nav_label() {
                    if ui.link(label).clicked() {
                        self.pending_scroll = Some(section);
                    }
                }
            }
        });
        ui.add_space(4.);
    }

    fn render_section(&mut self, ui: &mut egui::Ui, section: Section) {
        match section {
            Section::Intro => self.intro_section(ui),
            Section::Glance => self.glance_section(ui),
            Section::Why => self.why_section(ui),
            Section::Definitions => self.definitions_section(ui),
            Section::Comparison => self.comparison_section(ui),
            Section::CapacityCost => self.capacity_cost_section(ui),
            Section::Reliability => self.reliability_section(ui),
            Section::DataRecovery => self.data_recovery_section(ui),
            Section::Durability => self.durability_section(ui),
            Section::Quiz => self.quiz_section(ui),
            Section::Laptop => self.laptop_section(ui),
            Section::ProsCons => self.pros_cons_section(ui),
            Section::UseCases => self.use_cases_section(ui),
            Section::Brand => self.brand_section(ui),
            Section::CapacityInfographic => self.capacity_infographic_section(ui),
            Section::Conclusion => self.conclusion_section(ui),
            Section::Faqs => self.faqs_section(ui),
            Section::References => self.references_section(ui),
            Section::LearnMore => self.learn_more_section(ui),
        }
    }
}

impl eframe::App for GuideApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // remember window placement for the next launch
        ctx.input(|is| {
            if let Some(outer_rect) = is.viewport().outer_rect {
                self.app_config.window_position = Some(outer_rect.min.into());
            }
            if let Some(inner_rect) = is.viewport().inner_rect {
                self.app_config.window_width = inner_rect.width();
                self.app_config.window_height = inner_rect.height();
            }
        });

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            self.nav_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .id_salt("guide_scroll")
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    let page_width = ui.available_width().min(PAGE_MAX_WIDTH);
                    let margin = (ui.available_width() - page_width).max(0.) / 2.;
                    ui.horizontal(|ui| {
                        ui.add_space(margin);
                        ui.vertical(|ui| {
                            ui.set_width(page_width);
                            for section in Section::ALL {
                                let response =
                                    ui.scope(|ui| self.render_section(ui, section)).response;
                                if self.pending_scroll == Some(section) {
                                    response.scroll_to_me(Some(Align::TOP));
                                    self.pending_scroll = None;
                                }
                            }
                            ui.add_space(24.);
                        });
                    });
                });
        });
    }
}
