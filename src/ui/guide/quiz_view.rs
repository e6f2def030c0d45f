use egui::{CornerRadius, Frame, Margin, RichText, Stroke};

use crate::quiz::Question;
use crate::ui::{
    PALETTE_BORDER, PALETTE_INK, PALETTE_PAPER, PALETTE_SLATE, card, pill, section_heading,
};

use super::GuideApp;

impl GuideApp {
    /// The interactive quiz: one row of option pills per question and the
    /// recommendation block below them.
    ///
    /// Every click overwrites exactly one answer slot and the recommendation
    /// is recomputed from the full answer set; the result block only renders
    /// once all four questions are answered.
    pub(crate) fn quiz_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Which Drive is Right for You? (Quiz)");
        card().show(ui, |ui| {
            ui.horizontal(|ui| {
                pill(ui, "Interactive");
                ui.label(
                    RichText::new("Answer a few quick questions and get a personalized recommendation.")
                        .color(PALETTE_SLATE),
                );
            });
            ui.add_space(10.0);

            for question in Question::ALL {
                ui.label(
                    RichText::new(question.to_string())
                        .strong()
                        .color(PALETTE_INK),
                );
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for choice in question.choices() {
                        let selected = self.quiz.is_selected(choice);
                        if ui.selectable_label(selected, choice.to_string()).clicked() {
                            self.quiz.select(choice);
                        }
                    }
                });
                ui.add_space(10.0);
            }

            if let Some(recommendation) = self.quiz.recommendation() {
                Frame::new()
                    .fill(PALETTE_PAPER)
                    .stroke(Stroke::new(1.0, PALETTE_BORDER))
                    .corner_radius(CornerRadius::same(8))
                    .inner_margin(Margin::same(12))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(recommendation.title)
                                .strong()
                                .size(15.0)
                                .color(PALETTE_INK),
                        );
                        ui.label(RichText::new(recommendation.description).color(PALETTE_SLATE));
                    });
                ui.add_space(8.0);
                if ui.button("Start over").clicked() {
                    self.quiz.clear();
                }
            }
        });
    }
}
