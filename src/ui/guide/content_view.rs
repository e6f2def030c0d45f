use egui::{CollapsingHeader, CornerRadius, RichText, Sense, pos2, vec2};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Line, PlotPoints};

use crate::content::{
    self, COMPARISON_ROWS, COST_CURVE, ComparisonRow, GLANCE_ROWS, GLANCE_STATS, Section,
};
use crate::ui::{
    PALETTE_BORDER, PALETTE_EMERALD, PALETTE_INK, PALETTE_PAPER, PALETTE_SKY, PALETTE_SLATE,
    bullet, card, pill, section_heading,
};

use super::GuideApp;

impl GuideApp {
    pub(crate) fn intro_section(&mut self, ui: &mut egui::Ui) {
        ui.add_space(10.);
        ui.label(RichText::new("Updated: August 2025").color(PALETTE_SLATE));
        ui.add_space(4.);
        ui.heading(
            RichText::new(content::PAGE_TITLE)
                .color(PALETTE_INK)
                .size(34.0)
                .strong(),
        );
        ui.add_space(8.);
        ui.label(RichText::new(content::PAGE_INTRO).size(15.0));
        ui.add_space(8.);
        pill(ui, content::PAGE_TAGLINE);
    }

    pub(crate) fn glance_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "SSD vs HDD at a glance");
        ui.label(RichText::new("A quick side-by-side to steer your decision.").color(PALETTE_SLATE));
        ui.add_space(8.);
        card().show(ui, |ui| {
            comparison_table(ui, Section::Glance.anchor(), &GLANCE_ROWS);
        });
        ui.add_space(10.);
        ui.columns(GLANCE_STATS.len(), |columns| {
            for (column, (label, figure)) in columns.iter_mut().zip(GLANCE_STATS) {
                card().show(column, |ui| {
                    ui.label(RichText::new(label.to_uppercase()).size(11.0).color(PALETTE_SLATE));
                    ui.label(RichText::new(figure).strong().size(17.0).color(PALETTE_INK));
                });
            }
        });
    }

    pub(crate) fn why_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Why Choosing the Right Storage Matters");
        for (lead, text) in content::WHY_BULLETS {
            bullet(ui, lead, text);
        }
    }

    pub(crate) fn definitions_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "What is an HDD (Hard Disk Drive)?");
        ui.label(content::HDD_DEFINITION);
        drive_art(ui, "The workhorse for massive, affordable capacity");

        section_heading(ui, "What is an SSD (Solid State Drive)?");
        ui.label(content::SSD_DEFINITION);
        drive_art(ui, "Solid-state speed for OS and apps");
    }

    pub(crate) fn comparison_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "SSD vs HDD Comparison");
        ui.label(
            RichText::new("Different tools for different jobs. Here's how to think about the trade-offs.")
                .color(PALETTE_SLATE),
        );
        ui.add_space(8.);
        card().show(ui, |ui| {
            comparison_table(ui, Section::Comparison.anchor(), &COMPARISON_ROWS);
        });
    }

    pub(crate) fn capacity_cost_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Capacity & Cost-Per-Gigabyte");
        ui.label(
            "For mass storage at 4TB, 8TB, 16TB and beyond, HDDs offer outstanding value per \
             gigabyte. SSDs deliver speed, but cost scales faster at high capacities.",
        );
        ui.add_space(6.);
        for (lead, text) in content::CAPACITY_COST_BULLETS {
            bullet(ui, lead, text);
        }
        ui.add_space(10.);
        card().show(ui, |ui| {
            cost_chart(ui);
            ui.label(
                RichText::new("Illustrative only; pricing varies by model, region, and capacity point.")
                    .size(12.0)
                    .color(PALETTE_SLATE),
            );
        });
    }

    pub(crate) fn reliability_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Lifespan & Reliability");
        for (lead, text) in content::RELIABILITY_BULLETS {
            bullet(ui, lead, text);
        }
    }

    pub(crate) fn data_recovery_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Data Recovery");
        for (lead, text) in content::DATA_RECOVERY_BULLETS {
            bullet(ui, lead, text);
        }
    }

    pub(crate) fn durability_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Durability & Shock");
        for (lead, text) in content::DURABILITY_BULLETS {
            bullet(ui, lead, text);
        }
    }

    pub(crate) fn laptop_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Laptop HDD vs SSD");
        ui.label(
            RichText::new("Which is better for laptops?")
                .strong()
                .size(16.0)
                .color(PALETTE_INK),
        );
        ui.add_space(4.);
        ui.label(content::LAPTOP_GUIDANCE);
    }

    pub(crate) fn pros_cons_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "SSD vs HDD Pros and Cons");
        ui.columns(2, |columns| {
            for (column, pros_cons) in columns
                .iter_mut()
                .zip([content::SSD_PROS_CONS, content::HDD_PROS_CONS])
            {
                card().show(column, |ui| {
                    ui.label(
                        RichText::new(pros_cons.name)
                            .strong()
                            .size(16.0)
                            .color(PALETTE_INK),
                    );
                    ui.add_space(4.);
                    for pro in pros_cons.pros {
                        bullet(ui, "", pro);
                    }
                    ui.separator();
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new("Trade-offs:").strong().color(PALETTE_INK));
                        ui.label(RichText::new(pros_cons.trade_offs).color(PALETTE_SLATE));
                    });
                });
            }
        });
    }

    pub(crate) fn use_cases_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Which is Better? Matching the Drive to Your Needs");
        for use_case in content::USE_CASES {
            ui.add_space(8.);
            ui.label(
                RichText::new(use_case.title)
                    .strong()
                    .size(18.0)
                    .color(PALETTE_INK),
            );
            ui.label(RichText::new(use_case.summary).color(PALETTE_SLATE));
            ui.add_space(4.);
            for &(lead, text) in use_case.bullets {
                bullet(ui, lead, text);
            }
        }
    }

    pub(crate) fn brand_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Why Trust Established Drive Makers?");
        ui.columns(content::TRUST_POINTS.len(), |columns| {
            for (column, trust) in columns.iter_mut().zip(content::TRUST_POINTS) {
                card().show(column, |ui| {
                    ui.label(RichText::new(trust.title).strong().color(PALETTE_INK));
                    ui.label(RichText::new(trust.blurb).size(12.0).color(PALETTE_SLATE));
                });
            }
        });
    }

    pub(crate) fn capacity_infographic_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "How Much Can You Store on HDDs");
        card().show(ui, |ui| {
            ui.label("What does an 18TB drive hold?");
            ui.add_space(6.);
            ui.columns(content::CAPACITY_STATS.len(), |columns| {
                for (column, (figure, caption)) in
                    columns.iter_mut().zip(content::CAPACITY_STATS)
                {
                    card().show(column, |ui| {
                        ui.label(
                            RichText::new(figure)
                                .strong()
                                .size(22.0)
                                .color(PALETTE_INK),
                        );
                        ui.label(RichText::new(caption).size(12.0).color(PALETTE_SLATE));
                    });
                }
            });
            ui.add_space(4.);
            ui.label(
                RichText::new(
                    "Illustrative only; sizes vary by title, codec, resolution, and format.",
                )
                .size(12.0)
                .color(PALETTE_SLATE),
            );
        });
    }

    pub(crate) fn conclusion_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Conclusion: Build Your Storage Foundation Wisely");
        ui.label(content::CONCLUSION);
    }

    pub(crate) fn faqs_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "FAQs");
        for faq in content::FAQS {
            CollapsingHeader::new(RichText::new(faq.question).strong().color(PALETTE_INK))
                .show(ui, |ui| {
                    ui.label(faq.answer);
                });
        }
    }

    pub(crate) fn references_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "References & Methodology");
        ui.label(content::METHODOLOGY);
        ui.add_space(4.);
        for note in content::METHODOLOGY_NOTES {
            bullet(ui, "", note);
        }
        ui.add_space(4.);
        ui.label(RichText::new(content::DISCLAIMER).size(12.0).color(PALETTE_SLATE));
    }

    pub(crate) fn learn_more_section(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Learn more about storage solutions");
        for (label, url) in content::LEARN_MORE_LINKS {
            ui.hyperlink_to(label, url);
        }
    }
}

/// Three-column factor/SSD/HDD table.
fn comparison_table(ui: &mut egui::Ui, id: &str, rows: &[ComparisonRow]) {
    ui.push_id(id, |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::auto().at_least(160.0))
            .column(Column::remainder())
            .column(Column::remainder())
            .header(24.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Factor");
                });
                header.col(|ui| {
                    ui.strong("SSD");
                });
                header.col(|ui| {
                    ui.strong("HDD");
                });
            })
            .body(|mut body| {
                for row in rows {
                    body.row(22.0, |mut table_row| {
                        table_row.col(|ui| {
                            ui.label(row.factor);
                        });
                        table_row.col(|ui| {
                            ui.label(cell_text(row.ssd));
                        });
                        table_row.col(|ui| {
                            ui.label(cell_text(row.hdd));
                        });
                    });
                }
            });
    });
}

/// Cells that name a winner get the accent color.
fn cell_text(text: &str) -> RichText {
    if text.starts_with("Winner") {
        RichText::new(text).strong().color(PALETTE_EMERALD)
    } else {
        RichText::new(text)
    }
}

/// Relative cost per capacity point, one line per drive family.
fn cost_chart(ui: &mut egui::Ui) {
    let mut ssd_vec = Vec::<[f64; 2]>::new();
    let mut hdd_vec = Vec::<[f64; 2]>::new();
    for point in COST_CURVE {
        ssd_vec.push([point.capacity_tb, point.ssd_relative]);
        hdd_vec.push([point.capacity_tb, point.hdd_relative]);
    }

    let ssd_points = PlotPoints::new(ssd_vec);
    let hdd_points = PlotPoints::new(hdd_vec);

    egui_plot::Plot::new("cost-curve")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .include_x(0.)
        .include_x(18.)
        .include_y(0.)
        .include_y(100.)
        .height(220.0)
        .show_grid(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("SSD (relative cost)", ssd_points)
                    .color(PALETTE_SKY),
            );
            plot_ui.line(
                Line::new("HDD (relative cost)", hdd_points)
                    .color(PALETTE_EMERALD),
            );
        });
}

/// Placeholder illustration where product imagery would go: a simple
/// circle-and-slab motif on a tinted panel.
fn drive_art(ui: &mut egui::Ui, caption: &str) {
    ui.add_space(6.);
    let width = ui.available_width().min(420.0);
    let (rect, _) = ui.allocate_exact_size(vec2(width, 110.0), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, CornerRadius::same(10), PALETTE_PAPER);
    painter.circle_filled(
        pos2(rect.left() + rect.width() * 0.28, rect.center().y),
        34.0,
        PALETTE_BORDER,
    );
    painter.rect_filled(
        egui::Rect::from_center_size(
            pos2(rect.left() + rect.width() * 0.68, rect.center().y),
            vec2(rect.width() * 0.36, 56.0),
        ),
        CornerRadius::same(6),
        PALETTE_BORDER,
    );
    if !caption.is_empty() {
        ui.label(RichText::new(caption).size(12.0).color(PALETTE_SLATE));
    }
    ui.add_space(6.);
}
