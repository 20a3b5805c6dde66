// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Page sections: biography, skills, projects, certifications, contact.

use super::images::{Fit, ImageCache};
use super::{caption, card, chip, open_reference, TEXT_BODY, TEXT_MUTED, TEXT_STRONG};
use crate::models::catalog::{Catalog, Certification, ContactChannel, Section};
use crate::models::project::Project;
use std::path::Path;

const COVER_HEIGHT: f32 = 220.0;
const CARD_MIN_WIDTH: f32 = 360.0;

/// Result of interacting with the page sections.
pub enum PageAction {
    None,
    OpenProject(String),
    CopyToClipboard(String),
}

/// Display every section in order. `scroll_to` brings the matching
/// section title into view.
pub fn show(
    ui: &mut egui::Ui,
    catalog: &Catalog,
    images: &mut ImageCache,
    scroll_to: Option<Section>,
) -> PageAction {
    let mut action = PageAction::None;

    for section in Section::ALL {
        ui.push_id(section.anchor(), |ui| card(ui, |ui| {
            ui.set_width(ui.available_width());
            let title = ui.label(
                egui::RichText::new(section.title())
                    .size(24.0)
                    .strong()
                    .color(TEXT_STRONG),
            );
            if scroll_to == Some(section) {
                title.scroll_to_me(Some(egui::Align::TOP));
            }
            ui.add_space(12.0);

            let section_action = match section {
                Section::About => {
                    about(ui, &catalog.profile.biography);
                    PageAction::None
                }
                Section::Skills => {
                    skills(ui, &catalog.skills);
                    PageAction::None
                }
                Section::Projects => projects(ui, &catalog.projects, images),
                Section::Certifications => {
                    certifications(ui, &catalog.certifications, images.asset_root());
                    PageAction::None
                }
                Section::Contact => contacts(ui, &catalog.contacts, images.asset_root()),
            };
            if !matches!(section_action, PageAction::None) {
                action = section_action;
            }
        }));
        ui.add_space(24.0);
    }

    action
}

fn about(ui: &mut egui::Ui, biography: &[String]) {
    for paragraph in biography {
        ui.label(egui::RichText::new(paragraph).size(15.0).color(TEXT_BODY));
        ui.add_space(8.0);
    }
}

fn skills(ui: &mut egui::Ui, skills: &[String]) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
        for skill in skills {
            chip(ui, skill);
        }
    });
}

fn projects(ui: &mut egui::Ui, projects: &[Project], images: &mut ImageCache) -> PageAction {
    let mut action = PageAction::None;

    let columns = if ui.available_width() >= CARD_MIN_WIDTH * 2.0 { 2 } else { 1 };
    ui.columns(columns, |cols| {
        for (idx, project) in projects.iter().enumerate() {
            let ui = &mut cols[idx % columns];
            if project_card(ui, project, images) {
                action = PageAction::OpenProject(project.id.clone());
            }
            ui.add_space(16.0);
        }
    });

    action
}

/// Returns true when "Ver detalles" was clicked.
fn project_card(ui: &mut egui::Ui, project: &Project, images: &mut ImageCache) -> bool {
    card(ui, |ui| {
        let width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, COVER_HEIGHT), egui::Sense::hover());
        images.paint(ui, rect, &project.image, Fit::Cover, 12.0);

        ui.add_space(12.0);
        caption(ui, &project.timeframe);
        ui.label(egui::RichText::new(&project.title).size(18.0).strong().color(TEXT_STRONG));
        ui.label(egui::RichText::new(&project.summary).size(13.0).color(TEXT_BODY));
        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for tech in &project.technologies {
                chip(ui, tech);
            }
        });
        ui.add_space(8.0);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(egui::Button::new("Ver detalles").rounding(16.0))
                .on_hover_text(format!("Ver detalles de {}", project.title))
                .clicked()
        })
        .inner
    })
}

fn certifications(ui: &mut egui::Ui, certifications: &[Certification], asset_root: &Path) {
    for cert in certifications {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&cert.name).size(15.0).strong().color(TEXT_STRONG));
                ui.label(egui::RichText::new(&cert.issuer).size(13.0).color(TEXT_MUTED));
            });
            if let Some(href) = &cert.download_href {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("⬇ Descargar").clicked() {
                        open_reference(ui.ctx(), asset_root, href);
                    }
                });
            }
        });
        ui.separator();
    }
}

fn contacts(ui: &mut egui::Ui, channels: &[ContactChannel], asset_root: &Path) -> PageAction {
    let mut action = PageAction::None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
        for channel in channels {
            card(ui, |ui| {
                caption(ui, &channel.label);
                match &channel.href {
                    Some(href) => {
                        if ui.link(egui::RichText::new(&channel.value).size(15.0)).clicked() {
                            open_reference(ui.ctx(), asset_root, href);
                        }
                    }
                    None => {
                        ui.label(egui::RichText::new(&channel.value).size(15.0).color(TEXT_STRONG));
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new("Copia y pega el correo para contactarme.")
                                    .size(11.0)
                                    .color(TEXT_MUTED),
                            );
                            if ui.small_button("📋").on_hover_text("Copiar").clicked() {
                                action = PageAction::CopyToClipboard(channel.value.clone());
                            }
                        });
                    }
                }
            });
        }
    });

    action
}
