// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Profile header and section navigation bar.
//!
//! The header shows the profile photo, name, headline and the action link
//! buttons. The navigation bar lists the page sections and reports which
//! one was clicked so the page can scroll to it.

use super::images::{Fit, ImageCache};
use super::{open_reference, TEXT_BODY, TEXT_STRONG};
use crate::models::catalog::{ActionLink, ActionVariant, Catalog, NavItem, Section};

const PHOTO_SIZE: f32 = 144.0;

/// Display the profile header.
pub fn show(ui: &mut egui::Ui, catalog: &Catalog, images: &mut ImageCache) {
    let profile = &catalog.profile;

    super::card(ui, |ui| {
        ui.vertical_centered(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(PHOTO_SIZE, PHOTO_SIZE), egui::Sense::hover());
            images.paint(ui, rect, &profile.photo, Fit::Cover, PHOTO_SIZE / 2.0);

            ui.add_space(12.0);
            ui.label(egui::RichText::new(&profile.name).size(40.0).strong().color(TEXT_STRONG));
            ui.label(egui::RichText::new(&profile.headline).size(22.0).color(TEXT_BODY));
            ui.add_space(12.0);
            ui.label(egui::RichText::new(&profile.intro).size(15.0).color(TEXT_BODY));
            ui.add_space(16.0);

            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing.x = 12.0;
                for link in &catalog.action_links {
                    action_button(ui, link, images.asset_root());
                }
            });
        });
    });
}

fn action_button(ui: &mut egui::Ui, link: &ActionLink, asset_root: &std::path::Path) {
    let (fill, stroke) = match link.variant {
        ActionVariant::Primary => (TEXT_STRONG, egui::Stroke::NONE),
        ActionVariant::Secondary => (
            egui::Color32::TRANSPARENT,
            egui::Stroke::new(1.0, egui::Color32::from_rgb(203, 213, 225)),
        ),
        ActionVariant::Ghost => (egui::Color32::from_white_alpha(200), egui::Stroke::NONE),
    };
    let text_color = match link.variant {
        ActionVariant::Primary => egui::Color32::WHITE,
        _ => TEXT_STRONG,
    };

    let button = egui::Button::new(egui::RichText::new(&link.label).strong().color(text_color))
        .fill(fill)
        .stroke(stroke)
        .rounding(20.0)
        .min_size(egui::vec2(150.0, 40.0));

    if ui.add(button).on_hover_text(link.icon.alt.as_str()).clicked() {
        open_reference(ui.ctx(), asset_root, &link.href);
    }
}

/// Display the navigation bar. Returns the section the user asked for.
pub fn nav_bar(ui: &mut egui::Ui, items: &[NavItem]) -> Option<Section> {
    let mut target = None;

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        for item in items {
            if ui.selectable_label(false, item.label.as_str()).clicked() {
                target = Some(item.target);
            }
        }
    });

    target
}
