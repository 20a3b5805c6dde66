// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio viewer.

pub mod header;
pub mod images;
pub mod modal;
pub mod sections;

use crate::io::media;
use std::path::Path;

/// Text colors shared by the page components.
pub const TEXT_STRONG: egui::Color32 = egui::Color32::from_rgb(15, 23, 42);
pub const TEXT_BODY: egui::Color32 = egui::Color32::from_rgb(71, 85, 105);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);

/// Open an asset reference or external URL in the platform browser.
pub fn open_reference(ctx: &egui::Context, asset_root: &Path, reference: &str) {
    let url = media::resolve_asset(asset_root, reference).to_url();
    log::info!("Opening {}", url);
    ctx.open_url(egui::OpenUrl::new_tab(url));
}

/// Small rounded tag, used for skills and technologies.
pub fn chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(egui::Color32::from_rgb(241, 245, 249))
        .rounding(12.0)
        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).color(TEXT_BODY));
        });
}

/// Uppercase, letter-spaced caption above a title.
pub fn caption(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(11.0)
            .strong()
            .color(TEXT_MUTED),
    );
}

/// Rounded white card.
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::none()
        .fill(egui::Color32::WHITE)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .rounding(16.0)
        .inner_margin(egui::Margin::same(20.0))
        .show(ui, add_contents)
        .inner
}
