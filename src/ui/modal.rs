// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project detail modal with image carousel.
//!
//! Drawn over a dimmed backdrop while a project is open. The modal only
//! reads the view state; user gestures come back as a [`ModalAction`]
//! for the app to apply.

use super::images::{Fit, ImageCache};
use super::{caption, chip, open_reference, TEXT_BODY, TEXT_MUTED, TEXT_STRONG};
use crate::models::modal::ProjectModal;
use crate::models::project::{LinkDisplay, Project};

const MAX_WIDTH: f32 = 760.0;
const SLIDE_HEIGHT: f32 = 320.0;
const DOT_RADIUS: f32 = 5.0;

/// Result of modal interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    None,
    Close,
    Previous,
    Next,
    GoTo(usize),
}

/// Display the modal for the active project, if any.
pub fn show(ctx: &egui::Context, modal: &ProjectModal, images: &mut ImageCache) -> ModalAction {
    let Some(project) = modal.active_project() else {
        return ModalAction::None;
    };
    let mut action = ModalAction::None;
    let screen = ctx.screen_rect();

    // Backdrop: dims the page and closes the modal when clicked
    egui::Area::new(egui::Id::new("project_modal_backdrop"))
        .order(egui::Order::Middle)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let response = ui.allocate_rect(screen, egui::Sense::click());
            ui.painter().rect_filled(screen, 0.0, egui::Color32::from_black_alpha(150));
            if response.clicked() {
                action = ModalAction::Close;
            }
        });

    let width = (screen.width() - 32.0).min(MAX_WIDTH);
    egui::Area::new(egui::Id::new("project_modal").with(&project.id))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            egui::Frame::window(ui.style())
                .fill(egui::Color32::WHITE)
                .rounding(24.0)
                .inner_margin(egui::Margin::same(28.0))
                .show(ui, |ui| {
                    ui.set_width(width);
                    egui::ScrollArea::vertical()
                        .max_height(screen.height() - 96.0)
                        .show(ui, |ui| {
                            let dialog_action = contents(ui, modal, project, images);
                            if dialog_action != ModalAction::None {
                                action = dialog_action;
                            }
                        });
                });
        });

    action
}

fn contents(
    ui: &mut egui::Ui,
    modal: &ProjectModal,
    project: &Project,
    images: &mut ImageCache,
) -> ModalAction {
    let mut action = ModalAction::None;

    ui.horizontal(|ui| {
        caption(ui, &project.timeframe);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("✕").on_hover_text("Cerrar detalles del proyecto").clicked() {
                action = ModalAction::Close;
            }
        });
    });
    ui.label(egui::RichText::new(&project.title).size(22.0).strong().color(TEXT_STRONG));
    ui.add_space(8.0);

    ui.horizontal_wrapped(|ui| {
        for tech in &project.technologies {
            chip(ui, tech);
        }
    });

    if !project.gallery().is_empty() {
        ui.add_space(16.0);
        let carousel_action = carousel(ui, modal, project, images);
        if carousel_action != ModalAction::None {
            action = carousel_action;
        }
    }

    ui.add_space(16.0);
    for paragraph in &project.description {
        ui.label(egui::RichText::new(paragraph).size(14.0).color(TEXT_BODY));
        ui.add_space(6.0);
    }

    ui.add_space(12.0);
    match project.link_display() {
        LinkDisplay::Hyperlink { href, label } => {
            ui.horizontal(|ui| {
                caption(ui, "Link sitio");
                if ui.link(egui::RichText::new(label).strong()).clicked() {
                    open_reference(ui.ctx(), images.asset_root(), href);
                }
            });
        }
        LinkDisplay::Note(text) => {
            ui.label(egui::RichText::new(text).italics().color(TEXT_MUTED));
        }
    }

    action
}

fn carousel(
    ui: &mut egui::Ui,
    modal: &ProjectModal,
    project: &Project,
    images: &mut ImageCache,
) -> ModalAction {
    let mut action = ModalAction::None;
    let gallery = project.gallery();
    let slide = modal.active_slide();

    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, SLIDE_HEIGHT), egui::Sense::hover());
    if let Some(image) = modal.current_image() {
        images.paint(ui, rect, image, Fit::Contain, 16.0);
    }

    if !project.has_carousel_controls() {
        return action;
    }

    let button_size = egui::vec2(36.0, 36.0);
    let prev_rect = egui::Rect::from_center_size(
        egui::pos2(rect.left() + 28.0, rect.center().y),
        button_size,
    );
    let next_rect = egui::Rect::from_center_size(
        egui::pos2(rect.right() - 28.0, rect.center().y),
        button_size,
    );

    if ui
        .put(prev_rect, egui::Button::new("<").rounding(18.0))
        .on_hover_text("Ver imagen anterior")
        .clicked()
    {
        action = ModalAction::Previous;
    }
    if ui
        .put(next_rect, egui::Button::new(">").rounding(18.0))
        .on_hover_text("Ver imagen siguiente")
        .clicked()
    {
        action = ModalAction::Next;
    }

    // Slide indicators
    ui.add_space(10.0);
    let spacing = DOT_RADIUS * 3.0;
    let dots_width = spacing * gallery.len() as f32;
    let (dots_rect, _) = ui.allocate_exact_size(egui::vec2(width, DOT_RADIUS * 2.0 + 4.0), egui::Sense::hover());
    let start_x = dots_rect.center().x - dots_width / 2.0 + spacing / 2.0;

    for index in 0..gallery.len() {
        let center = egui::pos2(start_x + spacing * index as f32, dots_rect.center().y);
        let hit = egui::Rect::from_center_size(center, egui::vec2(spacing, spacing));
        let response = ui
            .interact(hit, ui.id().with(("slide_dot", index)), egui::Sense::click())
            .on_hover_text(format!("Ver imagen {}", index + 1));

        let color = if index == slide {
            TEXT_STRONG
        } else {
            egui::Color32::from_rgb(226, 232, 240)
        };
        ui.painter().circle_filled(center, DOT_RADIUS, color);

        if response.clicked() {
            action = ModalAction::GoTo(index);
        }
    }

    action
}
