// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. It owns the content catalog, the project modal
//! state and the image cache, and applies the actions reported by the
//! UI components.

use crate::config::AppConfig;
use crate::models::{catalog::Catalog, catalog::Section, modal::ProjectModal};
use crate::ui::{header, images::ImageCache, modal, sections};
use std::path::PathBuf;

/// Main application state.
pub struct PortfolioApp {
    /// Content shown on the page
    catalog: Catalog,

    /// Project detail modal state
    modal: ProjectModal,

    /// Decoded images and their textures
    images: ImageCache,

    /// Section to bring into view on the next frame
    scroll_to: Option<Section>,

    /// Last status or error message for the status bar
    status: Option<String>,

    /// Asset root was set explicitly; loaded catalogs do not move it
    asset_root_overridden: bool,
}

impl PortfolioApp {
    /// Create the application, loading the configured catalog if any.
    pub fn new(config: AppConfig) -> Self {
        let mut app = Self::with_catalog(Catalog::builtin(), config.asset_root);
        app.asset_root_overridden = config.asset_root_overridden;
        if let Some(path) = config.catalog_path {
            app.load_catalog(path);
        }
        app
    }

    fn with_catalog(catalog: Catalog, asset_root: PathBuf) -> Self {
        Self {
            catalog,
            modal: ProjectModal::new(),
            images: ImageCache::new(asset_root),
            scroll_to: None,
            status: None,
            asset_root_overridden: false,
        }
    }

    /// Title for the native window.
    pub fn window_title(&self) -> String {
        format!("{} - Portafolio", self.catalog.profile.name)
    }

    /// Replace the catalog with the one stored at `path`.
    fn load_catalog(&mut self, path: PathBuf) {
        match crate::io::serialization::import(&path) {
            Ok(catalog) => {
                log::info!(
                    "Loaded catalog {} ({} projects)",
                    path.display(),
                    catalog.projects.len()
                );
                if !self.asset_root_overridden {
                    if let Some(dir) = crate::config::catalog_dir(&path) {
                        self.images.set_asset_root(dir);
                    }
                }
                self.catalog = catalog;
                self.modal.close();
                self.status = Some(format!("Catálogo cargado: {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to load catalog {}: {:#}", path.display(), e);
                self.status = Some(format!("Error al cargar el catálogo: {}", e));
            }
        }
    }

    /// Export the catalog to a file.
    fn export_catalog(&mut self, path: PathBuf) {
        match crate::io::serialization::export(&self.catalog, &path) {
            Ok(_) => {
                log::info!("Exported catalog to {}", path.display());
                self.status = Some(format!("Catálogo exportado: {}", path.display()));
            }
            Err(e) => {
                log::error!("Failed to export catalog: {:#}", e);
                self.status = Some(format!("Error al exportar: {}", e));
            }
        }
    }

    /// Apply a modal gesture to the view state.
    fn apply_modal_action(&mut self, action: modal::ModalAction) {
        match action {
            modal::ModalAction::Close => self.modal.close(),
            modal::ModalAction::Previous => self.modal.show_previous(),
            modal::ModalAction::Next => self.modal.show_next(),
            modal::ModalAction::GoTo(index) => self.modal.go_to(index),
            modal::ModalAction::None => {}
        }
    }

    /// Apply a page gesture.
    fn apply_page_action(&mut self, ctx: &egui::Context, action: sections::PageAction) {
        match action {
            sections::PageAction::OpenProject(id) => match self.catalog.project(&id) {
                Some(project) => self.modal.open(project),
                None => log::warn!("No project with id {}", id),
            },
            sections::PageAction::CopyToClipboard(text) => {
                ctx.output_mut(|o| o.copied_text = text.clone());
                self.status = Some(format!("Copiado: {}", text));
            }
            sections::PageAction::None => {}
        }
    }

    /// Keyboard shortcuts, only active while the modal is open.
    fn modal_shortcuts(&self, ctx: &egui::Context) -> modal::ModalAction {
        if !self.modal.is_open() {
            return modal::ModalAction::None;
        }
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Escape) {
                modal::ModalAction::Close
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                modal::ModalAction::Previous
            } else if i.key_pressed(egui::Key::ArrowRight) {
                modal::ModalAction::Next
            } else {
                modal::ModalAction::None
            }
        })
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Catalog...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Catalog", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.load_catalog(path);
                        }
                        ui.close_menu();
                    }
                    ui.menu_button("Export Catalog", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("catalog.yaml")
                                .save_file()
                            {
                                self.export_catalog(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("catalog.json")
                                .save_file()
                            {
                                self.export_catalog(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.images.poll(ctx);
        if self.images.is_loading() {
            ctx.request_repaint();
        }

        self.menu_bar(ctx);

        // Section navigation
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(section) = header::nav_bar(ui, &self.catalog.nav_items) {
                self.scroll_to = Some(section);
            }
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&self.catalog.profile.footer)
                        .size(12.0)
                        .color(crate::ui::TEXT_MUTED),
                );
                if let Some(ref status) = self.status {
                    ui.separator();
                    ui.label(egui::RichText::new(status).size(12.0).weak());
                }
            });
        });

        let scroll_to = self.scroll_to.take();
        let page_action = egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::from_rgb(248, 250, 252)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let width = ui.available_width().min(1000.0);
                        let margin = (ui.available_width() - width) / 2.0;
                        ui.horizontal(|ui| {
                            ui.add_space(margin);
                            ui.vertical(|ui| {
                                ui.set_width(width);
                                ui.add_space(24.0);
                                header::show(ui, &self.catalog, &mut self.images);
                                ui.add_space(24.0);
                                sections::show(ui, &self.catalog, &mut self.images, scroll_to)
                            })
                            .inner
                        })
                        .inner
                    })
                    .inner
            })
            .inner;
        self.apply_page_action(ctx, page_action);

        let modal_action = modal::show(ctx, &self.modal, &mut self.images);
        self.apply_modal_action(modal_action);

        let shortcut = self.modal_shortcuts(ctx);
        self.apply_modal_action(shortcut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::tests::sample_project;

    fn app() -> PortfolioApp {
        let mut catalog = Catalog::builtin();
        catalog.projects = vec![sample_project("x", Some(3)), sample_project("y", None)];
        PortfolioApp::with_catalog(catalog, PathBuf::from("public"))
    }

    #[test]
    fn test_open_project_from_card() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.apply_page_action(&ctx, sections::PageAction::OpenProject("x".into()));
        assert_eq!(app.modal.active_project().map(|p| p.id.as_str()), Some("x"));
        assert_eq!(app.modal.active_slide(), 0);
    }

    #[test]
    fn test_unknown_project_id_keeps_modal_closed() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.apply_page_action(&ctx, sections::PageAction::OpenProject("missing".into()));
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_modal_actions_drive_carousel() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.apply_page_action(&ctx, sections::PageAction::OpenProject("x".into()));

        app.apply_modal_action(modal::ModalAction::Previous);
        assert_eq!(app.modal.active_slide(), 2);
        app.apply_modal_action(modal::ModalAction::Next);
        assert_eq!(app.modal.active_slide(), 0);
        app.apply_modal_action(modal::ModalAction::GoTo(1));
        assert_eq!(app.modal.active_slide(), 1);
        app.apply_modal_action(modal::ModalAction::None);
        assert_eq!(app.modal.active_slide(), 1);

        app.apply_modal_action(modal::ModalAction::Close);
        assert!(!app.modal.is_open());
        assert_eq!(app.modal.active_slide(), 0);
    }

    #[test]
    fn test_missing_catalog_file_keeps_current_content() {
        let mut app = app();
        app.load_catalog(PathBuf::from("/no/such/catalog.yaml"));
        assert_eq!(app.catalog.projects.len(), 2);
        assert!(app.status.as_deref().unwrap_or_default().starts_with("Error"));
    }

    #[test]
    fn test_load_catalog_closes_modal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        crate::io::serialization::export(&Catalog::builtin(), &path).unwrap();

        let ctx = egui::Context::default();
        let mut app = app();
        app.apply_page_action(&ctx, sections::PageAction::OpenProject("x".into()));
        app.load_catalog(path);

        assert!(!app.modal.is_open());
        assert!(app.catalog.project("polycrochet").is_some());
    }

    #[test]
    fn test_loaded_catalog_moves_asset_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        crate::io::serialization::export(&Catalog::builtin(), &path).unwrap();

        let mut app = app();
        app.load_catalog(path);
        assert_eq!(app.images.asset_root(), dir.path());
    }

    #[test]
    fn test_overridden_asset_root_stays_put() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        crate::io::serialization::export(&Catalog::builtin(), &path).unwrap();

        let mut app = PortfolioApp::new(AppConfig {
            catalog_path: None,
            asset_root: PathBuf::from("/var/www"),
            asset_root_overridden: true,
        });
        app.load_catalog(path);
        assert!(app.catalog.project("polycrochet").is_some());
        assert_eq!(app.images.asset_root(), std::path::Path::new("/var/www"));
    }

    /// Run one frame with `key` pressed and return the shortcut action.
    fn press(app: &PortfolioApp, key: egui::Key) -> modal::ModalAction {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            events: vec![egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            ..Default::default()
        };
        let mut action = modal::ModalAction::None;
        let _ = ctx.run(input, |ctx| {
            action = app.modal_shortcuts(ctx);
        });
        action
    }

    #[test]
    fn test_shortcuts_while_modal_open() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.apply_page_action(&ctx, sections::PageAction::OpenProject("x".into()));

        assert_eq!(press(&app, egui::Key::Escape), modal::ModalAction::Close);
        assert_eq!(press(&app, egui::Key::ArrowLeft), modal::ModalAction::Previous);
        assert_eq!(press(&app, egui::Key::ArrowRight), modal::ModalAction::Next);
        assert_eq!(press(&app, egui::Key::Enter), modal::ModalAction::None);
    }

    #[test]
    fn test_shortcuts_ignored_while_closed() {
        let app = app();
        for key in [egui::Key::Escape, egui::Key::ArrowLeft, egui::Key::ArrowRight] {
            assert_eq!(press(&app, key), modal::ModalAction::None);
        }
    }

    #[test]
    fn test_escape_closes_and_arrows_navigate() {
        let ctx = egui::Context::default();
        let mut app = app();
        app.apply_page_action(&ctx, sections::PageAction::OpenProject("x".into()));

        let action = press(&app, egui::Key::ArrowLeft);
        app.apply_modal_action(action);
        assert_eq!(app.modal.active_slide(), 2);

        let action = press(&app, egui::Key::Escape);
        app.apply_modal_action(action);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn test_window_title_uses_profile_name() {
        assert_eq!(app().window_title(), "Alexis Rodríguez - Portafolio");
    }
}
