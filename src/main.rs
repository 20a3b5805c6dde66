// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio - a single-page personal portfolio viewer
//!
//! A cross-platform desktop application presenting a biography, skills,
//! projects, certifications and contact details, with a lightbox modal
//! for browsing each project's image gallery.

mod app;
mod config;
mod io;
mod models;
mod ui;
mod util;

use app::PortfolioApp;
use anyhow::Result;
use config::AppConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::from_env();
    log::info!(
        "Starting with catalog {:?}, assets in {}",
        config.catalog_path,
        config.asset_root.display()
    );
    let app = PortfolioApp::new(config);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title(app.window_title()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Portfolio",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
