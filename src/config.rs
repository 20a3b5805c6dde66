// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Startup configuration.
//!
//! The catalog path comes from the positional argument or the
//! `PORTFOLIO_CATALOG` environment variable; without either the built-in
//! catalog is used. Assets are resolved from `--assets` /
//! `PORTFOLIO_ASSETS`, else the catalog's directory, else `./public`.

use clap::Parser;
use std::path::PathBuf;

pub const CATALOG_ENV: &str = "PORTFOLIO_CATALOG";
pub const ASSETS_ENV: &str = "PORTFOLIO_ASSETS";
const DEFAULT_ASSET_DIR: &str = "public";

/// Portfolio - personal portfolio viewer with a project gallery lightbox
#[derive(Parser, Debug)]
#[command(name = "portfolio", version, long_about = None)]
pub struct Cli {
    /// Catalog file (YAML or JSON) to show instead of the built-in content
    #[arg(env = CATALOG_ENV)]
    pub catalog: Option<PathBuf>,

    /// Directory asset references are resolved against
    #[arg(long, env = ASSETS_ENV)]
    pub assets: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog file to load at startup, if any.
    pub catalog_path: Option<PathBuf>,
    /// Directory asset references are resolved against.
    pub asset_root: PathBuf,
    /// The asset root was given explicitly and must not follow the catalog.
    pub asset_root_overridden: bool,
}

impl AppConfig {
    /// Parse the process arguments and environment. Exits on `--help`,
    /// `--version` or bad arguments.
    pub fn from_env() -> Self {
        Self::from_cli(Cli::parse())
    }

    /// Apply the asset root fallbacks to parsed arguments.
    pub fn from_cli(cli: Cli) -> Self {
        let asset_root_overridden = cli.assets.is_some();
        let asset_root = cli
            .assets
            .or_else(|| cli.catalog.as_deref().and_then(catalog_dir))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSET_DIR));

        Self {
            catalog_path: cli.catalog,
            asset_root,
            asset_root_overridden,
        }
    }
}

/// Directory holding a catalog file, if it has a non-empty parent.
pub fn catalog_dir(catalog: &std::path::Path) -> Option<PathBuf> {
    catalog
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.to_path_buf())
}
