// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media asset resolution and image loading.
//!
//! Asset references in the catalog are opaque strings such as
//! `/polycrochet/screen-1.png`. This module resolves them against the
//! asset root and decodes images into RGBA pixels suitable for egui.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// A decoded RGBA8 image.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Where an asset reference points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLocation {
    /// Off-site resource, opened as-is.
    Url(String),
    /// File under the asset root.
    File(PathBuf),
}

impl AssetLocation {
    /// URL suitable for handing to the platform browser.
    pub fn to_url(&self) -> String {
        match self {
            AssetLocation::Url(url) => url.clone(),
            AssetLocation::File(path) => file_url(path),
        }
    }
}

/// `file://` URL for `path`, made absolute against the working directory.
fn file_url(path: &Path) -> String {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(e) => {
                log::warn!("Cannot resolve {} against working directory: {}", path.display(), e);
                path.to_path_buf()
            }
        }
    };

    match url::Url::from_file_path(&absolute) {
        Ok(url) => url.to_string(),
        Err(()) => {
            log::warn!("Not a valid file path for a URL: {}", absolute.display());
            format!("file://{}", absolute.display())
        }
    }
}

fn is_external(reference: &str) -> bool {
    ["http://", "https://", "mailto:"]
        .iter()
        .any(|scheme| reference.starts_with(scheme))
}

/// Resolve an asset reference against `root`.
pub fn resolve_asset(root: &Path, reference: &str) -> AssetLocation {
    if is_external(reference) {
        AssetLocation::Url(reference.to_string())
    } else {
        AssetLocation::File(root.join(reference.trim_start_matches('/')))
    }
}

/// Load an image file and convert it to RGBA8.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)
        .with_context(|| format!("Decoding {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();

    Ok(LoadedImage {
        width,
        height,
        pixels: img.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_local_reference() {
        let root = Path::new("/srv/public");
        assert_eq!(
            resolve_asset(root, "/polycrochet/logo.png"),
            AssetLocation::File(PathBuf::from("/srv/public/polycrochet/logo.png"))
        );
        assert_eq!(
            resolve_asset(root, "foto-perfil.jpg"),
            AssetLocation::File(PathBuf::from("/srv/public/foto-perfil.jpg"))
        );
    }

    #[test]
    fn test_resolve_external_reference() {
        let root = Path::new("/srv/public");
        let location = resolve_asset(root, "https://polycrochet.cl");
        assert_eq!(location, AssetLocation::Url("https://polycrochet.cl".to_string()));
        assert_eq!(location.to_url(), "https://polycrochet.cl");
    }

    #[cfg(unix)]
    #[test]
    fn test_file_url() {
        let location = AssetLocation::File(PathBuf::from("/srv/public/cv.pdf"));
        assert_eq!(location.to_url(), "file:///srv/public/cv.pdf");
    }

    #[cfg(unix)]
    #[test]
    fn test_file_url_escapes_spaces() {
        let location = AssetLocation::File(PathBuf::from("/srv/my docs/Certificado Scrum.pdf"));
        assert_eq!(location.to_url(), "file:///srv/my%20docs/Certificado%20Scrum.pdf");
    }

    #[cfg(windows)]
    #[test]
    fn test_file_url_windows_drive() {
        let location = AssetLocation::File(PathBuf::from(r"C:\site\public\cv.pdf"));
        assert_eq!(location.to_url(), "file:///C:/site/public/cv.pdf");
    }

    #[test]
    fn test_relative_file_url_is_absolute() {
        let url = AssetLocation::File(PathBuf::from("public").join("cv.pdf")).to_url();
        assert!(url.starts_with("file:///"), "{url}");
        assert!(url.ends_with("public/cv.pdf"), "{url}");
    }

    #[test]
    fn test_load_image_decodes_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (3, 2));
        assert_eq!(loaded.pixels.len(), 3 * 2 * 4);
        assert_eq!(&loaded.pixels[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_load_missing_image_fails() {
        assert!(load_image(Path::new("/definitely/not/here.png")).is_err());
    }
}
