// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Texture cache for catalog images.
//!
//! Images are decoded on background threads and uploaded to egui on the
//! UI thread once ready. Each asset reference is loaded at most once.

use crate::io::media::{self, AssetLocation, LoadedImage};
use crate::util::geometry;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Load state of a single asset.
enum ImageState {
    Loading,
    Ready {
        texture: egui::TextureHandle,
        size: (u32, u32),
    },
    Failed,
}

/// How an image should fill its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Letterbox inside the slot.
    Contain,
    /// Crop to fill the slot.
    Cover,
}

/// Decode result tagged with the cache generation that requested it.
type LoadResult = (u64, String, Result<LoadedImage, String>);

pub struct ImageCache {
    asset_root: PathBuf,
    /// Bumped whenever the asset root changes; older results are dropped.
    generation: u64,
    images: HashMap<String, ImageState>,
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl ImageCache {
    pub fn new(asset_root: PathBuf) -> Self {
        let (sender, receiver) = channel();
        Self {
            asset_root,
            generation: 0,
            images: HashMap::new(),
            sender,
            receiver,
        }
    }

    /// Point the cache at a new asset root, dropping everything loaded so far.
    pub fn set_asset_root(&mut self, asset_root: PathBuf) {
        self.asset_root = asset_root;
        self.generation += 1;
        self.images.clear();
    }

    pub fn asset_root(&self) -> &std::path::Path {
        &self.asset_root
    }

    /// True while any image is still decoding.
    pub fn is_loading(&self) -> bool {
        self.images.values().any(|s| matches!(s, ImageState::Loading))
    }

    /// Upload finished decodes as textures.
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok((generation, reference, result)) = self.receiver.try_recv() {
            if generation != self.generation {
                log::debug!("Dropping stale image {} from a previous asset root", reference);
                continue;
            }
            let state = match result {
                Ok(loaded) => {
                    let size = [loaded.width as usize, loaded.height as usize];
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
                    let texture = ctx.load_texture(
                        reference.clone(),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    log::info!("Loaded image {} ({}x{})", reference, loaded.width, loaded.height);
                    ImageState::Ready {
                        texture,
                        size: (loaded.width, loaded.height),
                    }
                }
                Err(e) => {
                    log::warn!("Failed to load image {}: {}", reference, e);
                    ImageState::Failed
                }
            };
            self.images.insert(reference, state);
        }
    }

    /// Start decoding `reference` unless it is already known.
    fn request(&mut self, reference: &str) {
        if self.images.contains_key(reference) {
            return;
        }

        let path = match media::resolve_asset(&self.asset_root, reference) {
            AssetLocation::File(path) => path,
            AssetLocation::Url(url) => {
                log::warn!("Remote images are not fetched: {}", url);
                self.images.insert(reference.to_string(), ImageState::Failed);
                return;
            }
        };

        self.images.insert(reference.to_string(), ImageState::Loading);
        let sender = self.sender.clone();
        let generation = self.generation;
        let reference = reference.to_string();

        std::thread::spawn(move || {
            let result = media::load_image(&path).map_err(|e| format!("{:#}", e));
            let _ = sender.send((generation, reference, result));
        });
    }

    /// Paint `image_ref` into `rect`. Missing or loading images get a
    /// placeholder with the accessible description.
    pub fn paint(
        &mut self,
        ui: &egui::Ui,
        rect: egui::Rect,
        image_ref: &crate::models::project::ImageRef,
        fit: Fit,
        rounding: f32,
    ) {
        self.request(&image_ref.src);
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, rounding, egui::Color32::from_gray(245));

        match self.images.get(&image_ref.src) {
            Some(ImageState::Ready { texture, size }) => match fit {
                Fit::Contain => {
                    let target = geometry::contain_rect(*size, rect);
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(texture.id(), target, uv, egui::Color32::WHITE);
                }
                Fit::Cover => {
                    let uv = geometry::cover_uv(*size, rect.size());
                    painter.image(texture.id(), rect, uv, egui::Color32::WHITE);
                }
            },
            Some(ImageState::Loading) => {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "…",
                    egui::FontId::proportional(18.0),
                    egui::Color32::from_gray(150),
                );
            }
            Some(ImageState::Failed) | None => {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    &image_ref.alt,
                    egui::FontId::proportional(13.0),
                    egui::Color32::from_gray(130),
                );
            }
        }
    }
}
