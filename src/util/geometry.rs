// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Image fitting helpers.
//!
//! Utilities for placing an image of a given pixel size inside a screen
//! area, either letterboxed (contain) or cropped to fill (cover).

use egui::{pos2, vec2, Rect, Vec2};

/// Largest rect with the image's aspect ratio that fits centered in `area`.
pub fn contain_rect(image_size: (u32, u32), area: Rect) -> Rect {
    let (img_width, img_height) = image_size;
    if img_width == 0 || img_height == 0 || area.width() <= 0.0 || area.height() <= 0.0 {
        return area;
    }

    let img_aspect = img_width as f32 / img_height as f32;
    let area_aspect = area.width() / area.height();

    let size = if img_aspect > area_aspect {
        // Wider than the area - fit to width
        vec2(area.width(), area.width() / img_aspect)
    } else {
        vec2(area.height() * img_aspect, area.height())
    };

    Rect::from_center_size(area.center(), size)
}

/// UV rect that crops the image so it fills `area` without distortion.
pub fn cover_uv(image_size: (u32, u32), area: Vec2) -> Rect {
    let full = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    let (img_width, img_height) = image_size;
    if img_width == 0 || img_height == 0 || area.x <= 0.0 || area.y <= 0.0 {
        return full;
    }

    let img_aspect = img_width as f32 / img_height as f32;
    let area_aspect = area.x / area.y;

    if img_aspect > area_aspect {
        // Crop left and right
        let visible = area_aspect / img_aspect;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(margin, 0.0), pos2(1.0 - margin, 1.0))
    } else {
        let visible = img_aspect / area_aspect;
        let margin = (1.0 - visible) / 2.0;
        Rect::from_min_max(pos2(0.0, margin), pos2(1.0, 1.0 - margin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.0001
    }

    #[test]
    fn test_contain_wide_image() {
        let area = Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0));
        let rect = contain_rect((1920, 1080), area);
        assert!(approx(rect.width(), 800.0));
        assert!(approx(rect.height(), 450.0));
        assert!(approx(rect.min.y, 75.0));
    }

    #[test]
    fn test_contain_tall_image() {
        let area = Rect::from_min_size(pos2(10.0, 10.0), vec2(800.0, 600.0));
        let rect = contain_rect((300, 600), area);
        assert!(approx(rect.height(), 600.0));
        assert!(approx(rect.width(), 300.0));
        assert!(approx(rect.center().x, area.center().x));
    }

    #[test]
    fn test_contain_degenerate_image() {
        let area = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));
        assert_eq!(contain_rect((0, 10), area), area);
    }

    #[test]
    fn test_cover_crops_sides_of_wide_image() {
        let uv = cover_uv((2000, 1000), vec2(100.0, 100.0));
        assert!(approx(uv.min.x, 0.25));
        assert!(approx(uv.max.x, 0.75));
        assert_eq!(uv.min.y, 0.0);
        assert_eq!(uv.max.y, 1.0);
    }

    #[test]
    fn test_cover_crops_top_and_bottom_of_tall_image() {
        let uv = cover_uv((1000, 2000), vec2(100.0, 100.0));
        assert!(approx(uv.min.y, 0.25));
        assert!(approx(uv.max.y, 0.75));
        assert_eq!(uv.min.x, 0.0);
    }

    #[test]
    fn test_cover_matching_aspect_uses_whole_image() {
        let uv = cover_uv((1600, 900), vec2(320.0, 180.0));
        assert!(approx(uv.min.x, 0.0) && approx(uv.min.y, 0.0));
        assert!(approx(uv.max.x, 1.0) && approx(uv.max.y, 1.0));
    }
}
