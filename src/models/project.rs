// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project data structures.
//!
//! This module defines a portfolio project entry: its descriptive text,
//! technology tags, cover image, optional external link and optional
//! image gallery.

use serde::{Deserialize, Serialize};

/// Placeholder shown in place of a link when a project has neither a URL
/// nor a display label.
pub const LINK_PLACEHOLDER: &str = "Próximamente";

/// An image reference together with its accessible description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

impl ImageRef {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// How the link line of a project should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkDisplay<'a> {
    /// Clickable link to `href`, showing `label`.
    Hyperlink { href: &'a str, label: &'a str },
    /// Plain note with no target.
    Note(&'a str),
}

/// A portfolio entry describing one completed work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub timeframe: String,
    pub summary: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
    pub image: ImageRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<ImageRef>>,
}

impl Project {
    /// Gallery images, empty when the project has none.
    pub fn gallery(&self) -> &[ImageRef] {
        self.gallery.as_deref().unwrap_or_default()
    }

    /// Number of gallery images.
    pub fn gallery_len(&self) -> usize {
        self.gallery().len()
    }

    /// Previous/next and indicator controls only apply to galleries with
    /// more than one image.
    pub fn has_carousel_controls(&self) -> bool {
        self.gallery_len() > 1
    }

    /// Resolve the link line for the detail view.
    pub fn link_display(&self) -> LinkDisplay<'_> {
        match (&self.link_href, &self.link_label) {
            (Some(href), label) => LinkDisplay::Hyperlink {
                href,
                label: label.as_deref().unwrap_or(href),
            },
            (None, Some(label)) => LinkDisplay::Note(label),
            (None, None) => LinkDisplay::Note(LINK_PLACEHOLDER),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Build a project with `slides` gallery images (or no gallery at all).
    pub(crate) fn sample_project(id: &str, slides: Option<usize>) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            timeframe: "2025".to_string(),
            summary: "A sample project".to_string(),
            description: vec!["First paragraph".to_string()],
            technologies: vec!["Rust".to_string(), "egui".to_string()],
            image: ImageRef::new(format!("/{id}/cover.png"), "Cover"),
            link_href: None,
            link_label: None,
            gallery: slides.map(|n| {
                (0..n)
                    .map(|i| ImageRef::new(format!("/{id}/screen-{i}.png"), format!("Slide {i}")))
                    .collect()
            }),
        }
    }

    #[test]
    fn test_absent_gallery_is_empty() {
        let project = sample_project("none", None);
        assert!(project.gallery().is_empty());
        assert_eq!(project.gallery_len(), 0);
        assert!(!project.has_carousel_controls());
    }

    #[test]
    fn test_carousel_controls_need_two_images() {
        assert!(!sample_project("one", Some(1)).has_carousel_controls());
        assert!(sample_project("two", Some(2)).has_carousel_controls());
    }

    #[test]
    fn test_link_display_rules() {
        let mut project = sample_project("p", None);
        assert_eq!(project.link_display(), LinkDisplay::Note(LINK_PLACEHOLDER));

        project.link_label = Some("En desarrollo".to_string());
        assert_eq!(project.link_display(), LinkDisplay::Note("En desarrollo"));

        project.link_href = Some("https://example.com".to_string());
        assert_eq!(
            project.link_display(),
            LinkDisplay::Hyperlink {
                href: "https://example.com",
                label: "En desarrollo"
            }
        );

        project.link_label = None;
        assert_eq!(
            project.link_display(),
            LinkDisplay::Hyperlink {
                href: "https://example.com",
                label: "https://example.com"
            }
        );
    }
}
