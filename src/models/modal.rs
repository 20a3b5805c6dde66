// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project detail modal state.
//!
//! Tracks which project is open in the detail modal and which gallery
//! slide is showing. Every operation is total: calls that make no sense
//! in the current state (navigating while closed, an empty gallery, an
//! out-of-range slide) leave the state untouched.

use super::project::{ImageRef, Project};

/// View state of the project detail modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProjectModal {
    #[default]
    Closed,
    Open { project: Project, slide: usize },
}

impl ProjectModal {
    pub fn new() -> Self {
        Self::Closed
    }

    /// Show `project`, starting from its first slide.
    pub fn open(&mut self, project: &Project) {
        log::debug!("Opening project {}", project.id);
        *self = Self::Open {
            project: project.clone(),
            slide: 0,
        };
    }

    pub fn close(&mut self) {
        if let Self::Open { project, .. } = self {
            log::debug!("Closing project {}", project.id);
        }
        *self = Self::Closed;
    }

    pub fn show_previous(&mut self) {
        if let Self::Open { project, slide } = self {
            let total = project.gallery_len();
            if total == 0 {
                return;
            }
            *slide = (*slide + total - 1) % total;
            log::debug!("Slide {}/{} of {}", *slide + 1, total, project.id);
        }
    }

    pub fn show_next(&mut self) {
        if let Self::Open { project, slide } = self {
            let total = project.gallery_len();
            if total == 0 {
                return;
            }
            *slide = (*slide + 1) % total;
            log::debug!("Slide {}/{} of {}", *slide + 1, total, project.id);
        }
    }

    /// Jump straight to slide `index`. Ignored when closed or out of range.
    pub fn go_to(&mut self, index: usize) {
        if let Self::Open { project, slide } = self {
            if index < project.gallery_len() {
                *slide = index;
            } else {
                log::warn!(
                    "Ignoring slide {} for {} ({} images)",
                    index,
                    project.id,
                    project.gallery_len()
                );
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn active_project(&self) -> Option<&Project> {
        match self {
            Self::Open { project, .. } => Some(project),
            Self::Closed => None,
        }
    }

    /// Current slide index; 0 while closed.
    pub fn active_slide(&self) -> usize {
        match self {
            Self::Open { slide, .. } => *slide,
            Self::Closed => 0,
        }
    }

    /// Gallery image currently on display, if any.
    pub fn current_image(&self) -> Option<&ImageRef> {
        match self {
            Self::Open { project, slide } => project.gallery().get(*slide),
            Self::Closed => None,
        }
    }
}
