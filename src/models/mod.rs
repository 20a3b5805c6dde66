// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Portfolio content and view-state models.

pub mod catalog;
pub mod modal;
pub mod project;
