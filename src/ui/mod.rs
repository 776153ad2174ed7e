// SPDX-License-Identifier: MPL-2.0
//! UI components and screens.

pub mod alerts;
pub mod dashboard;
pub mod data_table;
pub mod design_tokens;
pub mod form;
pub mod icons;
pub mod image_preview;
pub mod loading_button;
pub mod navbar;
pub mod notifications;
pub mod records;
pub mod reveal;
pub mod ripple;
pub mod settings;
pub mod spinner;
pub mod styles;
pub mod submit_form;
pub mod theming;
