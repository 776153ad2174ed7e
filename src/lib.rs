// SPDX-License-Identifier: MPL-2.0
//! `iced_sparkle` is a UI feedback and micro-interaction toolkit for the
//! Iced GUI framework, bundled with a showcase application.
//!
//! The reusable pieces live in [`ui`] and [`interactions`]: toast
//! notifications, auto-hiding alerts, debounced table filtering, count-up
//! animations, press ripples, loading buttons, and smooth scrolling. The
//! [`app`] module wires them into the showcase, demonstrating configuration
//! persistence and Fluent localization along the way.

#![doc(html_root_url = "https://docs.rs/iced_sparkle/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod interactions;
pub mod ui;
