// SPDX-License-Identifier: MPL-2.0
//! Time-driven interaction primitives.
//!
//! These types hold no widgets of their own; they are plain state machines
//! advanced by the application's tick subscription and rendered elsewhere.

pub mod counter;
pub mod debounce;
pub mod format;
pub mod scroll;

pub use counter::Counter;
pub use debounce::Debouncer;
pub use scroll::ScrollAnimation;
