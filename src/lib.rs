// SPDX-License-Identifier: MPL-2.0
//! `iced_drop` implements transient "drop" alerts — translucent banners that
//! slide in from an edge, linger briefly, and dismiss themselves or yield to
//! a flick — for the Iced GUI framework, together with a small demo app that
//! triggers the variants.
//!
//! The interesting part lives in [`ui::alert`]: a deterministic presentation
//! state machine over retargetable animation scalars, a cancellable dwell
//! timer, and drag-to-dismiss gesture resolution.

#![doc(html_root_url = "https://docs.rs/iced_drop/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
