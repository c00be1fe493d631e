// SPDX-License-Identifier: MPL-2.0
//! Internationalization support built on Fluent.
//!
//! Translations live in embedded `.ftl` files under `assets/i18n/`, one per
//! locale. The active locale is resolved from the CLI flag, then the config
//! file, then the OS locale, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
