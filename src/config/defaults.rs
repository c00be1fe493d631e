// SPDX-License-Identifier: MPL-2.0
//! Default values for every configuration field.
//!
//! Kept in one place so the `Default` impls, serde defaults, and tests all
//! agree on the same numbers.

use crate::ui::theming::ThemeMode;

/// Milliseconds a drop stays on screen before auto-dismissing.
pub const DEFAULT_DWELL_MS: u64 = 3000;

/// Logical viewport width used to bound banner sizing.
///
/// The banner caps its width at 80% of this value. It is read once at
/// startup and deliberately not refreshed on window resize.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 420.0;

pub(super) fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

pub(super) fn default_dwell_ms() -> u64 {
    DEFAULT_DWELL_MS
}

pub(super) fn default_viewport_width() -> f32 {
    DEFAULT_VIEWPORT_WIDTH
}
