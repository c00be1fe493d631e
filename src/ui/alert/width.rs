// SPDX-License-Identifier: MPL-2.0
//! Banner width policy.
//!
//! The banner hugs its content: the natural width of the rendered text plus
//! padding, clamped to `[BANNER_MIN_WIDTH, 80% of the viewport]`. The natural
//! width is estimated from glyph counts at the token font sizes, which is
//! stable across frames and cheap enough to recompute on content change.

use super::payload::AlertPayload;
use crate::ui::design_tokens::{sizing, spacing, typography};
use std::hash::{DefaultHasher, Hash, Hasher};

/// Fraction of the viewport width the banner may occupy at most.
const MAX_VIEWPORT_FRACTION: f32 = 0.8;

/// Average glyph advance relative to the font size. Titles render semibold
/// and run slightly wider.
const GLYPH_ADVANCE: f32 = 0.52;
const TITLE_GLYPH_ADVANCE: f32 = 0.56;

/// Upper width bound for a given viewport width.
///
/// Falls back to a fixed cap when the viewport is unknown or nonsensical,
/// and never drops below the minimum width so the clamp stays well-formed.
#[must_use]
pub fn max_width(viewport_width: f32) -> f32 {
    let cap = if viewport_width > 0.0 {
        viewport_width * MAX_VIEWPORT_FRACTION
    } else {
        sizing::BANNER_MAX_WIDTH_FALLBACK
    };
    cap.max(sizing::BANNER_MIN_WIDTH)
}

/// Clamps a natural content width into the rendered banner width.
#[must_use]
pub fn clamped(natural_width: f32, viewport_width: f32) -> f32 {
    (natural_width + 2.0 * sizing::BANNER_PADDING)
        .clamp(sizing::BANNER_MIN_WIDTH, max_width(viewport_width))
}

/// Estimates the natural width of the payload's content row.
#[must_use]
pub fn natural_width(payload: &AlertPayload) -> f32 {
    let title_width =
        payload.title().chars().count() as f32 * typography::BODY_LG * TITLE_GLYPH_ADVANCE;
    let subtitle_width = payload
        .subtitle_text()
        .map(|text| text.chars().count() as f32 * typography::BODY_SM * GLYPH_ADVANCE)
        .unwrap_or(0.0);
    let icon_width = if payload.icon_kind().is_some() {
        sizing::ICON_MD + spacing::XS
    } else {
        0.0
    };

    icon_width + title_width.max(subtitle_width)
}

/// Measured banner width, cached per content.
///
/// `refresh` recomputes only when the payload's content actually changed,
/// so calling it every layout pass does not thrash.
#[derive(Debug, Clone)]
pub struct MeasuredWidth {
    fingerprint: Option<u64>,
    width: f32,
}

impl Default for MeasuredWidth {
    fn default() -> Self {
        Self {
            fingerprint: None,
            width: sizing::BANNER_MIN_WIDTH,
        }
    }
}

impl MeasuredWidth {
    /// Updates the cached width for `payload`, recomputing only on content
    /// change. Returns the current width either way.
    pub fn refresh(&mut self, payload: &AlertPayload, viewport_width: f32) -> f32 {
        let fingerprint = content_fingerprint(payload);
        if self.fingerprint != Some(fingerprint) {
            self.fingerprint = Some(fingerprint);
            self.width = clamped(natural_width(payload), viewport_width);
        }
        self.width
    }

    #[must_use]
    pub fn get(&self) -> f32 {
        self.width
    }
}

fn content_fingerprint(payload: &AlertPayload) -> u64 {
    let mut hasher = DefaultHasher::new();
    payload.title().hash(&mut hasher);
    payload.subtitle_text().hash(&mut hasher);
    payload.icon_kind().hash(&mut hasher);
    hasher.finish()
}
