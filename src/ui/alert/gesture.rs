// SPDX-License-Identifier: MPL-2.0
//! Per-drag gesture state.
//!
//! A [`DragSession`] exists only between drag-start and drag-end. The origin
//! is captured lazily from the first pointer sample after the press, since
//! the press itself arrives without coordinates.

/// Cumulative vertical translation of one drag.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragSession {
    origin: Option<f32>,
    translation: f32,
}

impl DragSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds an absolute pointer y coordinate and returns the cumulative
    /// translation since the drag started.
    pub fn update(&mut self, y: f32) -> f32 {
        let origin = *self.origin.get_or_insert(y);
        self.translation = y - origin;
        self.translation
    }

    /// Cumulative translation since drag start. Zero if the pointer never
    /// moved.
    #[must_use]
    pub fn translation(&self) -> f32 {
        self.translation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_sets_origin_with_zero_translation() {
        let mut session = DragSession::new();
        assert_eq!(session.update(120.0), 0.0);
    }

    #[test]
    fn translation_accumulates_relative_to_origin() {
        let mut session = DragSession::new();
        session.update(100.0);
        assert_eq!(session.update(160.0), 60.0);
        assert_eq!(session.update(90.0), -10.0);
        assert_eq!(session.translation(), -10.0);
    }

    #[test]
    fn untouched_session_reports_zero() {
        let session = DragSession::new();
        assert_eq!(session.translation(), 0.0);
    }
}
