// SPDX-License-Identifier: MPL-2.0
//! Content payload for a single drop alert.
//!
//! A payload is immutable once handed to [`Controller::show`]; showing again
//! replaces it wholesale. Optional fields simply omit their element from the
//! banner layout.
//!
//! [`Controller::show`]: super::Controller::show

/// Anchor edge of the banner, which also determines the off-screen
/// direction for entry and exit travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

impl Position {
    /// Sign of off-screen travel: negative above the top edge, positive
    /// below the bottom edge.
    #[must_use]
    pub fn direction(self) -> f32 {
        match self {
            Position::Top => -1.0,
            Position::Bottom => 1.0,
        }
    }
}

/// Leading glyph identifier. Rendering is resolved by the banner view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertIcon {
    Warning,
    Info,
    Success,
    Bell,
}

/// Everything the banner displays for one presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertPayload {
    title: String,
    subtitle: Option<String>,
    icon: Option<AlertIcon>,
    position: Position,
    squared: bool,
}

impl AlertPayload {
    /// Creates a payload with the given title and all options at their
    /// defaults (no subtitle, no icon, top position, pill corners).
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            icon: None,
            position: Position::default(),
            squared: false,
        }
    }

    /// Adds a secondary label under the title.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Adds a leading glyph.
    #[must_use]
    pub fn icon(mut self, icon: AlertIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Anchors the banner to the given edge.
    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Uses small corner radii instead of the default pill shape.
    #[must_use]
    pub fn squared(mut self) -> Self {
        self.squared = true;
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle_text(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn icon_kind(&self) -> Option<AlertIcon> {
        self.icon
    }

    #[must_use]
    pub fn anchor(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_squared(&self) -> bool {
        self.squared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_top_pill_without_extras() {
        let payload = AlertPayload::new("Hello");
        assert_eq!(payload.title(), "Hello");
        assert_eq!(payload.subtitle_text(), None);
        assert_eq!(payload.icon_kind(), None);
        assert_eq!(payload.anchor(), Position::Top);
        assert!(!payload.is_squared());
    }

    #[test]
    fn builder_sets_every_field() {
        let payload = AlertPayload::new("Warning")
            .subtitle("Check your connection")
            .icon(AlertIcon::Warning)
            .position(Position::Bottom)
            .squared();

        assert_eq!(payload.title(), "Warning");
        assert_eq!(payload.subtitle_text(), Some("Check your connection"));
        assert_eq!(payload.icon_kind(), Some(AlertIcon::Warning));
        assert_eq!(payload.anchor(), Position::Bottom);
        assert!(payload.is_squared());
    }

    #[test]
    fn positions_travel_in_opposite_directions() {
        assert_eq!(Position::Top.direction(), -1.0);
        assert_eq!(Position::Bottom.direction(), 1.0);
    }
}
