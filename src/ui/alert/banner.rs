// SPDX-License-Identifier: MPL-2.0
//! Banner widget for rendering the drop alert.
//!
//! The banner is a translucent card hugging its measured width, anchored to
//! the top or bottom edge. Animation state maps onto the layout as an edge
//! margin (clamped at zero once the banner travels past the viewport edge)
//! and an alpha multiplier on every painted color; the signed off-screen
//! offsets themselves live in the presenter.

use super::payload::{AlertIcon, Position};
use super::presenter::{Message, Presenter};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons;
use iced::widget::{container, mouse_area, text, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub presenter: &'a Presenter,
    pub now: Instant,
}

/// Renders the alert overlay. Returns an empty, zero-sized element while
/// the banner is fully at rest off screen.
pub fn overlay<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext { presenter, now } = ctx;

    let payload = match presenter.payload() {
        Some(payload) if presenter.is_active(now) => payload,
        _ => {
            // Takes no space and swallows no pointer events
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }
    };

    let fade = presenter.opacity_at(now);
    let offset = presenter.offset_at(now);
    let anchor = payload.anchor();
    let squared = payload.is_squared();

    // Title, with optional leading icon and subtitle
    let title_widget = Text::new(payload.title())
        .size(typography::BODY_LG)
        .style(move |theme: &Theme| text::Style {
            color: Some(faded(theme.palette().text, fade)),
        });

    let mut text_column = Column::new().push(title_widget);
    if let Some(subtitle) = payload.subtitle_text() {
        text_column = text_column.push(Text::new(subtitle).size(typography::BODY_SM).style(
            move |theme: &Theme| text::Style {
                color: Some(faded(theme.palette().text, fade * opacity::OVERLAY_STRONG)),
            },
        ));
    }

    let mut content = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);
    if let Some(icon) = payload.icon_kind() {
        let accent = icon_color(icon);
        let icon_widget: Element<'a, Message> =
            icons::sized(icon_glyph(icon), sizing::ICON_MD)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(faded(accent, fade)),
                })
                .into();
        content = content.push(icon_widget);
    }
    content = content.push(text_column);

    let card = Container::new(content)
        .width(Length::Fixed(presenter.width()))
        .padding(sizing::BANNER_PADDING)
        .style(move |theme: &Theme| banner_style(theme, fade, squared));

    let interactive = mouse_area(card).on_press(Message::DragStarted);

    // Anchor-edge margin carrying the vertical travel
    let spacer = Space::new().height(Length::Fixed(edge_spacer(offset, anchor)));
    let column = match anchor {
        Position::Top => Column::new().push(spacer).push(interactive),
        Position::Bottom => Column::new().push(interactive).push(spacer),
    }
    .align_x(alignment::Horizontal::Center);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(match anchor {
            Position::Top => alignment::Vertical::Top,
            Position::Bottom => alignment::Vertical::Bottom,
        })
        .into()
}

/// Height of the margin between the banner and its anchor edge for a given
/// animated offset. Travel past the edge clamps to zero; the fade conveys
/// the remaining distance.
fn edge_spacer(offset: f32, anchor: Position) -> f32 {
    (sizing::BANNER_EDGE_MARGIN - offset * anchor.direction()).max(0.0)
}

/// Resolves the payload's icon identifier into a glyph.
fn icon_glyph(icon: AlertIcon) -> Text<'static> {
    match icon {
        AlertIcon::Warning => icons::warning(),
        AlertIcon::Info => icons::info(),
        AlertIcon::Success => icons::checkmark(),
        AlertIcon::Bell => icons::bell(),
    }
}

/// Accent color for each icon kind.
fn icon_color(icon: AlertIcon) -> Color {
    match icon {
        AlertIcon::Warning => palette::WARNING_500,
        AlertIcon::Info => palette::INFO_500,
        AlertIcon::Success => palette::SUCCESS_500,
        AlertIcon::Bell => palette::PRIMARY_500,
    }
}

/// Style function for the banner card.
fn banner_style(theme: &Theme, fade: f32, squared: bool) -> container::Style {
    let surface = theme.extended_palette().background.base.color;
    let corner_radius = if squared { radius::SM } else { radius::PILL };

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::BANNER_SURFACE * fade,
            ..surface
        })),
        border: iced::Border {
            color: faded(theme.palette().text, fade * opacity::OVERLAY_SUBTLE),
            width: border::WIDTH_SM,
            radius: corner_radius.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, fade * opacity::OVERLAY_SUBTLE),
            ..shadow::MD
        },
        text_color: Some(faded(theme.palette().text, fade)),
        ..Default::default()
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn edge_spacer_shrinks_toward_the_anchor() {
        // At rest the banner sits a full margin from its edge
        assert_abs_diff_eq!(edge_spacer(0.0, Position::Top), sizing::BANNER_EDGE_MARGIN);
        assert_abs_diff_eq!(
            edge_spacer(0.0, Position::Bottom),
            sizing::BANNER_EDGE_MARGIN
        );

        // Off-screen travel pulls the banner toward (and past) the edge
        assert!(edge_spacer(-30.0, Position::Top) < sizing::BANNER_EDGE_MARGIN);
        assert!(edge_spacer(30.0, Position::Bottom) < sizing::BANNER_EDGE_MARGIN);

        // Travel past the edge clamps at zero
        assert_abs_diff_eq!(edge_spacer(-150.0, Position::Top), 0.0);
        assert_abs_diff_eq!(edge_spacer(150.0, Position::Bottom), 0.0);
    }

    #[test]
    fn dragging_away_from_the_anchor_grows_the_margin() {
        assert!(edge_spacer(40.0, Position::Top) > sizing::BANNER_EDGE_MARGIN);
        assert!(edge_spacer(-40.0, Position::Bottom) > sizing::BANNER_EDGE_MARGIN);
    }

    #[test]
    fn banner_style_scales_every_alpha_with_the_fade() {
        let theme = Theme::Dark;
        let opaque = banner_style(&theme, 1.0, false);
        let faded_out = banner_style(&theme, 0.0, false);

        let alpha_of = |style: &container::Style| match style.background {
            Some(iced::Background::Color(color)) => color.a,
            _ => panic!("banner background must be a color"),
        };

        assert_abs_diff_eq!(alpha_of(&opaque), opacity::BANNER_SURFACE);
        assert_abs_diff_eq!(alpha_of(&faded_out), 0.0);
        assert_abs_diff_eq!(faded_out.text_color.unwrap().a, 0.0);
    }

    #[test]
    fn corner_radius_follows_the_squared_flag() {
        let theme = Theme::Light;
        let pill = banner_style(&theme, 1.0, false);
        let squared = banner_style(&theme, 1.0, true);

        assert_eq!(pill.border.radius, iced::border::Radius::from(radius::PILL));
        assert_eq!(squared.border.radius, iced::border::Radius::from(radius::SM));
    }
}
