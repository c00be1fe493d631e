// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The demo screen is a centered menu of trigger buttons with the alert
//! overlay stacked on top.

use super::message::DropKind;
use super::Message;
use crate::i18n::I18n;
use crate::ui::alert;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, text, Column, Container, Stack, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub presenter: &'a alert::Presenter,
    pub now: Instant,
}

/// Renders the demo menu with the alert overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let menu = view_menu(ctx.i18n);
    let overlay = alert::overlay(alert::ViewContext {
        presenter: ctx.presenter,
        now: ctx.now,
    })
    .map(Message::Alert);

    Stack::new()
        .push(menu)
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_menu(i18n: &I18n) -> Element<'_, Message> {
    let heading = Text::new(i18n.tr("menu-heading")).size(typography::TITLE_MD);
    let caption = Text::new(i18n.tr("menu-caption"))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.color),
        });

    let triggers = [
        ("menu-basic-drop", DropKind::Basic),
        ("menu-subtitle-drop", DropKind::Subtitle),
        ("menu-warning-drop", DropKind::Warning),
        ("menu-squared-drop", DropKind::Squared),
        ("menu-bottom-drop", DropKind::Bottom),
    ];

    let mut column = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(heading)
        .push(caption);
    for (key, kind) in triggers {
        column = column.push(menu_button(i18n.tr(key), kind));
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn menu_button(label: String, kind: DropKind) -> Element<'static, Message> {
    button(
        Text::new(label)
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(Message::ShowDrop(kind))
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fixed(sizing::BANNER_MIN_WIDTH))
    .into()
}
