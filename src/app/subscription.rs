// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two subscriptions drive the alert: a frame tick while the banner is
//! animating or waiting on its dwell timer, and raw pointer events while a
//! drag is in flight. Both switch off when idle so a resting app schedules
//! nothing.

use super::Message;
use crate::ui::alert;
use crate::ui::design_tokens::motion;
use iced::{event, time, Subscription};
use std::time::Instant;

/// Creates the frame tick subscription while the alert is active.
///
/// Ticks carry their `Instant` so the presenter never reads the clock
/// itself.
pub fn create_tick_subscription(active: bool) -> Subscription<Message> {
    if active {
        time::every(motion::FRAME_INTERVAL)
            .map(|instant| Message::Alert(alert::Message::Tick(instant)))
    } else {
        Subscription::none()
    }
}

/// Routes raw pointer events to the presenter while a drag is in flight.
///
/// The press itself arrives through the banner's `mouse_area`; everything
/// after it (moves, the release, both possibly outside the banner bounds)
/// comes through here.
pub fn create_pointer_subscription(dragging: bool) -> Subscription<Message> {
    if !dragging {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Mouse(iced::mouse::Event::CursorMoved { position }) => {
            Some(Message::Alert(alert::Message::PointerMoved(position.y)))
        }
        event::Event::Mouse(iced::mouse::Event::ButtonReleased(iced::mouse::Button::Left)) => {
            Some(Message::Alert(alert::Message::DragEnded(Instant::now())))
        }
        _ => None,
    })
}
