// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the demo menu and the
//! drop alert.
//!
//! The `App` struct owns the alert controller/presenter pair and wires them
//! into the Iced update loop: menu presses become `Controller::show` calls,
//! presenter events become `Controller::dismiss` calls, and every mutation
//! of the controller is followed by a `Presenter::sync`. This file keeps
//! that policy next to the update loop so the alert's lifecycle is easy to
//! audit.

mod message;
mod subscription;
mod view;

pub use message::{DropKind, Flags, Message};

use crate::config;
use crate::i18n::I18n;
use crate::ui::alert;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::Path;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;

/// Root Iced application state bridging the demo menu, localization, and
/// the alert component.
pub struct App {
    i18n: I18n,
    theme_mode: ThemeMode,
    controller: alert::Controller,
    presenter: alert::Presenter,
}

/// Builds the window settings. The default window is phone-shaped, matching
/// the component's mobile origin.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32 / 2.0,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load(flags.config_dir.as_deref().map(Path::new));
        let i18n = I18n::new(flags.lang, &config);
        let presenter =
            alert::Presenter::new(config.alert.viewport_width, config.alert.dwell());

        let app = Self {
            i18n,
            theme_mode: config.general.theme_mode,
            controller: alert::Controller::new(),
            presenter,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(self.presenter.is_active(Instant::now())),
            subscription::create_pointer_subscription(self.presenter.is_dragging()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowDrop(kind) => {
                log::debug!("showing {kind:?} drop");
                self.controller.show(demo_payload(kind, &self.i18n));
                self.presenter.sync(&self.controller, Instant::now());
            }
            Message::Alert(alert_message) => {
                // Anchor the dismissal fade to the instant the triggering
                // message carries, when it carries one
                let now = match alert_message {
                    alert::Message::Tick(instant) | alert::Message::DragEnded(instant) => instant,
                    _ => Instant::now(),
                };
                if self.presenter.update(alert_message) == alert::Event::Dismiss {
                    log::debug!("drop dismissed");
                    self.controller.dismiss();
                    self.presenter.sync(&self.controller, now);
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            presenter: &self.presenter,
            now: Instant::now(),
        })
    }
}

/// Builds the payload for one of the demo menu's drop variants.
fn demo_payload(kind: DropKind, i18n: &I18n) -> alert::AlertPayload {
    match kind {
        DropKind::Basic => alert::AlertPayload::new(i18n.tr("drop-basic-title")),
        DropKind::Subtitle => alert::AlertPayload::new(i18n.tr("drop-synced-title"))
            .subtitle(i18n.tr_with_args("drop-synced-body", &[("count", "3")]))
            .icon(alert::AlertIcon::Success),
        DropKind::Warning => alert::AlertPayload::new(i18n.tr("drop-warning-title"))
            .subtitle(i18n.tr("drop-warning-body"))
            .icon(alert::AlertIcon::Warning),
        DropKind::Squared => {
            alert::AlertPayload::new(i18n.tr("drop-squared-title")).squared()
        }
        DropKind::Bottom => alert::AlertPayload::new(i18n.tr("drop-bottom-title"))
            .icon(alert::AlertIcon::Bell)
            .position(alert::Position::Bottom),
    }
}
