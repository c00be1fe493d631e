// SPDX-License-Identifier: MPL-2.0
//! End-to-end lifecycle tests driving the controller and presenter together
//! the way the application update loop does.

use iced_drop::config::{self, Config};
use iced_drop::i18n::I18n;
use iced_drop::ui::alert::{
    AlertIcon, AlertPayload, Controller, Event, Message, Phase, Position, Presenter,
};
use std::time::{Duration, Instant};
use tempfile::tempdir;

const VIEWPORT: f32 = 420.0;
const DWELL: Duration = Duration::from_millis(3000);

/// Mimics `App::update` answering a presenter event.
fn pump(
    controller: &mut Controller,
    presenter: &mut Presenter,
    message: Message,
    now: Instant,
) -> Event {
    let event = presenter.update(message);
    if event == Event::Dismiss {
        controller.dismiss();
        presenter.sync(controller, now);
    }
    event
}

#[test]
fn full_timer_lifecycle_from_show_to_rest() {
    let t0 = Instant::now();
    let mut controller = Controller::new();
    let mut presenter = Presenter::new(VIEWPORT, DWELL);

    controller.show(AlertPayload::new("Saved").icon(AlertIcon::Success));
    presenter.sync(&controller, t0);

    // Entry: fades in over 300ms, springs into place
    assert_eq!(presenter.phase(), Phase::Entering);
    assert_eq!(presenter.opacity_at(t0), 0.0);
    assert_eq!(presenter.opacity_at(t0 + Duration::from_millis(300)), 1.0);

    // Settles while the dwell runs
    pump(
        &mut controller,
        &mut presenter,
        Message::Tick(t0 + Duration::from_millis(1500)),
        t0 + Duration::from_millis(1500),
    );
    assert_eq!(presenter.phase(), Phase::Shown);

    // Dwell elapses: dismiss propagates and visibility clears
    let fired = t0 + DWELL;
    let event = pump(&mut controller, &mut presenter, Message::Tick(fired), fired);
    assert_eq!(event, Event::Dismiss);
    assert!(!controller.visible());

    // Fade-out completes and the presenter goes quiet
    let rest = fired + Duration::from_secs(2);
    pump(&mut controller, &mut presenter, Message::Tick(rest), rest);
    assert_eq!(presenter.opacity_at(rest), 0.0);
    assert!(!presenter.is_active(rest));
}

#[test]
fn gesture_dismissal_end_to_end() {
    let t0 = Instant::now();
    let mut controller = Controller::new();
    let mut presenter = Presenter::new(VIEWPORT, DWELL);

    controller.show(AlertPayload::new("Flick me").position(Position::Bottom));
    presenter.sync(&controller, t0);

    let t1 = t0 + Duration::from_secs(1);
    pump(&mut controller, &mut presenter, Message::Tick(t1), t1);

    // Drag well past the threshold and release
    presenter.update(Message::DragStarted);
    presenter.update(Message::PointerMoved(500.0));
    presenter.update(Message::PointerMoved(620.0));
    pump(&mut controller, &mut presenter, Message::DragEnded(t1), t1);
    assert_eq!(presenter.phase(), Phase::Exiting);
    assert!(controller.visible());

    // The fling completes: one dismiss, then visibility clears
    let settled = t1 + Duration::from_millis(200);
    let event = pump(
        &mut controller,
        &mut presenter,
        Message::Tick(settled),
        settled,
    );
    assert_eq!(event, Event::Dismiss);
    assert!(!controller.visible());

    // No second dismiss on later ticks
    let later = settled + Duration::from_millis(16);
    let event = pump(&mut controller, &mut presenter, Message::Tick(later), later);
    assert_eq!(event, Event::None);
}

#[test]
fn timer_and_gesture_race_produces_one_dismissal() {
    let t0 = Instant::now();
    let mut controller = Controller::new();
    let mut presenter = Presenter::new(VIEWPORT, DWELL);

    controller.show(AlertPayload::new("Race"));
    presenter.sync(&controller, t0);

    // Start dragging just before the dwell elapses
    presenter.update(Message::Tick(t0 + Duration::from_secs(2)));
    presenter.update(Message::DragStarted);
    presenter.update(Message::PointerMoved(100.0));
    presenter.update(Message::PointerMoved(140.0));

    // The timer fires mid-drag and wins
    let fired = t0 + DWELL;
    let event = pump(&mut controller, &mut presenter, Message::Tick(fired), fired);
    assert_eq!(event, Event::Dismiss);
    assert!(!controller.visible());

    // The release that follows is a no-op
    let event = pump(
        &mut controller,
        &mut presenter,
        Message::DragEnded(fired),
        fired,
    );
    assert_eq!(event, Event::None);
    assert_eq!(presenter.phase(), Phase::Hidden);
}

#[test]
fn reshow_before_dwell_restarts_the_lifecycle() {
    let t0 = Instant::now();
    let mut controller = Controller::new();
    let mut presenter = Presenter::new(VIEWPORT, DWELL);

    controller.show(AlertPayload::new("First"));
    presenter.sync(&controller, t0);

    let t1 = t0 + Duration::from_secs(2);
    controller.show(AlertPayload::new("Second").position(Position::Bottom));
    presenter.sync(&controller, t1);

    assert_eq!(presenter.payload().unwrap().title(), "Second");

    // First's dwell passes silently; Second's dismisses
    let event = pump(
        &mut controller,
        &mut presenter,
        Message::Tick(t0 + DWELL + Duration::from_millis(16)),
        t0 + DWELL,
    );
    assert_eq!(event, Event::None);
    assert!(controller.visible());

    let event = pump(
        &mut controller,
        &mut presenter,
        Message::Tick(t1 + DWELL),
        t1 + DWELL,
    );
    assert_eq!(event, Event::Dismiss);
    assert!(!controller.visible());
}

#[test]
fn config_file_tunes_presenter_geometry_and_timing() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut written = Config::default();
    written.alert.dwell_ms = 1000;
    written.alert.viewport_width = 1000.0;
    config::save_to_path(&written, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let mut controller = Controller::new();
    let mut presenter = Presenter::new(loaded.alert.viewport_width, loaded.alert.dwell());

    let t0 = Instant::now();
    let long_title = "wide ".repeat(40);
    controller.show(AlertPayload::new(long_title));
    presenter.sync(&controller, t0);

    // 80% of the configured viewport
    assert_eq!(presenter.width(), loaded.alert.viewport_width * 0.8);

    // The shorter dwell is honored
    let event = pump(
        &mut controller,
        &mut presenter,
        Message::Tick(t0 + Duration::from_millis(1000)),
        t0 + Duration::from_millis(1000),
    );
    assert_eq!(event, Event::Dismiss);
}

#[test]
fn language_resolution_follows_cli_over_config() {
    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());

    let i18n = I18n::new(Some("fr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("menu-basic-drop"), "Alerte simple");
}
