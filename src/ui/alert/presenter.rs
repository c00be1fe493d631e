// SPDX-License-Identifier: MPL-2.0
//! Presentation state machine for the drop banner.
//!
//! The presenter is driven by three inputs: the controller's
//! `(visible, payload, generation)` via [`Presenter::sync`], pointer
//! messages, and `Tick` messages carrying the current `Instant`. It owns the
//! animation scalars, the dismiss deadline, and the ephemeral drag session,
//! and surfaces exactly one [`Event::Dismiss`] per dismissal (timer firing
//! or drag past the threshold). The owner answers that event by calling
//! [`Controller::dismiss`] and syncing again, which triggers the animate-out.
//!
//! Time never advances on its own here: every time-dependent message carries
//! its `Instant`, so the whole machine is deterministic under test.

use super::animation::AnimatedScalar;
use super::controller::Controller;
use super::gesture::DragSession;
use super::payload::AlertPayload;
use super::width::MeasuredWidth;
use crate::ui::design_tokens::motion;
use std::time::{Duration, Instant};

/// Presentation phase of the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Off screen, or fading out after visibility was cleared.
    #[default]
    Hidden,
    /// Fading and springing into the rest position.
    Entering,
    /// At rest, waiting for the dwell timer or a drag.
    Shown,
    /// Offset driven directly by the pointer.
    Dragging,
    /// Flinging off screen after a drag crossed the threshold; the dismiss
    /// event fires when the fling completes.
    Exiting,
}

/// Messages consumed by the presenter.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Pointer pressed on the banner.
    DragStarted,
    /// Absolute pointer y coordinate, in window space.
    PointerMoved(f32),
    /// Pointer released.
    DragEnded(Instant),
    /// Animation/timer tick.
    Tick(Instant),
}

/// Effects surfaced to the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The drop wants to be dismissed; the owner must clear visibility.
    Dismiss,
}

#[derive(Debug, Clone)]
pub struct Presenter {
    phase: Phase,
    opacity: AnimatedScalar,
    offset: AnimatedScalar,
    width: MeasuredWidth,
    viewport_width: f32,
    dwell: Duration,
    deadline: Option<Instant>,
    drag: Option<DragSession>,
    payload: Option<AlertPayload>,
    seen_generation: u64,
    visible: bool,
    dismiss_sent: bool,
}

impl Presenter {
    /// Creates a presenter for the given viewport width and dwell time.
    ///
    /// The viewport width is injected once and bounds the banner width; it
    /// is intentionally not refreshed on window resize.
    #[must_use]
    pub fn new(viewport_width: f32, dwell: Duration) -> Self {
        Self {
            phase: Phase::Hidden,
            opacity: AnimatedScalar::resting(0.0),
            offset: AnimatedScalar::resting(0.0),
            width: MeasuredWidth::default(),
            viewport_width,
            dwell,
            deadline: None,
            drag: None,
            payload: None,
            seen_generation: 0,
            visible: false,
            dismiss_sent: false,
        }
    }

    /// Reconciles the presenter with the controller's current state.
    ///
    /// Must be called after anything that may have mutated the controller.
    /// A bumped generation (re)starts the entry lifecycle even while
    /// already visible; a cleared visibility starts the animate-out.
    pub fn sync(&mut self, controller: &Controller, now: Instant) {
        if controller.visible() {
            if controller.generation() != self.seen_generation {
                self.seen_generation = controller.generation();
                if let Some(payload) = controller.payload() {
                    self.begin_entry(payload.clone(), now);
                }
            }
        } else if self.visible {
            self.begin_exit(now);
        }
        self.visible = controller.visible();
    }

    /// Handles a pointer or tick message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::DragStarted => {
                if matches!(self.phase, Phase::Entering | Phase::Shown) {
                    self.drag = Some(DragSession::new());
                    self.phase = Phase::Dragging;
                }
                Event::None
            }
            Message::PointerMoved(y) => {
                if self.phase == Phase::Dragging {
                    if let Some(drag) = &mut self.drag {
                        let translation = drag.update(y);
                        self.offset.snap_to(translation);
                    }
                }
                Event::None
            }
            Message::DragEnded(now) => {
                self.resolve_drag(now);
                Event::None
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    fn begin_entry(&mut self, payload: AlertPayload, now: Instant) {
        self.width.refresh(&payload, self.viewport_width);
        let rest = motion::OFF_SCREEN_OFFSET * payload.anchor().direction();

        // A fresh presentation starts from the off-screen rest position; a
        // superseding show mid-flight continues from the current animated
        // values without snapping.
        if self.phase == Phase::Hidden && self.opacity.is_settled(now) && self.opacity.target() == 0.0
        {
            self.offset.snap_to(rest);
        }
        self.opacity.animate_to(1.0, motion::FADE_DURATION, now);
        self.offset.spring_to(0.0, now);

        self.deadline = Some(now + self.dwell);
        self.drag = None;
        self.payload = Some(payload);
        self.dismiss_sent = false;
        self.phase = Phase::Entering;
    }

    fn begin_exit(&mut self, now: Instant) {
        let direction = self
            .payload
            .as_ref()
            .map(|payload| payload.anchor().direction())
            .unwrap_or(-1.0);

        self.opacity.animate_to(0.0, motion::FADE_DURATION, now);
        self.offset.animate_to(
            motion::OFF_SCREEN_OFFSET * direction,
            motion::FADE_DURATION,
            now,
        );
        self.deadline = None;
        self.drag = None;
        self.phase = Phase::Hidden;
    }

    fn resolve_drag(&mut self, now: Instant) {
        if self.phase != Phase::Dragging {
            return;
        }
        let translation = self
            .drag
            .take()
            .map(|session| session.translation())
            .unwrap_or(0.0);

        if translation.abs() > motion::DISMISS_THRESHOLD {
            // Fling off screen past the entry offset; the dismiss event
            // fires once the fling completes. The dwell timer loses.
            let direction = self
                .payload
                .as_ref()
                .map(|payload| payload.anchor().direction())
                .unwrap_or(-1.0);
            let target = (motion::OFF_SCREEN_OFFSET + motion::FLING_OVERSHOOT) * direction;
            self.offset.animate_to(target, motion::FLING_DURATION, now);
            self.deadline = None;
            self.phase = Phase::Exiting;
        } else {
            // Below threshold (including a drag that never moved): spring
            // back. The dwell timer is unaffected.
            self.offset.spring_to(0.0, now);
            self.phase = Phase::Shown;
        }
    }

    fn tick(&mut self, now: Instant) -> Event {
        if self.phase == Phase::Entering
            && self.opacity.is_settled(now)
            && self.offset.is_settled(now)
        {
            self.phase = Phase::Shown;
        }

        if self.phase == Phase::Exiting && self.offset.is_settled(now) && !self.dismiss_sent {
            self.dismiss_sent = true;
            return Event::Dismiss;
        }

        if let Some(deadline) = self.deadline {
            // The deadline keeps running during a drag: dragging does not
            // reset the dwell clock.
            if now >= deadline && !self.dismiss_sent {
                self.deadline = None;
                self.dismiss_sent = true;
                return Event::Dismiss;
            }
        }

        Event::None
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Payload currently displayed, kept through the fade-out.
    #[must_use]
    pub fn payload(&self) -> Option<&AlertPayload> {
        self.payload.as_ref()
    }

    #[must_use]
    pub fn opacity_at(&self, now: Instant) -> f32 {
        self.opacity.value_at(now)
    }

    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        self.offset.value_at(now)
    }

    /// Rendered banner width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width.get()
    }

    /// Pending auto-dismiss deadline, if armed.
    #[must_use]
    pub fn dismiss_deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// False once the banner is fully off screen with nothing in flight;
    /// used to pause the tick subscription.
    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        self.visible || !self.opacity.is_settled(now) || !self.offset.is_settled(now)
    }
}
