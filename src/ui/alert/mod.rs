// SPDX-License-Identifier: MPL-2.0
//! Transient drop alert overlay.
//!
//! A drop is a small translucent banner that slides in from the top or
//! bottom edge, lingers for a fixed dwell time, and leaves on its own — or
//! earlier, if the user flicks it away.
//!
//! # Components
//!
//! - [`payload`] - `AlertPayload` content (title, subtitle, icon, anchor,
//!   corner style)
//! - [`controller`] - the caller-owned `(visible, payload)` slot
//! - [`presenter`] - the presentation state machine
//! - [`animation`] - retargetable animated scalars backing opacity/offset
//! - [`gesture`] - per-drag session state
//! - [`width`] - content-hugging width policy
//! - [`banner`] - the Iced widget rendering it all
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::alert;
//!
//! // Caller side
//! controller.show(alert::AlertPayload::new("Saved").icon(alert::AlertIcon::Success));
//! presenter.sync(&controller, Instant::now());
//!
//! // In update(), forward ticks and pointer messages
//! if presenter.update(message) == alert::Event::Dismiss {
//!     controller.dismiss();
//!     presenter.sync(&controller, now);
//! }
//!
//! // In view()
//! let overlay = alert::overlay(alert::ViewContext { presenter: &presenter, now })
//!     .map(Message::Alert);
//! ```
//!
//! # Design Considerations
//!
//! - Single alert slot: showing again replaces the content and restarts the
//!   lifecycle (no queue, last write wins)
//! - The dwell timer keeps running during a drag
//! - Dismissal is delivered exactly once per presentation, as an [`Event`]
//!   pulled by the owner rather than a callback pushed from a timer

pub mod animation;
pub mod banner;
pub mod controller;
pub mod gesture;
pub mod payload;
pub mod presenter;
pub mod width;

pub use banner::{overlay, ViewContext};
pub use controller::Controller;
pub use payload::{AlertIcon, AlertPayload, Position};
pub use presenter::{Event, Message, Phase, Presenter};
