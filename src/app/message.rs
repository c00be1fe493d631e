// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::alert;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A demo menu button was pressed.
    ShowDrop(DropKind),
    /// Pointer or tick message for the alert presenter.
    Alert(alert::Message),
}

/// The drop variants offered by the demo menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropKind {
    Basic,
    Subtitle,
    Warning,
    Squared,
    Bottom,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_DROP_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
