// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens, theming, icons, and the drop alert.

pub mod alert;
pub mod design_tokens;
pub mod icons;
pub mod theming;
