// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::carousel;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message for the carousel at `index` in mount order.
    Carousel {
        index: usize,
        message: carousel::Message,
    },
    /// Window opened or resized; carries the inner size.
    WindowResized(Size),
    /// Periodic tick driving autoplay deadlines.
    Tick(Instant),
    /// Redraw request while a slide transition is running.
    Frame(Instant),
    EscapePressed,
}

/// Runtime flags passed from the CLI to the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_CAROUSEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Autoplay period override in milliseconds.
    pub delay_ms: Option<u64>,
    pub no_autoplay: bool,
    /// Lay every carousel out right-to-left.
    pub rtl: bool,
    /// Image paths or URLs; when present they replace the configured
    /// carousels with a single one in the first section.
    pub images: Vec<String>,
}
