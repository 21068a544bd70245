// SPDX-License-Identifier: MPL-2.0
//! Full-window overlay showing one slide enlarged.

use super::Message;
use crate::media::SlideImage;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, image, mouse_area, opaque, text};
use iced::{ContentFit, Element, Length};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    enabled: bool,
    current: Option<usize>,
}

impl Lightbox {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            current: None,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Real slide index shown, if open.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Shows `slide`. Returns `false` when the lightbox is disabled.
    pub fn open(&mut self, slide: usize) -> bool {
        if !self.enabled {
            return false;
        }
        self.current = Some(slide);
        true
    }

    /// Hides the overlay. Returns `false` if it was not open.
    pub fn close(&mut self) -> bool {
        self.current.take().is_some()
    }
}

/// Overlay content; any click closes it.
pub(super) fn view<'a>(slide: Option<&SlideImage>, label: String) -> Element<'a, Message> {
    let content: Element<'a, Message> = match slide.and_then(SlideImage::handle) {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => text(format!("{label} is not available"))
            .size(typography::BODY)
            .into(),
    };

    let backdrop = container(content)
        .padding(spacing::XL)
        .center(Length::Fill)
        .style(styles::overlay::lightbox_backdrop);

    opaque(mouse_area(backdrop).on_press(Message::LightboxClosed))
}
