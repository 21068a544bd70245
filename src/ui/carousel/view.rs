// SPDX-License-Identifier: MPL-2.0
//! Rendering of a carousel instance: track, arrow controls and dot strip.

use super::{lightbox, Control, Message, State};
use crate::carousel::SlideEntry;
use crate::media::SlideImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::slide_track::{slide_track, TrackMetrics};
use iced::widget::{button, column, container, image, mouse_area, row, stack, text, Row};
use iced::{Alignment, ContentFit, Element, Length, Theme};

impl State {
    pub fn view(&self) -> Element<'_, Message> {
        let slides = self
            .engine
            .sequence()
            .iter()
            .map(|entry| self.slide_frame(entry))
            .collect();

        let track = slide_track(
            slides,
            TrackMetrics {
                slides_per_view: self.engine.slides_per_view(),
                gap: self.options.gap,
                offset_percent: self.offset,
                direction: self.options.direction,
            },
        );

        let controls = row![
            container(control_button("‹", Control::Previous)).align_left(Length::Fill),
            container(control_button("›", Control::Next)).align_right(Length::Fill),
        ]
        .padding(spacing::XS)
        .align_y(Alignment::Center);

        let carousel = column![
            stack![track, container(controls).center_y(Length::Fill)],
            container(self.dots()).center_x(Length::Fill),
        ]
        .spacing(spacing::SM);

        mouse_area(carousel)
            .on_enter(Message::PointerEntered)
            .on_exit(Message::PointerLeft)
            .into()
    }

    /// Overlay for the open lightbox, drawn by the host above the page.
    pub fn lightbox_view(&self) -> Option<Element<'_, Message>> {
        let slide = self.lightbox.current()?;
        let label = self.sources.get(slide)?.label();
        Some(lightbox::view(self.images.get(slide), label))
    }

    fn slide_frame(&self, entry: SlideEntry) -> Element<'_, Message> {
        let radius = self.options.round_corner.pixels();
        let image_state = self.images.get(entry.source);

        let broken = matches!(image_state, Some(SlideImage::Broken) | None);

        let content: Element<'_, Message> = match image_state {
            Some(SlideImage::Ready(handle)) => image(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            Some(SlideImage::Pending) => text("Loading…").size(typography::CAPTION).into(),
            Some(SlideImage::Broken) | None => {
                text("Image unavailable").size(typography::CAPTION).into()
            }
        };

        let frame = container(content)
            .center(Length::Fill)
            .clip(true)
            .style(move |theme: &Theme| {
                if broken {
                    styles::container::broken_slide(radius)(theme)
                } else {
                    styles::container::slide_frame(radius)(theme)
                }
            });

        if self.lightbox.is_enabled() {
            button(frame)
                .padding(0)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::button::slide)
                .on_press(Message::SlidePressed(entry.source))
                .into()
        } else {
            frame.into()
        }
    }

    fn dots(&self) -> Element<'_, Message> {
        let active = self.engine.active_dot();
        let count = self.engine.sequence().real_count();

        let dots: Vec<_> = if self.options.direction.is_mirrored() {
            (0..count).rev().map(|i| dot(i, i == active)).collect()
        } else {
            (0..count).map(|i| dot(i, i == active)).collect()
        };

        Row::with_children(dots)
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .into()
    }
}

fn dot<'a>(index: usize, is_active: bool) -> Element<'a, Message> {
    let width = if is_active {
        sizing::DOT_ACTIVE_WIDTH
    } else {
        sizing::DOT_SIZE
    };

    button("")
        .width(width)
        .height(sizing::DOT_SIZE)
        .padding(0)
        .style(styles::button::dot(is_active))
        .on_press(Message::DotPressed(index))
        .into()
}

fn control_button(glyph: &'static str, control: Control) -> Element<'static, Message> {
    button(text(glyph).size(typography::CONTROL_GLYPH).center())
        .width(sizing::CONTROL_SIZE)
        .height(sizing::CONTROL_SIZE)
        .padding(0)
        .style(styles::button::control)
        .on_press(Message::ControlPressed(control))
        .into()
}
