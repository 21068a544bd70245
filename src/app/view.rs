// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a scrollable column of sections. Each section shows its title
//! and the carousels mounted into it; an open lightbox is stacked above the
//! whole page.

use super::page::Page;
use super::Message;
use crate::ui::carousel;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{column, container, scrollable, stack, text, Column};
use iced::{Element, Length};

/// Renders the page and, if any, the open lightbox.
pub fn view<'a>(page: &'a Page, carousels: &'a [carousel::State]) -> Element<'a, Message> {
    let sections = page
        .sections()
        .iter()
        .enumerate()
        .map(|(section_index, section)| {
            let mounted: Vec<Element<'a, Message>> = carousels
                .iter()
                .enumerate()
                .filter(|(_, state)| state.section() == section_index)
                .map(|(index, state)| {
                    state
                        .view()
                        .map(move |message| Message::Carousel { index, message })
                })
                .collect();

            let body: Element<'a, Message> = if mounted.is_empty() {
                text("No carousel in this section")
                    .size(typography::BODY)
                    .into()
            } else {
                Column::with_children(mounted).spacing(spacing::XL).into()
            };

            container(
                column![text(section.title.as_str()).size(typography::TITLE_MD), body]
                    .spacing(spacing::MD),
            )
            .padding(spacing::LG)
            .max_width(sizing::SECTION_MAX_WIDTH)
            .width(Length::Fill)
            .style(styles::container::section)
            .into()
        });

    let page_view = container(scrollable(
        container(Column::with_children(sections).spacing(spacing::LG)).center_x(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::Fill);

    let lightbox = carousels.iter().enumerate().find_map(|(index, state)| {
        state
            .lightbox_view()
            .map(|overlay| overlay.map(move |message| Message::Carousel { index, message }))
    });

    match lightbox {
        Some(overlay) => stack![page_view, overlay].into(),
        None => page_view.into(),
    }
}
