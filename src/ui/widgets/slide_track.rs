// SPDX-License-Identifier: MPL-2.0
//! A horizontal strip that places every slide of a render sequence side by
//! side and shifts the whole strip by a percentage offset.
//!
//! Only the slides intersecting the track bounds are drawn, and everything is
//! clipped to the track so neighbouring clones never bleed over the controls.

use crate::carousel::{LayoutDirection, SlidesPerView};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{Element, Event, Length, Point, Rectangle, Size};

/// Geometry inputs for one frame of the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    pub slides_per_view: SlidesPerView,
    pub gap: f32,
    /// Strip translation as a percentage of the container width.
    pub offset_percent: f32,
    pub direction: LayoutDirection,
}

impl TrackMetrics {
    /// Horizontal origin of each slide for a container of the given width.
    ///
    /// Mirrored layouts place position 0 at the right edge and grow leftwards.
    #[must_use]
    pub fn slide_origins(&self, count: usize, container_width: f32) -> Vec<f32> {
        let slide_width = self.slides_per_view.slide_width(container_width, self.gap);
        let shift = self
            .slides_per_view
            .offset_to_pixels(self.offset_percent, container_width, self.gap);

        (0..count)
            .map(|index| {
                #[allow(clippy::cast_precision_loss)]
                let x = index as f32 * (slide_width + self.gap) + shift;
                if self.direction.is_mirrored() {
                    container_width - x - slide_width
                } else {
                    x
                }
            })
            .collect()
    }
}

pub struct SlideTrack<'a, Message, Theme, Renderer> {
    slides: Vec<Element<'a, Message, Theme, Renderer>>,
    metrics: TrackMetrics,
}

impl<'a, Message, Theme, Renderer> SlideTrack<'a, Message, Theme, Renderer> {
    pub fn new(slides: Vec<Element<'a, Message, Theme, Renderer>>, metrics: TrackMetrics) -> Self {
        Self { slides, metrics }
    }
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for SlideTrack<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Shrink)
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let max_width = limits.max().width;
        let width = if max_width.is_finite() { max_width } else { 0.0 };

        let slide_width = self.metrics.slides_per_view.slide_width(width, self.metrics.gap);
        let slide_height = SlidesPerView::slide_height(slide_width);
        let slide_limits = layout::Limits::new(Size::ZERO, Size::new(slide_width, slide_height));
        let origins = self.metrics.slide_origins(self.slides.len(), width);

        let children = self
            .slides
            .iter_mut()
            .zip(tree.children.iter_mut())
            .zip(origins)
            .map(|((slide, state), x)| {
                slide
                    .as_widget_mut()
                    .layout(state, renderer, &slide_limits)
                    .move_to(Point::new(x, 0.0))
            })
            .collect();

        layout::Node::with_children(Size::new(width, slide_height), children)
    }

    fn children(&self) -> Vec<widget::Tree> {
        self.slides.iter().map(widget::Tree::new).collect()
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&self.slides);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let Some(clip) = layout.bounds().intersection(viewport) else {
            return;
        };

        renderer.with_layer(clip, |renderer| {
            for ((slide, state), slide_layout) in
                self.slides.iter().zip(&tree.children).zip(layout.children())
            {
                if slide_layout.bounds().intersects(&clip) {
                    slide
                        .as_widget()
                        .draw(state, renderer, theme, style, slide_layout, cursor, &clip);
                }
            }
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        // Slides scrolled out of the track must not react to the pointer.
        let cursor = if cursor.is_over(layout.bounds()) {
            cursor
        } else {
            mouse::Cursor::Unavailable
        };

        for ((slide, state), slide_layout) in self
            .slides
            .iter_mut()
            .zip(tree.children.iter_mut())
            .zip(layout.children())
        {
            slide.as_widget_mut().update(
                state,
                event,
                slide_layout,
                cursor,
                renderer,
                clipboard,
                shell,
                viewport,
            );
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        if !cursor.is_over(layout.bounds()) {
            return mouse::Interaction::default();
        }

        self.slides
            .iter()
            .zip(&tree.children)
            .zip(layout.children())
            .map(|((slide, state), slide_layout)| {
                slide
                    .as_widget()
                    .mouse_interaction(state, slide_layout, cursor, viewport, renderer)
            })
            .max()
            .unwrap_or_default()
    }
}

impl<'a, Message, Theme, Renderer> From<SlideTrack<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(track: SlideTrack<'a, Message, Theme, Renderer>) -> Self {
        Self::new(track)
    }
}

/// Helper function to create a slide track.
pub fn slide_track<'a, Message, Theme, Renderer>(
    slides: Vec<Element<'a, Message, Theme, Renderer>>,
    metrics: TrackMetrics,
) -> SlideTrack<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    SlideTrack::new(slides, metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(direction: LayoutDirection, offset_percent: f32) -> TrackMetrics {
        TrackMetrics {
            slides_per_view: SlidesPerView::for_width(1200.0),
            gap: 0.0,
            offset_percent,
            direction,
        }
    }

    #[test]
    fn origins_are_spaced_by_slide_width_plus_gap() {
        let track = TrackMetrics {
            gap: 10.0,
            ..metrics(LayoutDirection::Ltr, 0.0)
        };
        let origins = track.slide_origins(3, 1220.0);
        assert_eq!(origins, vec![0.0, 410.0, 820.0]);
    }

    #[test]
    fn offset_shifts_the_whole_strip() {
        // Three slides per view at position 3 shows render slot 3 at the left edge.
        let track = metrics(LayoutDirection::Ltr, -100.0);
        let origins = track.slide_origins(6, 1200.0);
        assert!((origins[3] - 0.0).abs() < 1e-3);
        assert!((origins[0] + 1200.0).abs() < 1e-3);
    }

    #[test]
    fn gapped_strip_aligns_current_slot_with_the_left_edge() {
        let spv = SlidesPerView::for_width(1220.0);
        let track = TrackMetrics {
            slides_per_view: spv,
            gap: 10.0,
            offset_percent: spv.offset_percent(5),
            direction: LayoutDirection::Ltr,
        };
        let origins = track.slide_origins(8, 1220.0);
        assert!(origins[5].abs() < 1e-2);
    }

    #[test]
    fn mirrored_track_starts_at_the_right_edge() {
        let track = metrics(LayoutDirection::Rtl, 0.0);
        let origins = track.slide_origins(3, 1200.0);
        assert!((origins[0] - 800.0).abs() < 1e-3);
        assert!((origins[2] - 0.0).abs() < 1e-3);
    }

    #[test]
    fn empty_track_has_no_origins() {
        assert!(metrics(LayoutDirection::Ltr, 0.0)
            .slide_origins(0, 800.0)
            .is_empty());
    }
}
