// SPDX-License-Identifier: MPL-2.0
//! Carousel component: one self-contained instance on the page.
//!
//! The component owns a [`CarouselEngine`] together with the timing pieces
//! around it (autoplay deadline, transition tween), the lightbox and the
//! per-slide image state. The host forwards UI messages, ticks, frames and
//! width changes; the component answers with an [`Effect`] when the host
//! needs to coordinate with other instances.
//!
//! Construction goes through [`State::mount`], which never fails loudly: a
//! bad container locator or an empty slide list is logged and yields `None`.

mod lightbox;
mod view;

pub use lightbox::Lightbox;

use crate::app::page::Page;
use crate::carousel::{
    AutoplayTimer, CarouselEngine, CarouselOptions, Motion, RenderSequence, Settle,
    TransitionAnimator,
};
use crate::error::{MountError, Result};
use crate::media::{self, SlideImage, SlideSource};
use iced::widget::image::Handle;
use iced::Task;
use std::time::Instant;

/// Arrow controls. The mapping to engine moves depends on layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Previous,
    Next,
}

#[derive(Debug, Clone)]
pub enum Message {
    ControlPressed(Control),
    DotPressed(usize),
    /// A slide frame was clicked; carries the real slide index.
    SlidePressed(usize),
    LightboxClosed,
    PointerEntered,
    PointerLeft,
    AutoplayTick(Instant),
    AnimationFrame(Instant),
    ContainerResized(f32),
    SlideFetched {
        slide: usize,
        result: Result<Handle>,
    },
}

/// What the host should know after a message was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The lightbox of this instance opened.
    LightboxOpened,
    LightboxClosed,
    /// An animated move finished and the engine settled.
    Settled(Settle),
}

#[derive(Debug)]
pub struct State {
    section: usize,
    engine: CarouselEngine,
    options: CarouselOptions,
    sources: Vec<SlideSource>,
    images: Vec<SlideImage>,
    autoplay: AutoplayTimer,
    animator: TransitionAnimator,
    lightbox: Lightbox,
    /// Offset currently drawn, in percent; lags the engine while animating.
    offset: f32,
}

impl State {
    /// Builds a carousel inside the section named by `locator`.
    ///
    /// Returns the instance together with the task preloading its remote
    /// slides, or `None` after logging why construction was aborted.
    pub fn mount(
        page: &Page,
        locator: &str,
        sources: Vec<SlideSource>,
        options: CarouselOptions,
        container_width: f32,
        now: Instant,
    ) -> Option<(Self, Task<Message>)> {
        match Self::try_mount(page, locator, sources, options, container_width, now) {
            Ok(state) => {
                let preload = state.preload();
                Some((state, preload))
            }
            Err(err) => {
                log::error!("Carousel {locator:?} not created: {err}");
                None
            }
        }
    }

    /// Fallible construction behind [`State::mount`].
    pub fn try_mount(
        page: &Page,
        locator: &str,
        sources: Vec<SlideSource>,
        options: CarouselOptions,
        container_width: f32,
        now: Instant,
    ) -> Result<Self> {
        let section = page.resolve(locator)?;
        let sequence =
            RenderSequence::new(sources.len(), options.clone_count).ok_or(MountError::NoSlides)?;

        let engine = CarouselEngine::new(sequence, container_width);
        let images = sources.iter().map(SlideImage::for_source).collect();
        let mut autoplay = AutoplayTimer::new(options.autoplay, options.delay);
        autoplay.start(now);

        log::debug!(
            "Mounted carousel in #{} with {} slides ({} clones per side)",
            page.sections()[section].id,
            sources.len(),
            engine.sequence().clone_count()
        );

        Ok(Self {
            section,
            offset: engine.offset_percent(),
            animator: TransitionAnimator::new(options.transition, options.easing),
            lightbox: Lightbox::new(options.lightbox),
            engine,
            sources,
            images,
            autoplay,
            options,
        })
    }

    /// Fetches every remote slide at once.
    fn preload(&self) -> Task<Message> {
        let fetches: Vec<_> = self
            .sources
            .iter()
            .enumerate()
            .filter_map(|(slide, source)| match source {
                SlideSource::Url(url) => Some(Task::perform(
                    media::fetch_image(url.clone()),
                    move |result| Message::SlideFetched { slide, result },
                )),
                SlideSource::Path(_) => None,
            })
            .collect();

        Task::batch(fetches)
    }

    pub fn handle_message(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::ControlPressed(control) => {
                let motion = match (control, self.options.direction.is_mirrored()) {
                    (Control::Next, false) | (Control::Previous, true) => self.engine.advance(),
                    (Control::Previous, false) | (Control::Next, true) => self.engine.retreat(),
                };
                self.apply_motion(motion, now);
                // Restarts even while the pointer is over the carousel.
                self.autoplay.restart(now);
                Effect::None
            }
            Message::DotPressed(index) => {
                let motion = self.engine.go_to(index);
                self.apply_motion(motion, now);
                self.autoplay.restart(now);
                Effect::None
            }
            Message::SlidePressed(slide) => {
                if slide < self.sources.len() && self.lightbox.open(slide) {
                    self.autoplay.stop();
                    Effect::LightboxOpened
                } else {
                    Effect::None
                }
            }
            Message::LightboxClosed => {
                if self.lightbox.close() {
                    self.autoplay.start(now);
                    Effect::LightboxClosed
                } else {
                    Effect::None
                }
            }
            Message::PointerEntered => {
                self.autoplay.stop();
                Effect::None
            }
            Message::PointerLeft => {
                // The lightbox covers the carousel; it owns autoplay until closed.
                if !self.lightbox.is_open() {
                    self.autoplay.start(now);
                }
                Effect::None
            }
            Message::AutoplayTick(now) => {
                if self.autoplay.poll(now) {
                    let motion = self.engine.advance();
                    self.apply_motion(motion, now);
                }
                Effect::None
            }
            Message::AnimationFrame(now) => self.step_animation(now),
            Message::ContainerResized(width) => {
                self.resize(width);
                Effect::None
            }
            Message::SlideFetched { slide, result } => {
                self.store_fetched(slide, result);
                Effect::None
            }
        }
    }

    fn apply_motion(&mut self, motion: Motion, now: Instant) {
        match motion {
            Motion::Animated { .. } => {
                let target = self.engine.offset_percent();
                self.animator.start(self.offset, target, now);
            }
            Motion::Snapped { .. } => {
                self.offset = self.engine.offset_percent();
            }
            Motion::Ignored => {}
        }
    }

    fn step_animation(&mut self, now: Instant) -> Effect {
        let Some(frame) = self.animator.sample(now) else {
            return Effect::None;
        };
        self.offset = frame.offset;
        if !frame.finished {
            return Effect::None;
        }

        let settle = self.engine.on_transition_settled();
        // A wrap teleports to the matching real slide without animation.
        self.offset = self.engine.offset_percent();
        Effect::Settled(settle)
    }

    fn resize(&mut self, width: f32) {
        let motion = self.engine.resize(width);
        if !matches!(motion, Motion::Snapped { .. }) {
            return;
        }
        if self.animator.finish().is_some() {
            self.engine.on_transition_settled();
        }
        self.offset = self.engine.offset_percent();
    }

    fn store_fetched(&mut self, slide: usize, result: Result<Handle>) {
        let Some(image) = self.images.get_mut(slide) else {
            return;
        };
        *image = match result {
            Ok(handle) => SlideImage::Ready(handle),
            Err(err) => {
                log::warn!("Failed to load slide {}: {err}", self.sources[slide]);
                SlideImage::Broken
            }
        };
    }

    /// Section index the carousel lives in.
    #[must_use]
    pub fn section(&self) -> usize {
        self.section
    }

    #[must_use]
    pub fn engine(&self) -> &CarouselEngine {
        &self.engine
    }

    #[must_use]
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    #[must_use]
    pub fn sources(&self) -> &[SlideSource] {
        &self.sources
    }

    #[must_use]
    pub fn image(&self, slide: usize) -> Option<&SlideImage> {
        self.images.get(slide)
    }

    /// Offset currently drawn, in percent of the container width.
    #[must_use]
    pub fn displayed_offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    #[must_use]
    pub fn autoplay(&self) -> &AutoplayTimer {
        &self.autoplay
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    #[must_use]
    pub fn active_dot(&self) -> usize {
        self.engine.active_dot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::page::Section;
    use crate::carousel::LayoutDirection;
    use crate::error::{Error, FetchError};
    use std::path::PathBuf;
    use std::time::Duration;

    const WIDE: f32 = 1200.0;

    fn page() -> Page {
        Page::new(vec![Section {
            id: "gallery".into(),
            title: "Gallery".into(),
        }])
    }

    fn sources(count: usize) -> Vec<SlideSource> {
        (0..count)
            .map(|i| SlideSource::Path(PathBuf::from(format!("slide-{i}.jpg"))))
            .collect()
    }

    fn mounted(count: usize, options: CarouselOptions, now: Instant) -> State {
        State::try_mount(&page(), "#gallery", sources(count), options, WIDE, now)
            .expect("carousel should mount")
    }

    /// Runs frames until the running animation settles.
    fn settle(state: &mut State, now: Instant) -> Effect {
        let end = now + state.options.transition;
        state.handle_message(Message::AnimationFrame(end), end)
    }

    #[test]
    fn mount_starts_at_first_real_slide_with_autoplay() {
        let now = Instant::now();
        let state = mounted(6, CarouselOptions::default(), now);
        assert_eq!(state.engine().position(), 3);
        assert_eq!(state.active_dot(), 0);
        assert!((state.displayed_offset() + 100.0).abs() < 1e-3);
        assert_eq!(
            state.autoplay().next_deadline(),
            Some(now + Duration::from_millis(3000))
        );
    }

    #[test]
    fn mount_aborts_on_unknown_container() {
        let result = State::mount(
            &page(),
            "#nowhere",
            sources(3),
            CarouselOptions::default(),
            WIDE,
            Instant::now(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn mount_aborts_on_empty_slides() {
        let err = State::try_mount(
            &page(),
            "gallery",
            Vec::new(),
            CarouselOptions::default(),
            WIDE,
            Instant::now(),
        )
        .map(|_| ())
        .unwrap_err();
        assert_eq!(err, Error::Mount(MountError::NoSlides));
    }

    #[test]
    fn next_control_animates_then_settles() {
        let now = Instant::now();
        let mut state = mounted(6, CarouselOptions::default(), now);

        state.handle_message(Message::ControlPressed(Control::Next), now);
        assert!(state.is_animating());
        assert!(state.engine().is_transitioning());

        // Second press while in flight is dropped.
        state.handle_message(Message::ControlPressed(Control::Next), now);
        assert_eq!(state.engine().position(), 4);

        let effect = settle(&mut state, now);
        assert_eq!(effect, Effect::Settled(Settle::InPlace { at: 4 }));
        assert!(!state.engine().is_transitioning());
        assert_eq!(state.active_dot(), 1);
    }

    #[test]
    fn previous_from_first_slide_wraps_to_last() {
        let now = Instant::now();
        let mut state = mounted(6, CarouselOptions::default(), now);

        state.handle_message(Message::ControlPressed(Control::Previous), now);
        let effect = settle(&mut state, now);

        assert_eq!(effect, Effect::Settled(Settle::Wrapped { from: 2, to: 8 }));
        assert_eq!(state.active_dot(), 5);
        let expected = state.engine().offset_percent();
        assert!((state.displayed_offset() - expected).abs() < 1e-3);
    }

    fn rtl_options() -> CarouselOptions {
        CarouselOptions {
            direction: LayoutDirection::Rtl,
            ..CarouselOptions::default()
        }
    }

    #[test]
    fn rtl_swaps_control_mapping() {
        let now = Instant::now();
        let mut state = mounted(4, rtl_options(), now);

        state.handle_message(Message::ControlPressed(Control::Next), now);
        assert_eq!(state.engine().position(), 2);
    }

    #[test]
    fn rtl_previous_control_advances() {
        let now = Instant::now();
        let mut state = mounted(4, rtl_options(), now);

        state.handle_message(Message::ControlPressed(Control::Previous), now);
        assert_eq!(state.engine().position(), 4);
        settle(&mut state, now);
        assert_eq!(state.active_dot(), 1);
    }

    #[test]
    fn control_restarts_autoplay_while_hovered() {
        let now = Instant::now();
        let mut state = mounted(4, CarouselOptions::default(), now);

        state.handle_message(Message::PointerEntered, now);
        assert!(!state.autoplay().is_running());

        let click = now + Duration::from_millis(200);
        state.handle_message(Message::ControlPressed(Control::Next), click);
        assert_eq!(
            state.autoplay().next_deadline(),
            Some(click + Duration::from_millis(3000))
        );
    }

    #[test]
    fn interaction_restarts_the_autoplay_countdown() {
        let start = Instant::now();
        let mut state = mounted(5, CarouselOptions::default(), start);

        let later = start + Duration::from_millis(2500);
        state.handle_message(Message::DotPressed(2), later);
        assert_eq!(
            state.autoplay().next_deadline(),
            Some(later + Duration::from_millis(3000))
        );
    }

    #[test]
    fn autoplay_tick_advances_when_due() {
        let start = Instant::now();
        let mut state = mounted(5, CarouselOptions::default(), start);

        state.handle_message(Message::AutoplayTick(start + Duration::from_millis(100)), start);
        assert!(!state.engine().is_transitioning());

        let due = start + Duration::from_millis(3000);
        state.handle_message(Message::AutoplayTick(due), due);
        assert!(state.engine().is_transitioning());
    }

    #[test]
    fn hover_pauses_and_resumes_autoplay() {
        let now = Instant::now();
        let mut state = mounted(3, CarouselOptions::default(), now);

        state.handle_message(Message::PointerEntered, now);
        assert!(!state.autoplay().is_running());

        state.handle_message(Message::PointerLeft, now);
        assert!(state.autoplay().is_running());
    }

    #[test]
    fn lightbox_stops_and_restarts_autoplay() {
        let now = Instant::now();
        let mut state = mounted(3, CarouselOptions::default(), now);

        assert_eq!(
            state.handle_message(Message::SlidePressed(1), now),
            Effect::LightboxOpened
        );
        assert_eq!(state.lightbox().current(), Some(1));
        assert!(!state.autoplay().is_running());

        // Leaving the carousel under the overlay keeps autoplay paused.
        state.handle_message(Message::PointerLeft, now);
        assert!(!state.autoplay().is_running());

        assert_eq!(
            state.handle_message(Message::LightboxClosed, now),
            Effect::LightboxClosed
        );
        assert!(state.autoplay().is_running());
    }

    #[test]
    fn clone_click_opens_lightbox_on_mirrored_slide() {
        let now = Instant::now();
        let mut state = mounted(5, CarouselOptions::default(), now);
        let sequence = state.engine().sequence().clone();

        let leading = sequence.get(0).expect("leading clone");
        let trailing = sequence.get(sequence.len() - 1).expect("trailing clone");
        assert_eq!(leading.source, 2);
        assert_eq!(trailing.source, 2);

        for clone in [leading, trailing] {
            assert_eq!(
                state.handle_message(Message::SlidePressed(clone.source), now),
                Effect::LightboxOpened
            );
            assert_eq!(state.lightbox().current(), Some(2));
            state.handle_message(Message::LightboxClosed, now);
        }

        let real = sequence.get(sequence.first_real() + 2).expect("real slide");
        assert_eq!(real.source, 2);
    }

    #[test]
    fn disabled_lightbox_ignores_slide_clicks() {
        let now = Instant::now();
        let options = CarouselOptions {
            lightbox: false,
            ..CarouselOptions::default()
        };
        let mut state = mounted(3, options, now);
        assert_eq!(
            state.handle_message(Message::SlidePressed(0), now),
            Effect::None
        );
        assert!(state.autoplay().is_running());
    }

    #[test]
    fn resize_across_breakpoint_settles_running_move() {
        let now = Instant::now();
        let mut state = mounted(6, CarouselOptions::default(), now);

        state.handle_message(Message::ControlPressed(Control::Next), now);
        state.handle_message(Message::ContainerResized(600.0), now);

        assert!(!state.is_animating());
        assert!(!state.engine().is_transitioning());
        assert_eq!(state.engine().slides_per_view().value(), 1);
        assert!((state.displayed_offset() + 400.0).abs() < 1e-3);
    }

    #[test]
    fn resize_within_breakpoint_keeps_animation() {
        let now = Instant::now();
        let mut state = mounted(6, CarouselOptions::default(), now);

        state.handle_message(Message::ControlPressed(Control::Next), now);
        state.handle_message(Message::ContainerResized(1300.0), now);
        assert!(state.is_animating());
    }

    #[test]
    fn failed_fetch_marks_slide_broken() {
        let now = Instant::now();
        let mut state = mounted(2, CarouselOptions::default(), now);

        state.handle_message(
            Message::SlideFetched {
                slide: 1,
                result: Err(FetchError::Status(404).into()),
            },
            now,
        );
        assert!(matches!(state.image(1), Some(SlideImage::Broken)));

        // Out-of-range results are ignored.
        state.handle_message(
            Message::SlideFetched {
                slide: 9,
                result: Err(FetchError::Status(500).into()),
            },
            now,
        );
    }
}
