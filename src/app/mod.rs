// SPDX-License-Identifier: MPL-2.0
//! Application root state: the page of sections and the carousels mounted
//! into them.
//!
//! The `App` struct builds every carousel at boot from configuration (or from
//! images given on the command line), routes window, timer and frame events to
//! them, and renders the page with an optional lightbox on top.

mod message;
pub mod page;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use page::{Page, Section};

use crate::carousel::LayoutDirection;
use crate::config::{self, CarouselSettings, Config, ThemeMode};
use crate::media::SlideSource;
use crate::ui::carousel;
use crate::ui::design_tokens::{sizing, spacing};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    page: Page,
    carousels: Vec<carousel::State>,
    window_width: f32,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("sections", &self.page.sections().len())
            .field("carousels", &self.carousels.len())
            .field("window_width", &self.window_width)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Width available to a carousel inside a section for a given window width.
#[must_use]
pub fn content_width(window_width: f32) -> f32 {
    (window_width.min(sizing::SECTION_MAX_WIDTH) - 2.0 * spacing::LG).max(0.0)
}

/// One carousel to build at boot.
#[derive(Debug, Clone, PartialEq)]
pub struct MountPlan {
    pub locator: String,
    pub sources: Vec<SlideSource>,
    pub settings: CarouselSettings,
}

/// Decides which carousels to mount from configuration and CLI flags.
///
/// Images given on the command line replace the configured carousels with a
/// single one in the first section. CLI option flags override every carousel.
#[must_use]
pub fn plan_carousels(config: &Config, flags: &Flags, page: &Page) -> Vec<MountPlan> {
    let cli = CarouselSettings {
        delay_ms: flags.delay_ms,
        autoplay: flags.no_autoplay.then_some(false),
        direction: flags.rtl.then_some(LayoutDirection::Rtl),
        ..CarouselSettings::default()
    };

    let entries: Vec<(String, &[String], CarouselSettings)> = if flags.images.is_empty() {
        config
            .carousels
            .iter()
            .map(|entry| {
                (
                    entry.container.clone(),
                    entry.images.as_slice(),
                    config.carousel.merged_with(&entry.overrides),
                )
            })
            .collect()
    } else {
        let locator = page
            .first()
            .map(|section| section.id.clone())
            .unwrap_or_default();
        vec![(locator, flags.images.as_slice(), config.carousel.clone())]
    };

    entries
        .into_iter()
        .filter_map(|(locator, images, settings)| {
            match SlideSource::parse_all(images) {
                Ok(sources) => Some(MountPlan {
                    locator,
                    sources,
                    settings: settings.merged_with(&cli),
                }),
                Err(err) => {
                    log::error!("Carousel {locator:?} not created: {err}");
                    None
                }
            }
        })
        .collect()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        if !paths::init_cli_override(flags.config_dir.clone()) {
            log::warn!("Config directory override was already set");
        }

        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }

        let page = Page::from_config(&config.sections);
        let window_width = WINDOW_DEFAULT_WIDTH as f32;
        let mut app = App {
            page,
            carousels: Vec::new(),
            window_width,
            theme_mode: config.general.theme,
        };

        let task = app.mount_all(plan_carousels(&config, &flags, &app.page), Instant::now());
        (app, task)
    }

    /// Builds every planned carousel and batches their preload tasks.
    fn mount_all(&mut self, plans: Vec<MountPlan>, now: Instant) -> Task<Message> {
        let width = content_width(self.window_width);
        let mut tasks = Vec::new();

        for plan in plans {
            let options = match plan.settings.resolve() {
                Ok(options) => options,
                Err(err) => {
                    log::error!("Carousel {:?} not created: {err}", plan.locator);
                    continue;
                }
            };

            if let Some((state, preload)) =
                carousel::State::mount(&self.page, &plan.locator, plan.sources, options, width, now)
            {
                let index = self.carousels.len();
                self.carousels.push(state);
                tasks.push(preload.map(move |message| Message::Carousel { index, message }));
            }
        }

        log::info!("Mounted {} carousel(s)", self.carousels.len());
        Task::batch(tasks)
    }

    fn title(&self) -> String {
        let slides: usize = self
            .carousels
            .iter()
            .map(|carousel| carousel.sources().len())
            .sum();
        format!("Iced Carousel - {slides} slides")
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message, Instant::now());
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.page, &self.carousels)
    }

    fn subscription(&self) -> Subscription<Message> {
        let autoplay_running = self
            .carousels
            .iter()
            .any(|carousel| carousel.autoplay().is_running());
        let animating = self.carousels.iter().any(carousel::State::is_animating);

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(autoplay_running),
            subscription::create_frame_subscription(animating),
        ])
    }

    /// Mounted carousels, in mount order.
    #[must_use]
    pub fn carousels(&self) -> &[carousel::State] {
        &self.carousels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CarouselEntry, SectionConfig};

    fn config_with_entry(container: &str, images: &[&str]) -> Config {
        Config {
            sections: vec![
                SectionConfig {
                    id: "hero".into(),
                    title: "Hero".into(),
                },
                SectionConfig {
                    id: "gallery".into(),
                    title: "Gallery".into(),
                },
            ],
            carousels: vec![CarouselEntry {
                container: container.into(),
                images: images.iter().map(|s| (*s).to_string()).collect(),
                overrides: CarouselSettings {
                    delay_ms: Some(4000),
                    ..CarouselSettings::default()
                },
            }],
            ..Config::default()
        }
    }

    #[test]
    fn configured_carousels_are_planned() {
        let config = config_with_entry("#gallery", &["a.jpg", "b.jpg"]);
        let page = Page::from_config(&config.sections);
        let plans = plan_carousels(&config, &Flags::default(), &page);

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].locator, "#gallery");
        assert_eq!(plans[0].sources.len(), 2);
        assert_eq!(plans[0].settings.delay_ms, Some(4000));
    }

    #[test]
    fn cli_images_replace_configured_carousels() {
        let config = config_with_entry("#gallery", &["a.jpg"]);
        let page = Page::from_config(&config.sections);
        let flags = Flags {
            images: vec!["x.jpg".into(), "y.jpg".into(), "z.jpg".into()],
            rtl: true,
            ..Flags::default()
        };
        let plans = plan_carousels(&config, &flags, &page);

        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].locator, "hero");
        assert_eq!(plans[0].sources.len(), 3);
        assert_eq!(plans[0].settings.direction, Some(LayoutDirection::Rtl));
        // Per-entry overrides belong to the replaced carousels only.
        assert_eq!(plans[0].settings.delay_ms, None);
    }

    #[test]
    fn cli_flags_override_entry_settings() {
        let config = config_with_entry("gallery", &["a.jpg"]);
        let page = Page::from_config(&config.sections);
        let flags = Flags {
            delay_ms: Some(1500),
            no_autoplay: true,
            ..Flags::default()
        };
        let plans = plan_carousels(&config, &flags, &page);

        assert_eq!(plans[0].settings.delay_ms, Some(1500));
        assert_eq!(plans[0].settings.autoplay, Some(false));
    }

    #[test]
    fn invalid_sources_skip_the_carousel() {
        let config = config_with_entry("gallery", &["a.jpg", "ftp://host/b.jpg"]);
        let page = Page::from_config(&config.sections);
        assert!(plan_carousels(&config, &Flags::default(), &page).is_empty());
    }

    #[test]
    fn content_width_respects_section_padding_and_cap() {
        assert!((content_width(800.0) - 752.0).abs() < f32::EPSILON);
        assert!((content_width(4000.0) - 1232.0).abs() < f32::EPSILON);
        assert!(content_width(10.0).abs() < f32::EPSILON);
    }
}
