// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::{plan_carousels, Flags, Page};
use iced_carousel::carousel::{CarouselOptions, LayoutDirection, Settle};
use iced_carousel::config::{self, CarouselEntry, CarouselSettings, Config, SectionConfig};
use iced_carousel::error::{Error, FetchError};
use iced_carousel::media::{fetch_image, SlideSource};
use iced_carousel::ui::carousel::{Control, Effect, Message, State};
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn sources(count: usize) -> Vec<SlideSource> {
    (0..count)
        .map(|i| format!("photos/{i}.jpg").parse().expect("path source"))
        .collect()
}

fn gallery_page() -> Page {
    Page::from_config(&[SectionConfig {
        id: "gallery".to_string(),
        title: "Gallery".to_string(),
    }])
}

#[test]
fn test_config_round_trip_drives_carousel_options() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        carousel: CarouselSettings {
            delay_ms: Some(2000),
            round_corner: Some("6px".to_string()),
            ..CarouselSettings::default()
        },
        carousels: vec![CarouselEntry {
            container: "#gallery".to_string(),
            images: vec!["a.jpg".to_string(), "https://example.com/b.jpg".to_string()],
            overrides: CarouselSettings {
                direction: Some(LayoutDirection::Rtl),
                ..CarouselSettings::default()
            },
        }],
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, config);

    let options = loaded
        .carousel
        .merged_with(&loaded.carousels[0].overrides)
        .resolve()
        .expect("options should resolve");
    assert_eq!(options.delay, Duration::from_millis(2000));
    assert_eq!(options.direction, LayoutDirection::Rtl);
    assert!((options.round_corner.pixels() - 6.0).abs() < f32::EPSILON);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_invalid_config_falls_back_to_defaults_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "carousel = [").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_some());
}

#[test]
fn test_planned_carousel_mounts_into_its_section() {
    let config = Config {
        carousels: vec![CarouselEntry {
            container: "#gallery".to_string(),
            images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            overrides: CarouselSettings::default(),
        }],
        ..Config::default()
    };
    let page = Page::from_config(&config.sections);
    let plans = plan_carousels(&config, &Flags::default(), &page);
    assert_eq!(plans.len(), 1);

    let plan = plans.into_iter().next().expect("one plan");
    let options = plan.settings.resolve().expect("options");
    let mounted = State::mount(&page, &plan.locator, plan.sources, options, 1200.0, Instant::now());
    let (state, _preload) = mounted.expect("carousel should mount");

    assert_eq!(state.section(), 0);
    // Two slides clamp the three requested clones to two per side.
    assert_eq!(state.engine().sequence().clone_count(), 2);
    assert_eq!(state.engine().sequence().len(), 6);
}

#[test]
fn test_full_loop_forward_returns_to_first_slide() {
    let start = Instant::now();
    let mut state = State::try_mount(
        &gallery_page(),
        "gallery",
        sources(6),
        CarouselOptions::default(),
        1200.0,
        start,
    )
    .expect("mount");

    let mut now = start;
    let mut wraps = 0;
    for step in 1..=6 {
        state.handle_message(Message::ControlPressed(Control::Next), now);
        now += Duration::from_millis(600);
        if let Effect::Settled(Settle::Wrapped { from, to }) =
            state.handle_message(Message::AnimationFrame(now), now)
        {
            assert_eq!((from, to), (9, 3));
            wraps += 1;
        }
        assert_eq!(state.active_dot(), step % 6);
    }

    assert_eq!(wraps, 1);
    assert_eq!(state.engine().position(), 3);
}

#[test]
fn test_dot_navigation_then_autoplay_resumes_after_hover() {
    let start = Instant::now();
    let mut state = State::try_mount(
        &gallery_page(),
        "#gallery",
        sources(5),
        CarouselOptions::default().with_delay_ms(1000),
        800.0,
        start,
    )
    .expect("mount");

    state.handle_message(Message::DotPressed(3), start);
    let settled = start + Duration::from_millis(500);
    state.handle_message(Message::AnimationFrame(settled), settled);
    assert_eq!(state.active_dot(), 3);

    state.handle_message(Message::PointerEntered, settled);
    let later = settled + Duration::from_secs(5);
    state.handle_message(Message::AutoplayTick(later), later);
    assert_eq!(state.active_dot(), 3);

    state.handle_message(Message::PointerLeft, later);
    let due = later + Duration::from_millis(1000);
    state.handle_message(Message::AutoplayTick(due), due);
    assert!(state.is_animating());
}

#[test]
fn test_missing_container_does_not_mount() {
    let result = State::mount(
        &gallery_page(),
        "#hero",
        sources(3),
        CarouselOptions::default(),
        1200.0,
        Instant::now(),
    );
    assert!(result.is_none());
}

#[tokio::test]
async fn test_unreachable_url_reports_transport_error() {
    // Port 9 (discard) is closed on loopback in test environments.
    let result = fetch_image("http://127.0.0.1:9/slide.jpg".to_string()).await;
    assert!(matches!(result, Err(Error::Fetch(FetchError::Transport(_)))));
}
