// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window size and the Escape key are always routed. The autoplay tick only
//! runs while at least one carousel has a pending deadline, and animation
//! frames only while a transition is in flight.

use super::Message;
use crate::config::AUTOPLAY_POLL_MS;
use iced::keyboard::{self, key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window size changes and Escape presses.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => match status {
            event::Status::Ignored => Some(Message::EscapePressed),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Creates the periodic tick polling autoplay deadlines.
pub fn create_tick_subscription(autoplay_running: bool) -> Subscription<Message> {
    if autoplay_running {
        time::every(Duration::from_millis(AUTOPLAY_POLL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the per-frame subscription driving slide transitions.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
