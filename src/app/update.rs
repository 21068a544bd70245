// SPDX-License-Identifier: MPL-2.0
//! Update logic: routes host events to the carousels and coordinates them.

use super::{content_width, App, Message};
use crate::ui::carousel::{self, Effect};
use std::time::Instant;

pub(super) fn update(app: &mut App, message: Message, now: Instant) {
    match message {
        Message::Carousel { index, message } => dispatch(app, index, message, now),
        Message::WindowResized(size) => {
            app.window_width = size.width;
            let width = content_width(size.width);
            broadcast(app, now, |_| Some(carousel::Message::ContainerResized(width)));
        }
        Message::Tick(tick) => {
            broadcast(app, now, |state| {
                state
                    .autoplay()
                    .is_running()
                    .then_some(carousel::Message::AutoplayTick(tick))
            });
        }
        Message::Frame(frame) => {
            broadcast(app, now, |state| {
                state
                    .is_animating()
                    .then_some(carousel::Message::AnimationFrame(frame))
            });
        }
        Message::EscapePressed => {
            broadcast(app, now, |state| {
                state
                    .lightbox()
                    .is_open()
                    .then_some(carousel::Message::LightboxClosed)
            });
        }
    }
}

fn broadcast(
    app: &mut App,
    now: Instant,
    message_for: impl Fn(&carousel::State) -> Option<carousel::Message>,
) {
    for index in 0..app.carousels.len() {
        if let Some(message) = message_for(&app.carousels[index]) {
            dispatch(app, index, message, now);
        }
    }
}

fn dispatch(app: &mut App, index: usize, message: carousel::Message, now: Instant) {
    let Some(state) = app.carousels.get_mut(index) else {
        return;
    };

    match state.handle_message(message, now) {
        Effect::LightboxOpened => {
            // Only one lightbox covers the window at a time.
            for (other, state) in app.carousels.iter_mut().enumerate() {
                if other != index && state.lightbox().is_open() {
                    state.handle_message(carousel::Message::LightboxClosed, now);
                }
            }
        }
        Effect::Settled(settle) => {
            log::trace!("carousel {index} settled at {}", settle.position());
        }
        Effect::LightboxClosed | Effect::None => {}
    }
}
