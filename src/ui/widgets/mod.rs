// SPDX-License-Identifier: MPL-2.0
pub mod slide_track;

pub use slide_track::{SlideTrack, TrackMetrics};
