// SPDX-License-Identifier: MPL-2.0
//! Slide media: image references and background preloading.

pub mod preload;
pub mod source;

pub use preload::fetch_image;
pub use source::{SlideImage, SlideSource};
