// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is an infinite image carousel built with the Iced GUI framework.
//!
//! Slides loop seamlessly by framing the real slides with clones on both sides
//! and teleporting back into the real range after each animated move. The
//! engine is pure state ([`carousel`]); [`ui::carousel`] renders it and wires
//! autoplay, dots, arrows and the lightbox; [`app`] hosts any number of
//! independent instances on a page of sections.

#![doc(html_root_url = "https://docs.rs/iced_carousel/0.1.0")]

pub mod app;
pub mod carousel;
pub mod config;
pub mod error;
pub mod media;
pub mod ui;
