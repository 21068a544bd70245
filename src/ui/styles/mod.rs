// SPDX-License-Identifier: MPL-2.0
//! Styles shared by the carousel widgets.

pub mod button;
pub mod container;
pub mod overlay;
