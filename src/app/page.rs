// SPDX-License-Identifier: MPL-2.0
//! The scrolling page: an ordered list of named sections.
//!
//! Sections are the containers carousels mount into. A container locator is a
//! section id, optionally written with a leading `#`.

use crate::config::SectionConfig;
use crate::error::{MountError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    sections: Vec<Section>,
}

impl Page {
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Builds the page from configured sections, skipping duplicate ids.
    #[must_use]
    pub fn from_config(sections: &[SectionConfig]) -> Self {
        let mut page = Self::default();
        for section in sections {
            if page.sections.iter().any(|existing| existing.id == section.id) {
                log::warn!("Ignoring duplicate section id {:?}", section.id);
                continue;
            }
            page.sections.push(Section {
                id: section.id.clone(),
                title: section.title.clone(),
            });
        }
        page
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }

    /// Index of the section named by `locator`.
    pub fn resolve(&self, locator: &str) -> Result<usize> {
        let id = locator.trim();
        let id = id.strip_prefix('#').unwrap_or(id);

        self.sections
            .iter()
            .position(|section| !id.is_empty() && section.id == id)
            .ok_or_else(|| MountError::ContainerNotFound(locator.to_string()).into())
    }
}
