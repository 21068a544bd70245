// SPDX-License-Identifier: MPL-2.0
//! Render sequence: the real slides framed by clone blocks.
//!
//! For `N` real slides and clone count `K` the sequence is
//! `[last K as clones] + [N real] + [first K as clones]`, so its length is
//! always `N + 2K`. Entries only reference slides by index; the owner maps
//! them to image handles.

/// One element of the render sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideEntry {
    /// Index of the real slide this entry shows (`0..N`).
    pub source: usize,
}

/// Static layout of real slides and their clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSequence {
    entries: Vec<SlideEntry>,
    real_count: usize,
    clone_count: usize,
}

impl RenderSequence {
    /// Builds the sequence for `real_count` slides.
    ///
    /// The requested clone count is clamped to `1..=real_count` so the two
    /// clone blocks never overlap the same slide twice and the loop always
    /// has a clone to land on. Returns `None` for an empty slide set.
    #[must_use]
    pub fn new(real_count: usize, requested_clones: usize) -> Option<Self> {
        if real_count == 0 {
            return None;
        }
        let clone_count = requested_clones.clamp(1, real_count);

        let leading = real_count - clone_count..real_count;
        let trailing = 0..clone_count;
        let entries = leading
            .chain(0..real_count)
            .chain(trailing)
            .map(|source| SlideEntry { source })
            .collect();

        Some(Self {
            entries,
            real_count,
            clone_count,
        })
    }

    /// Number of real slides (`N`).
    #[must_use]
    pub fn real_count(&self) -> usize {
        self.real_count
    }

    /// Effective clone count per side (`K`).
    #[must_use]
    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    /// Total entries, `N + 2K`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<SlideEntry> {
        self.entries.get(position).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = SlideEntry> + '_ {
        self.entries.iter().copied()
    }

    /// Position of the first real slide (`K`).
    #[must_use]
    pub fn first_real(&self) -> usize {
        self.clone_count
    }

    /// Position of the last real slide (`N + K - 1`).
    #[must_use]
    pub fn last_real(&self) -> usize {
        self.real_count + self.clone_count - 1
    }

    /// Maps a real slide index to its position in the sequence.
    #[must_use]
    pub fn position_of(&self, real_index: usize) -> Option<usize> {
        (real_index < self.real_count).then_some(real_index + self.clone_count)
    }
}
