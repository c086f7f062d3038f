//! Static song catalog.
//!
//! Entries are `"Title-Artist"` strings fixed at build time. They are
//! only split into title and artist when the display engine draws them.

use crate::error::{Error, Result};

/// One catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SongRecord(&'static str);

impl SongRecord {
    pub const fn new(raw: &'static str) -> Self {
        Self(raw)
    }

    /// The entry as stored, `"Title-Artist"`.
    pub fn raw(&self) -> &'static str {
        self.0
    }

    /// Split at the first `-`. Leading spaces are trimmed from the artist;
    /// no separator yields an empty artist.
    pub fn split(&self) -> (&'static str, &'static str) {
        match self.0.split_once('-') {
            Some((title, artist)) => (title, artist.trim_start_matches(' ')),
            None => (self.0, ""),
        }
    }

    /// Text before the first `-`.
    pub fn title(&self) -> &'static str {
        self.split().0
    }

    /// Text after the first `-`, leading spaces trimmed.
    pub fn artist(&self) -> &'static str {
        self.split().1
    }
}

/// Ordered, read-only, non-empty list of songs.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    entries: &'static [&'static str],
}

impl Catalog {
    /// Build a catalog, rejecting an empty list.
    pub fn new(entries: &'static [&'static str]) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        Ok(Self { entries })
    }

    /// Compile-time variant of [`Catalog::new`]; an empty list fails the build.
    pub const fn from_static(entries: &'static [&'static str]) -> Self {
        assert!(!entries.is_empty(), "song catalog is empty");
        Self { entries }
    }

    /// Number of songs. Always at least 1.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: both constructors reject an empty list.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, taken modulo the catalog size so any index is valid.
    pub fn get(&self, index: usize) -> SongRecord {
        SongRecord(self.entries[index % self.entries.len()])
    }

    /// Songs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = SongRecord> + '_ {
        self.entries.iter().map(|&raw| SongRecord(raw))
    }
}
