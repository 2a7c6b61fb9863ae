// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Domain models and core data structures.
//!
//! This module defines the central entities of the playlist: song entries and
//! the numbered subsong entries they own, together with the classification
//! types (ROM requirement, status tag) used to decide what can be played.

mod store;

use std::{
    fmt,
    path::{Path, PathBuf},
    time::Duration,
};

pub use store::EntryStore;

use crate::util::format::format_time;

/// Stable identity of a playlist entry.
///
/// Identifiers are allocated from a per-store counter and never reused, so an
/// id that outlives its entry simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub(crate) u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position of an entry in the two-level playlist tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A root-level song.
    Song,
    /// A numbered subsong, linked back to the song that owns it.
    Subsong { parent: EntryId },
}

/// ROM images a tune needs in order to play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RomRequirement {
    #[default]
    None,
    BasicRom,
    OtherRom,
}

/// Status tag applied to an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemTag {
    #[default]
    Normal,
    /// Too short to be worth playing automatically.
    ShortDuration,
    /// Excluded from playback.
    Blacklisted,
}

/// Everything needed to create a song entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongInfo {
    pub title: String,
    pub filepath: PathBuf,
    /// 1-based index of the subsong the tune starts at, 0 when unknown.
    pub default_subsong: u32,
    pub duration: Duration,
    pub author: String,
    pub rom_requirement: RomRequirement,
    /// Whether the tune can be played at all, including ROM availability.
    pub playable: bool,
}

impl SongInfo {
    pub fn new(title: impl Into<String>, filepath: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            filepath: filepath.into(),
            default_subsong: 1,
            duration: Duration::ZERO,
            author: String::default(),
            rom_requirement: RomRequirement::None,
            playable: true,
        }
    }
}

/// A node in the playlist tree, either a song or one of its subsongs.
#[derive(Debug, Clone)]
pub struct Entry {
    pub(crate) id: EntryId,
    pub(crate) kind: EntryKind,
    pub(crate) title: String,
    pub(crate) filepath: PathBuf,
    pub(crate) subsong: u32,
    pub(crate) duration: Duration,
    pub(crate) author: String,
    pub(crate) rom_requirement: RomRequirement,
    pub(crate) playable: bool,
    pub(crate) tag: ItemTag,
    pub(crate) default_subsong: u32,
    pub(crate) subsongs: Vec<Entry>,
    pub(crate) subsong_count: u32,
}

impl Entry {
    pub(crate) fn song(id: EntryId, info: SongInfo) -> Self {
        Self {
            id,
            kind: EntryKind::Song,
            title: info.title,
            filepath: info.filepath,
            subsong: 0,
            duration: info.duration,
            author: info.author,
            rom_requirement: info.rom_requirement,
            playable: info.playable,
            tag: ItemTag::Normal,
            default_subsong: info.default_subsong,
            subsongs: vec![],
            subsong_count: 0,
        }
    }

    pub(crate) fn subsong_of(parent: &Entry, id: EntryId, index: u32, duration: Duration) -> Self {
        Self {
            id,
            kind: EntryKind::Subsong { parent: parent.id },
            title: format!("{}: Subsong {}", parent.title, index),
            filepath: parent.filepath.clone(),
            subsong: index,
            duration,
            author: String::default(),
            rom_requirement: parent.rom_requirement,
            playable: parent.playable,
            tag: ItemTag::Normal,
            default_subsong: 0,
            subsongs: vec![],
            subsong_count: 0,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn filepath(&self) -> &Path {
        &self.filepath
    }

    /// The 1-based subsong index, or 0 for a song entry.
    pub fn subsong_index(&self) -> u32 {
        self.subsong
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Duration formatted for the duration column.
    pub fn duration_text(&self) -> String {
        format_time(self.duration.as_secs())
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn rom_requirement(&self) -> RomRequirement {
        self.rom_requirement
    }

    pub fn tag(&self) -> ItemTag {
        self.tag
    }

    pub fn default_subsong(&self) -> u32 {
        self.default_subsong
    }

    pub fn is_song(&self) -> bool {
        matches!(self.kind, EntryKind::Song)
    }

    pub fn is_subsong(&self) -> bool {
        matches!(self.kind, EntryKind::Subsong { .. })
    }

    /// The owning song of a subsong.
    pub fn parent(&self) -> Option<EntryId> {
        match self.kind {
            EntryKind::Song => None,
            EntryKind::Subsong { parent } => Some(parent),
        }
    }

    /// Playable entries may become active. Blacklisting overrides the flag.
    pub fn is_playable(&self) -> bool {
        self.playable && self.tag != ItemTag::Blacklisted
    }

    /// Auto-playable entries are the ones traversal stops at.
    pub fn is_auto_playable(&self) -> bool {
        self.is_playable() && self.tag != ItemTag::ShortDuration
    }

    /// Subsongs in index order. Empty for subsong entries.
    pub fn subsongs(&self) -> &[Entry] {
        &self.subsongs
    }

    /// Number of subsongs created for this song, i.e. its highest index.
    pub fn subsong_count(&self) -> u32 {
        self.subsong_count
    }

    /// Looks up a subsong by its 1-based index.
    pub fn subsong(&self, index: u32) -> Option<&Entry> {
        self.subsongs.iter().find(|s| s.subsong == index)
    }

    /// True for a subsong whose index is its song's default subsong.
    pub(crate) fn is_default_subsong_of(&self, parent: &Entry) -> bool {
        self.is_subsong() && self.subsong == parent.default_subsong
    }

    /// True when this entry or any of its subsongs needs a ROM image.
    pub(crate) fn requires_rom(&self) -> bool {
        self.rom_requirement != RomRequirement::None
            || self
                .subsongs
                .iter()
                .any(|s| s.rom_requirement != RomRequirement::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(playable: bool, tag: ItemTag) -> Entry {
        let mut entry = Entry::song(
            EntryId(1),
            SongInfo {
                playable,
                ..SongInfo::new("Commando", "/music/Commando.sid")
            },
        );
        entry.tag = tag;
        entry
    }

    #[test]
    fn test_playable_requires_flag_and_no_blacklist() {
        assert!(entry(true, ItemTag::Normal).is_playable());
        assert!(entry(true, ItemTag::ShortDuration).is_playable());
        assert!(!entry(true, ItemTag::Blacklisted).is_playable());
        assert!(!entry(false, ItemTag::Normal).is_playable());
    }

    #[test]
    fn test_short_duration_is_not_auto_playable() {
        assert!(entry(true, ItemTag::Normal).is_auto_playable());
        assert!(!entry(true, ItemTag::ShortDuration).is_auto_playable());
        assert!(!entry(false, ItemTag::Normal).is_auto_playable());
    }

    #[test]
    fn test_subsong_inherits_from_parent() {
        let parent = Entry::song(
            EntryId(1),
            SongInfo {
                rom_requirement: RomRequirement::BasicRom,
                playable: false,
                ..SongInfo::new("Delta", "/music/Delta.sid")
            },
        );
        let subsong = Entry::subsong_of(&parent, EntryId(2), 3, Duration::from_secs(95));

        assert_eq!(subsong.title(), "Delta: Subsong 3");
        assert_eq!(subsong.filepath(), Path::new("/music/Delta.sid"));
        assert_eq!(subsong.subsong_index(), 3);
        assert_eq!(subsong.parent(), Some(EntryId(1)));
        assert_eq!(subsong.rom_requirement(), RomRequirement::BasicRom);
        assert!(!subsong.is_playable());
        assert_eq!(subsong.duration_text(), "01:35");
    }
}
