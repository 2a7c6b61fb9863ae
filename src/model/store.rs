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

//! Ownership and ordering of playlist entries.
//!
//! The store owns the root-level songs in insertion order, and every song owns
//! its subsongs. Entries are addressed by [`EntryId`].

use std::{path::Path, time::Duration};

use crate::model::{Entry, EntryId, SongInfo};

#[derive(Debug, Default)]
pub struct EntryStore {
    songs: Vec<Entry>,
    next_id: u64,
}

impl EntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_ids(&mut self, count: usize) -> u64 {
        let first = self.next_id;
        self.next_id += count as u64;
        first
    }

    /// Appends a new song at the end of the playlist.
    pub fn add_song(&mut self, info: SongInfo) -> EntryId {
        let id = EntryId(self.allocate_ids(1));
        self.songs.push(Entry::song(id, info));
        id
    }

    /// Creates one subsong per duration under `parent`, numbered on from the
    /// subsongs it already has.
    ///
    /// Returns the ids of the new subsongs, empty if `durations` is empty or
    /// `parent` is not a song in this store.
    pub fn add_subsongs(&mut self, durations: &[Duration], parent: EntryId) -> Vec<EntryId> {
        if durations.is_empty() {
            return vec![];
        }

        let Some(pos) = self.songs.iter().position(|s| s.id == parent) else {
            return vec![];
        };

        let first_id = self.allocate_ids(durations.len());
        let song = &mut self.songs[pos];
        let start = song.subsong_count;

        let created: Vec<Entry> = durations
            .iter()
            .zip(1u32..)
            .zip(first_id..)
            .map(|((&duration, offset), id)| {
                Entry::subsong_of(song, EntryId(id), start + offset, duration)
            })
            .collect();

        let ids = created.iter().map(|s| s.id).collect();
        song.subsong_count += created.len() as u32;
        song.subsongs.extend(created);

        ids
    }

    /// Removes a song together with its subsongs, or a single subsong.
    ///
    /// Returns the removed entry, or `None` if the id does not resolve.
    pub fn remove(&mut self, id: EntryId) -> Option<Entry> {
        if let Some(pos) = self.songs.iter().position(|s| s.id == id) {
            return Some(self.songs.remove(pos));
        }

        self.songs.iter_mut().find_map(|song| {
            song.subsongs
                .iter()
                .position(|s| s.id == id)
                .map(|pos| song.subsongs.remove(pos))
        })
    }

    pub fn clear(&mut self) {
        self.songs.clear();
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.songs.iter().find_map(|song| {
            if song.id == id {
                Some(song)
            } else {
                song.subsongs.iter().find(|s| s.id == id)
            }
        })
    }

    pub(crate) fn get_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.songs.iter_mut().find_map(|song| {
            if song.id == id {
                Some(song)
            } else {
                song.subsongs.iter_mut().find(|s| s.id == id)
            }
        })
    }

    /// First song with the given file path. Duplicate paths are allowed.
    pub fn find_song(&self, filepath: &Path) -> Option<&Entry> {
        self.songs.iter().find(|s| s.filepath == filepath)
    }

    /// Position of the song with the given id.
    pub(crate) fn song_index(&self, id: EntryId) -> Option<usize> {
        self.songs.iter().position(|s| s.id == id)
    }

    /// Position of the first song with the given file path.
    pub(crate) fn song_position(&self, filepath: &Path) -> Option<usize> {
        self.songs.iter().position(|s| s.filepath == filepath)
    }

    /// Subsong `index` of the first song with the given file path.
    pub fn find_subsong(&self, filepath: &Path, index: u32) -> Option<&Entry> {
        self.find_song(filepath)?.subsong(index)
    }

    /// Songs in playlist order.
    pub fn songs(&self) -> &[Entry] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
