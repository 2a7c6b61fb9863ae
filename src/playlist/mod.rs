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

//! Playlist state and navigation.
//!
//! [`Playlist`] wraps the [`EntryStore`] with everything the player needs on
//! top of plain ownership: the single active entry, status tagging, and
//! next/previous traversal at song and subsong granularity. Every mutation
//! emits [`PlaylistEvent`]s for the view.

mod navigation;
mod state;

use std::{path::Path, sync::mpsc::Sender, time::Duration};

use log::{debug, warn};

use crate::{
    config::PlaylistConfig,
    events::{Notifier, PlaylistEvent},
    model::{Entry, EntryId, EntryStore, SongInfo},
    render::VisualState,
    theme::Theme,
};

#[derive(Debug, Default)]
pub struct Playlist {
    store: EntryStore,
    active: Option<EntryId>,
    config: PlaylistConfig,
    theme: Theme,
    notifier: Notifier,
}

impl Playlist {
    pub fn new(config: PlaylistConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Creates a playlist that reports its changes on `event_tx`.
    pub fn with_events(config: PlaylistConfig, event_tx: Sender<PlaylistEvent>) -> Self {
        Self {
            config,
            notifier: Notifier::new(event_tx),
            ..Self::default()
        }
    }

    pub fn config(&self) -> &PlaylistConfig {
        &self.config
    }

    pub fn set_prefer_default_subsong(&mut self, prefer: bool) {
        self.config.prefer_default_subsong = prefer;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Appends a song at the end of the playlist.
    pub fn add_song(&mut self, info: SongInfo) -> EntryId {
        let id = self.store.add_song(info);
        debug!("Added song {}", id);

        self.notifier.send(PlaylistEvent::ItemAdded(id));
        id
    }

    /// Creates the subsongs of `parent`, one per duration.
    pub fn add_subsongs(&mut self, durations: &[Duration], parent: EntryId) -> Vec<EntryId> {
        if durations.is_empty() {
            return vec![];
        }

        let is_song = self.store.get(parent).is_some_and(Entry::is_song);
        debug_assert!(is_song, "subsongs added to {parent}, which is not a song in this playlist");
        if !is_song {
            warn!("Ignoring subsongs for unknown song {}", parent);
            return vec![];
        }

        let items = self.store.add_subsongs(durations, parent);
        if let Some(song) = self.store.get(parent) {
            if song.default_subsong() > song.subsong_count() {
                warn!(
                    "Default subsong {} of {} is out of range ({} subsongs)",
                    song.default_subsong(),
                    song.filepath().display(),
                    song.subsong_count()
                );
            }
        }
        debug!("Added {} subsongs to {}", items.len(), parent);

        self.notifier.send(PlaylistEvent::ItemsAdded {
            parent,
            items: items.clone(),
        });
        items
    }

    /// Removes a song with all its subsongs, or a single subsong.
    ///
    /// If the active entry is removed along the way it is cleared first.
    pub fn remove(&mut self, id: EntryId) {
        let Some(entry) = self.store.get(id) else {
            debug_assert!(false, "removing {id}, which is not in this playlist");
            warn!("Ignoring removal of unknown entry {}", id);
            return;
        };
        let parent = entry.parent();

        let removes_active = self.active.is_some_and(|active| {
            active == id || self.store.get(active).and_then(Entry::parent) == Some(id)
        });
        if removes_active {
            self.active = None;
            self.notifier.send(PlaylistEvent::ActiveChanged(None));
        }

        self.store.remove(id);
        debug!("Removed entry {}", id);

        self.notifier.send(PlaylistEvent::ItemRemoved { parent, item: id });
    }

    /// Removes every entry and clears the active entry.
    pub fn clear(&mut self) {
        if self.active.take().is_some() {
            self.notifier.send(PlaylistEvent::ActiveChanged(None));
        }

        self.store.clear();
        debug!("Cleared playlist");

        self.notifier.send(PlaylistEvent::Cleared);
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.store.get(id)
    }

    /// Songs in playlist order.
    pub fn songs(&self) -> &[Entry] {
        self.store.songs()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// First song with the given file path.
    pub fn find_song(&self, filepath: &Path) -> Option<&Entry> {
        self.store.find_song(filepath)
    }

    /// Subsong `index` of the song at `filepath`.
    ///
    /// Index 0 resolves to the subsong playback should start at, see
    /// [`Playlist::effective_initial_subsong`].
    pub fn find_subsong(&self, filepath: &Path, index: u32) -> Option<&Entry> {
        if index == 0 {
            let song = self.store.find_song(filepath)?;
            return self.initial_subsong_of(song);
        }

        self.store.find_subsong(filepath, index)
    }

    /// Whether the author column carries no information.
    ///
    /// True for fewer than two songs, or when all songs share one author.
    pub fn should_hide_author_column(&self) -> bool {
        match self.store.songs().split_first() {
            Some((first, rest)) if !rest.is_empty() => {
                rest.iter().all(|song| song.author() == first.author())
            }
            _ => true,
        }
    }

    /// Derived styling for the row of `id`.
    pub fn visual_state(&self, id: EntryId) -> Option<VisualState> {
        let entry = self.store.get(id)?;
        let parent = entry.parent().and_then(|p| self.store.get(p));
        let active = self.active.and_then(|a| self.store.get(a));

        Some(VisualState::derive(entry, parent, active, &self.theme))
    }

    /// Asks the view to expand the row of a song.
    pub fn expand_song(&self, id: EntryId) {
        if self.store.get(id).is_some_and(Entry::is_song) {
            self.notifier.send(PlaylistEvent::Expand(id));
        }
    }

    pub fn expand_all(&self) {
        for song in self.store.songs() {
            self.notifier.send(PlaylistEvent::Expand(song.id()));
        }
    }

    pub fn collapse_all(&self) {
        for song in self.store.songs() {
            self.notifier.send(PlaylistEvent::Collapse(song.id()));
        }
    }
}
