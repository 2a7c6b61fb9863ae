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

//! Active entry tracking and status tagging.

use log::{debug, warn};

use crate::{
    events::PlaylistEvent,
    model::{Entry, EntryId, ItemTag},
    playlist::Playlist,
};

impl Playlist {
    /// The entry currently playing, if any.
    pub fn active_song(&self) -> Option<&Entry> {
        self.active.and_then(|id| self.store.get(id))
    }

    /// Makes `id` the active entry.
    ///
    /// Returns `false` and changes nothing if the entry is not playable. With
    /// `auto_expand`, the view is asked to collapse the song of the outgoing
    /// subsong and to expand the song of the incoming one.
    pub fn try_set_active_song(&mut self, id: EntryId, auto_expand: bool) -> bool {
        let Some(entry) = self.store.get(id) else {
            debug_assert!(false, "activating {id}, which is not in this playlist");
            warn!("Ignoring activation of unknown entry {}", id);
            return false;
        };
        if !entry.is_playable() {
            return false;
        }
        let new_parent = entry.parent();

        if let Some(old) = self.active.take() {
            let old_parent = self.store.get(old).and_then(Entry::parent);
            if auto_expand {
                if let Some(parent) = old_parent {
                    self.notifier.send(PlaylistEvent::Collapse(parent));
                }
            }

            self.notifier.send(PlaylistEvent::ItemChanged(old));
            if let Some(parent) = old_parent {
                self.notifier.send(PlaylistEvent::ItemChanged(parent));
            }
        }

        self.active = Some(id);
        debug!("Active entry is now {}", id);

        self.notifier.send(PlaylistEvent::ItemChanged(id));
        if let Some(parent) = new_parent {
            self.notifier.send(PlaylistEvent::ItemChanged(parent));
            if auto_expand {
                self.notifier.send(PlaylistEvent::Expand(parent));
            }
        }
        self.notifier.send(PlaylistEvent::ActiveChanged(Some(id)));

        true
    }

    /// Applies a status tag to an entry.
    ///
    /// Without `force`, entries that are not playable are left alone so that a
    /// casual selection never tags a dead entry.
    ///
    /// `force` only bypasses that guard. Row styling is derived from the model,
    /// so an active entry keeps its highlight whatever tag it is given.
    pub fn set_tag(&mut self, id: EntryId, tag: ItemTag, force: bool) {
        let Some(entry) = self.store.get_mut(id) else {
            debug_assert!(false, "tagging {id}, which is not in this playlist");
            warn!("Ignoring tag for unknown entry {}", id);
            return;
        };
        if !force && !entry.is_playable() {
            return;
        }

        entry.tag = tag;
        debug!("Tagged {} as {:?}", id, tag);

        self.notifier.send(PlaylistEvent::ItemChanged(id));
    }
}
