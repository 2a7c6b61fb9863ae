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

//! Next/previous traversal over songs and subsongs.
//!
//! Traversal skips any number of consecutive entries that are not
//! auto-playable (blacklisted, too short, or unplayable) and returns `None` at
//! the end of the list. Songs are located by file path, so a subsong can be
//! used as the starting point of a song-level move.

use log::trace;

use crate::{model::Entry, playlist::Playlist};

impl Playlist {
    /// The entry playback of `song` should start at.
    ///
    /// A song without subsongs resolves to itself. Otherwise the preferred
    /// subsong (the default one if configured, else subsong 1) wins when it is
    /// auto-playable, followed by the first auto-playable subsong.
    pub fn effective_initial_subsong(&self, song: &Entry) -> Option<&Entry> {
        let song = self.store.get(song.id())?;
        self.initial_subsong_of(song)
    }

    pub(crate) fn initial_subsong_of<'a>(&self, song: &'a Entry) -> Option<&'a Entry> {
        debug_assert!(song.is_song());

        if song.subsongs().is_empty() {
            return song.is_auto_playable().then_some(song);
        }

        let preferred = if self.config.prefer_default_subsong {
            song.default_subsong()
        } else {
            1
        };
        // An out of range default subsong simply falls through to the scan
        if let Some(subsong) = song.subsong(preferred).filter(|s| s.is_auto_playable()) {
            return Some(subsong);
        }

        song.subsongs().iter().find(|s| s.is_auto_playable())
    }

    /// Position of the song `from` belongs to: itself, or its owner for a subsong.
    ///
    /// Looked up by id so that songs sharing a file path stay distinct. The
    /// path is only used for a detached copy whose song is gone.
    fn owner_position(&self, from: &Entry) -> Option<usize> {
        let owner = from.parent().unwrap_or(from.id());
        self.store
            .song_index(owner)
            .or_else(|| self.store.song_position(from.filepath()))
    }

    /// Next song after the active entry.
    pub fn next_song(&self) -> Option<&Entry> {
        self.next_song_from(self.active_song()?)
    }

    /// First auto-playable song after `from`, resolved to its initial subsong.
    pub fn next_song_from(&self, from: &Entry) -> Option<&Entry> {
        let songs = self.store.songs();
        let current = self.owner_position(from)?;

        songs[current + 1..]
            .iter()
            .find(|song| is_stop(song))
            .and_then(|song| self.initial_subsong_of(song))
    }

    /// Previous song before the active entry.
    pub fn prev_song(&self) -> Option<&Entry> {
        self.prev_song_from(self.active_song()?)
    }

    /// First auto-playable song before `from`, resolved to its initial subsong.
    pub fn prev_song_from(&self, from: &Entry) -> Option<&Entry> {
        let songs = self.store.songs();
        let current = self.owner_position(from)?;

        songs[..current]
            .iter()
            .rev()
            .find(|song| is_stop(song))
            .and_then(|song| self.initial_subsong_of(song))
    }

    /// Next subsong after the active entry.
    pub fn next_subsong(&self) -> Option<&Entry> {
        self.next_subsong_from(self.active_song()?)
    }

    /// First auto-playable subsong of the same song with a higher index.
    ///
    /// Returns `None` if the owning song is gone or `from` is its last subsong.
    pub fn next_subsong_from(&self, from: &Entry) -> Option<&Entry> {
        let owner = &self.store.songs()[self.owner_position(from)?];

        (from.subsong_index() + 1..=owner.subsong_count())
            .filter_map(|index| owner.subsong(index))
            .find(|subsong| is_stop(subsong))
    }

    /// Previous subsong before the active entry.
    pub fn prev_subsong(&self) -> Option<&Entry> {
        self.prev_subsong_from(self.active_song()?)
    }

    /// First auto-playable subsong of the same song with a lower index.
    pub fn prev_subsong_from(&self, from: &Entry) -> Option<&Entry> {
        if from.subsong_index() <= 1 {
            return None;
        }
        let owner = &self.store.songs()[self.owner_position(from)?];

        (1..from.subsong_index())
            .rev()
            .filter_map(|index| owner.subsong(index))
            .find(|subsong| is_stop(subsong))
    }
}

fn is_stop(entry: &Entry) -> bool {
    let stop = entry.is_auto_playable();
    if !stop {
        trace!("Skipping {} ({:?})", entry.title(), entry.tag());
    }
    stop
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::PlaylistConfig,
        model::{EntryId, ItemTag, SongInfo},
        playlist::tests::secs,
    };

    fn id(entry: Option<&Entry>) -> Option<EntryId> {
        entry.map(Entry::id)
    }

    fn dead(title: &str) -> SongInfo {
        SongInfo {
            playable: false,
            ..SongInfo::new(title, format!("{title}.sid"))
        }
    }

    #[test]
    fn test_next_and_prev_song_skip_unplayable() {
        let mut playlist = Playlist::default();
        let a = playlist.add_song(SongInfo::new("A", "A.sid"));
        playlist.add_song(dead("B"));
        let c = playlist.add_song(SongInfo::new("C", "C.sid"));

        let from_a = playlist.get(a).unwrap();
        assert_eq!(id(playlist.next_song_from(from_a)), Some(c));

        let from_c = playlist.get(c).unwrap();
        assert_eq!(id(playlist.prev_song_from(from_c)), Some(a));
    }

    #[test]
    fn test_next_song_resolves_initial_subsong() {
        let mut playlist = Playlist::default();
        let a = playlist.add_song(SongInfo::new("A", "A.sid"));
        let c = playlist.add_song(SongInfo {
            default_subsong: 2,
            ..SongInfo::new("C", "C.sid")
        });
        let subs = playlist.add_subsongs(&secs(&[10, 20]), c);

        assert_eq!(id(playlist.next_song_from(playlist.get(a).unwrap())), Some(subs[1]));
    }

    #[test]
    fn test_song_traversal_stops_at_boundaries() {
        let mut playlist = Playlist::default();
        let a = playlist.add_song(SongInfo::new("A", "A.sid"));
        playlist.add_song(dead("B"));
        playlist.add_song(dead("C"));

        let from_a = playlist.get(a).unwrap();
        assert!(playlist.prev_song_from(from_a).is_none());
        assert!(playlist.next_song_from(from_a).is_none());
    }

    #[test]
    fn test_song_traversal_skips_blacklisted_and_short() {
        let mut playlist = Playlist::default();
        let a = playlist.add_song(SongInfo::new("A", "A.sid"));
        let b = playlist.add_song(SongInfo::new("B", "B.sid"));
        let c = playlist.add_song(SongInfo::new("C", "C.sid"));
        let d = playlist.add_song(SongInfo::new("D", "D.sid"));
        playlist.set_tag(b, ItemTag::Blacklisted, false);
        playlist.set_tag(c, ItemTag::ShortDuration, false);

        assert_eq!(id(playlist.next_song_from(playlist.get(a).unwrap())), Some(d));
        assert_eq!(id(playlist.prev_song_from(playlist.get(d).unwrap())), Some(a));
    }

    #[test]
    fn test_song_traversal_handles_long_dead_runs() {
        let mut playlist = Playlist::default();
        let first = playlist.add_song(SongInfo::new("first", "first.sid"));
        for n in 0..10_000 {
            playlist.add_song(dead(&format!("dead{n}")));
        }
        let last = playlist.add_song(SongInfo::new("last", "last.sid"));

        assert_eq!(id(playlist.next_song_from(playlist.get(first).unwrap())), Some(last));
        assert_eq!(id(playlist.prev_song_from(playlist.get(last).unwrap())), Some(first));
    }

    #[test]
    fn test_song_traversal_from_subsong_uses_owner() {
        let mut playlist = Playlist::default();
        let a = playlist.add_song(SongInfo::new("A", "A.sid"));
        let subs = playlist.add_subsongs(&secs(&[10, 20]), a);
        let b = playlist.add_song(SongInfo::new("B", "B.sid"));

        assert!(playlist.try_set_active_song(subs[1], false));
        assert_eq!(id(playlist.next_song()), Some(b));
        assert!(playlist.prev_song().is_none());
    }

    #[test]
    fn test_traversal_without_active_entry_is_none() {
        let mut playlist = Playlist::default();
        playlist.add_song(SongInfo::new("A", "A.sid"));
        playlist.add_song(SongInfo::new("B", "B.sid"));

        assert!(playlist.next_song().is_none());
        assert!(playlist.prev_song().is_none());
        assert!(playlist.next_subsong().is_none());
        assert!(playlist.prev_subsong().is_none());
    }

    #[test]
    fn test_initial_subsong_falls_back_to_first_auto_playable() {
        let mut playlist = Playlist::new(PlaylistConfig {
            prefer_default_subsong: false,
            ..PlaylistConfig::default()
        });
        let song = playlist.add_song(SongInfo {
            default_subsong: 1,
            ..SongInfo::new("A", "A.sid")
        });
        let subs = playlist.add_subsongs(&secs(&[10, 20, 30]), song);
        playlist.set_tag(subs[0], ItemTag::ShortDuration, false);

        let song = playlist.get(song).unwrap();
        assert_eq!(id(playlist.effective_initial_subsong(song)), Some(subs[1]));
    }

    #[test]
    fn test_initial_subsong_prefers_default_when_configured() {
        let mut playlist = Playlist::new(PlaylistConfig {
            prefer_default_subsong: true,
            ..PlaylistConfig::default()
        });
        let song = playlist.add_song(SongInfo {
            default_subsong: 3,
            ..SongInfo::new("A", "A.sid")
        });
        let subs = playlist.add_subsongs(&secs(&[10, 20, 30]), song);
        playlist.set_tag(subs[0], ItemTag::ShortDuration, false);

        assert_eq!(
            id(playlist.effective_initial_subsong(playlist.get(song).unwrap())),
            Some(subs[2])
        );

        playlist.set_prefer_default_subsong(false);
        assert_eq!(
            id(playlist.effective_initial_subsong(playlist.get(song).unwrap())),
            Some(subs[1])
        );
    }

    #[test]
    fn test_initial_subsong_tolerates_out_of_range_default() {
        let mut playlist = Playlist::default();
        let song = playlist.add_song(SongInfo {
            default_subsong: 9,
            ..SongInfo::new("A", "A.sid")
        });
        let subs = playlist.add_subsongs(&secs(&[10, 20]), song);

        assert_eq!(
            id(playlist.effective_initial_subsong(playlist.get(song).unwrap())),
            Some(subs[0])
        );
    }

    #[test]
    fn test_initial_subsong_of_plain_song() {
        let mut playlist = Playlist::default();
        let song = playlist.add_song(SongInfo::new("A", "A.sid"));
        let short = playlist.add_song(SongInfo::new("B", "B.sid"));
        playlist.set_tag(short, ItemTag::ShortDuration, false);

        assert_eq!(id(playlist.effective_initial_subsong(playlist.get(song).unwrap())), Some(song));
        assert!(playlist.effective_initial_subsong(playlist.get(short).unwrap()).is_none());
    }

    #[test]
    fn test_initial_subsong_none_when_all_subsongs_dead() {
        let mut playlist = Playlist::default();
        let song = playlist.add_song(SongInfo::new("A", "A.sid"));
        let subs = playlist.add_subsongs(&secs(&[10, 20]), song);
        for sub in subs {
            playlist.set_tag(sub, ItemTag::Blacklisted, false);
        }

        assert!(playlist.effective_initial_subsong(playlist.get(song).unwrap()).is_none());
    }

    #[test]
    fn test_subsong_traversal_boundaries() {
        let mut playlist = Playlist::default();
        let song = playlist.add_song(SongInfo::new("A", "A.sid"));
        let subs = playlist.add_subsongs(&secs(&[10, 20, 30]), song);

        assert!(playlist.next_subsong_from(playlist.get(subs[2]).unwrap()).is_none());
        assert!(playlist.prev_subsong_from(playlist.get(subs[0]).unwrap()).is_none());
        assert_eq!(id(playlist.next_subsong_from(playlist.get(subs[0]).unwrap())), Some(subs[1]));
        assert_eq!(id(playlist.prev_subsong_from(playlist.get(subs[2]).unwrap())), Some(subs[1]));
    }

    #[test]
    fn test_subsong_traversal_skips_dead_and_removed() {
        let mut playlist = Playlist::default();
        let song = playlist.add_song(SongInfo::new("A", "A.sid"));
        let subs = playlist.add_subsongs(&secs(&[10, 20, 30, 40, 50]), song);
        playlist.set_tag(subs[1], ItemTag::Blacklisted, false);
        playlist.remove(subs[2]);
        playlist.set_tag(subs[3], ItemTag::ShortDuration, false);

        assert!(playlist.try_set_active_song(subs[0], false));
        assert_eq!(id(playlist.next_subsong()), Some(subs[4]));

        assert!(playlist.try_set_active_song(subs[4], false));
        assert_eq!(id(playlist.prev_subsong()), Some(subs[0]));
    }

    #[test]
    fn test_song_traversal_with_duplicate_paths() {
        let mut playlist = Playlist::default();
        let a = playlist.add_song(SongInfo::new("A", "same.sid"));
        let b = playlist.add_song(SongInfo::new("B", "same.sid"));
        let c = playlist.add_song(SongInfo::new("C", "C.sid"));

        assert!(playlist.try_set_active_song(b, false));
        assert_eq!(id(playlist.next_song()), Some(c));
        assert_eq!(id(playlist.prev_song()), Some(a));
    }

    #[test]
    fn test_subsong_traversal_with_duplicate_paths() {
        let mut playlist = Playlist::default();
        let a = playlist.add_song(SongInfo::new("A", "same.sid"));
        playlist.add_subsongs(&secs(&[10, 20, 30]), a);
        let b = playlist.add_song(SongInfo::new("B", "same.sid"));
        let b_subs = playlist.add_subsongs(&secs(&[10, 20, 30]), b);

        assert!(playlist.try_set_active_song(b_subs[1], false));
        assert_eq!(id(playlist.next_subsong()), Some(b_subs[2]));
        assert_eq!(id(playlist.prev_subsong()), Some(b_subs[0]));

        playlist.set_tag(b_subs[2], ItemTag::Blacklisted, false);
        assert!(playlist.next_subsong().is_none());
    }

    #[test]
    fn test_detached_subsong_falls_back_to_path() {
        let mut playlist = Playlist::default();
        let a = playlist.add_song(SongInfo::new("A", "A.sid"));
        playlist.add_subsongs(&secs(&[10]), a);
        let stale = playlist.get(a).cloned().unwrap();
        playlist.remove(a);

        let again = playlist.add_song(SongInfo::new("A", "A.sid"));
        let subs = playlist.add_subsongs(&secs(&[10, 20]), again);
        let next = playlist.next_subsong_from(stale.subsong(1).unwrap());
        assert_eq!(id(next), Some(subs[1]));
    }

    #[test]
    fn test_subsong_traversal_with_removed_owner() {
        let mut playlist = Playlist::default();
        let song = playlist.add_song(SongInfo::new("A", "A.sid"));
        let subs = playlist.add_subsongs(&secs(&[10, 20, 30]), song);
        let stale = playlist.get(subs[1]).cloned().unwrap();

        playlist.remove(song);
        assert!(playlist.next_subsong_from(&stale).is_none());
        assert!(playlist.prev_subsong_from(&stale).is_none());
    }
}
