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

//! # Two-level playlist model.
//!
//! An in-memory playlist for a chiptune player: songs, each optionally
//! holding numbered subsongs, plus the state and traversal logic that drives
//! playback order and row styling.
//!
//! The crate is consumed by a view layer that:
//!
//! * Calls into a [`Playlist`] to add, remove, tag and activate entries, and to
//!   ask for the next or previous thing to play.
//! * Drains [`PlaylistEvent`]s after each call to re-render affected rows,
//!   asking [`Playlist::visual_state`] how each row should look.
//!
//! ## Architecture
//!
//! All work is synchronous and single-threaded. Entries are owned by the
//! [`model::EntryStore`] and addressed by [`EntryId`]; references handed out
//! by the playlist borrow it, so they cannot outlive the next mutation.

pub mod config;
pub mod events;
pub mod model;
pub mod playlist;
pub mod render;
pub mod theme;
pub mod util;

pub use crate::{
    config::PlaylistConfig,
    events::{PlaylistEvent, PlaylistEventProcessor},
    model::{Entry, EntryId, EntryKind, ItemTag, RomRequirement, SongInfo},
    playlist::Playlist,
    render::{PlaylistIcon, VisualState},
    theme::Theme,
};
