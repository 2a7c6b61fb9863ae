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

//! Change notifications for the presentation layer.
//!
//! Every mutating playlist call emits one or more [`PlaylistEvent`]s before it
//! returns. Events travel over a `std::sync::mpsc` channel and are expected to
//! be drained on the same thread, typically right after the mutating call, so
//! the view can re-render the affected rows.
//!
//! Besides the model changes proper, the playlist forwards expand and collapse
//! hints for song rows. They carry no model state.

use std::sync::mpsc::{Receiver, Sender};

use crate::model::EntryId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistEvent {
    /// A song was appended at the root.
    ItemAdded(EntryId),
    /// A batch of subsongs was appended under `parent`.
    ItemsAdded { parent: EntryId, items: Vec<EntryId> },
    /// An entry was removed. `parent` is `None` for a song.
    ItemRemoved {
        parent: Option<EntryId>,
        item: EntryId,
    },
    /// The visual state of an entry must be refreshed.
    ItemChanged(EntryId),
    /// All entries were removed.
    Cleared,

    /// The active entry changed, `None` when nothing is active any more.
    ActiveChanged(Option<EntryId>),

    Expand(EntryId),
    Collapse(EntryId),
}

/// Implemented by views that consume playlist notifications.
pub trait PlaylistEventProcessor {
    fn process_event(&mut self, event: PlaylistEvent);
}

/// Feeds every event already queued on `event_rx` to `processor`.
///
/// Returns the number of events processed. Never blocks.
pub fn process_pending_events<P>(event_rx: &Receiver<PlaylistEvent>, processor: &mut P) -> usize
where
    P: PlaylistEventProcessor + ?Sized,
{
    let mut count = 0;
    while let Ok(event) = event_rx.try_recv() {
        processor.process_event(event);
        count += 1;
    }
    count
}

/// Optional outbound end of the notification channel.
#[derive(Debug, Default)]
pub(crate) struct Notifier {
    event_tx: Option<Sender<PlaylistEvent>>,
}

impl Notifier {
    pub(crate) fn new(event_tx: Sender<PlaylistEvent>) -> Self {
        Self {
            event_tx: Some(event_tx),
        }
    }

    pub(crate) fn send(&self, event: PlaylistEvent) {
        if let Some(event_tx) = &self.event_tx {
            // A view that went away is not an error for the model
            let _ = event_tx.send(event);
        }
    }
}
