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

//! Visual state of playlist rows.
//!
//! Row styling is never stored on an entry. It is derived on demand from the
//! entry's tag, playability and ROM requirement, plus the playlist's active
//! entry, so it always matches the model after any mutating call returns.

pub mod icons;

use ratatui::style::{Color, Modifier, Style};

pub use icons::PlaylistIcon;

use crate::{
    model::{Entry, ItemTag, RomRequirement},
    theme::Theme,
};

/// Styling hints for one playlist row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisualState {
    pub bold: bool,
    pub strikethrough: bool,
    pub colour: Option<Color>,
    pub icon: PlaylistIcon,
}

impl VisualState {
    /// Derives the visual state of `entry`.
    ///
    /// `parent` must be the owning song when `entry` is a subsong, and `active`
    /// is the playlist's active entry.
    pub fn derive(entry: &Entry, parent: Option<&Entry>, active: Option<&Entry>, theme: &Theme) -> Self {
        let mut state = Self {
            icon: icon_for(entry, parent),
            ..Self::default()
        };

        // A song that cannot play because of its ROM greys out its subsongs too
        let rom_gated = [Some(entry), parent]
            .into_iter()
            .flatten()
            .find(|e| is_rom_gated(e));
        if let Some(gated) = rom_gated {
            state.colour = theme.rom_colour(gated.rom_requirement());
            state.strikethrough = true;
        }

        if let Some(active) = active {
            if active.id() == entry.id() {
                state.bold = true;
            } else if active.parent() == Some(entry.id()) {
                state.bold = true;
                state.colour = Some(theme.active_parent_colour);
            }
        }

        state
    }

    pub fn style(&self) -> Style {
        let mut style = Style::default();
        if let Some(colour) = self.colour {
            style = style.fg(colour);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.strikethrough {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        style
    }
}

fn icon_for(entry: &Entry, parent: Option<&Entry>) -> PlaylistIcon {
    match entry.tag() {
        ItemTag::ShortDuration => PlaylistIcon::SkipShort,
        ItemTag::Blacklisted => PlaylistIcon::Removed,
        ItemTag::Normal if entry.is_song() && entry.requires_rom() => PlaylistIcon::Chip,
        ItemTag::Normal if parent.is_some_and(|p| entry.is_default_subsong_of(p)) => {
            PlaylistIcon::DefaultSubsong
        }
        ItemTag::Normal => PlaylistIcon::None,
    }
}

fn is_rom_gated(entry: &Entry) -> bool {
    entry.tag() == ItemTag::Normal
        && entry.rom_requirement() != RomRequirement::None
        && !entry.is_playable()
}
