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

//! Unicode symbols for playlist row icons.
//!
//! These are selected for compatibility with most modern terminal emulators
//! and fonts.

pub const ICON_DEFAULT_SUBSONG: &str = "\u{25B8}";
pub const ICON_CHIP: &str = "\u{2395}";

// Text-style variants (using Variation Selector-15 [\u{FE0E}]), this forces
// terminals to render the icons as monochrome text rather than colorful
// emojis, ensuring they respect the row styling.
pub const ICON_SKIP_SHORT: &str = "\u{23ED}\u{FE0E}";
pub const ICON_REMOVED: &str = "\u{2716}\u{FE0E}";

/// Icon shown in the first column of a playlist row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaylistIcon {
    #[default]
    None,
    /// The subsong a song starts at.
    DefaultSubsong,
    /// The song needs a ROM image.
    Chip,
    /// Skipped because it is too short.
    SkipShort,
    /// Blacklisted.
    Removed,
}

impl PlaylistIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            PlaylistIcon::None => "",
            PlaylistIcon::DefaultSubsong => ICON_DEFAULT_SUBSONG,
            PlaylistIcon::Chip => ICON_CHIP,
            PlaylistIcon::SkipShort => ICON_SKIP_SHORT,
            PlaylistIcon::Removed => ICON_REMOVED,
        }
    }
}
