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

//! Colours used for playlist row styling.

use ratatui::style::Color;

use crate::model::RomRequirement;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Song row that owns the active subsong.
    pub active_parent_colour: Color,
    /// Unplayable tunes that need the BASIC ROM.
    pub basic_rom_colour: Color,
    /// Unplayable tunes that need any other ROM.
    pub other_rom_colour: Color,
}

impl Default for Theme {
    // Returns the standard playlist theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub const fn default_theme() -> Self {
        Self {
            active_parent_colour: Color::Rgb(0, 102, 204),
            basic_rom_colour: Color::Rgb(0x05, 0x4a, 0x80),
            other_rom_colour: Color::Rgb(0x8a, 0x54, 0x54),
        }
    }

    /// Colour for a tune that cannot play because of a missing ROM.
    pub fn rom_colour(&self, requirement: RomRequirement) -> Option<Color> {
        match requirement {
            RomRequirement::None => None,
            RomRequirement::BasicRom => Some(self.basic_rom_colour),
            RomRequirement::OtherRom => Some(self.other_rom_colour),
        }
    }
}
