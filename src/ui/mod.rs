//! UI / rendering helpers.
//!
//! This module owns everything that depends on `egui` for presentation.
//! It reads [`GameState`](crate::game::GameState) and the static content and
//! produces visual output. No game logic lives here; the only thing handed
//! back to the shell is which buttons were pressed.

pub mod detail;
pub mod dialogue;
pub mod hud;
pub mod markup;
pub mod page;
pub mod town;

use crate::entity::{NpcId, Registry, Section, TilePos};
use crate::game::map::Tile;
use egui::Color32;
use rustc_hash::FxHashMap;

/// Pre-computed spatial index mapping tiles to the NPC standing there.
pub type SpatialIndex = FxHashMap<TilePos, NpcId>;

/// Build a spatial index from the registry for O(1) lookups per cell.
pub fn build_spatial_index(registry: &Registry) -> SpatialIndex {
    registry.iter().map(|(id, npc)| (npc.tile, id)).collect()
}

/// Marker colour of the NPC for a section, on the map and in the legend.
pub const fn section_color(section: Section) -> Color32 {
    match section {
        Section::About => Color32::from_rgb(0xf5, 0x9e, 0x0b),
        Section::Projects => Color32::from_rgb(0x3b, 0x82, 0xf6),
        Section::Skills => Color32::from_rgb(0xef, 0x44, 0x44),
        Section::Achievements => Color32::from_rgb(0xa8, 0x55, 0xf7),
        Section::Contact => Color32::from_rgb(0x22, 0xc5, 0x5e),
    }
}

/// Fill colour of a tile code. Unknown codes draw as grass.
pub fn tile_color(code: u8) -> Color32 {
    match Tile::from_code(code) {
        Some(Tile::Path) => Color32::from_rgb(0xd4, 0xa7, 0x6a),
        Some(Tile::Water) => Color32::from_rgb(0x4a, 0x90, 0xd9),
        Some(Tile::Wall) => Color32::from_rgb(0x80, 0x80, 0x80),
        Some(Tile::Building) => Color32::from_rgb(0xa0, 0x52, 0x2d),
        Some(Tile::Tree) => Color32::from_rgb(0x2d, 0x5a, 0x27),
        Some(Tile::Flowers) => Color32::from_rgb(0xff, 0x9e, 0xcd),
        Some(Tile::Fence) => Color32::from_rgb(0x8b, 0x69, 0x14),
        Some(Tile::Grass) | None => Color32::from_rgb(0x7e, 0xc8, 0x50),
    }
}

/// Heading shown for a section on the scrolling page.
pub const fn section_heading(section: Section) -> &'static str {
    match section {
        Section::About => "About Me",
        Section::Projects => "Projects",
        Section::Skills => "Skills",
        Section::Achievements => "Achievements",
        Section::Contact => "Contact",
    }
}
