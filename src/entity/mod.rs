//! NPC registry and core value types.
//!
//! This module owns the data layout for the town's characters and the small
//! value types shared by the game core. It is free of game logic and
//! rendering concerns.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Core value types
// ---------------------------------------------------------------------------

/// Handle of an NPC inside a [`Registry`] (its registration order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NpcId(pub u32);

/// A cell on the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A point in world units (pixels at zoom 1).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
}

impl WorldPos {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Cardinal direction, used for facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

/// Portfolio section an NPC stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    About,
    Projects,
    Skills,
    Achievements,
    Contact,
}

impl Section {
    pub const ALL: [Self; 5] = [
        Self::About,
        Self::Projects,
        Self::Skills,
        Self::Achievements,
        Self::Contact,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Achievements => "achievements",
            Self::Contact => "contact",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

// ---------------------------------------------------------------------------
// NPC records
// ---------------------------------------------------------------------------

/// A static, interactive character of the town.
///
/// `tile` must reference a walkable tile and must not coincide with another
/// NPC's tile. This is an authoring rule and is not checked at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpcRecord {
    pub id: String,
    pub name: String,
    pub section: Section,
    pub tile: TilePos,
    pub dialogue: Vec<String>,
    pub detail_title: String,
}

/// Read-only list of the town's NPCs, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    npcs: Vec<NpcRecord>,
}

impl Registry {
    pub fn new(npcs: Vec<NpcRecord>) -> Self {
        Self { npcs }
    }

    pub fn get(&self, id: NpcId) -> Option<&NpcRecord> {
        usize::try_from(id.0).ok().and_then(|i| self.npcs.get(i))
    }

    pub fn find_by_id(&self, id: &str) -> Option<(NpcId, &NpcRecord)> {
        self.iter().find(|(_, npc)| npc.id == id)
    }

    pub fn find_by_section(&self, section: Section) -> Option<(NpcId, &NpcRecord)> {
        self.iter().find(|(_, npc)| npc.section == section)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NpcId, &NpcRecord)> {
        (0u32..).zip(&self.npcs).map(|(i, npc)| (NpcId(i), npc))
    }

    pub fn len(&self) -> usize {
        self.npcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.npcs.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn npc(id: &str, section: Section, x: i32, y: i32) -> NpcRecord {
        NpcRecord {
            id: id.into(),
            name: id.to_uppercase(),
            section,
            tile: TilePos::new(x, y),
            dialogue: vec!["hi".into()],
            detail_title: "Title".into(),
        }
    }

    fn registry() -> Registry {
        Registry::new(vec![
            npc("npc-about", Section::About, 13, 6),
            npc("npc-contact", Section::Contact, 8, 11),
        ])
    }

    #[test]
    fn find_by_id_returns_handle_and_record() {
        let reg = registry();
        let (id, record) = reg.find_by_id("npc-contact").expect("registered");
        assert_eq!(id, NpcId(1));
        assert_eq!(record.section, Section::Contact);
        assert_eq!(reg.get(id), Some(record));
    }

    #[test]
    fn lookup_misses_are_none() {
        let reg = registry();
        assert!(reg.find_by_id("npc-nobody").is_none());
        assert!(reg.find_by_section(Section::Skills).is_none());
        assert!(reg.get(NpcId(42)).is_none());
    }

    #[test]
    fn find_by_section_uses_registry_order() {
        let reg = Registry::new(vec![
            npc("first", Section::About, 1, 1),
            npc("second", Section::About, 2, 2),
        ]);
        let (id, record) = reg.find_by_section(Section::About).expect("registered");
        assert_eq!(id, NpcId(0));
        assert_eq!(record.id, "first");
    }

    #[test]
    fn iter_enumerates_in_order() {
        let ids: Vec<_> = registry().iter().map(|(id, npc)| (id, npc.id.clone())).collect();
        assert_eq!(
            ids,
            vec![(NpcId(0), "npc-about".into()), (NpcId(1), "npc-contact".into())]
        );
    }

    #[test]
    fn section_keys_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key("personal"), None);
    }

    #[test]
    fn world_distance_is_euclidean() {
        let d = WorldPos::new(0.0, 0.0).distance(WorldPos::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-5);
    }
}
