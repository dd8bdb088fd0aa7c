//! Tunable constants for the sandbox and the contact relay.

use crate::entity::TilePos;
use serde::{Deserialize, Serialize};

/// Gameplay constants. Distances are in world units (pixels at zoom 1),
/// durations in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of one tile.
    pub tile_size: f32,
    /// Player speed along one axis.
    pub player_speed: f32,
    /// The player may talk to an NPC closer than this.
    pub interaction_distance: f32,
    /// Radius of the disc around each NPC the player cannot enter, in tiles.
    ///
    /// Independent of `interaction_distance`.
    pub npc_collision_radius_tiles: f32,
    /// Time each walk pose stays on screen.
    pub walk_frame_secs: f32,
    /// Typewriter delay per revealed character.
    pub reveal_secs_per_char: f32,
    pub spawn_tile: TilePos,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_size: 32.0,
            player_speed: 160.0,
            interaction_distance: 48.0,
            npc_collision_radius_tiles: 0.8,
            walk_frame_secs: 0.150,
            reveal_secs_per_char: 0.006,
            spawn_tile: TilePos::new(10, 6),
        }
    }
}

impl GameConfig {
    pub fn npc_collision_radius(&self) -> f32 {
        self.tile_size * self.npc_collision_radius_tiles
    }
}

/// EmailJS credentials, baked in at build time.
///
/// Set `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID` and `EMAILJS_PUBLIC_KEY`
/// when building. Missing values leave the relay unconfigured and every
/// submission fails with a direct-email hint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    pub fn from_build_env() -> Self {
        Self {
            service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or_default().to_owned(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or_default().to_owned(),
            public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or_default().to_owned(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}
