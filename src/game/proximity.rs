//! Nearest-NPC query.

use super::map::TileMap;
use crate::entity::{NpcId, Registry, WorldPos};

/// The NPC closest to `position` whose tile center is strictly within
/// `radius`. Exact ties go to the one registered first.
pub fn nearest_npc(position: WorldPos, registry: &Registry, map: &TileMap, radius: f32) -> Option<NpcId> {
    let mut best: Option<(NpcId, f32)> = None;
    for (id, npc) in registry.iter() {
        let distance = map.tile_center(npc.tile).distance(position);
        if distance >= radius {
            continue;
        }
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((id, distance));
        }
    }
    best.map(|(id, _)| id)
}
