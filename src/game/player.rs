//! Player movement, facing and walk animation.

use std::f32::consts::FRAC_1_SQRT_2;

use super::{UiMode, World};
use crate::entity::{Direction, WorldPos};

/// Directions held this tick, from any input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub fn only(direction: Direction) -> Self {
        let mut held = Self::NONE;
        held.set(direction, true);
        held
    }

    pub fn set(&mut self, direction: Direction, down: bool) {
        match direction {
            Direction::Up => self.up = down,
            Direction::Down => self.down = down,
            Direction::Left => self.left = down,
            Direction::Right => self.right = down,
        }
    }

    /// OR-combine two sources, per direction.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    /// Net unit direction per axis. Opposing holds cancel to zero.
    pub fn axes(self) -> (f32, f32) {
        let axis = |neg: bool, pos: bool| f32::from(i8::from(pos) - i8::from(neg));
        (axis(self.left, self.right), axis(self.up, self.down))
    }

    /// Facing implied by the held set: down, up, left, right in that order.
    pub fn facing(self) -> Option<Direction> {
        if self.down {
            Some(Direction::Down)
        } else if self.up {
            Some(Direction::Up)
        } else if self.left {
            Some(Direction::Left)
        } else if self.right {
            Some(Direction::Right)
        } else {
            None
        }
    }
}

/// Intended velocity for a held set. Diagonals are scaled by `1/√2` so
/// their speed matches a single-axis move.
pub fn velocity(held: HeldDirections, speed: f32) -> (f32, f32) {
    let (ax, ay) = held.axes();
    let scale = if ax != 0.0 && ay != 0.0 {
        speed * FRAC_1_SQRT_2
    } else {
        speed
    };
    (ax * scale, ay * scale)
}

// ---------------------------------------------------------------------------
// Animation
// ---------------------------------------------------------------------------

/// Walk cycle frames, in playback order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pose {
    LeftLean,
    Neutral,
    RightLean,
}

impl Pose {
    const CYCLE: [Self; 3] = [Self::LeftLean, Self::Neutral, Self::RightLean];

    fn from_frame(frame: u8) -> Self {
        match frame % 3 {
            0 => Self::LeftLean,
            1 => Self::Neutral,
            _ => Self::RightLean,
        }
    }
}

pub const NEUTRAL_FRAME: u8 = 1;

/// Which sprite set a facing uses. Side sprites face left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteSheet {
    Front,
    Back,
    Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteFrame {
    pub sheet: SpriteSheet,
    pub pose: Pose,
    /// Draw flipped horizontally.
    pub mirrored: bool,
}

// ---------------------------------------------------------------------------
// Player state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub position: WorldPos,
    pub facing: Direction,
    /// Index into the walk cycle (`0..3`).
    pub walk_frame: u8,
    pub walk_timer: f32,
    pub is_moving: bool,
}

impl PlayerState {
    pub fn at(position: WorldPos) -> Self {
        Self {
            position,
            facing: Direction::Down,
            walk_frame: NEUTRAL_FRAME,
            walk_timer: 0.0,
            is_moving: false,
        }
    }

    /// Standing on the center of the configured spawn tile.
    pub fn spawn(world: &World) -> Self {
        Self::at(world.map.tile_center(world.config.spawn_tile))
    }

    pub fn pose(&self) -> Pose {
        if self.is_moving {
            Pose::from_frame(self.walk_frame)
        } else {
            Pose::Neutral
        }
    }

    pub fn sprite(&self) -> SpriteFrame {
        let sheet = match self.facing {
            Direction::Down => SpriteSheet::Front,
            Direction::Up => SpriteSheet::Back,
            Direction::Left | Direction::Right => SpriteSheet::Side,
        };
        SpriteFrame {
            sheet,
            pose: self.pose(),
            mirrored: self.facing == Direction::Right,
        }
    }

    fn stop(&mut self) {
        self.is_moving = false;
        self.walk_timer = 0.0;
        self.walk_frame = NEUTRAL_FRAME;
    }

    fn advance_walk_cycle(&mut self, dt: f32, frame_secs: f32) {
        self.walk_timer += dt;
        if self.walk_timer >= frame_secs {
            self.walk_timer = 0.0;
            self.walk_frame = (self.walk_frame + 1) % Pose::CYCLE.len() as u8;
        }
    }
}

/// Whether the player may stand at `pos`: walkable tile, outside every NPC's
/// collision disc.
pub fn can_occupy(world: &World, pos: WorldPos) -> bool {
    if !world.map.is_world_walkable(pos) {
        return false;
    }
    let radius = world.config.npc_collision_radius();
    world
        .registry
        .iter()
        .all(|(_, npc)| world.map.tile_center(npc.tile).distance(pos) >= radius)
}

/// Apply one tick of held input. Returns whether the position changed.
///
/// Nothing moves unless `mode` is [`UiMode::Exploring`]. Each axis is
/// committed on its own (x first), so a diagonal into a wall slides along it.
pub fn tick(player: &mut PlayerState, held: HeldDirections, mode: UiMode, world: &World, dt: f32) -> bool {
    if mode != UiMode::Exploring {
        player.stop();
        return false;
    }

    if let Some(facing) = held.facing() {
        player.facing = facing;
    }

    let (vx, vy) = velocity(held, world.config.player_speed);
    if vx == 0.0 && vy == 0.0 {
        if player.is_moving {
            player.stop();
        }
        return false;
    }

    player.is_moving = true;
    player.advance_walk_cycle(dt, world.config.walk_frame_secs);

    let before = player.position;
    let candidate_x = WorldPos::new(player.position.x + vx * dt, player.position.y);
    if can_occupy(world, candidate_x) {
        player.position.x = candidate_x.x;
    }
    let candidate_y = WorldPos::new(player.position.x, player.position.y + vy * dt);
    if can_occupy(world, candidate_y) {
        player.position.y = candidate_y.y;
    }
    player.position != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::entity::{NpcRecord, Registry, Section, TilePos};
    use crate::game::map::TileMap;

    const DT: f32 = 0.1;

    /// 7x7 open field walled in by trees, with a tree at (3, 1).
    fn field(npcs: Vec<NpcRecord>) -> World {
        #[rustfmt::skip]
        let rows = [
            [5,5,5,5,5,5,5],
            [5,0,0,5,0,0,5],
            [5,0,0,0,0,0,5],
            [5,0,0,0,0,0,5],
            [5,0,0,0,0,0,5],
            [5,0,0,0,0,0,5],
            [5,5,5,5,5,5,5],
        ];
        World {
            map: TileMap::from_rows(&rows, 32.0),
            registry: Registry::new(npcs),
            config: GameConfig::default(),
        }
    }

    fn npc_at(x: i32, y: i32) -> NpcRecord {
        NpcRecord {
            id: "npc".into(),
            name: "Npc".into(),
            section: Section::About,
            tile: TilePos::new(x, y),
            dialogue: vec!["hi".into()],
            detail_title: "About".into(),
        }
    }

    fn center_of(world: &World, x: i32, y: i32) -> PlayerState {
        PlayerState::at(world.map.tile_center(TilePos::new(x, y)))
    }

    fn displacement(a: WorldPos, b: WorldPos) -> (f32, f32) {
        (b.x - a.x, b.y - a.y)
    }

    // -- input ---------------------------------------------------------------

    #[test]
    fn opposing_directions_cancel() {
        let held = HeldDirections {
            up: true,
            down: true,
            left: true,
            right: false,
        };
        assert_eq!(velocity(held, 100.0), (-100.0, 0.0));
    }

    #[test]
    fn union_does_not_double_speed() {
        let keys = HeldDirections::only(Direction::Right);
        let touch = HeldDirections::only(Direction::Right);
        assert_eq!(velocity(keys.union(touch), 160.0), (160.0, 0.0));
    }

    #[test]
    fn facing_prefers_vertical() {
        let held = HeldDirections {
            up: true,
            down: false,
            left: true,
            right: false,
        };
        assert_eq!(held.facing(), Some(Direction::Up));
        assert_eq!(HeldDirections::NONE.facing(), None);
        let both = HeldDirections {
            up: true,
            down: true,
            left: false,
            right: false,
        };
        assert_eq!(both.facing(), Some(Direction::Down));
    }

    // -- movement ------------------------------------------------------------

    #[test]
    fn idle_tick_keeps_position() {
        let world = field(Vec::new());
        let mut player = center_of(&world, 3, 3);
        let before = player.clone();
        let moved = tick(&mut player, HeldDirections::NONE, UiMode::Exploring, &world, DT);
        assert!(!moved);
        assert_eq!(player, before);
    }

    #[test]
    fn diagonal_speed_matches_axis_speed() {
        let world = field(Vec::new());

        let mut straight = center_of(&world, 3, 3);
        let start = straight.position;
        tick(&mut straight, HeldDirections::only(Direction::Left), UiMode::Exploring, &world, DT);
        let (sx, sy) = displacement(start, straight.position);

        let mut diagonal = center_of(&world, 3, 3);
        let held = HeldDirections {
            up: true,
            left: true,
            ..HeldDirections::NONE
        };
        tick(&mut diagonal, held, UiMode::Exploring, &world, DT);
        let (dx, dy) = displacement(start, diagonal.position);

        let straight_len = sx.hypot(sy);
        let diagonal_len = dx.hypot(dy);
        assert!((straight_len - 16.0).abs() < 1e-3);
        assert!((straight_len - diagonal_len).abs() < 1e-3);
        assert!(dx < 0.0 && dy < 0.0);
    }

    #[test]
    fn diagonal_into_wall_slides() {
        let world = field(Vec::new());
        // Top edge of tile (2, 1); the tree row is directly above.
        let mut player = PlayerState::at(WorldPos::new(2.5 * 32.0, 32.0 + 1.0));
        let start = player.position;
        let held = HeldDirections {
            up: true,
            right: true,
            ..HeldDirections::NONE
        };
        tick(&mut player, held, UiMode::Exploring, &world, DT);
        let (dx, dy) = displacement(start, player.position);
        assert!(dx > 0.0, "perpendicular axis should move");
        assert_eq!(dy, 0.0, "blocked axis should not move");
    }

    #[test]
    fn cannot_leave_the_map_or_enter_trees() {
        let world = field(Vec::new());
        let mut player = center_of(&world, 1, 1);
        for _ in 0..50 {
            tick(&mut player, HeldDirections::only(Direction::Left), UiMode::Exploring, &world, DT);
        }
        assert!(world.map.is_world_walkable(player.position));
        assert_eq!(world.map.world_to_tile(player.position), TilePos::new(1, 1));
    }

    #[test]
    fn npc_disc_blocks_movement() {
        let world = field(vec![npc_at(4, 3)]);
        let mut player = center_of(&world, 2, 3);
        for _ in 0..20 {
            tick(&mut player, HeldDirections::only(Direction::Right), UiMode::Exploring, &world, DT);
        }
        let npc_center = world.map.tile_center(TilePos::new(4, 3));
        assert!(npc_center.distance(player.position) >= world.config.npc_collision_radius());
        assert!(player.position.x > world.map.tile_center(TilePos::new(2, 3)).x);
    }

    #[test]
    fn suspended_mode_ignores_input() {
        let world = field(Vec::new());
        for mode in [UiMode::Dialogue, UiMode::Detail] {
            let mut player = center_of(&world, 3, 3);
            let start = player.position;
            let moved = tick(&mut player, HeldDirections::only(Direction::Down), mode, &world, DT);
            assert!(!moved);
            assert_eq!(player.position, start);
            assert!(!player.is_moving);
        }
    }

    // -- animation -----------------------------------------------------------

    #[test]
    fn walk_cycle_advances_every_frame_interval() {
        let world = field(Vec::new());
        let mut player = center_of(&world, 3, 3);
        let held = HeldDirections::only(Direction::Down);
        let mut poses = Vec::new();
        for _ in 0..4 {
            tick(&mut player, held, UiMode::Exploring, &world, 0.15);
            poses.push(player.pose());
        }
        assert_eq!(
            poses,
            vec![Pose::RightLean, Pose::LeftLean, Pose::Neutral, Pose::RightLean]
        );
    }

    #[test]
    fn stopping_snaps_to_idle() {
        let world = field(Vec::new());
        let mut player = center_of(&world, 3, 3);
        tick(&mut player, HeldDirections::only(Direction::Right), UiMode::Exploring, &world, 0.2);
        assert!(player.is_moving);
        tick(&mut player, HeldDirections::NONE, UiMode::Exploring, &world, 0.2);
        assert!(!player.is_moving);
        assert_eq!(
            player.sprite(),
            SpriteFrame {
                sheet: SpriteSheet::Side,
                pose: Pose::Neutral,
                mirrored: true,
            }
        );
    }

    #[test]
    fn sprite_sheet_follows_facing() {
        let mut player = PlayerState::at(WorldPos::default());
        let cases = [
            (Direction::Down, SpriteSheet::Front, false),
            (Direction::Up, SpriteSheet::Back, false),
            (Direction::Left, SpriteSheet::Side, false),
            (Direction::Right, SpriteSheet::Side, true),
        ];
        for (facing, sheet, mirrored) in cases {
            player.facing = facing;
            let sprite = player.sprite();
            assert_eq!((sprite.sheet, sprite.mirrored), (sheet, mirrored));
        }
    }
}
