//! Core sandbox logic: pure, deterministic, no `egui` or networking dependencies.
//!
//! The town ([`World`]) is built once and never changes. Everything that does
//! change lives in [`GameState`], which is only advanced through [`apply`]
//! (one button press) and [`step`] (one frame). Both return the
//! [`GameEvent`]s that happened so the shell can log or react to them.

pub mod dialogue;
pub mod map;
pub mod player;
pub mod proximity;

use crate::config::GameConfig;
use crate::content::{self, Portfolio};
use crate::entity::{NpcId, Registry};
use dialogue::{Confirm, DialogueSession};
use map::TileMap;
use player::{HeldDirections, PlayerState};

// ---------------------------------------------------------------------------
// World
// ---------------------------------------------------------------------------

/// The immutable part of the sandbox.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub map: TileMap,
    pub registry: Registry,
    pub config: GameConfig,
}

impl World {
    /// The town with one NPC per portfolio section.
    pub fn town(portfolio: &Portfolio, config: GameConfig) -> Self {
        Self {
            map: TileMap::town(config.tile_size),
            registry: Registry::new(content::town_npcs(portfolio)),
            config,
        }
    }
}

// ---------------------------------------------------------------------------
// Actions & events
// ---------------------------------------------------------------------------

/// Button presses. Movement is not an action; it is read from
/// [`TickInput::held`] every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Talk to the nearby NPC, or skip/advance the open dialogue.
    Interact,
    /// Open the detail panel for the nearby or talking NPC.
    Details,
    /// Close whatever overlay is open.
    Cancel,
}

/// Everything the player did during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub held: HeldDirections,
    /// Presses in the order they happened.
    pub actions: Vec<GameAction>,
}

/// Events emitted by [`apply`] and [`step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    NearbyChanged { npc: Option<NpcId> },
    DialogueOpened { npc: NpcId },
    LineAdvanced { npc: NpcId, line: usize },
    DialogueClosed { npc: NpcId },
    DetailOpened { npc: NpcId },
    DetailClosed { npc: NpcId },
}

// ---------------------------------------------------------------------------
// Game state
// ---------------------------------------------------------------------------

/// Which overlay covers the town. At most one is ever open.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Overlay {
    #[default]
    None,
    Dialogue(DialogueSession),
    Detail { npc: NpcId },
}

/// Coarse mode derived from the overlay, handed to the player controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiMode {
    Exploring,
    Dialogue,
    Detail,
}

/// Everything in the sandbox that changes from frame to frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player: PlayerState,
    /// NPC within interaction range, recomputed every step.
    pub nearby: Option<NpcId>,
    pub overlay: Overlay,
}

impl GameState {
    /// Fresh session: player on the spawn tile, nothing open.
    pub fn new(world: &World) -> Self {
        let player = PlayerState::spawn(world);
        let nearby = proximity::nearest_npc(
            player.position,
            &world.registry,
            &world.map,
            world.config.interaction_distance,
        );
        Self {
            player,
            nearby,
            overlay: Overlay::None,
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        match self.overlay {
            Overlay::None => UiMode::Exploring,
            Overlay::Dialogue(_) => UiMode::Dialogue,
            Overlay::Detail { .. } => UiMode::Detail,
        }
    }

    /// The NPC the open overlay belongs to.
    pub fn active_npc(&self) -> Option<NpcId> {
        match &self.overlay {
            Overlay::None => None,
            Overlay::Dialogue(session) => Some(session.npc()),
            Overlay::Detail { npc } => Some(*npc),
        }
    }

    pub fn dialogue(&self) -> Option<&DialogueSession> {
        match &self.overlay {
            Overlay::Dialogue(session) => Some(session),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Pure apply / step
// ---------------------------------------------------------------------------

/// Apply a single press to the game state and return resulting events.
pub fn apply(state: &mut GameState, world: &World, action: GameAction) -> Vec<GameEvent> {
    match (state.ui_mode(), action) {
        (UiMode::Exploring, GameAction::Interact) => match state.nearby {
            Some(npc) => open_dialogue(state, world, npc),
            None => Vec::new(),
        },
        (UiMode::Exploring, GameAction::Details) => match state.nearby {
            Some(npc) => open_detail(state, npc),
            None => Vec::new(),
        },
        (UiMode::Dialogue, GameAction::Interact) => {
            let Overlay::Dialogue(session) = &mut state.overlay else {
                return Vec::new();
            };
            let npc = session.npc();
            match session.confirm() {
                Confirm::Skipped => Vec::new(),
                Confirm::Advanced(line) => vec![GameEvent::LineAdvanced { npc, line }],
                Confirm::Finished => close_overlay(state),
            }
        }
        (UiMode::Dialogue, GameAction::Details) => match state.active_npc() {
            Some(npc) => {
                let mut events = close_overlay(state);
                events.extend(open_detail(state, npc));
                events
            }
            None => Vec::new(),
        },
        (UiMode::Dialogue | UiMode::Detail, GameAction::Cancel) => close_overlay(state),
        (UiMode::Exploring, GameAction::Cancel)
        | (UiMode::Detail, GameAction::Interact | GameAction::Details) => Vec::new(),
    }
}

/// Start talking to `npc`, replacing any open overlay.
pub fn open_dialogue(state: &mut GameState, world: &World, npc: NpcId) -> Vec<GameEvent> {
    let Some(record) = world.registry.get(npc) else {
        return Vec::new();
    };
    let mut events = close_overlay(state);
    state.overlay = Overlay::Dialogue(DialogueSession::open(npc, &record.dialogue));
    events.push(GameEvent::DialogueOpened { npc });
    events
}

/// Show the detail panel for `npc`. Opening the panel that is already
/// showing does nothing.
pub fn open_detail(state: &mut GameState, npc: NpcId) -> Vec<GameEvent> {
    if state.overlay == (Overlay::Detail { npc }) {
        return Vec::new();
    }
    let mut events = close_overlay(state);
    state.overlay = Overlay::Detail { npc };
    events.push(GameEvent::DetailOpened { npc });
    events
}

/// Close whatever is open. Closing nothing does nothing.
pub fn close_overlay(state: &mut GameState) -> Vec<GameEvent> {
    match std::mem::take(&mut state.overlay) {
        Overlay::None => Vec::new(),
        Overlay::Dialogue(session) => vec![GameEvent::DialogueClosed { npc: session.npc() }],
        Overlay::Detail { npc } => vec![GameEvent::DetailClosed { npc }],
    }
}

/// Advance the sandbox by one frame.
///
/// Presses are handled first, against whatever overlay they find. Then the
/// player moves (only while exploring), the typewriter advances and
/// proximity is recomputed. Identical inputs from identical states always
/// give identical results.
pub fn step(state: &mut GameState, world: &World, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for action in &input.actions {
        events.extend(apply(state, world, *action));
    }

    let mode = state.ui_mode();
    player::tick(&mut state.player, input.held, mode, world, dt);

    if let Overlay::Dialogue(session) = &mut state.overlay {
        session.tick(dt, world.config.reveal_secs_per_char);
    }

    let nearby = proximity::nearest_npc(
        state.player.position,
        &world.registry,
        &world.map,
        world.config.interaction_distance,
    );
    if nearby != state.nearby {
        state.nearby = nearby;
        events.push(GameEvent::NearbyChanged { npc: nearby });
    }
    events
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Direction, NpcRecord, Section, TilePos, WorldPos};

    const DT: f32 = 1.0 / 60.0;

    fn npc(id: &str, x: i32, y: i32, lines: &[&str]) -> NpcRecord {
        NpcRecord {
            id: id.into(),
            name: id.into(),
            section: Section::About,
            tile: TilePos::new(x, y),
            dialogue: lines.iter().map(|l| (*l).to_owned()).collect(),
            detail_title: "About Me".into(),
        }
    }

    /// The town map with a single three-line NPC on (13, 6).
    fn small_world() -> World {
        World {
            map: TileMap::town(32.0),
            registry: Registry::new(vec![npc("npc-about", 13, 6, &["one", "two", "three"])]),
            config: GameConfig::default(),
        }
    }

    /// State with the player one tile left of the NPC.
    fn next_to_npc(world: &World) -> GameState {
        let mut state = GameState::new(world);
        state.player.position = world.map.tile_center(TilePos::new(12, 6));
        state.nearby = Some(NpcId(0));
        state
    }

    fn press(action: GameAction) -> TickInput {
        TickInput {
            held: HeldDirections::NONE,
            actions: vec![action],
        }
    }

    // -- state ---------------------------------------------------------------

    #[test]
    fn new_state_spawns_exploring() {
        let world = small_world();
        let state = GameState::new(&world);
        assert_eq!(state.ui_mode(), UiMode::Exploring);
        assert_eq!(state.player.position, WorldPos::new(336.0, 208.0));
        assert_eq!(state.nearby, None);
        assert_eq!(state.active_npc(), None);
    }

    #[test]
    fn town_world_has_one_npc_per_section() {
        let world = World::town(&content::PORTFOLIO, GameConfig::default());
        assert_eq!(world.registry.len(), Section::ALL.len());
        for section in Section::ALL {
            assert!(world.registry.find_by_section(section).is_some());
        }
        for (_, record) in world.registry.iter() {
            assert!(world.map.is_walkable(record.tile.x, record.tile.y));
        }
    }

    // -- apply ---------------------------------------------------------------

    #[test]
    fn interact_without_neighbour_does_nothing() {
        let world = small_world();
        let mut state = GameState::new(&world);
        let before = state.clone();
        assert!(apply(&mut state, &world, GameAction::Interact).is_empty());
        assert!(apply(&mut state, &world, GameAction::Details).is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn three_line_dialogue_runs_to_completion() {
        let world = small_world();
        let mut state = next_to_npc(&world);

        let events = apply(&mut state, &world, GameAction::Interact);
        assert_eq!(events, vec![GameEvent::DialogueOpened { npc: NpcId(0) }]);

        let mut lines = Vec::new();
        while let Some(session) = state.dialogue() {
            lines.push(session.line_index());
            // First press finishes typing, second moves on.
            apply(&mut state, &world, GameAction::Interact);
            let events = apply(&mut state, &world, GameAction::Interact);
            assert_eq!(events.len(), 1);
        }
        assert_eq!(lines, vec![0, 1, 2]);
        assert_eq!(state.ui_mode(), UiMode::Exploring);
    }

    #[test]
    fn overlays_are_mutually_exclusive() {
        let world = small_world();
        let mut state = next_to_npc(&world);
        let script = [
            GameAction::Interact,
            GameAction::Details,
            GameAction::Interact,
            GameAction::Cancel,
            GameAction::Details,
            GameAction::Interact,
            GameAction::Cancel,
            GameAction::Cancel,
        ];
        for action in script {
            apply(&mut state, &world, action);
            let open = [
                state.dialogue().is_some(),
                matches!(state.overlay, Overlay::Detail { .. }),
            ];
            assert!(open.iter().filter(|o| **o).count() <= 1);
        }
        assert_eq!(state.overlay, Overlay::None);
    }

    #[test]
    fn details_during_dialogue_switches_to_panel() {
        let world = small_world();
        let mut state = next_to_npc(&world);
        apply(&mut state, &world, GameAction::Interact);
        let events = apply(&mut state, &world, GameAction::Details);
        assert_eq!(
            events,
            vec![
                GameEvent::DialogueClosed { npc: NpcId(0) },
                GameEvent::DetailOpened { npc: NpcId(0) },
            ]
        );
        assert_eq!(state.ui_mode(), UiMode::Detail);
    }

    #[test]
    fn detail_open_and_close_are_idempotent() {
        let world = small_world();
        let mut state = next_to_npc(&world);
        assert_eq!(open_detail(&mut state, NpcId(0)).len(), 1);
        assert!(open_detail(&mut state, NpcId(0)).is_empty());
        assert!(apply(&mut state, &world, GameAction::Details).is_empty());
        assert_eq!(close_overlay(&mut state), vec![GameEvent::DetailClosed { npc: NpcId(0) }]);
        assert!(close_overlay(&mut state).is_empty());
    }

    #[test]
    fn unknown_npc_opens_nothing() {
        let world = small_world();
        let mut state = GameState::new(&world);
        assert!(open_dialogue(&mut state, &world, NpcId(9)).is_empty());
        assert_eq!(state.overlay, Overlay::None);
    }

    // -- step ----------------------------------------------------------------

    #[test]
    fn overlay_freezes_the_player() {
        let world = small_world();
        let mut state = next_to_npc(&world);
        step(&mut state, &world, &press(GameAction::Interact), DT);
        let start = state.player.position;
        let walk = TickInput {
            held: HeldDirections::only(Direction::Down),
            actions: Vec::new(),
        };
        for _ in 0..30 {
            step(&mut state, &world, &walk, DT);
        }
        assert_eq!(state.player.position, start);
        assert!(!state.player.is_moving);
    }

    #[test]
    fn typewriter_advances_with_steps() {
        let world = small_world();
        let mut state = next_to_npc(&world);
        step(&mut state, &world, &press(GameAction::Interact), 0.0);
        assert_eq!(state.dialogue().map(DialogueSession::revealed_chars), Some(0));
        step(&mut state, &world, &TickInput::default(), 0.013);
        assert_eq!(state.dialogue().map(DialogueSession::visible_text), Some("on"));
    }

    #[test]
    fn walking_into_range_reports_nearby() {
        let world = small_world();
        let mut state = GameState::new(&world);
        let right = TickInput {
            held: HeldDirections::only(Direction::Right),
            actions: Vec::new(),
        };
        let mut seen = Vec::new();
        for _ in 0..120 {
            seen.extend(step(&mut state, &world, &right, DT));
        }
        assert_eq!(state.nearby, Some(NpcId(0)));
        assert_eq!(seen.first(), Some(&GameEvent::NearbyChanged { npc: Some(NpcId(0)) }));
        assert!(state.player.position.x < world.map.tile_center(TilePos::new(13, 6)).x);
    }

    // -- determinism ---------------------------------------------------------

    #[test]
    fn identical_input_sequences_produce_identical_states() {
        let world = World::town(&content::PORTFOLIO, GameConfig::default());
        let mut recording = Vec::new();
        for i in 0..240 {
            let held = match i / 40 {
                0 => HeldDirections::only(Direction::Right),
                1 => HeldDirections::only(Direction::Up),
                2 => HeldDirections {
                    down: true,
                    left: true,
                    ..HeldDirections::NONE
                },
                _ => HeldDirections::only(Direction::Right),
            };
            let actions = match i % 25 {
                0 => vec![GameAction::Interact],
                7 => vec![GameAction::Details],
                13 => vec![GameAction::Cancel],
                _ => Vec::new(),
            };
            recording.push(TickInput { held, actions });
        }

        let run = || {
            let mut state = GameState::new(&world);
            let mut events = Vec::new();
            for input in &recording {
                events.extend(step(&mut state, &world, input, DT));
            }
            (state, events)
        };

        assert_eq!(run(), run());
    }
}
