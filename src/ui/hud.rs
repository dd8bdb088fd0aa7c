//! Sandbox heads-up display: minimap, interaction prompt, control hints,
//! NPC legend and the on-screen touch controls.

use super::{section_color, tile_color};
use crate::entity::{Direction, TilePos, WorldPos};
use crate::game::map::TileMap;
use crate::game::player::HeldDirections;
use crate::game::{GameAction, GameState, UiMode, World};
use egui::{Align2, Color32, Pos2, Stroke, vec2};

/// Side of one minimap cell in screen points.
pub const MINIMAP_CELL: f32 = 8.0;

pub const CONTROL_HINTS: [(&str, &str); 4] = [
    ("WASD", "Move"),
    ("J", "Talk"),
    ("K", "Details"),
    ("Esc", "Close"),
];

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Minimap cell under a world position, clamped onto the map.
pub fn minimap_cell(map: &TileMap, pos: WorldPos) -> TilePos {
    let tile = map.world_to_tile(pos);
    TilePos::new(
        tile.x.clamp(0, (map.width() - 1).max(0)),
        tile.y.clamp(0, (map.height() - 1).max(0)),
    )
}

/// Screen center of a minimap cell whose top-left corner is at `origin`.
pub fn minimap_point(origin: Pos2, cell: TilePos, cell_size: f32) -> Pos2 {
    Pos2::new(
        origin.x + (cell.x as f32 + 0.5) * cell_size,
        origin.y + (cell.y as f32 + 0.5) * cell_size,
    )
}

/// The "press J" prompt, shown only while exploring next to an NPC.
pub fn prompt_text(state: &GameState, world: &World) -> Option<String> {
    if state.ui_mode() != UiMode::Exploring {
        return None;
    }
    let npc = world.registry.get(state.nearby?)?;
    Some(format!("Press J to talk to {} · K for details", npc.name))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn show(ctx: &egui::Context, world: &World, state: &GameState) {
    show_minimap(ctx, world, state);
    show_controls(ctx, world);
    if let Some(text) = prompt_text(state, world) {
        egui::Area::new(egui::Id::new("hud_prompt"))
            .anchor(Align2::CENTER_BOTTOM, vec2(0.0, -24.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.strong(text);
                });
            });
    }
}

fn show_minimap(ctx: &egui::Context, world: &World, state: &GameState) {
    let map = &world.map;
    egui::Area::new(egui::Id::new("hud_minimap"))
        .anchor(Align2::RIGHT_TOP, vec2(-12.0, 12.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                let size = vec2(
                    map.width() as f32 * MINIMAP_CELL,
                    map.height() as f32 * MINIMAP_CELL,
                );
                let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
                let origin = response.rect.min;

                for (tile, code) in map.cells() {
                    let min = Pos2::new(
                        origin.x + tile.x as f32 * MINIMAP_CELL,
                        origin.y + tile.y as f32 * MINIMAP_CELL,
                    );
                    let cell = egui::Rect::from_min_size(min, vec2(MINIMAP_CELL, MINIMAP_CELL));
                    painter.rect_filled(cell, 0.0, tile_color(code));
                }

                for (_, npc) in world.registry.iter() {
                    let center = minimap_point(origin, npc.tile, MINIMAP_CELL);
                    painter.circle_filled(center, MINIMAP_CELL * 0.4, section_color(npc.section));
                }

                let player = minimap_point(origin, minimap_cell(map, state.player.position), MINIMAP_CELL);
                painter.circle_filled(player, MINIMAP_CELL * 0.45, Color32::WHITE);
                painter.circle_stroke(player, MINIMAP_CELL * 0.45, Stroke::new(1.0, Color32::BLACK));
            });
        });
}

fn show_controls(ctx: &egui::Context, world: &World) {
    egui::Area::new(egui::Id::new("hud_controls"))
        .anchor(Align2::LEFT_TOP, vec2(12.0, 12.0))
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                for (key, what) in CONTROL_HINTS {
                    ui.horizontal(|ui| {
                        ui.monospace(key);
                        ui.label(what);
                    });
                }
                ui.separator();
                for (_, npc) in world.registry.iter() {
                    ui.horizontal(|ui| {
                        let (rect, _) = ui.allocate_exact_size(vec2(10.0, 10.0), egui::Sense::hover());
                        ui.painter().circle_filled(rect.center(), 5.0, section_color(npc.section));
                        ui.label(format!("{} · {}", npc.name, npc.detail_title));
                    });
                }
            });
        });
}

/// Draw the d-pad and action buttons. Returns the directions held on screen
/// and the buttons pressed this frame.
pub fn show_touch_controls(ctx: &egui::Context) -> (HeldDirections, Vec<GameAction>) {
    let mut held = HeldDirections::NONE;
    let mut actions = Vec::new();
    let button = vec2(44.0, 44.0);

    egui::Area::new(egui::Id::new("touch_dpad"))
        .anchor(Align2::LEFT_BOTTOM, vec2(16.0, -16.0))
        .show(ctx, |ui| {
            let mut pad = |ui: &mut egui::Ui, label: &str, direction: Direction| {
                let response = ui.add_sized(button, egui::Button::new(label));
                if response.is_pointer_button_down_on() {
                    held.set(direction, true);
                }
            };
            egui::Grid::new("dpad_grid").spacing(vec2(4.0, 4.0)).show(ui, |ui| {
                ui.label("");
                pad(ui, "⏶", Direction::Up);
                ui.label("");
                ui.end_row();
                pad(ui, "⏴", Direction::Left);
                ui.label("");
                pad(ui, "⏵", Direction::Right);
                ui.end_row();
                ui.label("");
                pad(ui, "⏷", Direction::Down);
                ui.label("");
                ui.end_row();
            });
        });

    egui::Area::new(egui::Id::new("touch_actions"))
        .anchor(Align2::RIGHT_BOTTOM, vec2(-16.0, -16.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (label, action) in [
                    ("Esc", GameAction::Cancel),
                    ("K", GameAction::Details),
                    ("J", GameAction::Interact),
                ] {
                    if ui.add_sized(button, egui::Button::new(label)).clicked() {
                        actions.push(action);
                    }
                }
            });
        });

    (held, actions)
}
