//! Painter rendering of the town: tiles, NPCs with name tags and the avatar.

use super::{build_spatial_index, section_color, tile_color};
use crate::entity::WorldPos;
use crate::game::map::Tile;
use crate::game::player::{Pose, SpriteFrame, SpriteSheet};
use crate::game::{GameState, World};
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2, vec2};

/// Maps world units onto a screen rect, keeping the aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub origin: Pos2,
    pub scale: f32,
}

impl Viewport {
    /// Largest scale at which the whole world fits inside `rect`, centered.
    pub fn fit(rect: Rect, world_size: (f32, f32)) -> Self {
        let (w, h) = world_size;
        let scale = if w > 0.0 && h > 0.0 {
            (rect.width() / w).min(rect.height() / h).max(0.0)
        } else {
            1.0
        };
        let used = vec2(w * scale, h * scale);
        Self {
            origin: rect.center() - used / 2.0,
            scale,
        }
    }

    pub fn to_screen(self, pos: WorldPos) -> Pos2 {
        self.origin + vec2(pos.x, pos.y) * self.scale
    }
}

pub fn show(ui: &mut egui::Ui, world: &World, state: &GameState, time: f64) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
    let view = Viewport::fit(response.rect, world.map.world_size());
    let tile = world.map.tile_size() * view.scale;
    let index = build_spatial_index(&world.registry);

    for (pos, code) in world.map.cells() {
        let min = view.to_screen(WorldPos::new(
            pos.x as f32 * world.map.tile_size(),
            pos.y as f32 * world.map.tile_size(),
        ));
        let cell = Rect::from_min_size(min, Vec2::splat(tile));
        painter.rect_filled(cell, 0.0, tile_color(code));
        paint_tile_detail(&painter, cell, Tile::from_code(code));
    }

    // Second pass so name tags are never covered by later tiles.
    for (pos, _) in world.map.cells() {
        let Some(npc) = index.get(&pos).and_then(|id| world.registry.get(*id)) else {
            continue;
        };
        let phase = f64::from(pos.x * 7 + pos.y * 3);
        let bob = ((time * 2.0 + phase).sin() as f32) * tile * 0.05;
        let center = view.to_screen(world.map.tile_center(pos)) + vec2(0.0, bob);
        let color = section_color(npc.section);

        painter.circle_filled(center + vec2(0.0, tile * 0.35), tile * 0.3, Color32::from_black_alpha(60));
        painter.circle_filled(center + vec2(0.0, tile * 0.1), tile * 0.28, color);
        painter.circle_filled(center - vec2(0.0, tile * 0.22), tile * 0.18, skin());
        painter.circle_stroke(center + vec2(0.0, tile * 0.1), tile * 0.28, Stroke::new(1.0, Color32::BLACK));

        let tag = center - vec2(0.0, tile * 0.6);
        let font = FontId::proportional((tile * 0.35).max(9.0));
        let galley = painter.layout_no_wrap(npc.name.clone(), font, Color32::WHITE);
        let text_rect = Align2::CENTER_BOTTOM.anchor_size(tag, galley.size());
        painter.rect_filled(text_rect.expand(2.0), 3.0, Color32::from_black_alpha(160));
        painter.galley(text_rect.min, galley, Color32::WHITE);
    }

    let center = view.to_screen(state.player.position);
    paint_avatar(&painter, center, tile, state.player.sprite());
}

fn paint_tile_detail(painter: &egui::Painter, cell: Rect, tile: Option<Tile>) {
    let c = cell.center();
    let s = cell.width();
    match tile {
        Some(Tile::Tree) => {
            painter.circle_filled(c, s * 0.42, Color32::from_rgb(0x1f, 0x44, 0x1b));
            painter.circle_filled(c - vec2(s * 0.1, s * 0.1), s * 0.2, Color32::from_rgb(0x3a, 0x75, 0x33));
        }
        Some(Tile::Flowers) => {
            for (dx, dy) in [(-0.25, -0.2), (0.2, -0.25), (0.0, 0.15), (-0.2, 0.25), (0.25, 0.2)] {
                painter.circle_filled(c + vec2(dx * s, dy * s), s * 0.08, Color32::from_rgb(0xff, 0xf0, 0x60));
            }
        }
        Some(Tile::Building) => {
            let roof = Rect::from_min_max(cell.min, Pos2::new(cell.max.x, cell.min.y + s * 0.3));
            painter.rect_filled(roof, 0.0, Color32::from_rgb(0x7a, 0x2e, 0x1a));
        }
        Some(Tile::Water) => {
            painter.line_segment(
                [c - vec2(s * 0.25, 0.0), c + vec2(s * 0.25, 0.0)],
                Stroke::new(1.0, Color32::from_rgb(0xbf, 0xe0, 0xff)),
            );
        }
        _ => {}
    }
}

fn skin() -> Color32 {
    Color32::from_rgb(0xf2, 0xc9, 0xa0)
}

/// Procedural stand-in for the sprite sheet: a shirt, a head and two feet
/// that lean with the walk pose.
fn paint_avatar(painter: &egui::Painter, center: Pos2, tile: f32, sprite: SpriteFrame) {
    let flip = if sprite.mirrored { -1.0 } else { 1.0 };
    let lean = match sprite.pose {
        Pose::LeftLean => -1.0,
        Pose::Neutral => 0.0,
        Pose::RightLean => 1.0,
    };

    painter.circle_filled(center + vec2(0.0, tile * 0.38), tile * 0.28, Color32::from_black_alpha(60));

    let foot = tile * 0.09;
    for side in [-1.0_f32, 1.0] {
        let step = if side * lean > 0.0 { -tile * 0.08 } else { 0.0 };
        painter.circle_filled(
            center + vec2(side * tile * 0.12, tile * 0.32 + step),
            foot,
            Color32::from_rgb(0x30, 0x30, 0x40),
        );
    }

    let body = Rect::from_center_size(center + vec2(0.0, tile * 0.1), vec2(tile * 0.45, tile * 0.4));
    painter.rect_filled(body, tile * 0.1, Color32::from_rgb(0xd9, 0x3b, 0x3b));

    let head = center - vec2(0.0, tile * 0.2);
    painter.circle_filled(head, tile * 0.2, skin());
    let cap = Rect::from_center_size(head - vec2(0.0, tile * 0.12), vec2(tile * 0.42, tile * 0.12));
    painter.rect_filled(cap, tile * 0.05, Color32::from_rgb(0xd9, 0x3b, 0x3b));

    let eye = Color32::from_rgb(0x20, 0x20, 0x20);
    let r = tile * 0.03;
    match sprite.sheet {
        SpriteSheet::Front => {
            painter.circle_filled(head + vec2(-tile * 0.07, 0.0), r, eye);
            painter.circle_filled(head + vec2(tile * 0.07, 0.0), r, eye);
        }
        SpriteSheet::Back => {}
        // Side art faces left; `flip` turns it around.
        SpriteSheet::Side => {
            painter.circle_filled(head + vec2(-flip * tile * 0.1, 0.0), r, eye);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_fits_and_centers() {
        let rect = Rect::from_min_size(Pos2::ZERO, vec2(1280.0, 480.0));
        let view = Viewport::fit(rect, (640.0, 480.0));
        assert!((view.scale - 1.0).abs() < 1e-6);
        assert_eq!(view.origin, Pos2::new(320.0, 0.0));
        assert_eq!(view.to_screen(WorldPos::new(640.0, 480.0)), Pos2::new(960.0, 480.0));
    }

    #[test]
    fn viewport_scales_down_to_the_tighter_axis() {
        let rect = Rect::from_min_size(Pos2::new(10.0, 10.0), vec2(320.0, 480.0));
        let view = Viewport::fit(rect, (640.0, 480.0));
        assert!((view.scale - 0.5).abs() < 1e-6);
        assert_eq!(view.to_screen(WorldPos::new(0.0, 0.0)), Pos2::new(10.0, 130.0));
    }
}
